//! CLI argument parsing and command dispatch

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use crate::commands;
use crate::commands::edit::EditCommand;

/// Edit Apache configuration directives (stdin or file)
#[derive(Parser, Debug)]
#[command(name = "htconf")]
#[command(version, about, long_about = None, arg_required_else_help = true)]
#[command(after_help = "Examples:
  htconf set ServerName -v www.example.com < httpd.conf
  htconf disable Listen -w 8080 -f httpd.conf
  htconf -e \"disable Dir2\" -e \"add Dir9 -v On -s Sec1:/\" -f httpd.conf")]
pub struct Cli {
    /// Operation to perform
    #[command(subcommand)]
    command: Option<EditCommand>,

    /// Edit expression "OPERATION NAME [OPTIONS]"; repeat to chain edits
    #[arg(short = 'e', long = "expression", value_name = "ARGS", allow_hyphen_values = true)]
    expressions: Vec<String>,

    /// YAML file listing the edits to apply, in order
    #[arg(long, value_name = "PATH")]
    script: Option<PathBuf>,

    /// Edit this file in place instead of reading stdin and writing stdout
    #[arg(short = 'f', long = "file", value_name = "FILE", global = true, env = "HTCONF_FILE")]
    file: Option<PathBuf>,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(
        long,
        global = true,
        value_name = "LEVEL",
        default_value = "warn",
        env = "HTCONF_LOG_LEVEL"
    )]
    log_level: String,
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        init_logging(&self.log_level);

        let specs = commands::edit::collect_specs(
            self.command.as_ref(),
            &self.expressions,
            self.script.as_deref(),
        )?;
        commands::edit::execute(specs, self.file)
    }
}

/// Logs go to stderr; stdout carries the edited text.
fn init_logging(level: &str) {
    let env = env_logger::Env::default().default_filter_or(level);
    // A second initialization (e.g. in tests) is harmless.
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .target(env_logger::Target::Stderr)
        .try_init();
}
