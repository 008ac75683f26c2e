//! Edit command implementation
//!
//! Handles the three ways of describing edits:
//!
//! 1. A single operation: `htconf set Dir2 -v Off`
//! 2. Chained expressions: `htconf -e "disable Dir2" -e "add Dir9 -v On"`
//! 3. A YAML edit script: `htconf --script edits.yaml`
//!
//! All edits are compiled before any input is read, then applied to stdin
//! (written to stdout) or to the file given with `-f`.

use anyhow::{bail, Result};
use clap::{Args, Parser, Subcommand};
use std::io;
use std::path::{Path, PathBuf};

use htconf::chain::EditChain;
use htconf::config::{self, EditSpec, Operation};
use htconf::error::Error;
use htconf::expression;
use htconf::filesystem::{edit_file, edit_stream, FileOutcome};

/// Arguments shared by every edit operation
#[derive(Args, Debug, Clone)]
pub struct EditArgs {
    /// Directive name; enclose a section directive name in "<" and ">"
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Value of the directive to set (repeatable, kept in order)
    #[arg(short = 'v', long = "value", value_name = "VALUE", allow_hyphen_values = true)]
    pub values: Vec<String>,

    /// Value the directive must already have (repeatable, matched in order)
    #[arg(short = 'w', long = "with", value_name = "VALUE", allow_hyphen_values = true)]
    pub with: Vec<String>,

    /// Restrict the edit to a section, as NAME or NAME:VALUE
    #[arg(short = 's', long = "section", value_name = "SECTION")]
    pub section: Option<String>,
}

/// The edit operations
#[derive(Subcommand, Debug, Clone)]
pub enum EditCommand {
    /// Add a directive at the end of the text, or at the end of a section
    Add(EditArgs),
    /// Set the values of matching directives
    Set(EditArgs),
    /// Comment out matching directives
    Disable(EditArgs),
    /// Uncomment matching directives, optionally setting their values
    Enable(EditArgs),
}

impl EditCommand {
    /// Turn the parsed arguments into a library edit spec.
    pub fn to_spec(&self) -> htconf::error::Result<EditSpec> {
        let (operation, args) = match self {
            EditCommand::Add(args) => (Operation::Add, args),
            EditCommand::Set(args) => (Operation::Set, args),
            EditCommand::Disable(args) => (Operation::Disable, args),
            EditCommand::Enable(args) => (Operation::Enable, args),
        };

        EditSpec::from_parts(
            operation,
            &args.name,
            args.values.clone(),
            args.with.clone(),
            args.section.as_deref(),
        )
    }
}

/// Grammar of a single `-e` expression
#[derive(Parser, Debug)]
#[command(name = "htconf -e", no_binary_name = true)]
struct Expression {
    #[command(subcommand)]
    command: EditCommand,
}

/// Parse one `-e` expression into an edit spec.
pub fn parse_expression(expression: &str) -> htconf::error::Result<EditSpec> {
    let args = expression::split(expression)?;

    let Some(keyword) = args.first() else {
        return Err(Error::Expression {
            expression: expression.to_string(),
            message: "empty expression".to_string(),
        });
    };
    // Report an unknown keyword as such rather than as a clap usage error.
    keyword.parse::<Operation>()?;

    let parsed = Expression::try_parse_from(&args).map_err(|e| Error::Expression {
        expression: expression.to_string(),
        message: first_line(&e.to_string()),
    })?;
    parsed.command.to_spec()
}

fn first_line(message: &str) -> String {
    let line = message.lines().next().unwrap_or_default();
    line.strip_prefix("error: ").unwrap_or(line).to_string()
}

/// Collect the edit specs from whichever source was given.
pub fn collect_specs(
    command: Option<&EditCommand>,
    expressions: &[String],
    script: Option<&Path>,
) -> Result<Vec<EditSpec>> {
    let sources = usize::from(command.is_some())
        + usize::from(!expressions.is_empty())
        + usize::from(script.is_some());
    if sources > 1 {
        bail!(Error::Usage {
            message: "use only one of an operation, -e expressions or --script".to_string(),
        });
    }

    let specs = if let Some(command) = command {
        vec![command.to_spec()?]
    } else if let Some(path) = script {
        config::from_file(path)?
    } else {
        expressions
            .iter()
            .map(|e| parse_expression(e))
            .collect::<htconf::error::Result<Vec<_>>>()?
    };

    if specs.is_empty() {
        bail!(Error::Usage {
            message: "no edit operation given (see --help)".to_string(),
        });
    }
    Ok(specs)
}

/// Execute the edits against stdin/stdout or the given file
pub fn execute(specs: Vec<EditSpec>, file: Option<PathBuf>) -> Result<()> {
    let chain = EditChain::from_specs(specs)?;

    match file {
        Some(path) => {
            let outcome = edit_file(&chain, &path)?;
            if outcome == FileOutcome::Unchanged {
                log::info!("{}: nothing to change", path.display());
            }
        }
        None => edit_stream(&chain, io::stdin().lock(), io::stdout().lock())?,
    }

    Ok(())
}
