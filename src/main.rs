//! # htconf CLI
//!
//! This is the binary entry point for the `htconf` command-line tool.
//!
//! Its primary responsibilities are:
//! - Parsing command-line arguments using `clap`.
//! - Executing the requested edits.
//! - Handling top-level errors and translating them into a diagnostic on
//!   stderr and a non-zero exit status.
//!
//! The editing logic lives in the `htconf` library crate; the binary is a thin
//! wrapper around it.

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli.execute()
}
