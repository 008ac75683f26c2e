//! # CLI Command Implementations
//!
//! This module contains the implementation of the `htconf` command-line
//! surface. Each command lives in its own file.
//!
//! ## Structure
//!
//! Each command module contains:
//! - The `clap` derive types for the edit operations and their arguments.
//! - Helpers turning those arguments, `-e` expressions or an edit script into
//!   library edit specs.
//! - An `execute` function that runs the edits through the `htconf` library.

pub mod edit;
