//! # Error Handling
//!
//! This module defines the error type shared by every part of the `htconf`
//! library. It uses `thiserror` to derive descriptive messages for each
//! failure mode.
//!
//! ## Key Components
//!
//! - **`Error`**: All failures the editor can report. Each variant carries the
//!   context needed to explain the problem on the error stream.
//!
//! - **`Result<T>`**: A type alias for `std::result::Result<T, Error>`.
//!
//! Note that there is no "directive not found" variant. An edit that matches
//! nothing leaves the text unchanged and is reported as success.

use thiserror::Error;

/// Main error type for htconf operations
#[derive(Error, Debug)]
pub enum Error {
    /// Missing or malformed arguments.
    #[error("Usage error: {message}")]
    Usage { message: String },

    /// The operation keyword is not one of `add`, `set`, `disable`, `enable`.
    #[error("Unknown operation ({operation})")]
    UnknownOperation { operation: String },

    /// A section directive (`<Name>`) was combined with an operation other
    /// than `set`.
    #[error("Unsupported operation ({operation} <{directive}>)")]
    IllegalCombination {
        operation: String,
        directive: String,
    },

    /// An `-e` expression could not be split or parsed.
    #[error("Invalid expression '{expression}': {message}")]
    Expression { expression: String, message: String },

    /// An edit script was readable YAML but not a valid list of edits.
    #[error("Edit script error: {message}")]
    Script { message: String },

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A regular expression error, wrapped from `regex::Error`.
    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),

    /// A YAML parsing error, wrapped from `serde_yaml::Error`.
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
