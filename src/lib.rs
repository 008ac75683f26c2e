//! # htconf Library
//!
//! This library edits Apache-style hierarchical configuration text: it adds,
//! sets, enables and disables directives and section openings while leaving
//! every other line exactly as it was. It backs the `htconf` command-line
//! tool but can be used on its own.
//!
//! ## Quick Example
//!
//! ```
//! use htconf::chain::EditChain;
//! use htconf::config::{EditSpec, Operation};
//!
//! let set = EditSpec::from_parts(
//!     Operation::Set,
//!     "Listen",
//!     vec!["8080".to_string()],
//!     Vec::new(),
//!     Some("VirtualHost:*:80"),
//! )
//! .unwrap();
//! let chain = EditChain::from_specs(vec![set]).unwrap();
//!
//! let text = "Listen 80\n<VirtualHost *:80>\n    Listen 80\n</VirtualHost>\n";
//! assert_eq!(
//!     chain.apply(text),
//!     "Listen 80\n<VirtualHost *:80>\n    Listen 8080\n</VirtualHost>\n"
//! );
//! ```
//!
//! ## Core Concepts
//!
//! The editor works on lines and patterns, not on a parsed tree:
//!
//! - **Escaping (`escape`)**: Values are quoted for the file and escaped for
//!   matching.
//! - **Patterns (`pattern`)**: Each edit builds its anchored line patterns
//!   once, from the directive name, the required existing values ("with"
//!   filter) and the optional scope section.
//! - **Scanning (`scanner`)**: A single forward pass tracks whether the
//!   current line is inside the scope section.
//! - **Editors (`editor`)**: The add/set/disable/enable behaviors, selected
//!   through a closed enum.
//! - **Chains (`chain`)**: Several edits applied in order, each to the
//!   previous one's output.
//! - **Configuration (`config`, `expression`)**: Parsing of directive names,
//!   scopes, `-e` expressions and YAML edit scripts.
//! - **Files (`filesystem`)**: Stream editing and atomic in-place file edits.
//!
//! Limitations are those of a line editor: one directive per line and no
//! continuation lines.

pub mod chain;
pub mod config;
pub mod editor;
pub mod error;
pub mod escape;
pub mod expression;
pub mod filesystem;
pub mod pattern;
pub mod scanner;

#[cfg(test)]
mod escape_proptest;
