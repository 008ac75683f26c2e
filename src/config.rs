//! # Edit Configuration and Parsing
//!
//! This module defines the data structures that describe a single edit, as
//! well as the YAML edit-script format used to describe a whole chain.
//!
//! ## Key Components
//!
//! - **`Operation`**: The four edit keywords (`add`, `set`, `disable`,
//!   `enable`).
//! - **`Directive`**: The target name. A token written `<Name>` refers to a
//!   section directive and is only valid with `set`.
//! - **`SectionScope`**: The optional `-s NAME[:VALUE]` restriction.
//! - **`EditSpec`**: Everything one edit needs, passed explicitly to
//!   [`crate::editor::Editor::new`].
//! - **`Script`**: A sequence of [`ScriptEntry`] values parsed from YAML, one
//!   per edit, applied in order.
//!
//! ## Script Format
//!
//! ```yaml
//! - set:
//!     directive: Dir4
//!     values: [On]
//!     with: [Off]
//!     section: "Sec2:/var/www"
//! - disable:
//!     directive: Dir2
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// The edit keyword selecting what happens to matching lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// Append a new directive (at the end of the stream or of a section).
    Add,
    /// Replace the values of matching directives.
    Set,
    /// Comment out matching directives.
    Disable,
    /// Uncomment matching directives, optionally replacing their values.
    Enable,
}

impl Operation {
    /// The keyword as typed on the command line.
    pub fn keyword(self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Set => "set",
            Operation::Disable => "disable",
            Operation::Enable => "enable",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

impl FromStr for Operation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "add" => Ok(Operation::Add),
            "set" => Ok(Operation::Set),
            "disable" => Ok(Operation::Disable),
            "enable" => Ok(Operation::Enable),
            other => Err(Error::UnknownOperation {
                operation: other.to_string(),
            }),
        }
    }
}

/// A directive reference: a plain directive name or a section name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directive {
    pub name: String,
    pub is_section: bool,
}

impl Directive {
    /// Parse a directive token.
    ///
    /// `<Name>` (word characters only) names a section directive; any other
    /// non-empty token names a plain directive.
    pub fn parse(token: &str) -> Result<Self> {
        if token.is_empty() {
            return Err(Error::Usage {
                message: "directive name must not be empty".to_string(),
            });
        }

        let section_name = token
            .strip_prefix('<')
            .and_then(|rest| rest.strip_suffix('>'))
            .filter(|name| !name.is_empty() && name.chars().all(is_word_char));

        Ok(match section_name {
            Some(name) => Directive {
                name: name.to_string(),
                is_section: true,
            },
            None => Directive {
                name: token.to_string(),
                is_section: false,
            },
        })
    }
}

fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}

/// The section an edit is restricted to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionScope {
    pub name: String,
    pub value: Option<String>,
}

impl SectionScope {
    /// Parse a `NAME` or `NAME:VALUE` scope specification.
    ///
    /// Splits at the first colon only, so `VirtualHost:*:80` keeps `*:80` as
    /// the value.
    pub fn parse(spec: &str) -> Result<Self> {
        let (name, value) = match spec.split_once(':') {
            Some((name, value)) => (name, Some(value.to_string())),
            None => (spec, None),
        };

        if name.is_empty() {
            return Err(Error::Usage {
                message: format!("section '{}' has no name", spec),
            });
        }

        Ok(SectionScope {
            name: name.to_string(),
            value,
        })
    }
}

/// A fully configured edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSpec {
    pub operation: Operation,
    pub directive: Directive,
    /// Values to write, in order (`-v`).
    pub values: Vec<String>,
    /// Values a line must already carry to be matched (`-w`).
    pub with: Vec<String>,
    /// Optional section restriction (`-s`).
    pub section: Option<SectionScope>,
}

impl EditSpec {
    /// Build a spec from raw command-line style pieces.
    pub fn from_parts(
        operation: Operation,
        directive: &str,
        values: Vec<String>,
        with: Vec<String>,
        section: Option<&str>,
    ) -> Result<Self> {
        Ok(EditSpec {
            operation,
            directive: Directive::parse(directive)?,
            values,
            with,
            section: section.map(SectionScope::parse).transpose()?,
        })
    }
}

/// Parameters shared by every script entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScriptEdit {
    /// Directive name, `<Name>` for a section directive.
    pub directive: String,
    #[serde(default, deserialize_with = "scalar_list")]
    pub values: Vec<String>,
    #[serde(default, deserialize_with = "scalar_list")]
    pub with: Vec<String>,
    /// `NAME` or `NAME:VALUE`.
    #[serde(default)]
    pub section: Option<String>,
}

/// Read a list of plain YAML scalars as strings, so `values: [8080]` means
/// `"8080"`.
fn scalar_list<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Vec::<serde_yaml::Value>::deserialize(deserializer)?
        .into_iter()
        .map(|item| match item {
            serde_yaml::Value::String(s) => Ok(s),
            serde_yaml::Value::Number(n) => Ok(n.to_string()),
            serde_yaml::Value::Bool(b) => Ok(b.to_string()),
            other => Err(serde::de::Error::custom(format!(
                "expected a scalar value, found {:?}",
                other
            ))),
        })
        .collect()
}

/// One entry of an edit script: a single-key map naming the operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged, deny_unknown_fields)]
pub enum ScriptEntry {
    /// Append a directive.
    Add { add: ScriptEdit },
    /// Replace the values of matching directives or section openings.
    Set { set: ScriptEdit },
    /// Comment out matching directives.
    Disable { disable: ScriptEdit },
    /// Uncomment matching directives.
    Enable { enable: ScriptEdit },
}

impl ScriptEntry {
    /// Convert the entry into an [`EditSpec`].
    pub fn to_spec(&self) -> Result<EditSpec> {
        let (operation, edit) = match self {
            ScriptEntry::Add { add } => (Operation::Add, add),
            ScriptEntry::Set { set } => (Operation::Set, set),
            ScriptEntry::Disable { disable } => (Operation::Disable, disable),
            ScriptEntry::Enable { enable } => (Operation::Enable, enable),
        };

        EditSpec::from_parts(
            operation,
            &edit.directive,
            edit.values.clone(),
            edit.with.clone(),
            edit.section.as_deref(),
        )
    }
}

/// An ordered list of edits.
pub type Script = Vec<ScriptEntry>;

/// Parse an edit script from YAML text.
pub fn parse(yaml: &str) -> Result<Script> {
    let script: Script = serde_yaml::from_str(yaml)?;
    if script.is_empty() {
        return Err(Error::Script {
            message: "script contains no edits".to_string(),
        });
    }
    Ok(script)
}

/// Parse an edit script from YAML text straight into edit specs.
pub fn parse_specs(yaml: &str) -> Result<Vec<EditSpec>> {
    parse(yaml)?.iter().map(ScriptEntry::to_spec).collect()
}

/// Read and parse an edit script file.
pub fn from_file(path: &std::path::Path) -> Result<Vec<EditSpec>> {
    let content = std::fs::read_to_string(path)?;
    parse_specs(&content)
}
