//! Section scope tracking
//!
//! A [`SectionScanner`] walks the lines of one pass in order and reports, for
//! each line, where it sits relative to the scope section:
//!
//! ```text
//!            start pattern matches            closing tag at recorded indent
//! OUTSIDE ----------------------------> INSIDE ------------------------------> OUTSIDE
//! ```
//!
//! The opening line itself counts as inside. The closing line is reported as
//! [`LinePosition::Closing`] and never as inside, so directive matching skips
//! it. The start pattern is tried on every line, inside or not. Nesting is
//! not tracked: an opening of the same section seen while inside replaces the
//! recorded indentation, so scope ends at the inner closing tag and the outer
//! section is not resumed.

use regex::Regex;

use crate::escape::leading_indent;
use crate::pattern::section_end_tag;

/// Where a line sits relative to the scope section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinePosition {
    Outside,
    /// The opening tag or a line within the section.
    Inside,
    /// The closing tag; carries the indentation of the section.
    Closing { indent: String },
}

/// Single-pass scope state for one edit.
#[derive(Debug)]
pub struct SectionScanner<'a> {
    start: &'a Regex,
    name: &'a str,
    /// `Some((indent, closing tag))` while inside.
    open: Option<(String, String)>,
}

impl<'a> SectionScanner<'a> {
    /// Start a pass outside any section.
    pub fn new(start: &'a Regex, name: &'a str) -> Self {
        Self {
            start,
            name,
            open: None,
        }
    }

    /// Classify the next line. `line` must not include its terminator.
    pub fn advance(&mut self, line: &str) -> LinePosition {
        if let Some(captures) = self.start.captures(line) {
            let indent = captures
                .get(1)
                .map_or_else(|| leading_indent(line), |m| m.as_str())
                .to_string();
            let closing = section_end_tag(&indent, self.name);
            self.open = Some((indent, closing));
            return LinePosition::Inside;
        }

        match self.open.take() {
            None => LinePosition::Outside,
            Some((indent, closing)) if line.starts_with(&closing) => {
                LinePosition::Closing { indent }
            }
            Some(open) => {
                self.open = Some(open);
                LinePosition::Inside
            }
        }
    }
}
