//! Line pattern construction
//!
//! Every edit is driven by a handful of anchored regular expressions built
//! once from the edit's arguments:
//!
//! - a *target* pattern recognising the directive line to rewrite, optionally
//!   constrained by the values it must already carry (the "with" filter);
//! - a *section start* pattern recognising the opening tag of the scope
//!   section, when the edit is scoped.
//!
//! Patterns are matched against a line without its terminator.

use regex::Regex;

use crate::config::SectionScope;
use crate::error::Result;
use crate::escape::escape_for_match;

/// The shape of line a target pattern looks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetKind {
    /// `Name value ...`
    Directive,
    /// `#Name value ...`
    DisabledDirective,
    /// `<Name value ...>`
    SectionOpening,
}

/// Render a with-filter list as a pattern fragment.
///
/// Each value becomes ` +<escaped>`, so the values must follow the name in
/// order, separated by one or more spaces. No end anchor is added: a line
/// carrying more values than the filter names still matches.
pub fn with_fragment(with: &[String]) -> String {
    with.iter()
        .map(|value| format!(" +{}", escape_for_match(value)))
        .collect()
}

/// Build the source text of a target pattern.
pub fn target_source(kind: TargetKind, name: &str, with: &[String]) -> String {
    let prefix = match kind {
        TargetKind::Directive => "",
        TargetKind::DisabledDirective => "#",
        TargetKind::SectionOpening => "<",
    };

    let mut source = format!("^[ \\t]*{}{}", prefix, regex::escape(name));
    if with.is_empty() {
        // Without values to anchor on, the name must end here.
        match kind {
            TargetKind::SectionOpening => source.push_str(r"(?:[\s>/]|$)"),
            _ => source.push_str(r"(?:\s|$)"),
        }
    } else {
        source.push_str(&with_fragment(with));
    }
    source
}

/// Compile a target pattern.
pub fn target_pattern(kind: TargetKind, name: &str, with: &[String]) -> Result<Regex> {
    Ok(Regex::new(&target_source(kind, name, with))?)
}

/// Build the source text of a section start pattern.
///
/// With a value the pattern is `^([ \t]*)<(Name) +(value)`, capturing the
/// indentation. Without one it matches any opening of the section that
/// carries some argument: `^[ \t]*<Name .+>`.
pub fn section_start_source(scope: &SectionScope) -> String {
    let name = regex::escape(&scope.name);
    match &scope.value {
        Some(value) => format!("^([ \\t]*)<({}) +({})", name, escape_for_match(value)),
        None => format!("^[ \\t]*<{} .+>", name),
    }
}

/// Compile a section start pattern.
pub fn section_start_pattern(scope: &SectionScope) -> Result<Regex> {
    Ok(Regex::new(&section_start_source(scope))?)
}

/// The literal prefix of the line that closes a section opened at `indent`.
pub fn section_end_tag(indent: &str, name: &str) -> String {
    format!("{}</{}>", indent, name)
}
