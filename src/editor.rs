//! Edit operations
//!
//! An [`Editor`] is one [`EditSpec`] compiled into an [`EditForm`]: the
//! concrete behavior selected from the operation keyword, whether the target
//! is a section directive, and whether the edit is scoped to a section. All
//! patterns are built here, once, and reused for every line of the pass.
//!
//! | Operation | Unscoped | Scoped |
//! |---|---|---|
//! | add | append `Name values` at the end | insert before the section's closing tag, or append a new section |
//! | set | replace matching directive lines | same, inside the section only |
//! | set `<Name>` | replace matching section openings | same, inside the section only |
//! | disable | prefix matching lines with `#` | same, inside the section only |
//! | enable | strip `#` (or replace when values are given) | same, inside the section only |
//!
//! Lines that are not rewritten are copied through byte-for-byte. An edit that
//! matches nothing returns its input unchanged; that is not an error.

use log::{debug, info};
use regex::Regex;

use crate::config::{EditSpec, Operation, SectionScope};
use crate::error::{Error, Result};
use crate::escape::{escape_value, leading_indent, render_values};
use crate::pattern::{section_start_pattern, target_pattern, TargetKind};
use crate::scanner::{LinePosition, SectionScanner};

/// Indentation added to a directive inserted into a section.
const NESTED_INDENT: &str = "    ";

/// A scope section together with its compiled start pattern.
#[derive(Debug, Clone)]
pub struct ScopeMatcher {
    pub scope: SectionScope,
    pub start: Regex,
}

impl ScopeMatcher {
    pub fn new(scope: &SectionScope) -> Result<Self> {
        Ok(Self {
            scope: scope.clone(),
            start: section_start_pattern(scope)?,
        })
    }

    fn scanner(&self) -> SectionScanner<'_> {
        SectionScanner::new(&self.start, &self.scope.name)
    }
}

/// The concrete edit behaviors, each carrying the patterns it needs.
#[derive(Debug, Clone)]
pub enum EditForm {
    AddDirective,
    AddDirectiveWithSection(ScopeMatcher),
    SetDirective(Regex),
    SetDirectiveWithSection(Regex, ScopeMatcher),
    SetSection(Regex),
    SetSectionWithSection(Regex, ScopeMatcher),
    DisableDirective(Regex),
    DisableDirectiveWithSection(Regex, ScopeMatcher),
    EnableDirective(Regex),
    EnableDirectiveWithSection(Regex, ScopeMatcher),
}

impl EditForm {
    /// Select and compile the behavior for a spec.
    ///
    /// Fails with [`Error::IllegalCombination`] when a section directive is
    /// paired with anything but `set`.
    pub fn compile(spec: &EditSpec) -> Result<Self> {
        let directive = &spec.directive;
        let name = directive.name.as_str();
        let with = spec.with.as_slice();
        let scope = spec.section.as_ref().map(ScopeMatcher::new).transpose()?;

        let form = match (spec.operation, directive.is_section, scope) {
            (Operation::Add, false, None) => EditForm::AddDirective,
            (Operation::Add, false, Some(scope)) => EditForm::AddDirectiveWithSection(scope),
            (Operation::Set, false, None) => {
                EditForm::SetDirective(target_pattern(TargetKind::Directive, name, with)?)
            }
            (Operation::Set, false, Some(scope)) => EditForm::SetDirectiveWithSection(
                target_pattern(TargetKind::Directive, name, with)?,
                scope,
            ),
            (Operation::Set, true, None) => {
                EditForm::SetSection(target_pattern(TargetKind::SectionOpening, name, with)?)
            }
            (Operation::Set, true, Some(scope)) => EditForm::SetSectionWithSection(
                target_pattern(TargetKind::SectionOpening, name, with)?,
                scope,
            ),
            (Operation::Disable, false, None) => {
                EditForm::DisableDirective(target_pattern(TargetKind::Directive, name, with)?)
            }
            (Operation::Disable, false, Some(scope)) => EditForm::DisableDirectiveWithSection(
                target_pattern(TargetKind::Directive, name, with)?,
                scope,
            ),
            (Operation::Enable, false, None) => EditForm::EnableDirective(target_pattern(
                TargetKind::DisabledDirective,
                name,
                with,
            )?),
            (Operation::Enable, false, Some(scope)) => EditForm::EnableDirectiveWithSection(
                target_pattern(TargetKind::DisabledDirective, name, with)?,
                scope,
            ),
            (operation, true, _) => {
                return Err(Error::IllegalCombination {
                    operation: operation.to_string(),
                    directive: directive.name.clone(),
                })
            }
        };

        Ok(form)
    }

    /// A stable name for diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            EditForm::AddDirective => "add_directive",
            EditForm::AddDirectiveWithSection(_) => "add_directive_with_section",
            EditForm::SetDirective(_) => "set_directive",
            EditForm::SetDirectiveWithSection(..) => "set_directive_with_section",
            EditForm::SetSection(_) => "set_section",
            EditForm::SetSectionWithSection(..) => "set_section_with_section",
            EditForm::DisableDirective(_) => "disable_directive",
            EditForm::DisableDirectiveWithSection(..) => "disable_directive_with_section",
            EditForm::EnableDirective(_) => "enable_directive",
            EditForm::EnableDirectiveWithSection(..) => "enable_directive_with_section",
        }
    }
}

/// A compiled, reusable edit.
#[derive(Debug, Clone)]
pub struct Editor {
    spec: EditSpec,
    form: EditForm,
    /// The `-v` values rendered as they follow the name.
    rendered: String,
}

impl Editor {
    /// Compile an edit. No text is touched here, so every argument error
    /// surfaces before any input is read.
    pub fn new(spec: EditSpec) -> Result<Self> {
        let form = EditForm::compile(&spec)?;
        let rendered = render_values(&spec.values);
        debug!(
            "compiled {} for '{}' ({} value(s), {} filter(s))",
            form.name(),
            spec.directive.name,
            spec.values.len(),
            spec.with.len()
        );
        Ok(Self {
            spec,
            form,
            rendered,
        })
    }

    pub fn form(&self) -> &EditForm {
        &self.form
    }

    /// Apply the edit to a complete text and return the new text.
    pub fn edit_text(&self, text: &str) -> String {
        match &self.form {
            EditForm::AddDirective => self.append(text),
            EditForm::AddDirectiveWithSection(scope) => self.add_to_section(text, scope),
            EditForm::SetDirective(target) => {
                self.rewrite_lines(text, target, None, |line| self.directive_line(line))
            }
            EditForm::SetDirectiveWithSection(target, scope) => {
                self.rewrite_lines(text, target, Some(scope), |line| self.directive_line(line))
            }
            EditForm::SetSection(target) => {
                self.rewrite_lines(text, target, None, |line| self.section_line(line))
            }
            EditForm::SetSectionWithSection(target, scope) => {
                self.rewrite_lines(text, target, Some(scope), |line| self.section_line(line))
            }
            EditForm::DisableDirective(target) => {
                self.rewrite_lines(text, target, None, comment_out)
            }
            EditForm::DisableDirectiveWithSection(target, scope) => {
                self.rewrite_lines(text, target, Some(scope), comment_out)
            }
            EditForm::EnableDirective(target) => {
                self.rewrite_lines(text, target, None, |line| self.enabled_line(line))
            }
            EditForm::EnableDirectiveWithSection(target, scope) => {
                self.rewrite_lines(text, target, Some(scope), |line| self.enabled_line(line))
            }
        }
    }

    /// `Name values`, without indentation or terminator.
    fn directive_text(&self) -> String {
        format!("{}{}", self.spec.directive.name, self.rendered)
    }

    /// Replacement for a matched directive line, keeping its indentation.
    fn directive_line(&self, line: &str) -> String {
        format!("{}{}", leading_indent(line), self.directive_text())
    }

    /// Replacement for a matched section opening, keeping its indentation.
    fn section_line(&self, line: &str) -> String {
        format!(
            "{}<{}{}>",
            leading_indent(line),
            self.spec.directive.name,
            self.rendered
        )
    }

    fn enabled_line(&self, line: &str) -> String {
        if self.spec.values.is_empty() {
            uncomment(line)
        } else {
            self.directive_line(line)
        }
    }

    fn append(&self, text: &str) -> String {
        let mut output = String::with_capacity(text.len() + self.rendered.len() + 32);
        output.push_str(text);
        ensure_line_break(&mut output);
        output.push_str(&self.directive_text());
        output.push('\n');
        debug!("{}: appended '{}'", self.form.name(), self.spec.directive.name);
        output
    }

    /// Insert before every closing tag of the scope section, or append the
    /// section when it is absent.
    ///
    /// A section synthesized from a scope without a value is written as
    /// `<Name>`, which the valueless start pattern (`<Name .+>`) does not
    /// match, so repeating the same edit appends another section.
    fn add_to_section(&self, text: &str, scope: &ScopeMatcher) -> String {
        let directive = self.directive_text();
        let mut output = String::with_capacity(text.len() + directive.len() + 32);
        let mut scanner = scope.scanner();
        let mut inserted = 0usize;

        for line in text.split_inclusive('\n') {
            let (content, terminator) = split_terminator(line);
            if let LinePosition::Closing { indent } = scanner.advance(content) {
                output.push_str(&indent);
                output.push_str(NESTED_INDENT);
                output.push_str(&directive);
                output.push_str(line_break(terminator));
                inserted += 1;
            }
            output.push_str(line);
        }

        if inserted == 0 {
            let name = &scope.scope.name;
            info!(
                "section <{}> not found, appending it with '{}'",
                name, self.spec.directive.name
            );
            ensure_line_break(&mut output);
            match &scope.scope.value {
                Some(value) => output.push_str(&format!("<{} {}>\n", name, escape_value(value))),
                None => output.push_str(&format!("<{}>\n", name)),
            }
            output.push_str(NESTED_INDENT);
            output.push_str(&directive);
            output.push('\n');
            output.push_str(&format!("</{}>\n", name));
        } else {
            debug!(
                "{}: inserted into {} section(s)",
                self.form.name(),
                inserted
            );
        }

        output
    }

    /// Copy `text`, replacing every in-scope line matched by `target` with
    /// `rewrite(line)` followed by the line's own terminator.
    fn rewrite_lines<F>(
        &self,
        text: &str,
        target: &Regex,
        scope: Option<&ScopeMatcher>,
        rewrite: F,
    ) -> String
    where
        F: Fn(&str) -> String,
    {
        let mut output = String::with_capacity(text.len() + 64);
        let mut scanner = scope.map(ScopeMatcher::scanner);
        let mut rewritten = 0usize;

        for line in text.split_inclusive('\n') {
            let (content, terminator) = split_terminator(line);
            let in_scope = match scanner.as_mut() {
                Some(scanner) => scanner.advance(content) == LinePosition::Inside,
                None => true,
            };

            if in_scope && target.is_match(content) {
                output.push_str(&rewrite(content));
                output.push_str(terminator);
                rewritten += 1;
            } else {
                output.push_str(line);
            }
        }

        if rewritten == 0 {
            debug!(
                "{}: no line matched '{}', text unchanged",
                self.form.name(),
                self.spec.directive.name
            );
        } else {
            debug!("{}: rewrote {} line(s)", self.form.name(), rewritten);
        }

        output
    }
}

/// Split a line into its content and terminator (`\n`, `\r\n` or empty).
fn split_terminator(line: &str) -> (&str, &str) {
    let content = match line.strip_suffix('\n') {
        Some(rest) => rest.strip_suffix('\r').unwrap_or(rest),
        None => line,
    };
    (content, &line[content.len()..])
}

fn line_break(terminator: &str) -> &str {
    if terminator.is_empty() {
        "\n"
    } else {
        terminator
    }
}

fn ensure_line_break(output: &mut String) {
    if !output.is_empty() && !output.ends_with('\n') {
        output.push('\n');
    }
}

/// `    Name x` -> `    #Name x`
fn comment_out(line: &str) -> String {
    let indent = leading_indent(line);
    format!("{}#{}", indent, &line[indent.len()..])
}

/// `    #Name x` -> `    Name x`
fn uncomment(line: &str) -> String {
    let indent = leading_indent(line);
    let rest = &line[indent.len()..];
    format!("{}{}", indent, rest.strip_prefix('#').unwrap_or(rest))
}
