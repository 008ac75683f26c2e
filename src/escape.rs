//! Escaping helpers for directive values
//!
//! Two representations are needed for every user-supplied value:
//!
//! - the form written into the configuration file ([`escape_value`]), quoted
//!   only when the value would otherwise be split or misread, and
//! - a regular expression fragment that finds the value on an existing line
//!   whether or not its author quoted it ([`escape_for_match`]).

/// Characters that are special in the line patterns built by [`crate::pattern`].
const REGEX_META: &[char] = &[
    '\\', '.', '^', '$', '*', '+', '?', '{', '}', '(', ')', '[', ']', '|',
];

/// Escape a value for writing into a configuration file.
///
/// Values containing a space, a double quote or a backslash are wrapped in
/// double quotes, with backslashes and then quotes escaped. Anything else is
/// returned unchanged.
///
/// ```
/// use htconf::escape::escape_value;
///
/// assert_eq!(escape_value("On"), "On");
/// assert_eq!(escape_value("hello world"), "\"hello world\"");
/// ```
pub fn escape_value(value: &str) -> String {
    if !value.contains([' ', '"', '\\']) {
        return value.to_string();
    }

    let escaped = value.replace('\\', "\\\\").replace('"', "\\\"");
    format!("\"{}\"", escaped)
}

/// Escape a value for use inside a line-matching pattern.
///
/// Every regex metacharacter is prefixed with a backslash and the result is
/// surrounded by optional quotes (`"?...?"`), so `/var/www` matches both
/// `/var/www` and `"/var/www"` in the file.
pub fn escape_for_match(value: &str) -> String {
    let mut fragment = String::with_capacity(value.len() + 4);
    fragment.push_str("\"?");
    for ch in value.chars() {
        if REGEX_META.contains(&ch) {
            fragment.push('\\');
        }
        fragment.push(ch);
    }
    fragment.push_str("\"?");
    fragment
}

/// Render a value list as it follows a directive name: each value escaped and
/// preceded by a single space.
pub fn render_values(values: &[String]) -> String {
    values
        .iter()
        .map(|value| format!(" {}", escape_value(value)))
        .collect()
}

/// The leading whitespace of a line.
pub fn leading_indent(line: &str) -> &str {
    &line[..line.len() - line.trim_start().len()]
}
