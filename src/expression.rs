//! Splitting of `-e` expressions
//!
//! An expression such as `set Dir4 -v "two words" -w 'a"b'` is split into
//! arguments with POSIX shell quoting rules:
//!
//! - whitespace separates arguments outside quotes;
//! - single quotes preserve everything literally up to the next single quote;
//! - inside double quotes a backslash only escapes `"`, `\`, `$` and `` ` ``;
//! - outside quotes a backslash escapes the next character.
//!
//! Quoted empty strings (`''`, `""`) produce an empty argument.

use crate::error::{Error, Result};

#[derive(Clone, Copy, PartialEq, Eq)]
enum Quote {
    None,
    Single,
    Double,
}

/// Split an expression into arguments.
///
/// # Examples
///
/// ```
/// use htconf::expression::split;
///
/// let args = split(r#"set Dir4 -v "two words" -w 'a"b'"#).unwrap();
/// assert_eq!(args, vec!["set", "Dir4", "-v", "two words", "-w", "a\"b"]);
/// ```
pub fn split(expression: &str) -> Result<Vec<String>> {
    let mut args = Vec::new();
    let mut current = String::new();
    // Distinguishes `""` (an empty argument) from no argument at all.
    let mut in_arg = false;
    let mut quote = Quote::None;
    let mut chars = expression.chars().peekable();

    while let Some(ch) = chars.next() {
        match quote {
            Quote::Single => {
                if ch == '\'' {
                    quote = Quote::None;
                } else {
                    current.push(ch);
                }
            }
            Quote::Double => match ch {
                '"' => quote = Quote::None,
                '\\' => match chars.peek() {
                    Some(&next) if matches!(next, '"' | '\\' | '$' | '`') => {
                        current.push(next);
                        chars.next();
                    }
                    Some('\n') => {
                        chars.next();
                    }
                    _ => current.push('\\'),
                },
                _ => current.push(ch),
            },
            Quote::None => match ch {
                '\'' => {
                    quote = Quote::Single;
                    in_arg = true;
                }
                '"' => {
                    quote = Quote::Double;
                    in_arg = true;
                }
                '\\' => match chars.next() {
                    Some('\n') => {}
                    Some(next) => {
                        current.push(next);
                        in_arg = true;
                    }
                    None => {
                        return Err(unterminated(expression, "trailing backslash"));
                    }
                },
                c if c.is_whitespace() => {
                    if in_arg {
                        args.push(std::mem::take(&mut current));
                        in_arg = false;
                    }
                }
                c => {
                    current.push(c);
                    in_arg = true;
                }
            },
        }
    }

    match quote {
        Quote::Single => return Err(unterminated(expression, "unterminated single quote")),
        Quote::Double => return Err(unterminated(expression, "unterminated double quote")),
        Quote::None => {}
    }

    if in_arg {
        args.push(current);
    }

    Ok(args)
}

fn unterminated(expression: &str, message: &str) -> Error {
    Error::Expression {
        expression: expression.to_string(),
        message: message.to_string(),
    }
}
