//! Property-based tests for escaping and line editing.
//!
//! These tests use proptest to generate random values and configuration
//! texts and verify that invariants hold for all of them.

#[cfg(test)]
mod proptest_tests {
    use crate::config::{EditSpec, Operation};
    use crate::editor::Editor;
    use crate::escape::{escape_for_match, escape_value};
    use proptest::prelude::*;
    use regex::Regex;

    fn editor(op: Operation, name: &str, values: Vec<String>, section: Option<&str>) -> Editor {
        let spec = EditSpec::from_parts(op, name, values, Vec::new(), section).unwrap();
        Editor::new(spec).unwrap()
    }

    /// Undo `escape_value` for a quoted value.
    fn unescape_quoted(quoted: &str) -> String {
        let inner = &quoted[1..quoted.len() - 1];
        let mut result = String::new();
        let mut chars = inner.chars();
        while let Some(ch) = chars.next() {
            if ch == '\\' {
                if let Some(next) = chars.next() {
                    result.push(next);
                }
            } else {
                result.push(ch);
            }
        }
        result
    }

    /// A config text of directive lines, without any commented lines.
    fn config_text() -> impl Strategy<Value = String> {
        prop::collection::vec("( {0,4}|\t)Dir[0-3]( [a-z\"]{1,4}){0,2}", 0..12)
            .prop_map(|lines| lines.iter().map(|l| format!("{}\n", l)).collect())
    }

    // ============================================================================
    // escape_value property tests
    // ============================================================================

    proptest! {
        /// Property: values without space, quote or backslash are written as-is
        #[test]
        fn escape_value_keeps_plain_values(input in "[^ \"\\\\]*") {
            prop_assert_eq!(escape_value(&input), input);
        }

        /// Property: quoted output unescapes back to the input
        #[test]
        fn escape_value_round_trips(input in ".*[ \"\\\\].*") {
            let escaped = escape_value(&input);
            prop_assert!(escaped.starts_with('"') && escaped.ends_with('"'));
            prop_assert_eq!(unescape_quoted(&escaped), input);
        }
    }

    // ============================================================================
    // escape_for_match property tests
    // ============================================================================

    proptest! {
        /// Property: the fragment always compiles and matches the value
        /// literally, quoted or not
        #[test]
        fn escape_for_match_matches_literal(input in ".*") {
            let pattern = Regex::new(&format!("^{}$", escape_for_match(&input))).unwrap();
            prop_assert!(pattern.is_match(&input));
            let quoted = format!("\"{}\"", input);
            prop_assert!(pattern.is_match(&quoted));
        }
    }

    // ============================================================================
    // Editor property tests
    // ============================================================================

    proptest! {
        /// Property: disabling twice is the same as disabling once
        #[test]
        fn disable_is_idempotent(text in config_text(), n in 0..4u8) {
            let disable = editor(Operation::Disable, &format!("Dir{}", n), Vec::new(), None);
            let once = disable.edit_text(&text);
            prop_assert_eq!(disable.edit_text(&once), once);
        }

        /// Property: enable without values undoes disable byte-for-byte
        #[test]
        fn enable_restores_disabled_lines(text in config_text(), n in 0..4u8) {
            let name = format!("Dir{}", n);
            let disable = editor(Operation::Disable, &name, Vec::new(), None);
            let enable = editor(Operation::Enable, &name, Vec::new(), None);
            prop_assert_eq!(enable.edit_text(&disable.edit_text(&text)), text);
        }

        /// Property: an edit touches only lines of its own directive
        #[test]
        fn set_leaves_other_lines_alone(text in config_text(), value in "[a-z]{1,5}") {
            let set = editor(Operation::Set, "Dir0", vec![value], None);
            let edited = set.edit_text(&text);
            let before: Vec<&str> = text.lines().collect();
            let after: Vec<&str> = edited.lines().collect();
            prop_assert_eq!(before.len(), after.len());
            for (old, new) in before.iter().zip(after.iter()) {
                if !old.trim_start().starts_with("Dir0") {
                    prop_assert_eq!(old, new);
                }
            }
        }

        /// Property: edits scoped to an absent section never change the text
        #[test]
        fn scoped_edit_without_section_is_noop(text in config_text()) {
            let set = editor(Operation::Set, "Dir1", vec!["x".to_string()], Some("Missing:1"));
            prop_assert_eq!(set.edit_text(&text), text);
        }
    }
}
