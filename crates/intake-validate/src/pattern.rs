//! Pattern-class matching for non-empty field values.

use regex::Regex;

/// Character-range fragment and display name for a recognized pattern
/// class. Unrecognized names contribute nothing and are skipped.
fn class_fragment(name: &str) -> Option<(&'static str, &'static str)> {
    match name {
        "letters" => Some(("a-zA-Z", "letters")),
        "numbers" => Some(("0-9", "numbers")),
        "spaces" => Some((" ", "spaces")),
        _ => None,
    }
}

/// Test `value` against the accumulated pattern classes.
///
/// Returns `None` when the value is acceptable, otherwise the display
/// message. The whole value must consist of allowed characters; empty
/// values and empty class lists are not validated here (format checks
/// apply only to non-empty values).
pub fn validate_patterns(classes: &[String], value: &str) -> Option<String> {
    if value.is_empty() || classes.is_empty() {
        return None;
    }

    let mut char_class = String::new();
    let mut names = Vec::new();
    for class in classes {
        if let Some((fragment, display)) = class_fragment(class) {
            char_class.push_str(fragment);
            names.push(display);
        }
    }
    if names.is_empty() {
        return None;
    }

    let pattern = format!("^[{char_class}]+$");
    let matched = Regex::new(&pattern)
        .map(|re| re.is_match(value))
        .unwrap_or(true);
    if matched {
        return None;
    }

    Some(pattern_message(&names))
}

/// Build the failure message, e.g. "Must contain only letters, numbers,
/// and spaces."
///
/// The final comma is rewritten to ", and" even for two items ("Must
/// contain only letters, and numbers.") -- deployed user-facing copy,
/// preserved exactly. Duplicate class names produce duplicate phrases.
fn pattern_message(names: &[&str]) -> String {
    let mut message = format!("Must contain only {}.", names.join(", "));
    if let Some(pos) = message.rfind(',') {
        message.replace_range(pos..=pos, ", and");
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classes(names: &[&str]) -> Vec<String> {
        names.iter().map(|name| (*name).to_string()).collect()
    }

    #[test]
    fn value_within_classes_is_valid() {
        assert_eq!(
            validate_patterns(&classes(&["letters", "numbers"]), "abc123"),
            None
        );
    }

    #[test]
    fn disallowed_character_fails_with_class_list() {
        assert_eq!(
            validate_patterns(&classes(&["letters"]), "abc 123").as_deref(),
            Some("Must contain only letters.")
        );
    }

    #[test]
    fn two_item_message_keeps_redundant_comma() {
        assert_eq!(
            validate_patterns(&classes(&["letters", "numbers"]), "a-b").as_deref(),
            Some("Must contain only letters, and numbers.")
        );
    }

    #[test]
    fn three_item_message_uses_oxford_comma() {
        assert_eq!(
            validate_patterns(&classes(&["letters", "numbers", "spaces"]), "a_b").as_deref(),
            Some("Must contain only letters, numbers, and spaces.")
        );
    }

    #[test]
    fn duplicate_classes_repeat_in_message() {
        assert_eq!(
            validate_patterns(&classes(&["letters", "letters"]), "123").as_deref(),
            Some("Must contain only letters, and letters.")
        );
    }

    #[test]
    fn empty_value_skips_validation() {
        assert_eq!(validate_patterns(&classes(&["letters"]), ""), None);
    }

    #[test]
    fn unrecognized_classes_are_skipped() {
        // "RegEx-3190" style catalog entries contribute nothing.
        assert_eq!(
            validate_patterns(&classes(&["RegEx-3190"]), "anything!"),
            None
        );
        assert_eq!(
            validate_patterns(&classes(&["RegEx-3190", "numbers"]), "12a").as_deref(),
            Some("Must contain only numbers.")
        );
    }
}
