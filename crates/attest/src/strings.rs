//! Substring, prefix and suffix checks.

use attest_diff::needle_position;

use crate::error::{failed, AssertResult};
use crate::message::Message;

/// Check that `haystack` contains `needle`.
pub fn check_contains(haystack: &str, needle: &str, message: Message) -> AssertResult {
    if haystack.contains(needle) {
        return Ok(());
    }
    failed(
        message.resolve("Haystack does not contain needle."),
        Some(format!("Needle: {needle:?}\nHaystack: {haystack:?}")),
    )
}

/// Check that `haystack` does not contain `needle`; on failure every
/// occurrence is marked with carets under the quoted haystack.
pub fn check_not_contains(haystack: &str, needle: &str, message: Message) -> AssertResult {
    if !haystack.contains(needle) {
        return Ok(());
    }
    let position = needle_position(haystack, needle);
    failed(
        message.resolve("Haystack should not contain needle."),
        Some(format!(
            "Needle: {}\nHaystack: {}\n          {}",
            position.quoted_needle, position.quoted_haystack, position.markers
        )),
    )
}

pub fn check_has_prefix(s: &str, prefix: &str, message: Message) -> AssertResult {
    if s.starts_with(prefix) {
        return Ok(());
    }
    failed(
        message.resolve("Expected string to have prefix:"),
        Some(format!("Prefix: {prefix:?}\nString: {s:?}")),
    )
}

pub fn check_has_suffix(s: &str, suffix: &str, message: Message) -> AssertResult {
    if s.ends_with(suffix) {
        return Ok(());
    }
    failed(
        message.resolve("Expected string to have suffix:"),
        Some(format!("Suffix: {suffix:?}\nString: {s:?}")),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const HAYSTACK: &str = "a haystack with a needle in it";

    #[test]
    fn contains_found() {
        assert!(check_contains(HAYSTACK, "needle", Message::none()).is_ok());
    }

    #[test]
    fn contains_missing_needle() {
        let failure = check_contains(HAYSTACK, "screw", Message::none()).unwrap_err();
        assert_eq!(
            failure.to_string(),
            "Haystack does not contain needle.\nNeedle: \"screw\"\nHaystack: \"a haystack with a needle in it\""
        );
        assert!(!failure.to_string().contains('^'));
    }

    #[test]
    fn not_contains_marks_occurrence() {
        assert!(check_not_contains(HAYSTACK, "screw", Message::none()).is_ok());

        let failure = check_not_contains(HAYSTACK, "needle", Message::none()).unwrap_err();
        let detail = failure.detail.unwrap();
        let lines: Vec<&str> = detail.lines().collect();
        assert_eq!(lines[0], "Needle: needle");
        assert_eq!(lines[1], "Haystack: \"a haystack with a needle in it\"");

        let caret_column = lines[2].find('^').unwrap();
        assert_eq!(&lines[1][caret_column..caret_column + 6], "needle");
    }

    #[test]
    fn empty_needle_is_always_contained() {
        assert!(check_contains(HAYSTACK, "", Message::none()).is_ok());

        let failure = check_not_contains("hay", "", Message::none()).unwrap_err();
        assert_eq!(
            failure.detail.as_deref(),
            Some("Needle: \nHaystack: \"hay\"\n               ")
        );
    }

    #[test]
    fn prefix_and_suffix() {
        assert!(check_has_prefix("hello world", "hello", Message::none()).is_ok());
        assert!(check_has_suffix("hello world", "world", Message::none()).is_ok());

        let failure = check_has_prefix("hello world", "world", Message::none()).unwrap_err();
        assert_eq!(
            failure.to_string(),
            "Expected string to have prefix:\nPrefix: \"world\"\nString: \"hello world\""
        );
        assert!(check_has_suffix("hello world", "hello", Message::none()).is_err());
    }
}
