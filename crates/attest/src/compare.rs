//! Equality and boolean checks.

use serde::Serialize;

use attest_diff::{canonical_form, diff, equal, CompareOptions};

use crate::error::{failed, AssertResult};
use crate::message::Message;

/// Compare two values for structural equality.
pub fn compare<T: Serialize + ?Sized>(x: &T, y: &T, options: &CompareOptions) -> bool {
    equal(x, y, options)
}

/// Check that `expected` and `actual` are equal; on failure the detail is a
/// diff of their canonical forms.
pub fn check_equal<T: Serialize + ?Sized>(
    expected: &T,
    actual: &T,
    options: &CompareOptions,
    message: Message,
) -> AssertResult {
    if equal(expected, actual, options) {
        return Ok(());
    }
    let report = diff(expected, actual, options);
    failed(
        message.resolve("Expected values to be equal:"),
        Some(report.lines().join("\n")),
    )
}

/// Check that `expected` and `actual` differ; on failure the detail is the
/// shared canonical form.
pub fn check_not_equal<T: Serialize + ?Sized>(
    expected: &T,
    actual: &T,
    options: &CompareOptions,
    message: Message,
) -> AssertResult {
    if !equal(expected, actual, options) {
        return Ok(());
    }
    failed(
        message.resolve("Expected values to not be equal but both were:"),
        Some(canonical_form(expected, &options.directives())),
    )
}

pub fn check_true(ok: bool, message: Message) -> AssertResult {
    if ok {
        return Ok(());
    }
    failed(message.resolve("Expected expression to be true"), None)
}

pub fn check_false(ok: bool, message: Message) -> AssertResult {
    if !ok {
        return Ok(());
    }
    failed(message.resolve("Expected expression to be false"), None)
}

#[cfg(test)]
mod tests {
    use serde::Serialize;

    use super::*;

    #[derive(Serialize)]
    struct Data {
        str: String,
        num: i64,
    }

    fn data(str: &str, num: i64) -> Data {
        Data {
            str: str.into(),
            num,
        }
    }

    #[test]
    fn identical_struct_passes() {
        let result = check_equal(
            &data("expected", 1234),
            &data("expected", 1234),
            &CompareOptions::new(),
            Message::none(),
        );
        assert!(result.is_ok());
    }

    #[test]
    fn different_struct_fails_with_diff() {
        let failure = check_equal(
            &data("expected\ntext", 1234),
            &data("actual\ntext", 1234),
            &CompareOptions::new(),
            Message::none(),
        )
        .unwrap_err();

        assert_eq!(failure.message, "Expected values to be equal:");
        let detail = failure.detail.unwrap();
        assert!(detail.contains("-  str: \"expected\\ntext\","));
        assert!(detail.contains("+  str: \"actual\\ntext\","));
    }

    #[test]
    fn strings_diff_line_by_line() {
        let failure = check_equal(
            "hello\nworld",
            "goodbye\nworld",
            &CompareOptions::new(),
            Message::none(),
        )
        .unwrap_err();
        assert_eq!(failure.detail.as_deref(), Some("-hello\n+goodbye\n world"));
    }

    #[test]
    fn exclude_makes_values_equal() {
        let options = CompareOptions::new().exclude::<i64>();
        let expected = Data {
            str: "expected".into(),
            num: 1234,
        };
        let actual = Data {
            str: "expected".into(),
            num: 0,
        };
        assert!(check_equal(&expected, &actual, &options, Message::none()).is_ok());
        assert!(check_not_equal(&expected, &actual, &options, Message::none()).is_err());
    }

    #[test]
    fn numbers_and_bytes() {
        let none = CompareOptions::new();
        assert!(check_equal(&42, &42, &none, Message::none()).is_ok());
        assert!(check_equal(&42, &43, &none, Message::none()).is_err());
        assert!(check_equal(&vec![4u8, 2], &vec![4u8, 2], &none, Message::none()).is_ok());
        assert!(check_equal(&vec![2u8, 4], &vec![4u8, 2], &none, Message::none()).is_err());
        assert!(check_equal(&Vec::<u8>::new(), &Vec::new(), &none, Message::none()).is_ok());
    }

    #[test]
    fn not_equal_reports_shared_value() {
        let failure = check_not_equal(
            &data("expected", 1234),
            &data("expected", 1234),
            &CompareOptions::new(),
            Message::none(),
        )
        .unwrap_err();
        assert_eq!(
            failure.to_string(),
            "Expected values to not be equal but both were:\nData {\n  str: \"expected\",\n  num: 1234,\n}"
        );
        assert!(check_not_equal(
            &data("expected", 1234),
            &data("expected", 1235),
            &CompareOptions::new(),
            Message::none()
        )
        .is_ok());
    }

    #[test]
    fn custom_message_replaces_default() {
        let failure = check_true(false, Message::new("flag for user 3 was off")).unwrap_err();
        assert_eq!(failure.to_string(), "flag for user 3 was off");
    }

    #[test]
    fn booleans() {
        assert!(check_true(true, Message::none()).is_ok());
        assert!(check_false(false, Message::none()).is_ok());
        assert_eq!(
            check_false(true, Message::none()).unwrap_err().message,
            "Expected expression to be false"
        );
    }

    #[test]
    fn compare_is_a_plain_predicate() {
        assert!(compare(&data("a", 1), &data("a", 1), &CompareOptions::new()));
        assert!(!compare(&data("a", 1), &data("a", 2), &CompareOptions::new()));
    }
}
