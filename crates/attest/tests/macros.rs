use std::thread;

use attest::*;
use serde::Serialize;
use thiserror::Error;

#[derive(Clone, Debug, Default, Serialize)]
struct Data {
    str: String,
    num: i64,
}

#[derive(Debug, Serialize)]
struct Person {
    name: &'static str,
    age: u32,
}

#[derive(Debug, Error, PartialEq)]
#[error("file already closed")]
struct Closed;

#[derive(Debug, Error)]
#[error("os error: {0}")]
struct OsError(#[source] Closed);

fn data(str: &str, num: i64) -> Data {
    Data {
        str: str.into(),
        num,
    }
}

#[test]
fn passing_assertions() {
    assert_equal!(data("expected", 1234), data("expected", 1234));
    assert_equal!(42, 42);
    assert_equal!(Vec::<u8>::new(), Vec::new());
    assert_equal!(data("expected", 1234), data("expected", 0); CompareOptions::new().exclude::<i64>());
    assert_not_equal!(data("expected", 1234), data("expected", 1235));
    assert_contains!("a haystack with a needle in it", "needle");
    assert_not_contains!("a haystack with a needle in it", "screw");
    assert_has_prefix!(String::from("hello world"), "hello");
    assert_has_suffix!("hello world", "world");
    assert_slice_contains!(vec![1, 2, 3], 2);
    assert_not_slice_contains!([1, 2, 3], 4);
    assert_zero!(Data::default());
    assert_zero!(Vec::<i32>::new());
    assert_not_zero!(vec![1, 2, 3]);
    assert_true!(1 < 2);
    assert_false!(2 < 1, "ordering of {} and {}", 2, 1);
    assert_error!(Err::<(), _>(OsError(Closed)));
    assert_no_error!(Ok::<u8, OsError>(1));
    assert_equal_error!(Err::<(), _>(OsError(Closed)), "os error: file already closed");
    assert_is_error!(Err::<(), _>(OsError(Closed)), Closed);
    assert_not_is_error!(Ok::<(), OsError>(()), Closed);
    assert_panics!(|| panic!("boom"));
    assert_not_panics!(|| {});
}

#[test]
#[should_panic(expected = "Expected values to be equal:")]
fn equal_panics_with_default_message() {
    assert_equal!(data("expected\ntext", 1234), data("actual\ntext", 1234));
}

#[test]
#[should_panic(expected = "+  str: \"actual\\ntext\",")]
fn equal_panic_includes_diff() {
    assert_equal!(data("expected\ntext", 1234), data("actual\ntext", 1234));
}

#[test]
#[should_panic(expected = "record 7 drifted")]
fn equal_with_options_and_message() {
    let id = 7;
    assert_equal!(data("a", 1), data("b", 1); CompareOptions::new().exclude::<i64>(), "record {id} drifted");
}

#[test]
#[should_panic(expected = "Expected values to not be equal but both were:")]
fn not_equal_panics_when_exclusion_hides_difference() {
    assert_not_equal!(data("expected", 1234), data("expected", 0); CompareOptions::new().exclude::<i64>());
}

#[test]
#[should_panic(expected = "Haystack does not contain needle.\nNeedle: \"screw\"")]
fn contains_panics_for_missing_needle() {
    assert_contains!("a haystack with a needle in it", "screw");
}

#[test]
#[should_panic(expected = "Haystack should not contain needle.")]
fn not_contains_panics_for_present_needle() {
    assert_not_contains!("a haystack with a needle in it", "needle");
}

#[test]
#[should_panic(expected = "Did not expect the zero value:")]
fn not_zero_panics_for_empty_slice() {
    assert_not_zero!(Vec::<i32>::new());
}

#[test]
#[should_panic(expected = "Expected a zero value but got:")]
fn zero_panics_for_populated_struct() {
    assert_zero!(data("str", 0));
}

#[test]
#[should_panic(expected = "Error message not as expected:\n-goodbye\n+os error: file already closed")]
fn equal_error_panics_with_diff() {
    assert_equal_error!(Err::<(), _>(OsError(Closed)), "goodbye");
}

#[test]
#[should_panic(expected = "Expected function to panic")]
fn panics_panics_when_closure_returns() {
    assert_panics!(|| {});
}

#[test]
#[should_panic(expected = "Expected expression to be true")]
fn true_panics_on_false() {
    assert_true!(false);
}

#[test]
#[should_panic(expected = "-    name: \"Alec\",\n+    name: \"Alex\",")]
fn sequence_of_records_shows_field_level_diff() {
    let expected = vec![
        Person { name: "Alec", age: 20 },
        Person { name: "Bob", age: 21 },
        Person { name: "Sally", age: 22 },
    ];
    let actual = vec![
        Person { name: "Alex", age: 20 },
        Person { name: "Bob", age: 22 },
        Person { name: "Sally", age: 22 },
    ];
    assert_equal!(expected, actual);
}

#[test]
fn checks_are_safe_to_run_in_parallel() {
    let expected = data("expected\ntext", 1234);
    let actual = data("actual\ntext", 1234);
    let reference = diff(&expected, &actual, &CompareOptions::new()).to_string();

    thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                scope.spawn(|| {
                    assert!(!equal(&expected, &actual, &CompareOptions::new()));
                    diff(&expected, &actual, &CompareOptions::new()).to_string()
                })
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), reference);
        }
    });
}
