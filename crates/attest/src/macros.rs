//! `assert_*!` macros.
//!
//! Each macro runs the matching `check_*` function and panics with the
//! failure text. Trailing arguments are a `format!` message that replaces
//! the default one. Comparison macros take options after a semicolon:
//!
//! ```
//! use attest::{assert_equal, CompareOptions};
//!
//! #[derive(serde::Serialize)]
//! struct Data {
//!     str: String,
//!     num: i64,
//! }
//!
//! let expected = Data { str: "expected".into(), num: 1234 };
//! let actual = Data { str: "expected".into(), num: 0 };
//! assert_equal!(expected, actual; CompareOptions::new().exclude::<i64>());
//! assert_equal!(1 + 1, 2, "arithmetic is broken for {}", "addition");
//! ```

#[doc(hidden)]
#[macro_export]
macro_rules! __attest_message {
    () => {
        $crate::Message::none()
    };
    ($($arg:tt)+) => {
        $crate::Message::new(::std::format!($($arg)+))
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __attest_enforce {
    ($check:expr) => {
        if let ::std::result::Result::Err(failure) = $check {
            ::std::panic!("{}", failure);
        }
    };
}

/// Assert that two values are structurally equal, showing a diff otherwise.
#[macro_export]
macro_rules! assert_equal {
    ($expected:expr, $actual:expr; $options:expr $(, $($arg:tt)+)?) => {
        $crate::__attest_enforce!($crate::check_equal(
            &$expected,
            &$actual,
            &$options,
            $crate::__attest_message!($($($arg)+)?),
        ))
    };
    ($expected:expr, $actual:expr $(,)?) => {
        $crate::__attest_enforce!($crate::check_equal(
            &$expected,
            &$actual,
            &$crate::CompareOptions::new(),
            $crate::Message::none(),
        ))
    };
    ($expected:expr, $actual:expr, $($arg:tt)+) => {
        $crate::__attest_enforce!($crate::check_equal(
            &$expected,
            &$actual,
            &$crate::CompareOptions::new(),
            $crate::__attest_message!($($arg)+),
        ))
    };
}

/// Assert that two values are not structurally equal.
#[macro_export]
macro_rules! assert_not_equal {
    ($expected:expr, $actual:expr; $options:expr $(, $($arg:tt)+)?) => {
        $crate::__attest_enforce!($crate::check_not_equal(
            &$expected,
            &$actual,
            &$options,
            $crate::__attest_message!($($($arg)+)?),
        ))
    };
    ($expected:expr, $actual:expr $(,)?) => {
        $crate::__attest_enforce!($crate::check_not_equal(
            &$expected,
            &$actual,
            &$crate::CompareOptions::new(),
            $crate::Message::none(),
        ))
    };
    ($expected:expr, $actual:expr, $($arg:tt)+) => {
        $crate::__attest_enforce!($crate::check_not_equal(
            &$expected,
            &$actual,
            &$crate::CompareOptions::new(),
            $crate::__attest_message!($($arg)+),
        ))
    };
}

/// Assert that a string contains a substring.
#[macro_export]
macro_rules! assert_contains {
    ($haystack:expr, $needle:expr $(, $($arg:tt)+)?) => {
        $crate::__attest_enforce!($crate::check_contains(
            ::std::convert::AsRef::<str>::as_ref(&$haystack),
            ::std::convert::AsRef::<str>::as_ref(&$needle),
            $crate::__attest_message!($($($arg)+)?),
        ))
    };
}

/// Assert that a string does not contain a substring.
#[macro_export]
macro_rules! assert_not_contains {
    ($haystack:expr, $needle:expr $(, $($arg:tt)+)?) => {
        $crate::__attest_enforce!($crate::check_not_contains(
            ::std::convert::AsRef::<str>::as_ref(&$haystack),
            ::std::convert::AsRef::<str>::as_ref(&$needle),
            $crate::__attest_message!($($($arg)+)?),
        ))
    };
}

/// Assert that a string starts with a prefix.
#[macro_export]
macro_rules! assert_has_prefix {
    ($s:expr, $prefix:expr $(, $($arg:tt)+)?) => {
        $crate::__attest_enforce!($crate::check_has_prefix(
            ::std::convert::AsRef::<str>::as_ref(&$s),
            ::std::convert::AsRef::<str>::as_ref(&$prefix),
            $crate::__attest_message!($($($arg)+)?),
        ))
    };
}

/// Assert that a string ends with a suffix.
#[macro_export]
macro_rules! assert_has_suffix {
    ($s:expr, $suffix:expr $(, $($arg:tt)+)?) => {
        $crate::__attest_enforce!($crate::check_has_suffix(
            ::std::convert::AsRef::<str>::as_ref(&$s),
            ::std::convert::AsRef::<str>::as_ref(&$suffix),
            $crate::__attest_message!($($($arg)+)?),
        ))
    };
}

/// Assert that a slice holds an element structurally equal to the needle.
#[macro_export]
macro_rules! assert_slice_contains {
    ($haystack:expr, $needle:expr $(, $($arg:tt)+)?) => {
        $crate::__attest_enforce!($crate::check_slice_contains(
            ::std::convert::AsRef::<[_]>::as_ref(&$haystack),
            &$needle,
            $crate::__attest_message!($($($arg)+)?),
        ))
    };
}

/// Assert that no element of a slice is structurally equal to the needle.
#[macro_export]
macro_rules! assert_not_slice_contains {
    ($haystack:expr, $needle:expr $(, $($arg:tt)+)?) => {
        $crate::__attest_enforce!($crate::check_not_slice_contains(
            ::std::convert::AsRef::<[_]>::as_ref(&$haystack),
            &$needle,
            $crate::__attest_message!($($($arg)+)?),
        ))
    };
}

/// Assert that a value is its type's zero value.
#[macro_export]
macro_rules! assert_zero {
    ($value:expr $(, $($arg:tt)+)?) => {
        $crate::__attest_enforce!($crate::check_zero(
            &$value,
            $crate::__attest_message!($($($arg)+)?),
        ))
    };
}

/// Assert that a value is not its type's zero value.
#[macro_export]
macro_rules! assert_not_zero {
    ($value:expr $(, $($arg:tt)+)?) => {
        $crate::__attest_enforce!($crate::check_not_zero(
            &$value,
            $crate::__attest_message!($($($arg)+)?),
        ))
    };
}

/// Assert that a result failed with exactly the given message, or succeeded
/// if the message is empty.
#[macro_export]
macro_rules! assert_equal_error {
    ($result:expr, $expected:expr $(, $($arg:tt)+)?) => {
        $crate::__attest_enforce!($crate::check_equal_error(
            &$result,
            ::std::convert::AsRef::<str>::as_ref(&$expected),
            $crate::__attest_message!($($($arg)+)?),
        ))
    };
}

/// Assert that a result is an error.
#[macro_export]
macro_rules! assert_error {
    ($result:expr $(, $($arg:tt)+)?) => {
        $crate::__attest_enforce!($crate::check_error(
            &$result,
            $crate::__attest_message!($($($arg)+)?),
        ))
    };
}

/// Assert that a result is not an error.
#[macro_export]
macro_rules! assert_no_error {
    ($result:expr $(, $($arg:tt)+)?) => {
        $crate::__attest_enforce!($crate::check_no_error(
            &$result,
            $crate::__attest_message!($($($arg)+)?),
        ))
    };
}

/// Assert that a result's error chain contains the target error.
#[macro_export]
macro_rules! assert_is_error {
    ($result:expr, $target:expr $(, $($arg:tt)+)?) => {
        $crate::__attest_enforce!($crate::check_is_error(
            &$result,
            &$target,
            $crate::__attest_message!($($($arg)+)?),
        ))
    };
}

/// Assert that a result's error chain does not contain the target error.
#[macro_export]
macro_rules! assert_not_is_error {
    ($result:expr, $target:expr $(, $($arg:tt)+)?) => {
        $crate::__attest_enforce!($crate::check_not_is_error(
            &$result,
            &$target,
            $crate::__attest_message!($($($arg)+)?),
        ))
    };
}

#[macro_export]
macro_rules! assert_true {
    ($ok:expr $(, $($arg:tt)+)?) => {
        $crate::__attest_enforce!($crate::check_true(
            $ok,
            $crate::__attest_message!($($($arg)+)?),
        ))
    };
}

#[macro_export]
macro_rules! assert_false {
    ($ok:expr $(, $($arg:tt)+)?) => {
        $crate::__attest_enforce!($crate::check_false(
            $ok,
            $crate::__attest_message!($($($arg)+)?),
        ))
    };
}

/// Assert that a closure panics.
#[macro_export]
macro_rules! assert_panics {
    ($f:expr $(, $($arg:tt)+)?) => {
        $crate::__attest_enforce!($crate::check_panics(
            $f,
            $crate::__attest_message!($($($arg)+)?),
        ))
    };
}

/// Assert that a closure does not panic.
#[macro_export]
macro_rules! assert_not_panics {
    ($f:expr $(, $($arg:tt)+)?) => {
        $crate::__attest_enforce!($crate::check_not_panics(
            $f,
            $crate::__attest_message!($($($arg)+)?),
        ))
    };
}
