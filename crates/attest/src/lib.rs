//! Type-safe test assertions with structural diffs.
//!
//! Each assertion comes in two forms: a `check_*` function returning an
//! [`AssertResult`], and an `assert_*!` macro that panics with the failure
//! text. Value comparisons go through the structural engine in
//! `attest-diff`, so a failed equality shows a unified diff of the two
//! values' canonical forms:
//!
//! ```text
//! Expected values to be equal:
//!  [
//!    Person {
//! -    name: "Alec",
//! +    name: "Alex",
//!      age: 20,
//!    },
//! ```

mod macros;

pub mod compare;
pub mod error;
pub mod message;
pub mod panics;
pub mod results;
pub mod slices;
pub mod strings;
pub mod zero;

pub use compare::{check_equal, check_false, check_not_equal, check_true, compare};
pub use error::{AssertResult, AssertionFailure};
pub use message::Message;
pub use panics::{check_not_panics, check_panics};
pub use results::{
    chain_contains, check_equal_error, check_error, check_is_error, check_no_error,
    check_not_is_error,
};
pub use slices::{check_not_slice_contains, check_slice_contains};
pub use strings::{check_contains, check_has_prefix, check_has_suffix, check_not_contains};
pub use zero::{check_not_zero, check_zero, is_zero};

// Re-export the comparison engine.
pub use attest_diff::{
    diff, diff_text, equal, exclude, ignore_custom_formatting, omit_empty, CompareOption,
    CompareOptions, DiffConfig, DiffReport,
};
pub use attest_repr::WithFormat;
