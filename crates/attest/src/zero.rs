//! Zero-value checks.
//!
//! A value is zero when it equals `T::default()`, or when it is an empty
//! sequence, map or byte string. The second rule is a relaxation on top of
//! structural equality and deliberately stays out of [`attest_diff::equal`].

use serde::Serialize;

use attest_diff::{canonical_form, equal_values, CompareOptions};
use attest_repr::{to_value_lossy, RenderDirectives};

use crate::error::{failed, AssertResult};
use crate::message::Message;

/// Returns `true` if `value` is its type's zero value.
pub fn is_zero<T: Serialize + Default>(value: &T) -> bool {
    let captured = to_value_lossy(value);
    let zero = to_value_lossy(&T::default());
    equal_values(&captured, &zero, &CompareOptions::new()) || captured.is_empty_collection()
}

pub fn check_zero<T: Serialize + Default>(value: &T, message: Message) -> AssertResult {
    if is_zero(value) {
        return Ok(());
    }
    failed(
        message.resolve("Expected a zero value but got:"),
        Some(canonical_form(value, &RenderDirectives::default())),
    )
}

pub fn check_not_zero<T: Serialize + Default>(value: &T, message: Message) -> AssertResult {
    if !is_zero(value) {
        return Ok(());
    }
    failed(
        message.resolve("Did not expect the zero value:"),
        Some(canonical_form(value, &RenderDirectives::default())),
    )
}
