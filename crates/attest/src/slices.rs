//! Membership checks over slices, using structural equality.

use serde::Serialize;

use attest_diff::{canonical_form, equal, CompareOptions};
use attest_repr::RenderDirectives;

use crate::error::{failed, AssertResult};
use crate::message::Message;

fn membership_detail<T: Serialize>(haystack: &[T], needle: &T) -> String {
    let directives = RenderDirectives::default();
    format!(
        "Needle: {}\nHaystack: {}",
        canonical_form(needle, &directives),
        canonical_form(haystack, &directives)
    )
}

/// Check that some element of `haystack` equals `needle`.
pub fn check_slice_contains<T: Serialize>(haystack: &[T], needle: &T, message: Message) -> AssertResult {
    let options = CompareOptions::new();
    if haystack.iter().any(|item| equal(item, needle, &options)) {
        return Ok(());
    }
    failed(
        message.resolve("Haystack does not contain needle."),
        Some(membership_detail(haystack, needle)),
    )
}

/// Check that no element of `haystack` equals `needle`.
pub fn check_not_slice_contains<T: Serialize>(
    haystack: &[T],
    needle: &T,
    message: Message,
) -> AssertResult {
    let options = CompareOptions::new();
    if !haystack.iter().any(|item| equal(item, needle, &options)) {
        return Ok(());
    }
    failed(
        message.resolve("Haystack should not contain needle."),
        Some(membership_detail(haystack, needle)),
    )
}
