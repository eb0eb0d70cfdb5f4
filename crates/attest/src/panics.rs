//! Panic checks.

use std::any::Any;
use std::panic::{catch_unwind, UnwindSafe};

use crate::error::{failed, AssertResult};
use crate::message::Message;

/// Check that `f` panics.
pub fn check_panics<F: FnOnce() + UnwindSafe>(f: F, message: Message) -> AssertResult {
    if catch_unwind(f).is_err() {
        return Ok(());
    }
    failed(message.resolve("Expected function to panic"), None)
}

/// Check that `f` returns normally; on failure the detail carries the
/// panic payload.
pub fn check_not_panics<F: FnOnce() + UnwindSafe>(f: F, message: Message) -> AssertResult {
    match catch_unwind(f) {
        Ok(()) => Ok(()),
        Err(payload) => failed(
            message.resolve("Expected function not to panic"),
            Some(format!("Panic: {}", payload_text(payload.as_ref()))),
        ),
    }
}

fn payload_text(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_owned()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "<non-string panic payload>".to_owned()
    }
}
