//! Checks over `Result` values and error source chains.

use std::error::Error;
use std::fmt::{Debug, Display};

use attest_diff::diff_text;

use crate::error::{failed, AssertResult};
use crate::message::Message;

/// Check that `result` failed with exactly `expected` as its message, or
/// succeeded when `expected` is empty.
pub fn check_equal_error<T, E: Display>(
    result: &Result<T, E>,
    expected: &str,
    message: Message,
) -> AssertResult {
    match result {
        Ok(_) if expected.is_empty() => Ok(()),
        Ok(_) => failed(message.resolve("Expected an error"), None),
        Err(err) => {
            let actual = err.to_string();
            if actual == expected {
                return Ok(());
            }
            failed(
                message.resolve("Error message not as expected:"),
                Some(diff_text(expected, &actual).lines().join("\n")),
            )
        }
    }
}

pub fn check_error<T, E>(result: &Result<T, E>, message: Message) -> AssertResult {
    if result.is_err() {
        return Ok(());
    }
    failed(message.resolve("Expected an error"), None)
}

pub fn check_no_error<T, E: Debug>(result: &Result<T, E>, message: Message) -> AssertResult {
    match result {
        Ok(_) => Ok(()),
        Err(err) => failed(
            message.resolve("Did not expect an error but got:"),
            Some(format!("{err:?}")),
        ),
    }
}

/// Returns `true` if `err` or any error in its source chain equals `target`.
pub fn chain_contains<K>(err: &(dyn Error + 'static), target: &K) -> bool
where
    K: Error + PartialEq + 'static,
{
    std::iter::successors(Some(err), |e| (*e).source())
        .any(|e| e.downcast_ref::<K>().is_some_and(|found| found == target))
}

/// Check that the error in `result` has `target` somewhere in its source
/// chain.
pub fn check_is_error<T, E, K>(result: &Result<T, E>, target: &K, message: Message) -> AssertResult
where
    E: Error + 'static,
    K: Error + PartialEq + 'static,
{
    match result {
        Err(err) if chain_contains(err, target) => Ok(()),
        Err(err) => failed(
            message.resolve(&format!("Error tree {err:?} should contain error {target:?}")),
            None,
        ),
        Ok(_) => failed(
            message.resolve(&format!("Expected an error tree containing {target:?} but got Ok")),
            None,
        ),
    }
}

/// Check that `target` appears nowhere in the source chain of the error in
/// `result`. An `Ok` result passes.
pub fn check_not_is_error<T, E, K>(
    result: &Result<T, E>,
    target: &K,
    message: Message,
) -> AssertResult
where
    E: Error + 'static,
    K: Error + PartialEq + 'static,
{
    match result {
        Err(err) if chain_contains(err, target) => failed(
            message.resolve(&format!("Error tree {err:?} should NOT contain error {target:?}")),
            None,
        ),
        _ => Ok(()),
    }
}
