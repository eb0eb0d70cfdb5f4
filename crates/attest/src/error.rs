use thiserror::Error;
use tracing::debug;

/// A failed assertion: a headline message and an optional detail block.
///
/// Displays as the message, a newline, then the detail. Downstream tooling
/// may print this text verbatim, so the layout is stable.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("{message}{}", detail_block(.detail))]
pub struct AssertionFailure {
    pub message: String,
    pub detail: Option<String>,
}

fn detail_block(detail: &Option<String>) -> String {
    detail
        .as_deref()
        .map(|d| format!("\n{d}"))
        .unwrap_or_default()
}

/// Result of a single check.
pub type AssertResult = Result<(), AssertionFailure>;

/// Build and log a failure.
pub(crate) fn failed(message: String, detail: Option<String>) -> AssertResult {
    debug!(message = %message, has_detail = detail.is_some(), "assertion failed");
    Err(AssertionFailure { message, detail })
}
