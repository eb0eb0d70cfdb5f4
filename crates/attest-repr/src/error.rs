use std::fmt::Display;

use thiserror::Error;

/// Errors produced while capturing a value into a [`Value`](crate::Value).
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ReprError {
    /// A `Serialize` implementation reported its own error.
    #[error("serialization error: {0}")]
    Custom(String),

    /// A map entry's value was serialized before its key.
    #[error("map value serialized without a key")]
    MissingMapKey,

    /// A custom-format wrapper did not carry its `(text, value)` pair.
    #[error("malformed custom format payload")]
    MalformedFormat,
}

impl serde::ser::Error for ReprError {
    fn custom<T: Display>(msg: T) -> Self {
        ReprError::Custom(msg.to_string())
    }
}

/// Convenience alias for capture results.
pub type ReprResult<T> = Result<T, ReprError>;
