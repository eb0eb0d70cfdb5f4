use std::fmt;

/// Caller-supplied text that replaces a check's default message.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Message(Option<String>);

impl Message {
    /// Use the check's default message.
    pub fn none() -> Self {
        Self(None)
    }

    pub fn new(text: impl Into<String>) -> Self {
        Self(Some(text.into()))
    }

    /// The caller's text if present, otherwise `default`.
    pub fn resolve(&self, default: &str) -> String {
        self.0.clone().unwrap_or_else(|| default.to_owned())
    }
}

impl From<&str> for Message {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Message {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

impl From<fmt::Arguments<'_>> for Message {
    fn from(args: fmt::Arguments<'_>) -> Self {
        Self::new(args.to_string())
    }
}
