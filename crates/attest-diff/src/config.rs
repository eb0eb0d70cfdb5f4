use serde::{Deserialize, Serialize};

use attest_repr::DEFAULT_INDENT;

/// Layout settings for rendered diffs.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiffConfig {
    /// Unchanged lines shown around each change.
    pub context_radius: usize,
    /// Indentation unit used when rendering canonical forms.
    pub indent: String,
}

impl Default for DiffConfig {
    fn default() -> Self {
        Self {
            context_radius: 3,
            indent: DEFAULT_INDENT.to_owned(),
        }
    }
}

impl DiffConfig {
    /// Only changed lines, no surrounding context.
    pub fn compact() -> Self {
        Self {
            context_radius: 0,
            ..Default::default()
        }
    }
}
