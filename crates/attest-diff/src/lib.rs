//! Comparison engine for Attest.
//!
//! Decides whether two values are structurally equal and, when they are
//! not, renders a minimal unified diff of their canonical forms. Both sides
//! share the canonicalization in `attest-repr`, so equality and the diff
//! always agree.
//!
//! # Key Types
//!
//! - [`equal`] / [`equal_values`] -- Structural equality with byte and text fast paths
//! - [`diff`] / [`DiffReport`] -- Line-level unified diff with the file header stripped
//! - [`NeedlePosition`] -- Caret diagnostics for substring checks
//! - [`DiffConfig`] -- Context radius and indentation of rendered diffs

pub mod config;
pub mod diff;
pub mod equal;
pub mod needle;

pub use config::DiffConfig;
pub use diff::{diff, diff_text, diff_values, diff_with_config, DiffReport};
pub use equal::{equal, equal_values};
pub use needle::{needle_position, NeedlePosition};

// Re-export the option and value types callers pass in.
pub use attest_repr::{
    canonical_form, exclude, ignore_custom_formatting, omit_empty, CompareOption,
    CompareOptions, Value,
};
