//! Value capture and canonical rendering for Attest.
//!
//! Every comparison in Attest goes through the same two steps: capture the
//! operand into a [`Value`], then render it to a deterministic canonical
//! form. Equality compares canonical forms and diffs are computed over them,
//! so the two can never disagree.
//!
//! # Key Types
//!
//! - [`Value`] / [`Kind`] -- Captured value model and its fast-path classification
//! - [`ValueSerializer`] -- serde `Serializer` producing [`Value`]s
//! - [`CompareOptions`] / [`CompareOption`] -- Comparison modifiers (exclude, omit-empty, ignore custom formatting)
//! - [`RenderDirectives`] -- The folded form of an option list
//! - [`WithFormat`] -- Custom display text for a value

pub mod error;
pub mod format;
pub mod options;
pub mod render;
pub mod ser;
pub mod value;

pub use error::{ReprError, ReprResult};
pub use format::WithFormat;
pub use options::{
    exclude, ignore_custom_formatting, omit_empty, CompareOption, CompareOptions,
    RenderDirectives, TypeKey, DEFAULT_INDENT,
};
pub use render::{canonical_form, render};
pub use ser::{to_value, to_value_lossy, ValueSerializer};
pub use value::{Field, Kind, Record, Shape, Value};
