//! Custom rendering hooks.
//!
//! A type can present itself to the comparison engine with its own text,
//! much like a hand-written `Debug` impl, by serializing through
//! [`WithFormat`]. The structural value travels alongside the text so that
//! `IgnoreCustomFormatting` can fall back to it.
//!
//! ```
//! use attest_repr::{render, to_value, RenderDirectives, WithFormat};
//! use serde::{Serialize, Serializer};
//!
//! struct Celsius(f64);
//!
//! impl Serialize for Celsius {
//!     fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
//!         WithFormat::new(format!("{:.1}°C", self.0), &self.0).serialize(s)
//!     }
//! }
//!
//! let value = to_value(&Celsius(21.04)).unwrap();
//! assert_eq!(render(&value, &RenderDirectives::default()), "21.0°C");
//! ```

use serde::{Serialize, Serializer};

/// Newtype-struct name that marks a [`WithFormat`] payload.
///
/// Serializers other than ours see an ordinary newtype around a
/// `(text, value)` tuple.
pub const FORMATTED_TOKEN: &str = "$attest::private::Formatted";

/// Pairs a custom display text with the structural value it stands for.
#[derive(Clone, Debug)]
pub struct WithFormat<'a, T: ?Sized> {
    text: String,
    value: &'a T,
}

impl<'a, T: ?Sized> WithFormat<'a, T> {
    pub fn new(text: impl Into<String>, value: &'a T) -> Self {
        Self {
            text: text.into(),
            value,
        }
    }
}

impl<T: ?Sized + Serialize> Serialize for WithFormat<'_, T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_newtype_struct(FORMATTED_TOKEN, &(self.text.as_str(), self.value))
    }
}
