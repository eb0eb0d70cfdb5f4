//! The captured value model.
//!
//! A [`Value`] is a closed tagged union covering everything the canonical
//! renderer knows how to print. Values are produced from any
//! `serde::Serialize` type by [`to_value`](crate::to_value), or built by hand
//! through the `From` conversions below.

/// A captured, renderable value.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// The absent sentinel (`None`).
    Nil,
    /// The unit value `()`.
    Unit,
    Bool(bool),
    Int(i128),
    Uint(u128),
    Float32(f32),
    Float64(f64),
    Char(char),
    /// UTF-8 text.
    Text(String),
    /// A raw byte sequence.
    Bytes(Vec<u8>),
    /// A homogeneous sequence (`Vec`, slices, sets). Order is significant:
    /// a `HashSet` arrives in iteration order, so use `BTreeSet` for sets.
    Seq(Vec<Value>),
    /// A fixed-arity tuple.
    Tuple(Vec<Value>),
    /// Key/value pairs in capture order. Rendering sorts them.
    Map(Vec<(Value, Value)>),
    /// A struct or enum variant.
    Record(Record),
    /// A value carrying its own display text alongside its structure.
    Formatted { text: String, value: Box<Value> },
    /// A value whose capture failed; holds the error text.
    Unrenderable(String),
}

/// The coarse classification used to pick a comparison strategy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Kind {
    /// [`Value::Nil`].
    Absent,
    /// Booleans, numbers, characters and unit.
    Scalar,
    /// [`Value::Bytes`].
    Bytes,
    /// [`Value::Text`].
    Text,
    /// Everything with inner structure.
    Composite,
}

/// The field layout of a [`Record`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Shape {
    /// `struct Marker;` or `Enum::Variant`.
    Unit,
    /// `struct Meters(f64);` or `Enum::Variant(a, b)`.
    Tuple,
    /// `struct Data { .. }` or `Enum::Variant { .. }`.
    Named,
}

/// A struct or enum variant with its fields in declaration order.
#[derive(Clone, Debug, PartialEq)]
pub struct Record {
    /// The serde name of the type.
    pub name: String,
    /// The variant name, for enum variants.
    pub variant: Option<String>,
    pub shape: Shape,
    pub fields: Vec<Field>,
}

/// A single record field.
#[derive(Clone, Debug, PartialEq)]
pub struct Field {
    /// The field name; `None` for tuple fields.
    pub name: Option<String>,
    /// `std::any::type_name` of the field's declared type.
    pub type_name: &'static str,
    pub value: Value,
}

impl Value {
    /// Classify this value for fast-path dispatch.
    pub fn kind(&self) -> Kind {
        match self {
            Value::Nil => Kind::Absent,
            Value::Unit
            | Value::Bool(_)
            | Value::Int(_)
            | Value::Uint(_)
            | Value::Float32(_)
            | Value::Float64(_)
            | Value::Char(_) => Kind::Scalar,
            Value::Bytes(_) => Kind::Bytes,
            Value::Text(_) => Kind::Text,
            Value::Seq(_)
            | Value::Tuple(_)
            | Value::Map(_)
            | Value::Record(_)
            | Value::Formatted { .. }
            | Value::Unrenderable(_) => Kind::Composite,
        }
    }

    /// Returns `true` for the zero value of each kind: absent, `false`, `0`,
    /// empty text, bytes and collections, and structs whose fields are all
    /// empty. Enum variants are never empty.
    pub fn is_empty(&self) -> bool {
        match self {
            Value::Nil | Value::Unit => true,
            Value::Bool(b) => !b,
            Value::Int(i) => *i == 0,
            Value::Uint(u) => *u == 0,
            Value::Float32(f) => *f == 0.0,
            Value::Float64(f) => *f == 0.0,
            Value::Char(c) => *c == '\0',
            Value::Text(s) => s.is_empty(),
            Value::Bytes(b) => b.is_empty(),
            Value::Seq(items) | Value::Tuple(items) => items.is_empty(),
            Value::Map(entries) => entries.is_empty(),
            Value::Record(record) => {
                record.variant.is_none() && record.fields.iter().all(|f| f.value.is_empty())
            }
            Value::Formatted { value, .. } => value.is_empty(),
            Value::Unrenderable(_) => false,
        }
    }

    /// Returns `true` for a sequence, tuple, map or byte string with no
    /// elements.
    pub fn is_empty_collection(&self) -> bool {
        match self {
            Value::Seq(items) | Value::Tuple(items) => items.is_empty(),
            Value::Map(entries) => entries.is_empty(),
            Value::Bytes(bytes) => bytes.is_empty(),
            _ => false,
        }
    }
}

impl Record {
    /// A named-field struct record.
    pub fn named(name: impl Into<String>, fields: Vec<Field>) -> Self {
        Self {
            name: name.into(),
            variant: None,
            shape: Shape::Named,
            fields,
        }
    }

    /// The display name: `Type` or `Type::Variant`.
    pub fn display_name(&self) -> String {
        match &self.variant {
            Some(variant) => format!("{}::{}", self.name, variant),
            None => self.name.clone(),
        }
    }
}

impl Field {
    /// A named field whose declared type is `T`.
    pub fn new<T: ?Sized>(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            name: Some(name.into()),
            type_name: std::any::type_name::<T>(),
            value: value.into(),
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v.into())
    }
}

impl From<u64> for Value {
    fn from(v: u64) -> Self {
        Value::Uint(v.into())
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float64(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_owned())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl From<&[u8]> for Value {
    fn from(v: &[u8]) -> Self {
        Value::Bytes(v.to_vec())
    }
}

impl From<Vec<u8>> for Value {
    fn from(v: Vec<u8>) -> Self {
        Value::Bytes(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Nil, Into::into)
    }
}
