//! Capture any `Serialize` type into a [`Value`].
//!
//! [`ValueSerializer`] plays the role reflection plays elsewhere: serde
//! walks the value and reports its shape, and every struct field arrives
//! with its declared type, which we record as `std::any::type_name` so
//! type-based exclusion can match it later.

use std::any::type_name;

use serde::ser::{self, Serialize};

use crate::error::{ReprError, ReprResult};
use crate::format::FORMATTED_TOKEN;
use crate::value::{Field, Record, Shape, Value};

/// Capture `value` into a [`Value`].
pub fn to_value<T: Serialize + ?Sized>(value: &T) -> ReprResult<Value> {
    value.serialize(ValueSerializer)
}

/// Capture `value`, turning a capture failure into [`Value::Unrenderable`].
///
/// Comparison never fails, so this is the entry point the engine uses.
pub fn to_value_lossy<T: Serialize + ?Sized>(value: &T) -> Value {
    to_value(value).unwrap_or_else(|e| Value::Unrenderable(e.to_string()))
}

/// A serde `Serializer` that produces [`Value`]s.
#[derive(Clone, Copy, Debug, Default)]
pub struct ValueSerializer;

impl ser::Serializer for ValueSerializer {
    type Ok = Value;
    type Error = ReprError;

    type SerializeSeq = SeqBuilder;
    type SerializeTuple = SeqBuilder;
    type SerializeTupleStruct = RecordBuilder;
    type SerializeTupleVariant = RecordBuilder;
    type SerializeMap = MapBuilder;
    type SerializeStruct = RecordBuilder;
    type SerializeStructVariant = RecordBuilder;

    fn serialize_bool(self, v: bool) -> ReprResult<Value> {
        Ok(Value::Bool(v))
    }

    fn serialize_i8(self, v: i8) -> ReprResult<Value> {
        Ok(Value::Int(v.into()))
    }

    fn serialize_i16(self, v: i16) -> ReprResult<Value> {
        Ok(Value::Int(v.into()))
    }

    fn serialize_i32(self, v: i32) -> ReprResult<Value> {
        Ok(Value::Int(v.into()))
    }

    fn serialize_i64(self, v: i64) -> ReprResult<Value> {
        Ok(Value::Int(v.into()))
    }

    fn serialize_i128(self, v: i128) -> ReprResult<Value> {
        Ok(Value::Int(v))
    }

    fn serialize_u8(self, v: u8) -> ReprResult<Value> {
        Ok(Value::Uint(v.into()))
    }

    fn serialize_u16(self, v: u16) -> ReprResult<Value> {
        Ok(Value::Uint(v.into()))
    }

    fn serialize_u32(self, v: u32) -> ReprResult<Value> {
        Ok(Value::Uint(v.into()))
    }

    fn serialize_u64(self, v: u64) -> ReprResult<Value> {
        Ok(Value::Uint(v.into()))
    }

    fn serialize_u128(self, v: u128) -> ReprResult<Value> {
        Ok(Value::Uint(v))
    }

    fn serialize_f32(self, v: f32) -> ReprResult<Value> {
        Ok(Value::Float32(v))
    }

    fn serialize_f64(self, v: f64) -> ReprResult<Value> {
        Ok(Value::Float64(v))
    }

    fn serialize_char(self, v: char) -> ReprResult<Value> {
        Ok(Value::Char(v))
    }

    fn serialize_str(self, v: &str) -> ReprResult<Value> {
        Ok(Value::Text(v.to_owned()))
    }

    fn serialize_bytes(self, v: &[u8]) -> ReprResult<Value> {
        Ok(Value::Bytes(v.to_vec()))
    }

    fn serialize_none(self) -> ReprResult<Value> {
        Ok(Value::Nil)
    }

    fn serialize_some<T: ?Sized + Serialize>(self, value: &T) -> ReprResult<Value> {
        value.serialize(self)
    }

    fn serialize_unit(self) -> ReprResult<Value> {
        Ok(Value::Unit)
    }

    fn serialize_unit_struct(self, name: &'static str) -> ReprResult<Value> {
        Ok(Value::Record(Record {
            name: name.to_owned(),
            variant: None,
            shape: Shape::Unit,
            fields: Vec::new(),
        }))
    }

    fn serialize_unit_variant(
        self,
        name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> ReprResult<Value> {
        Ok(Value::Record(Record {
            name: name.to_owned(),
            variant: Some(variant.to_owned()),
            shape: Shape::Unit,
            fields: Vec::new(),
        }))
    }

    fn serialize_newtype_struct<T: ?Sized + Serialize>(
        self,
        name: &'static str,
        value: &T,
    ) -> ReprResult<Value> {
        if name == FORMATTED_TOKEN {
            return formatted(value.serialize(self)?);
        }
        Ok(Value::Record(Record {
            name: name.to_owned(),
            variant: None,
            shape: Shape::Tuple,
            fields: vec![tuple_field(value)?],
        }))
    }

    fn serialize_newtype_variant<T: ?Sized + Serialize>(
        self,
        name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        value: &T,
    ) -> ReprResult<Value> {
        Ok(Value::Record(Record {
            name: name.to_owned(),
            variant: Some(variant.to_owned()),
            shape: Shape::Tuple,
            fields: vec![tuple_field(value)?],
        }))
    }

    fn serialize_seq(self, len: Option<usize>) -> ReprResult<SeqBuilder> {
        Ok(SeqBuilder {
            items: Vec::with_capacity(len.unwrap_or(0)),
            tuple: false,
        })
    }

    fn serialize_tuple(self, len: usize) -> ReprResult<SeqBuilder> {
        Ok(SeqBuilder {
            items: Vec::with_capacity(len),
            tuple: true,
        })
    }

    fn serialize_tuple_struct(
        self,
        name: &'static str,
        len: usize,
    ) -> ReprResult<RecordBuilder> {
        Ok(RecordBuilder::new(name, None, Shape::Tuple, len))
    }

    fn serialize_tuple_variant(
        self,
        name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> ReprResult<RecordBuilder> {
        Ok(RecordBuilder::new(name, Some(variant), Shape::Tuple, len))
    }

    fn serialize_map(self, len: Option<usize>) -> ReprResult<MapBuilder> {
        Ok(MapBuilder {
            entries: Vec::with_capacity(len.unwrap_or(0)),
            pending_key: None,
        })
    }

    fn serialize_struct(self, name: &'static str, len: usize) -> ReprResult<RecordBuilder> {
        Ok(RecordBuilder::new(name, None, Shape::Named, len))
    }

    fn serialize_struct_variant(
        self,
        name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> ReprResult<RecordBuilder> {
        Ok(RecordBuilder::new(name, Some(variant), Shape::Named, len))
    }
}

fn tuple_field<T: ?Sized + Serialize>(value: &T) -> ReprResult<Field> {
    Ok(Field {
        name: None,
        type_name: type_name::<T>(),
        value: to_value(value)?,
    })
}

/// Unpack the `(text, value)` pair written by [`WithFormat`](crate::WithFormat).
fn formatted(payload: Value) -> ReprResult<Value> {
    let Value::Tuple(mut items) = payload else {
        return Err(ReprError::MalformedFormat);
    };
    if items.len() != 2 {
        return Err(ReprError::MalformedFormat);
    }
    let value = items.pop().ok_or(ReprError::MalformedFormat)?;
    match items.pop() {
        Some(Value::Text(text)) => Ok(Value::Formatted {
            text,
            value: Box::new(value),
        }),
        _ => Err(ReprError::MalformedFormat),
    }
}

/// Collects sequence and tuple elements.
#[derive(Debug)]
pub struct SeqBuilder {
    items: Vec<Value>,
    tuple: bool,
}

impl SeqBuilder {
    fn push<T: ?Sized + Serialize>(&mut self, value: &T) -> ReprResult<()> {
        self.items.push(to_value(value)?);
        Ok(())
    }

    fn finish(self) -> Value {
        if self.tuple {
            Value::Tuple(self.items)
        } else {
            Value::Seq(self.items)
        }
    }
}

impl ser::SerializeSeq for SeqBuilder {
    type Ok = Value;
    type Error = ReprError;

    fn serialize_element<T: ?Sized + Serialize>(&mut self, value: &T) -> ReprResult<()> {
        self.push(value)
    }

    fn end(self) -> ReprResult<Value> {
        Ok(self.finish())
    }
}

impl ser::SerializeTuple for SeqBuilder {
    type Ok = Value;
    type Error = ReprError;

    fn serialize_element<T: ?Sized + Serialize>(&mut self, value: &T) -> ReprResult<()> {
        self.push(value)
    }

    fn end(self) -> ReprResult<Value> {
        Ok(self.finish())
    }
}

/// Collects map entries in the order serde produces them.
#[derive(Debug)]
pub struct MapBuilder {
    entries: Vec<(Value, Value)>,
    pending_key: Option<Value>,
}

impl ser::SerializeMap for MapBuilder {
    type Ok = Value;
    type Error = ReprError;

    fn serialize_key<T: ?Sized + Serialize>(&mut self, key: &T) -> ReprResult<()> {
        self.pending_key = Some(to_value(key)?);
        Ok(())
    }

    fn serialize_value<T: ?Sized + Serialize>(&mut self, value: &T) -> ReprResult<()> {
        let key = self.pending_key.take().ok_or(ReprError::MissingMapKey)?;
        self.entries.push((key, to_value(value)?));
        Ok(())
    }

    fn end(self) -> ReprResult<Value> {
        Ok(Value::Map(self.entries))
    }
}

/// Collects the fields of structs, tuple structs and enum variants.
#[derive(Debug)]
pub struct RecordBuilder {
    record: Record,
}

impl RecordBuilder {
    fn new(name: &str, variant: Option<&str>, shape: Shape, len: usize) -> Self {
        Self {
            record: Record {
                name: name.to_owned(),
                variant: variant.map(str::to_owned),
                shape,
                fields: Vec::with_capacity(len),
            },
        }
    }

    fn push<T: ?Sized + Serialize>(&mut self, name: Option<&str>, value: &T) -> ReprResult<()> {
        self.record.fields.push(Field {
            name: name.map(str::to_owned),
            type_name: type_name::<T>(),
            value: to_value(value)?,
        });
        Ok(())
    }
}

impl ser::SerializeTupleStruct for RecordBuilder {
    type Ok = Value;
    type Error = ReprError;

    fn serialize_field<T: ?Sized + Serialize>(&mut self, value: &T) -> ReprResult<()> {
        self.push(None, value)
    }

    fn end(self) -> ReprResult<Value> {
        Ok(Value::Record(self.record))
    }
}

impl ser::SerializeTupleVariant for RecordBuilder {
    type Ok = Value;
    type Error = ReprError;

    fn serialize_field<T: ?Sized + Serialize>(&mut self, value: &T) -> ReprResult<()> {
        self.push(None, value)
    }

    fn end(self) -> ReprResult<Value> {
        Ok(Value::Record(self.record))
    }
}

impl ser::SerializeStruct for RecordBuilder {
    type Ok = Value;
    type Error = ReprError;

    fn serialize_field<T: ?Sized + Serialize>(
        &mut self,
        key: &'static str,
        value: &T,
    ) -> ReprResult<()> {
        self.push(Some(key), value)
    }

    fn end(self) -> ReprResult<Value> {
        Ok(Value::Record(self.record))
    }
}

impl ser::SerializeStructVariant for RecordBuilder {
    type Ok = Value;
    type Error = ReprError;

    fn serialize_field<T: ?Sized + Serialize>(
        &mut self,
        key: &'static str,
        value: &T,
    ) -> ReprResult<()> {
        self.push(Some(key), value)
    }

    fn end(self) -> ReprResult<Value> {
        Ok(Value::Record(self.record))
    }
}
