//! Capture any `Serialize` value as a [`Value`] tree.
//!
//! Newtype structs are transparent. `Option::Some` is kept as one
//! [`Value::Some`] level so key extraction can unwrap exactly one
//! indirection.

use crate::errors::{Result, ValueError};
use crate::value::model::{Record, Value, Variant};
use serde::ser::{self, Serialize};

/// Convert a `Serialize` value into an inspectable [`Value`].
///
/// # Errors
///
/// - `IntegerOutOfRange`: an `i128`/`u128` does not fit in 64 bits
/// - `Custom`: the value's `Serialize` implementation reported an error
pub fn to_value<T: Serialize + ?Sized>(value: &T) -> Result<Value> {
    value.serialize(ValueSerializer)
}

/// Serializer whose output is a [`Value`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ValueSerializer;

impl ser::Serializer for ValueSerializer {
    type Ok = Value;
    type Error = ValueError;

    type SerializeSeq = SerializeSequence;
    type SerializeTuple = SerializeSequence;
    type SerializeTupleStruct = SerializeRecord;
    type SerializeTupleVariant = SerializeTupleVariant;
    type SerializeMap = SerializeMap;
    type SerializeStruct = SerializeRecord;
    type SerializeStructVariant = SerializeStructVariant;

    fn serialize_bool(self, v: bool) -> Result<Value> {
        Ok(Value::Bool(v))
    }

    fn serialize_i8(self, v: i8) -> Result<Value> {
        Ok(Value::Int(i64::from(v)))
    }

    fn serialize_i16(self, v: i16) -> Result<Value> {
        Ok(Value::Int(i64::from(v)))
    }

    fn serialize_i32(self, v: i32) -> Result<Value> {
        Ok(Value::Int(i64::from(v)))
    }

    fn serialize_i64(self, v: i64) -> Result<Value> {
        Ok(Value::Int(v))
    }

    fn serialize_i128(self, v: i128) -> Result<Value> {
        i64::try_from(v)
            .map(Value::Int)
            .map_err(|_| ValueError::IntegerOutOfRange {
                value: v.to_string(),
            })
    }

    fn serialize_u8(self, v: u8) -> Result<Value> {
        Ok(Value::Uint(u64::from(v)))
    }

    fn serialize_u16(self, v: u16) -> Result<Value> {
        Ok(Value::Uint(u64::from(v)))
    }

    fn serialize_u32(self, v: u32) -> Result<Value> {
        Ok(Value::Uint(u64::from(v)))
    }

    fn serialize_u64(self, v: u64) -> Result<Value> {
        Ok(Value::Uint(v))
    }

    fn serialize_u128(self, v: u128) -> Result<Value> {
        u64::try_from(v)
            .map(Value::Uint)
            .map_err(|_| ValueError::IntegerOutOfRange {
                value: v.to_string(),
            })
    }

    fn serialize_f32(self, v: f32) -> Result<Value> {
        Ok(Value::Float(f64::from(v)))
    }

    fn serialize_f64(self, v: f64) -> Result<Value> {
        Ok(Value::Float(v))
    }

    fn serialize_char(self, v: char) -> Result<Value> {
        Ok(Value::Char(v))
    }

    fn serialize_str(self, v: &str) -> Result<Value> {
        Ok(Value::Str(v.to_owned()))
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<Value> {
        Ok(Value::Bytes(v.to_vec()))
    }

    fn serialize_none(self) -> Result<Value> {
        Ok(Value::Null)
    }

    fn serialize_some<T: Serialize + ?Sized>(self, value: &T) -> Result<Value> {
        Ok(Value::Some(Box::new(value.serialize(self)?)))
    }

    fn serialize_unit(self) -> Result<Value> {
        Ok(Value::Null)
    }

    fn serialize_unit_struct(self, name: &'static str) -> Result<Value> {
        Ok(Value::Record(Record::new(name)))
    }

    fn serialize_unit_variant(
        self,
        name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<Value> {
        Ok(Value::Variant(Variant::new(name, variant, Value::Null)))
    }

    fn serialize_newtype_struct<T: Serialize + ?Sized>(
        self,
        _name: &'static str,
        value: &T,
    ) -> Result<Value> {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T: Serialize + ?Sized>(
        self,
        name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        value: &T,
    ) -> Result<Value> {
        let payload = value.serialize(self)?;
        Ok(Value::Variant(Variant::new(name, variant, payload)))
    }

    fn serialize_seq(self, len: Option<usize>) -> Result<SerializeSequence> {
        Ok(SerializeSequence {
            items: Vec::with_capacity(len.unwrap_or(0)),
            fixed: false,
        })
    }

    fn serialize_tuple(self, len: usize) -> Result<SerializeSequence> {
        Ok(SerializeSequence {
            items: Vec::with_capacity(len),
            fixed: true,
        })
    }

    fn serialize_tuple_struct(self, name: &'static str, len: usize) -> Result<SerializeRecord> {
        Ok(SerializeRecord::new(name, len))
    }

    fn serialize_tuple_variant(
        self,
        name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<SerializeTupleVariant> {
        Ok(SerializeTupleVariant {
            enum_name: name,
            variant,
            items: Vec::with_capacity(len),
        })
    }

    fn serialize_map(self, len: Option<usize>) -> Result<SerializeMap> {
        Ok(SerializeMap {
            entries: Vec::with_capacity(len.unwrap_or(0)),
            next_key: None,
        })
    }

    fn serialize_struct(self, name: &'static str, len: usize) -> Result<SerializeRecord> {
        Ok(SerializeRecord::new(name, len))
    }

    fn serialize_struct_variant(
        self,
        name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<SerializeStructVariant> {
        Ok(SerializeStructVariant {
            enum_name: name,
            record: SerializeRecord::new(variant, len),
        })
    }
}

pub struct SerializeSequence {
    items: Vec<Value>,
    fixed: bool,
}

impl SerializeSequence {
    fn push<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<()> {
        self.items.push(value.serialize(ValueSerializer)?);
        Ok(())
    }

    fn finish(self) -> Value {
        if self.fixed {
            Value::Tuple(self.items)
        } else {
            Value::Seq(self.items)
        }
    }
}

impl ser::SerializeSeq for SerializeSequence {
    type Ok = Value;
    type Error = ValueError;

    fn serialize_element<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<()> {
        self.push(value)
    }

    fn end(self) -> Result<Value> {
        Ok(self.finish())
    }
}

impl ser::SerializeTuple for SerializeSequence {
    type Ok = Value;
    type Error = ValueError;

    fn serialize_element<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<()> {
        self.push(value)
    }

    fn end(self) -> Result<Value> {
        Ok(self.finish())
    }
}

pub struct SerializeRecord {
    record: Record,
}

impl SerializeRecord {
    fn new(name: &'static str, len: usize) -> Self {
        let mut record = Record::new(name);
        record.fields.reserve(len);
        Self { record }
    }
}

impl ser::SerializeStruct for SerializeRecord {
    type Ok = Value;
    type Error = ValueError;

    fn serialize_field<T: Serialize + ?Sized>(
        &mut self,
        key: &'static str,
        value: &T,
    ) -> Result<()> {
        let value = value.serialize(ValueSerializer)?;
        self.record.fields.push((key.to_string(), value));
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Record(self.record))
    }
}

impl ser::SerializeTupleStruct for SerializeRecord {
    type Ok = Value;
    type Error = ValueError;

    fn serialize_field<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<()> {
        let value = value.serialize(ValueSerializer)?;
        let index = self.record.fields.len();
        self.record.fields.push((index.to_string(), value));
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Record(self.record))
    }
}

pub struct SerializeTupleVariant {
    enum_name: &'static str,
    variant: &'static str,
    items: Vec<Value>,
}

impl ser::SerializeTupleVariant for SerializeTupleVariant {
    type Ok = Value;
    type Error = ValueError;

    fn serialize_field<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<()> {
        self.items.push(value.serialize(ValueSerializer)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Variant(Variant::new(
            self.enum_name,
            self.variant,
            Value::Tuple(self.items),
        )))
    }
}

pub struct SerializeStructVariant {
    enum_name: &'static str,
    record: SerializeRecord,
}

impl ser::SerializeStructVariant for SerializeStructVariant {
    type Ok = Value;
    type Error = ValueError;

    fn serialize_field<T: Serialize + ?Sized>(
        &mut self,
        key: &'static str,
        value: &T,
    ) -> Result<()> {
        ser::SerializeStruct::serialize_field(&mut self.record, key, value)
    }

    fn end(self) -> Result<Value> {
        let variant = self.record.record.name.clone();
        Ok(Value::Variant(Variant::new(
            self.enum_name,
            variant,
            Value::Record(self.record.record),
        )))
    }
}

pub struct SerializeMap {
    entries: Vec<(Value, Value)>,
    next_key: Option<Value>,
}

impl ser::SerializeMap for SerializeMap {
    type Ok = Value;
    type Error = ValueError;

    fn serialize_key<T: Serialize + ?Sized>(&mut self, key: &T) -> Result<()> {
        self.next_key = Some(key.serialize(ValueSerializer)?);
        Ok(())
    }

    fn serialize_value<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<()> {
        let key = self.next_key.take().ok_or(ValueError::MapValueWithoutKey)?;
        let value = value.serialize(ValueSerializer)?;
        self.entries.push((key, value));
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Map(self.entries))
    }
}

impl From<serde_json::Value> for Value {
    /// Mirrors how `serde_json::Value` serializes: non-negative integers
    /// become `Uint`, negative ones `Int`.
    fn from(json: serde_json::Value) -> Self {
        use serde_json::Value as Json;
        match json {
            Json::Null => Value::Null,
            Json::Bool(b) => Value::Bool(b),
            Json::Number(n) => {
                if let Some(u) = n.as_u64() {
                    Value::Uint(u)
                } else if let Some(i) = n.as_i64() {
                    Value::Int(i)
                } else {
                    Value::Float(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            Json::String(s) => Value::Str(s),
            Json::Array(items) => Value::Seq(items.into_iter().map(Value::from).collect()),
            Json::Object(map) => Value::Map(
                map.into_iter()
                    .map(|(k, v)| (Value::Str(k), Value::from(v)))
                    .collect(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;
    use std::collections::BTreeMap;

    #[derive(Serialize)]
    struct Row {
        id: u32,
        name: String,
        note: Option<String>,
    }

    #[derive(Serialize)]
    struct Pair(i32, &'static str);

    #[derive(Serialize)]
    struct Meters(f64);

    #[derive(Serialize)]
    enum Shape {
        Empty,
        Circle(f64),
        Line(i32, i32),
        Rect { w: u8, h: u8 },
    }

    #[test]
    fn test_struct_becomes_record() {
        let row = Row {
            id: 7,
            name: "a".into(),
            note: None,
        };
        let value = to_value(&row).unwrap();
        let Value::Record(record) = value else {
            panic!("expected record");
        };
        assert_eq!(record.name, "Row");
        assert_eq!(
            record.field_names().collect::<Vec<_>>(),
            vec!["id", "name", "note"]
        );
        assert_eq!(record.field("id"), Some(&Value::Uint(7)));
        assert_eq!(record.field("note"), Some(&Value::Null));
    }

    #[test]
    fn test_option_keeps_one_level() {
        let value = to_value(&Some(Some(3i8))).unwrap();
        assert_eq!(
            value,
            Value::Some(Box::new(Value::Some(Box::new(Value::Int(3)))))
        );
    }

    #[test]
    fn test_tuple_struct_fields_are_indexed() {
        let Value::Record(record) = to_value(&Pair(1, "x")).unwrap() else {
            panic!("expected record");
        };
        assert_eq!(record.field("0"), Some(&Value::Int(1)));
        assert_eq!(record.field("1"), Some(&Value::Str("x".into())));
    }

    #[test]
    fn test_newtype_struct_is_transparent() {
        assert_eq!(to_value(&Meters(1.5)).unwrap(), Value::Float(1.5));
    }

    #[test]
    fn test_enum_variants() {
        assert_eq!(
            to_value(&Shape::Empty).unwrap(),
            Value::Variant(Variant::new("Shape", "Empty", Value::Null))
        );
        assert_eq!(
            to_value(&Shape::Circle(2.0)).unwrap(),
            Value::Variant(Variant::new("Shape", "Circle", Value::Float(2.0)))
        );
        assert_eq!(
            to_value(&Shape::Line(1, 2)).unwrap(),
            Value::Variant(Variant::new(
                "Shape",
                "Line",
                Value::Tuple(vec![Value::Int(1), Value::Int(2)])
            ))
        );
        let rect = Record::new("Rect")
            .with_field("w", Value::Uint(1))
            .with_field("h", Value::Uint(2));
        assert_eq!(
            to_value(&Shape::Rect { w: 1, h: 2 }).unwrap(),
            Value::Variant(Variant::new("Shape", "Rect", Value::Record(rect)))
        );
    }

    #[test]
    fn test_vec_and_array() {
        assert_eq!(
            to_value(&vec![1u8, 2]).unwrap(),
            Value::Seq(vec![Value::Uint(1), Value::Uint(2)])
        );
        assert_eq!(
            to_value(&[1u8, 2]).unwrap(),
            Value::Tuple(vec![Value::Uint(1), Value::Uint(2)])
        );
    }

    #[test]
    fn test_map() {
        let mut map = BTreeMap::new();
        map.insert("id", 10);
        assert_eq!(
            to_value(&map).unwrap(),
            Value::Map(vec![(Value::Str("id".into()), Value::Int(10))])
        );
    }

    #[test]
    fn test_i128_out_of_range() {
        assert_eq!(to_value(&5i128).unwrap(), Value::Int(5));
        let err = to_value(&i128::MAX).unwrap_err();
        assert!(matches!(err, ValueError::IntegerOutOfRange { .. }));
    }

    #[test]
    fn test_json_conversion_matches_serialization() {
        let json = serde_json::json!({"id": 10, "neg": -1, "xs": [1.5, null], "s": "t"});
        let converted = Value::from(json.clone());
        let serialized = to_value(&json).unwrap();
        assert_eq!(converted, serialized);
    }
}
