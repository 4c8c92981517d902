//! Inspectable value tree.
//!
//! Equality on [`Value`] is the baseline, representation-sensitive check:
//! variant kinds, record names and string contents must match exactly.
//! Maps compare as unordered sets of entries.

use std::hash::{Hash, Hasher};

/// A runtime value captured for structural comparison.
#[derive(Debug, Clone)]
pub enum Value {
    /// `()`, `None`, JSON `null`
    Null,
    Bool(bool),
    Int(i64),
    Uint(u64),
    Float(f64),
    Char(char),
    Str(String),
    Bytes(Vec<u8>),
    /// One level of optional indirection (`Option::Some`)
    Some(Box<Value>),
    /// Variable-length sequence (`Vec`, slices, sets)
    Seq(Vec<Value>),
    /// Fixed-length sequence (tuples, arrays)
    Tuple(Vec<Value>),
    /// Keyed mapping in serialization order
    Map(Vec<(Value, Value)>),
    /// Struct with named fields
    Record(Record),
    /// Enum variant wrapping a payload
    Variant(Variant),
}

/// A struct value: type name plus named fields in declaration order.
///
/// Tuple structs use the field names `"0"`, `"1"`, ….
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub name: String,
    pub fields: Vec<(String, Value)>,
}

impl Record {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Builder-style field append
    pub fn with_field(mut self, name: impl Into<String>, value: Value) -> Self {
        self.fields.push((name.into(), value));
        self
    }

    /// Look up a field by exact (case-sensitive) name
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value)
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }
}

/// An enum variant. Unit variants carry [`Value::Null`].
#[derive(Debug, Clone, PartialEq)]
pub struct Variant {
    pub enum_name: String,
    pub variant: String,
    pub payload: Box<Value>,
}

impl Variant {
    pub fn new(enum_name: impl Into<String>, variant: impl Into<String>, payload: Value) -> Self {
        Self {
            enum_name: enum_name.into(),
            variant: variant.into(),
            payload: Box::new(payload),
        }
    }

    /// `Enum::Variant`
    pub fn qualified_name(&self) -> String {
        format!("{}::{}", self.enum_name, self.variant)
    }
}

/// Discriminant of a [`Value`], ignoring contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Null,
    Bool,
    Int,
    Uint,
    Float,
    Char,
    Str,
    Bytes,
    Some,
    Seq,
    Tuple,
    Map,
    Record,
    Variant,
}

impl Value {
    pub fn kind(&self) -> Kind {
        match self {
            Value::Null => Kind::Null,
            Value::Bool(_) => Kind::Bool,
            Value::Int(_) => Kind::Int,
            Value::Uint(_) => Kind::Uint,
            Value::Float(_) => Kind::Float,
            Value::Char(_) => Kind::Char,
            Value::Str(_) => Kind::Str,
            Value::Bytes(_) => Kind::Bytes,
            Value::Some(_) => Kind::Some,
            Value::Seq(_) => Kind::Seq,
            Value::Tuple(_) => Kind::Tuple,
            Value::Map(_) => Kind::Map,
            Value::Record(_) => Kind::Record,
            Value::Variant(_) => Kind::Variant,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Elements of a `Seq` or `Tuple`
    pub fn as_sequence(&self) -> Option<&[Value]> {
        match self {
            Value::Seq(items) | Value::Tuple(items) => Some(items),
            _ => None,
        }
    }

    /// Human-readable type description used in diagnostics.
    ///
    /// Maps describe their entry types when all entries agree
    /// (`map<string, int>`), `map<string, any>` otherwise.
    pub fn type_name(&self) -> String {
        match self {
            Value::Null => "nil".to_string(),
            Value::Bool(_) => "bool".to_string(),
            Value::Int(_) => "int".to_string(),
            Value::Uint(_) => "uint".to_string(),
            Value::Float(_) => "float".to_string(),
            Value::Char(_) => "char".to_string(),
            Value::Str(_) => "string".to_string(),
            Value::Bytes(_) => "bytes".to_string(),
            Value::Some(inner) => format!("*{}", inner.type_name()),
            Value::Seq(_) => "seq".to_string(),
            Value::Tuple(_) => "tuple".to_string(),
            Value::Map(entries) => {
                if entries.is_empty() {
                    return "map".to_string();
                }
                let key = common_type_name(entries.iter().map(|(k, _)| k));
                let value = common_type_name(entries.iter().map(|(_, v)| v));
                format!("map<{}, {}>", key, value)
            }
            Value::Record(record) => record.name.clone(),
            Value::Variant(variant) => variant.qualified_name(),
        }
    }

    /// Whether this value may serve as a lookup key.
    ///
    /// Floats and maps are not hashable, nor is anything containing them.
    pub fn is_hashable(&self) -> bool {
        match self {
            Value::Float(_) | Value::Map(_) => false,
            Value::Some(inner) => inner.is_hashable(),
            Value::Seq(items) | Value::Tuple(items) => items.iter().all(Value::is_hashable),
            Value::Record(record) => record.fields.iter().all(|(_, v)| v.is_hashable()),
            Value::Variant(variant) => variant.payload.is_hashable(),
            _ => true,
        }
    }
}

fn common_type_name<'a>(mut values: impl Iterator<Item = &'a Value>) -> String {
    let first = match values.next() {
        Some(value) => value.type_name(),
        None => return "any".to_string(),
    };
    if values.all(|v| v.type_name() == first) {
        first
    } else {
        "any".to_string()
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Uint(a), Value::Uint(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Char(a), Value::Char(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Bytes(a), Value::Bytes(b)) => a == b,
            (Value::Some(a), Value::Some(b)) => a == b,
            (Value::Seq(a), Value::Seq(b)) => a == b,
            (Value::Tuple(a), Value::Tuple(b)) => a == b,
            (Value::Map(a), Value::Map(b)) => {
                a.len() == b.len()
                    && a.iter().all(|(key, value)| {
                        b.iter()
                            .find(|(other_key, _)| other_key == key)
                            .is_some_and(|(_, other_value)| other_value == value)
                    })
            }
            (Value::Record(a), Value::Record(b)) => a == b,
            (Value::Variant(a), Value::Variant(b)) => a == b,
            _ => false,
        }
    }
}

/// A hashable key extracted from an element.
///
/// Signed and unsigned integers with the same numeric value are the same key.
#[derive(Debug, Clone)]
pub struct KeyValue(Value);

impl KeyValue {
    /// Wrap a value, or `None` if it is not hashable
    pub fn new(value: Value) -> Option<Self> {
        if value.is_hashable() {
            Some(Self(value))
        } else {
            None
        }
    }

    pub fn value(&self) -> &Value {
        &self.0
    }
}

fn key_eq(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Int(x), Value::Uint(y)) | (Value::Uint(y), Value::Int(x)) => {
            i128::from(*x) == i128::from(*y)
        }
        (Value::Some(x), Value::Some(y)) => key_eq(x, y),
        (Value::Seq(x), Value::Seq(y)) | (Value::Tuple(x), Value::Tuple(y)) => {
            x.len() == y.len() && x.iter().zip(y).all(|(x, y)| key_eq(x, y))
        }
        (Value::Record(x), Value::Record(y)) => {
            x.name == y.name
                && x.fields.len() == y.fields.len()
                && x
                    .fields
                    .iter()
                    .zip(&y.fields)
                    .all(|((xn, xv), (yn, yv))| xn == yn && key_eq(xv, yv))
        }
        (Value::Variant(x), Value::Variant(y)) => {
            x.enum_name == y.enum_name
                && x.variant == y.variant
                && key_eq(&x.payload, &y.payload)
        }
        _ => a == b,
    }
}

fn hash_key<H: Hasher>(value: &Value, state: &mut H) {
    match value {
        Value::Int(n) => {
            Kind::Int.hash(state);
            i128::from(*n).hash(state);
        }
        // same bucket as Int so mixed signedness still collides
        Value::Uint(n) => {
            Kind::Int.hash(state);
            i128::from(*n).hash(state);
        }
        Value::Null => Kind::Null.hash(state),
        Value::Bool(b) => b.hash(state),
        Value::Char(c) => c.hash(state),
        Value::Str(s) => s.hash(state),
        Value::Bytes(b) => b.hash(state),
        Value::Some(inner) => {
            Kind::Some.hash(state);
            hash_key(inner, state);
        }
        Value::Seq(items) | Value::Tuple(items) => {
            items.len().hash(state);
            for item in items {
                hash_key(item, state);
            }
        }
        Value::Record(record) => {
            record.name.hash(state);
            for (name, field) in &record.fields {
                name.hash(state);
                hash_key(field, state);
            }
        }
        Value::Variant(variant) => {
            variant.enum_name.hash(state);
            variant.variant.hash(state);
            hash_key(&variant.payload, state);
        }
        // never constructed: KeyValue::new rejects them
        Value::Float(_) | Value::Map(_) => {}
    }
}

impl PartialEq for KeyValue {
    fn eq(&self, other: &Self) -> bool {
        key_eq(&self.0, &other.0)
    }
}

impl Eq for KeyValue {}

impl Hash for KeyValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_key(&self.0, state);
    }
}

impl std::fmt::Display for KeyValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&crate::render::display(&self.0))
    }
}
