//! Key extraction from sequence elements.
//!
//! [`check_element_shape`] is the runtime stand-in for inspecting a
//! sequence's element type: it decides up front whether elements can carry
//! a key at all. [`get_key`] then reads the key from one concrete element,
//! unwrapping exactly one enum variant and then exactly one `Some`.

use crate::errors::Violation;
use crate::value::model::{Record, Value};

/// Shape shared by the non-nil elements of a sequence.
#[derive(Debug, Clone, PartialEq)]
enum ElementShape<'a> {
    /// Heterogeneous or enum-wrapped elements; checked per element later
    Dynamic,
    Map,
    Record(&'a Record),
    Unkeyed,
}

fn strip_some(value: &Value) -> &Value {
    match value {
        Value::Some(inner) => inner,
        other => other,
    }
}

fn element_shape(items: &[Value]) -> ElementShape<'_> {
    let mut inspectable = items
        .iter()
        .map(strip_some)
        .filter(|item| !item.is_null());

    let Some(first) = inspectable.next() else {
        return ElementShape::Dynamic;
    };
    let shape = match first {
        Value::Variant(_) => return ElementShape::Dynamic,
        Value::Map(_) => ElementShape::Map,
        Value::Record(record) => ElementShape::Record(record),
        _ => ElementShape::Unkeyed,
    };
    let first_kind = first.kind();

    for item in inspectable {
        let uniform = match (&shape, item) {
            (ElementShape::Record(record), Value::Record(other)) => record.name == other.name,
            _ => item.kind() == first_kind,
        };
        if !uniform {
            return ElementShape::Dynamic;
        }
    }
    shape
}

/// Check that the elements of a sequence can carry `key`.
///
/// # Errors
///
/// - `UnkeyedElements`: elements are uniformly something other than a map or record
/// - `KeyNotFoundSimilar`: record type lacks `key` but has a field differing only in case
/// - `KeyNotFound`: record type lacks `key`
pub fn check_element_shape(items: &[Value], key: &str) -> Result<(), Violation> {
    match element_shape(items) {
        ElementShape::Dynamic | ElementShape::Map => Ok(()),
        ElementShape::Unkeyed => Err(Violation::UnkeyedElements),
        ElementShape::Record(record) => {
            if record.field(key).is_some() {
                return Ok(());
            }
            let lowered = key.to_lowercase();
            let similar = record
                .field_names()
                .filter(|name| name.to_lowercase() == lowered)
                .last();
            match similar {
                Some(similar) => Err(Violation::KeyNotFoundSimilar {
                    key: key.to_string(),
                    similar: similar.to_string(),
                }),
                None => Err(Violation::KeyNotFound {
                    key: key.to_string(),
                }),
            }
        }
    }
}

/// Read `key` from a single element.
///
/// Returns `None` when the element (after unwrapping) is neither a map nor
/// a record, or has no entry/field named `key`. A present entry whose value
/// is nil is returned as `Some(&Value::Null)`.
pub fn get_key<'a>(item: &'a Value, key: &str) -> Option<&'a Value> {
    let mut current = item;
    if let Value::Variant(variant) = current {
        current = &variant.payload;
    }
    if let Value::Some(inner) = current {
        current = inner;
    }

    match current {
        Value::Map(entries) => entries
            .iter()
            .find(|(entry_key, _)| names_key(entry_key, key))
            .map(|(_, value)| value),
        Value::Record(record) => record.field(key),
        _ => None,
    }
}

fn names_key(entry_key: &Value, key: &str) -> bool {
    match entry_key {
        Value::Str(s) => s == key,
        Value::Char(c) => {
            let mut chars = key.chars();
            chars.next() == Some(*c) && chars.next().is_none()
        }
        _ => false,
    }
}
