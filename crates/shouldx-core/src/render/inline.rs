//! Compact single-line form of a [`Value`], used inside causes and diff entries.

use crate::value::Value;

/// Render a value on one line without type annotations.
///
/// Strings are written bare, so a key `10` and a key `"10"` read the same;
/// use [`render`](crate::render::render) when the type matters.
pub fn display(value: &Value) -> String {
    match value {
        Value::Null => "<nil>".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Int(n) => n.to_string(),
        Value::Uint(n) => n.to_string(),
        Value::Float(f) => format_float(*f),
        Value::Char(c) => c.to_string(),
        Value::Str(s) => s.clone(),
        Value::Bytes(bytes) => format!("{:?}", bytes),
        Value::Some(inner) => display(inner),
        Value::Seq(items) => format!("[{}]", join(items)),
        Value::Tuple(items) => format!("({})", join(items)),
        Value::Map(entries) => {
            let mut rendered: Vec<String> = entries
                .iter()
                .map(|(k, v)| format!("{}: {}", display(k), display(v)))
                .collect();
            rendered.sort();
            format!("{{{}}}", rendered.join(", "))
        }
        Value::Record(record) => {
            let fields: Vec<String> = record
                .fields
                .iter()
                .map(|(name, v)| format!("{}: {}", name, display(v)))
                .collect();
            format!("{}{{{}}}", record.name, fields.join(", "))
        }
        Value::Variant(variant) => {
            if variant.payload.is_null() {
                variant.qualified_name()
            } else {
                format!("{}({})", variant.qualified_name(), display(&variant.payload))
            }
        }
    }
}

/// Plain decimal for ordinary magnitudes, exponent form for very large or
/// very small ones.
pub fn format_float(f: f64) -> String {
    let magnitude = f.abs();
    if f.is_finite() && magnitude != 0.0 && !(1e-7..1e21).contains(&magnitude) {
        format!("{:e}", f)
    } else {
        f.to_string()
    }
}

fn join(items: &[Value]) -> String {
    items.iter().map(display).collect::<Vec<_>>().join(", ")
}
