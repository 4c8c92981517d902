//! Type-annotated multi-line dump of a [`Value`].

use crate::render::inline::{display, format_float};
use crate::value::{Value, Variant};
use std::fmt::Write as _;

/// Render a value as an indented, type-annotated dump.
///
/// Never fails. Map entries are sorted by their rendered key so the output
/// is deterministic regardless of map iteration order.
///
/// ```
/// use shouldx_core::render::render;
/// use shouldx_core::value::Value;
///
/// let dump = render(&Value::Seq(vec![Value::Int(1), Value::Int(2)]));
/// assert_eq!(dump, "(seq) (len=2) {\n (int) 1,\n (int) 2\n}");
/// ```
pub fn render(value: &Value) -> String {
    let mut out = String::new();
    write_value(&mut out, value, 0, 0);
    out
}

fn indent(out: &mut String, depth: usize) {
    for _ in 0..depth {
        out.push(' ');
    }
}

fn annotation(out: &mut String, stars: usize, type_name: &str) {
    out.push('(');
    for _ in 0..stars {
        out.push('*');
    }
    out.push_str(type_name);
    out.push_str(") ");
}

fn write_value(out: &mut String, value: &Value, depth: usize, stars: usize) {
    match value {
        Value::Null => {
            if stars > 0 {
                annotation(out, stars, "nil");
            }
            out.push_str("<nil>");
        }
        Value::Bool(b) => {
            annotation(out, stars, "bool");
            let _ = write!(out, "{}", b);
        }
        Value::Int(n) => {
            annotation(out, stars, "int");
            let _ = write!(out, "{}", n);
        }
        Value::Uint(n) => {
            annotation(out, stars, "uint");
            let _ = write!(out, "{}", n);
        }
        Value::Float(f) => {
            annotation(out, stars, "float");
            out.push_str(&format_float(*f));
        }
        Value::Char(c) => {
            annotation(out, stars, "char");
            let _ = write!(out, "{:?}", c);
        }
        Value::Str(s) => {
            annotation(out, stars, "string");
            let _ = write!(out, "(len={}) {:?}", s.len(), s);
        }
        Value::Bytes(bytes) => {
            annotation(out, stars, "bytes");
            let hex: Vec<String> = bytes.iter().map(|b| format!("0x{:02x}", b)).collect();
            let _ = write!(out, "(len={}) [{}]", bytes.len(), hex.join(", "));
        }
        Value::Some(inner) => write_value(out, inner, depth, stars + 1),
        Value::Seq(items) => {
            annotation(out, stars, "seq");
            let _ = write!(out, "(len={}) ", items.len());
            write_block(out, depth, items.iter().map(|item| (None, item)));
        }
        Value::Tuple(items) => {
            annotation(out, stars, "tuple");
            let _ = write!(out, "(len={}) ", items.len());
            write_block(out, depth, items.iter().map(|item| (None, item)));
        }
        Value::Map(entries) => {
            annotation(out, stars, &value.type_name());
            let _ = write!(out, "(len={}) ", entries.len());
            let mut sorted: Vec<(String, &Value)> = entries
                .iter()
                .map(|(key, value)| (render_key(key), value))
                .collect();
            sorted.sort_by(|a, b| a.0.cmp(&b.0));
            write_block(
                out,
                depth,
                sorted.iter().map(|(key, value)| (Some(key.as_str()), *value)),
            );
        }
        Value::Record(record) => {
            annotation(out, stars, &record.name);
            write_block(
                out,
                depth,
                record
                    .fields
                    .iter()
                    .map(|(name, value)| (Some(name.as_str()), value)),
            );
        }
        Value::Variant(variant) => write_variant(out, variant, depth, stars),
    }
}

fn write_variant(out: &mut String, variant: &Variant, depth: usize, stars: usize) {
    out.push('(');
    for _ in 0..stars {
        out.push('*');
    }
    out.push_str(&variant.qualified_name());
    out.push(')');
    if !variant.payload.is_null() {
        out.push(' ');
        write_value(out, &variant.payload, depth, 0);
    }
}

/// Map keys render on a single line so each entry stays on one row.
fn render_key(key: &Value) -> String {
    match key {
        Value::Str(s) => format!("{:?}", s),
        other => display(other),
    }
}

fn write_block<'a>(
    out: &mut String,
    depth: usize,
    children: impl ExactSizeIterator<Item = (Option<&'a str>, &'a Value)>,
) {
    if children.len() == 0 {
        out.push_str("{}");
        return;
    }
    out.push_str("{\n");
    let count = children.len();
    for (i, (label, child)) in children.enumerate() {
        indent(out, depth + 1);
        if let Some(label) = label {
            out.push_str(label);
            out.push_str(": ");
        }
        write_value(out, child, depth + 1, 0);
        if i + 1 < count {
            out.push(',');
        }
        out.push('\n');
    }
    indent(out, depth);
    out.push('}');
}
