//! Structural diff computation engine.
//!
//! The core entry point is [`Differ::diff`], which walks two values in
//! lockstep and records a [`Difference`] for every mismatching leaf.

use crate::config::DiffConfig;
use crate::diff::model::{Difference, NO_KEY, NO_VALUE};
use crate::render::{display, format_float};
use crate::value::{Record, Value, Variant};
use chrono::DateTime;

/// Compute the differences between `a` and `b` with the default configuration.
pub fn diff(a: &Value, b: &Value) -> Vec<Difference> {
    Differ::default().diff(a, b)
}

/// Structural differ with explicit settings.
#[derive(Debug, Clone, Default)]
pub struct Differ {
    config: DiffConfig,
}

impl Differ {
    pub fn new(config: DiffConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DiffConfig {
        &self.config
    }

    /// List every mismatch between `a` and `b`, up to `max_diff` entries.
    ///
    /// Descriptions read `<a side> != <b side>`.
    pub fn diff(&self, a: &Value, b: &Value) -> Vec<Difference> {
        let mut walk = Walk {
            config: &self.config,
            limit: self.config.max_diff,
            path: Vec::new(),
            out: Vec::new(),
        };
        walk.compare(a, b, 0);
        walk.out
    }

    /// Whether `a` and `b` have no differences. Stops at the first one.
    pub fn equal(&self, a: &Value, b: &Value) -> bool {
        let mut walk = Walk {
            config: &self.config,
            limit: 1,
            path: Vec::new(),
            out: Vec::new(),
        };
        walk.compare(a, b, 0);
        walk.out.is_empty()
    }
}

struct Walk<'c> {
    config: &'c DiffConfig,
    limit: usize,
    path: Vec<String>,
    out: Vec<Difference>,
}

impl Walk<'_> {
    fn full(&self) -> bool {
        self.limit > 0 && self.out.len() >= self.limit
    }

    fn record(&mut self, left: &str, right: &str) {
        if self.full() {
            return;
        }
        self.out
            .push(Difference::new(self.path.join("."), left, right));
    }

    fn nested(&mut self, segment: String, a: &Value, b: &Value, depth: usize) {
        self.path.push(segment);
        self.compare(a, b, depth + 1);
        self.path.pop();
    }

    fn nested_one_sided(&mut self, segment: String, left: &str, right: &str) {
        self.path.push(segment);
        self.record(left, right);
        self.path.pop();
    }

    fn compare(&mut self, a: &Value, b: &Value, depth: usize) {
        if self.full() {
            return;
        }
        if self.config.max_depth > 0 && depth > self.config.max_depth {
            return;
        }

        match (a, b) {
            (Value::Null, Value::Null) => {}
            (Value::Null, other) | (other, Value::Null) => {
                // keep left/right order in the description
                let rendered = display(other);
                if a.is_null() {
                    self.record("<nil>", &rendered);
                } else {
                    self.record(&rendered, "<nil>");
                }
            }
            (Value::Bool(x), Value::Bool(y)) if x != y => self.record(&x.to_string(), &y.to_string()),
            (Value::Int(x), Value::Int(y)) if x != y => self.record(&x.to_string(), &y.to_string()),
            (Value::Uint(x), Value::Uint(y)) if x != y => self.record(&x.to_string(), &y.to_string()),
            (Value::Int(x), Value::Uint(y)) if i128::from(*x) != i128::from(*y) => {
                self.record(&x.to_string(), &y.to_string())
            }
            (Value::Uint(x), Value::Int(y)) if i128::from(*x) != i128::from(*y) => {
                self.record(&x.to_string(), &y.to_string())
            }
            (Value::Float(x), Value::Float(y)) => {
                if !self.floats_equal(*x, *y) {
                    self.record(&format_float(*x), &format_float(*y));
                }
            }
            (Value::Char(x), Value::Char(y)) if x != y => self.record(&x.to_string(), &y.to_string()),
            (Value::Str(x), Value::Str(y)) => {
                if x != y && !self.same_instant(x, y) {
                    self.record(x, y);
                }
            }
            (Value::Bytes(x), Value::Bytes(y)) if x != y => {
                self.record(&display(a), &display(b))
            }
            (Value::Some(x), Value::Some(y)) => self.compare(x, y, depth),
            (Value::Seq(x), Value::Seq(y)) => self.compare_elements("slice", x, y, depth),
            (Value::Tuple(x), Value::Tuple(y)) => self.compare_elements("array", x, y, depth),
            (Value::Map(x), Value::Map(y)) => self.compare_maps(x, y, depth),
            (Value::Record(x), Value::Record(y)) if x.name == y.name => {
                self.compare_records(x, y, depth)
            }
            (Value::Variant(x), Value::Variant(y)) if same_variant(x, y) => {
                self.compare(&x.payload, &y.payload, depth)
            }
            // scalar guards above fall through here when the values are equal
            _ if scalar_equal(a, b) => {}
            _ => self.record(&a.type_name(), &b.type_name()),
        }
    }

    /// Equal when both print the same with `float_precision` decimals.
    ///
    /// Formatting never overflows, and NaN prints as `NaN` on both sides.
    fn floats_equal(&self, x: f64, y: f64) -> bool {
        if x == y {
            return true;
        }
        let precision = self.config.float_precision as usize;
        format!("{:.*}", precision, x) == format!("{:.*}", precision, y)
    }

    fn same_instant(&self, x: &str, y: &str) -> bool {
        if !self.config.timestamps_by_instant {
            return false;
        }
        match (DateTime::parse_from_rfc3339(x), DateTime::parse_from_rfc3339(y)) {
            (Ok(x), Ok(y)) => x == y,
            _ => false,
        }
    }

    fn compare_elements(&mut self, label: &str, x: &[Value], y: &[Value], depth: usize) {
        let longest = x.len().max(y.len());
        for i in 0..longest {
            if self.full() {
                return;
            }
            let segment = format!("{}[{}]", label, i);
            match (x.get(i), y.get(i)) {
                (Some(a), Some(b)) => self.nested(segment, a, b, depth),
                (Some(a), None) => self.nested_one_sided(segment, &display(a), NO_VALUE),
                (None, Some(b)) => self.nested_one_sided(segment, NO_VALUE, &display(b)),
                (None, None) => {}
            }
        }
    }

    fn compare_maps(&mut self, x: &[(Value, Value)], y: &[(Value, Value)], depth: usize) {
        let mut left: Vec<(String, &Value, &Value)> = x
            .iter()
            .map(|(k, v)| (display(k), k, v))
            .collect();
        left.sort_by(|a, b| a.0.cmp(&b.0));

        for (rendered_key, key, value) in &left {
            if self.full() {
                return;
            }
            let segment = format!("map[{}]", rendered_key);
            match y.iter().find(|(other, _)| other == *key) {
                Some((_, other_value)) => self.nested(segment, value, other_value, depth),
                None => self.nested_one_sided(segment, &display(value), NO_KEY),
            }
        }

        let mut right_only: Vec<(String, &Value)> = y
            .iter()
            .filter(|(k, _)| !x.iter().any(|(other, _)| other == k))
            .map(|(k, v)| (display(k), v))
            .collect();
        right_only.sort_by(|a, b| a.0.cmp(&b.0));
        for (rendered_key, value) in right_only {
            if self.full() {
                return;
            }
            self.nested_one_sided(format!("map[{}]", rendered_key), NO_KEY, &display(value));
        }
    }

    fn compare_records(&mut self, x: &Record, y: &Record, depth: usize) {
        for (name, value) in &x.fields {
            if self.full() {
                return;
            }
            match y.field(name) {
                Some(other) => self.nested(name.clone(), value, other, depth),
                None => self.nested_one_sided(name.clone(), &display(value), NO_VALUE),
            }
        }
        for (name, value) in &y.fields {
            if self.full() {
                return;
            }
            if x.field(name).is_none() {
                self.nested_one_sided(name.clone(), NO_VALUE, &display(value));
            }
        }
    }
}

fn same_variant(x: &Variant, y: &Variant) -> bool {
    x.enum_name == y.enum_name && x.variant == y.variant
}

fn scalar_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Int(x), Value::Uint(y)) | (Value::Uint(y), Value::Int(x)) => {
            i128::from(*x) == i128::from(*y)
        }
        (Value::Bool(_), Value::Bool(_))
        | (Value::Int(_), Value::Int(_))
        | (Value::Uint(_), Value::Uint(_))
        | (Value::Char(_), Value::Char(_))
        | (Value::Bytes(_), Value::Bytes(_)) => a == b,
        _ => false,
    }
}
