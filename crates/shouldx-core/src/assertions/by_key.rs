//! Key-indexed sequence comparison.
//!
//! Both sequences are re-indexed by a named field or map entry, then every
//! expected item is looked up in `actual` by key and diffed. Validation runs
//! to completion before any comparison and the first violation wins.

use crate::assertions::message::{exactly_one, run, Failure, Report, HEADER_EQUAL_SLICE};
use crate::diff::{diff, render_differences};
use crate::errors::Violation;
use crate::value::{check_element_shape, get_key, KeyValue, Value};
use shouldx_core_types::schema::OP_RESEMBLE_BY_KEY;
use std::collections::HashMap;
use std::fmt::Display;
use std::hash::Hash;

pub(crate) const ACTUAL: &str = "actual";
pub(crate) const EXPECTED: &str = "expected";

/// Build a comparator that matches items of two sequences by `key`.
///
/// Elements may be maps, records, `Some` of either, or enum variants wrapping
/// any of those. Keys must be non-nil, hashable and unique per sequence.
///
/// ```
/// use serde_json::json;
/// use shouldx_core::assertions::should_resemble_by_key;
/// use shouldx_core::value::Value;
///
/// let by_id = should_resemble_by_key("id");
/// let actual = Value::from(json!([{"id": 30}, {"id": 10}, {"id": 20}]));
/// let expected = Value::from(json!([{"id": 10}, {"id": 20}, {"id": 30}]));
/// assert_eq!(by_id(&actual, &[expected]), "");
/// ```
pub fn should_resemble_by_key(key: &str) -> impl Fn(&Value, &[Value]) -> String + Send + Sync + 'static {
    let key = key.to_string();
    move |actual: &Value, expected: &[Value]| {
        run(OP_RESEMBLE_BY_KEY, || check_by_key(&key, actual, expected))
    }
}

fn check_by_key(key: &str, actual: &Value, expected: &[Value]) -> Result<(), Failure> {
    let expected = exactly_one(expected)?;
    let report = Report::new(HEADER_EQUAL_SLICE, expected, actual);

    let (Some(actual_items), Some(expected_items)) = (actual.as_sequence(), expected.as_sequence())
    else {
        return Err(report.fail(Violation::NotSlices));
    };
    check_element_shape(actual_items, key).map_err(|v| report.fail(v))?;
    check_element_shape(expected_items, key).map_err(|v| report.fail(v))?;
    if actual_items.len() != expected_items.len() {
        return Err(report.fail(Violation::LengthMismatch));
    }
    tracing::debug!(
        op = OP_RESEMBLE_BY_KEY,
        key = %key,
        actual_len = actual_items.len(),
        expected_len = expected_items.len(),
        "indexing sequences"
    );

    compare_indexed(
        key,
        (actual_items, actual_items),
        (expected_items, expected_items),
        |name, index, item| dynamic_key(name, key, index, item),
    )
    .map_err(|v| report.fail(v))
}

/// Read and validate the key of one element.
fn dynamic_key(
    name: &'static str,
    key: &str,
    index: usize,
    item: &Value,
) -> Result<KeyValue, Violation> {
    if item.is_null() {
        return Err(Violation::NilItem { name, index });
    }
    let value = get_key(item, key).ok_or(Violation::KeyUnavailable { name, index })?;
    if value.is_null() {
        return Err(Violation::NilKey {
            name,
            index,
            key: key.to_string(),
        });
    }
    KeyValue::new(value.clone()).ok_or_else(|| Violation::IncomparableKey {
        name,
        index,
        key: key.to_string(),
        type_name: value.type_name(),
    })
}

/// Key -> position of one sequence, plus expected's keys in original order.
pub(crate) struct KeyIndex<K> {
    pub order: Vec<K>,
    pub positions: HashMap<K, usize>,
}

/// Index `items` by the key `key_of` reads from each of them.
///
/// # Errors
///
/// Returns the first error of `key_of`, or `DuplicateKey` naming the earlier
/// index when two items share a key.
pub(crate) fn index_by<T, K, F>(
    name: &'static str,
    items: &[T],
    mut key_of: F,
) -> Result<KeyIndex<K>, Violation>
where
    K: Eq + Hash + Clone + Display,
    F: FnMut(&'static str, usize, &T) -> Result<K, Violation>,
{
    let mut index = KeyIndex {
        order: Vec::with_capacity(items.len()),
        positions: HashMap::with_capacity(items.len()),
    };
    for (i, item) in items.iter().enumerate() {
        let key = key_of(name, i, item)?;
        if let Some(&previous) = index.positions.get(&key) {
            return Err(Violation::DuplicateKey {
                name,
                first: previous,
                second: i,
                value: key.to_string(),
            });
        }
        index.positions.insert(key.clone(), i);
        index.order.push(key);
    }
    Ok(index)
}

/// Index both sequences (expected first) and diff each expected item against
/// the actual item with the same key, in expected order.
///
/// `actual_values` and `expected_values` must be the inspectable forms of
/// `actual` and `expected`, position for position.
pub(crate) fn compare_indexed<T, K, F>(
    key: &str,
    (actual, actual_values): (&[T], &[Value]),
    (expected, expected_values): (&[T], &[Value]),
    mut key_of: F,
) -> Result<(), Violation>
where
    K: Eq + Hash + Clone + Display,
    F: FnMut(&'static str, usize, &T) -> Result<K, Violation>,
{
    let expected_index = index_by(EXPECTED, expected, &mut key_of)?;
    let actual_index = index_by(ACTUAL, actual, &mut key_of)?;

    for (i, item_key) in expected_index.order.iter().enumerate() {
        let Some(&position) = actual_index.positions.get(item_key) else {
            return Err(Violation::MissingItem {
                key: key.to_string(),
                value: item_key.to_string(),
            });
        };
        let differences = diff(&actual_values[position], &expected_values[i]);
        if !differences.is_empty() {
            return Err(Violation::ItemDiffers {
                key: key.to_string(),
                value: item_key.to_string(),
                rendered_diff: render_differences(&differences),
            });
        }
    }
    Ok(())
}
