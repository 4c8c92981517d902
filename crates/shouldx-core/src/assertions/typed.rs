//! Key-indexed comparison over statically typed items.
//!
//! The key is read by a closure instead of by name, so a key that cannot be
//! hashed is a compile error rather than a runtime failure.

use crate::assertions::by_key::{compare_indexed, ACTUAL};
use crate::assertions::message::{run, Failure, Report, HEADER_EQUAL_SLICE};
use crate::errors::Violation;
use crate::value::{to_value, Value};
use serde::Serialize;
use shouldx_core_types::schema::OP_RESEMBLE_BY;
use std::fmt::Display;
use std::hash::Hash;

/// Build a comparator matching items of two slices by the key `key_fn` reads.
///
/// `key` names the key in messages. A `None` key is reported as a nil key;
/// every other message matches [`should_resemble_by_key`](crate::assertions::should_resemble_by_key).
///
/// ```
/// use serde::Serialize;
/// use shouldx_core::assertions::should_resemble_by;
///
/// #[derive(Serialize)]
/// struct Row {
///     id: u32,
///     name: &'static str,
/// }
///
/// let by_id = should_resemble_by("id", |row: &Row| Some(row.id));
/// let actual = [Row { id: 2, name: "b" }, Row { id: 1, name: "a" }];
/// let expected = [Row { id: 1, name: "a" }, Row { id: 2, name: "b" }];
/// assert_eq!(by_id(&actual, &expected), "");
/// ```
pub fn should_resemble_by<T, K, F>(key: &str, key_fn: F) -> impl Fn(&[T], &[T]) -> String
where
    T: Serialize,
    K: Eq + Hash + Clone + Display,
    F: Fn(&T) -> Option<K>,
{
    let key = key.to_string();
    move |actual: &[T], expected: &[T]| {
        run(OP_RESEMBLE_BY, || check_by(&key, &key_fn, actual, expected))
    }
}

fn check_by<T, K, F>(key: &str, key_fn: &F, actual: &[T], expected: &[T]) -> Result<(), Failure>
where
    T: Serialize,
    K: Eq + Hash + Clone + Display,
    F: Fn(&T) -> Option<K>,
{
    let actual_value = to_value(actual).map_err(|err| Failure::bare(err.into()))?;
    let expected_value = to_value(expected).map_err(|err| Failure::bare(err.into()))?;
    let report = Report::new(HEADER_EQUAL_SLICE, &expected_value, &actual_value);

    let (Some(actual_values), Some(expected_values)) =
        (actual_value.as_sequence(), expected_value.as_sequence())
    else {
        return Err(report.fail(Violation::NotSlices));
    };
    if actual.len() != expected.len() {
        return Err(report.fail(Violation::LengthMismatch));
    }

    compare_indexed(
        key,
        (actual, actual_values),
        (expected, expected_values),
        |name, index, item| {
            let values = if name == ACTUAL {
                actual_values
            } else {
                expected_values
            };
            if values.get(index).is_some_and(Value::is_null) {
                return Err(Violation::NilItem { name, index });
            }
            key_fn(item).ok_or_else(|| Violation::NilKey {
                name,
                index,
                key: key.to_string(),
            })
        },
    )
    .map_err(|v| report.fail(v))
}
