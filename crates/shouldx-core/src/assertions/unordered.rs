//! Order-insensitive sequence comparison.

use crate::assertions::message::{exactly_one, run, Failure, Report, HEADER_EQUAL_SLICE};
use crate::diff::{diff, render_differences, Differ};
use crate::errors::Violation;
use crate::value::Value;
use shouldx_core_types::schema::OP_RESEMBLE_SLICE;

/// Pass iff `actual` and the expected sequence are equal as multisets.
///
/// Each actual element consumes the earliest unconsumed expected element it
/// matches. On the first unmatched element the cause reports the diff of the
/// whole sequences, not just the unmatched element.
///
/// ```
/// use shouldx_core::assertions::should_resemble_slice;
/// use shouldx_core::value::to_value;
///
/// let actual = to_value(&[3, 2, 1]).unwrap();
/// let expected = to_value(&[1, 2, 3]).unwrap();
/// assert_eq!(should_resemble_slice(&actual, &[expected]), "");
/// ```
pub fn should_resemble_slice(actual: &Value, expected: &[Value]) -> String {
    run(OP_RESEMBLE_SLICE, || check_resemble_slice(actual, expected))
}

fn check_resemble_slice(actual: &Value, expected: &[Value]) -> Result<(), Failure> {
    let expected = exactly_one(expected)?;
    let report = Report::new(HEADER_EQUAL_SLICE, expected, actual);

    let (Some(actual_items), Some(expected_items)) = (actual.as_sequence(), expected.as_sequence())
    else {
        return Err(report.fail(Violation::NotSlices));
    };
    if actual_items.len() != expected_items.len() {
        return Err(report.fail(Violation::LengthMismatch));
    }

    let differ = Differ::default();
    let mut consumed = vec![false; expected_items.len()];
    let mut count = 0;
    for item in actual_items {
        let matched = expected_items
            .iter()
            .enumerate()
            .position(|(j, candidate)| !consumed[j] && differ.equal(candidate, item));
        match matched {
            Some(j) => {
                consumed[j] = true;
                count += 1;
            }
            None => {
                let differences = diff(expected, actual);
                return Err(report.fail(Violation::NotMatch {
                    count: differences.len(),
                    rendered_diff: render_differences(&differences),
                }));
            }
        }
    }

    if count != actual_items.len() {
        return Err(report.fail(Violation::SlicesNotEqual));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ints(values: &[i64]) -> Value {
        Value::Seq(values.iter().copied().map(Value::Int).collect())
    }

    #[test]
    fn test_tuple_counts_as_sequence() {
        let actual = Value::Tuple(vec![Value::Int(2), Value::Int(1)]);
        assert_eq!(should_resemble_slice(&actual, &[ints(&[1, 2])]), "");
    }

    #[test]
    fn test_map_is_not_a_sequence() {
        let msg = should_resemble_slice(&Value::Map(vec![]), &[ints(&[])]);
        assert!(msg.ends_with("(Should equal slice: Both must be slice)!"));
    }

    #[test]
    fn test_empty_sequences_are_equal() {
        assert_eq!(should_resemble_slice(&ints(&[]), &[ints(&[])]), "");
    }
}
