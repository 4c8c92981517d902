//! Baseline structural equality.

use crate::assertions::message::{exactly_one, run, Failure, Report, HEADER_RESEMBLE};
use crate::value::Value;
use shouldx_core_types::schema::OP_RESEMBLE;

/// Pass iff `actual` equals the single expected value under `Value` equality.
///
/// The check is representation-sensitive: `1i64` and `1u64` differ, as do two
/// RFC 3339 strings naming the same instant in different offsets.
///
/// ```
/// use shouldx_core::assertions::should_resemble;
/// use shouldx_core::value::Value;
///
/// assert_eq!(should_resemble(&Value::Int(1), &[Value::Int(1)]), "");
/// assert!(should_resemble(&Value::Int(1), &[Value::Uint(1)]).ends_with("(Should resemble)!"));
/// ```
pub fn should_resemble(actual: &Value, expected: &[Value]) -> String {
    run(OP_RESEMBLE, || check_resemble(actual, expected))
}

pub(crate) fn check_resemble(actual: &Value, expected: &[Value]) -> Result<(), Failure> {
    let expected = exactly_one(expected)?;
    if actual == expected {
        Ok(())
    } else {
        Err(Report::new(HEADER_RESEMBLE, expected, actual).fail_without_cause())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unordered_maps_resemble() {
        let a = Value::Map(vec![
            (Value::Str("a".into()), Value::Int(1)),
            (Value::Str("b".into()), Value::Int(2)),
        ]);
        let b = Value::Map(vec![
            (Value::Str("b".into()), Value::Int(2)),
            (Value::Str("a".into()), Value::Int(1)),
        ]);
        assert_eq!(should_resemble(&a, &[b]), "");
    }

    #[test]
    fn test_argument_count() {
        let msg = should_resemble(&Value::Null, &[Value::Null, Value::Null]);
        assert_eq!(
            msg,
            "This assertion requires exactly 1 comparison values (you provided 2)."
        );
    }
}
