//! Structural-equality assertions.
//!
//! Every assertion follows the host framework convention: it returns an
//! empty string on success and a complete, human-readable failure message
//! otherwise. Nothing here panics on malformed input.
//!
//! | Assertion | Header |
//! |---|---|
//! | [`should_resemble`] | `Should resemble` |
//! | [`should_deep_equal`] | `Should deep equal` |
//! | [`should_resemble_slice`] | `Should equal slice` |
//! | [`should_resemble_by_key`], [`should_resemble_by`] | `Should equal slice` |

pub mod by_key;
pub mod deep_equal;
pub mod message;
pub mod resemble;
pub mod typed;
pub mod unordered;

pub use by_key::should_resemble_by_key;
pub use deep_equal::should_deep_equal;
pub use message::{Failure, Report};
pub use resemble::should_resemble;
pub use typed::should_resemble_by;
pub use unordered::should_resemble_slice;

use crate::errors::{ValueError, Violation};
use crate::value::Value;

/// Apply an assertion to values that still have to be converted.
///
/// A conversion error is reported as the failure message instead of being
/// propagated, so callers always get the framework's string convention.
pub fn evaluate<F>(
    assertion: &F,
    actual: Result<Value, ValueError>,
    expected: Vec<Result<Value, ValueError>>,
) -> String
where
    F: Fn(&Value, &[Value]) -> String + ?Sized,
{
    let converted = actual.and_then(|actual| {
        let expected = expected.into_iter().collect::<Result<Vec<_>, _>>()?;
        Ok((actual, expected))
    });
    match converted {
        Ok((actual, expected)) => assertion(&actual, &expected),
        Err(err) => {
            tracing::debug!(component = module_path!(), error = %err, "value not inspectable");
            Violation::from(err).to_string()
        }
    }
}

/// Assert inside a test, panicking with the failure message.
///
/// Every argument is converted with [`to_value`](crate::value::to_value).
///
/// ```
/// use shouldx_core::so;
/// use shouldx_core::assertions::{should_resemble_by_key, should_resemble_slice};
///
/// so!(vec![3, 2, 1], should_resemble_slice, vec![1, 2, 3]);
/// so!(
///     serde_json::json!([{"id": 2}, {"id": 1}]),
///     should_resemble_by_key("id"),
///     serde_json::json!([{"id": 1}, {"id": 2}])
/// );
/// ```
#[macro_export]
macro_rules! so {
    ($actual:expr, $assertion:expr $(, $expected:expr)* $(,)?) => {{
        let message = $crate::assertions::evaluate(
            &$assertion,
            $crate::value::to_value(&$actual),
            ::std::vec![$($crate::value::to_value(&$expected)),*],
        );
        if !message.is_empty() {
            panic!("{}", message);
        }
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evaluate_reports_conversion_errors() {
        let msg = evaluate(
            &should_resemble,
            Ok(Value::Null),
            vec![Err(ValueError::MapValueWithoutKey)],
        );
        assert_eq!(
            msg,
            "Could not inspect value: Map value serialized without a key"
        );
    }

    #[test]
    fn test_evaluate_passes_argument_count_through() {
        let msg = evaluate(&should_deep_equal, Ok(Value::Null), vec![]);
        assert_eq!(
            msg,
            "This assertion requires exactly 1 comparison values (you provided 0)."
        );
    }

    #[test]
    #[should_panic(expected = "Length not equal")]
    fn test_so_panics_with_message() {
        crate::so!(vec![1, 2], should_resemble_slice, vec![1]);
    }
}
