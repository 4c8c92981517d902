//! Deep equality with a per-path diff in the failure message.

use crate::assertions::message::{exactly_one, run, Failure, Report, HEADER_DEEP_EQUAL};
use crate::assertions::resemble::check_resemble;
use crate::diff::{diff, render_differences};
use crate::errors::Violation;
use crate::value::Value;
use shouldx_core_types::schema::OP_DEEP_EQUAL;

/// Like [`should_resemble`](crate::assertions::should_resemble), with the
/// mismatching paths listed on failure.
///
/// When the differ finds nothing (it is more lenient than the baseline, for
/// example on timestamps in different offsets) the message carries no cause
/// and is followed by the baseline message.
pub fn should_deep_equal(actual: &Value, expected: &[Value]) -> String {
    run(OP_DEEP_EQUAL, || check_deep_equal(actual, expected))
}

fn check_deep_equal(actual: &Value, expected: &[Value]) -> Result<(), Failure> {
    let expected_value = exactly_one(expected)?;
    let baseline = match check_resemble(actual, expected) {
        Ok(()) => return Ok(()),
        Err(baseline) => baseline,
    };

    let report = Report::new(HEADER_DEEP_EQUAL, expected_value, actual);
    let differences = diff(expected_value, actual);
    if differences.is_empty() {
        return Err(report.fail_without_cause().with_detail(&baseline.message));
    }
    tracing::debug!(
        op = OP_DEEP_EQUAL,
        diff_count = differences.len(),
        "structural differences found"
    );
    Err(report.fail(Violation::NotMatch {
        count: differences.len(),
        rendered_diff: render_differences(&differences),
    }))
}
