//! Failure message construction shared by every assertion.

use crate::errors::{Violation, ViolationKind};
use crate::render::render;
use crate::value::Value;
use crate::{log_assert_fail, log_assert_pass, log_assert_start};

pub const HEADER_RESEMBLE: &str = "Should resemble";
pub const HEADER_DEEP_EQUAL: &str = "Should deep equal";
pub const HEADER_EQUAL_SLICE: &str = "Should equal slice";

/// A failed assertion and the text handed back to the host framework.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    pub kind: ViolationKind,
    pub message: String,
}

impl Failure {
    /// A failure whose message is the cause alone, with no value dumps
    pub fn bare(violation: Violation) -> Self {
        Self {
            kind: violation.kind(),
            message: violation.to_string(),
        }
    }

    /// Append a further line to the message
    pub fn with_detail(mut self, detail: &str) -> Self {
        self.message.push('\n');
        self.message.push_str(detail);
        self
    }

    pub fn into_message(self) -> String {
        self.message
    }
}

/// Frames a cause between the rendered expected and actual values.
///
/// ```text
/// Expected: '<render(expected)>'
/// Actual:   '<render(actual)>'
/// (<header>: <cause>)!
/// ```
pub struct Report<'a> {
    header: &'static str,
    expected: &'a Value,
    actual: &'a Value,
}

impl<'a> Report<'a> {
    pub fn new(header: &'static str, expected: &'a Value, actual: &'a Value) -> Self {
        Self {
            header,
            expected,
            actual,
        }
    }

    pub fn fail(&self, violation: Violation) -> Failure {
        Failure {
            kind: violation.kind(),
            message: self.frame(Some(&violation.to_string())),
        }
    }

    pub fn fail_without_cause(&self) -> Failure {
        Failure {
            kind: ViolationKind::Mismatch,
            message: self.frame(None),
        }
    }

    fn frame(&self, cause: Option<&str>) -> String {
        let reason = match cause {
            Some(cause) => format!("{}: {}", self.header, cause),
            None => self.header.to_string(),
        };
        format!(
            "Expected: '{}'\nActual:   '{}'\n({})!",
            render(self.expected),
            render(self.actual),
            reason
        )
    }
}

/// The single comparison value, or the misuse failure.
///
/// # Errors
///
/// Returns an `ArgumentCount` failure unless `expected` has exactly one element.
pub fn exactly_one(expected: &[Value]) -> Result<&Value, Failure> {
    match expected {
        [only] => Ok(only),
        _ => Err(Failure::bare(Violation::ArgumentCount {
            required: 1,
            provided: expected.len(),
        })),
    }
}

/// Run a check under the assertion logging protocol and turn its outcome
/// into the framework's return convention (empty means pass).
pub(crate) fn run<F>(op: &'static str, check: F) -> String
where
    F: FnOnce() -> Result<(), Failure>,
{
    log_assert_start!(op);
    match check() {
        Ok(()) => {
            log_assert_pass!(op);
            String::new()
        }
        Err(failure) => {
            log_assert_fail!(op, failure.kind);
            failure.into_message()
        }
    }
}
