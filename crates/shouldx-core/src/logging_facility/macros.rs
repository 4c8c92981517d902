//! Canonical assertion logging macros
//!
//! Every assertion emits one `start` event and then exactly one of `end`
//! (pass) or `end_fail` (fail).

/// Log the start of an assertion
///
/// # Example
///
/// ```
/// # use shouldx_core::log_assert_start;
/// log_assert_start!("should_resemble");
/// log_assert_start!("should_resemble_by_key", key = "id");
/// ```
#[macro_export]
macro_rules! log_assert_start {
    ($op:expr) => {
        tracing::debug!(
            component = module_path!(),
            op = $op,
            event = $crate::schema::EVENT_START,
        );
    };
    ($op:expr, $($field:tt)*) => {
        tracing::debug!(
            component = module_path!(),
            op = $op,
            event = $crate::schema::EVENT_START,
            $($field)*
        );
    };
}

/// Log a passing assertion
///
/// # Example
///
/// ```
/// # use shouldx_core::log_assert_pass;
/// log_assert_pass!("should_resemble");
/// ```
#[macro_export]
macro_rules! log_assert_pass {
    ($op:expr) => {
        tracing::debug!(
            component = module_path!(),
            op = $op,
            event = $crate::schema::EVENT_END,
            outcome = $crate::Outcome::Pass.as_str(),
        );
    };
}

/// Log a failing assertion with its violation kind
///
/// # Example
///
/// ```
/// # use shouldx_core::log_assert_fail;
/// use shouldx_core::errors::ViolationKind;
/// log_assert_fail!("should_resemble_slice", ViolationKind::Mismatch);
/// ```
#[macro_export]
macro_rules! log_assert_fail {
    ($op:expr, $kind:expr) => {{
        let kind: $crate::errors::ViolationKind = $kind;
        tracing::debug!(
            component = module_path!(),
            op = $op,
            event = $crate::schema::EVENT_END_FAIL,
            outcome = $crate::Outcome::Fail.as_str(),
            violation_kind = ?kind,
            violation_code = kind.code(),
        );
    }};
}
