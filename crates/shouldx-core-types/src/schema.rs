//! Canonical schema constants for structured logging and events
//!
//! These constants keep assertion log events consistent across the workspace.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_OUTCOME: &str = "outcome";

// Assertion context
pub const FIELD_KEY: &str = "key";
pub const FIELD_ACTUAL_LEN: &str = "actual_len";
pub const FIELD_EXPECTED_LEN: &str = "expected_len";
pub const FIELD_DIFF_COUNT: &str = "diff_count";

// Violation fields
pub const FIELD_VIOLATION_KIND: &str = "violation_kind";
pub const FIELD_VIOLATION_CODE: &str = "violation_code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_FAIL: &str = "end_fail";

// Canonical operation names
pub const OP_RESEMBLE: &str = "should_resemble";
pub const OP_DEEP_EQUAL: &str = "should_deep_equal";
pub const OP_RESEMBLE_SLICE: &str = "should_resemble_slice";
pub const OP_RESEMBLE_BY_KEY: &str = "should_resemble_by_key";
pub const OP_RESEMBLE_BY: &str = "should_resemble_by";
