#![allow(clippy::unwrap_used, clippy::expect_used)]

use serde_json::json;
use shouldx_core::logging_facility::test_capture::init_test_capture;
use shouldx_core::logging_facility::{init, Profile};
use shouldx_core::schema::{
    EVENT_END, EVENT_END_FAIL, EVENT_START, OP_DEEP_EQUAL, OP_RESEMBLE_BY_KEY, OP_RESEMBLE_SLICE,
};
use shouldx_core::{log_assert_fail, log_assert_pass, log_assert_start};
use shouldx_core::{
    should_deep_equal, should_resemble_by_key, should_resemble_slice, Value, ViolationKind,
};

#[test]
fn test_log_assert_start_macro() {
    let capture = init_test_capture();
    let op_name = "test_log_assert_start_unique_1";

    log_assert_start!(op_name, key = "id");

    let events = capture.events_for(op_name);
    assert_eq!(events.len(), 1, "Should have exactly one start event");
    assert_eq!(events[0].event.as_deref(), Some(EVENT_START));
    assert_eq!(events[0].field("key"), Some("id"));
}

#[test]
fn test_log_assert_pass_macro() {
    let capture = init_test_capture();
    let op_name = "test_log_assert_pass_unique_2";

    log_assert_pass!(op_name);

    let events = capture.events_for(op_name);
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].event.as_deref(), Some(EVENT_END));
    assert_eq!(events[0].outcome.as_deref(), Some("pass"));
}

#[test]
fn test_log_assert_fail_includes_code() {
    let capture = init_test_capture();
    let op_name = "test_log_assert_fail_unique_3";

    log_assert_fail!(op_name, ViolationKind::DataQuality);

    let events = capture.events_for(op_name);
    assert_eq!(events.len(), 1, "Should have exactly one failure event");
    let event = &events[0];
    assert_eq!(event.event.as_deref(), Some(EVENT_END_FAIL));
    assert_eq!(event.outcome.as_deref(), Some("fail"));
    assert_eq!(event.field("violation_code"), Some("ERR_DATA_QUALITY"));
    assert_eq!(event.field("violation_kind"), Some("DataQuality"));
}

#[test]
fn test_assertions_emit_start_and_end() {
    let capture = init_test_capture();

    let seq = Value::from(json!([1, 2, 3]));
    assert_eq!(should_resemble_slice(&seq, &[seq.clone()]), "");

    capture.assert_event_exists(OP_RESEMBLE_SLICE, EVENT_START);
    capture.assert_event_exists(OP_RESEMBLE_SLICE, EVENT_END);
}

#[test]
fn test_failed_assertion_logs_violation_code() {
    let capture = init_test_capture();

    let actual = Value::from(json!([{"id": 1}, null]));
    let expected = Value::from(json!([{"id": 1}, {"id": 2}]));
    assert!(!should_resemble_by_key("id")(&actual, &[expected]).is_empty());

    let failures = capture.count_events(|e| {
        e.op.as_deref() == Some(OP_RESEMBLE_BY_KEY)
            && e.event.as_deref() == Some(EVENT_END_FAIL)
            && e.field("violation_code") == Some("ERR_DATA_QUALITY")
    });
    assert!(failures >= 1, "Should log the data quality failure");
}

#[test]
fn test_deep_equal_logs_diff_count() {
    let capture = init_test_capture();

    let msg = should_deep_equal(&Value::from(json!([1, 2])), &[Value::from(json!([2, 1]))]);
    assert!(msg.contains("Not match 2 items"));

    let with_count = capture.count_events(|e| {
        e.field("op") == Some(OP_DEEP_EQUAL) && e.field("diff_count") == Some("2")
    });
    assert!(with_count >= 1);
}

#[test]
fn test_init_after_capture_is_harmless() {
    let _capture = init_test_capture();
    init(Profile::Test);
    init(Profile::Development);
}
