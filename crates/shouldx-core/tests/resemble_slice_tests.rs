#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use common::{assert_contains, json, v};
use serde_json::json;
use shouldx_core::should_resemble_slice;

fn check(actual: &[i64], expected: &[i64]) -> String {
    should_resemble_slice(&v(actual), &[v(expected)])
}

#[test]
fn test_different_length() {
    assert_contains(&check(&[1, 1, 2, 2], &[2, 1, 1]), "Length not equal");
}

#[test]
fn test_same_order() {
    assert_eq!(check(&[1, 2, 3], &[1, 2, 3]), "");
}

#[test]
fn test_reversed_order() {
    assert_eq!(check(&[3, 2, 1], &[1, 2, 3]), "");
}

#[test]
fn test_different_quantity() {
    assert_contains(&check(&[1, 2, 2], &[1, 1, 2]), "Not match 1 item");
}

#[test]
fn test_random_order() {
    assert_eq!(check(&[3, 2, 1, 4, 2, 6], &[1, 2, 3, 4, 2, 6]), "");
}

#[test]
fn test_random_order_different_quantity() {
    let msg = check(&[3, 2, 1, 4, 2, 6], &[1, 2, 3, 4, 1, 6]);
    assert_contains(&msg, "Not match 3 items");
    assert_contains(&msg, "\"slice[0]: 1 != 3\"");
    assert_contains(&msg, "\"slice[4]: 1 != 2\"");
}

#[test]
fn test_both_must_be_slice() {
    let msg = should_resemble_slice(&v(&[1, 2]), &[v(&2)]);
    assert_contains(&msg, "(Should equal slice: Both must be slice)!");
}

#[test]
fn test_records_in_any_order() {
    let actual = json(json!([{"id": 2, "tags": ["b"]}, {"id": 1, "tags": []}]));
    let expected = json(json!([{"id": 1, "tags": []}, {"id": 2, "tags": ["b"]}]));
    assert_eq!(should_resemble_slice(&actual, &[expected]), "");
}

#[test]
fn test_message_layout() {
    let msg = check(&[1], &[2]);
    assert_eq!(
        msg,
        "Expected: '(seq) (len=1) {\n (int) 2\n}'\n\
         Actual:   '(seq) (len=1) {\n (int) 1\n}'\n\
         (Should equal slice: Not match 1 item: (differences) (len=1) {\n \"slice[0]: 2 != 1\"\n})!"
    );
}

#[test]
fn test_large_floats_do_not_match() {
    let msg = should_resemble_slice(&v(&[1e300_f64]), &[v(&[2e300_f64])]);
    assert_contains(&msg, "Not match 1 item");
    assert_contains(&msg, "slice[0]: 2e300 != 1e300");
    assert!(!should_resemble_slice(&v(&[f64::MAX]), &[v(&[f64::INFINITY])]).is_empty());
}

#[test]
fn test_nan_items_match() {
    assert_eq!(should_resemble_slice(&v(&[f64::NAN, 1.0]), &[v(&[1.0, f64::NAN])]), "");
}
