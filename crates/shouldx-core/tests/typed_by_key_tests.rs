#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use common::{assert_contains, s, S};
use serde::Serialize;
use shouldx_core::should_resemble_by;

#[derive(Debug, Clone, Serialize)]
struct Account {
    login: String,
    balance: i64,
}

fn account(login: &str, balance: i64) -> Account {
    Account {
        login: login.to_string(),
        balance,
    }
}

#[test]
fn test_reordered_records_pass() {
    let by_id = should_resemble_by("ID", |row: &S| Some(row.id));
    assert_eq!(by_id(&[s(30), s(10), s(20)], &[s(10), s(20), s(30)]), "");
}

#[test]
fn test_string_keys() {
    let by_login = should_resemble_by("login", |a: &Account| Some(a.login.clone()));
    let actual = [account("bob", 5), account("amy", 1)];
    let expected = [account("amy", 1), account("bob", 6)];
    let msg = by_login(&actual, &expected);
    assert_contains(&msg, "Item with login=`bob` is different");
    assert_contains(&msg, "\"balance: 5 != 6\"");
}

#[test]
fn test_length_not_equal() {
    let by_id = should_resemble_by("ID", |row: &S| Some(row.id));
    assert_contains(&by_id(&[s(1)], &[s(1), s(2)]), "Length not equal");
}

#[test]
fn test_duplicated_keys() {
    let by_id = should_resemble_by("ID", |row: &S| Some(row.id));
    let msg = by_id(&[s(10), s(20)], &[s(10), s(10)]);
    assert_contains(&msg, "expected[0] and expected[1] has duplicated keys: `10`");
}

#[test]
fn test_missing_item() {
    let by_id = should_resemble_by("id", |row: &S| Some(row.id));
    let msg = by_id(&[s(10), s(30)], &[s(10), s(20)]);
    assert_contains(&msg, "Expected item with id=`20` but not found");
}

#[test]
fn test_composite_keys() {
    let by_pair = should_resemble_by("login+balance", |a: &Account| {
        Some(format!("{}/{}", a.login, a.balance))
    });
    let actual = [account("amy", 2), account("amy", 1)];
    let expected = [account("amy", 1), account("amy", 2)];
    assert_eq!(by_pair(&actual, &expected), "");
}

#[test]
fn test_message_renders_whole_slices() {
    let by_id = should_resemble_by("ID", |row: &S| Some(row.id));
    let msg = by_id(&[s(1)], &[s(2)]);
    assert!(msg.starts_with("Expected: '(seq) (len=1) {\n (S) {\n  ID: (int) 2,"));
    assert!(msg.ends_with("(Should equal slice: Expected item with ID=`2` but not found)!"));
}
