use chrono::{DateTime, FixedOffset};
use serde::Serialize;
use serde_json::Value as Json;
use shouldx_core::{to_value, Value};

/// Record used across the assertion tests; the key field is upper case
#[allow(dead_code)]
#[derive(Debug, Clone, Default, Serialize)]
pub struct S {
    #[serde(rename = "ID")]
    pub id: i64,
    #[serde(rename = "Value")]
    pub value: String,
    #[serde(rename = "Time")]
    pub time: Option<DateTime<FixedOffset>>,
}

#[allow(dead_code)]
pub fn s(id: i64) -> S {
    S {
        id,
        ..S::default()
    }
}

/// Convert anything serializable, panicking on failure
#[allow(dead_code)]
pub fn v<T: Serialize + ?Sized>(value: &T) -> Value {
    to_value(value).unwrap()
}

#[allow(dead_code)]
pub fn json(value: Json) -> Value {
    Value::from(value)
}

#[allow(dead_code)]
pub fn assert_contains(message: &str, needle: &str) {
    assert!(
        message.contains(needle),
        "Expect message contains `{}`. Got:\n{}",
        needle,
        message
    );
}
