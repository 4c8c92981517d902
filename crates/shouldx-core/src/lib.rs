//! shouldx core - structural-equality assertions for tests
//!
//! This crate provides:
//! - An inspectable [`Value`] model built from any `serde::Serialize` type
//! - A type-annotated renderer and a per-path structural differ
//! - Deep-equal, order-insensitive and key-indexed sequence assertions that
//!   return a failure message (empty on success)
//! - A violation taxonomy with stable codes and structured assertion logging
//!
//! ```
//! use serde_json::json;
//! use shouldx_core::{should_resemble_by_key, Value};
//!
//! let actual = Value::from(json!([{"id": 10}, {"id": 30}]));
//! let expected = Value::from(json!([{"id": 10}, {"id": 20}]));
//! let msg = should_resemble_by_key("id")(&actual, &[expected]);
//! assert!(msg.contains("Expected item with id=`20` but not found"));
//! ```

pub mod assertions;
pub mod config;
pub mod diff;
pub mod errors;
pub mod logging_facility;
pub mod render;
pub mod value;

// Re-export commonly used types
pub use assertions::{
    should_deep_equal, should_resemble, should_resemble_by, should_resemble_by_key,
    should_resemble_slice,
};
pub use config::DiffConfig;
pub use diff::{diff, Difference, Differ};
pub use errors::{ValueError, Violation, ViolationKind};
pub use render::render;
pub use shouldx_core_types::{schema, Outcome};
pub use value::{to_value, Value};
