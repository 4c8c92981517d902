//! Structural differ.
//!
//! Compares two [`Value`](crate::value::Value)s and produces a list of
//! per-path differences. An empty list means structurally equal.
//!
//! ## Entry point
//!
//! ```
//! use shouldx_core::diff::{diff, render_differences};
//! use shouldx_core::value::Value;
//!
//! let differences = diff(&Value::Int(1), &Value::Int(2));
//! assert_eq!(differences.len(), 1);
//! assert_eq!(differences[0].to_string(), "1 != 2");
//! let summary = render_differences(&differences);
//! assert!(summary.contains("1 != 2"));
//! ```
//!
//! ## Guarantees
//!
//! - **Determinism**: identical inputs produce identical difference lists;
//!   map entries are visited in rendered-key order.
//! - **Leniency**: the differ is never stricter than `Value` equality, and
//!   is looser in two places: integers compare across signedness, and
//!   RFC 3339 timestamps compare by instant.

pub mod engine;
pub mod human_summary;
pub mod model;

pub use engine::{diff, Differ};
pub use human_summary::render_differences;
pub use model::Difference;
