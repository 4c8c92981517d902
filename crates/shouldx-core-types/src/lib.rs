//! Core types shared across shouldx facilities
//!
//! This crate provides foundational types used by both the assertion
//! engine and its logging facility:
//!
//! - **Schema constants**: Canonical field keys and event names
//! - **Outcome**: The pass/fail result of a single assertion call

pub mod outcome;
pub mod schema;

pub use outcome::Outcome;
