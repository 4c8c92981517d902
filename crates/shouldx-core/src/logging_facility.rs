//! Structured logging facility for shouldx
//!
//! This module provides:
//! - Single initialization point via `init(profile)`
//! - Assertion logging macros (`log_assert_start!`, `log_assert_pass!`, `log_assert_fail!`)
//! - Test capture mode for deterministic assertions on emitted events
//!
//! Assertions log at debug level, so nothing is printed unless the host
//! enables it (for example `RUST_LOG=shouldx_core=debug`).
//!
//! # Usage
//!
//! ```rust
//! use shouldx_core::logging_facility::{init, Profile};
//!
//! init(Profile::Development);
//! ```

pub mod init;
pub mod macros;
pub mod test_capture;

pub use init::{init, Profile};
pub use test_capture::{init_test_capture, CapturedEvent, TestCapture};
