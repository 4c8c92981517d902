//! Renderer: display strings for values.
//!
//! - [`render`]: type-annotated, indented dump used for the
//!   `Expected:` / `Actual:` lines of failure messages
//! - [`display`]: compact one-line form used for keys and diff entries

pub mod dump;
pub mod inline;

pub use dump::render;
pub use inline::{display, format_float};
