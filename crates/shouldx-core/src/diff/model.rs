//! Structural diff output types.

use serde::{Deserialize, Serialize};

/// Placeholder for an element or field that exists on one side only.
pub const NO_VALUE: &str = "<no value>";
/// Placeholder for a map key that exists on one side only.
pub const NO_KEY: &str = "<does not have key>";

/// A single mismatch between two values.
///
/// `path` is empty for a mismatch at the top level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Difference {
    /// Location of the mismatch, e.g. `slice[2].map[name]`
    pub path: String,
    /// `<left> != <right>`
    pub description: String,
}

impl Difference {
    pub fn new(path: impl Into<String>, left: &str, right: &str) -> Self {
        Self {
            path: path.into(),
            description: format!("{} != {}", left, right),
        }
    }
}

impl std::fmt::Display for Difference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.path.is_empty() {
            f.write_str(&self.description)
        } else {
            write!(f, "{}: {}", self.path, self.description)
        }
    }
}
