//! Assertion outcome
//!
//! The host framework only sees a string; the outcome is what gets logged.

use serde::{Deserialize, Serialize};

/// Result of a single assertion call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// The assertion held (empty message)
    Pass,
    /// The assertion failed (non-empty message)
    Fail,
}

impl Outcome {
    /// Classify an assertion message: empty means pass
    pub fn from_message(message: &str) -> Self {
        if message.is_empty() {
            Outcome::Pass
        } else {
            Outcome::Fail
        }
    }

    /// Stable lowercase name used in log events
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Pass => "pass",
            Outcome::Fail => "fail",
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
