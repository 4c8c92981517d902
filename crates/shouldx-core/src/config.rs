//! Structural differ configuration.
//!
//! The assertions always use [`DiffConfig::default`], so their messages do
//! not depend on the environment. Callers driving a [`Differ`](crate::diff::Differ)
//! directly may load settings with [`DiffConfig::from_env`].

use serde::{Deserialize, Serialize};

pub const ENV_MAX_DIFF: &str = "SHOULDX_MAX_DIFF";
pub const ENV_MAX_DEPTH: &str = "SHOULDX_MAX_DEPTH";
pub const ENV_FLOAT_PRECISION: &str = "SHOULDX_FLOAT_PRECISION";
pub const ENV_TIMESTAMPS_BY_INSTANT: &str = "SHOULDX_TIMESTAMPS_BY_INSTANT";

/// Settings for the structural differ.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiffConfig {
    /// Stop after this many differences (0 = unlimited)
    pub max_diff: usize,
    /// Do not descend past this many nesting levels (0 = unlimited)
    pub max_depth: usize,
    /// Floats are rounded to this many decimal places before comparison
    pub float_precision: u32,
    /// Two RFC 3339 strings denoting the same instant are equal
    pub timestamps_by_instant: bool,
}

impl Default for DiffConfig {
    fn default() -> Self {
        Self {
            max_diff: 10,
            max_depth: 0,
            float_precision: 10,
            timestamps_by_instant: true,
        }
    }
}

impl DiffConfig {
    pub fn with_max_diff(mut self, max_diff: usize) -> Self {
        self.max_diff = max_diff;
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_float_precision(mut self, float_precision: u32) -> Self {
        self.float_precision = float_precision;
        self
    }

    pub fn with_timestamps_by_instant(mut self, enabled: bool) -> Self {
        self.timestamps_by_instant = enabled;
        self
    }

    /// Load settings from `SHOULDX_*` environment variables.
    ///
    /// Unset variables keep their defaults. Unparseable values are ignored
    /// with a warning.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load settings through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(v) = parse_var(&lookup, ENV_MAX_DIFF) {
            config.max_diff = v;
        }
        if let Some(v) = parse_var(&lookup, ENV_MAX_DEPTH) {
            config.max_depth = v;
        }
        if let Some(v) = parse_var(&lookup, ENV_FLOAT_PRECISION) {
            config.float_precision = v;
        }
        if let Some(v) = parse_var(&lookup, ENV_TIMESTAMPS_BY_INSTANT) {
            config.timestamps_by_instant = v;
        }
        config
    }
}

fn parse_var<F, T>(lookup: &F, name: &str) -> Option<T>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    let raw = lookup(name)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!(
                component = module_path!(),
                variable = name,
                value = %raw,
                "ignoring unparseable configuration value"
            );
            None
        }
    }
}
