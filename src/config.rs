use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::highlight::PIVOT_MARKER;
use crate::pivot::PivotStrategy;

/// Tunables of an [`Engine`](crate::Engine).
///
/// Missing JSON fields fall back to [`SortConfig::default`], unknown fields are rejected.
///
/// ```json
/// { "pivot_strategy": "median_of_three", "pivot_marker": "#e33" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SortConfig {
    pub pivot_strategy: PivotStrategy,
    /// Passed verbatim to [`Highlighter::highlight`](crate::highlight::Highlighter::highlight).
    pub pivot_marker: String,
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            pivot_strategy: PivotStrategy::Last,
            pivot_marker: PIVOT_MARKER.to_owned(),
        }
    }
}

impl SortConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn with_pivot_strategy(mut self, pivot_strategy: PivotStrategy) -> Self {
        self.pivot_strategy = pivot_strategy;
        self
    }

    pub fn with_pivot_marker(mut self, pivot_marker: impl Into<String>) -> Self {
        self.pivot_marker = pivot_marker.into();
        self
    }
}
