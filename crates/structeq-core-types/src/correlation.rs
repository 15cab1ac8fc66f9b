//! Correlation identifiers for comparison runs
//!
//! Every top-level comparison gets its own id so that the start/end events
//! and any recorded diagnostics of one run can be grouped in the logs, even
//! when several comparisons run concurrently on different threads.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier of one top-level comparison call
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ComparisonId(String);

impl ComparisonId {
    /// Generate a new time-ordered id using UUIDv7
    pub fn new() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    /// Get the string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Wrap an id that was produced elsewhere (e.g. read back from a log line)
    pub fn from_string(s: String) -> Self {
        Self(s)
    }
}

impl Default for ComparisonId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ComparisonId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
