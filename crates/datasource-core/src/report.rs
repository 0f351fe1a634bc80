//! Error Report: serializable view of a family error
use serde::{Deserialize, Serialize};

/// Snapshot of a family error: concrete type, message and causes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorReport {
    pub error_type: String,
    pub message: String,
    /// `source()` chain, outermost first
    pub causes: Vec<String>,
}

impl ErrorReport {
    pub fn to_json(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }
}
