use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Outcome of a node's most recent execution. A node that never ran simply
/// has no [`RunRecord`] at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunStatus {
    Success,
    Error,
}

impl RunStatus {
    pub fn is_success(&self) -> bool {
        matches!(self, RunStatus::Success)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RunStatus::Success => "success",
            RunStatus::Error => "error",
        }
    }
}

/// One incoming main-data edge as it was consumed by a run: which upstream
/// node, and which of its output ports, produced the input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSource {
    pub node: String,
    pub output_index: u32,
}

/// Metadata describing the outcome of a node's most recent execution within
/// a workflow run.
///
/// Besides the outcome itself, a record captures the inputs the run consumed:
/// the parameter bag, the incoming main-edge set, and the pinned payload (if
/// a pin was in place). The classifier diffs the current graph against these
/// captures to decide whether the node's output can still be trusted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunRecord {
    pub status: RunStatus,
    pub finished_at: DateTime<Utc>,
    /// The incoming main-data edges that fed this run.
    #[serde(default)]
    pub sources: Vec<RunSource>,
    /// The node's parameter bag at run time.
    #[serde(default)]
    pub parameters: serde_json::Value,
    /// The pinned payload this run consumed, if the node was pinned.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pinned_data: Option<serde_json::Value>,
}
