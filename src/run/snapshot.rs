use super::record::RunRecord;
use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// The per-node run records of the most recent workflow execution.
///
/// A new execution replaces the snapshot wholesale; there is no partial
/// update path. A record may name a node that has since been deleted from
/// the graph; that is a legal editor state, not a contract violation, and
/// such records simply never match a graph node.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExecutionSnapshot {
    records: AHashMap<String, RunRecord>,
}

impl ExecutionSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, node: impl Into<String>, record: RunRecord) {
        self.records.insert(node.into(), record);
    }

    pub fn record_of(&self, node: &str) -> Option<&RunRecord> {
        self.records.get(node)
    }

    /// Whether the node's most recent run completed successfully.
    /// `false` for failed runs and for nodes that never ran.
    pub fn has_successful_run(&self, node: &str) -> bool {
        self.records
            .get(node)
            .is_some_and(|r| r.status.is_success())
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &RunRecord)> {
        self.records.iter().map(|(k, v)| (k.as_str(), v))
    }
}
