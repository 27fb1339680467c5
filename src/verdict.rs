use crate::graph::WorkflowGraph;
use crate::run::ExecutionSnapshot;
use ahash::AHashMap;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Why a node's previously-computed output can no longer be trusted.
///
/// Reasons are mutually exclusive per node. When several could apply, the
/// node's own cause wins over anything propagated from upstream, in the
/// order this enum is declared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DirtinessReason {
    /// The node's own parameter bag changed since its last successful run.
    ParametersUpdated,
    /// The set of incoming main-data edges changed since the last run,
    /// including a disable/enable flip on a direct predecessor.
    IncomingConnectionsUpdated,
    /// The pin consumed by the last run was removed or its payload changed.
    PinnedDataUpdated,
    /// A strict ancestor over main-data edges is dirty or has no
    /// successful run.
    UpstreamDirty,
}

impl fmt::Display for DirtinessReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DirtinessReason::ParametersUpdated => "parameters-updated",
            DirtinessReason::IncomingConnectionsUpdated => "incoming-connections-updated",
            DirtinessReason::PinnedDataUpdated => "pinned-data-updated",
            DirtinessReason::UpstreamDirty => "upstream-dirty",
        };
        write!(f, "{}", s)
    }
}

/// The derived dirtiness mapping: node name to exactly one reason.
///
/// Nodes absent from the mapping are clean. A verdict is never stored; it is
/// recomputed from the current graph, run snapshot and change log on demand.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    reasons: AHashMap<String, DirtinessReason>,
}

impl Verdict {
    pub fn is_clean(&self) -> bool {
        self.reasons.is_empty()
    }

    pub fn len(&self) -> usize {
        self.reasons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reasons.is_empty()
    }

    pub fn reason_of(&self, node: &str) -> Option<DirtinessReason> {
        self.reasons.get(node).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, DirtinessReason)> {
        self.reasons.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub(crate) fn mark(&mut self, node: impl Into<String>, reason: DirtinessReason) {
        self.reasons.insert(node.into(), reason);
    }

    /// Marks a node only if no more specific reason already applies.
    pub(crate) fn mark_if_absent(&mut self, node: &str, reason: DirtinessReason) {
        if !self.reasons.contains_key(node) {
            self.reasons.insert(node.to_string(), reason);
        }
    }

    pub(crate) fn remove(&mut self, node: &str) {
        self.reasons.remove(node);
    }

    /// The "smart re-run" gate: the nodes that must re-execute on the next
    /// run. A node is skippable only when it has a successful record and no
    /// entry here; disabled nodes never execute at all. Sorted by name.
    pub fn nodes_to_rerun(&self, graph: &WorkflowGraph, snapshot: &ExecutionSnapshot) -> Vec<String> {
        graph
            .nodes
            .iter()
            .filter(|node| !node.disabled)
            .filter(|node| {
                !snapshot.has_successful_run(&node.name) || self.reasons.contains_key(&node.name)
            })
            .map(|node| node.name.clone())
            .sorted()
            .collect()
    }
}

impl FromIterator<(String, DirtinessReason)> for Verdict {
    fn from_iter<T: IntoIterator<Item = (String, DirtinessReason)>>(iter: T) -> Self {
        Self {
            reasons: iter.into_iter().collect(),
        }
    }
}
