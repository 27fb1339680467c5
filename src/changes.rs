use ahash::AHashSet;
use serde::{Deserialize, Serialize};

/// A single editor fact: "this kind of edit happened to this part of the
/// graph". The classifier consumes facts only; it never inspects the host's
/// command objects or their payloads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum GraphChange {
    ParametersSet { node: String },
    ConnectionAdded { source: String, target: String },
    ConnectionRemoved { source: String, target: String },
    DisabledToggled { node: String },
    PinSet { node: String },
    PinCleared { node: String },
    NodeAdded { node: String },
    NodesDeleted { nodes: Vec<String> },
}

/// The ordered, undo-able list of edits applied since the last execution.
///
/// The host's history subsystem owns the lifecycle: it records a fact per
/// applied command, pops one per undo, and clears the log when a new
/// execution replaces the run snapshot. The classifier derives most reasons
/// by diffing the graph against the run snapshot; the log exists for edits
/// that can return the graph to an earlier state while still invalidating
/// output: a disable followed by a re-enable leaves the graph unchanged,
/// but both toggles happened after the run, so the downstream output is
/// stale either way. Undo, by contrast, removes the fact itself.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeLog {
    entries: Vec<GraphChange>,
}

impl ChangeLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one applied edit, newest last.
    pub fn record(&mut self, change: GraphChange) {
        self.entries.push(change);
    }

    /// Rolls back the most recent edit, returning the removed fact.
    pub fn undo_last(&mut self) -> Option<GraphChange> {
        self.entries.pop()
    }

    /// Forgets everything; called when a new execution snapshot is taken.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &GraphChange> {
        self.entries.iter()
    }

    /// The set of nodes with at least one disable/enable flip on record.
    pub fn toggled_nodes(&self) -> AHashSet<&str> {
        self.entries
            .iter()
            .filter_map(|change| match change {
                GraphChange::DisabledToggled { node } => Some(node.as_str()),
                _ => None,
            })
            .collect()
    }
}
