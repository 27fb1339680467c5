use crate::changes::ChangeLog;
use crate::graph::{AdjacencyIndex, NodeDefinition};
use crate::run::{ExecutionSnapshot, RunRecord};
use crate::verdict::{DirtinessReason, Verdict};
use ahash::AHashSet;
use itertools::Itertools;

/// Applies the per-cause detection rules to every node that has a run
/// record, first match wins: parameters, then incoming connections, then
/// pinned data. Upstream propagation happens afterwards and never overrides
/// an own-cause entry.
pub(super) struct CauseRules<'a> {
    index: &'a AdjacencyIndex<'a>,
    snapshot: &'a ExecutionSnapshot,
    changes: &'a ChangeLog,
}

impl<'a> CauseRules<'a> {
    pub(super) fn new(
        index: &'a AdjacencyIndex<'a>,
        snapshot: &'a ExecutionSnapshot,
        changes: &'a ChangeLog,
    ) -> Self {
        Self {
            index,
            snapshot,
            changes,
        }
    }

    pub(super) fn apply(&self, verdict: &mut Verdict) {
        // A disable/enable flip changes the effective input set of the
        // toggled node's direct successors, never of the node itself.
        let mut toggled_successors: AHashSet<&str> = AHashSet::new();
        for toggled in self.changes.toggled_nodes() {
            toggled_successors.extend(self.index.main_successors(toggled));
        }

        for (name, node) in self.index.entries() {
            let Some(record) = self.snapshot.record_of(name) else {
                // Nothing to invalidate: a node without prior output is
                // never dirty, whatever changed on it.
                continue;
            };
            if !record.status.is_success() {
                // A failed run re-executes regardless; it seeds downstream
                // dirtiness during propagation instead.
                continue;
            }

            if node.parameters != record.parameters {
                verdict.mark(name, DirtinessReason::ParametersUpdated);
                continue;
            }
            if self.incoming_changed(name, record) || toggled_successors.contains(name) {
                verdict.mark(name, DirtinessReason::IncomingConnectionsUpdated);
                continue;
            }
            if Self::pin_updated(node, record) {
                verdict.mark(name, DirtinessReason::PinnedDataUpdated);
            }
        }
    }

    /// Compares the current incoming main-edge multiset against the sources
    /// the run consumed, order-insensitive.
    fn incoming_changed(&self, name: &str, record: &RunRecord) -> bool {
        let current: Vec<(&str, u32)> = self
            .index
            .incoming_main(name)
            .iter()
            .copied()
            .sorted()
            .collect();
        let consumed: Vec<(&str, u32)> = record
            .sources
            .iter()
            .map(|s| (s.node.as_str(), s.output_index))
            .sorted()
            .collect();
        current != consumed
    }

    /// A pin is stale when the payload the run consumed was removed or
    /// edited. Pinning a node that ran unpinned is neutral: the pin freezes
    /// the output, so there is nothing to re-execute.
    fn pin_updated(node: &NodeDefinition, record: &RunRecord) -> bool {
        match (&record.pinned_data, &node.pinned_data) {
            (Some(consumed), Some(current)) => consumed != current,
            (Some(_), None) => true,
            (None, _) => false,
        }
    }
}
