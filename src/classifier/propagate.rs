use crate::graph::AdjacencyIndex;
use crate::run::ExecutionSnapshot;
use crate::verdict::{DirtinessReason, Verdict};

/// Spreads dirtiness downstream along main-data edges and attributes dirty
/// sub-nodes to the main-graph roots that consume them.
///
/// Seeds are every own-cause dirty node, every node lacking a successful run
/// (no record at all, or a failed one), and every root a dirty node feeds
/// over a non-main edge. A node with both a main and a non-main outgoing
/// edge keeps its own entry and still invalidates its root. Only nodes that
/// have a run record receive an entry; recordless nodes are walked through
/// so dirtiness reaches their descendants.
pub(super) struct Propagator<'a> {
    index: &'a AdjacencyIndex<'a>,
    snapshot: &'a ExecutionSnapshot,
}

impl<'a> Propagator<'a> {
    pub(super) fn new(index: &'a AdjacencyIndex<'a>, snapshot: &'a ExecutionSnapshot) -> Self {
        Self { index, snapshot }
    }

    pub(super) fn propagate(&self, verdict: &mut Verdict) {
        let mut seeds: Vec<&'a str> = Vec::new();
        let mut attributed_roots: Vec<&'a str> = Vec::new();
        let mut sub_node_entries: Vec<String> = Vec::new();

        for (name, _) in verdict.iter() {
            let Some(canonical) = self.index.canonical_name(name) else {
                continue;
            };
            // Any non-main edge hands the node's output to a root, so the
            // root is invalidated whether or not the node also feeds the
            // main graph.
            attributed_roots.extend(self.index.resolve_roots(canonical));
            if self.index.is_sub_node(canonical) {
                // A pure sub-node never appears under its own name.
                sub_node_entries.push(canonical.to_string());
            } else {
                seeds.push(canonical);
            }
        }

        for (name, _) in self.index.entries() {
            if !self.snapshot.has_successful_run(name) {
                seeds.push(name);
            }
        }

        for name in &sub_node_entries {
            verdict.remove(name);
        }
        for root in attributed_roots {
            if self.snapshot.record_of(root).is_some() {
                verdict.mark_if_absent(root, DirtinessReason::UpstreamDirty);
            }
            seeds.push(root);
        }

        self.index.walk_downstream(seeds, |node| {
            if self.snapshot.record_of(node).is_some() {
                verdict.mark_if_absent(node, DirtinessReason::UpstreamDirty);
            }
        });
    }
}
