use super::definition::{NodeDefinition, WorkflowGraph};
use crate::error::ClassifyError;
use ahash::{AHashMap, AHashSet};
use std::collections::VecDeque;

/// Pre-computed adjacency for a graph snapshot.
///
/// Built once per classification. Construction validates the contract that
/// every connection endpoint names an existing node and that node names are
/// unique; a violation fails the whole classification rather than producing
/// a verdict over a graph we cannot trust.
///
/// The graph may contain cycles, so every traversal here is guarded by a
/// visited set keyed by node name.
pub struct AdjacencyIndex<'a> {
    nodes: AHashMap<&'a str, &'a NodeDefinition>,
    /// Targets reachable over one main-data edge, per source node.
    main_successors: AHashMap<&'a str, Vec<&'a str>>,
    /// Incoming main-data edges as `(source, source output index)`, per target.
    incoming_main: AHashMap<&'a str, Vec<(&'a str, u32)>>,
    /// Consumers reachable over one non-main edge, per sub-node.
    sub_consumers: AHashMap<&'a str, Vec<&'a str>>,
    /// Nodes with at least one outgoing main-data edge.
    has_outgoing_main: AHashSet<&'a str>,
}

impl<'a> AdjacencyIndex<'a> {
    pub fn build(graph: &'a WorkflowGraph) -> Result<Self, ClassifyError> {
        let mut nodes: AHashMap<&str, &NodeDefinition> = AHashMap::new();
        for node in &graph.nodes {
            if nodes.insert(node.name.as_str(), node).is_some() {
                tracing::warn!(node = %node.name, "duplicate node name in graph snapshot");
                return Err(ClassifyError::DuplicateNode(node.name.clone()));
            }
        }

        let mut main_successors: AHashMap<&str, Vec<&str>> = AHashMap::new();
        let mut incoming_main: AHashMap<&str, Vec<(&str, u32)>> = AHashMap::new();
        let mut sub_consumers: AHashMap<&str, Vec<&str>> = AHashMap::new();
        let mut has_outgoing_main: AHashSet<&str> = AHashSet::new();

        for conn in &graph.connections {
            for (end, other) in [(&conn.source, &conn.target), (&conn.target, &conn.source)] {
                if !nodes.contains_key(end.as_str()) {
                    tracing::warn!(node = %end, "connection references a node missing from the graph");
                    return Err(ClassifyError::NodeNotFound {
                        missing_node: end.clone(),
                        referenced_by: other.clone(),
                    });
                }
            }

            if conn.kind.is_main() {
                main_successors
                    .entry(conn.source.as_str())
                    .or_default()
                    .push(conn.target.as_str());
                incoming_main
                    .entry(conn.target.as_str())
                    .or_default()
                    .push((conn.source.as_str(), conn.source_index));
                has_outgoing_main.insert(conn.source.as_str());
            } else {
                sub_consumers
                    .entry(conn.source.as_str())
                    .or_default()
                    .push(conn.target.as_str());
            }
        }

        Ok(Self {
            nodes,
            main_successors,
            incoming_main,
            sub_consumers,
            has_outgoing_main,
        })
    }

    pub fn entries(&self) -> impl Iterator<Item = (&'a str, &'a NodeDefinition)> + '_ {
        self.nodes.iter().map(|(name, node)| (*name, *node))
    }

    /// Maps an owned or short-lived name back to the graph-owned `&str`.
    pub fn canonical_name(&self, name: &str) -> Option<&'a str> {
        self.nodes.get_key_value(name).map(|(key, _)| *key)
    }

    /// The current incoming main-data edge set of `name`, as
    /// `(source, source output index)` pairs. Unordered, may repeat.
    pub fn incoming_main(&self, name: &str) -> &[(&'a str, u32)] {
        self.incoming_main.get(name).map_or(&[], Vec::as_slice)
    }

    pub fn main_successors(&self, name: &str) -> &[&'a str] {
        self.main_successors.get(name).map_or(&[], Vec::as_slice)
    }

    /// A sub-node is one whose every outgoing edge is a non-main link.
    /// Its dirtiness belongs to the root node(s) it feeds.
    pub fn is_sub_node(&self, name: &str) -> bool {
        self.sub_consumers.contains_key(name) && !self.has_outgoing_main.contains(name)
    }

    /// Resolves the main-graph root node(s) a sub-node ultimately feeds,
    /// following chains of non-main links. Cycle-safe.
    pub fn resolve_roots(&self, sub_node: &str) -> Vec<&'a str> {
        let mut roots = Vec::new();
        let mut visited: AHashSet<&str> = AHashSet::new();
        let mut queue: VecDeque<&str> = self
            .sub_consumers
            .get(sub_node)
            .into_iter()
            .flatten()
            .copied()
            .collect();

        while let Some(current) = queue.pop_front() {
            if !visited.insert(current) {
                continue;
            }
            if self.is_sub_node(current) {
                queue.extend(self.sub_consumers.get(current).into_iter().flatten().copied());
            } else {
                roots.push(current);
            }
        }
        roots
    }

    /// Walks every node strictly downstream of `seeds` along main-data
    /// edges, invoking `visit` once per reached node. Guarded by a visited
    /// set so cyclic graphs terminate; propagation passes through nodes
    /// regardless of whether `visit` marks them.
    pub fn walk_downstream<I, F>(&self, seeds: I, mut visit: F)
    where
        I: IntoIterator<Item = &'a str>,
        F: FnMut(&'a str),
    {
        let mut visited: AHashSet<&str> = AHashSet::new();
        let mut queue: VecDeque<&str> = VecDeque::new();
        for seed in seeds {
            queue.extend(self.main_successors(seed));
        }

        while let Some(current) = queue.pop_front() {
            if !visited.insert(current) {
                continue;
            }
            visit(current);
            queue.extend(self.main_successors(current));
        }
    }
}
