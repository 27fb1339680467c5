//! Common test utilities for building workflow graphs and run data.
use chrono::Utc;
use yogore::prelude::*;

/// Creates an enabled node with an empty parameter bag.
#[allow(dead_code)]
pub fn node(name: &str) -> NodeDefinition {
    NodeDefinition {
        name: name.to_string(),
        type_name: "noOp".to_string(),
        disabled: false,
        parameters: serde_json::json!({}),
        pinned_data: None,
    }
}

/// Creates a main-data connection from port 0 to port 0.
#[allow(dead_code)]
pub fn connection(source: &str, target: &str) -> ConnectionDefinition {
    ConnectionDefinition {
        source: source.to_string(),
        source_index: 0,
        target: target.to_string(),
        target_index: 0,
        kind: ConnectionKind::Main,
    }
}

/// Creates a non-main (sub-node) connection.
#[allow(dead_code)]
pub fn sub_connection(source: &str, target: &str, kind: ConnectionKind) -> ConnectionDefinition {
    ConnectionDefinition {
        source: source.to_string(),
        source_index: 0,
        target: target.to_string(),
        target_index: 0,
        kind,
    }
}

/// Builds a successful run record consistent with the node's current state
/// in `graph`: the captured parameters, pin and incoming main edges all
/// match, so a node recorded this way starts out clean.
#[allow(dead_code)]
pub fn success_record(graph: &WorkflowGraph, name: &str) -> RunRecord {
    let node = graph.node(name).expect("fixture references a missing node");
    RunRecord {
        status: RunStatus::Success,
        finished_at: Utc::now(),
        sources: graph
            .connections
            .iter()
            .filter(|c| c.kind.is_main() && c.target == name)
            .map(|c| RunSource {
                node: c.source.clone(),
                output_index: c.source_index,
            })
            .collect(),
        parameters: node.parameters.clone(),
        pinned_data: node.pinned_data.clone(),
    }
}

/// Builds a snapshot of successful, up-to-date records for the given nodes.
#[allow(dead_code)]
pub fn snapshot_for(graph: &WorkflowGraph, names: &[&str]) -> ExecutionSnapshot {
    let mut snapshot = ExecutionSnapshot::new();
    for name in names {
        snapshot.insert(*name, success_record(graph, name));
    }
    snapshot
}

/// `a -> b -> c -> d -> e -> f`, all enabled.
#[allow(dead_code)]
pub fn chain_graph() -> WorkflowGraph {
    let names = ["a", "b", "c", "d", "e", "f"];
    WorkflowGraph {
        nodes: names.iter().copied().map(node).collect(),
        connections: names
            .windows(2)
            .map(|pair| connection(pair[0], pair[1]))
            .collect(),
    }
}

/// `a -> b -> c -> a` (a legitimate feedback loop).
#[allow(dead_code)]
pub fn cyclic_graph() -> WorkflowGraph {
    WorkflowGraph {
        nodes: vec![node("a"), node("b"), node("c")],
        connections: vec![
            connection("a", "b"),
            connection("b", "c"),
            connection("c", "a"),
        ],
    }
}

/// An agent with a sub-node chain feeding it:
/// `model =(languageModel)=> tool =(tool)=> agent -> out`.
#[allow(dead_code)]
pub fn agent_graph() -> WorkflowGraph {
    WorkflowGraph {
        nodes: vec![node("model"), node("tool"), node("agent"), node("out")],
        connections: vec![
            sub_connection("model", "tool", ConnectionKind::AiLanguageModel),
            sub_connection("tool", "agent", ConnectionKind::AiTool),
            connection("agent", "out"),
        ],
    }
}

/// Shorthand for building an expected verdict from `(node, reason)` pairs.
#[allow(dead_code)]
pub fn verdict_of(entries: &[(&str, DirtinessReason)]) -> Verdict {
    entries
        .iter()
        .map(|(name, reason)| (name.to_string(), *reason))
        .collect()
}
