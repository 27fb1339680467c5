//! Unit tests for core Yogore types.
mod common;
use common::*;
use pretty_assertions::assert_eq;
use yogore::error::ClassifyError;
use yogore::prelude::*;

#[test]
fn test_reason_display() {
    assert_eq!(
        format!("{}", DirtinessReason::ParametersUpdated),
        "parameters-updated"
    );
    assert_eq!(
        format!("{}", DirtinessReason::IncomingConnectionsUpdated),
        "incoming-connections-updated"
    );
    assert_eq!(
        format!("{}", DirtinessReason::PinnedDataUpdated),
        "pinned-data-updated"
    );
    assert_eq!(format!("{}", DirtinessReason::UpstreamDirty), "upstream-dirty");
}

#[test]
fn test_reason_serde_is_kebab_case() {
    let json = serde_json::to_string(&DirtinessReason::IncomingConnectionsUpdated).unwrap();
    assert_eq!(json, "\"incoming-connections-updated\"");

    let back: DirtinessReason = serde_json::from_str("\"upstream-dirty\"").unwrap();
    assert_eq!(back, DirtinessReason::UpstreamDirty);
}

#[test]
fn test_run_status() {
    assert!(RunStatus::Success.is_success());
    assert!(!RunStatus::Error.is_success());
    assert_eq!(RunStatus::Success.as_str(), "success");
    assert_eq!(RunStatus::Error.as_str(), "error");
}

#[test]
fn test_connection_kind() {
    assert!(ConnectionKind::Main.is_main());
    assert!(!ConnectionKind::AiTool.is_main());
    assert!(!ConnectionKind::AiMemory.is_main());
    assert!(!ConnectionKind::AiLanguageModel.is_main());
}

#[test]
fn test_error_display() {
    let err = ClassifyError::NodeNotFound {
        missing_node: "node_B".to_string(),
        referenced_by: "node_A".to_string(),
    };
    assert!(err.to_string().contains("node_B"));
    assert!(err.to_string().contains("node_A"));

    let dup = ClassifyError::DuplicateNode("Webhook".to_string());
    assert!(dup.to_string().contains("Webhook"));
}

#[test]
fn test_change_log_bookkeeping() {
    let mut log = ChangeLog::new();
    assert!(log.is_empty());

    log.record(GraphChange::ParametersSet {
        node: "a".to_string(),
    });
    log.record(GraphChange::DisabledToggled {
        node: "b".to_string(),
    });
    assert_eq!(log.len(), 2);

    let toggled = log.toggled_nodes();
    assert_eq!(toggled.len(), 1);
    assert!(toggled.contains("b"));

    let undone = log.undo_last();
    assert_eq!(
        undone,
        Some(GraphChange::DisabledToggled {
            node: "b".to_string()
        })
    );
    assert!(log.toggled_nodes().is_empty());

    log.clear();
    assert!(log.is_empty());
}

#[test]
fn test_change_facts_serde_shape() {
    let json = serde_json::to_value(&GraphChange::ConnectionAdded {
        source: "a".to_string(),
        target: "b".to_string(),
    })
    .unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "kind": "connectionAdded", "source": "a", "target": "b" })
    );

    let back: GraphChange =
        serde_json::from_value(serde_json::json!({ "kind": "pinCleared", "node": "c" })).unwrap();
    assert_eq!(
        back,
        GraphChange::PinCleared {
            node: "c".to_string()
        }
    );
}

#[test]
fn test_empty_verdict_is_clean() {
    let verdict = Verdict::default();
    assert!(verdict.is_clean());
    assert_eq!(verdict.reason_of("anything"), None);
}

#[test]
fn test_nodes_to_rerun_skips_clean_and_disabled() {
    let mut graph = WorkflowGraph {
        nodes: vec![node("a"), node("b"), node("c")],
        connections: vec![connection("a", "b"), connection("b", "c")],
    };
    graph.nodes[2].disabled = true;

    // "a" ran successfully and is clean; "b" never ran; "c" is disabled.
    let snapshot = snapshot_for(&graph, &["a"]);
    let verdict = Verdict::default();

    assert_eq!(verdict.nodes_to_rerun(&graph, &snapshot), vec!["b"]);
}

#[test]
fn test_nodes_to_rerun_includes_dirty_nodes() {
    let graph = chain_graph();
    let mut snapshot = snapshot_for(&graph, &["a", "b", "c", "d", "e", "f"]);

    let mut stale = success_record(&graph, "b");
    stale.parameters = serde_json::json!({ "old": true });
    snapshot.insert("b", stale);

    let classifier = Classifier::builder(graph.clone(), snapshot.clone()).build();
    let verdict = classifier.classify().expect("classification failed");

    assert_eq!(
        verdict.nodes_to_rerun(&graph, &snapshot),
        vec!["b", "c", "d", "e", "f"]
    );
}
