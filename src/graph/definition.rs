use serde::{Deserialize, Serialize};

/// The complete, canonical snapshot of a workflow graph, ready for
/// classification. This is the target structure for any custom data model
/// conversion.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorkflowGraph {
    pub nodes: Vec<NodeDefinition>,
    pub connections: Vec<ConnectionDefinition>,
}

impl WorkflowGraph {
    /// Looks up a node by its (workflow-unique) name.
    pub fn node(&self, name: &str) -> Option<&NodeDefinition> {
        self.nodes.iter().find(|n| n.name == name)
    }

    pub fn node_mut(&mut self, name: &str) -> Option<&mut NodeDefinition> {
        self.nodes.iter_mut().find(|n| n.name == name)
    }
}

/// Defines a single node in the workflow graph.
///
/// `parameters` is an opaque, structurally-comparable bag: the classifier
/// never interprets it, it only asks "is this bag equal to the bag captured
/// when the node last ran".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeDefinition {
    pub name: String,
    pub type_name: String,
    #[serde(default)]
    pub disabled: bool,
    #[serde(default)]
    pub parameters: serde_json::Value,
    /// A user-supplied static override of this node's output, bypassing
    /// actual execution.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pinned_data: Option<serde_json::Value>,
}

/// The kind of a connection between two nodes.
///
/// Only `Main` edges carry workflow data and define the re-execution
/// dependency order. The other kinds attach an auxiliary sub-node (a tool,
/// a memory, a language model) to the root node that consumes it; dirtiness
/// of such a sub-node is attributed to its root, not reported on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum ConnectionKind {
    #[default]
    Main,
    AiTool,
    AiMemory,
    AiLanguageModel,
}

impl ConnectionKind {
    pub fn is_main(&self) -> bool {
        matches!(self, ConnectionKind::Main)
    }
}

/// Defines a directed connection between two nodes in the workflow graph.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionDefinition {
    pub source: String,
    pub source_index: u32,
    pub target: String,
    pub target_index: u32,
    #[serde(default)]
    pub kind: ConnectionKind,
}
