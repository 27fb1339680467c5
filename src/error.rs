use thiserror::Error;

/// Errors that can occur while classifying a workflow graph.
///
/// Every variant is a contract violation on the caller's side: the graph
/// snapshot handed to the classifier was malformed. A wrong verdict would
/// silently corrupt the partial re-run gate, so classification fails outright
/// instead of skipping the offending piece.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClassifyError {
    #[error(
        "Node '{missing_node}' not found, but is referenced by a connection involving node '{referenced_by}'"
    )]
    NodeNotFound {
        missing_node: String,
        referenced_by: String,
    },

    #[error("Node name '{0}' appears more than once in the graph")]
    DuplicateNode(String),
}

/// Errors that can occur when converting a custom host format into a
/// [`WorkflowGraph`](crate::graph::WorkflowGraph).
#[derive(Error, Debug, Clone)]
pub enum GraphConversionError {
    #[error("Invalid workflow data: {0}")]
    ValidationError(String),
}
