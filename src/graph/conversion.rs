use super::definition::WorkflowGraph;
use crate::error::GraphConversionError;

/// A trait for custom data models that can be converted into a Yogore
/// `WorkflowGraph`.
///
/// This is the primary extension point for making Yogore format-agnostic. By
/// implementing this trait on your own editor or storage structs, you provide
/// a translation layer that allows the classifier to process your custom
/// workflow format.
///
/// # Example
///
/// ```rust,no_run
/// use yogore::prelude::*;
/// use yogore::error::GraphConversionError;
///
/// // 1. Define your custom structs for parsing your format.
/// struct MyCustomNode { name: String, kind: String }
/// struct MyCustomWorkflow { nodes: Vec<MyCustomNode> }
///
/// // 2. Implement `IntoGraph` for your top-level struct.
/// impl IntoGraph for MyCustomWorkflow {
///     fn into_graph(self) -> Result<WorkflowGraph, GraphConversionError> {
///         let mut nodes = Vec::new();
///         for node in self.nodes {
///             // Your logic to convert `MyCustomNode` into `NodeDefinition`
///             nodes.push(NodeDefinition {
///                 name: node.name,
///                 type_name: node.kind,
///                 // ... fill in other fields ...
/// #                disabled: false,
/// #                parameters: serde_json::Value::Null,
/// #                pinned_data: None,
///             });
///         }
///
///         Ok(WorkflowGraph {
///             nodes,
///             connections: vec![], // Convert your edges here as well
///         })
///     }
/// }
/// ```
pub trait IntoGraph {
    /// Consumes the object and converts it into a Yogore-compatible graph
    /// snapshot.
    fn into_graph(self) -> Result<WorkflowGraph, GraphConversionError>;
}
