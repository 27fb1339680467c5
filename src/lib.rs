//! # Yogore - Workflow-Graph Dirtiness Classification Engine
//!
//! **Yogore** decides which nodes of a node-based workflow graph can be
//! skipped on the next run and which must re-execute. Given an immutable
//! snapshot of the graph, the run records of the most recent execution, and
//! the editor's change log, it derives a *verdict*: a mapping from node name
//! to the single most specific reason its previous output can no longer be
//! trusted. Nodes absent from the verdict are clean.
//!
//! ## Core Workflow
//!
//! The engine is designed to be format-agnostic. It operates on a canonical
//! internal model of a workflow graph. The primary workflow is:
//!
//! 1.  **Load Your Data**: Parse your editor's or storage layer's workflow
//!     format into your own Rust structs.
//! 2.  **Convert to Yogore's Model**: Implement the `IntoGraph` trait for
//!     your structs to provide a translation layer into Yogore's
//!     `WorkflowGraph`.
//! 3.  **Snapshot Run Data**: Build an `ExecutionSnapshot` from the per-node
//!     records of the last execution, and keep a `ChangeLog` of the edits
//!     applied since.
//! 4.  **Classify**: Use `Classifier::builder` to create a classifier and
//!     call `classify()` whenever the editor needs fresh badges or is about
//!     to start a partial re-run.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use yogore::prelude::*;
//! use chrono::Utc;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // A two-node graph: Fetch -> Transform.
//!     let graph = WorkflowGraph {
//!         nodes: vec![
//!             NodeDefinition {
//!                 name: "Fetch".to_string(),
//!                 type_name: "httpRequest".to_string(),
//!                 disabled: false,
//!                 parameters: serde_json::json!({ "url": "https://example.com" }),
//!                 pinned_data: None,
//!             },
//!             NodeDefinition {
//!                 name: "Transform".to_string(),
//!                 type_name: "set".to_string(),
//!                 disabled: false,
//!                 parameters: serde_json::json!({ "fields": ["id"] }),
//!                 pinned_data: None,
//!             },
//!         ],
//!         connections: vec![ConnectionDefinition {
//!             source: "Fetch".to_string(),
//!             source_index: 0,
//!             target: "Transform".to_string(),
//!             target_index: 0,
//!             kind: ConnectionKind::Main,
//!         }],
//!     };
//!
//!     // Run records from the last execution. "Fetch" ran with a different
//!     // URL than the graph holds now, so its output is stale.
//!     let mut snapshot = ExecutionSnapshot::new();
//!     snapshot.insert(
//!         "Fetch",
//!         RunRecord {
//!             status: RunStatus::Success,
//!             finished_at: Utc::now(),
//!             sources: vec![],
//!             parameters: serde_json::json!({ "url": "https://old.example.com" }),
//!             pinned_data: None,
//!         },
//!     );
//!
//!     let classifier = Classifier::builder(graph, snapshot).build();
//!     let verdict = classifier.classify()?;
//!
//!     for (node, reason) in verdict.iter() {
//!         println!("{} is dirty: {}", node, reason);
//!     }
//!     // -> Fetch is dirty: parameters-updated
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Guarantees
//!
//! - The verdict always reflects the inputs at the time of the call, never a
//!   torn mix across edits: the classifier owns immutable snapshots.
//! - Cyclic graphs terminate; every traversal is visited-set guarded.
//! - A node that never produced output is never reported dirty, but
//!   dirtiness propagates through it to its descendants.
//! - A malformed graph (dangling connection, duplicate node name) fails the
//!   whole call rather than producing a verdict that silently mis-gates the
//!   partial re-run.

pub mod changes;
pub mod classifier;
pub mod error;
pub mod graph;
pub mod prelude;
pub mod run;
pub mod verdict;
