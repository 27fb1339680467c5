//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and traits from the
//! yogore crate. Import this module to get access to the core functionality
//! without having to import each type individually.

// Core classification
pub use crate::classifier::{Classifier, ClassifierBuilder};
pub use crate::verdict::{DirtinessReason, Verdict};

// Graph model
pub use crate::graph::{
    ConnectionDefinition, ConnectionKind, IntoGraph, NodeDefinition, WorkflowGraph,
};

// Run data and editor changes
pub use crate::changes::{ChangeLog, GraphChange};
pub use crate::run::{ExecutionSnapshot, RunRecord, RunSource, RunStatus};

// Error types
pub use crate::error::{ClassifyError, GraphConversionError};
