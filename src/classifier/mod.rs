use crate::changes::ChangeLog;
use crate::error::ClassifyError;
use crate::graph::{AdjacencyIndex, WorkflowGraph};
use crate::run::ExecutionSnapshot;
use crate::verdict::Verdict;

mod propagate;
mod rules;

use propagate::Propagator;
use rules::CauseRules;

/// Derives the dirtiness verdict for a workflow graph.
///
/// A `Classifier` holds an immutable snapshot of the graph, the most recent
/// execution's run records, and the editor's change log.
/// [`Classifier::classify`] is a pure function over these inputs: it has no
/// side effects, is safe to call repeatedly (the host typically re-invokes
/// it on every store mutation), and runs in time linear in the graph size.
pub struct Classifier {
    graph: WorkflowGraph,
    snapshot: ExecutionSnapshot,
    changes: ChangeLog,
    partial_semantics: bool,
}

pub struct ClassifierBuilder {
    graph: WorkflowGraph,
    snapshot: ExecutionSnapshot,
    changes: ChangeLog,
    partial_semantics: bool,
}

impl ClassifierBuilder {
    pub fn new(graph: WorkflowGraph, snapshot: ExecutionSnapshot) -> Self {
        Self {
            graph,
            snapshot,
            changes: ChangeLog::new(),
            partial_semantics: true,
        }
    }

    /// Supplies the editor's change log. Without one, disable/enable flips
    /// are invisible to the classifier.
    pub fn with_change_log(mut self, changes: ChangeLog) -> Self {
        self.changes = changes;
        self
    }

    /// Toggles partial-execution semantics. When disabled, the host re-runs
    /// every node unconditionally, so the classifier reports a clean verdict.
    pub fn with_partial_semantics(mut self, enabled: bool) -> Self {
        self.partial_semantics = enabled;
        self
    }

    pub fn build(self) -> Classifier {
        Classifier {
            graph: self.graph,
            snapshot: self.snapshot,
            changes: self.changes,
            partial_semantics: self.partial_semantics,
        }
    }
}

impl Classifier {
    pub fn builder(graph: WorkflowGraph, snapshot: ExecutionSnapshot) -> ClassifierBuilder {
        ClassifierBuilder::new(graph, snapshot)
    }

    /// Computes the dirtiness verdict for the held snapshots.
    ///
    /// Runs in two phases: own-cause detection over every node with a run
    /// record, then downstream propagation and sub-node attribution. Nodes
    /// absent from the returned mapping are clean.
    ///
    /// # Errors
    ///
    /// Fails fast with a [`ClassifyError`] when the graph snapshot violates
    /// its contract (a connection naming a missing node, duplicate node
    /// names). A silently wrong verdict would under- or over-invalidate
    /// nodes, so no attempt is made to classify around a malformed graph.
    pub fn classify(&self) -> Result<Verdict, ClassifyError> {
        if !self.partial_semantics {
            return Ok(Verdict::default());
        }

        let index = AdjacencyIndex::build(&self.graph)?;
        let mut verdict = Verdict::default();

        CauseRules::new(&index, &self.snapshot, &self.changes).apply(&mut verdict);
        Propagator::new(&index, &self.snapshot).propagate(&mut verdict);

        tracing::debug!(
            nodes = self.graph.nodes.len(),
            dirty = verdict.len(),
            "classified workflow graph"
        );
        Ok(verdict)
    }
}
