//! Per-node health: a decision table over node kind, local connectivity and
//! the pipeline-wide DAG verdict.
//!
//! Connectivity is counted on the edges exactly as submitted. An edge to a node
//! that does not exist still gives its source an outgoing edge, even though the
//! same edge is left out of the graph used for cycle detection.

use std::collections::HashSet;
use std::fmt;

use crate::model::{Edge, Node, NodeHealth, NodeKind};

/// Why a node is (un)healthy. The first matching rule wins, in declaration order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HealthReason {
    /// The pipeline has a cycle; overrides every node-local rule.
    Cycle,
    /// Input node with no outgoing edge.
    InputNotConnected,
    /// Output node with no incoming edge.
    OutputWithoutInput,
    /// Processing node with no incoming edge.
    NoInput,
    /// Processing node with incoming but no outgoing edge.
    NoOutput,
    Healthy,
}

impl HealthReason {
    pub fn is_healthy(self) -> bool {
        self == HealthReason::Healthy
    }

    /// Message reported to clients.
    pub fn as_str(self) -> &'static str {
        match self {
            HealthReason::Cycle => "Pipeline contains a cycle",
            HealthReason::InputNotConnected => "Input node must connect to another node",
            HealthReason::OutputWithoutInput => "Output node must receive input",
            HealthReason::NoInput => "Node has no input",
            HealthReason::NoOutput => "Node has no output",
            HealthReason::Healthy => "Node is healthy",
        }
    }
}

impl fmt::Display for HealthReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Applies the health rules to one node given its connectivity and the DAG verdict.
pub fn classify(
    kind: NodeKind,
    has_incoming: bool,
    has_outgoing: bool,
    is_dag: bool,
) -> HealthReason {
    if !is_dag {
        return HealthReason::Cycle;
    }
    match kind {
        NodeKind::Input if !has_outgoing => HealthReason::InputNotConnected,
        NodeKind::Output if !has_incoming => HealthReason::OutputWithoutInput,
        NodeKind::Processing if !has_incoming => HealthReason::NoInput,
        NodeKind::Processing if !has_outgoing => HealthReason::NoOutput,
        _ => HealthReason::Healthy,
    }
}

/// Which node ids appear as an edge source or target, dangling edges included.
///
/// Built once per pipeline so evaluating every node stays O(V + E).
#[derive(Clone, Debug, Default)]
pub struct Connectivity<'a> {
    sources: HashSet<&'a str>,
    targets: HashSet<&'a str>,
}

impl<'a> Connectivity<'a> {
    pub fn from_edges(edges: &'a [Edge]) -> Self {
        Self {
            sources: edges.iter().map(|e| e.source.as_str()).collect(),
            targets: edges.iter().map(|e| e.target.as_str()).collect(),
        }
    }

    pub fn has_incoming(&self, id: &str) -> bool {
        self.targets.contains(id)
    }

    pub fn has_outgoing(&self, id: &str) -> bool {
        self.sources.contains(id)
    }
}

/// Evaluates one node against the submitted (unfiltered) edge list.
///
/// For a whole pipeline, build a [`Connectivity`] once and use [`evaluate_with`].
pub fn evaluate(node: &Node, edges: &[Edge], is_dag: bool) -> NodeHealth {
    evaluate_with(node, &Connectivity::from_edges(edges), is_dag)
}

/// Evaluates one node against a prebuilt connectivity index.
pub fn evaluate_with(node: &Node, connectivity: &Connectivity<'_>, is_dag: bool) -> NodeHealth {
    let reason = classify(
        node.kind(),
        connectivity.has_incoming(&node.id),
        connectivity.has_outgoing(&node.id),
        is_dag,
    );
    NodeHealth {
        node_id: node.id.clone(),
        healthy: reason.is_healthy(),
        reason: reason.as_str().to_string(),
    }
}
