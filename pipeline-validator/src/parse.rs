//! Validation entry point: counts, graph, DAG check, per-node health.

use crate::error::ValidationError;
use crate::graph;
use crate::health::{self, Connectivity};
use crate::logging;
use crate::model::{Pipeline, PipelineReport};

/// Validates a pipeline and builds its report.
///
/// Fails only when the node list is empty. Counts are taken from the lists as
/// submitted; the DAG check runs on the graph without dangling edges; health
/// uses the submitted edges (see [`health::evaluate`]). The whole pass is O(V + E).
pub fn parse_pipeline(pipeline: &Pipeline) -> Result<PipelineReport, ValidationError> {
    if pipeline.nodes.is_empty() {
        return Err(ValidationError::NoNodes);
    }
    logging::log_pipeline_received(pipeline.nodes.len(), pipeline.edges.len());

    let graph = graph::build(&pipeline.nodes, &pipeline.edges);
    let cycle = graph::find_cycle(&graph);
    if let Some(ref path) = cycle {
        logging::log_cycle_detected(path);
    }
    let is_dag = cycle.is_none();

    let connectivity = Connectivity::from_edges(&pipeline.edges);
    let node_health = pipeline
        .nodes
        .iter()
        .map(|node| health::evaluate_with(node, &connectivity, is_dag))
        .collect();

    let report = PipelineReport {
        num_nodes: pipeline.nodes.len(),
        num_edges: pipeline.edges.len(),
        is_dag,
        node_health,
    };
    logging::log_report(&report);
    Ok(report)
}
