//! Logging utilities for pipeline validation.
//!
//! Emits structured events through `tracing` when the `tracing` feature is on;
//! otherwise the helpers compile to nothing so the library stays quiet.

use crate::model::PipelineReport;

/// Log a pipeline arriving for validation.
pub fn log_pipeline_received(num_nodes: usize, num_edges: usize) {
    #[cfg(feature = "tracing")]
    tracing::debug!(num_nodes, num_edges, "Validating pipeline");

    #[cfg(not(feature = "tracing"))]
    let _ = (num_nodes, num_edges);
}

/// Log an edge left out of the graph because an endpoint is not a declared node.
pub fn log_edge_dropped(edge_id: &str, source: &str, target: &str) {
    #[cfg(feature = "tracing")]
    tracing::debug!(edge_id, source, target, "Dropping dangling edge");

    #[cfg(not(feature = "tracing"))]
    let _ = (edge_id, source, target);
}

/// Log the cycle that made the pipeline fail the DAG check.
pub fn log_cycle_detected(cycle: &[&str]) {
    #[cfg(feature = "tracing")]
    tracing::info!(cycle = %cycle.join(" -> "), "Pipeline contains a cycle");

    #[cfg(not(feature = "tracing"))]
    let _ = cycle;
}

/// Log the outcome of a validation.
pub fn log_report(report: &PipelineReport) {
    #[cfg(feature = "tracing")]
    {
        let unhealthy = report.node_health.iter().filter(|h| !h.healthy).count();
        tracing::info!(
            num_nodes = report.num_nodes,
            num_edges = report.num_edges,
            is_dag = report.is_dag,
            unhealthy,
            "Pipeline validated"
        );
    }

    #[cfg(not(feature = "tracing"))]
    let _ = report;
}
