//! Builds a [`DirectedGraph`] from submitted nodes and edges.

use crate::graph::DirectedGraph;
use crate::logging;
use crate::model::{Edge, Node};

/// Builds the graph used for cycle detection.
///
/// Vertices are the distinct node ids. An edge becomes an arc only when both
/// its source and target are declared nodes; dangling edges are skipped, not
/// reported as errors. Self-loops are kept.
pub fn build(nodes: &[Node], edges: &[Edge]) -> DirectedGraph {
    let mut graph = DirectedGraph::new();
    for node in nodes {
        graph.add_vertex(&node.id);
    }
    for edge in edges {
        if !graph.add_arc(&edge.source, &edge.target) {
            logging::log_edge_dropped(&edge.id, &edge.source, &edge.target);
        }
    }
    graph
}
