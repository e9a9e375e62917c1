//! Shared builders for pipeline integration tests.

use pipeline_validator::{Edge, Node, NodeHealth, Pipeline};

/// Builds a pipeline from `(id, type)` pairs and `(source, target)` pairs.
/// Edge ids are `e0`, `e1`, ... in order.
pub fn pipeline(nodes: &[(&str, &str)], edges: &[(&str, &str)]) -> Pipeline {
    Pipeline::new(
        nodes.iter().map(|(id, ty)| Node::new(*id, *ty)).collect(),
        edges
            .iter()
            .enumerate()
            .map(|(i, (s, t))| Edge::new(format!("e{}", i), *s, *t))
            .collect(),
    )
}

/// Health entries sorted by node id, for order-insensitive comparison.
pub fn sorted_health(health: &[NodeHealth]) -> Vec<NodeHealth> {
    let mut sorted = health.to_vec();
    sorted.sort_by(|a, b| {
        (a.node_id.as_str(), a.healthy, a.reason.as_str())
            .cmp(&(b.node_id.as_str(), b.healthy, b.reason.as_str()))
    });
    sorted
}
