//! Cycle detection using DFS three-color marking.
//!
//! A vertex is unvisited, in progress (on the current DFS path) or done. Reaching
//! an in-progress vertex is a back edge, hence a cycle. The traversal keeps an
//! explicit stack so deep chains cannot overflow the call stack. O(V + E).

use crate::graph::DirectedGraph;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Mark {
    Unvisited,
    InProgress,
    Done,
}

/// Returns true when the graph has no directed cycle. The empty graph is a DAG.
pub fn is_dag(graph: &DirectedGraph) -> bool {
    find_cycle(graph).is_none()
}

/// Finds one directed cycle, returned as a closed path (`a -> b -> a` is `["a", "b", "a"]`).
///
/// A self-loop on `a` is `["a", "a"]`. Which cycle is reported depends on vertex
/// order; whether one is found does not.
pub fn find_cycle(graph: &DirectedGraph) -> Option<Vec<&str>> {
    let mut marks = vec![Mark::Unvisited; graph.vertex_count()];
    // (vertex, index of the next successor to visit)
    let mut stack: Vec<(usize, usize)> = Vec::new();

    for root in 0..graph.vertex_count() {
        if marks[root] != Mark::Unvisited {
            continue;
        }
        marks[root] = Mark::InProgress;
        stack.push((root, 0));

        while let Some(frame) = stack.last_mut() {
            let vertex = frame.0;
            let Some(&next) = graph.successor_indices(vertex).get(frame.1) else {
                marks[vertex] = Mark::Done;
                stack.pop();
                continue;
            };
            frame.1 += 1;
            match marks[next] {
                Mark::Unvisited => {
                    marks[next] = Mark::InProgress;
                    stack.push((next, 0));
                }
                Mark::InProgress => {
                    let start = stack
                        .iter()
                        .position(|&(v, _)| v == next)
                        .unwrap_or(0);
                    let mut cycle: Vec<&str> = stack[start..]
                        .iter()
                        .map(|&(v, _)| graph.vertex_id(v))
                        .collect();
                    cycle.push(graph.vertex_id(next));
                    return Some(cycle);
                }
                Mark::Done => {}
            }
        }
    }
    None
}
