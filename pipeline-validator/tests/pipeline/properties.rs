//! Properties that hold for any pipeline: idempotence, order independence,
//! unfiltered counts, cycle propagation.

use pipeline_validator::{parse_pipeline, Pipeline};

use crate::common::{pipeline, sorted_health};

fn samples() -> Vec<Pipeline> {
    vec![
        pipeline(&[("a", "input")], &[]),
        pipeline(&[("a", "input"), ("b", "output")], &[("a", "b")]),
        pipeline(&[("a", "input"), ("b", "input")], &[("a", "b"), ("b", "a")]),
        pipeline(&[("a", "process")], &[("a", "ghost")]),
        pipeline(
            &[("i", "input"), ("x", "llm"), ("y", "text"), ("o", "output")],
            &[("i", "x"), ("x", "y"), ("y", "o"), ("i", "y"), ("x", "o")],
        ),
        pipeline(
            &[("i", "input"), ("x", "llm"), ("y", "text"), ("o", "output")],
            &[("i", "x"), ("x", "y"), ("y", "x"), ("y", "o"), ("o", "nowhere")],
        ),
        pipeline(&[("s", "llm")], &[("s", "s")]),
    ]
}

/// Lists with more elements than this are only rotated and reversed.
const FULL_PERMUTATION_LIMIT: usize = 4;

/// Every ordering of `items` (Heap's algorithm).
fn permutations<T: Clone>(items: &[T]) -> Vec<Vec<T>> {
    fn heap<T: Clone>(k: usize, items: &mut Vec<T>, out: &mut Vec<Vec<T>>) {
        if k <= 1 {
            out.push(items.clone());
            return;
        }
        for i in 0..k - 1 {
            heap(k - 1, items, out);
            if k % 2 == 0 {
                items.swap(i, k - 1);
            } else {
                items.swap(0, k - 1);
            }
        }
        heap(k - 1, items, out);
    }

    let mut items = items.to_vec();
    let mut out = Vec::new();
    heap(items.len(), &mut items, &mut out);
    out
}

/// Orderings to try: all permutations of short lists; rotations and their
/// reversals otherwise.
fn orderings<T: Clone>(items: &[T]) -> Vec<Vec<T>> {
    if items.len() <= FULL_PERMUTATION_LIMIT {
        return permutations(items);
    }
    let mut out = Vec::new();
    for k in 0..items.len() {
        let mut v = items.to_vec();
        v.rotate_left(k);
        out.push(v.clone());
        v.reverse();
        out.push(v);
    }
    out
}

#[test]
fn permutations_cover_every_ordering() {
    assert_eq!(permutations::<u8>(&[]), vec![Vec::<u8>::new()]);
    let mut all = permutations(&[1, 2, 3, 4]);
    assert_eq!(all.len(), 24);
    all.sort();
    all.dedup();
    assert_eq!(all.len(), 24);
    assert!(orderings(&[1, 2, 3, 4, 5]).contains(&vec![5, 4, 3, 2, 1]));
}

#[test]
fn identical_input_gives_identical_report() {
    for p in samples() {
        assert_eq!(parse_pipeline(&p), parse_pipeline(&p.clone()));
    }
}

#[test]
fn counts_match_submitted_lists() {
    for p in samples() {
        let report = parse_pipeline(&p).expect("report");
        assert_eq!(report.num_nodes, p.nodes.len());
        assert_eq!(report.num_edges, p.edges.len());
        assert_eq!(report.node_health.len(), p.nodes.len());
    }
}

/// **Scenario**: Reordering nodes or edges (every permutation of short lists, rotations
/// and reversals of longer ones) keeps the verdict and the multiset of health entries,
/// while output order tracks the node order.
#[test]
fn permutation_does_not_change_results() {
    for p in samples() {
        let base = parse_pipeline(&p).expect("report");
        for nodes in orderings(&p.nodes) {
            for edges in orderings(&p.edges) {
                let permuted = Pipeline::new(nodes.clone(), edges);
                let report = parse_pipeline(&permuted).expect("report");
                assert_eq!(report.is_dag, base.is_dag);
                assert_eq!(
                    sorted_health(&report.node_health),
                    sorted_health(&base.node_health)
                );
                let order: Vec<_> = report.node_health.iter().map(|h| &h.node_id).collect();
                let expected: Vec<_> = nodes.iter().map(|n| &n.id).collect();
                assert_eq!(order, expected);
            }
        }
    }
}

/// **Scenario**: Whenever the DAG check fails, every node reports the cycle.
#[test]
fn cyclic_pipelines_mark_every_node() {
    for p in samples() {
        let report = parse_pipeline(&p).expect("report");
        if !report.is_dag {
            assert!(report
                .node_health
                .iter()
                .all(|h| !h.healthy && h.reason == "Pipeline contains a cycle"));
        }
    }
}

#[test]
fn single_node_without_edges_is_dag() {
    for ty in ["input", "output", "llm", "base"] {
        let report = parse_pipeline(&pipeline(&[("only", ty)], &[])).expect("report");
        assert!(report.is_dag);
    }
}
