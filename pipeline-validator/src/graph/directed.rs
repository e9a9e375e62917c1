//! Adjacency-list graph keyed by node id.

use std::collections::HashMap;

/// Directed graph whose vertices are distinct node ids.
///
/// Vertices keep first-insertion order. Parallel arcs between the same pair
/// are stored as-is; they do not change reachability.
#[derive(Clone, Debug, Default)]
pub struct DirectedGraph {
    ids: Vec<String>,
    index: HashMap<String, usize>,
    adjacency: Vec<Vec<usize>>,
    arc_count: usize,
}

impl DirectedGraph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a vertex; a repeated id is absorbed into the existing vertex.
    pub fn add_vertex(&mut self, id: &str) {
        if self.index.contains_key(id) {
            return;
        }
        self.index.insert(id.to_string(), self.ids.len());
        self.ids.push(id.to_string());
        self.adjacency.push(Vec::new());
    }

    /// Adds an arc `from -> to` when both vertices exist. Returns whether it was added.
    pub fn add_arc(&mut self, from: &str, to: &str) -> bool {
        match (self.index.get(from), self.index.get(to)) {
            (Some(&f), Some(&t)) => {
                self.adjacency[f].push(t);
                self.arc_count += 1;
                true
            }
            _ => false,
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.ids.len()
    }

    pub fn arc_count(&self) -> usize {
        self.arc_count
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Vertex ids in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }

    /// Direct successors of `id`, one entry per arc. Empty for unknown ids.
    pub fn successors<'a>(&'a self, id: &str) -> impl Iterator<Item = &'a str> + 'a {
        self.index
            .get(id)
            .map(|&i| self.adjacency[i].as_slice())
            .unwrap_or(&[])
            .iter()
            .map(move |&j| self.ids[j].as_str())
    }

    pub(crate) fn successor_indices(&self, vertex: usize) -> &[usize] {
        &self.adjacency[vertex]
    }

    pub(crate) fn vertex_id(&self, vertex: usize) -> &str {
        &self.ids[vertex]
    }
}
