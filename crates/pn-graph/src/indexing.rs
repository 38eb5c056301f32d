//! Derived vertex/edge index tables.
//!
//! Downstream consumers (e.g. a rendering backend wanting index-pair
//! buffers) work with contiguous integers rather than node values. The
//! tables are a snapshot: rebuild with [`GraphIndex::from_graph`] after
//! mutating the graph. Indices are not stable across rebuilds.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use crate::graph::Graph;

/// Integer labeling of a graph's nodes and edges.
#[derive(Debug, Clone)]
pub struct GraphIndex<N> {
    /// node -> unique index in `[0, vertex_count)`.
    vertex_index: HashMap<N, usize>,

    /// index -> node, inverse of `vertex_index`.
    vertices: Vec<N>,

    /// Flat sequence of vertex indices; each consecutive pair is one
    /// undirected edge, listed exactly once.
    edge_index_list: Vec<usize>,
}

impl<N: Eq + Hash + Clone> GraphIndex<N> {
    /// Build index tables from the current graph state.
    ///
    /// Vertices are numbered in adjacency-map key order. Each stored
    /// edge direction is normalized to a canonical `(min, max)` index
    /// pair so the two directions deduplicate to one entry.
    pub fn from_graph(graph: &Graph<N>) -> Self {
        let mut vertex_index = HashMap::with_capacity(graph.node_count());
        let mut vertices = Vec::with_capacity(graph.node_count());
        for node in graph.nodes() {
            vertex_index.insert(node.clone(), vertices.len());
            vertices.push(node.clone());
        }

        let mut seen: HashSet<(usize, usize)> = HashSet::with_capacity(graph.edge_count());
        let mut edge_index_list = Vec::with_capacity(graph.edge_count() * 2);
        for (node, neighbors) in graph.adjacency() {
            let i = vertex_index[node];
            for neighbor in neighbors {
                let j = vertex_index[neighbor];
                let pair = (i.min(j), i.max(j));
                if seen.insert(pair) {
                    edge_index_list.push(pair.0);
                    edge_index_list.push(pair.1);
                }
            }
        }

        Self {
            vertex_index,
            vertices,
            edge_index_list,
        }
    }

    /// Number of indexed vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of indexed undirected edges.
    pub fn edge_count(&self) -> usize {
        self.edge_index_list.len() / 2
    }

    /// Index of a node, if it was present when the table was built.
    pub fn index_of(&self, node: &N) -> Option<usize> {
        self.vertex_index.get(node).copied()
    }

    /// Node at a given index (panics if out of bounds).
    pub fn node_at(&self, index: usize) -> &N {
        &self.vertices[index]
    }

    /// The full node -> index table.
    pub fn vertex_index(&self) -> &HashMap<N, usize> {
        &self.vertex_index
    }

    /// The flat edge index-pair buffer.
    pub fn edge_index_list(&self) -> &[usize] {
        &self.edge_index_list
    }
}
