//! Topology-editing operations: dissolve, split, move.

use std::collections::HashSet;
use std::hash::Hash;

use pn_core::Coordinate;

use crate::error::{GraphError, GraphResult};
use crate::graph::Graph;

impl<N: Eq + Hash + Clone> Graph<N> {
    /// Remove `node` while preserving connectivity among its former
    /// neighbors: every unordered pair of them gets a direct edge
    /// (clique closure). Removing a vertex from a path or polygon this
    /// way keeps the remaining vertices connected.
    ///
    /// A node with zero or one neighbor dissolves with no new edges.
    /// No-op when the node does not exist.
    pub fn dissolve_node(&mut self, node: &N) {
        self.last_dissolved.clear();
        let Some(neighbors) = self.detach(node) else {
            return;
        };

        let former: Vec<N> = neighbors.iter().cloned().collect();
        for (i, a) in former.iter().enumerate() {
            for b in &former[i + 1..] {
                self.add_edge(a.clone(), b.clone());
            }
        }
        self.last_dissolved = neighbors;
    }

    /// Former neighbors of the most recent [`Graph::dissolve_node`]
    /// call. Hosts can use this to rebuild the dissolved star when
    /// implementing undo. Cleared at the start of each dissolve.
    pub fn last_dissolved(&self) -> &HashSet<N> {
        &self.last_dissolved
    }
}

/// Geometric edits, available only for coordinate-valued nodes.
impl<N: Eq + Hash + Clone + Coordinate> Graph<N> {
    /// Replace the edge `(a, b)` with `(a, mid)` and `(mid, b)` where
    /// `mid` is the arithmetic midpoint. Returns the inserted node.
    ///
    /// Endpoints so close that the midpoint coincides with one of them
    /// cannot be split: the edge is left unchanged and the midpoint
    /// returned, so no self-loop or zero-length edge is created.
    ///
    /// Splitting an edge that does not exist is [`GraphError::EdgeNotFound`].
    pub fn split_edge(&mut self, a: &N, b: &N) -> GraphResult<N> {
        if !self.edge_exists(a, b) {
            return Err(GraphError::EdgeNotFound);
        }
        let mid = a.midpoint(b);
        if mid == *a || mid == *b {
            return Ok(mid);
        }
        self.delete_edge(a, b);
        self.add_edge(a.clone(), mid.clone());
        self.add_edge(mid.clone(), b.clone());
        Ok(mid)
    }

    /// Relocate `target` to `target + offset`: the old identity is
    /// hard-deleted and every former neighbor is re-edged to the new
    /// identity. Returns the new node.
    ///
    /// The node's degree is preserved, except in the degenerate case
    /// where the new identity lands exactly on a former neighbor (no
    /// self-loop is created). Moving an absent node is
    /// [`GraphError::NodeNotFound`].
    pub fn move_node(&mut self, target: &N, offset: &N) -> GraphResult<N> {
        let Some(former) = self.detach(target) else {
            return Err(GraphError::NodeNotFound);
        };
        let moved = target.translated(offset);
        for neighbor in former {
            if neighbor != moved {
                self.add_edge(moved.clone(), neighbor);
            }
        }
        Ok(moved)
    }
}
