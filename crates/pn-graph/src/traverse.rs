//! Connectivity: depth-first traversal and connected components.
//!
//! Two DFS implementations with identical observable results are kept
//! deliberately: a recursive one bounded by a depth limit, and an
//! explicit-stack iterative one. [`Graph::connected_components_with`]
//! tries the recursive form first and restarts iteratively when the
//! limit is hit, so a long path-shaped graph can never exhaust the call
//! stack.

use std::collections::HashSet;
use std::hash::Hash;

use crate::error::{GraphError, GraphResult};
use crate::graph::Graph;

/// Default recursion depth limit for component computation.
///
/// Small enough that hitting it leaves plenty of call-stack headroom,
/// large enough that editor-scale graphs stay on the recursive path.
pub const DEFAULT_RECURSION_LIMIT: usize = 2048;

/// Which traversal produced a component partition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DfsStrategy {
    /// Bounded recursive traversal.
    Recursive,
    /// Explicit-stack iterative traversal (the fallback).
    Iterative,
}

/// Traversal configuration.
#[derive(Debug, Clone, Copy)]
pub struct TraversalConfig {
    /// Maximum recursive call depth before falling back to the
    /// iterative traversal.
    pub recursion_limit: usize,
}

impl Default for TraversalConfig {
    fn default() -> Self {
        Self {
            recursion_limit: DEFAULT_RECURSION_LIMIT,
        }
    }
}

/// Result of a connected-components computation.
#[derive(Debug, Clone)]
pub struct ComponentsResult<N> {
    /// Disjoint node sequences; two nodes share a sequence iff a path
    /// of edges connects them.
    pub components: Vec<Vec<N>>,
    /// Which traversal completed the computation.
    pub strategy: DfsStrategy,
}

impl<N: Eq + Hash + Clone> Graph<N> {
    /// Depth-first traversal from `start` using an explicit stack,
    /// restricted to nodes not already in `visited`. Every node
    /// encountered is added to `visited` and to the returned sequence.
    ///
    /// Returns an empty sequence when `start` is not in the graph.
    /// Neighbor order is unspecified.
    pub fn dfs_iterative(&self, start: &N, visited: &mut HashSet<N>) -> Vec<N> {
        let mut traversal = Vec::new();
        if !self.adjacency.contains_key(start) {
            return traversal;
        }

        let mut stack = vec![start.clone()];
        while let Some(node) = stack.pop() {
            if visited.insert(node.clone()) {
                if let Some(neighbors) = self.adjacency.get(&node) {
                    for neighbor in neighbors {
                        if !visited.contains(neighbor) {
                            stack.push(neighbor.clone());
                        }
                    }
                }
                traversal.push(node);
            }
        }
        traversal
    }

    /// Recursive depth-first traversal from `start`, observably
    /// equivalent to [`Graph::dfs_iterative`] up to neighbor order.
    /// A `start` already in `visited` yields an empty sequence.
    ///
    /// Call depth is bounded by `limit`; exceeding it is
    /// [`GraphError::RecursionLimit`], leaving `visited` partially
    /// filled.
    pub fn dfs_recursive(
        &self,
        start: &N,
        visited: &mut HashSet<N>,
        limit: usize,
    ) -> GraphResult<Vec<N>> {
        let mut traversal = Vec::new();
        if visited.contains(start) || !self.adjacency.contains_key(start) {
            return Ok(traversal);
        }
        self.dfs_recursive_inner(start, 0, limit, visited, &mut traversal)?;
        Ok(traversal)
    }

    fn dfs_recursive_inner(
        &self,
        node: &N,
        depth: usize,
        limit: usize,
        visited: &mut HashSet<N>,
        traversal: &mut Vec<N>,
    ) -> GraphResult<()> {
        if depth >= limit {
            return Err(GraphError::RecursionLimit { limit });
        }
        visited.insert(node.clone());
        traversal.push(node.clone());

        if let Some(neighbors) = self.adjacency.get(node) {
            for neighbor in neighbors {
                if !visited.contains(neighbor) {
                    self.dfs_recursive_inner(neighbor, depth + 1, limit, visited, traversal)?;
                }
            }
        }
        Ok(())
    }

    /// Partition all nodes into connected components, recomputed from
    /// scratch on every call, using the default [`TraversalConfig`].
    pub fn connected_components(&self) -> Vec<Vec<N>> {
        self.connected_components_with(&TraversalConfig::default())
            .components
    }

    /// Partition all nodes into connected components with an explicit
    /// recursion limit, reporting which traversal completed.
    ///
    /// The recursive traversal runs first; if any component is deeper
    /// than the limit, the whole computation restarts iteratively and a
    /// `tracing` event records the fallback. The limit is therefore
    /// never surfaced to the caller as a failure.
    pub fn connected_components_with(&self, config: &TraversalConfig) -> ComponentsResult<N> {
        match self.components_recursive(config.recursion_limit) {
            Ok(components) => ComponentsResult {
                components,
                strategy: DfsStrategy::Recursive,
            },
            Err(_) => {
                tracing::debug!(
                    limit = config.recursion_limit,
                    "recursion limit reached, switching to iterative traversal"
                );
                ComponentsResult {
                    components: self.components_iterative(),
                    strategy: DfsStrategy::Iterative,
                }
            }
        }
    }

    /// True iff `a` and `b` are in the same connected component of the
    /// current graph. Recomputes the partition, so the answer is never
    /// stale with respect to prior mutations.
    pub fn are_connected(&self, a: &N, b: &N) -> bool {
        self.connected_components()
            .iter()
            .any(|comp| comp.contains(a) && comp.contains(b))
    }

    fn components_recursive(&self, limit: usize) -> GraphResult<Vec<Vec<N>>> {
        let mut visited = HashSet::with_capacity(self.adjacency.len());
        let mut components = Vec::new();
        for node in self.adjacency.keys() {
            if !visited.contains(node) {
                let mut traversal = Vec::new();
                self.dfs_recursive_inner(node, 0, limit, &mut visited, &mut traversal)?;
                components.push(traversal);
            }
        }
        Ok(components)
    }

    fn components_iterative(&self) -> Vec<Vec<N>> {
        let mut visited = HashSet::with_capacity(self.adjacency.len());
        let mut components = Vec::new();
        for node in self.adjacency.keys() {
            if !visited.contains(node) {
                components.push(self.dfs_iterative(node, &mut visited));
            }
        }
        components
    }
}
