//! Core adjacency-list graph storage.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

/// A mutable undirected graph over an arbitrary hashable node identity.
///
/// Storage is an adjacency map `node -> set of neighbors`, maintained
/// symmetrically: `b ∈ adj[a] ⟺ a ∈ adj[b]`. In the motivating editor a
/// node is a 2D coordinate ([`pn_core::Point`]), but any `Eq + Hash +
/// Clone` value works.
///
/// Nodes come into existence as a side effect of [`Graph::add_edge`];
/// there is no standalone add-node operation. A key is kept only while
/// its neighbor set is non-empty, so key presence, nonzero degree, and
/// [`Graph::node_exists`] always agree.
#[derive(Debug, Clone)]
pub struct Graph<N> {
    pub(crate) adjacency: HashMap<N, HashSet<N>>,

    /// Former neighbors of the most recent dissolve, kept so a host can
    /// offer undo. See [`Graph::last_dissolved`].
    pub(crate) last_dissolved: HashSet<N>,
}

impl<N> Graph<N> {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self {
            adjacency: HashMap::new(),
            last_dissolved: HashSet::new(),
        }
    }
}

impl<N> Default for Graph<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: Eq + Hash + Clone> Graph<N> {
    /// True iff `node` is present (equivalently: has at least one edge).
    pub fn node_exists(&self, node: &N) -> bool {
        self.adjacency.contains_key(node)
    }

    /// True iff `b` is stored in `a`'s neighbor set.
    ///
    /// Checks the forward direction only; the symmetry invariant makes
    /// the reverse check redundant (asserted by tests, not relied on).
    pub fn edge_exists(&self, a: &N, b: &N) -> bool {
        self.adjacency.get(a).is_some_and(|set| set.contains(b))
    }

    /// True iff an edge is stored in either direction.
    pub fn directly_connected(&self, a: &N, b: &N) -> bool {
        self.edge_exists(a, b) || self.edge_exists(b, a)
    }

    /// Insert the undirected edge `(a, b)`, creating either node's entry
    /// if absent. Idempotent.
    pub fn add_edge(&mut self, a: N, b: N) {
        self.adjacency.entry(a.clone()).or_default().insert(b.clone());
        self.adjacency.entry(b).or_default().insert(a);
    }

    /// Remove the undirected edge `(a, b)`. No-op when the edge does not
    /// exist. Endpoints left with no edges are removed entirely.
    pub fn delete_edge(&mut self, a: &N, b: &N) {
        self.remove_directed(a, b);
        self.remove_directed(b, a);
    }

    /// Hard-delete `node`: drop its entry and scrub it from every
    /// neighbor's set. Former neighbors get no compensating edges (use
    /// [`Graph::dissolve_node`] to preserve their connectivity).
    /// No-op when the node does not exist.
    pub fn delete_node(&mut self, node: &N) {
        self.detach(node);
    }

    /// The neighbor set of `node`, if present.
    pub fn neighbors(&self, node: &N) -> Option<&HashSet<N>> {
        self.adjacency.get(node)
    }

    /// Number of edges incident to `node` (0 when absent).
    pub fn degree(&self, node: &N) -> usize {
        self.adjacency.get(node).map_or(0, HashSet::len)
    }

    /// Iterate over all nodes. Order is unspecified.
    pub fn nodes(&self) -> impl Iterator<Item = &N> {
        self.adjacency.keys()
    }

    /// Read access to the raw adjacency map, for host applications that
    /// iterate the structure directly (e.g. to render it).
    pub fn adjacency(&self) -> &HashMap<N, HashSet<N>> {
        &self.adjacency
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(HashSet::len).sum::<usize>() / 2
    }

    /// True iff the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Remove `node`'s entry and scrub it from each former neighbor's
    /// set, pruning neighbors that end up with no edges. Returns the
    /// former neighbor set, or `None` if the node was absent.
    pub(crate) fn detach(&mut self, node: &N) -> Option<HashSet<N>> {
        let neighbors = self.adjacency.remove(node)?;
        for neighbor in &neighbors {
            if let Some(set) = self.adjacency.get_mut(neighbor) {
                set.remove(node);
                if set.is_empty() {
                    self.adjacency.remove(neighbor);
                }
            }
        }
        Some(neighbors)
    }

    fn remove_directed(&mut self, from: &N, to: &N) {
        if let Some(set) = self.adjacency.get_mut(from) {
            set.remove(to);
            if set.is_empty() {
                self.adjacency.remove(from);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_graph() {
        let g: Graph<i32> = Graph::new();
        assert!(g.is_empty());
        assert_eq!(g.node_count(), 0);
        assert_eq!(g.edge_count(), 0);
        assert!(!g.node_exists(&1));
    }

    #[test]
    fn add_edge_creates_both_nodes() {
        let mut g = Graph::new();
        g.add_edge(1, 2);

        assert!(g.node_exists(&1));
        assert!(g.node_exists(&2));
        assert!(g.edge_exists(&1, &2));
        assert!(g.edge_exists(&2, &1));
        assert!(g.directly_connected(&1, &2));
        assert_eq!(g.node_count(), 2);
        assert_eq!(g.edge_count(), 1);
    }

    #[test]
    fn add_edge_is_idempotent() {
        let mut g = Graph::new();
        g.add_edge(1, 2);
        g.add_edge(1, 2);
        g.add_edge(2, 1);

        assert_eq!(g.edge_count(), 1);
        assert_eq!(g.degree(&1), 1);
        assert_eq!(g.degree(&2), 1);
    }

    #[test]
    fn delete_edge_prunes_isolated_endpoints() {
        let mut g = Graph::new();
        g.add_edge(1, 2);
        g.add_edge(2, 3);
        g.delete_edge(&1, &2);

        assert!(!g.edge_exists(&1, &2));
        assert!(!g.edge_exists(&2, &1));
        // 1 lost its only edge and therefore no longer exists.
        assert!(!g.node_exists(&1));
        assert!(g.node_exists(&2));
        assert!(g.node_exists(&3));
    }

    #[test]
    fn delete_missing_edge_is_noop() {
        let mut g = Graph::new();
        g.add_edge(1, 2);
        g.delete_edge(&1, &3);
        g.delete_edge(&4, &5);

        assert!(g.edge_exists(&1, &2));
        assert_eq!(g.node_count(), 2);
    }

    #[test]
    fn delete_node_is_hard() {
        // 1-2-3 with 2 also connected to 4
        let mut g = Graph::new();
        g.add_edge(1, 2);
        g.add_edge(2, 3);
        g.add_edge(2, 4);
        g.delete_node(&2);

        assert!(!g.node_exists(&2));
        // Former neighbors of 2 gain no compensating edges.
        assert!(!g.directly_connected(&1, &3));
        assert!(!g.directly_connected(&1, &4));
        assert!(!g.directly_connected(&3, &4));
        // 1, 3 and 4 had no other edges, so they are gone too.
        assert!(g.is_empty());
    }

    #[test]
    fn delete_missing_node_is_noop() {
        let mut g = Graph::new();
        g.add_edge(1, 2);
        g.delete_node(&9);
        assert_eq!(g.node_count(), 2);
    }

    #[test]
    fn neighbors_and_degree() {
        let mut g = Graph::new();
        g.add_edge(1, 2);
        g.add_edge(1, 3);

        assert_eq!(g.degree(&1), 2);
        assert_eq!(g.degree(&9), 0);
        let n1: HashSet<i32> = g.neighbors(&1).unwrap().clone();
        assert_eq!(n1, HashSet::from([2, 3]));
        assert!(g.neighbors(&9).is_none());
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    #[derive(Debug, Clone)]
    enum Op {
        Add(u8, u8),
        DelEdge(u8, u8),
        DelNode(u8),
        Dissolve(u8),
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        prop_oneof![
            (0u8..16, 0u8..16).prop_map(|(a, b)| Op::Add(a, b)),
            (0u8..16, 0u8..16).prop_map(|(a, b)| Op::DelEdge(a, b)),
            (0u8..16).prop_map(Op::DelNode),
            (0u8..16).prop_map(Op::Dissolve),
        ]
    }

    proptest! {
        #[test]
        fn edits_preserve_symmetry_and_pruning(ops in prop::collection::vec(op_strategy(), 0..64)) {
            let mut g = Graph::new();
            for op in ops {
                match op {
                    Op::Add(a, b) => {
                        if a != b {
                            g.add_edge(a, b);
                        }
                    }
                    Op::DelEdge(a, b) => g.delete_edge(&a, &b),
                    Op::DelNode(n) => g.delete_node(&n),
                    Op::Dissolve(n) => g.dissolve_node(&n),
                }

                for (node, neighbors) in g.adjacency() {
                    // No key may linger with an empty neighbor set.
                    prop_assert!(!neighbors.is_empty());
                    for neighbor in neighbors {
                        prop_assert_eq!(
                            g.edge_exists(node, neighbor),
                            g.edge_exists(neighbor, node)
                        );
                    }
                }
            }
        }
    }
}
