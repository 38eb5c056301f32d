//! pn-graph: mutable undirected graph for interactive topology editing.
//!
//! Provides:
//! - Adjacency-list graph storage with symmetric edge maintenance
//! - Topology-editing operations (dissolve, split, move)
//! - Connected-components queries with a recursion-limit fallback
//! - Derived vertex/edge index tables for downstream consumers
//!
//! # Example
//!
//! ```
//! use pn_core::Point;
//! use pn_graph::Graph;
//!
//! let mut g = Graph::new();
//! g.add_edge(Point::new(0.0, 0.0), Point::new(1.0, 1.0));
//! g.add_edge(Point::new(1.0, 1.0), Point::new(2.0, 2.0));
//!
//! let mid = g.split_edge(&Point::new(0.0, 0.0), &Point::new(1.0, 1.0)).unwrap();
//! assert_eq!(mid, Point::new(0.5, 0.5));
//! assert_eq!(g.connected_components().len(), 1);
//! ```

pub mod edit;
pub mod error;
pub mod graph;
pub mod indexing;
pub mod traverse;

// Re-exports for ergonomics
pub use error::{GraphError, GraphResult};
pub use graph::Graph;
pub use indexing::GraphIndex;
pub use traverse::{ComponentsResult, DfsStrategy, TraversalConfig, DEFAULT_RECURSION_LIMIT};
