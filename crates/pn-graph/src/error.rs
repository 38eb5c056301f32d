//! Graph-specific error types.

use pn_core::PnError;
use thiserror::Error;

/// Result type for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;

/// Errors reported by graph editing and traversal operations.
///
/// Deleting absent nodes or edges is never an error; these variants only
/// arise from operations whose preconditions were made explicit
/// (`split_edge`, `move_node`) and from bounded recursive traversal.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// The target node is not present in the graph.
    #[error("Node not found in graph")]
    NodeNotFound,

    /// The target edge is not present in the graph.
    #[error("Edge not found in graph")]
    EdgeNotFound,

    /// Recursive traversal exceeded its configured depth limit.
    #[error("Recursion limit of {limit} exceeded during traversal")]
    RecursionLimit { limit: usize },
}

impl From<GraphError> for PnError {
    fn from(err: GraphError) -> Self {
        match err {
            GraphError::NodeNotFound => PnError::InvalidArg {
                what: "node not found in graph",
            },
            GraphError::EdgeNotFound => PnError::InvalidArg {
                what: "edge not found in graph",
            },
            GraphError::RecursionLimit { .. } => PnError::Invariant {
                what: err.to_string(),
            },
        }
    }
}
