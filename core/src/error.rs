use thiserror::Error;

use crate::graph::NodeId;

/// Errors raised by graph construction, checked insertion and traversal.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("node {node} out of range for graph of order {order}")]
    OutOfRange { node: NodeId, order: usize },

    #[error("adjacency matrix row {row} has {len} columns, expected {order}")]
    NonSquareMatrix { row: usize, len: usize, order: usize },
}

/// Convenience alias for results using `GraphError`.
pub type Result<T> = std::result::Result<T, GraphError>;
