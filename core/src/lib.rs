//! graph-walk-core: adjacency-list digraph with iterative traversals.
//!
//! Nodes are dense `usize` indices fixed at construction; edges are
//! append-only and keep insertion order. Depth-first and breadth-first
//! traversals are lazy iterators over a borrowed graph, with eager helpers
//! that collect the visitation sequence.
//!
//! No FFI concerns live here; the C ABI wrapper is the graph-walk-ffi crate.

mod error;
mod graph;
mod traversal;

pub use error::{GraphError, Result};
pub use graph::{Graph, NodeId};
pub use traversal::{
    bfs, bfs_order, dfs, dfs_order, is_strongly_connected, Bfs, Dfs, TraversalResult,
};
