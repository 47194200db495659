//! graph_walk: C ABI over graph-walk-core.
//!
//! Exposes an opaque `GwGraph` handle with explicit create/destroy, edge
//! insertion (checked and unchecked), and DFS/BFS traversals that hand back
//! an owned `GwNodeBuffer` the caller releases with `gw_node_buffer_free`.
//! All symbols carry the `gw_` prefix; `include/graph_walk.h` declares them.
//!
//! Handles are not synchronized: callers serialize access per handle.

mod handle;
mod logging;
mod status;
mod traversal;

pub use handle::{
    gw_graph_add_edge, gw_graph_add_edge_unchecked, gw_graph_create, gw_graph_destroy,
    gw_graph_order, gw_graph_size, GwGraph,
};
pub use logging::{gw_init_logging, init_logging, LOG_ENV};
pub use status::{gw_status_message, GwStatus};
pub use traversal::{gw_graph_bfs, gw_graph_dfs, gw_node_buffer_free, GwNodeBuffer};
