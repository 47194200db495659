use graph_walk_core::{Graph, NodeId};

use crate::logging;
use crate::status::GwStatus;

/// Opaque graph handle handed to C callers.
pub struct GwGraph {
    pub(crate) graph: Graph,
}

impl GwGraph {
    pub fn graph(&self) -> &Graph {
        &self.graph
    }
}

/// Allocate a graph with `node_count` nodes and no edges.
///
/// Never returns null. A `node_count` whose adjacency storage cannot be
/// allocated aborts the process, like any allocation failure. The caller owns
/// the handle and must release it with `gw_graph_destroy`.
#[no_mangle]
pub extern "C" fn gw_graph_create(node_count: usize) -> *mut GwGraph {
    logging::init_logging();
    tracing::debug!(node_count, "creating graph");
    Box::into_raw(Box::new(GwGraph {
        graph: Graph::new(node_count),
    }))
}

/// Release a handle from `gw_graph_create`. Null is a no-op.
///
/// # Safety
/// `graph` must be null or a live handle from `gw_graph_create`, not used again afterwards.
#[no_mangle]
pub unsafe extern "C" fn gw_graph_destroy(graph: *mut GwGraph) {
    if !graph.is_null() {
        drop(Box::from_raw(graph));
    }
}

/// Node count, or 0 for a null handle.
///
/// # Safety
/// `graph` must be null or a live handle.
#[no_mangle]
pub unsafe extern "C" fn gw_graph_order(graph: *const GwGraph) -> usize {
    graph.as_ref().map_or(0, |h| h.graph.order())
}

/// Edge count, or 0 for a null handle.
///
/// # Safety
/// `graph` must be null or a live handle.
#[no_mangle]
pub unsafe extern "C" fn gw_graph_size(graph: *const GwGraph) -> usize {
    graph.as_ref().map_or(0, |h| h.graph.size())
}

/// Append `n -> m` with no failure signal.
///
/// Out-of-range endpoints and null handles are ignored.
///
/// # Safety
/// `graph` must be null or a live handle not aliased by another call in progress.
#[no_mangle]
pub unsafe extern "C" fn gw_graph_add_edge_unchecked(graph: *mut GwGraph, n: NodeId, m: NodeId) {
    if let Some(handle) = graph.as_mut() {
        handle.graph.add_edge_unchecked(n, m);
    }
}

/// Append `n -> m`, returning a `GwStatus` code.
///
/// # Safety
/// `graph` must be null or a live handle not aliased by another call in progress.
#[no_mangle]
pub unsafe extern "C" fn gw_graph_add_edge(graph: *mut GwGraph, n: NodeId, m: NodeId) -> i32 {
    let handle = match graph.as_mut() {
        Some(h) => h,
        None => {
            tracing::warn!("gw_graph_add_edge: null graph handle");
            return GwStatus::NullHandle.code();
        }
    };

    match handle.graph.add_edge(n, m) {
        Ok(()) => GwStatus::Ok.code(),
        Err(e) => {
            tracing::warn!("gw_graph_add_edge({n}, {m}): {e}");
            GwStatus::from(&e).code()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_and_destroy() {
        let g = gw_graph_create(5);
        assert!(!g.is_null());
        unsafe {
            assert_eq!(gw_graph_order(g), 5);
            assert_eq!(gw_graph_size(g), 0);
            gw_graph_destroy(g);
        }
    }

    #[test]
    fn test_create_empty_graph() {
        let g = gw_graph_create(0);
        assert!(!g.is_null());
        unsafe {
            assert_eq!(gw_graph_order(g), 0);
            gw_graph_destroy(g);
        }
    }

    #[test]
    fn test_null_handle_is_tolerated() {
        unsafe {
            gw_graph_destroy(std::ptr::null_mut());
            gw_graph_add_edge_unchecked(std::ptr::null_mut(), 0, 0);
            assert_eq!(gw_graph_order(std::ptr::null()), 0);
            assert_eq!(gw_graph_size(std::ptr::null()), 0);
            assert_eq!(
                gw_graph_add_edge(std::ptr::null_mut(), 0, 0),
                GwStatus::NullHandle.code()
            );
        }
    }

    #[test]
    fn test_add_edge_status() {
        let g = gw_graph_create(2);
        unsafe {
            assert_eq!(gw_graph_add_edge(g, 0, 1), 0);
            assert_eq!(gw_graph_add_edge(g, 0, 2), GwStatus::OutOfRange.code());
            gw_graph_add_edge_unchecked(g, 2, 0);
            gw_graph_add_edge_unchecked(g, 1, 1);
            assert_eq!((*g).graph().neighbors(0), &[1]);
            assert_eq!((*g).graph().neighbors(1), &[1]);
            gw_graph_destroy(g);
        }
    }
}
