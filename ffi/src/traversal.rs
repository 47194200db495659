use std::ptr;

use graph_walk_core::{bfs_order, dfs_order, Graph, NodeId, Result, TraversalResult};

use crate::handle::GwGraph;
use crate::status::GwStatus;

/// Owned sequence of node indices returned by a traversal.
///
/// `data` is null exactly when `len` is 0. Release with `gw_node_buffer_free`.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct GwNodeBuffer {
    pub data: *mut NodeId,
    pub len: usize,
}

impl GwNodeBuffer {
    pub const fn empty() -> Self {
        Self {
            data: ptr::null_mut(),
            len: 0,
        }
    }

    fn from_vec(nodes: Vec<NodeId>) -> Self {
        if nodes.is_empty() {
            return Self::empty();
        }
        let boxed = nodes.into_boxed_slice();
        let len = boxed.len();
        Self {
            data: Box::into_raw(boxed).cast::<NodeId>(),
            len,
        }
    }

    /// View the buffer contents.
    ///
    /// # Safety
    /// The buffer must come from a traversal and not have been freed.
    pub unsafe fn as_slice(&self) -> &[NodeId] {
        if self.data.is_null() {
            &[]
        } else {
            std::slice::from_raw_parts(self.data, self.len)
        }
    }
}

unsafe fn run(
    name: &str,
    graph: *const GwGraph,
    start: NodeId,
    out: *mut GwNodeBuffer,
    walk: fn(&Graph, NodeId) -> Result<TraversalResult>,
) -> i32 {
    let out = match out.as_mut() {
        Some(o) => o,
        None => {
            tracing::warn!("{name}: null output pointer");
            return GwStatus::NullOutput.code();
        }
    };
    *out = GwNodeBuffer::empty();

    let handle = match graph.as_ref() {
        Some(h) => h,
        None => {
            tracing::warn!("{name}: null graph handle");
            return GwStatus::NullHandle.code();
        }
    };

    match walk(&handle.graph, start) {
        Ok(result) => {
            *out = GwNodeBuffer::from_vec(result.order);
            GwStatus::Ok.code()
        }
        Err(e) => {
            tracing::warn!("{name}({start}): {e}");
            GwStatus::from(&e).code()
        }
    }
}

/// Depth-first traversal from `start`, written to `*out` in visiting order.
///
/// On any failure `*out` (when non-null) is set to an empty buffer.
///
/// # Safety
/// `graph` must be null or a live handle; `out` must be null or writable.
#[no_mangle]
pub unsafe extern "C" fn gw_graph_dfs(
    graph: *const GwGraph,
    start: NodeId,
    out: *mut GwNodeBuffer,
) -> i32 {
    run("gw_graph_dfs", graph, start, out, dfs_order)
}

/// Breadth-first traversal from `start`, written to `*out` in level order.
///
/// On any failure `*out` (when non-null) is set to an empty buffer.
///
/// # Safety
/// `graph` must be null or a live handle; `out` must be null or writable.
#[no_mangle]
pub unsafe extern "C" fn gw_graph_bfs(
    graph: *const GwGraph,
    start: NodeId,
    out: *mut GwNodeBuffer,
) -> i32 {
    run("gw_graph_bfs", graph, start, out, bfs_order)
}

/// Release a buffer filled by `gw_graph_dfs` or `gw_graph_bfs`.
///
/// # Safety
/// `buffer` must be unmodified from the traversal call and freed at most once.
#[no_mangle]
pub unsafe extern "C" fn gw_node_buffer_free(buffer: GwNodeBuffer) {
    if !buffer.data.is_null() {
        drop(Box::from_raw(ptr::slice_from_raw_parts_mut(
            buffer.data,
            buffer.len,
        )));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handle::{gw_graph_add_edge_unchecked, gw_graph_create, gw_graph_destroy};

    #[test]
    fn test_buffer_from_empty_vec() {
        let buf = GwNodeBuffer::from_vec(Vec::new());
        assert!(buf.data.is_null());
        assert_eq!(buf.len, 0);
        unsafe { gw_node_buffer_free(buf) };
    }

    #[test]
    fn test_dfs_and_bfs_buffers() {
        let g = gw_graph_create(4);
        unsafe {
            for (n, m) in [(0, 1), (0, 2), (1, 3), (2, 3)] {
                gw_graph_add_edge_unchecked(g, n, m);
            }

            let mut out = GwNodeBuffer::empty();
            assert_eq!(gw_graph_bfs(g, 0, &mut out), 0);
            assert_eq!(out.as_slice(), &[0, 1, 2, 3]);
            gw_node_buffer_free(out);

            assert_eq!(gw_graph_dfs(g, 0, &mut out), 0);
            assert_eq!(out.as_slice(), &[0, 2, 3, 1]);
            gw_node_buffer_free(out);

            gw_graph_destroy(g);
        }
    }

    #[test]
    fn test_failed_traversal_clears_output() {
        let g = gw_graph_create(2);
        let mut out = GwNodeBuffer {
            data: ptr::NonNull::dangling().as_ptr(),
            len: 99,
        };
        unsafe {
            assert_eq!(gw_graph_dfs(g, 2, &mut out), GwStatus::OutOfRange.code());
            assert!(out.data.is_null());
            assert_eq!(out.len, 0);
            assert_eq!(
                gw_graph_bfs(ptr::null(), 0, &mut out),
                GwStatus::NullHandle.code()
            );
            assert_eq!(
                gw_graph_bfs(g, 0, ptr::null_mut()),
                GwStatus::NullOutput.code()
            );
            gw_graph_destroy(g);
        }
    }
}
