use std::collections::VecDeque;

use crate::error::Result;
use crate::graph::{Graph, NodeId};

/// Visited markers for one traversal, sized to the graph order, with the
/// node each one was discovered from.
struct Visited {
    flags: Vec<bool>,
    parents: Vec<Option<NodeId>>,
    count: usize,
}

impl Visited {
    fn new(order: usize) -> Self {
        Self {
            flags: vec![false; order],
            parents: vec![None; order],
            count: 0,
        }
    }

    /// Mark `node` as reached from `parent`, returning `true` only on the
    /// first visit. Indices outside the graph are never marked.
    fn insert(&mut self, node: NodeId, parent: Option<NodeId>) -> bool {
        match self.flags.get_mut(node) {
            Some(seen) if !*seen => {
                *seen = true;
                self.parents[node] = parent;
                self.count += 1;
                true
            }
            _ => false,
        }
    }

    fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.parents.get(node).copied().flatten()
    }
}

/// Lazy depth-first traversal with an explicit stack.
///
/// Nodes are marked when pushed and yielded when popped, so siblings come out
/// in reverse insertion order: with edges `0->1, 0->2, 2->3`, starting at 0
/// yields `0, 2, 3, 1`.
pub struct Dfs<'a> {
    graph: &'a Graph,
    stack: Vec<NodeId>,
    visited: Visited,
}

impl<'a> Dfs<'a> {
    fn new(graph: &'a Graph, start: NodeId) -> Self {
        let mut visited = Visited::new(graph.order());
        let mut stack = Vec::with_capacity(graph.order());
        visited.insert(start, None);
        stack.push(start);
        Self {
            graph,
            stack,
            visited,
        }
    }

    /// Nodes discovered so far, including those still on the stack.
    pub fn discovered(&self) -> usize {
        self.visited.count
    }

    /// Node whose edge first discovered `node`.
    ///
    /// `None` for the start node, for nodes not yet discovered, and for
    /// indices outside the graph. Following parents back from any discovered
    /// node reaches the start along the DFS tree.
    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.visited.parent(node)
    }
}

impl Iterator for Dfs<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let current = self.stack.pop()?;
        for &neighbor in self.graph.neighbors(current) {
            if self.visited.insert(neighbor, Some(current)) {
                self.stack.push(neighbor);
            }
        }
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.graph.order() - self.visited.count + self.stack.len();
        (self.stack.len(), Some(remaining))
    }
}

/// Lazy breadth-first traversal with a FIFO queue; yields nodes in level order.
pub struct Bfs<'a> {
    graph: &'a Graph,
    queue: VecDeque<NodeId>,
    visited: Visited,
}

impl<'a> Bfs<'a> {
    fn new(graph: &'a Graph, start: NodeId) -> Self {
        let mut visited = Visited::new(graph.order());
        let mut queue = VecDeque::new();
        visited.insert(start, None);
        queue.push_back(start);
        Self {
            graph,
            queue,
            visited,
        }
    }

    /// Nodes discovered so far, including those still queued.
    pub fn discovered(&self) -> usize {
        self.visited.count
    }

    /// Node whose edge first discovered `node`; parents trace a shortest
    /// path back to the start. `None` for the start node, undiscovered nodes,
    /// and indices outside the graph.
    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.visited.parent(node)
    }
}

impl Iterator for Bfs<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let current = self.queue.pop_front()?;
        for &neighbor in self.graph.neighbors(current) {
            if self.visited.insert(neighbor, Some(current)) {
                self.queue.push_back(neighbor);
            }
        }
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.graph.order() - self.visited.count + self.queue.len();
        (self.queue.len(), Some(remaining))
    }
}

/// Visitation sequence of a completed traversal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraversalResult {
    pub order: Vec<NodeId>,
    pub nodes_visited: usize,
}

impl From<Vec<NodeId>> for TraversalResult {
    fn from(order: Vec<NodeId>) -> Self {
        Self {
            nodes_visited: order.len(),
            order,
        }
    }
}

/// Depth-first traversal from `start`. Fails if `start >= order`.
pub fn dfs(graph: &Graph, start: NodeId) -> Result<Dfs<'_>> {
    graph.check_node(start)?;
    Ok(Dfs::new(graph, start))
}

/// Breadth-first traversal from `start`. Fails if `start >= order`.
pub fn bfs(graph: &Graph, start: NodeId) -> Result<Bfs<'_>> {
    graph.check_node(start)?;
    Ok(Bfs::new(graph, start))
}

/// Run a depth-first traversal to completion.
pub fn dfs_order(graph: &Graph, start: NodeId) -> Result<TraversalResult> {
    let result = TraversalResult::from(dfs(graph, start)?.collect::<Vec<_>>());
    tracing::debug!(start, visited = result.nodes_visited, "dfs complete");
    Ok(result)
}

/// Run a breadth-first traversal to completion.
pub fn bfs_order(graph: &Graph, start: NodeId) -> Result<TraversalResult> {
    let result = TraversalResult::from(bfs(graph, start)?.collect::<Vec<_>>());
    tracing::debug!(start, visited = result.nodes_visited, "bfs complete");
    Ok(result)
}

/// True when every node reaches every other node along directed edges.
///
/// Runs one DFS per node, O(V * (V + E)). The empty graph is connected.
pub fn is_strongly_connected(graph: &Graph) -> bool {
    let order = graph.order();
    (0..order).all(|start| Dfs::new(graph, start).count() == order)
}
