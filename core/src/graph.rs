use crate::error::{GraphError, Result};

/// Node identifier: an index into the adjacency list, valid when `< order`.
pub type NodeId = usize;

/// Directed graph stored as one ordered neighbor list per node.
///
/// The node count (`order`) is fixed at construction. Edges are append-only and
/// keep insertion order, which decides the visiting order among siblings during
/// traversal. Parallel edges and self-loops are stored as given.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    adjacency: Vec<Vec<NodeId>>,
}

impl Graph {
    /// Graph with `order` nodes and no edges.
    pub fn new(order: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); order],
        }
    }

    /// Pre-allocate every neighbor list for an expected out-degree.
    pub fn with_capacity(order: usize, edges_per_node: usize) -> Self {
        Self {
            adjacency: (0..order)
                .map(|_| Vec::with_capacity(edges_per_node))
                .collect(),
        }
    }

    /// Build from a square adjacency matrix. Any non-zero cell `(i, j)` becomes
    /// the edge `i -> j`; each row's edges are appended in column order.
    pub fn from_adjacency_matrix<R: AsRef<[usize]>>(rows: &[R]) -> Result<Self> {
        let order = rows.len();
        let mut graph = Self::new(order);

        for (row, (cells, neighbors)) in
            rows.iter().zip(graph.adjacency.iter_mut()).enumerate()
        {
            let cells = cells.as_ref();
            if cells.len() != order {
                return Err(GraphError::NonSquareMatrix {
                    row,
                    len: cells.len(),
                    order,
                });
            }
            neighbors.extend(
                cells
                    .iter()
                    .enumerate()
                    .filter_map(|(col, &val)| (val != 0).then_some(col)),
            );
        }

        Ok(graph)
    }

    /// Number of nodes.
    pub fn order(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of stored edges, counting parallel edges individually.
    pub fn size(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }

    pub fn contains(&self, node: NodeId) -> bool {
        node < self.order()
    }

    /// Neighbors of `node` in insertion order.
    ///
    /// Out-of-range nodes have no neighbors: callers may pass stale or
    /// boundary indices without an error path.
    pub fn neighbors(&self, node: NodeId) -> &[NodeId] {
        self.adjacency.get(node).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn has_edge(&self, from: NodeId, to: NodeId) -> bool {
        self.neighbors(from).contains(&to)
    }

    pub fn out_degree(&self, node: NodeId) -> Option<usize> {
        self.adjacency.get(node).map(Vec::len)
    }

    /// Number of edges pointing at `node`. Scans every neighbor list.
    pub fn in_degree(&self, node: NodeId) -> Option<usize> {
        if !self.contains(node) {
            return None;
        }
        Some(
            self.adjacency
                .iter()
                .flatten()
                .filter(|&&target| target == node)
                .count(),
        )
    }

    /// `(in_degree, out_degree)` for `node`.
    pub fn degrees(&self, node: NodeId) -> Option<(usize, usize)> {
        Some((self.in_degree(node)?, self.out_degree(node)?))
    }

    /// Every edge as `(from, to)`, grouped by source in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        self.adjacency
            .iter()
            .enumerate()
            .flat_map(|(from, targets)| targets.iter().map(move |&to| (from, to)))
    }

    /// Validate `node` against the graph order.
    pub fn check_node(&self, node: NodeId) -> Result<()> {
        if self.contains(node) {
            Ok(())
        } else {
            Err(GraphError::OutOfRange {
                node,
                order: self.order(),
            })
        }
    }

    /// Append the edge `from -> to`, rejecting either endpoint `>= order`.
    /// `from` is checked first, so it is the node reported when both are bad.
    pub fn add_edge(&mut self, from: NodeId, to: NodeId) -> Result<()> {
        self.check_node(from)?;
        self.check_node(to)?;
        self.adjacency[from].push(to);
        Ok(())
    }

    /// Append the edge `from -> to` without reporting failure.
    ///
    /// Pairs with an endpoint `>= order` are dropped, so every stored neighbor
    /// stays a valid index. Duplicates are appended like any other edge.
    pub fn add_edge_unchecked(&mut self, from: NodeId, to: NodeId) {
        let order = self.order();
        match self.adjacency.get_mut(from) {
            Some(targets) if to < order => targets.push(to),
            _ => tracing::debug!(from, to, order, "dropping out-of-range edge"),
        }
    }

    /// Approximate heap usage of the adjacency storage in bytes.
    pub fn memory_usage(&self) -> usize {
        use std::mem::size_of;

        let lists = self.adjacency.capacity() * size_of::<Vec<NodeId>>();
        let targets: usize = self
            .adjacency
            .iter()
            .map(|v| v.capacity() * size_of::<NodeId>())
            .sum();

        lists + targets
    }
}
