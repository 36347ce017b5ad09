//! A compact undirected simple graph.
//!
//! Nodes and edges carry no weights and are add-only, so indices stay dense.
//! The invariant computations in the rest of the crate rely on that density
//! to use bit masks keyed by node index.
use std::fmt::{self, Debug};
use std::iter::FusedIterator;

use bitvec::prelude::*;
use thiserror::Error;

/// Index of a node within a [`Graph`].
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct NodeIndex(u32);

impl NodeIndex {
    /// Creates a node index from a `usize`.
    ///
    /// # Panics
    ///
    /// Panics if the index does not fit into `u32`.
    #[inline]
    pub fn new(index: usize) -> Self {
        assert!(index <= u32::MAX as usize);
        Self(index as u32)
    }

    /// Returns the index as a `usize`.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl Debug for NodeIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeIndex({})", self.0)
    }
}

impl From<u32> for NodeIndex {
    fn from(index: u32) -> Self {
        Self(index)
    }
}

/// Index of an edge within a [`Graph`].
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct EdgeIndex(u32);

impl EdgeIndex {
    /// Creates an edge index from a `usize`.
    ///
    /// # Panics
    ///
    /// Panics if the index does not fit into `u32`.
    #[inline]
    pub fn new(index: usize) -> Self {
        assert!(index <= u32::MAX as usize);
        Self(index as u32)
    }

    /// Returns the index as a `usize`.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl Debug for EdgeIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EdgeIndex({})", self.0)
    }
}

/// An undirected simple graph with dense `u32` indices.
///
/// Edges join two distinct nodes; adding an edge that already exists returns
/// the index of the existing edge. Nodes and edges cannot be removed.
///
/// # Example
///
/// ```
/// # use graphinv::Graph;
/// let mut graph = Graph::new();
///
/// let a = graph.add_node();
/// let b = graph.add_node();
/// let e = graph.add_edge(a, b).unwrap();
///
/// assert_eq!(graph.node_count(), 2);
/// assert_eq!(graph.edge_endpoints(e), Some((a, b)));
/// assert!(graph.neighbours(a).eq([b]));
/// ```
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Graph {
    adjacency: Vec<Vec<NodeIndex>>,
    edges: Vec<(NodeIndex, NodeIndex)>,
}

impl Debug for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Graph")
            .field("nodes", &self.adjacency.len())
            .field("edges", &self.edges)
            .finish()
    }
}

impl Graph {
    /// Creates a new empty graph.
    pub fn new() -> Self {
        Self::with_capacity(0, 0)
    }

    /// Creates a new empty graph with preallocated capacities for nodes and edges.
    pub fn with_capacity(nodes: usize, edges: usize) -> Self {
        Self {
            adjacency: Vec::with_capacity(nodes),
            edges: Vec::with_capacity(edges),
        }
    }

    /// Builds a graph from a list of edges, creating nodes as needed.
    ///
    /// # Panics
    ///
    /// Panics if an edge is a self loop.
    ///
    /// # Example
    ///
    /// ```
    /// # use graphinv::Graph;
    /// let graph = Graph::from_edges([(0, 1), (1, 2)]);
    /// assert_eq!(graph.node_count(), 3);
    /// assert_eq!(graph.edge_count(), 2);
    /// ```
    pub fn from_edges(edges: impl IntoIterator<Item = (u32, u32)>) -> Self {
        let mut graph = Self::new();

        for (u, v) in edges {
            let max = u.max(v) as usize;
            while graph.node_count() <= max {
                graph.add_node();
            }
            graph
                .add_edge(NodeIndex(u), NodeIndex(v))
                .unwrap_or_else(|err| panic!("invalid edge ({u}, {v}): {err}"));
        }

        graph
    }

    /// Adds a node to the graph.
    pub fn add_node(&mut self) -> NodeIndex {
        let index = NodeIndex::new(self.adjacency.len());
        self.adjacency.push(Vec::new());
        index
    }

    /// Adds an undirected edge between two distinct nodes.
    ///
    /// If the edge is already present, its existing index is returned.
    ///
    /// # Example
    ///
    /// ```
    /// # use graphinv::Graph;
    /// let mut graph = Graph::new();
    /// let a = graph.add_node();
    /// let b = graph.add_node();
    ///
    /// let e = graph.add_edge(a, b).unwrap();
    /// assert_eq!(graph.add_edge(b, a), Ok(e));
    /// assert!(graph.add_edge(a, a).is_err());
    /// ```
    pub fn add_edge(&mut self, u: NodeIndex, v: NodeIndex) -> Result<EdgeIndex, GraphError> {
        if !self.has_node(u) || !self.has_node(v) {
            return Err(GraphError::UnknownNode);
        }

        if u == v {
            return Err(GraphError::SelfLoop);
        }

        if let Some(existing) = self.edge_between(u, v) {
            return Ok(existing);
        }

        let index = EdgeIndex::new(self.edges.len());
        self.edges.push((u.min(v), u.max(v)));
        self.adjacency[u.index()].push(v);
        self.adjacency[v.index()].push(u);
        Ok(index)
    }

    /// Checks whether the graph has a node with a given index.
    pub fn has_node(&self, n: NodeIndex) -> bool {
        n.index() < self.adjacency.len()
    }

    /// Checks whether the graph has an edge with a given index.
    pub fn has_edge(&self, e: EdgeIndex) -> bool {
        e.index() < self.edges.len()
    }

    /// Checks whether two nodes are adjacent.
    pub fn contains_edge(&self, u: NodeIndex, v: NodeIndex) -> bool {
        self.edge_between(u, v).is_some()
    }

    /// The index of the edge joining two nodes, if present.
    pub fn edge_between(&self, u: NodeIndex, v: NodeIndex) -> Option<EdgeIndex> {
        let key = (u.min(v), u.max(v));
        self.edges
            .iter()
            .position(|&endpoints| endpoints == key)
            .map(EdgeIndex::new)
    }

    /// The endpoints of an edge, ordered by index.
    ///
    /// Returns `None` if the edge does not exist.
    pub fn edge_endpoints(&self, e: EdgeIndex) -> Option<(NodeIndex, NodeIndex)> {
        self.edges.get(e.index()).copied()
    }

    /// Iterator over the node indices of the graph.
    ///
    /// # Example
    ///
    /// ```
    /// # use graphinv::Graph;
    /// let graph = Graph::path(3);
    /// assert_eq!(graph.node_indices().count(), 3);
    /// ```
    pub fn node_indices(&self) -> NodeIndices {
        NodeIndices(0..self.adjacency.len() as u32)
    }

    /// Iterator over the edge indices of the graph.
    pub fn edge_indices(&self) -> EdgeIndices {
        EdgeIndices(0..self.edges.len() as u32)
    }

    /// Iterator over the nodes adjacent to a node, in insertion order.
    ///
    /// # Panics
    ///
    /// Panics if the node does not exist.
    pub fn neighbours(&self, n: NodeIndex) -> Neighbours<'_> {
        Neighbours(self.adjacency[n.index()].iter())
    }

    /// The number of edges incident to a node.
    ///
    /// # Panics
    ///
    /// Panics if the node does not exist.
    pub fn degree(&self, n: NodeIndex) -> usize {
        self.adjacency[n.index()].len()
    }

    /// Number of nodes in the graph.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of edges in the graph.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Whether the graph has no nodes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Whether every node is reachable from every other node.
    ///
    /// Graphs with at most one node count as connected.
    ///
    /// # Example
    ///
    /// ```
    /// # use graphinv::Graph;
    /// assert!(Graph::path(4).is_connected());
    ///
    /// let mut graph = Graph::path(2);
    /// graph.add_node();
    /// assert!(!graph.is_connected());
    /// ```
    pub fn is_connected(&self) -> bool {
        if self.node_count() <= 1 {
            return true;
        }

        let mut seen = bitvec![0; self.node_count()];
        let mut stack = vec![NodeIndex::new(0)];
        seen.set(0, true);
        let mut count = 1;

        while let Some(node) = stack.pop() {
            for next in self.neighbours(node) {
                if !seen[next.index()] {
                    seen.set(next.index(), true);
                    count += 1;
                    stack.push(next);
                }
            }
        }

        count == self.node_count()
    }
}

/// Constructors for standard graph families.
impl Graph {
    /// The path graph on `n` nodes.
    pub fn path(n: usize) -> Self {
        let mut graph = Self::with_capacity(n, n.saturating_sub(1));
        let mut prev = None;

        for _ in 0..n {
            let node = graph.add_node();
            if let Some(prev) = prev {
                let _ = graph.add_edge(prev, node);
            }
            prev = Some(node);
        }

        graph
    }

    /// The cycle graph on `n` nodes.
    ///
    /// # Panics
    ///
    /// Panics if `n < 3`.
    pub fn cycle(n: usize) -> Self {
        assert!(n >= 3, "cycle graphs need at least 3 nodes");
        let mut graph = Self::path(n);
        let _ = graph.add_edge(NodeIndex::new(n - 1), NodeIndex::new(0));
        graph
    }

    /// The complete graph on `n` nodes.
    pub fn complete(n: usize) -> Self {
        let mut graph = Self::with_capacity(n, n * n.saturating_sub(1) / 2);

        for _ in 0..n {
            graph.add_node();
        }

        for u in 0..n {
            for v in (u + 1)..n {
                let _ = graph.add_edge(NodeIndex::new(u), NodeIndex::new(v));
            }
        }

        graph
    }

    /// The star graph with `n` leaves: node 0 is the center, order `n + 1`.
    pub fn star(n: usize) -> Self {
        let mut graph = Self::with_capacity(n + 1, n);
        let center = graph.add_node();

        for _ in 0..n {
            let leaf = graph.add_node();
            let _ = graph.add_edge(center, leaf);
        }

        graph
    }

    /// The Petersen graph: an outer 5-cycle, an inner 5-cycle joined with
    /// step 2, and spokes between them.
    pub fn petersen() -> Self {
        Self::from_edges([
            (0, 1),
            (1, 2),
            (2, 3),
            (3, 4),
            (4, 0),
            (5, 7),
            (7, 9),
            (9, 6),
            (6, 8),
            (8, 5),
            (0, 5),
            (1, 6),
            (2, 7),
            (3, 8),
            (4, 9),
        ])
    }
}

/// Error returned by [`Graph::add_edge`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("unknown node")]
    UnknownNode,
    #[error("self loops are not allowed")]
    SelfLoop,
}

/// Iterator created by [`Graph::node_indices`].
#[derive(Clone)]
pub struct NodeIndices(std::ops::Range<u32>);

impl Iterator for NodeIndices {
    type Item = NodeIndex;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(NodeIndex)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl ExactSizeIterator for NodeIndices {}
impl FusedIterator for NodeIndices {}

/// Iterator created by [`Graph::edge_indices`].
#[derive(Clone)]
pub struct EdgeIndices(std::ops::Range<u32>);

impl Iterator for EdgeIndices {
    type Item = EdgeIndex;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(EdgeIndex)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl ExactSizeIterator for EdgeIndices {}
impl FusedIterator for EdgeIndices {}

/// Iterator created by [`Graph::neighbours`].
#[derive(Clone)]
pub struct Neighbours<'a>(std::slice::Iter<'a, NodeIndex>);

impl<'a> Iterator for Neighbours<'a> {
    type Item = NodeIndex;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().copied()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<'a> ExactSizeIterator for Neighbours<'a> {}
impl<'a> FusedIterator for Neighbours<'a> {}
