//! Undirected graph representation consumed by the connectivity engines.
//!
//! Node ids form the fixed universe `0..node_count`; edges are ordered
//! because both hooking and compaction are order sensitive.

use crate::{Result, error::HookError};

/// An undirected edge between two node ids.
///
/// # Examples
/// ```
/// use hookcc_core::Edge;
///
/// let edge = Edge::new(3, 1);
/// assert_eq!(edge.source(), 3);
/// assert_eq!(edge.target(), 1);
/// assert_eq!(edge.normalized(), Edge::new(1, 3));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Edge {
    source: usize,
    target: usize,
}

impl Edge {
    /// Creates an edge between `source` and `target`.
    #[rustfmt::skip]
    #[must_use]
    pub const fn new(source: usize, target: usize) -> Self { Self { source, target } }

    /// Returns the first endpoint as supplied.
    #[rustfmt::skip]
    #[must_use]
    pub const fn source(self) -> usize { self.source }

    /// Returns the second endpoint as supplied.
    #[rustfmt::skip]
    #[must_use]
    pub const fn target(self) -> usize { self.target }

    /// Returns `true` when both endpoints are the same node.
    #[must_use]
    pub const fn is_self_loop(self) -> bool {
        self.source == self.target
    }

    /// Returns the edge with its endpoints ordered `(min, max)`.
    #[must_use]
    pub const fn normalized(self) -> Self {
        if self.source <= self.target {
            self
        } else {
            Self::new(self.target, self.source)
        }
    }
}

impl From<(usize, usize)> for Edge {
    fn from((source, target): (usize, usize)) -> Self {
        Self::new(source, target)
    }
}

/// A node universe plus an ordered edge list.
///
/// Construction validates that every endpoint lies inside `0..node_count`, so
/// the engines can index label and coin arrays without further checks.
/// Self-loops are accepted; they never survive the first contraction.
///
/// # Examples
/// ```
/// use hookcc_core::Graph;
///
/// let graph = Graph::from_pairs(4, [(0, 1), (1, 2), (2, 3)])?;
/// assert_eq!(graph.node_count(), 4);
/// assert_eq!(graph.edge_count(), 3);
/// # Ok::<(), hookcc_core::HookError>(())
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Graph {
    node_count: usize,
    edges: Vec<Edge>,
}

impl Graph {
    /// Builds a graph from an explicit edge list.
    ///
    /// # Errors
    /// Returns [`HookError::NodeOutOfRange`] when an endpoint is not below
    /// `node_count`.
    pub fn new(node_count: usize, edges: Vec<Edge>) -> Result<Self> {
        validate_edges(node_count, &edges)?;
        Ok(Self { node_count, edges })
    }

    /// Builds a graph from `(source, target)` pairs.
    ///
    /// # Errors
    /// Returns [`HookError::NodeOutOfRange`] when an endpoint is not below
    /// `node_count`.
    pub fn from_pairs<I>(node_count: usize, pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        Self::new(node_count, pairs.into_iter().map(Edge::from).collect())
    }

    /// Returns the size of the node universe.
    #[rustfmt::skip]
    #[must_use]
    pub const fn node_count(&self) -> usize { self.node_count }

    /// Returns the edges in input order.
    #[rustfmt::skip]
    #[must_use]
    pub fn edges(&self) -> &[Edge] { &self.edges }

    /// Returns the number of edges.
    #[rustfmt::skip]
    #[must_use]
    pub fn edge_count(&self) -> usize { self.edges.len() }

    /// Returns `true` when the graph has no edges.
    #[must_use]
    pub fn has_no_edges(&self) -> bool {
        self.edges.is_empty()
    }
}

/// Checks that every endpoint of `edges` lies inside `0..node_count`.
pub(crate) fn validate_edges(node_count: usize, edges: &[Edge]) -> Result<()> {
    edges
        .iter()
        .flat_map(|edge| [edge.source, edge.target])
        .find(|&node| node >= node_count)
        .map_or(Ok(()), |node| {
            Err(HookError::NodeOutOfRange { node, node_count })
        })
}
