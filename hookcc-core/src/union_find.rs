//! Sequential union-find used to cross-check the contraction engines.
//!
//! Both entry points work straight from a [`Graph`] and never consult a coin
//! source, so they give an independent answer for the same edge set.

use crate::{Result, counter::count_components, error::HookError, graph::Graph};

#[derive(Clone, Debug)]
pub(crate) struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<u8>,
}

impl DisjointSet {
    pub(crate) fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
        }
    }

    pub(crate) fn find(&mut self, mut node: usize) -> usize {
        let mut root = node;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        while self.parent[node] != node {
            let parent = self.parent[node];
            self.parent[node] = root;
            node = parent;
        }

        root
    }

    pub(crate) fn union(&mut self, left: usize, right: usize) -> bool {
        let mut left = self.find(left);
        let mut right = self.find(right);
        if left == right {
            return false;
        }
        let left_rank = self.rank[left];
        let right_rank = self.rank[right];
        if left_rank < right_rank {
            std::mem::swap(&mut left, &mut right);
        }
        self.parent[right] = left;
        if left_rank == right_rank {
            self.rank[left] = left_rank.saturating_add(1);
        }
        true
    }
}

/// Labels every node with its union-find root.
///
/// Two nodes share a label exactly when they are connected in `graph`. The
/// chosen roots need not match the representatives picked by an engine run.
///
/// # Examples
/// ```
/// use hookcc_core::{Graph, reference_labels};
///
/// let graph = Graph::from_pairs(4, [(0, 1), (2, 3)])?;
/// let labels = reference_labels(&graph);
/// assert_eq!(labels[0], labels[1]);
/// assert_ne!(labels[1], labels[2]);
/// # Ok::<(), hookcc_core::HookError>(())
/// ```
#[must_use]
pub fn reference_labels(graph: &Graph) -> Vec<usize> {
    let mut set = DisjointSet::new(graph.node_count());
    for edge in graph.edges() {
        set.union(edge.source(), edge.target());
    }
    (0..graph.node_count()).map(|node| set.find(node)).collect()
}

/// Counts connected components with union-find.
///
/// # Examples
/// ```
/// use hookcc_core::{Graph, reference_component_count};
///
/// let graph = Graph::from_pairs(5, [(0, 1), (2, 3)])?;
/// assert_eq!(reference_component_count(&graph), 3);
/// # Ok::<(), hookcc_core::HookError>(())
/// ```
#[must_use]
pub fn reference_component_count(graph: &Graph) -> usize {
    let mut set = DisjointSet::new(graph.node_count());
    let merges = graph
        .edges()
        .iter()
        .filter(|edge| set.union(edge.source(), edge.target()))
        .count();
    graph.node_count() - merges
}

/// Checks an engine's labels against the union-find reference.
///
/// # Errors
/// Returns [`HookError::VerificationFailed`] when the component counts
/// disagree.
pub fn verify_components(graph: &Graph, labels: &[usize]) -> Result<()> {
    let expected = reference_component_count(graph);
    let actual = count_components(labels);
    if expected == actual {
        Ok(())
    } else {
        Err(HookError::VerificationFailed { expected, actual })
    }
}
