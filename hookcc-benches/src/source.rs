//! Seeded synthetic graphs for benchmarking.
//!
//! Every topology is generated from a fixed seed so repeated runs measure
//! the same input.

use std::fmt;

use hookcc_core::Graph;
use hookcc_test_support::fixtures::{clustered_pairs, path_pairs, random_pairs};

use crate::error::BenchSetupError;

/// Nodes per block for [`Topology::Clustered`].
const CLUSTER_SIZE: usize = 50;

/// Random chords added inside each cluster.
const CHORDS_PER_CLUSTER: usize = 25;

/// Shape of a synthetic benchmark graph.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Topology {
    /// Uniform random pairs with average degree two.
    Sparse,
    /// Disjoint blocks wired as shuffled paths plus chords.
    Clustered,
    /// A single in-order path, the deepest contraction case.
    Path,
}

impl Topology {
    /// All topologies in benchmark order.
    pub const ALL: [Self; 3] = [Self::Sparse, Self::Clustered, Self::Path];

    /// Returns the lowercase name used in benchmark ids.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sparse => "sparse",
            Self::Clustered => "clustered",
            Self::Path => "path",
        }
    }
}

impl fmt::Display for Topology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Configuration for a synthetic graph.
#[derive(Clone, Copy, Debug)]
pub struct SyntheticGraphConfig {
    /// Graph shape.
    pub topology: Topology,
    /// Approximate node count; clustered graphs round down to whole blocks.
    pub node_count: usize,
    /// Seed for the pair generator.
    pub seed: u64,
}

/// Builds the graph described by `config`.
///
/// # Errors
/// Returns [`BenchSetupError::ZeroValue`] when `node_count` is zero or too
/// small to hold one cluster, and [`BenchSetupError::Core`] if the pairs are
/// rejected by [`Graph::from_pairs`].
pub fn generate(config: &SyntheticGraphConfig) -> Result<Graph, BenchSetupError> {
    if config.node_count == 0 {
        return Err(BenchSetupError::ZeroValue {
            context: "node_count",
        });
    }

    let (node_count, pairs) = match config.topology {
        Topology::Sparse => (
            config.node_count,
            random_pairs(config.node_count, config.node_count, config.seed),
        ),
        Topology::Clustered => {
            let clusters = config.node_count.checked_div(CLUSTER_SIZE).unwrap_or(0);
            if clusters == 0 {
                return Err(BenchSetupError::ZeroValue {
                    context: "cluster count",
                });
            }
            clustered_pairs(clusters, CLUSTER_SIZE, CHORDS_PER_CLUSTER, config.seed)
        }
        Topology::Path => (config.node_count, path_pairs(config.node_count)),
    };

    Ok(Graph::from_pairs(node_count, pairs)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    use hookcc_core::reference_component_count;
    use rstest::rstest;

    #[rstest]
    #[case::sparse(Topology::Sparse, 200, 200)]
    #[case::clustered(Topology::Clustered, 230, 200)]
    #[case::path(Topology::Path, 200, 200)]
    fn generate_respects_node_count(
        #[case] topology: Topology,
        #[case] requested: usize,
        #[case] expected: usize,
    ) {
        let graph = generate(&SyntheticGraphConfig {
            topology,
            node_count: requested,
            seed: 5,
        })
        .expect("generation must succeed");
        assert_eq!(graph.node_count(), expected);
    }

    #[test]
    fn clustered_graph_has_one_component_per_block() {
        let graph = generate(&SyntheticGraphConfig {
            topology: Topology::Clustered,
            node_count: 500,
            seed: 9,
        })
        .expect("generation must succeed");
        assert_eq!(reference_component_count(&graph), 10);
    }

    #[rstest]
    #[case::zero_nodes(Topology::Sparse, 0)]
    #[case::too_small_for_a_cluster(Topology::Clustered, CLUSTER_SIZE - 1)]
    fn generate_rejects_degenerate_sizes(#[case] topology: Topology, #[case] node_count: usize) {
        let err = generate(&SyntheticGraphConfig {
            topology,
            node_count,
            seed: 1,
        })
        .expect_err("degenerate size must fail");
        assert!(matches!(err, BenchSetupError::ZeroValue { .. }));
    }
}
