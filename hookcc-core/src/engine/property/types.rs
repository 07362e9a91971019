//! Fixture types for engine property tests.

use test_strategy::Arbitrary;

use crate::Edge;

/// Shape of a generated graph.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Arbitrary)]
pub(super) enum GraphTopology {
    /// Uniformly random endpoints with roughly `n` to `2n` edges.
    #[weight(3)]
    Sparse,
    /// Uniformly random endpoints with many parallel edges.
    #[weight(1)]
    Dense,
    /// Disjoint blocks with interleaved node ids and no cross-block edges.
    #[weight(3)]
    Clustered,
    /// A single path through a shuffled node order.
    #[weight(2)]
    Path,
    /// One hub joined to every other node.
    #[weight(1)]
    Star,
    /// Random edges where about a third are self-loops.
    #[weight(1)]
    SelfLoopHeavy,
}

/// Generated graph plus the topology that produced it, for failure
/// diagnosis.
#[derive(Clone, Debug)]
pub(super) struct GraphFixture {
    /// Size of the node universe.
    pub node_count: usize,
    /// Edges in generation order.
    pub edges: Vec<Edge>,
    /// Topology used during generation.
    pub topology: GraphTopology,
    /// Seed for coin sources used by the property.
    pub coin_seed: u64,
}
