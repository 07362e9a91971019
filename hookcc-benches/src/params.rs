//! Benchmark parameter types.

use std::fmt;

use hookcc_core::HookStrategy;

use crate::source::Topology;

/// Parameters for a contraction benchmark run.
#[derive(Clone, Debug)]
pub struct ContractionBenchParams {
    /// Shape of the synthetic graph.
    pub topology: Topology,
    /// Number of nodes in the graph.
    pub node_count: usize,
    /// Hooking strategy under test.
    pub strategy: HookStrategy,
}

impl fmt::Display for ContractionBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/n={}/{}",
            self.topology, self.node_count, self.strategy
        )
    }
}
