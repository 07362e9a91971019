//! Graph and coin-sequence generators for engine property tests.

use hookcc_test_support::fixtures::{clustered_pairs, path_pairs, random_pairs};
use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::Edge;

use super::types::{GraphFixture, GraphTopology};

/// Minimum node count for generated graphs.
const MIN_NODES: usize = 1;
/// Maximum node count for generated graphs.
const MAX_NODES: usize = 64;
/// Replay sequence length. A prime above [`MAX_NODES`] keeps every window
/// offset reachable, so a non-constant sequence always hooks some edge.
pub(super) const REPLAY_LEN: usize = 67;

pub(super) fn graph_fixture_strategy() -> impl Strategy<Value = GraphFixture> {
    (any::<GraphTopology>(), any::<u64>()).prop_map(|(topology, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_fixture(topology, &mut rng)
    })
}

pub(super) fn generate_fixture(topology: GraphTopology, rng: &mut SmallRng) -> GraphFixture {
    let node_count = rng.gen_range(MIN_NODES..=MAX_NODES);
    let fixture_seed = rng.r#gen::<u64>();
    let (node_count, pairs) = match topology {
        GraphTopology::Sparse => {
            let edges = rng.gen_range(node_count..=2 * node_count);
            (node_count, random_pairs(node_count, edges, fixture_seed))
        }
        GraphTopology::Dense => {
            let edges = rng.gen_range(4 * node_count..=6 * node_count);
            (node_count, random_pairs(node_count, edges, fixture_seed))
        }
        GraphTopology::Clustered => {
            let clusters = rng.gen_range(1..=8);
            let cluster_size = rng.gen_range(1..=8);
            let extra = rng.gen_range(0..=3);
            clustered_pairs(clusters, cluster_size, extra, fixture_seed)
        }
        GraphTopology::Path => (node_count, shuffled_path(node_count, rng)),
        GraphTopology::Star => {
            let hub = rng.gen_range(0..node_count);
            let pairs: Vec<(usize, usize)> = (0..node_count)
                .filter(|&leaf| leaf != hub)
                .map(|leaf| if rng.gen_bool(0.5) { (hub, leaf) } else { (leaf, hub) })
                .collect();
            (node_count, pairs)
        }
        GraphTopology::SelfLoopHeavy => {
            let mut pairs = random_pairs(node_count, node_count, fixture_seed);
            for pair in &mut pairs {
                if rng.gen_bool(0.33) {
                    pair.1 = pair.0;
                }
            }
            (node_count, pairs)
        }
    };

    GraphFixture {
        node_count,
        edges: pairs.into_iter().map(Edge::from).collect(),
        topology,
        coin_seed: rng.r#gen(),
    }
}

/// Generates a replay sequence of [`REPLAY_LEN`] bits holding both faces.
pub(super) fn replay_bits(seed: u64) -> Vec<bool> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut bits: Vec<bool> = (0..REPLAY_LEN).map(|_| rng.gen_bool(0.5)).collect();
    bits[0] = false;
    bits[1] = true;
    bits
}

fn shuffled_path(node_count: usize, rng: &mut SmallRng) -> Vec<(usize, usize)> {
    let mut order: Vec<usize> = (0..node_count).collect();
    for upper in (1..order.len()).rev() {
        order.swap(upper, rng.gen_range(0..=upper));
    }
    path_pairs(node_count)
        .into_iter()
        .map(|(left, right)| (order[left], order[right]))
        .collect()
}
