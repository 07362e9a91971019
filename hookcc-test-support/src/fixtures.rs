//! Seeded graph fixtures shared by tests and benchmarks.
//!
//! Fixtures are plain `(source, target)` pairs so any crate can wrap them in
//! its own graph type.

use rand::{Rng, SeedableRng, rngs::SmallRng};

/// Generates `edge_count` uniformly random pairs over `node_count` nodes.
///
/// Self-loops and parallel edges may appear.
///
/// # Panics
/// Panics when `edge_count > 0` and `node_count == 0`.
///
/// # Examples
/// ```
/// use hookcc_test_support::fixtures::random_pairs;
///
/// let pairs = random_pairs(10, 25, 7);
/// assert_eq!(pairs.len(), 25);
/// assert!(pairs.iter().all(|&(u, v)| u < 10 && v < 10));
/// assert_eq!(pairs, random_pairs(10, 25, 7));
/// ```
#[must_use]
pub fn random_pairs(node_count: usize, edge_count: usize, seed: u64) -> Vec<(usize, usize)> {
    let mut rng = SmallRng::seed_from_u64(seed);
    (0..edge_count)
        .map(|_| (rng.gen_range(0..node_count), rng.gen_range(0..node_count)))
        .collect()
}

/// Generates `clusters` disjoint blocks of `cluster_size` nodes, each wired
/// as a shuffled spanning path plus `extra_per_cluster` random chords.
///
/// Node ids are interleaved across blocks so components do not occupy
/// contiguous id ranges. The graph has exactly `clusters` components when
/// `cluster_size > 0`.
///
/// # Examples
/// ```
/// use hookcc_test_support::fixtures::clustered_pairs;
///
/// let (node_count, pairs) = clustered_pairs(3, 4, 2, 11);
/// assert_eq!(node_count, 12);
/// assert_eq!(pairs.len(), 3 * (3 + 2));
/// // Node `i` lives in block `i % 3`.
/// assert!(pairs.iter().all(|&(u, v)| u % 3 == v % 3));
/// ```
#[must_use]
pub fn clustered_pairs(
    clusters: usize,
    cluster_size: usize,
    extra_per_cluster: usize,
    seed: u64,
) -> (usize, Vec<(usize, usize)>) {
    let mut rng = SmallRng::seed_from_u64(seed);
    let node_count = clusters * cluster_size;
    let mut pairs = Vec::new();
    for block in 0..clusters {
        let mut members: Vec<usize> = (0..cluster_size)
            .map(|slot| slot * clusters + block)
            .collect();
        shuffle(&mut members, &mut rng);
        pairs.extend(members.windows(2).map(|window| (window[0], window[1])));
        if cluster_size > 1 {
            for _ in 0..extra_per_cluster {
                let left = members[rng.gen_range(0..cluster_size)];
                let right = members[rng.gen_range(0..cluster_size)];
                pairs.push((left, right));
            }
        }
    }
    shuffle(&mut pairs, &mut rng);
    (node_count, pairs)
}

/// Generates a path `0 - 1 - ... - (node_count - 1)` in order.
///
/// # Examples
/// ```
/// use hookcc_test_support::fixtures::path_pairs;
///
/// assert_eq!(path_pairs(4), vec![(0, 1), (1, 2), (2, 3)]);
/// assert!(path_pairs(1).is_empty());
/// ```
#[must_use]
pub fn path_pairs(node_count: usize) -> Vec<(usize, usize)> {
    (1..node_count).map(|node| (node - 1, node)).collect()
}

fn shuffle<T>(items: &mut [T], rng: &mut SmallRng) {
    for upper in (1..items.len()).rev() {
        let pick = rng.gen_range(0..=upper);
        items.swap(upper, pick);
    }
}
