//! Property runners shared by the proptest suites and the seeded rstest
//! cases.

use proptest::test_runner::{TestCaseError, TestCaseResult};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::{
    Components, HookStrategy, HookingContractionEngine, LabelStore, RandomCoins, ReplayCoins,
    deterministic_contraction,
    engine::level::compact,
    reference_labels,
    test_utils::graph_from_fixture,
};

use super::strategies::replay_bits;
use super::types::GraphFixture;

/// Seeds used when checking that randomness only affects iteration counts.
const INVARIANCE_SEEDS: usize = 4;

/// Partition reported by the union-find reference, in first-member order.
fn reference_partition(fixture: &GraphFixture) -> Vec<Vec<usize>> {
    let graph = graph_from_fixture(
        fixture.node_count,
        fixture.edges.iter().map(|edge| (edge.source(), edge.target())).collect(),
    );
    Components::new(reference_labels(&graph), 0, HookStrategy::Randomized).partition()
}

fn run_randomized(fixture: &GraphFixture, seed: u64) -> Result<(LabelStore, usize), TestCaseError> {
    let mut labels = LabelStore::new(fixture.node_count);
    let mut coins = RandomCoins::with_seed(seed);
    let mut levels = 0;
    HookingContractionEngine::new()
        .run(fixture.node_count, &fixture.edges, &mut labels, &mut coins, &mut levels)
        .map_err(|err| fail(fixture, format!("randomized run failed: {err}")))?;
    Ok((labels, levels))
}

fn fail(fixture: &GraphFixture, message: String) -> TestCaseError {
    TestCaseError::fail(format!(
        "{message} (topology={:?}, nodes={}, edges={})",
        fixture.topology,
        fixture.node_count,
        fixture.edges.len(),
    ))
}

/// The randomized engine groups nodes exactly as union-find does, and every
/// final label is a representative that points at itself.
pub(super) fn run_oracle_equivalence_property(fixture: &GraphFixture) -> TestCaseResult {
    let (labels, _) = run_randomized(fixture, fixture.coin_seed)?;
    for (node, &label) in labels.as_slice().iter().enumerate() {
        if labels.get(label) != label {
            return Err(fail(
                fixture,
                format!("node {node} ends on {label}, which is not a representative"),
            ));
        }
    }

    let actual = Components::new(labels.into_vec(), 0, HookStrategy::Randomized).partition();
    let expected = reference_partition(fixture);
    if actual != expected {
        return Err(fail(
            fixture,
            format!("partition mismatch: engine={actual:?}, reference={expected:?}"),
        ));
    }
    Ok(())
}

/// Different seeds change how long a run takes but never its partition.
pub(super) fn run_seed_invariance_property(fixture: &GraphFixture) -> TestCaseResult {
    let mut seeds = SmallRng::seed_from_u64(fixture.coin_seed);
    let mut baseline: Option<Vec<Vec<usize>>> = None;
    for _ in 0..INVARIANCE_SEEDS {
        let (labels, _) = run_randomized(fixture, seeds.r#gen())?;
        let partition = Components::new(labels.into_vec(), 0, HookStrategy::Randomized).partition();
        match &baseline {
            None => baseline = Some(partition),
            Some(expected) if *expected != partition => {
                return Err(fail(
                    fixture,
                    format!("seed changed partition: {partition:?} vs {expected:?}"),
                ));
            }
            Some(_) => {}
        }
    }
    Ok(())
}

/// Replaying the same coin sequence reproduces labels and level counts.
pub(super) fn run_replay_determinism_property(fixture: &GraphFixture) -> TestCaseResult {
    let bits = replay_bits(fixture.coin_seed);
    let mut outcomes = Vec::with_capacity(2);
    for _ in 0..2 {
        let mut coins = ReplayCoins::new(bits.clone())
            .map_err(|err| fail(fixture, format!("replay source rejected: {err}")))?;
        let mut labels = LabelStore::new(fixture.node_count);
        let mut levels = 0;
        HookingContractionEngine::new()
            .run(fixture.node_count, &fixture.edges, &mut labels, &mut coins, &mut levels)
            .map_err(|err| fail(fixture, format!("replayed run failed: {err}")))?;
        outcomes.push((labels, levels));
    }

    if outcomes[0] != outcomes[1] {
        return Err(fail(
            fixture,
            format!(
                "replayed runs diverged: levels {} vs {}",
                outcomes[0].1, outcomes[1].1
            ),
        ));
    }
    Ok(())
}

/// The deterministic strategy also matches the reference partition.
pub(super) fn run_deterministic_equivalence_property(fixture: &GraphFixture) -> TestCaseResult {
    let mut labels = LabelStore::new(fixture.node_count);
    let mut levels = 0;
    deterministic_contraction(fixture.node_count, &fixture.edges, &mut labels, &mut levels, None)
        .map_err(|err| fail(fixture, format!("deterministic run failed: {err}")))?;

    let actual = Components::new(labels.into_vec(), levels, HookStrategy::Deterministic).partition();
    let expected = reference_partition(fixture);
    if actual != expected {
        return Err(fail(
            fixture,
            format!("deterministic partition mismatch: {actual:?} vs {expected:?}"),
        ));
    }
    Ok(())
}

/// Compaction keeps exactly the edges whose labels differ, relabelled, in
/// their original relative order.
pub(super) fn run_stable_compaction_property(fixture: &GraphFixture) -> TestCaseResult {
    if fixture.node_count == 0 {
        return Ok(());
    }
    let mut rng = SmallRng::seed_from_u64(fixture.coin_seed);
    let mut labels = LabelStore::new(fixture.node_count);
    for node in 0..fixture.node_count {
        labels.set(node, rng.gen_range(0..fixture.node_count));
    }

    let expected: Vec<_> = fixture
        .edges
        .iter()
        .map(|edge| (labels.get(edge.source()), labels.get(edge.target())))
        .filter(|(left, right)| left != right)
        .collect();
    let actual: Vec<_> = compact(&fixture.edges, &labels)
        .into_iter()
        .map(|edge| (edge.source(), edge.target()))
        .collect();
    if actual != expected {
        return Err(fail(
            fixture,
            format!("compaction reordered or lost edges: {actual:?} vs {expected:?}"),
        ));
    }
    Ok(())
}
