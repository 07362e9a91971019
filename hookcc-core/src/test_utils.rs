//! Shared test utilities for `hookcc-core`.

use hookcc_test_support::ci::property_test_profile::ProptestRunProfile;
use proptest::test_runner::Config as ProptestConfig;

use crate::graph::Graph;

/// Builds a proptest configuration from the shared CI profile.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let profile = ProptestRunProfile::load(default_cases, false);
    ProptestConfig {
        cases: profile.cases(),
        fork: profile.fork(),
        ..ProptestConfig::default()
    }
}

/// Wraps fixture pairs in a [`Graph`].
#[must_use]
pub(crate) fn graph_from_fixture(node_count: usize, pairs: Vec<(usize, usize)>) -> Graph {
    Graph::from_pairs(node_count, pairs).expect("fixture endpoints lie inside the universe")
}
