use hookcc_core::{Components, Graph, HookStrategy, ReplayCoins, Result};

pub type TestResult = std::result::Result<(), Box<dyn std::error::Error>>;

/// Runs `strategy` over `graph` with a seeded coin source.
pub fn run_seeded(graph: &Graph, strategy: HookStrategy, seed: u64) -> Result<Components> {
    hookcc_core::ConnectivityBuilder::new()
        .with_strategy(strategy)
        .with_seed(Some(seed))
        .build()?
        .run(graph)
}

/// Runs the randomized strategy over `graph`, replaying `digits`.
pub fn run_replayed(graph: &Graph, digits: &[u8]) -> Result<Components> {
    let mut coins = ReplayCoins::from_digits(digits)?;
    hookcc_core::ConnectivityBuilder::new()
        .build()?
        .run_with_coins(graph, &mut coins)
}
