//! Connected-components runtime.
//!
//! Provides the [`Connectivity`] entry point, which wires a [`Graph`] to the
//! configured hooking strategy and packages the settled labels.

use std::num::NonZeroUsize;

use tracing::{info, instrument};

use crate::{
    Result,
    builder::HookStrategy,
    coin::{CoinTossSource, RandomCoins},
    deterministic::deterministic_contraction,
    engine::HookingContractionEngine,
    graph::Graph,
    labels::LabelStore,
    result::Components,
};

/// Entry point for computing connected components.
///
/// # Examples
/// ```
/// use hookcc_core::{ConnectivityBuilder, Graph};
///
/// let graph = Graph::from_pairs(5, [(0, 1), (1, 2), (3, 4)])?;
/// let connectivity = ConnectivityBuilder::new()
///     .with_seed(Some(7))
///     .build()?;
/// let components = connectivity.run(&graph)?;
/// assert_eq!(components.component_count(), 2);
/// assert_eq!(components.partition(), vec![vec![0, 1, 2], vec![3, 4]]);
/// # Ok::<(), hookcc_core::HookError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Connectivity {
    strategy: HookStrategy,
    seed: Option<u64>,
    max_levels: Option<NonZeroUsize>,
}

impl Connectivity {
    pub(crate) fn new(
        strategy: HookStrategy,
        seed: Option<u64>,
        max_levels: Option<NonZeroUsize>,
    ) -> Self {
        Self {
            strategy,
            seed,
            max_levels,
        }
    }

    /// Returns the hooking strategy used by [`Self::run`].
    #[rustfmt::skip]
    #[must_use]
    pub fn strategy(&self) -> HookStrategy { self.strategy }

    /// Returns the coin seed, or `None` when runs draw from entropy.
    #[rustfmt::skip]
    #[must_use]
    pub fn seed(&self) -> Option<u64> { self.seed }

    /// Returns the contraction level limit.
    #[rustfmt::skip]
    #[must_use]
    pub fn max_levels(&self) -> Option<NonZeroUsize> { self.max_levels }

    /// Computes the connected components of `graph`.
    ///
    /// Randomized runs draw coins from a [`RandomCoins`] seeded with the
    /// configured seed, or from entropy when none was given.
    ///
    /// # Errors
    /// Returns [`HookError::LabelAllocation`](crate::HookError::LabelAllocation)
    /// when the node universe is too large to label, and
    /// [`HookError::LevelLimitExceeded`](crate::HookError::LevelLimitExceeded)
    /// when a level limit is configured and the run does not finish within it.
    pub fn run(&self, graph: &Graph) -> Result<Components> {
        let mut coins = match self.seed {
            Some(seed) => RandomCoins::with_seed(seed),
            None => RandomCoins::from_entropy(),
        };
        self.run_with_coins(graph, &mut coins)
    }

    /// Computes the connected components of `graph` with an explicit coin
    /// source.
    ///
    /// The deterministic strategy never draws from `coins`.
    ///
    /// # Errors
    /// Returns [`HookError::LabelAllocation`](crate::HookError::LabelAllocation)
    /// when the node universe is too large to label,
    /// [`HookError::ShortCoinBatch`](crate::HookError::ShortCoinBatch)
    /// when `coins` under-delivers and
    /// [`HookError::LevelLimitExceeded`](crate::HookError::LevelLimitExceeded)
    /// when the level limit is reached.
    ///
    /// # Examples
    /// ```
    /// use hookcc_core::{ConnectivityBuilder, Graph, ReplayCoins};
    ///
    /// let graph = Graph::from_pairs(4, [(0, 1), (1, 2), (2, 3)])?;
    /// let mut coins = ReplayCoins::from_digits(&[0, 1, 0, 1, 1])?;
    /// let components = ConnectivityBuilder::new().build()?.run_with_coins(&graph, &mut coins)?;
    /// assert_eq!(components.labels(), &[1, 1, 1, 1]);
    /// assert_eq!(components.levels(), 5);
    /// # Ok::<(), hookcc_core::HookError>(())
    /// ```
    #[instrument(
        name = "core.run",
        err,
        skip(self, graph, coins),
        fields(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            strategy = %self.strategy,
        ),
    )]
    pub fn run_with_coins<C: CoinTossSource + ?Sized>(
        &self,
        graph: &Graph,
        coins: &mut C,
    ) -> Result<Components> {
        let node_count = graph.node_count();
        let mut labels = LabelStore::try_new(node_count)?;
        let mut levels = 0;

        match self.strategy {
            HookStrategy::Randomized => HookingContractionEngine::new()
                .with_max_levels(self.max_levels)
                .run(node_count, graph.edges(), &mut labels, coins, &mut levels)?,
            HookStrategy::Deterministic => deterministic_contraction(
                node_count,
                graph.edges(),
                &mut labels,
                &mut levels,
                self.max_levels,
            )?,
        }

        let components = Components::new(labels.into_vec(), levels, self.strategy);
        info!(
            components = components.component_count(),
            levels, "connectivity run complete"
        );
        Ok(components)
    }
}
