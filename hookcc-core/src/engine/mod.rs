//! Randomized hooking and contraction.
//!
//! Each level tosses one coin per node id, hooks tails endpoints onto heads
//! neighbours, and contracts the edge list by dropping edges whose endpoints
//! now share a label. Contraction repeats until no edges remain. The levels
//! then unwind in reverse order, each one resolving its own hooks against the
//! representatives settled below it.
//!
//! Levels are kept on an explicit stack instead of the call stack. Every
//! pending entry holds the level's pre-contraction edge list, which the
//! resolve pass needs after deeper levels finish.

pub(crate) mod level;

use std::num::NonZeroUsize;

use tracing::{debug, instrument};

use crate::{
    Result,
    coin::CoinTossSource,
    error::HookError,
    graph::{Edge, validate_edges},
    labels::LabelStore,
};

use self::level::{compact, hook, resolve};

/// Runs the randomized hooking-and-contraction algorithm over a shared
/// [`LabelStore`].
///
/// # Examples
/// ```
/// use hookcc_core::{Edge, HookingContractionEngine, LabelStore, ReplayCoins, count_components};
///
/// let edges = [Edge::new(0, 1), Edge::new(2, 3)];
/// let mut labels = LabelStore::new(5);
/// let mut coins = ReplayCoins::from_digits(&[0, 1, 1, 0, 1])?;
/// let mut levels = 0;
/// HookingContractionEngine::new().run(5, &edges, &mut labels, &mut coins, &mut levels)?;
/// assert_eq!(count_components(labels.as_slice()), 3);
/// assert_eq!(levels, 2);
/// # Ok::<(), hookcc_core::HookError>(())
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HookingContractionEngine {
    max_levels: Option<NonZeroUsize>,
}

impl HookingContractionEngine {
    /// Creates an engine with no level limit.
    #[must_use]
    pub const fn new() -> Self {
        Self { max_levels: None }
    }

    /// Aborts runs that still have edges after `limit` contraction levels.
    #[must_use]
    pub const fn with_max_levels(mut self, limit: Option<NonZeroUsize>) -> Self {
        self.max_levels = limit;
        self
    }

    /// Returns the configured contraction level limit.
    #[rustfmt::skip]
    #[must_use]
    pub const fn max_levels(&self) -> Option<NonZeroUsize> { self.max_levels }

    /// Contracts `edges` until none remain, leaving every node in `labels`
    /// pointing at its component representative.
    ///
    /// `levels` is incremented once per level, including the final level
    /// that finds no edges left.
    ///
    /// # Errors
    /// Returns [`HookError::LabelCountMismatch`] when `labels` does not cover
    /// `node_count` nodes, [`HookError::NodeOutOfRange`] when an edge names a
    /// node outside the universe, [`HookError::ShortCoinBatch`] when `coins`
    /// under-delivers, and [`HookError::LevelLimitExceeded`] when the level
    /// limit is hit. Labels may be partially updated when an error is
    /// returned mid-run.
    #[instrument(
        name = "core.engine",
        err,
        skip(self, edges, labels, coins, levels),
        fields(edges = edges.len()),
    )]
    pub fn run<C: CoinTossSource + ?Sized>(
        &self,
        node_count: usize,
        edges: &[Edge],
        labels: &mut LabelStore,
        coins: &mut C,
        levels: &mut usize,
    ) -> Result<()> {
        if labels.len() != node_count {
            return Err(HookError::LabelCountMismatch {
                labels: labels.len(),
                node_count,
            });
        }
        validate_edges(node_count, edges)?;

        let mut pending: Vec<Vec<Edge>> = Vec::new();
        let mut current = edges.to_vec();
        loop {
            *levels += 1;
            if node_count == 0 || current.is_empty() {
                debug!(level = *levels, "no edges left");
                break;
            }
            self.check_level_limit(pending.len(), current.len())?;

            let coin_batch = coins.next_batch(node_count);
            if coin_batch.len() < node_count {
                return Err(HookError::ShortCoinBatch {
                    expected: node_count,
                    got: coin_batch.len(),
                });
            }
            hook(&current, &coin_batch, labels);
            let contracted = compact(&current, labels);

            debug!(
                level = *levels,
                edges = current.len(),
                surviving = contracted.len(),
                "level contracted"
            );
            if contracted.len() == current.len() {
                debug!(level = *levels, "level removed no edges");
            }
            record_level(current.len(), contracted.len());

            pending.push(std::mem::replace(&mut current, contracted));
        }

        while let Some(level_edges) = pending.pop() {
            resolve(&level_edges, labels);
        }
        Ok(())
    }

    fn check_level_limit(&self, completed: usize, remaining_edges: usize) -> Result<()> {
        match self.max_levels {
            Some(limit) if completed >= limit.get() => Err(HookError::LevelLimitExceeded {
                limit: limit.get(),
                remaining_edges,
            }),
            _ => Ok(()),
        }
    }
}

#[cfg(feature = "metrics")]
fn record_level(edges_in: usize, edges_out: usize) {
    metrics::counter!("hookcc_levels_total").increment(1);
    metrics::counter!("hookcc_edges_contracted_total")
        .increment(edges_in.saturating_sub(edges_out) as u64);
}

#[cfg(not(feature = "metrics"))]
fn record_level(_edges_in: usize, _edges_out: usize) {}

#[cfg(test)]
mod property;
