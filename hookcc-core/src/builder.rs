//! Builder utilities for configuring connectivity runs.
//!
//! Exposes the hooking strategy selection surface and the validation applied
//! before constructing [`Connectivity`] instances.

use std::{fmt, num::NonZeroUsize};

use crate::{Result, connectivity::Connectivity, error::HookError};

/// Selects how [`Connectivity`] hooks nodes at each level.
///
/// # Examples
/// ```
/// use hookcc_core::HookStrategy;
///
/// assert_eq!(HookStrategy::default(), HookStrategy::Randomized);
/// assert_eq!(HookStrategy::Deterministic.to_string(), "deterministic");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum HookStrategy {
    /// Coin-toss hooking of tails vertices onto heads neighbours.
    #[default]
    Randomized,
    /// Majority-direction hooking followed by pointer jumping.
    Deterministic,
}

impl HookStrategy {
    /// Returns the lower-case name used in logs and summaries.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Randomized => "randomized",
            Self::Deterministic => "deterministic",
        }
    }
}

impl fmt::Display for HookStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Configures and constructs [`Connectivity`] instances.
///
/// # Examples
/// ```
/// use hookcc_core::{ConnectivityBuilder, HookStrategy};
///
/// let connectivity = ConnectivityBuilder::new()
///     .with_strategy(HookStrategy::Deterministic)
///     .with_max_levels(Some(64))
///     .build()
///     .expect("builder configuration is valid");
/// assert_eq!(connectivity.strategy(), HookStrategy::Deterministic);
/// assert_eq!(connectivity.max_levels().map(|limit| limit.get()), Some(64));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConnectivityBuilder {
    strategy: HookStrategy,
    seed: Option<u64>,
    max_levels: Option<usize>,
}

impl ConnectivityBuilder {
    /// Creates a builder with the randomized strategy, an entropy seed and no
    /// level limit.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the hooking strategy.
    #[must_use]
    pub fn with_strategy(mut self, strategy: HookStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Seeds the coin source so randomized runs are reproducible. `None`
    /// draws the seed from operating-system entropy.
    #[must_use]
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Caps the number of contraction levels. `None` removes the cap.
    #[must_use]
    pub fn with_max_levels(mut self, max_levels: Option<usize>) -> Self {
        self.max_levels = max_levels;
        self
    }

    /// Returns the configured strategy.
    #[rustfmt::skip]
    #[must_use]
    pub fn strategy(&self) -> HookStrategy { self.strategy }

    /// Returns the configured seed.
    #[rustfmt::skip]
    #[must_use]
    pub fn seed(&self) -> Option<u64> { self.seed }

    /// Validates the configuration and constructs a [`Connectivity`] runner.
    ///
    /// # Errors
    /// Returns [`HookError::InvalidMaxLevels`] when the level limit is zero.
    ///
    /// # Examples
    /// ```
    /// use hookcc_core::{ConnectivityBuilder, HookError};
    ///
    /// let err = ConnectivityBuilder::new()
    ///     .with_max_levels(Some(0))
    ///     .build()
    ///     .expect_err("zero levels is invalid");
    /// assert_eq!(err, HookError::InvalidMaxLevels { got: 0 });
    /// ```
    pub fn build(self) -> Result<Connectivity> {
        let max_levels = self
            .max_levels
            .map(|limit| NonZeroUsize::new(limit).ok_or(HookError::InvalidMaxLevels { got: limit }))
            .transpose()?;

        Ok(Connectivity::new(self.strategy, self.seed, max_levels))
    }
}
