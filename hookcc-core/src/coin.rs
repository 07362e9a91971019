//! Per-level coin toss sources.
//!
//! The randomized engine draws one bit per node id at every level. `true`
//! is heads (bit 1) and `false` is tails (bit 0); tails vertices hook onto an
//! adjacent heads vertex. Sources are owned by the caller and passed to the
//! engine explicitly, so a run never touches process-wide state.

use rand::{Rng, SeedableRng, rngs::SmallRng};

use crate::{Result, error::HookError};

/// Produces one batch of coin tosses per contraction level.
///
/// # Examples
/// ```
/// use hookcc_core::{CoinTossSource, ReplayCoins};
///
/// let mut coins = ReplayCoins::new(vec![true, false])?;
/// assert_eq!(coins.next_batch(3), vec![true, false, true]);
/// # Ok::<(), hookcc_core::HookError>(())
/// ```
pub trait CoinTossSource {
    /// Returns `len` coin tosses, one per node id.
    fn next_batch(&mut self, len: usize) -> Vec<bool>;
}

impl<C: CoinTossSource + ?Sized> CoinTossSource for &mut C {
    fn next_batch(&mut self, len: usize) -> Vec<bool> {
        (**self).next_batch(len)
    }
}

/// Fair, independent coin tosses backed by a [`SmallRng`].
///
/// # Examples
/// ```
/// use hookcc_core::{CoinTossSource, RandomCoins};
///
/// let mut left = RandomCoins::with_seed(7);
/// let mut right = RandomCoins::with_seed(7);
/// assert_eq!(left.next_batch(16), right.next_batch(16));
/// ```
#[derive(Clone, Debug)]
pub struct RandomCoins {
    rng: SmallRng,
}

impl RandomCoins {
    /// Seeds the generator from operating-system entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            rng: SmallRng::from_entropy(),
        }
    }

    /// Seeds the generator deterministically.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl CoinTossSource for RandomCoins {
    fn next_batch(&mut self, len: usize) -> Vec<bool> {
        (0..len).map(|_| self.rng.gen_bool(0.5)).collect()
    }
}

/// Replays a fixed bit sequence cyclically.
///
/// The cursor carries over between batches, so consecutive levels see
/// consecutive windows of the sequence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReplayCoins {
    bits: Vec<bool>,
    cursor: usize,
}

impl ReplayCoins {
    /// Creates a replay source over `bits`.
    ///
    /// # Errors
    /// Returns [`HookError::EmptyReplaySequence`] when `bits` is empty.
    pub fn new(bits: Vec<bool>) -> Result<Self> {
        if bits.is_empty() {
            return Err(HookError::EmptyReplaySequence);
        }
        Ok(Self { bits, cursor: 0 })
    }

    /// Creates a replay source from `0`/`1` digits, treating any non-zero
    /// value as heads.
    ///
    /// # Errors
    /// Returns [`HookError::EmptyReplaySequence`] when `digits` is empty.
    ///
    /// # Examples
    /// ```
    /// use hookcc_core::{CoinTossSource, ReplayCoins};
    ///
    /// let mut coins = ReplayCoins::from_digits(&[0, 1, 1])?;
    /// assert_eq!(coins.next_batch(2), vec![false, true]);
    /// assert_eq!(coins.next_batch(2), vec![true, false]);
    /// # Ok::<(), hookcc_core::HookError>(())
    /// ```
    pub fn from_digits(digits: &[u8]) -> Result<Self> {
        Self::new(digits.iter().map(|&digit| digit != 0).collect())
    }

    /// Returns the position of the next bit to be replayed.
    #[rustfmt::skip]
    #[must_use]
    pub const fn cursor(&self) -> usize { self.cursor }
}

impl CoinTossSource for ReplayCoins {
    fn next_batch(&mut self, len: usize) -> Vec<bool> {
        let mut batch = Vec::with_capacity(len);
        for _ in 0..len {
            batch.push(self.bits[self.cursor]);
            self.cursor = (self.cursor + 1) % self.bits.len();
        }
        batch
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[test]
    fn replay_rejects_empty_sequence() {
        assert_eq!(ReplayCoins::new(Vec::new()), Err(HookError::EmptyReplaySequence));
    }

    #[rstest]
    #[case::shorter_than_buffer(2, vec![true, false])]
    #[case::exact_buffer(3, vec![true, false, false])]
    #[case::wraps(5, vec![true, false, false, true, false])]
    fn replay_cycles_over_buffer(#[case] len: usize, #[case] expected: Vec<bool>) {
        let mut coins = ReplayCoins::from_digits(&[1, 0, 0]).expect("non-empty sequence");
        assert_eq!(coins.next_batch(len), expected);
    }

    #[test]
    fn replay_cursor_persists_between_batches() {
        let mut coins = ReplayCoins::from_digits(&[1, 0, 0]).expect("non-empty sequence");
        let _ = coins.next_batch(2);
        assert_eq!(coins.cursor(), 2);
        assert_eq!(coins.next_batch(2), vec![false, true]);
        assert_eq!(coins.cursor(), 1);
    }

    #[test]
    fn random_batches_have_requested_length() {
        let mut coins = RandomCoins::with_seed(11);
        assert_eq!(coins.next_batch(0).len(), 0);
        assert_eq!(coins.next_batch(257).len(), 257);
    }

    #[test]
    fn random_batches_produce_both_faces() {
        let mut coins = RandomCoins::with_seed(3);
        let batch = coins.next_batch(512);
        assert!(batch.iter().any(|&heads| heads));
        assert!(batch.iter().any(|&heads| !heads));
    }

    #[test]
    fn mutable_reference_forwards_batches() {
        fn draw_one<C: CoinTossSource>(mut source: C) -> Vec<bool> {
            source.next_batch(1)
        }

        let mut coins = ReplayCoins::from_digits(&[0, 1]).expect("non-empty sequence");
        assert_eq!(draw_one(&mut coins), vec![false]);
        assert_eq!(coins.cursor(), 1);
    }
}
