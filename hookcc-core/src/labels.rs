//! Array-backed representative labels shared by every contraction level.

use crate::{Result, error::HookError};

/// Maps each node id to its current representative.
///
/// The store starts as the identity mapping and is mutated in place by the
/// engines. Labels always name an existing node id. Indexing past the end is
/// a caller bug and panics.
///
/// # Examples
/// ```
/// use hookcc_core::LabelStore;
///
/// let mut labels = LabelStore::new(3);
/// assert_eq!(labels.as_slice(), &[0, 1, 2]);
/// labels.set(2, 0);
/// assert_eq!(labels.get(2), 0);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LabelStore {
    labels: Vec<usize>,
}

impl LabelStore {
    /// Creates the identity labelling for `node_count` nodes.
    #[must_use]
    pub fn new(node_count: usize) -> Self {
        Self {
            labels: (0..node_count).collect(),
        }
    }

    /// Creates the identity labelling, reporting allocation failure instead
    /// of aborting.
    ///
    /// # Errors
    /// Returns [`HookError::LabelAllocation`] when `node_count` labels cannot
    /// be reserved.
    ///
    /// # Examples
    /// ```
    /// use hookcc_core::{HookError, LabelStore};
    ///
    /// assert_eq!(LabelStore::try_new(2)?.as_slice(), &[0, 1]);
    /// assert!(matches!(
    ///     LabelStore::try_new(usize::MAX),
    ///     Err(HookError::LabelAllocation { .. })
    /// ));
    /// # Ok::<(), HookError>(())
    /// ```
    pub fn try_new(node_count: usize) -> Result<Self> {
        let mut labels = Vec::new();
        labels
            .try_reserve_exact(node_count)
            .map_err(|_| HookError::LabelAllocation { node_count })?;
        labels.extend(0..node_count);
        Ok(Self { labels })
    }

    /// Returns the representative of `node`.
    ///
    /// # Panics
    /// Panics when `node` is outside the store.
    #[must_use]
    pub fn get(&self, node: usize) -> usize {
        self.labels[node]
    }

    /// Points `node` at `label`.
    ///
    /// # Panics
    /// Panics when `node` is outside the store.
    pub fn set(&mut self, node: usize, label: usize) {
        self.labels[node] = label;
    }

    /// Returns the number of nodes covered by the store.
    #[rustfmt::skip]
    #[must_use]
    pub fn len(&self) -> usize { self.labels.len() }

    /// Returns `true` when the store covers no nodes.
    #[rustfmt::skip]
    #[must_use]
    pub fn is_empty(&self) -> bool { self.labels.is_empty() }

    /// Borrows the labels indexed by node id.
    #[rustfmt::skip]
    #[must_use]
    pub fn as_slice(&self) -> &[usize] { &self.labels }

    /// Consumes the store, returning the labels indexed by node id.
    #[rustfmt::skip]
    #[must_use]
    pub fn into_vec(self) -> Vec<usize> { self.labels }

    /// Repeatedly replaces every label with its label's label until no entry
    /// changes, leaving each node pointing directly at a root.
    pub(crate) fn jump_to_roots(&mut self) {
        let mut changed = true;
        while changed {
            changed = false;
            for node in 0..self.labels.len() {
                let grandparent = self.labels[self.labels[node]];
                if grandparent != self.labels[node] {
                    self.labels[node] = grandparent;
                    changed = true;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_as_identity() {
        let labels = LabelStore::new(4);
        assert_eq!(labels.into_vec(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn try_new_matches_new() {
        assert_eq!(LabelStore::try_new(3), Ok(LabelStore::new(3)));
    }

    #[test]
    fn try_new_reports_oversized_universe() {
        assert_eq!(
            LabelStore::try_new(usize::MAX),
            Err(HookError::LabelAllocation {
                node_count: usize::MAX
            })
        );
    }

    #[test]
    #[should_panic(expected = "index out of bounds")]
    fn get_past_end_panics() {
        let labels = LabelStore::new(2);
        let _ = labels.get(2);
    }

    #[test]
    fn jump_to_roots_flattens_chains() {
        let mut labels = LabelStore::new(5);
        labels.set(0, 1);
        labels.set(1, 2);
        labels.set(2, 3);
        labels.jump_to_roots();
        assert_eq!(labels.as_slice(), &[3, 3, 3, 3, 4]);
    }
}
