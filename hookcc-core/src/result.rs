//! Result type returned by [`Connectivity::run`](crate::Connectivity::run).

use std::collections::HashMap;

use crate::{builder::HookStrategy, counter::count_components};

/// Final labelling produced by a connectivity run.
///
/// # Examples
/// ```
/// use hookcc_core::{Components, HookStrategy};
///
/// let components = Components::new(vec![1, 1, 2], 2, HookStrategy::Randomized);
/// assert_eq!(components.component_count(), 2);
/// assert_eq!(components.partition(), vec![vec![0, 1], vec![2]]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Components {
    labels: Vec<usize>,
    component_count: usize,
    levels: usize,
    strategy: HookStrategy,
}

impl Components {
    /// Wraps settled labels, counting their components.
    #[must_use]
    pub fn new(labels: Vec<usize>, levels: usize, strategy: HookStrategy) -> Self {
        let component_count = count_components(&labels);
        Self {
            labels,
            component_count,
            levels,
            strategy,
        }
    }

    /// Returns each node's component representative.
    #[rustfmt::skip]
    #[must_use]
    pub fn labels(&self) -> &[usize] { &self.labels }

    /// Returns the number of connected components.
    #[rustfmt::skip]
    #[must_use]
    pub fn component_count(&self) -> usize { self.component_count }

    /// Returns how many levels the run executed, including the final level
    /// that found no edges.
    #[rustfmt::skip]
    #[must_use]
    pub fn levels(&self) -> usize { self.levels }

    /// Returns the hooking strategy that produced the labels.
    #[rustfmt::skip]
    #[must_use]
    pub fn strategy(&self) -> HookStrategy { self.strategy }

    /// Reports whether `left` and `right` share a component, or `None` when
    /// either id is outside the node universe.
    ///
    /// # Examples
    /// ```
    /// use hookcc_core::{Components, HookStrategy};
    ///
    /// let components = Components::new(vec![0, 0, 2], 1, HookStrategy::Deterministic);
    /// assert_eq!(components.same_component(0, 1), Some(true));
    /// assert_eq!(components.same_component(1, 2), Some(false));
    /// assert_eq!(components.same_component(1, 3), None);
    /// ```
    #[must_use]
    pub fn same_component(&self, left: usize, right: usize) -> Option<bool> {
        Some(self.labels.get(left)? == self.labels.get(right)?)
    }

    /// Groups node ids by component.
    ///
    /// Groups are ordered by their smallest member and each group lists its
    /// members in ascending order.
    #[must_use]
    pub fn partition(&self) -> Vec<Vec<usize>> {
        let mut slots: HashMap<usize, usize> = HashMap::with_capacity(self.component_count);
        let mut groups: Vec<Vec<usize>> = Vec::with_capacity(self.component_count);
        for (node, &label) in self.labels.iter().enumerate() {
            let slot = *slots.entry(label).or_insert_with(|| {
                groups.push(Vec::new());
                groups.len() - 1
            });
            groups[slot].push(node);
        }
        groups
    }

    /// Consumes the result, returning the labels.
    #[must_use]
    pub fn into_labels(self) -> Vec<usize> {
        self.labels
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case::empty(vec![], vec![])]
    #[case::singletons(vec![0, 1, 2], vec![vec![0], vec![1], vec![2]])]
    #[case::interleaved(vec![4, 2, 4, 2, 4], vec![vec![0, 2, 4], vec![1, 3]])]
    fn partition_orders_by_first_member(
        #[case] labels: Vec<usize>,
        #[case] expected: Vec<Vec<usize>>,
    ) {
        let components = Components::new(labels, 1, HookStrategy::Randomized);
        assert_eq!(components.partition(), expected);
        assert_eq!(components.component_count(), expected.len());
    }

    #[test]
    fn exposes_run_metadata() {
        let components = Components::new(vec![3, 3, 3, 3], 4, HookStrategy::Deterministic);
        assert_eq!(components.levels(), 4);
        assert_eq!(components.strategy(), HookStrategy::Deterministic);
        assert_eq!(components.into_labels(), vec![3, 3, 3, 3]);
    }
}
