//! Component counting over a settled label vector.

use std::collections::HashSet;

/// Counts the distinct representatives in `labels`.
///
/// Only meaningful once every label points at its component representative,
/// which holds after a completed engine run.
///
/// # Examples
/// ```
/// use hookcc_core::count_components;
///
/// assert_eq!(count_components(&[1, 1, 3, 3, 4]), 3);
/// assert_eq!(count_components(&[]), 0);
/// ```
#[must_use]
pub fn count_components(labels: &[usize]) -> usize {
    labels.iter().copied().collect::<HashSet<_>>().len()
}
