//! Deterministic hooking along the majority edge direction.
//!
//! Every level counts how many edges point from a smaller id to a larger one
//! and vice versa, then hooks each edge's source onto its target along the
//! more common direction. Hooks along a single direction cannot form cycles,
//! so pointer jumping to a fixpoint flattens every tree onto its root. The
//! edge list is then filtered and compacted exactly like the randomized
//! engine, with the surviving label pairs normalised to `(min, max)`.
//!
//! Every level removes at least one root, so the loop terminates after at
//! most `node_count` contraction levels.

use std::num::NonZeroUsize;

use tracing::{debug, instrument};

use crate::{
    Result,
    engine::level::compact,
    error::HookError,
    graph::{Edge, validate_edges},
    labels::LabelStore,
};

/// Runs deterministic hooking and contraction over a shared [`LabelStore`].
///
/// # Errors
/// Returns [`HookError::LabelCountMismatch`] when `labels` does not cover
/// `node_count` nodes, [`HookError::NodeOutOfRange`] when an edge names a node
/// outside the universe, and [`HookError::LevelLimitExceeded`] when
/// `max_levels` is reached with edges remaining.
///
/// # Examples
/// ```
/// use hookcc_core::{Edge, LabelStore, count_components, deterministic_contraction};
///
/// let edges = [Edge::new(0, 1), Edge::new(1, 2), Edge::new(3, 4)];
/// let mut labels = LabelStore::new(5);
/// let mut levels = 0;
/// deterministic_contraction(5, &edges, &mut labels, &mut levels, None)?;
/// assert_eq!(labels.as_slice(), &[2, 2, 2, 4, 4]);
/// assert_eq!(count_components(labels.as_slice()), 2);
/// # Ok::<(), hookcc_core::HookError>(())
/// ```
#[instrument(
    name = "core.deterministic",
    err,
    skip(edges, labels, levels),
    fields(edges = edges.len()),
)]
pub fn deterministic_contraction(
    node_count: usize,
    edges: &[Edge],
    labels: &mut LabelStore,
    levels: &mut usize,
    max_levels: Option<NonZeroUsize>,
) -> Result<()> {
    if labels.len() != node_count {
        return Err(HookError::LabelCountMismatch {
            labels: labels.len(),
            node_count,
        });
    }
    validate_edges(node_count, edges)?;

    let mut current = edges.to_vec();
    let mut completed = 0_usize;
    loop {
        *levels += 1;
        if node_count == 0 || current.is_empty() {
            break;
        }
        if let Some(limit) = max_levels.filter(|limit| completed >= limit.get()) {
            return Err(HookError::LevelLimitExceeded {
                limit: limit.get(),
                remaining_edges: current.len(),
            });
        }

        hook_majority_direction(&current, labels);
        labels.jump_to_roots();
        let contracted: Vec<Edge> = compact(&current, labels)
            .into_iter()
            .map(Edge::normalized)
            .collect();
        debug!(
            level = *levels,
            edges = current.len(),
            surviving = contracted.len(),
            "level contracted"
        );
        current = contracted;
        completed += 1;
    }
    Ok(())
}

fn hook_majority_direction(edges: &[Edge], labels: &mut LabelStore) {
    let ascending = edges
        .iter()
        .filter(|edge| edge.source() < edge.target())
        .count();
    let descending = edges
        .iter()
        .filter(|edge| edge.source() > edge.target())
        .count();
    let hook_ascending = ascending >= descending;

    for edge in edges {
        let (from, to) = (edge.source(), edge.target());
        let hooks = if hook_ascending { from < to } else { from > to };
        if hooks {
            labels.set(from, to);
        }
    }
}
