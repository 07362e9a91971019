//! The three per-level passes of the randomized engine.
//!
//! Each pass walks the level's edge list in order. Hooking and resolution
//! read labels that earlier edges in the same pass may already have written.

use crate::{graph::Edge, labels::LabelStore};

/// Hooks every tails endpoint onto the label of its heads neighbour.
///
/// `coins` must hold one entry per node id.
pub(crate) fn hook(edges: &[Edge], coins: &[bool], labels: &mut LabelStore) {
    for edge in edges {
        let (u, v) = (edge.source(), edge.target());
        if !coins[u] && coins[v] {
            labels.set(u, labels.get(v));
        }
        if !coins[v] && coins[u] {
            labels.set(v, labels.get(u));
        }
    }
}

/// Drops edges whose endpoints now share a label and relabels the survivors.
///
/// Survivors are marked, ranked with an inclusive prefix sum, then scattered
/// into an exactly sized buffer at `rank - 1`, so their relative order is
/// preserved.
pub(crate) fn compact(edges: &[Edge], labels: &LabelStore) -> Vec<Edge> {
    let marks: Vec<usize> = edges
        .iter()
        .map(|edge| usize::from(labels.get(edge.source()) != labels.get(edge.target())))
        .collect();
    let ranks = inclusive_prefix_sum(&marks);
    let survivors = ranks.last().copied().unwrap_or(0);

    let mut contracted = vec![Edge::default(); survivors];
    for ((edge, &mark), &rank) in edges.iter().zip(&marks).zip(&ranks) {
        if mark == 1 {
            contracted[rank - 1] = Edge::new(labels.get(edge.source()), labels.get(edge.target()));
        }
    }
    contracted
}

/// Propagates the representatives settled by deeper levels one hop back
/// through the hooks made at this level.
pub(crate) fn resolve(edges: &[Edge], labels: &mut LabelStore) {
    for edge in edges {
        let (u, v) = (edge.source(), edge.target());
        if labels.get(u) == v {
            labels.set(u, labels.get(v));
        }
        if labels.get(v) == u {
            labels.set(v, labels.get(u));
        }
    }
}

fn inclusive_prefix_sum(values: &[usize]) -> Vec<usize> {
    let mut sums = Vec::with_capacity(values.len());
    let mut running = 0;
    for value in values {
        running += value;
        sums.push(running);
    }
    sums
}
