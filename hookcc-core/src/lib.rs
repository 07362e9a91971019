//! Connected components by randomized hooking and contraction.
//!
//! Every level hooks tails vertices onto adjacent heads vertices, contracts
//! the edge list onto the new labels, and repeats until no edges remain. The
//! levels then unwind in reverse, leaving each node labelled with its
//! component representative. A deterministic majority-direction strategy and
//! a union-find reference are provided alongside.
//!
//! With the `metrics` feature enabled the randomized engine increments the
//! `hookcc_levels_total` and `hookcc_edges_contracted_total` counters.
#![cfg_attr(docsrs, feature(doc_cfg))]

mod builder;
mod coin;
mod connectivity;
mod counter;
mod deterministic;
mod engine;
mod error;
mod graph;
mod labels;
mod result;
mod union_find;

#[cfg(test)]
mod test_utils;

pub use crate::{
    builder::{ConnectivityBuilder, HookStrategy},
    coin::{CoinTossSource, RandomCoins, ReplayCoins},
    connectivity::Connectivity,
    counter::count_components,
    deterministic::deterministic_contraction,
    engine::HookingContractionEngine,
    error::{HookError, HookErrorCode, Result},
    graph::{Edge, Graph},
    labels::LabelStore,
    result::Components,
    union_find::{reference_component_count, reference_labels, verify_components},
};
