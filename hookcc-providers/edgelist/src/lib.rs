//! Edge-list provider for whitespace-separated graph files.
//!
//! The format is a header `n m` followed by `m` pairs `a b` of node ids in
//! `0..n`. Tokens may be separated by any mix of spaces, tabs and newlines.
//! Self-loop records are counted and dropped rather than added to the graph.

mod errors;
mod loader;

pub use crate::{
    errors::{EdgeListError, EdgeListErrorCode},
    loader::{EdgeListLoader, LoadedGraph},
};
