use std::io;

use hookcc_core::{HookError, define_error_codes};
use thiserror::Error;

/// Errors raised while reading an edge-list file.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum EdgeListError {
    /// Opening or reading the input failed.
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
    /// The input is not valid UTF-8 text.
    #[error("line {line}: input is not valid UTF-8")]
    InvalidUtf8 {
        /// 1-based line holding the first invalid byte.
        line: usize,
    },
    /// Fewer than two tokens were present, so there is no `n m` header.
    #[error("input is missing the `n m` header")]
    MissingHeader,
    /// A token could not be parsed as a non-negative integer.
    #[error("line {line}: `{token}` is not a non-negative integer")]
    InvalidInteger {
        /// 1-based line holding the token.
        line: usize,
        /// The rejected token.
        token: String,
    },
    /// The input ended before the declared number of edge records.
    #[error("header declares {declared} edges but only {found} complete records follow")]
    TruncatedEdgeList {
        /// Edge count announced by the header.
        declared: usize,
        /// Complete records read before the input ended.
        found: usize,
    },
    /// An edge record named a node outside `0..node_count`.
    #[error("line {line}: node {node} is outside 0..{node_count}")]
    NodeOutOfRange {
        /// 1-based line holding the record.
        line: usize,
        /// The offending endpoint.
        node: usize,
        /// Node count announced by the header.
        node_count: usize,
    },
    /// Building the graph from the parsed records failed.
    #[error(transparent)]
    Graph(#[from] HookError),
}

define_error_codes! {
    /// Stable codes describing [`EdgeListError`] variants.
    enum EdgeListErrorCode for EdgeListError {
        /// Reading the input failed.
        Io => Io(_) => "EDGELIST_IO",
        /// The input was not valid UTF-8.
        InvalidUtf8 => InvalidUtf8 { .. } => "EDGELIST_INVALID_UTF8",
        /// The input ended before the header was complete.
        MissingHeader => MissingHeader => "EDGELIST_MISSING_HEADER",
        /// A token could not be parsed as a node id or count.
        InvalidInteger => InvalidInteger { .. } => "EDGELIST_INVALID_INTEGER",
        /// Fewer edge records followed than the header declared.
        TruncatedEdgeList => TruncatedEdgeList { .. } => "EDGELIST_TRUNCATED",
        /// An edge record named a node outside the universe.
        NodeOutOfRange => NodeOutOfRange { .. } => "EDGELIST_NODE_OUT_OF_RANGE",
        /// Building the graph failed.
        Graph => Graph(_) => "EDGELIST_GRAPH",
    }
}
