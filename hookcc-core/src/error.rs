//! Error types for the hookcc core library.
//!
//! Defines the error enum exposed by the public API, its stable codes, and a
//! convenient result alias.

use thiserror::Error;

/// Generates a `Copy` code enum mirroring the variants of an error enum,
/// together with `as_str`, `Display`, and an inherent `code()` accessor on the
/// error type.
///
/// Other crates in the workspace reuse the macro for their own error enums.
#[macro_export]
macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? $( ( $($tuple:tt)* ) )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl ::std::fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? $( ( $($tuple)* ) )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// Error type produced when building graphs or running the connectivity
/// engines.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum HookError {
    /// An edge referenced a node id outside `0..node_count`.
    #[error("edge references node {node}, but node_count is {node_count}")]
    NodeOutOfRange {
        /// The offending endpoint.
        node: usize,
        /// Number of nodes in the graph.
        node_count: usize,
    },
    /// The label store handed to the engine does not cover the node universe.
    #[error("label store holds {labels} entries but the graph has {node_count} nodes")]
    LabelCountMismatch {
        /// Number of entries in the supplied label store.
        labels: usize,
        /// Number of nodes the engine was asked to process.
        node_count: usize,
    },
    /// A coin source produced fewer bits than there are nodes.
    #[error("coin source produced {got} bits but {expected} were requested")]
    ShortCoinBatch {
        /// Number of bits requested by the engine.
        expected: usize,
        /// Number of bits actually produced.
        got: usize,
    },
    /// The label store for the node universe could not be allocated.
    #[error("cannot allocate labels for {node_count} nodes")]
    LabelAllocation {
        /// Node count declared by the graph.
        node_count: usize,
    },
    /// A replay coin source was constructed without any bits to replay.
    #[error("replay coin sequence must contain at least one bit")]
    EmptyReplaySequence,
    /// The level limit must be at least one when supplied.
    #[error("max_levels must be at least 1 (got {got})")]
    InvalidMaxLevels {
        /// The rejected limit.
        got: usize,
    },
    /// Edges remained after the configured number of contraction levels.
    #[error("{remaining_edges} edges remain after the {limit}-level limit was reached")]
    LevelLimitExceeded {
        /// Configured contraction level limit.
        limit: usize,
        /// Edges still awaiting contraction when the run was aborted.
        remaining_edges: usize,
    },
    /// The engine disagreed with the union-find reference.
    #[error("engine found {actual} components but the reference found {expected}")]
    VerificationFailed {
        /// Component count reported by the union-find reference.
        expected: usize,
        /// Component count reported by the engine.
        actual: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`HookError`] variants.
    enum HookErrorCode for HookError {
        /// An edge referenced a node id outside `0..node_count`.
        NodeOutOfRange => NodeOutOfRange { .. } => "HOOKCC_NODE_OUT_OF_RANGE",
        /// The label store does not cover the node universe.
        LabelCountMismatch => LabelCountMismatch { .. } => "HOOKCC_LABEL_COUNT_MISMATCH",
        /// A coin source produced fewer bits than requested.
        ShortCoinBatch => ShortCoinBatch { .. } => "HOOKCC_SHORT_COIN_BATCH",
        /// The label store could not be allocated.
        LabelAllocation => LabelAllocation { .. } => "HOOKCC_LABEL_ALLOCATION",
        /// A replay coin source had nothing to replay.
        EmptyReplaySequence => EmptyReplaySequence => "HOOKCC_EMPTY_REPLAY_SEQUENCE",
        /// The level limit was zero.
        InvalidMaxLevels => InvalidMaxLevels { .. } => "HOOKCC_INVALID_MAX_LEVELS",
        /// Edges remained after the level limit.
        LevelLimitExceeded => LevelLimitExceeded { .. } => "HOOKCC_LEVEL_LIMIT_EXCEEDED",
        /// The engine disagreed with the union-find reference.
        VerificationFailed => VerificationFailed { .. } => "HOOKCC_VERIFICATION_FAILED",
    }
}

impl HookError {
    /// Returns `true` for errors that indicate a caller bug rather than bad
    /// input or an unlucky run.
    ///
    /// # Examples
    /// ```
    /// use hookcc_core::HookError;
    ///
    /// let err = HookError::LabelCountMismatch { labels: 2, node_count: 3 };
    /// assert!(err.is_programming_error());
    /// ```
    #[must_use]
    pub const fn is_programming_error(&self) -> bool {
        matches!(
            self,
            Self::LabelCountMismatch { .. } | Self::ShortCoinBatch { .. }
        )
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, HookError>;
