use hookcc_core::{HookError, HookErrorCode};
use rstest::rstest;

#[rstest]
#[case(
    HookError::NodeOutOfRange { node: 4, node_count: 3 },
    HookErrorCode::NodeOutOfRange,
    "HOOKCC_NODE_OUT_OF_RANGE",
    false,
)]
#[case(
    HookError::LabelCountMismatch { labels: 1, node_count: 2 },
    HookErrorCode::LabelCountMismatch,
    "HOOKCC_LABEL_COUNT_MISMATCH",
    true,
)]
#[case(
    HookError::ShortCoinBatch { expected: 4, got: 1 },
    HookErrorCode::ShortCoinBatch,
    "HOOKCC_SHORT_COIN_BATCH",
    true,
)]
#[case(
    HookError::LabelAllocation { node_count: usize::MAX },
    HookErrorCode::LabelAllocation,
    "HOOKCC_LABEL_ALLOCATION",
    false,
)]
#[case(
    HookError::EmptyReplaySequence,
    HookErrorCode::EmptyReplaySequence,
    "HOOKCC_EMPTY_REPLAY_SEQUENCE",
    false,
)]
#[case(
    HookError::InvalidMaxLevels { got: 0 },
    HookErrorCode::InvalidMaxLevels,
    "HOOKCC_INVALID_MAX_LEVELS",
    false,
)]
#[case(
    HookError::LevelLimitExceeded { limit: 8, remaining_edges: 3 },
    HookErrorCode::LevelLimitExceeded,
    "HOOKCC_LEVEL_LIMIT_EXCEEDED",
    false,
)]
#[case(
    HookError::VerificationFailed { expected: 2, actual: 3 },
    HookErrorCode::VerificationFailed,
    "HOOKCC_VERIFICATION_FAILED",
    false,
)]
fn returns_expected_hook_code(
    #[case] error: HookError,
    #[case] expected: HookErrorCode,
    #[case] code: &str,
    #[case] programming_error: bool,
) {
    assert_eq!(error.code(), expected);
    assert_eq!(error.code().as_str(), code);
    assert_eq!(expected.to_string(), code);
    assert_eq!(error.is_programming_error(), programming_error);
}

#[test]
fn messages_name_the_offending_values() {
    let err = HookError::NodeOutOfRange {
        node: 9,
        node_count: 4,
    };
    assert_eq!(err.to_string(), "edge references node 9, but node_count is 4");
}
