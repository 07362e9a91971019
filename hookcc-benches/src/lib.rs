//! Benchmark support crate for hookcc.
//!
//! Provides synthetic graph sources and parameter types used by the Criterion
//! benchmarks that compare the randomized and deterministic contraction
//! strategies.

pub mod error;
pub mod params;
pub mod source;
