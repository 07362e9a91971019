//! Shared test utilities used across hookcc crates.

pub mod ci;
pub mod fixtures;
pub mod tracing;
