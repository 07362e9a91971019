//! Property-based tests for the hooking-and-contraction engines.
//!
//! Checks both strategies against the union-find reference, confirms that
//! replayed coin sequences reproduce runs exactly and that random seeds only
//! change iteration counts, and verifies that compaction never reorders the
//! surviving edges.

mod invariants;
mod strategies;
mod types;
