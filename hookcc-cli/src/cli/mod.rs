//! Command-line interface for counting connected components.
//!
//! The command loads an edge-list file, runs the configured hooking
//! strategy and reports the component summary.

mod commands;

pub use commands::{
    Cli, CliError, ExecutionSummary, RunCommand, StrategyArg, render_summary, run_cli,
};

#[cfg(test)]
mod test_helpers;
