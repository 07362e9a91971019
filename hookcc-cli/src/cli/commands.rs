//! Command implementations and argument parsing for the hookcc CLI.

use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use clap::{Args, Parser, ValueEnum};
use hookcc_core::{Components, ConnectivityBuilder, HookError, HookStrategy, verify_components};
use hookcc_providers_edgelist::{EdgeListError, EdgeListLoader, LoadedGraph};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

/// Top-level CLI options parsed by [`clap`].
///
/// The command takes the input path as its only positional argument:
/// `hookcc <PATH> [--seed N] [--strategy S] [--max-levels N] [--verify]`.
#[derive(Debug, Parser, Clone)]
#[command(
    name = "hookcc",
    about = "Count connected components by randomized hooking and contraction."
)]
pub struct Cli {
    /// Options for the component count.
    #[command(flatten)]
    pub run: RunCommand,
}

/// Options accepted when counting components.
#[derive(Debug, Args, Clone)]
pub struct RunCommand {
    /// Path to an edge-list file: a header `n m` followed by `m` pairs.
    pub path: PathBuf,

    /// Seed for the coin source; drawn from entropy when omitted.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Hooking strategy to run.
    #[arg(long, value_enum, default_value_t = StrategyArg::Randomized)]
    pub strategy: StrategyArg,

    /// Abort when edges remain after this many contraction levels.
    #[arg(long = "max-levels")]
    pub max_levels: Option<usize>,

    /// Cross-check the component count against union-find.
    #[arg(long)]
    pub verify: bool,
}

/// Hooking strategies selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StrategyArg {
    /// Coin-toss hooking.
    Randomized,
    /// Majority-direction hooking with pointer jumping.
    Deterministic,
}

impl From<StrategyArg> for HookStrategy {
    fn from(value: StrategyArg) -> Self {
        match value {
            StrategyArg::Randomized => Self::Randomized,
            StrategyArg::Deterministic => Self::Deterministic,
        }
    }
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// The input file could not be opened.
    #[error("failed to open `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// The input file was malformed.
    #[error(transparent)]
    Load(#[from] EdgeListError),
    /// Configuration or the connectivity run failed.
    #[error(transparent)]
    Core(#[from] HookError),
}

impl CliError {
    /// Returns the stable machine-readable code for this failure.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Io { .. } => "HOOKCC_CLI_IO",
            Self::Load(err) => err.code().as_str(),
            Self::Core(err) => err.code().as_str(),
        }
    }
}

/// Summarises the outcome of executing a CLI command.
#[derive(Debug, Clone)]
pub struct ExecutionSummary {
    /// Name of the input, taken from its file name.
    pub source: String,
    /// Nodes declared by the input header.
    pub nodes: usize,
    /// Edges accepted after discarding self-loops.
    pub edges: usize,
    /// Self-loop records dropped by the loader.
    pub discarded_self_loops: usize,
    /// Component labelling produced by the run.
    pub components: Components,
    /// Whether the component count was checked against union-find.
    pub verified: bool,
    /// Wall-clock time spent computing the components.
    pub elapsed: Duration,
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when the input cannot be read or parsed, the
/// configuration is invalid, or the run fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use hookcc_cli::cli::{Cli, RunCommand, StrategyArg, run_cli};
/// # use tempfile::NamedTempFile;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let file = NamedTempFile::new()?;
/// std::fs::write(file.path(), "5 2\n0 1\n2 3\n")?;
/// let cli = Cli {
///     run: RunCommand {
///         path: file.path().to_path_buf(),
///         seed: Some(1),
///         strategy: StrategyArg::Randomized,
///         max_levels: None,
///         verify: true,
///     },
/// };
/// let summary = run_cli(cli)?;
/// assert_eq!(summary.components.component_count(), 3);
/// assert!(summary.verified);
/// # Ok(())
/// # }
/// ```
#[instrument(name = "cli.run", err, skip(cli))]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    run_command(cli.run)
}

#[instrument(
    name = "cli.execute",
    err,
    skip(command),
    fields(path = field::Empty, strategy = field::Empty, seed = field::Empty),
)]
pub(super) fn run_command(command: RunCommand) -> Result<ExecutionSummary, CliError> {
    let RunCommand {
        path,
        seed,
        strategy,
        max_levels,
        verify,
    } = command;
    let strategy = HookStrategy::from(strategy);

    let span = Span::current();
    span.record("path", field::display(path.display()));
    span.record("strategy", field::display(strategy));
    if let Some(seed) = seed {
        span.record("seed", seed);
    }

    let connectivity = ConnectivityBuilder::new()
        .with_strategy(strategy)
        .with_seed(seed)
        .with_max_levels(max_levels)
        .build()?;

    let reader = open_edge_list(&path)?;
    let LoadedGraph {
        graph,
        discarded_self_loops,
        ..
    } = EdgeListLoader::try_from_reader(reader)?;

    let started = Instant::now();
    let components = connectivity.run(&graph)?;
    let elapsed = started.elapsed();
    if verify {
        verify_components(&graph, components.labels())?;
    }

    let summary = ExecutionSummary {
        source: derive_source_name(&path),
        nodes: graph.node_count(),
        edges: graph.edge_count(),
        discarded_self_loops,
        components,
        verified: verify,
        elapsed,
    };
    info!(
        source = summary.source.as_str(),
        components = summary.components.component_count(),
        levels = summary.components.levels(),
        duration_ms = duration_ms(summary.elapsed),
        "command completed"
    );
    Ok(summary)
}

#[instrument(name = "cli.open_edge_list", err, fields(path = field::Empty))]
pub(super) fn open_edge_list(path: &Path) -> Result<BufReader<File>, CliError> {
    Span::current().record("path", field::display(path.display()));
    let file = File::open(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufReader::new(file))
}

pub(super) fn derive_source_name(path: &Path) -> String {
    path.file_name()
        .and_then(|value| value.to_str())
        .map_or_else(|| "input".to_owned(), ToOwned::to_owned)
}

/// Renders `summary` to `writer` as `key: value` lines.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use hookcc_cli::cli::{ExecutionSummary, render_summary};
/// # use std::time::Duration;
/// # use hookcc_core::{Components, HookStrategy};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let summary = ExecutionSummary {
///     source: "demo.txt".into(),
///     nodes: 3,
///     edges: 2,
///     discarded_self_loops: 1,
///     components: Components::new(vec![1, 1, 1], 3, HookStrategy::Randomized),
///     verified: false,
///     elapsed: Duration::from_millis(3),
/// };
/// let mut buffer = Vec::new();
/// render_summary(&summary, &mut buffer)?;
/// let text = String::from_utf8(buffer)?;
/// assert!(text.contains("components: 1\n"));
/// assert!(text.contains("duration_ms: 3\n"));
/// assert!(!text.contains("verified"));
/// # Ok(())
/// # }
/// ```
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    writeln!(writer, "source: {}", summary.source)?;
    writeln!(writer, "nodes: {}", summary.nodes)?;
    writeln!(writer, "edges: {}", summary.edges)?;
    writeln!(
        writer,
        "self-loops discarded: {}",
        summary.discarded_self_loops
    )?;
    writeln!(
        writer,
        "components: {}",
        summary.components.component_count()
    )?;
    writeln!(writer, "levels: {}", summary.components.levels())?;
    writeln!(writer, "strategy: {}", summary.components.strategy())?;
    writeln!(writer, "duration_ms: {}", duration_ms(summary.elapsed))?;
    if summary.verified {
        writeln!(writer, "verified: yes")?;
    }
    Ok(())
}

/// Whole milliseconds in `elapsed`, saturating at `u64::MAX`.
pub(super) fn duration_ms(elapsed: Duration) -> u64 {
    u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX)
}
