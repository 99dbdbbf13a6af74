//! Thicket CLI: checks run configuration and explains Thicket's diagnostics.
//!
//! Provides `thicket check` for validating a `thicket.toml` plus command-line
//! overrides before a run, and `thicket explain` for reading the full text of
//! any diagnostic Thicket can emit.

#![warn(missing_docs)]

mod check;
mod explain;
mod probe;
mod report;

use std::process;

use clap::{Parser, Subcommand, ValueEnum};
use thicket_config::ConfigOverrides;
use thicket_diagnostics::{DiagnosticRenderer, JsonRenderer, TerminalRenderer};

/// Thicket: a spec-tree test framework.
#[derive(Parser, Debug)]
#[command(name = "thicket", version, about = "Thicket test framework")]
pub struct Cli {
    /// Control colored output.
    #[arg(long, global = true, value_enum, default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,

    /// Enable debug logging (overrides `RUST_LOG`).
    #[arg(long, global = true)]
    pub debug: bool,

    /// Path to a custom `thicket.toml` configuration file.
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// The subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate the run configuration.
    Check(CheckArgs),
    /// Show the full text of a diagnostic.
    Explain(ExplainArgs),
}

/// Arguments for the `thicket check` subcommand.
#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Number of parallel processes.
    #[arg(short = 'p', long = "procs")]
    pub procs: Option<u32>,

    /// This process's 1-indexed number within a parallel run.
    #[arg(long = "proc")]
    pub process: Option<u32>,

    /// Address of the coordinating server for a parallel run.
    #[arg(long)]
    pub host: Option<String>,

    /// Walk the tree without running specs.
    #[arg(long)]
    pub dry_run: bool,

    /// Report every spec.
    #[arg(short, long)]
    pub verbose: bool,

    /// Report as little as possible.
    #[arg(long)]
    pub succinct: bool,

    /// Rerun the suite this many additional times.
    #[arg(long)]
    pub repeat: Option<u32>,

    /// Rerun the suite until it fails.
    #[arg(long)]
    pub until_it_fails: bool,

    /// The host harness's `--count`, if it was passed.
    #[arg(long)]
    pub count: Option<u32>,

    /// The host harness's `--test-threads`, if it was passed.
    #[arg(long)]
    pub test_threads: Option<u32>,

    /// Also check that the parallel host accepts connections.
    #[arg(long)]
    pub probe_host: bool,

    /// Output format for diagnostics.
    #[arg(short, long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,
}

impl CheckArgs {
    /// Collects the flags that override `thicket.toml`.
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            total: self.procs,
            process: self.process,
            host: self.host.clone(),
            dry_run: self.dry_run,
            repeat: self.repeat,
            until_it_fails: self.until_it_fails,
            verbose: self.verbose,
            succinct: self.succinct,
            count: self.count,
            test_threads: self.test_threads,
        }
    }
}

/// Arguments for the `thicket explain` subcommand.
#[derive(Parser, Debug)]
pub struct ExplainArgs {
    /// Scenario to explain (e.g., `missing-body-function`).
    pub name: Option<String>,

    /// List every scenario.
    #[arg(long)]
    pub list: bool,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,
}

/// Controls whether colored output is produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Detect from terminal capabilities.
    Auto,
    /// Always produce colored output.
    Always,
    /// Never produce colored output.
    Never,
}

impl ColorChoice {
    /// Whether to color output written to a stream, given whether that
    /// stream is a terminal.
    pub fn enabled(self, is_terminal: bool) -> bool {
        match self {
            ColorChoice::Auto => is_terminal,
            ColorChoice::Always => true,
            ColorChoice::Never => false,
        }
    }
}

/// Diagnostic output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Human-readable terminal output.
    Text,
    /// One JSON object per diagnostic.
    Json,
}

/// Global settings derived from CLI flags.
pub struct GlobalArgs {
    /// The color setting, resolved per output stream.
    pub color: ColorChoice,
    /// Optional path to a custom config file.
    pub config: Option<String>,
}

/// Picks the renderer for an output format.
pub fn renderer_for(format: ReportFormat, color: bool) -> Box<dyn DiagnosticRenderer> {
    match format {
        ReportFormat::Text => Box::new(TerminalRenderer::new(color)),
        ReportFormat::Json => Box::new(JsonRenderer),
    }
}

fn init_logging(debug: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if debug {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.format_timestamp(None).init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.debug);

    let global = GlobalArgs {
        color: cli.color,
        config: cli.config,
    };

    let result = match cli.command {
        Command::Check(ref args) => check::run(args, &global),
        Command::Explain(ref args) => explain::run(args, &global),
    };

    match result {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    }
}
