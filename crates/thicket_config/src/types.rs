//! Configuration types deserialized from `thicket.toml`.

use serde::Deserialize;

/// The run configuration parsed from `thicket.toml`.
///
/// Every section is optional; a missing section takes its defaults, which
/// describe a serial run with the default reporter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunConfig {
    /// Parallel process settings.
    pub parallel: ParallelConfig,
    /// How many times, and whether, to run the suite.
    pub run: RunSettings,
    /// Reporter verbosity.
    pub reporter: ReporterConfig,
    /// Flags passed to the host test harness.
    pub harness: HarnessConfig,
}

/// Settings for the cooperating processes of a parallel run.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ParallelConfig {
    /// Total number of processes; must be at least 1.
    pub total: u32,
    /// This process's 1-indexed number; must not exceed `total`.
    pub process: u32,
    /// Address of the coordinating server; required when `total > 1`.
    pub host: Option<String>,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            total: 1,
            process: 1,
            host: None,
        }
    }
}

/// Repetition and dry-run settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunSettings {
    /// Walk the tree and report specs without running them.
    pub dry_run: bool,
    /// Number of additional times to rerun the suite.
    pub repeat: u32,
    /// Rerun the suite until it fails.
    pub until_it_fails: bool,
}

/// Reporter verbosity settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReporterConfig {
    /// Report every spec, not only failures.
    pub verbose: bool,
    /// Report as little as possible.
    pub succinct: bool,
}

/// Flags forwarded to, or observed from, the host test harness.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HarnessConfig {
    /// The harness's `--count`; only 1 is accepted.
    pub count: Option<u32>,
    /// The harness's `--test-threads`; never accepted.
    pub test_threads: Option<u32>,
}

/// Settings supplied on the command line, layered over the file.
///
/// `None` (or `false` for switches) leaves the file's value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    /// Overrides `parallel.total`.
    pub total: Option<u32>,
    /// Overrides `parallel.process`.
    pub process: Option<u32>,
    /// Overrides `parallel.host`.
    pub host: Option<String>,
    /// Sets `run.dry_run`.
    pub dry_run: bool,
    /// Overrides `run.repeat`.
    pub repeat: Option<u32>,
    /// Sets `run.until_it_fails`.
    pub until_it_fails: bool,
    /// Sets `reporter.verbose`.
    pub verbose: bool,
    /// Sets `reporter.succinct`.
    pub succinct: bool,
    /// Overrides `harness.count`.
    pub count: Option<u32>,
    /// Overrides `harness.test_threads`.
    pub test_threads: Option<u32>,
}

impl RunConfig {
    /// Returns `true` if more than one process will run the suite.
    pub fn is_parallel(&self) -> bool {
        self.parallel.total > 1
    }

    /// Applies command-line overrides on top of this configuration.
    pub fn apply(&mut self, overrides: &ConfigOverrides) {
        if let Some(total) = overrides.total {
            log::debug!("override parallel.total = {total}");
            self.parallel.total = total;
        }
        if let Some(process) = overrides.process {
            log::debug!("override parallel.process = {process}");
            self.parallel.process = process;
        }
        if let Some(host) = &overrides.host {
            log::debug!("override parallel.host = {host}");
            self.parallel.host = Some(host.clone());
        }
        if let Some(repeat) = overrides.repeat {
            log::debug!("override run.repeat = {repeat}");
            self.run.repeat = repeat;
        }
        if let Some(count) = overrides.count {
            log::debug!("override harness.count = {count}");
            self.harness.count = Some(count);
        }
        if let Some(threads) = overrides.test_threads {
            log::debug!("override harness.test_threads = {threads}");
            self.harness.test_threads = Some(threads);
        }
        self.run.dry_run |= overrides.dry_run;
        self.run.until_it_fails |= overrides.until_it_fails;
        self.reporter.verbose |= overrides.verbose;
        self.reporter.succinct |= overrides.succinct;
    }
}
