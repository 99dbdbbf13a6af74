//! Checks that a run configuration describes a run Thicket can perform.

use crate::types::RunConfig;
use thicket_diagnostics::{catalog, Diagnostic};

/// Validates a configuration, returning one diagnostic per problem found.
///
/// Problems are reported in a fixed order: harness flags first, then the
/// parallel settings, then conflicting switches. An empty result means the
/// configuration is valid. Host reachability is not checked here, since it
/// needs the network.
pub fn validate_config(config: &RunConfig) -> Vec<Diagnostic> {
    let mut problems = Vec::new();

    if config.harness.count.is_some_and(|count| count != 1) {
        problems.push(catalog::invalid_harness_count_flag());
    }
    if config.harness.test_threads.is_some() {
        problems.push(catalog::invalid_harness_parallel_flag());
    }

    let parallel = &config.parallel;
    if parallel.total < 1 {
        problems.push(catalog::invalid_parallel_total_configuration());
    } else if parallel.process < 1 || parallel.process > parallel.total {
        problems.push(catalog::invalid_parallel_process_configuration());
    }
    if config.is_parallel() && parallel.host.as_deref().map_or(true, str::is_empty) {
        problems.push(catalog::missing_parallel_host_configuration());
    }

    if config.run.dry_run && config.is_parallel() {
        problems.push(catalog::dry_run_in_parallel_configuration());
    }
    if config.reporter.verbose && config.reporter.succinct {
        problems.push(catalog::conflicting_verbose_succinct_configuration());
    }
    if config.run.repeat > 0 && config.run.until_it_fails {
        problems.push(catalog::both_repeat_and_until_it_fails());
    }

    problems
}

impl RunConfig {
    /// Consumes the configuration, returning it if valid.
    pub fn validated(self) -> Result<RunConfig, crate::ConfigError> {
        let problems = validate_config(&self);
        if problems.is_empty() {
            Ok(self)
        } else {
            Err(crate::ConfigError::Invalid(problems))
        }
    }
}
