//! `thicket check`: validates a run configuration before anything runs.
//!
//! 1. Load `thicket.toml` (from `--config`, else the current directory)
//! 2. Layer the command-line overrides on top
//! 3. Validate, optionally probing the parallel host
//! 4. Report every problem on stderr

use std::io::IsTerminal;
use std::path::Path;

use thicket_common::{InternalError, ThicketResult};
use thicket_config::{load_config, load_config_file, validate_config, RunConfig};
use thicket_diagnostics::Diagnostic;

use crate::probe::{probe_host, PROBE_TIMEOUT};
use crate::report::{Disposition, Reporter};
use crate::{renderer_for, CheckArgs, GlobalArgs};

/// Runs the `thicket check` command.
///
/// Returns exit code 0 if the configuration is valid, 1 otherwise.
pub fn run(args: &CheckArgs, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let mut config = match &global.config {
        Some(path) => load_config_file(Path::new(path))?,
        None => load_config(&std::env::current_dir()?)?,
    };
    config.apply(&args.overrides());

    let problems = check_config(&config, args.probe_host)?;

    let stderr = std::io::stderr();
    let color = global.color.enabled(stderr.is_terminal());
    let mut reporter = Reporter::new(stderr.lock(), renderer_for(args.format, color));
    for problem in &problems {
        reporter.report(problem, Disposition::Abort)?;
    }
    if reporter.reported() == 0 {
        log::info!("run configuration is valid");
    } else {
        log::info!("{} configuration problem(s) found", reporter.reported());
    }
    Ok(reporter.exit_code())
}

/// Validates `config`, adding a host probe when requested.
///
/// The probe only runs for an otherwise valid parallel configuration, so a
/// missing host is reported once rather than also as unreachable.
pub fn check_config(config: &RunConfig, probe: bool) -> ThicketResult<Vec<Diagnostic>> {
    let mut problems = validate_config(config);
    if probe && problems.is_empty() && config.is_parallel() {
        let host = config.parallel.host.as_deref().ok_or_else(|| {
            InternalError::new("validated parallel configuration has no host")
        })?;
        if let Err(unreachable) = probe_host(host, PROBE_TIMEOUT) {
            problems.push(unreachable);
        }
    }
    Ok(problems)
}
