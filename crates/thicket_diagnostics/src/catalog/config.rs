//! Invalid or conflicting run configuration.

use crate::diagnostic::Diagnostic;
use thicket_source::CodeLocation;

const PARALLEL_DOC: &str = "parallel-specs";

const SHARED_PARALLEL_MESSAGE: &str =
    "It looks like you are trying to run specs in parallel with cargo test.\n\
     This is unsupported and you should use the thicket CLI instead.";

fn parallel_misconfiguration(heading: impl Into<String>) -> Diagnostic {
    Diagnostic::new(
        heading,
        SHARED_PARALLEL_MESSAGE,
        PARALLEL_DOC,
        CodeLocation::absent(),
    )
}

fn conflict(heading: &str, message: &str) -> Diagnostic {
    Diagnostic::new(heading, message, "", CodeLocation::absent())
}

/// `thicket.parallel.total` is below 1.
pub fn invalid_parallel_total_configuration() -> Diagnostic {
    parallel_misconfiguration("thicket.parallel.total must be >= 1")
}

/// `thicket.parallel.process` is 0 or greater than the total.
pub fn invalid_parallel_process_configuration() -> Diagnostic {
    parallel_misconfiguration(
        "thicket.parallel.process is one-indexed and must be <= thicket.parallel.total",
    )
}

/// A parallel run without `thicket.parallel.host`.
pub fn missing_parallel_host_configuration() -> Diagnostic {
    parallel_misconfiguration("thicket.parallel.host is missing")
}

/// The coordinating host could not be reached.
pub fn unreachable_parallel_host(host: &str) -> Diagnostic {
    parallel_misconfiguration(format!("Could not reach thicket.parallel.host:{host}"))
}

/// A dry run was requested together with parallel mode.
pub fn dry_run_in_parallel_configuration() -> Diagnostic {
    conflict(
        "Thicket only performs --dry-run in serial mode.",
        "Please try running thicket --dry-run again, but without -p or --procs to ensure the suite is running in series.",
    )
}

/// Both `--verbose` and `--succinct` were set.
pub fn conflicting_verbose_succinct_configuration() -> Diagnostic {
    conflict(
        "Conflicting reporter verbosity settings -v and --succinct.",
        "You can't set both -v and --succinct.  Please pick one!",
    )
}

/// The host harness's `--count` was set to something other than 1.
pub fn invalid_harness_count_flag() -> Diagnostic {
    conflict(
        "Use of harness --count",
        "Thicket does not support using the test harness's --count to rerun test suites.  \
         Only --count=1 is allowed.  \
         To repeat test runs, please use the thicket CLI and `thicket --until-it-fails` or `thicket --repeat=N`.",
    )
}

/// The host harness's `--test-threads` was set.
pub fn invalid_harness_parallel_flag() -> Diagnostic {
    conflict(
        "Use of harness --test-threads",
        "The test harness's --test-threads does not actually parallelize Thicket specs.  \
         Please use the thicket CLI and `thicket -p` or `thicket --procs=N` instead.",
    )
}

/// Both `--repeat` and `--until-it-fails` were set.
pub fn both_repeat_and_until_it_fails() -> Diagnostic {
    conflict(
        "--repeat and --until-it-fails are both set",
        "--until-it-fails directs Thicket to rerun specs indefinitely until they fail.  \
         --repeat directs Thicket to rerun specs a set number of times.  \
         You can't set both... which would you like?",
    )
}
