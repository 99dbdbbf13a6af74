//! `thicket explain`: shows what a catalog diagnostic looks like.
//!
//! Each entry builds its diagnostic with representative sample context so
//! users can read the full text, and its documentation link, before they
//! hit the failure in a real suite.

use std::io::{IsTerminal, Write};

use thicket_common::NodeKind;
use thicket_diagnostics::{catalog, Category, Diagnostic};
use thicket_source::CodeLocation;

use crate::report::{Disposition, Reporter};
use crate::{renderer_for, ExplainArgs, GlobalArgs};

/// One explainable catalog entry.
pub struct Scenario {
    /// Kebab-case name used on the command line.
    pub name: &'static str,
    /// The phase the scenario belongs to.
    pub category: Category,
    /// Builds the diagnostic with sample context.
    pub build: fn() -> Diagnostic,
}

fn sample_location() -> CodeLocation {
    CodeLocation::new("tests/suite_test.rs", 42)
}

fn earlier_location() -> CodeLocation {
    CodeLocation::new("tests/suite_test.rs", 12)
}

/// Every catalog entry, in listing order.
pub const SCENARIOS: &[Scenario] = &[
    Scenario {
        name: "pushing-node-in-run-phase",
        category: Category::TreeConstruction,
        build: || catalog::pushing_node_in_run_phase(NodeKind::It, sample_location()),
    },
    Scenario {
        name: "caught-panic-during-build-phase",
        category: Category::TreeConstruction,
        build: || {
            catalog::caught_panic_during_build_phase(
                "assertion `left == right` failed\n  left: 1\n right: 2",
                sample_location(),
            )
        },
    },
    Scenario {
        name: "suite-node-in-nested-context",
        category: Category::TreeConstruction,
        build: || catalog::suite_node_in_nested_context(NodeKind::BeforeSuite, sample_location()),
    },
    Scenario {
        name: "suite-node-during-run-phase",
        category: Category::TreeConstruction,
        build: || catalog::suite_node_during_run_phase(NodeKind::ReportAfterSuite, sample_location()),
    },
    Scenario {
        name: "multiple-before-suite-nodes",
        category: Category::TreeConstruction,
        build: || {
            catalog::multiple_before_suite_nodes(
                NodeKind::SynchronizedBeforeSuite,
                sample_location(),
                NodeKind::BeforeSuite,
                earlier_location(),
            )
        },
    },
    Scenario {
        name: "multiple-after-suite-nodes",
        category: Category::TreeConstruction,
        build: || {
            catalog::multiple_after_suite_nodes(
                NodeKind::AfterSuite,
                sample_location(),
                NodeKind::SynchronizedAfterSuite,
                earlier_location(),
            )
        },
    },
    Scenario {
        name: "invalid-decoration-for-node-kind",
        category: Category::Decoration,
        build: || catalog::invalid_decoration_for_node_kind(sample_location(), NodeKind::It, "Ordered"),
    },
    Scenario {
        name: "invalid-declaration-of-focused-and-pending",
        category: Category::Decoration,
        build: || catalog::invalid_declaration_of_focused_and_pending(sample_location(), NodeKind::Describe),
    },
    Scenario {
        name: "unknown-decoration",
        category: Category::Decoration,
        build: || catalog::unknown_decoration(sample_location(), NodeKind::It, "Flakey"),
    },
    Scenario {
        name: "invalid-body-type",
        category: Category::Decoration,
        build: || catalog::invalid_body_type("fn(u32) -> bool", sample_location(), NodeKind::It),
    },
    Scenario {
        name: "multiple-body-functions",
        category: Category::Decoration,
        build: || catalog::multiple_body_functions(sample_location(), NodeKind::It),
    },
    Scenario {
        name: "missing-body-function",
        category: Category::Decoration,
        build: || catalog::missing_body_function(sample_location(), NodeKind::It),
    },
    Scenario {
        name: "too-many-report-entry-values",
        category: Category::ReportEntry,
        build: || catalog::too_many_report_entry_values(sample_location(), "extra"),
    },
    Scenario {
        name: "add-report-entry-not-during-run-phase",
        category: Category::ReportEntry,
        build: || catalog::add_report_entry_not_during_run_phase(sample_location()),
    },
    Scenario {
        name: "aggregated-report-unavailable",
        category: Category::ParallelSync,
        build: catalog::aggregated_report_unavailable_due_to_process_disappearing,
    },
    Scenario {
        name: "synchronized-before-suite-failed",
        category: Category::ParallelSync,
        build: catalog::synchronized_before_suite_failed_on_process_1,
    },
    Scenario {
        name: "synchronized-before-suite-disappeared",
        category: Category::ParallelSync,
        build: catalog::synchronized_before_suite_disappeared_on_process_1,
    },
    Scenario {
        name: "invalid-parallel-total",
        category: Category::Configuration,
        build: catalog::invalid_parallel_total_configuration,
    },
    Scenario {
        name: "invalid-parallel-process",
        category: Category::Configuration,
        build: catalog::invalid_parallel_process_configuration,
    },
    Scenario {
        name: "missing-parallel-host",
        category: Category::Configuration,
        build: catalog::missing_parallel_host_configuration,
    },
    Scenario {
        name: "unreachable-parallel-host",
        category: Category::Configuration,
        build: || catalog::unreachable_parallel_host("127.0.0.1:7777"),
    },
    Scenario {
        name: "dry-run-in-parallel",
        category: Category::Configuration,
        build: catalog::dry_run_in_parallel_configuration,
    },
    Scenario {
        name: "conflicting-verbose-succinct",
        category: Category::Configuration,
        build: catalog::conflicting_verbose_succinct_configuration,
    },
    Scenario {
        name: "invalid-harness-count",
        category: Category::Configuration,
        build: catalog::invalid_harness_count_flag,
    },
    Scenario {
        name: "invalid-harness-parallel",
        category: Category::Configuration,
        build: catalog::invalid_harness_parallel_flag,
    },
    Scenario {
        name: "both-repeat-and-until-it-fails",
        category: Category::Configuration,
        build: catalog::both_repeat_and_until_it_fails,
    },
    Scenario {
        name: "uncaught-panic",
        category: Category::Lifecycle,
        build: || catalog::uncaught_panic(sample_location()),
    },
    Scenario {
        name: "rerunning-suite",
        category: Category::Lifecycle,
        build: catalog::rerunning_suite,
    },
];

/// Looks up a scenario by name.
pub fn find(name: &str) -> Option<&'static Scenario> {
    SCENARIOS.iter().find(|s| s.name == name)
}

/// Formats the scenario list, grouped by category.
pub fn list() -> String {
    let mut out = String::new();
    for category in Category::ALL {
        out.push_str(&format!("{category}:\n"));
        for scenario in SCENARIOS.iter().filter(|s| s.category == category) {
            out.push_str(&format!("  {}\n", scenario.name));
        }
    }
    out
}

/// Runs the `thicket explain` command.
pub fn run(args: &ExplainArgs, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let stdout = std::io::stdout();
    let color = global.color.enabled(stdout.is_terminal());
    let mut stdout = stdout.lock();

    let name = match (&args.name, args.list) {
        (Some(name), false) => name,
        _ => {
            stdout.write_all(list().as_bytes())?;
            return Ok(0);
        }
    };

    let scenario = find(name).ok_or_else(|| {
        format!("unknown scenario '{name}'; run `thicket explain --list` to see them all")
    })?;
    let mut reporter = Reporter::new(stdout, renderer_for(args.format, color));
    reporter.report(&(scenario.build)(), Disposition::Continue)?;
    Ok(reporter.exit_code())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn names_are_unique() {
        let names: HashSet<_> = SCENARIOS.iter().map(|s| s.name).collect();
        assert_eq!(names.len(), SCENARIOS.len());
    }

    #[test]
    fn every_scenario_builds_and_renders() {
        for scenario in SCENARIOS {
            let diag = (scenario.build)();
            assert!(!diag.heading().is_empty(), "{} has no heading", scenario.name);
            let rendered = diag.render(false);
            assert!(rendered.starts_with(diag.heading()));
        }
    }

    #[test]
    fn every_category_has_scenarios() {
        for category in Category::ALL {
            assert!(SCENARIOS.iter().any(|s| s.category == category));
        }
    }

    #[test]
    fn find_by_name() {
        let scenario = find("missing-body-function").unwrap();
        assert_eq!((scenario.build)().heading(), "Missing Functions");
        assert!(find("no-such-thing").is_none());
    }

    #[test]
    fn list_groups_by_category() {
        let listing = list();
        let tree = listing.find("Tree construction:").unwrap();
        let pushing = listing.find("  pushing-node-in-run-phase").unwrap();
        let config = listing.find("Configuration:").unwrap();
        let total = listing.find("  invalid-parallel-total").unwrap();
        assert!(tree < pushing && pushing < config && config < total);
    }
}
