//! Shared helpers for the Thicket conformance tests.
//!
//! The tests in `tests/` exercise the diagnostic catalog and the renderers
//! together, checking the guarantees every diagnostic makes about its
//! rendered form.

#![warn(missing_docs)]

use thicket_common::NodeKind;
use thicket_diagnostics::{catalog, Diagnostic};
use thicket_source::CodeLocation;

/// The location used for "current" nodes in the tests.
pub fn current_location() -> CodeLocation {
    CodeLocation::new("suite_test.x", 42)
}

/// The location used for "earlier" nodes in the tests.
pub fn earlier_location() -> CodeLocation {
    CodeLocation::new("setup_test.x", 7)
}

/// Renders without color.
pub fn plain(diag: &Diagnostic) -> String {
    diag.render(false)
}

/// Builds one diagnostic from every catalog function, with fixed sample context.
pub fn every_diagnostic() -> Vec<Diagnostic> {
    let cl = current_location;
    vec![
        catalog::pushing_node_in_run_phase(NodeKind::It, cl()),
        catalog::caught_panic_during_build_phase("boom", cl()),
        catalog::suite_node_in_nested_context(NodeKind::BeforeSuite, cl()),
        catalog::suite_node_during_run_phase(NodeKind::ReportAfterSuite, cl()),
        catalog::multiple_before_suite_nodes(
            NodeKind::SynchronizedBeforeSuite,
            cl(),
            NodeKind::BeforeSuite,
            earlier_location(),
        ),
        catalog::multiple_after_suite_nodes(
            NodeKind::AfterSuite,
            cl(),
            NodeKind::SynchronizedAfterSuite,
            earlier_location(),
        ),
        catalog::invalid_decoration_for_node_kind(cl(), NodeKind::It, "Ordered"),
        catalog::invalid_declaration_of_focused_and_pending(cl(), NodeKind::Describe),
        catalog::unknown_decoration(cl(), NodeKind::It, 3.5),
        catalog::invalid_body_type("fn(u8)", cl(), NodeKind::It),
        catalog::multiple_body_functions(cl(), NodeKind::It),
        catalog::missing_body_function(cl(), NodeKind::It),
        catalog::too_many_report_entry_values(cl(), "extra"),
        catalog::add_report_entry_not_during_run_phase(cl()),
        catalog::aggregated_report_unavailable_due_to_process_disappearing(),
        catalog::synchronized_before_suite_failed_on_process_1(),
        catalog::synchronized_before_suite_disappeared_on_process_1(),
        catalog::invalid_parallel_total_configuration(),
        catalog::invalid_parallel_process_configuration(),
        catalog::missing_parallel_host_configuration(),
        catalog::unreachable_parallel_host("10.0.0.1:7777"),
        catalog::dry_run_in_parallel_configuration(),
        catalog::conflicting_verbose_succinct_configuration(),
        catalog::invalid_harness_count_flag(),
        catalog::invalid_harness_parallel_flag(),
        catalog::both_repeat_and_until_it_fails(),
        catalog::uncaught_panic(cl()),
        catalog::rerunning_suite(),
    ]
}
