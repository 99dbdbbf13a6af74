//! End-to-end scenarios: a caller detects a misuse, builds the diagnostic and renders it.

use std::sync::mpsc;
use std::thread;

use thicket_common::NodeKind;
use thicket_conformance::{current_location, earlier_location, every_diagnostic, plain};
use thicket_diagnostics::{catalog, markup, wire};
use thicket_source::CodeLocation;

#[test]
fn missing_body_function_exact_text() {
    let diag = catalog::missing_body_function(current_location(), NodeKind::It);
    assert_eq!(
        plain(&diag),
        "Missing Functions\n\
         suite_test.x:42\n\
         \x20 [It] node must be passed a single fn() - but none was passed in.\n\
         \n\
         \x20 Learn more at: https://thicket.rs/docs/#node-decoration-reference\n"
    );
}

#[test]
fn parallel_total_has_fixed_text_and_no_location() {
    let diag = catalog::invalid_parallel_total_configuration();
    let rendered = plain(&diag);
    assert!(rendered.starts_with("thicket.parallel.total must be >= 1\n  It looks like"));
    assert!(rendered.ends_with("  Learn more at: https://thicket.rs/docs/#parallel-specs\n"));
    assert_eq!(diag, catalog::invalid_parallel_total_configuration());
}

#[test]
fn focused_and_pending_names_the_container() {
    let diag = catalog::invalid_declaration_of_focused_and_pending(
        current_location(),
        NodeKind::Describe,
    );
    let rendered = plain(&diag);
    assert!(rendered.contains("[Describe]"));
    assert!(rendered.contains("At most one is allowed."));
    assert!(rendered.contains("suite_test.x:42"));
}

#[test]
fn duplicate_suite_node_cites_both_nodes_once() {
    let diag = catalog::multiple_before_suite_nodes(
        NodeKind::SynchronizedBeforeSuite,
        current_location(),
        NodeKind::BeforeSuite,
        earlier_location(),
    );
    let rendered = plain(&diag);
    assert_eq!(rendered.matches("[SynchronizedBeforeSuite]").count(), 1);
    assert_eq!(rendered.matches("[BeforeSuite]").count(), 1);
    assert_eq!(rendered.matches("setup_test.x:7").count(), 1);

    let current = rendered.find("[SynchronizedBeforeSuite]").unwrap();
    let earlier = rendered.find("[BeforeSuite]").unwrap();
    let earlier_at = rendered.find("setup_test.x:7").unwrap();
    assert!(current < earlier && earlier < earlier_at);
    assert!(rendered.contains("one suite setup node"));
}

#[test]
fn duplicate_suite_node_keeps_spaced_path_on_one_line() {
    let earlier = CodeLocation::new("/home/dev/My Projects/thicket suite/setup_test.rs", 7);
    let diag = catalog::multiple_before_suite_nodes(
        NodeKind::SynchronizedBeforeSuite,
        current_location(),
        NodeKind::BeforeSuite,
        earlier.clone(),
    );
    let rendered = plain(&diag);
    assert_eq!(rendered.matches(&earlier.to_string()).count(), 1);
    assert!(rendered
        .lines()
        .any(|line| line.trim_start().starts_with(&earlier.to_string())));
}

#[test]
fn duplicate_teardown_mentions_teardown() {
    let diag = catalog::multiple_after_suite_nodes(
        NodeKind::AfterSuite,
        current_location(),
        NodeKind::AfterSuite,
        earlier_location(),
    );
    let rendered = plain(&diag);
    assert_eq!(rendered.matches("[AfterSuite]").count(), 2);
    assert!(rendered.contains("one suite teardown node"));
}

#[test]
fn suite_nodes_link_by_kind() {
    let report = catalog::suite_node_in_nested_context(NodeKind::ReportAfterSuite, current_location());
    let setup = catalog::suite_node_in_nested_context(NodeKind::AfterSuite, current_location());
    assert_eq!(report.doc_link(), "generating-custom-reports-when-a-test-suite-completes");
    assert_eq!(setup.doc_link(), "global-setup-and-teardown-beforesuite-and-aftersuite");
}

#[test]
fn caught_panic_payload_is_shown() {
    let diag = catalog::caught_panic_during_build_phase(
        "index out of bounds: the len is 3 but the index is 7",
        current_location(),
    );
    assert!(plain(&diag).contains("index out of bounds: the len is 3 but the index is 7"));
}

#[test]
fn body_type_names_what_was_passed() {
    let diag = catalog::invalid_body_type("fn(&str) -> u8", current_location(), NodeKind::It);
    assert!(plain(&diag).contains("You passed fn(&str) -> u8 instead."));
}

#[test]
fn caller_location_is_rendered() {
    let location = CodeLocation::caller();
    let diag = catalog::pushing_node_in_run_phase(NodeKind::It, location.clone());
    let second = plain(&diag).lines().nth(1).map(String::from);
    assert_eq!(second, Some(location.to_string()));
    assert!(location.file.ends_with("catalog_scenarios.rs"));
}

#[test]
fn stripped_messages_have_no_markup() {
    for diag in every_diagnostic() {
        let stripped = markup::strip(diag.message());
        assert!(!stripped.contains("{{"), "{}", diag.heading());
        assert!(!stripped.contains("}}"), "{}", diag.heading());
    }
}

#[test]
fn every_anchor_is_a_slug() {
    for diag in every_diagnostic() {
        assert!(
            diag.doc_link()
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'),
            "{}",
            diag.heading()
        );
    }
}

#[test]
fn diagnostics_cross_threads_over_the_wire() {
    let (tx, rx) = mpsc::channel();
    let worker = thread::spawn(move || {
        for diag in every_diagnostic() {
            tx.send(wire::encode(&diag).unwrap()).unwrap();
        }
    });

    let received: Vec<_> = rx.iter().map(|frame| wire::decode(&frame).unwrap()).collect();
    worker.join().unwrap();

    let sent = every_diagnostic();
    assert_eq!(received, sent);
    for (got, want) in received.iter().zip(&sent) {
        assert_eq!(got.render(true), want.render(true));
    }
}
