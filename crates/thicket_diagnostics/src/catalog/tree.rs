//! Failures detected while the test tree is being built.

use crate::diagnostic::Diagnostic;
use crate::markup::{bold, gray};
use std::fmt;
use thicket_common::{NodeKind, NodeKindSet};
use thicket_source::CodeLocation;

const STRUCTURE_HEADING: &str = "Thicket detected an issue with your test structure";

const SUITE_SETUP_DOC: &str = "global-setup-and-teardown-beforesuite-and-aftersuite";
const REPORT_AFTER_SUITE_DOC: &str = "generating-custom-reports-when-a-test-suite-completes";

/// A node was registered from inside a running spec.
pub fn pushing_node_in_run_phase(kind: NodeKind, location: CodeLocation) -> Diagnostic {
    let node = bold(format!("[{kind}]"));
    Diagnostic::new(
        STRUCTURE_HEADING,
        format!(
            "It looks like you are trying to add a {node} node\n\
             to the Thicket test tree in a leaf node {after} the specs started running.\n\
             \n\
             To enable randomization and parallelization Thicket requires the test tree\n\
             to be fully constructed up front.  In practice, this means that you can\n\
             only create nodes like {node} at the top-level or within the\n\
             body of a {describe}, {context}, or {when}.",
            after = bold("after"),
            describe = bold("describe"),
            context = bold("context"),
            when = bold("when"),
        ),
        "understanding-thickets-lifecycle",
        location,
    )
}

/// A panic escaped a container body while the tree was being built.
///
/// `payload` is the text of the caught panic and is embedded verbatim.
pub fn caught_panic_during_build_phase(
    payload: impl fmt::Display,
    location: CodeLocation,
) -> Diagnostic {
    Diagnostic::new(
        "Assertion or Panic detected during tree construction",
        format!(
            "Thicket detected a panic while constructing the test tree.\n\
             You may be trying to make an assertion in the body of a container node\n\
             (i.e. {describe}, {context}, or {when}).\n\
             \n\
             Please ensure all assertions are inside leaf nodes such as {before_each},\n\
             {it}, etc.\n\
             \n\
             {header}\n\
             {payload}",
            describe = bold("describe"),
            context = bold("context"),
            when = bold("when"),
            before_each = bold("before_each"),
            it = bold("it"),
            header = bold("Here's the content of the panic that was caught:"),
        ),
        "do-not-make-assertions-in-container-node-functions",
        location,
    )
}

/// A suite-level node was declared inside a container.
pub fn suite_node_in_nested_context(kind: NodeKind, location: CodeLocation) -> Diagnostic {
    Diagnostic::new(
        STRUCTURE_HEADING,
        format!(
            "It looks like you are trying to add a {} node within a container node.\n\
             \n\
             {} can only be called at the top level.",
            bold(format!("[{kind}]")),
            bold(kind.name()),
        ),
        suite_node_doc_link(kind),
        location,
    )
}

/// A suite-level node was declared from inside a running spec.
pub fn suite_node_during_run_phase(kind: NodeKind, location: CodeLocation) -> Diagnostic {
    Diagnostic::new(
        STRUCTURE_HEADING,
        format!(
            "It looks like you are trying to add a {} node within a leaf node after the spec started running.\n\
             \n\
             {} can only be called at the top level.",
            bold(format!("[{kind}]")),
            bold(kind.name()),
        ),
        suite_node_doc_link(kind),
        location,
    )
}

/// A second suite setup node was declared.
///
/// `location` is where the new node was declared; the earlier node's kind
/// and location are cited in the message.
pub fn multiple_before_suite_nodes(
    kind: NodeKind,
    location: CodeLocation,
    earlier_kind: NodeKind,
    earlier_location: CodeLocation,
) -> Diagnostic {
    multiple_suite_nodes("setup", kind, location, earlier_kind, earlier_location)
}

/// A second suite teardown node was declared.
pub fn multiple_after_suite_nodes(
    kind: NodeKind,
    location: CodeLocation,
    earlier_kind: NodeKind,
    earlier_location: CodeLocation,
) -> Diagnostic {
    multiple_suite_nodes("teardown", kind, location, earlier_kind, earlier_location)
}

fn multiple_suite_nodes(
    setup_or_teardown: &str,
    kind: NodeKind,
    location: CodeLocation,
    earlier_kind: NodeKind,
    earlier_location: CodeLocation,
) -> Diagnostic {
    Diagnostic::new(
        STRUCTURE_HEADING,
        format!(
            "It looks like you are trying to add a {} node but\n\
             you already have a {} node defined at: {}.\n\
             \n\
             Thicket only allows you to define one suite {setup_or_teardown} node.",
            bold(format!("[{kind}]")),
            bold(format!("[{earlier_kind}]")),
            gray(earlier_location.to_string()),
        ),
        SUITE_SETUP_DOC,
        location,
    )
}

fn suite_node_doc_link(kind: NodeKind) -> &'static str {
    if kind.is(NodeKindSet::REPORT_AFTER_SUITE) {
        REPORT_AFTER_SUITE_DOC
    } else {
        SUITE_SETUP_DOC
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::strip;

    fn here() -> CodeLocation {
        CodeLocation::new("suite_test.rs", 10)
    }

    #[test]
    fn pushing_node_names_kind_twice() {
        let diag = pushing_node_in_run_phase(NodeKind::It, here());
        let plain = strip(diag.message());
        assert_eq!(plain.matches("[It]").count(), 2);
        assert!(plain.contains("after the specs started running"));
        assert_eq!(diag.doc_link(), "understanding-thickets-lifecycle");
        assert_eq!(diag.location(), &here());
    }

    #[test]
    fn caught_panic_embeds_payload_verbatim() {
        let payload = "assertion `left == right` failed\n  left: 1\n right: 2";
        let diag = caught_panic_during_build_phase(payload, here());
        assert!(diag.message().ends_with(payload));
        assert_eq!(
            diag.heading(),
            "Assertion or Panic detected during tree construction"
        );
    }

    #[test]
    fn suite_node_doc_link_depends_on_kind() {
        let setup = suite_node_in_nested_context(NodeKind::BeforeSuite, here());
        assert_eq!(setup.doc_link(), SUITE_SETUP_DOC);

        let report = suite_node_in_nested_context(NodeKind::ReportAfterSuite, here());
        assert_eq!(report.doc_link(), REPORT_AFTER_SUITE_DOC);

        let report = suite_node_during_run_phase(NodeKind::ReportAfterSuite, here());
        assert_eq!(report.doc_link(), REPORT_AFTER_SUITE_DOC);

        let teardown = suite_node_during_run_phase(NodeKind::SynchronizedAfterSuite, here());
        assert_eq!(teardown.doc_link(), SUITE_SETUP_DOC);
    }

    #[test]
    fn suite_node_messages_differ_by_phase() {
        let nested = strip(suite_node_in_nested_context(NodeKind::AfterSuite, here()).message());
        let running = strip(suite_node_during_run_phase(NodeKind::AfterSuite, here()).message());
        assert!(nested.contains("within a container node"));
        assert!(running.contains("after the spec started running"));
        assert!(nested.ends_with("AfterSuite can only be called at the top level."));
    }

    #[test]
    fn multiple_suite_nodes_cites_current_then_earlier() {
        let earlier = CodeLocation::new("suite_test.rs", 4);
        let diag = multiple_before_suite_nodes(
            NodeKind::SynchronizedBeforeSuite,
            here(),
            NodeKind::BeforeSuite,
            earlier,
        );
        let plain = strip(diag.message());
        let current_at = plain.find("[SynchronizedBeforeSuite]").unwrap();
        let earlier_at = plain.find("[BeforeSuite]").unwrap();
        let earlier_loc_at = plain.find("suite_test.rs:4").unwrap();
        assert!(current_at < earlier_at && earlier_at < earlier_loc_at);
        assert!(plain.ends_with("one suite setup node."));
        assert_eq!(diag.location(), &here());
    }

    #[test]
    fn multiple_after_suite_nodes_says_teardown() {
        let diag = multiple_after_suite_nodes(
            NodeKind::AfterSuite,
            here(),
            NodeKind::AfterSuite,
            CodeLocation::new("other_test.rs", 9),
        );
        assert!(strip(diag.message()).ends_with("one suite teardown node."));
        assert_eq!(diag.doc_link(), SUITE_SETUP_DOC);
    }

    #[test]
    fn earlier_location_with_spaces_renders_whole() {
        let earlier = CodeLocation::new("/home/dev/My Projects/thicket suite/setup_test.rs", 7);
        let diag = multiple_before_suite_nodes(
            NodeKind::BeforeSuite,
            here(),
            NodeKind::BeforeSuite,
            earlier.clone(),
        );
        let rendered = diag.render(false);
        assert_eq!(rendered.matches(&earlier.to_string()).count(), 1);
    }
}
