//! Failures attaching entries to the spec report.

use crate::diagnostic::Diagnostic;
use crate::markup::bold;
use std::fmt;
use thicket_source::CodeLocation;

const REPORT_ENTRY_DOC: &str = "attaching-data-to-reports";

/// `add_report_entry` was given more than one value.
///
/// `value` is the first unexpected extra value, shown with its `Debug` form.
pub fn too_many_report_entry_values(location: CodeLocation, value: impl fmt::Debug) -> Diagnostic {
    Diagnostic::new(
        "Too Many ReportEntry Values",
        format!(
            "{} can only be given one value. Got unexpected value: {value:?}",
            bold("add_report_entry"),
        ),
        REPORT_ENTRY_DOC,
        location,
    )
}

/// `add_report_entry` was called outside a running spec.
pub fn add_report_entry_not_during_run_phase(location: CodeLocation) -> Diagnostic {
    let call = bold("add_report_entry");
    Diagnostic::new(
        "Thicket detected an issue with your test structure",
        format!(
            "It looks like you are calling {call} outside of a running spec.  \
             Make sure you call {call} inside a runnable node such as it or before_each \
             and not inside the body of a container such as describe or context."
        ),
        REPORT_ENTRY_DOC,
        location,
    )
}
