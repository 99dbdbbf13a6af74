//! Failures coordinating the processes of a parallel run.
//!
//! These are raised by the process that observes the failure, never at a
//! call site in the suite, so they carry no location and no doc link.

use crate::diagnostic::Diagnostic;
use thicket_source::CodeLocation;

/// The aggregated report for `ReportAfterSuite` could not be assembled.
pub fn aggregated_report_unavailable_due_to_process_disappearing() -> Diagnostic {
    Diagnostic::new(
        "Test Report unavailable because a Thicket parallel process disappeared",
        "The aggregated report could not be fetched for a ReportAfterSuite node.  \
         A Thicket parallel process disappeared before it could finish reporting.",
        "",
        CodeLocation::absent(),
    )
}

/// The process-#1 half of `SynchronizedBeforeSuite` failed.
pub fn synchronized_before_suite_failed_on_process_1() -> Diagnostic {
    Diagnostic::new(
        "SynchronizedBeforeSuite failed on Thicket parallel process #1",
        "The first SynchronizedBeforeSuite function running on Thicket parallel process #1 failed.  \
         This test suite will now abort.",
        "",
        CodeLocation::absent(),
    )
}

/// Process #1 went away before its `SynchronizedBeforeSuite` reported back.
pub fn synchronized_before_suite_disappeared_on_process_1() -> Diagnostic {
    Diagnostic::new(
        "Process #1 disappeared before SynchronizedBeforeSuite could report back",
        "Thicket parallel process #1 disappeared before the first SynchronizedBeforeSuite function completed.  \
         This test suite will now abort.",
        "",
        CodeLocation::absent(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_location_or_link() {
        for diag in [
            aggregated_report_unavailable_due_to_process_disappearing(),
            synchronized_before_suite_failed_on_process_1(),
            synchronized_before_suite_disappeared_on_process_1(),
        ] {
            assert!(diag.location().is_absent());
            assert!(diag.doc_link().is_empty());
            assert!(!diag.message().is_empty());
        }
    }

    #[test]
    fn abort_is_announced() {
        assert!(synchronized_before_suite_failed_on_process_1()
            .message()
            .ends_with("This test suite will now abort."));
        assert!(synchronized_before_suite_disappeared_on_process_1()
            .message()
            .ends_with("This test suite will now abort."));
    }
}
