//! Failures of the run as a whole.

use crate::diagnostic::Diagnostic;
use crate::markup::bold;
use thicket_source::CodeLocation;

/// A failure escaped a thread Thicket does not own.
pub fn uncaught_panic(location: CodeLocation) -> Diagnostic {
    Diagnostic::new(
        "Your Test Panicked",
        format!(
            "When you, or your assertion library, calls Thicket's fail(),\n\
             Thicket panics to prevent subsequent assertions from running.\n\
             \n\
             Normally Thicket rescues this panic so you shouldn't see it.\n\
             \n\
             However, if you make an assertion in a spawned thread, Thicket can't capture the panic.\n\
             To circumvent this, you should wrap the body of the thread in\n\
             \n\
             \tthicket::recover(|| {{ ... }})\n\
             \n\
             so that the failure is forwarded to the running spec.\n\
             \n\
             Alternatively, you may have made an assertion outside of a Thicket\n\
             leaf node (e.g. in a container node or some out-of-band function) - please move your assertion to\n\
             an appropriate Thicket node (e.g. a {}, {}, {}, etc...).",
            bold("before_suite"),
            bold("before_each"),
            bold("it"),
        ),
        "marking-specs-as-failed",
        location,
    )
}

/// `run_specs` was called a second time in the same process.
pub fn rerunning_suite() -> Diagnostic {
    Diagnostic::new(
        "Rerunning Suite",
        format!(
            "It looks like you are calling run_specs more than once. Thicket does not support rerunning suites.  \
             If you want to rerun a suite try {} or {}",
            bold("thicket --repeat=N"),
            bold("thicket --until-it-fails"),
        ),
        "repeating-test-runs-and-managing-flakey-tests",
        CodeLocation::absent(),
    )
}
