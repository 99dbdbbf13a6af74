//! Failures in the decorations and bodies passed to a node.

use crate::diagnostic::Diagnostic;
use crate::markup::bold;
use std::fmt;
use thicket_common::NodeKind;
use thicket_source::CodeLocation;

const DECORATION_DOC: &str = "node-decoration-reference";

/// A decoration that the given node kind does not accept.
pub fn invalid_decoration_for_node_kind(
    location: CodeLocation,
    kind: NodeKind,
    decoration: &str,
) -> Diagnostic {
    Diagnostic::new(
        "Invalid Decoration",
        format!("[{kind}] node cannot be passed a '{decoration}' decoration"),
        DECORATION_DOC,
        location,
    )
}

/// A node decorated with both `Focus` and `Pending`.
pub fn invalid_declaration_of_focused_and_pending(
    location: CodeLocation,
    kind: NodeKind,
) -> Diagnostic {
    Diagnostic::new(
        "Invalid Combination of Decorations: Focused and Pending",
        format!("[{kind}] node was decorated with both Focus and Pending.\nAt most one is allowed."),
        DECORATION_DOC,
        location,
    )
}

/// A decoration value Thicket does not recognize, shown with its `Debug` form.
pub fn unknown_decoration(
    location: CodeLocation,
    kind: NodeKind,
    decoration: impl fmt::Debug,
) -> Diagnostic {
    Diagnostic::new(
        "Unknown Decoration",
        format!("[{kind}] node was passed an unknown decoration: '{decoration:?}'"),
        DECORATION_DOC,
        location,
    )
}

/// A body of the wrong shape; `type_name` is the display name of what was passed.
pub fn invalid_body_type(type_name: &str, location: CodeLocation, kind: NodeKind) -> Diagnostic {
    Diagnostic::new(
        "Invalid Function",
        format!(
            "[{kind}] node must be passed {} - i.e. functions that take nothing and return nothing.\n\
             You passed {} instead.",
            bold("fn()"),
            bold(type_name),
        ),
        DECORATION_DOC,
        location,
    )
}

/// More than one body function where exactly one is required.
pub fn multiple_body_functions(location: CodeLocation, kind: NodeKind) -> Diagnostic {
    Diagnostic::new(
        "Multiple Functions",
        format!(
            "[{kind}] node must be passed a single {} - but more than one was passed in.",
            bold("fn()"),
        ),
        DECORATION_DOC,
        location,
    )
}

/// No body function where exactly one is required.
pub fn missing_body_function(location: CodeLocation, kind: NodeKind) -> Diagnostic {
    Diagnostic::new(
        "Missing Functions",
        format!(
            "[{kind}] node must be passed a single {} - but none was passed in.",
            bold("fn()"),
        ),
        DECORATION_DOC,
        location,
    )
}
