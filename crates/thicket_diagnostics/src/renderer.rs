//! Diagnostic rendering backends for human-readable and machine-readable output.

use crate::diagnostic::Diagnostic;
use crate::markup::{self, Style};
use crate::wrap::{wrap_indented, COLS};

/// The base of every documentation link; the diagnostic's anchor is appended.
pub const DOCS_BASE_URL: &str = "https://thicket.rs/docs/#";

const INDENT: &str = "  ";

/// Returns the full documentation URL for an anchor.
pub fn doc_url(anchor: &str) -> String {
    format!("{DOCS_BASE_URL}{anchor}")
}

/// Trait for rendering diagnostics into formatted output strings.
///
/// Rendering cannot fail: malformed markup degrades to literal text.
pub trait DiagnosticRenderer {
    /// Renders a single diagnostic into a formatted string.
    fn render(&self, diag: &Diagnostic) -> String;
}

/// Renders diagnostics as styled, word-wrapped terminal text.
///
/// Produces output like:
/// ```text
/// Missing Functions
/// tests/suite_test.rs:42
///   [It] node must be passed a single fn() - but none was passed in.
///
///   Learn more at: https://thicket.rs/docs/#node-decoration-reference
/// ```
/// The heading is bold red, the location gray and the link cyan and
/// underlined when `color` is on.
pub struct TerminalRenderer {
    /// Whether to emit ANSI escape sequences.
    pub color: bool,
    /// The column width messages are wrapped to.
    pub width: usize,
}

impl TerminalRenderer {
    /// Creates a renderer wrapping at the standard [`COLS`] width.
    pub fn new(color: bool) -> Self {
        Self { color, width: COLS }
    }

    fn expand(&self, text: &str) -> String {
        markup::expand(text, self.color)
    }
}

impl DiagnosticRenderer for TerminalRenderer {
    fn render(&self, diag: &Diagnostic) -> String {
        let mut out = self.expand(&markup::styled(&[Style::Bold, Style::Red], diag.heading()));
        out.push('\n');

        if !diag.location().is_absent() {
            out.push_str(&self.expand(&markup::gray(diag.location().to_string())));
            out.push('\n');
        }

        let message = diag.message().trim_end_matches('\n');
        if !message.is_empty() {
            out.push_str(&self.expand(&wrap_indented(message, 1, self.width)));
            out.push_str("\n\n");
        }

        // The link line is indented but never wrapped, so the URL stays whole.
        if !diag.doc_link().is_empty() {
            let learn_more = format!(
                "{} {}",
                markup::bold("Learn more at:"),
                markup::styled(&[Style::Cyan, Style::Underline], doc_url(diag.doc_link())),
            );
            out.push_str(INDENT);
            out.push_str(&self.expand(&learn_more));
            out.push('\n');
        }

        out
    }
}

/// Renders diagnostics as a single-line JSON object.
///
/// The message is emitted with markup stripped; an absent location and an
/// empty doc link become `null`.
pub struct JsonRenderer;

impl DiagnosticRenderer for JsonRenderer {
    fn render(&self, diag: &Diagnostic) -> String {
        let location = if diag.location().is_absent() {
            serde_json::Value::Null
        } else {
            serde_json::json!({
                "file": diag.location().file,
                "line": diag.location().line,
            })
        };
        let doc_url = if diag.doc_link().is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::Value::String(doc_url(diag.doc_link()))
        };
        serde_json::json!({
            "heading": markup::strip(diag.heading()),
            "message": markup::strip(diag.message()),
            "doc_url": doc_url,
            "location": location,
        })
        .to_string()
    }
}
