//! The immutable description of a single framework-usage failure.

use crate::renderer::{DiagnosticRenderer, TerminalRenderer};
use serde::{Deserialize, Serialize};
use thicket_source::CodeLocation;

/// A described failure: a heading, an optional explanation, an optional
/// documentation anchor and an optional call site.
///
/// Diagnostics are built by the functions in [`catalog`](crate::catalog)
/// and never change afterwards; the fields are private and there are no
/// mutators. The message may contain [`markup`](crate::markup) tokens, which
/// are only turned into terminal styling when the diagnostic is rendered.
///
/// `Display` produces the uncolored terminal rendering, so a diagnostic can
/// be propagated as an ordinary error.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize, thiserror::Error)]
#[error("{}", TerminalRenderer::new(false).render(self))]
pub struct Diagnostic {
    heading: String,
    message: String,
    doc_link: String,
    location: CodeLocation,
}

impl Diagnostic {
    /// Creates a diagnostic.
    ///
    /// An empty `message` or `doc_link` means the corresponding block is
    /// omitted from the rendering, as is an absent `location`.
    pub fn new(
        heading: impl Into<String>,
        message: impl Into<String>,
        doc_link: impl Into<String>,
        location: CodeLocation,
    ) -> Self {
        Self {
            heading: heading.into(),
            message: message.into(),
            doc_link: doc_link.into(),
            location,
        }
    }

    /// The short title.
    pub fn heading(&self) -> &str {
        &self.heading
    }

    /// The explanatory text, possibly containing markup. Empty if none.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The documentation anchor. Empty if none.
    pub fn doc_link(&self) -> &str {
        &self.doc_link
    }

    /// The call site, or the absent location.
    pub fn location(&self) -> &CodeLocation {
        &self.location
    }

    /// Renders this diagnostic for a terminal, with or without ANSI styling.
    pub fn render(&self, color: bool) -> String {
        TerminalRenderer::new(color).render(self)
    }
}
