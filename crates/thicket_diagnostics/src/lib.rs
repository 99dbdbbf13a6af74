//! Structured descriptions of framework misuse and their terminal rendering.
//!
//! Every problem Thicket detects in how a suite uses it (a malformed tree,
//! a bad decoration, a call outside its lifecycle phase, a parallel
//! synchronization failure, a conflicting configuration) is described by a
//! [`Diagnostic`] built by one function of the [`catalog`]. A
//! [`DiagnosticRenderer`] turns it into text: [`TerminalRenderer`] for
//! people, [`JsonRenderer`] for tools. The [`wire`] module moves diagnostics
//! between parallel processes.
//!
//! Nothing in this crate performs I/O or decides whether a failure is fatal.

#![warn(missing_docs)]

pub mod catalog;
pub mod category;
pub mod diagnostic;
pub mod markup;
pub mod renderer;
pub mod wire;
pub mod wrap;

pub use category::Category;
pub use diagnostic::Diagnostic;
pub use renderer::{doc_url, DiagnosticRenderer, JsonRenderer, TerminalRenderer, DOCS_BASE_URL};
pub use wire::WireError;
pub use wrap::COLS;
