//! Constructors for every misuse Thicket knows how to describe.
//!
//! Each function builds one [`Diagnostic`](crate::Diagnostic) from the
//! context the caller supplies. They are grouped by the phase in which the
//! problem is detected, and all are re-exported here:
//!
//! - [`tree`]: building the test tree
//! - [`decoration`]: node decorations and bodies
//! - [`report_entry`]: report entries
//! - [`parallel`]: coordinating parallel processes
//! - [`config`]: run configuration
//! - [`lifecycle`]: the run as a whole
//!
//! The functions are pure. When a scenario involves an earlier conflicting
//! node, the new node is described first and the earlier one second.

pub mod config;
pub mod decoration;
pub mod lifecycle;
pub mod parallel;
pub mod report_entry;
pub mod tree;

pub use config::*;
pub use decoration::*;
pub use lifecycle::*;
pub use parallel::*;
pub use report_entry::*;
pub use tree::*;
