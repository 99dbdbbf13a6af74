//! Shared foundational types used across the Thicket test framework.
//!
//! This crate provides the [`NodeKind`] enumeration that classifies test-tree
//! nodes, the [`NodeKindSet`] groupings used for membership checks, and the
//! common internal result types.

#![warn(missing_docs)]

pub mod node_kind;
pub mod result;

pub use node_kind::{NodeKind, NodeKindSet};
pub use result::{InternalError, ThicketResult};
