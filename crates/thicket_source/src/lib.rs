//! Call-site tracking for diagnostics.
//!
//! This crate provides [`CodeLocation`], the file-and-line pair that ties a
//! diagnostic back to the place in a suite where a node was registered or a
//! framework function was called.

#![warn(missing_docs)]

pub mod code_location;

pub use code_location::CodeLocation;
