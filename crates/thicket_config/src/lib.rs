//! Parsing and validation of `thicket.toml` run configuration.
//!
//! This crate reads the run configuration, merges command-line overrides
//! into it, and checks the result, describing every invalid or conflicting
//! setting with a diagnostic from the configuration catalog.

#![warn(missing_docs)]

pub mod error;
pub mod loader;
pub mod types;
pub mod validate;

pub use error::ConfigError;
pub use loader::{load_config, load_config_file, load_config_from_str, CONFIG_FILE_NAME};
pub use types::*;
pub use validate::validate_config;
