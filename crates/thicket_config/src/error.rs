//! Error types for configuration loading and validation.

use thicket_diagnostics::Diagnostic;

/// Errors that can occur when loading or validating a `thicket.toml` configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// An I/O error occurred while reading the configuration file.
    #[error("failed to read configuration: {0}")]
    IoError(#[from] std::io::Error),

    /// The TOML content could not be parsed.
    #[error("failed to parse configuration: {0}")]
    ParseError(String),

    /// The configuration parsed but describes an invalid or conflicting run.
    #[error("invalid run configuration: {} problem(s) found", .0.len())]
    Invalid(Vec<Diagnostic>),
}
