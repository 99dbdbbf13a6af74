//! Configuration file loading.

use crate::error::ConfigError;
use crate::types::RunConfig;
use std::path::Path;

/// The file name looked up in a suite directory.
pub const CONFIG_FILE_NAME: &str = "thicket.toml";

/// Loads `thicket.toml` from a suite directory.
///
/// A directory without the file yields the default configuration.
pub fn load_config(suite_dir: &Path) -> Result<RunConfig, ConfigError> {
    let path = suite_dir.join(CONFIG_FILE_NAME);
    if !path.exists() {
        log::debug!("no {} in {}, using defaults", CONFIG_FILE_NAME, suite_dir.display());
        return Ok(RunConfig::default());
    }
    load_config_file(&path)
}

/// Loads a configuration from an explicit path, which must exist.
pub fn load_config_file(path: &Path) -> Result<RunConfig, ConfigError> {
    log::debug!("loading run configuration from {}", path.display());
    let content = std::fs::read_to_string(path)?;
    load_config_from_str(&content)
}

/// Parses a configuration from a string.
///
/// Only the syntax and types are checked; see
/// [`validate_config`](crate::validate_config) for the semantic checks,
/// which run after command-line overrides are applied.
pub fn load_config_from_str(content: &str) -> Result<RunConfig, ConfigError> {
    toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))
}
