//! Configuration file loading.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::domain::{AppError, GenieConfig};

/// Configuration file looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "genie.toml";

/// Load and validate the configuration.
///
/// An explicit `path` must exist. Without one, `genie.toml` in the working
/// directory is used when present and defaults apply otherwise.
pub fn load_config(path: Option<&Path>) -> Result<GenieConfig, AppError> {
    let (path, required) = match path {
        Some(path) => (path, true),
        None => (Path::new(DEFAULT_CONFIG_FILE), false),
    };

    match fs::read_to_string(path) {
        Ok(content) => parse_config_content(&content),
        Err(err) if err.kind() == ErrorKind::NotFound && !required => {
            tracing::debug!("No {} found, using default configuration", path.display());
            let config = GenieConfig::default();
            config.validate()?;
            Ok(config)
        }
        Err(err) if err.kind() == ErrorKind::NotFound => Err(AppError::config_error(format!(
            "Config file not found: {}",
            path.display()
        ))),
        Err(err) => Err(err.into()),
    }
}

/// Parse configuration from string content.
pub fn parse_config_content(content: &str) -> Result<GenieConfig, AppError> {
    let config: GenieConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}
