//! Global config file source: $XDG_CONFIG_HOME/dircompare/config.toml (platform equivalent elsewhere)

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;
use config::File;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Path to global config file.
pub fn global_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "dircompare").map(|dirs| dirs.config_dir().join("config.toml"))
}

/// Add a config file source to builder if it exists.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
    path: Option<&Path>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    match path {
        Some(path) if path.exists() => {
            debug!(config_path = %path.display(), "Loading configuration file");
            Ok(builder.add_source(File::from(path).required(false)))
        }
        Some(path) => {
            debug!(config_path = %path.display(), "No configuration file, using defaults");
            Ok(builder)
        }
        None => Ok(builder),
    }
}
