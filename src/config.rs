//! Configuration System
//!
//! Layered configuration for comparison runs: built-in defaults, then the
//! global config file (or an explicit `--config` file), then `DIRCOMPARE__*`
//! environment variables. CLI flags are applied on top by the binary.

use crate::compare::ContentOptions;
use crate::engine::CompareOptions;
use crate::error::CompareError;
use crate::logging::LoggingConfig;
use crate::tree::WalkOptions;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub use crate::compare::content::DEFAULT_BUFFER_SIZE;

mod merge_policy;
mod sources;

pub use sources::environment::ENV_PREFIX;
pub use sources::global_file::global_config_path;

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DirCompareConfig {
    /// Comparison settings
    #[serde(default)]
    pub compare: CompareConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Comparison settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompareConfig {
    /// Worker threads (unset = one per core)
    #[serde(default)]
    pub workers: Option<usize>,

    /// Read buffer per file, in bytes
    #[serde(default = "default_buffer_size")]
    pub buffer_size: usize,

    /// Treat files of different sizes as different without reading them
    #[serde(default = "default_true")]
    pub size_short_circuit: bool,

    /// Follow symbolic links while walking
    #[serde(default = "default_true")]
    pub follow_symlinks: bool,

    /// Entry names skipped on both sides (e.g. ".git")
    #[serde(default)]
    pub ignore_patterns: Vec<String>,
}

fn default_buffer_size() -> usize {
    DEFAULT_BUFFER_SIZE
}

fn default_true() -> bool {
    true
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self {
            workers: None,
            buffer_size: default_buffer_size(),
            size_short_circuit: default_true(),
            follow_symlinks: default_true(),
            ignore_patterns: Vec::new(),
        }
    }
}

impl CompareConfig {
    /// Validate comparison settings
    pub fn validate(&self) -> Result<(), String> {
        if self.buffer_size == 0 {
            return Err("buffer_size must be greater than zero".to_string());
        }
        if self.workers == Some(0) {
            return Err("workers must be at least 1 when set".to_string());
        }
        if self.ignore_patterns.iter().any(|p| p.is_empty()) {
            return Err("ignore_patterns cannot contain empty names".to_string());
        }
        Ok(())
    }

    /// Engine options for these settings
    pub fn to_options(&self) -> CompareOptions {
        CompareOptions {
            walk: WalkOptions {
                follow_symlinks: self.follow_symlinks,
                ignore_patterns: self.ignore_patterns.clone(),
            },
            content: ContentOptions {
                buffer_size: self.buffer_size,
                size_short_circuit: self.size_short_circuit,
            },
            workers: self.workers,
        }
    }
}

impl DirCompareConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), CompareError> {
        self.compare
            .validate()
            .map_err(|e| CompareError::Config(format!("compare: {}", e)))
    }
}

/// Loads [`DirCompareConfig`] from its layered sources
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load from defaults, the global config file and the environment.
    pub fn load() -> Result<DirCompareConfig, CompareError> {
        Self::load_layers(global_config_path().as_deref())
    }

    /// Load with `path` in place of the global config file. The file must exist.
    pub fn load_from_file(path: &Path) -> Result<DirCompareConfig, CompareError> {
        if !path.is_file() {
            return Err(CompareError::Config(format!(
                "Config file not found: {}",
                path.display()
            )));
        }
        Self::load_layers(Some(path))
    }

    fn load_layers(file: Option<&Path>) -> Result<DirCompareConfig, CompareError> {
        let builder = merge_policy::builder_with_defaults()?;
        let builder = sources::global_file::add_to_builder(builder, file)?;
        let builder = sources::environment::add_to_builder(builder);

        let config: DirCompareConfig = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }
}
