//! Error types for directory comparison.
//!
//! Only invalid invocations become errors. Per-file problems met during a run
//! are reported as [`crate::diagnostics::Diagnostic`]s and never abort it.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that stop a comparison before any work starts
#[derive(Debug, Error)]
pub enum CompareError {
    #[error("Folder does not exist: {0}")]
    RootNotFound(PathBuf),

    #[error("Not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to start worker pool: {0}")]
    ThreadPool(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CompareError {
    /// Whether the error comes from a bad root argument rather than the environment.
    pub fn is_invalid_root(&self) -> bool {
        matches!(self, CompareError::RootNotFound(_) | CompareError::NotADirectory(_))
    }
}

impl From<config::ConfigError> for CompareError {
    fn from(err: config::ConfigError) -> Self {
        CompareError::Config(err.to_string())
    }
}

impl From<rayon::ThreadPoolBuildError> for CompareError {
    fn from(err: rayon::ThreadPoolBuildError) -> Self {
        CompareError::ThreadPool(err.to_string())
    }
}
