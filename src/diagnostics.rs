//! Diagnostic sink
//!
//! The comparison core never prints. Recoverable problems met while walking,
//! mapping or reading files are handed to a [`DiagnosticSink`] chosen by the
//! caller.

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::warn;

/// A recoverable problem met during a comparison run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    /// An entry met while walking could not be read (an unreadable
    /// directory, a dangling link, a link cycle); it and anything beneath it
    /// were skipped
    Traversal { path: PathBuf, message: String },
    /// A file's metadata could not be read; it was dropped from its side's mapping
    Metadata { path: PathBuf, message: String },
    /// A file could not be read for comparison; the pair was classified as different
    Read { path: PathBuf, message: String },
    /// A file's relative key was already taken by another file of the same tree
    Collision { path: PathBuf, message: String },
}

impl Diagnostic {
    pub fn path(&self) -> &Path {
        match self {
            Diagnostic::Traversal { path, .. }
            | Diagnostic::Metadata { path, .. }
            | Diagnostic::Read { path, .. }
            | Diagnostic::Collision { path, .. } => path,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Diagnostic::Traversal { .. } => "traversal",
            Diagnostic::Metadata { .. } => "metadata",
            Diagnostic::Read { .. } => "read",
            Diagnostic::Collision { .. } => "collision",
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::Traversal { path, message } => {
                write!(f, "Could not traverse {}: {}", path.display(), message)
            }
            Diagnostic::Metadata { path, message } => {
                write!(f, "Could not stat {}: {}", path.display(), message)
            }
            Diagnostic::Read { path, message } => {
                write!(f, "Could not compare {}: {}", path.display(), message)
            }
            Diagnostic::Collision { path, message } => {
                write!(f, "Could not key {}: {}", path.display(), message)
            }
        }
    }
}

/// Receiver for recoverable problems. Shared across worker threads.
pub trait DiagnosticSink: Send + Sync {
    fn warn(&self, diagnostic: Diagnostic);
}

/// Drops every diagnostic
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn warn(&self, _diagnostic: Diagnostic) {}
}

/// Keeps diagnostics in memory for the caller to inspect afterwards
#[derive(Debug, Default)]
pub struct CollectingSink {
    diagnostics: Mutex<Vec<Diagnostic>>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.diagnostics.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.lock().is_empty()
    }

    /// Snapshot of what has been collected so far
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.lock().clone()
    }

    pub fn into_inner(self) -> Vec<Diagnostic> {
        self.diagnostics.into_inner()
    }
}

impl DiagnosticSink for CollectingSink {
    fn warn(&self, diagnostic: Diagnostic) {
        self.diagnostics.lock().push(diagnostic);
    }
}

/// Forwards diagnostics to `tracing` at warn level
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn warn(&self, diagnostic: Diagnostic) {
        warn!(
            kind = diagnostic.kind(),
            path = %diagnostic.path().display(),
            "{}",
            diagnostic
        );
    }
}

/// Sends each diagnostic to two sinks
pub struct TeeSink<'a> {
    first: &'a dyn DiagnosticSink,
    second: &'a dyn DiagnosticSink,
}

impl<'a> TeeSink<'a> {
    pub fn new(first: &'a dyn DiagnosticSink, second: &'a dyn DiagnosticSink) -> Self {
        Self { first, second }
    }
}

impl DiagnosticSink for TeeSink<'_> {
    fn warn(&self, diagnostic: Diagnostic) {
        self.first.warn(diagnostic.clone());
        self.second.warn(diagnostic);
    }
}
