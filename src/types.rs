//! Core value types shared by every comparison stage.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::diagnostics::Diagnostic;

/// A regular file found beneath one root.
///
/// `relative_path` always uses `/` as separator, whatever the host convention.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileEntry {
    pub relative_path: String,
    pub absolute_path: PathBuf,
    pub size: u64,
    pub modified_time: DateTime<Utc>,
}

/// Relative path -> entry, built once per root and never mutated afterwards.
pub type PathMapping = BTreeMap<String, FileEntry>;

/// A file present under exactly one of the two roots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OneSidedEntry {
    pub path: String,
    pub absolute_path: PathBuf,
    pub size: u64,
}

impl From<&FileEntry> for OneSidedEntry {
    fn from(entry: &FileEntry) -> Self {
        Self {
            path: entry.relative_path.clone(),
            absolute_path: entry.absolute_path.clone(),
            size: entry.size,
        }
    }
}

/// A file present under both roots whose bytes differ (or could not be read).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentMismatch {
    pub path: String,
    pub file1: FileEntry,
    pub file2: FileEntry,
}

/// A file present under both roots with byte-identical content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentMatch {
    pub path: String,
    pub size: u64,
}

/// The four classification sequences produced by one reconciliation.
///
/// Each sequence is ordered by relative path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DifferenceSet {
    pub only_in_first: Vec<OneSidedEntry>,
    pub only_in_second: Vec<OneSidedEntry>,
    pub different_content: Vec<ContentMismatch>,
    pub same_content: Vec<ContentMatch>,
}

/// Summary counts derived from a [`DifferenceSet`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Counts {
    pub only_in_first: usize,
    pub only_in_second: usize,
    pub different_content: usize,
    pub same_content: usize,
    pub total_differences: usize,
    pub total_files: usize,
}

/// Everything a caller gets back from one comparison run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonResult {
    pub counts: Counts,
    pub details: DifferenceSet,
    /// Warnings collected during the run (empty unless the collecting entry point was used)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<Diagnostic>,
}

impl ComparisonResult {
    /// True when no path differs between the two trees.
    pub fn is_identical(&self) -> bool {
        self.counts.total_differences == 0
    }
}
