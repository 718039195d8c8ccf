//! Comparison engine
//!
//! Runs the whole pipeline for two roots: walk both trees, map them by
//! relative path, reconcile the mappings and count the result. Each run is
//! self-contained and keeps no state between calls.

use crate::compare::{aggregate, reconcile, ContentOptions};
use crate::diagnostics::{CollectingSink, DiagnosticSink, TeeSink};
use crate::error::CompareError;
use crate::tree::path::canonicalize_root;
use crate::tree::{build_map, walk, WalkOptions};
use crate::types::{ComparisonResult, PathMapping};
use rayon::ThreadPoolBuilder;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info, instrument};

/// Everything that tunes one comparison run
#[derive(Debug, Clone, Default)]
pub struct CompareOptions {
    pub walk: WalkOptions,
    pub content: ContentOptions,
    /// Worker threads for traversal and content reads (None = one per core)
    pub workers: Option<usize>,
}

/// Check that `root` exists and is a directory.
pub fn validate_root(root: &Path) -> Result<(), CompareError> {
    match std::fs::metadata(root) {
        Ok(metadata) if metadata.is_dir() => Ok(()),
        Ok(_) => Err(CompareError::NotADirectory(root.to_path_buf())),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            Err(CompareError::RootNotFound(root.to_path_buf()))
        }
        Err(e) => Err(CompareError::Io(e)),
    }
}

/// Compare two directory trees.
///
/// Both roots are validated before any work starts; a bad root is the only
/// way this fails. Unreadable directories, vanished files and read errors
/// go to `sink` and the run carries on.
#[instrument(skip_all, fields(first = %first.display(), second = %second.display()))]
pub fn compare_directories(
    first: &Path,
    second: &Path,
    options: &CompareOptions,
    sink: &dyn DiagnosticSink,
) -> Result<ComparisonResult, CompareError> {
    validate_root(first)?;
    validate_root(second)?;

    let first = canonicalize_root(first)?;
    let second = canonicalize_root(second)?;

    let pool = ThreadPoolBuilder::new()
        .num_threads(options.workers.unwrap_or(0))
        .thread_name(|i| format!("dircompare-worker-{}", i))
        .build()?;

    let start = Instant::now();
    let details = pool.install(|| {
        let (first_map, second_map) = rayon::join(
            || map_root(&first, options, sink),
            || map_root(&second, options, sink),
        );
        reconcile(&first_map, &second_map, &options.content, sink)
    });
    let counts = aggregate(&details);

    info!(
        total_files = counts.total_files,
        total_differences = counts.total_differences,
        elapsed_ms = start.elapsed().as_millis() as u64,
        "Comparison complete"
    );

    Ok(ComparisonResult {
        counts,
        details,
        warnings: Vec::new(),
    })
}

/// Compare two trees and keep every diagnostic in the returned result.
///
/// Diagnostics are also forwarded to `forward` as they happen.
pub fn compare_directories_collecting(
    first: &Path,
    second: &Path,
    options: &CompareOptions,
    forward: &dyn DiagnosticSink,
) -> Result<ComparisonResult, CompareError> {
    let collector = CollectingSink::new();
    let mut result = {
        let tee = TeeSink::new(&collector, forward);
        compare_directories(first, second, options, &tee)?
    };
    result.warnings = collector.into_inner();
    Ok(result)
}

fn map_root(root: &Path, options: &CompareOptions, sink: &dyn DiagnosticSink) -> PathMapping {
    let files = walk(root, &options.walk, sink);
    debug!(root = %root.display(), files = files.len(), "Walked root");
    build_map(&files, root, sink)
}
