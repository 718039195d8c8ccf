//! Filesystem walker for enumerating the regular files beneath a root

use crate::diagnostics::{Diagnostic, DiagnosticSink};
use std::path::{Path, PathBuf};
use tracing::{debug, trace};
use walkdir::{DirEntry, WalkDir};

/// Filesystem walker configuration
#[derive(Debug, Clone)]
pub struct WalkOptions {
    /// Whether to follow symbolic links (default: true, links count as what they point at)
    pub follow_symlinks: bool,
    /// Entry names to skip, together with everything beneath them (e.g. ".git")
    pub ignore_patterns: Vec<String>,
}

impl Default for WalkOptions {
    fn default() -> Self {
        Self {
            follow_symlinks: true,
            ignore_patterns: Vec::new(),
        }
    }
}

/// Filesystem walker
pub struct Walker {
    root: PathBuf,
    options: WalkOptions,
}

impl Walker {
    /// Create a new walker for the given root path
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            options: WalkOptions::default(),
        }
    }

    /// Create a walker with custom options
    pub fn with_options(root: PathBuf, options: WalkOptions) -> Self {
        Self { root, options }
    }

    /// Walk the tree and collect the path of every regular file.
    ///
    /// Returned paths are `root` joined with the entry's location, so an
    /// absolute root yields absolute paths. An entry that cannot be read (an
    /// unreadable directory, a dangling or cyclic link) is reported to `sink`
    /// and left out together with its subtree; siblings are still visited. Order follows the filesystem and carries no meaning.
    pub fn walk(&self, sink: &dyn DiagnosticSink) -> Vec<PathBuf> {
        let mut files = Vec::new();

        let walker = WalkDir::new(&self.root)
            .follow_links(self.options.follow_symlinks)
            .into_iter()
            .filter_entry(|entry| entry.depth() == 0 || !self.should_ignore(entry));

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    let path = e
                        .path()
                        .map(Path::to_path_buf)
                        .unwrap_or_else(|| self.root.clone());
                    sink.warn(Diagnostic::Traversal {
                        path,
                        message: e.to_string(),
                    });
                    continue;
                }
            };

            // `file_type` already reflects the link target when following links
            if entry.file_type().is_file() {
                trace!(path = %entry.path().display(), "Found file");
                files.push(entry.into_path());
            }
        }

        debug!(root = %self.root.display(), files = files.len(), "Walk complete");
        files
    }

    /// Check if an entry's name matches one of the ignore patterns
    fn should_ignore(&self, entry: &DirEntry) -> bool {
        let name = entry.file_name().to_string_lossy();
        self.options
            .ignore_patterns
            .iter()
            .any(|pattern| name == pattern.as_str())
    }
}

/// Convenience wrapper: walk `root` with the given options.
pub fn walk(root: &Path, options: &WalkOptions, sink: &dyn DiagnosticSink) -> Vec<PathBuf> {
    Walker::with_options(root.to_path_buf(), options.clone()).walk(sink)
}
