//! Path mapper: absolute file paths -> relative-path keyed mapping

use crate::diagnostics::{Diagnostic, DiagnosticSink};
use crate::tree::path::{normalize_key, raw_relative_path};
use crate::types::{FileEntry, PathMapping};
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

/// Build the mapping for one root.
///
/// Each file is keyed by its NFC relative path and carries its size and
/// modification time. When several files of this tree normalize to the same
/// key (a composed and a decomposed spelling of one name), each keeps its
/// unnormalized key instead. A file whose metadata cannot be read is dropped
/// and reported, and so is a file whose key is still taken after that.
/// The same path listed twice is mapped once.
pub fn build_map(paths: &[PathBuf], root: &Path, sink: &dyn DiagnosticSink) -> PathMapping {
    // NFC key -> (path, unnormalized key), in walk order
    let mut groups: BTreeMap<String, Vec<(&PathBuf, String)>> = BTreeMap::new();

    for path in paths {
        let Some(raw) = raw_relative_path(path, root) else {
            trace!(path = %path.display(), root = %root.display(), "Path not beneath root");
            continue;
        };

        let group = groups.entry(normalize_key(&raw)).or_default();
        group.retain(|(seen, _)| *seen != path);
        group.push((path, raw));
    }

    let mut mapping = PathMapping::new();
    for (key, group) in groups {
        if let [(path, _)] = group.as_slice() {
            insert_entry(&mut mapping, key, path, sink);
            continue;
        }

        debug!(key = %key, files = group.len(), "Names differ only in normalization");
        for (path, raw) in group {
            if let Some(taken) = mapping.get(&raw) {
                sink.warn(Diagnostic::Collision {
                    path: path.clone(),
                    message: format!(
                        "key '{}' already used by {}",
                        raw,
                        taken.absolute_path.display()
                    ),
                });
                continue;
            }
            insert_entry(&mut mapping, raw, path, sink);
        }
    }

    debug!(root = %root.display(), entries = mapping.len(), "Mapping built");
    mapping
}

fn insert_entry(mapping: &mut PathMapping, key: String, path: &Path, sink: &dyn DiagnosticSink) {
    let metadata = match std::fs::metadata(path) {
        Ok(metadata) => metadata,
        Err(e) => {
            sink.warn(Diagnostic::Metadata {
                path: path.to_path_buf(),
                message: e.to_string(),
            });
            return;
        }
    };

    // Modification time is informational only; fall back to the epoch.
    let modified_time = metadata
        .modified()
        .map(DateTime::<Utc>::from)
        .unwrap_or(DateTime::<Utc>::UNIX_EPOCH);

    mapping.insert(
        key.clone(),
        FileEntry {
            relative_path: key,
            absolute_path: path.to_path_buf(),
            size: metadata.len(),
            modified_time,
        },
    );
}
