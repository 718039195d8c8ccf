//! Reconciler: classify every relative path of two mappings

use crate::compare::content::{contents_differ, ContentOptions};
use crate::diagnostics::DiagnosticSink;
use crate::types::{ContentMatch, ContentMismatch, DifferenceSet, FileEntry, OneSidedEntry, PathMapping};
use rayon::prelude::*;
use tracing::debug;

/// Which sides a relative path was found on
#[derive(Debug, Clone, Copy)]
enum Presence<'a> {
    First(&'a FileEntry),
    Second(&'a FileEntry),
    Both(&'a FileEntry, &'a FileEntry),
}

impl Presence<'_> {
    fn path(&self) -> &str {
        match self {
            Presence::First(entry) | Presence::Second(entry) | Presence::Both(entry, _) => {
                &entry.relative_path
            }
        }
    }
}

/// Terminal state of one relative path
#[derive(Debug)]
enum Classification {
    OnlyInFirst(OneSidedEntry),
    OnlyInSecond(OneSidedEntry),
    Different(ContentMismatch),
    Same(ContentMatch),
}

/// Classify every path in the union of `first` and `second`.
///
/// Paths are independent, so classification runs in parallel on the current
/// rayon pool (call inside `ThreadPool::install` to bound it). Each task
/// returns its result and the four sequences are assembled afterwards, in
/// relative-path order. Content is only read for paths present on both sides.
pub fn reconcile(
    first: &PathMapping,
    second: &PathMapping,
    options: &ContentOptions,
    sink: &dyn DiagnosticSink,
) -> DifferenceSet {
    let union = path_union(first, second);
    debug!(paths = union.len(), "Reconciling");

    let classified: Vec<Classification> = union
        .par_iter()
        .map(|presence| classify(*presence, options, sink))
        .collect();

    let mut diffs = DifferenceSet::default();
    for classification in classified {
        match classification {
            Classification::OnlyInFirst(entry) => diffs.only_in_first.push(entry),
            Classification::OnlyInSecond(entry) => diffs.only_in_second.push(entry),
            Classification::Different(mismatch) => diffs.different_content.push(mismatch),
            Classification::Same(matched) => diffs.same_content.push(matched),
        }
    }

    diffs
}

/// Every relative path of either mapping, once, in path order.
fn path_union<'a>(first: &'a PathMapping, second: &'a PathMapping) -> Vec<Presence<'a>> {
    let mut union: Vec<Presence<'a>> = first
        .iter()
        .map(|(path, a)| match second.get(path) {
            Some(b) => Presence::Both(a, b),
            None => Presence::First(a),
        })
        .collect();

    union.extend(
        second
            .iter()
            .filter(|(path, _)| !first.contains_key(*path))
            .map(|(_, b)| Presence::Second(b)),
    );

    union.sort_by(|x, y| x.path().cmp(y.path()));
    union
}

fn classify(presence: Presence<'_>, options: &ContentOptions, sink: &dyn DiagnosticSink) -> Classification {
    match presence {
        Presence::Both(a, b) => {
            if contents_differ(&a.absolute_path, &b.absolute_path, options, sink) {
                Classification::Different(ContentMismatch {
                    path: a.relative_path.clone(),
                    file1: a.clone(),
                    file2: b.clone(),
                })
            } else {
                Classification::Same(ContentMatch {
                    path: a.relative_path.clone(),
                    size: a.size,
                })
            }
        }
        Presence::First(a) => Classification::OnlyInFirst(a.into()),
        Presence::Second(b) => Classification::OnlyInSecond(b.into()),
    }
}
