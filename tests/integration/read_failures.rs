//! Files that cannot be read during comparison are reported as different

use super::test_utils::tree;
use dircompare::compare::{reconcile, ContentOptions};
use dircompare::tree::build_map;
use dircompare::{CollectingSink, Diagnostic, NullSink};
use std::fs;
use std::path::PathBuf;

fn files_of(root: &std::path::Path, names: &[&str]) -> Vec<PathBuf> {
    names.iter().map(|n| root.join(n)).collect()
}

/// A file removed after mapping cannot be read; the pair is different, never same
#[test]
fn test_vanished_file_classified_different() {
    let first = tree(&[("a.txt", "hello"), ("b.txt", "same")]);
    let second = tree(&[("a.txt", "hello"), ("b.txt", "same")]);

    let map_a = build_map(&files_of(first.path(), &["a.txt", "b.txt"]), first.path(), &NullSink);
    let map_b = build_map(&files_of(second.path(), &["a.txt", "b.txt"]), second.path(), &NullSink);

    fs::remove_file(first.path().join("a.txt")).unwrap();

    let sink = CollectingSink::new();
    let diffs = reconcile(&map_a, &map_b, &ContentOptions::default(), &sink);

    assert_eq!(diffs.different_content.len(), 1);
    assert_eq!(diffs.different_content[0].path, "a.txt");
    assert_eq!(diffs.same_content.len(), 1);
    assert_eq!(diffs.same_content[0].path, "b.txt");

    let warnings = sink.into_inner();
    assert_eq!(warnings.len(), 1);
    assert!(matches!(&warnings[0], Diagnostic::Read { path, .. } if path.ends_with("a.txt")));
}

/// A file whose metadata cannot be read is excluded, not forced different
#[test]
fn test_unstattable_file_excluded_from_mapping() {
    let first = tree(&[("a.txt", "hello")]);
    let paths = files_of(first.path(), &["a.txt", "ghost.txt"]);

    let sink = CollectingSink::new();
    let mapping = build_map(&paths, first.path(), &sink);

    assert_eq!(mapping.len(), 1);
    assert!(!mapping.contains_key("ghost.txt"));
    assert!(matches!(&sink.into_inner()[0], Diagnostic::Metadata { .. }));
}

#[cfg(unix)]
#[test]
fn test_unreadable_file_classified_different() {
    use dircompare::{compare_directories, CompareOptions};
    use std::os::unix::fs::PermissionsExt;

    let first = tree(&[("secret.txt", "same bytes")]);
    let second = tree(&[("secret.txt", "same bytes")]);
    let locked = second.path().join("secret.txt");
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

    // Privileged users can read it anyway; nothing to check then
    if fs::read(&locked).is_ok() {
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o644)).unwrap();
        return;
    }

    let sink = CollectingSink::new();
    let result =
        compare_directories(first.path(), second.path(), &CompareOptions::default(), &sink).unwrap();
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o644)).unwrap();

    assert_eq!(result.counts.different_content, 1);
    assert_eq!(result.counts.same_content, 0);
    assert!(sink
        .into_inner()
        .iter()
        .any(|d| matches!(d, Diagnostic::Read { .. })));
}
