//! Relative keys never merge two distinct files of one tree

use super::test_utils::{compare, paths_only_in_first, paths_same, tree};
use std::fs;

/// Names that differ only in bytes outside UTF-8 stay separate files
#[cfg(unix)]
#[test]
fn test_non_utf8_names_are_not_merged() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let first = tree(&[]);
    let second = tree(&[]);
    let name_ff = OsStr::from_bytes(b"\xff.bin");
    let name_fe = OsStr::from_bytes(b"\xfe.bin");
    // Some filesystems reject names that are not UTF-8
    if fs::write(first.path().join(name_ff), "same").is_err() {
        return;
    }
    fs::write(first.path().join(name_fe), "same").unwrap();
    fs::write(second.path().join(name_ff), "same").unwrap();

    let (result, sink) = compare(first.path(), second.path());

    assert_eq!(paths_same(&result), vec!["\\xFF.bin"]);
    assert_eq!(paths_only_in_first(&result), vec!["\\xFE.bin"]);
    assert_eq!(result.counts.total_files, 2);
    assert!(!result.is_identical());
    assert!(sink.is_empty());
}

/// Composed and decomposed spellings of one name are two files on Linux
#[test]
fn test_normalization_variants_both_counted() {
    let first = tree(&[("caf\u{00e9}.txt", "composed"), ("cafe\u{0301}.txt", "decomposed")]);
    let second = tree(&[]);

    // Filesystems that normalize names keep only one of them
    if fs::read_dir(first.path()).unwrap().count() < 2 {
        return;
    }

    let (result, sink) = compare(first.path(), second.path());

    assert_eq!(result.counts.only_in_first, 2);
    assert_eq!(result.counts.total_files, 2);
    assert!(sink.is_empty());
}

/// A lone decomposed name still matches its composed twin in the other tree
#[test]
fn test_normalization_matches_across_trees() {
    let first = tree(&[("cafe\u{0301}.txt", "same")]);
    let second = tree(&[("caf\u{00e9}.txt", "same")]);

    let (result, _) = compare(first.path(), second.path());

    assert_eq!(paths_same(&result), vec!["caf\u{00e9}.txt"]);
    assert!(result.is_identical());
}

/// With both spellings on the left, each one pairs with its exact twin
#[test]
fn test_normalization_variants_pair_with_exact_spelling() {
    let first = tree(&[("caf\u{00e9}.txt", "composed"), ("cafe\u{0301}.txt", "decomposed")]);
    let second = tree(&[("caf\u{00e9}.txt", "composed")]);

    if fs::read_dir(first.path()).unwrap().count() < 2 {
        return;
    }

    let (result, _) = compare(first.path(), second.path());

    assert_eq!(paths_same(&result), vec!["caf\u{00e9}.txt"]);
    assert_eq!(paths_only_in_first(&result), vec!["cafe\u{0301}.txt"]);
    assert_eq!(result.counts.total_files, 2);
}
