//! Properties that hold for every comparison

use super::test_utils::{compare, paths_different, paths_same, tree};
use dircompare::compare::aggregate;
use std::collections::BTreeSet;

/// Comparing a root with itself reports every file as the same
#[test]
fn test_self_comparison_is_all_same() {
    let root = tree(&[
        ("a.txt", "alpha"),
        ("nested/b.txt", "beta"),
        ("nested/deeper/c.bin", "\u{0}\u{1}\u{2}"),
        ("empty.txt", ""),
    ]);

    let (result, sink) = compare(root.path(), root.path());

    assert!(result.details.only_in_first.is_empty());
    assert!(result.details.only_in_second.is_empty());
    assert!(result.details.different_content.is_empty());
    assert_eq!(
        paths_same(&result),
        vec!["a.txt", "empty.txt", "nested/b.txt", "nested/deeper/c.bin"]
    );
    assert!(sink.is_empty());
}

/// Same size, one byte apart
#[test]
fn test_single_byte_difference_detected() {
    let first = tree(&[("data.bin", "0123456789abcdef")]);
    let second = tree(&[("data.bin", "0123456789abcdeF")]);

    let (result, _) = compare(first.path(), second.path());
    assert_eq!(paths_different(&result), vec!["data.bin"]);
    assert!(result.details.same_content.is_empty());
}

/// Identical bytes placed at the same relative path compare equal even when
/// the roots themselves are named differently
#[test]
fn test_identical_bytes_under_different_roots() {
    let first = tree(&[("docs/report.txt", "quarterly numbers")]);
    let second = tree(&[("docs/report.txt", "quarterly numbers")]);

    let (result, _) = compare(first.path(), second.path());
    assert_eq!(paths_same(&result), vec!["docs/report.txt"]);
    assert_eq!(result.details.same_content[0].size, 17);
}

/// Every path of the union lands in exactly one sequence and the counts agree
#[test]
fn test_partition_and_counts() {
    let first = tree(&[
        ("shared/same.txt", "s"),
        ("shared/changed.txt", "v1"),
        ("left/only.txt", "l"),
        ("both_empty.txt", ""),
    ]);
    let second = tree(&[
        ("shared/same.txt", "s"),
        ("shared/changed.txt", "version two"),
        ("right/only.txt", "r"),
        ("both_empty.txt", ""),
    ]);

    let (result, _) = compare(first.path(), second.path());

    let mut seen = BTreeSet::new();
    let details = &result.details;
    let all = details
        .only_in_first
        .iter()
        .map(|e| e.path.clone())
        .chain(details.only_in_second.iter().map(|e| e.path.clone()))
        .chain(details.different_content.iter().map(|e| e.path.clone()))
        .chain(details.same_content.iter().map(|e| e.path.clone()));
    for path in all {
        assert!(seen.insert(path.clone()), "{} classified twice", path);
    }

    let expected: BTreeSet<String> = [
        "shared/same.txt",
        "shared/changed.txt",
        "left/only.txt",
        "right/only.txt",
        "both_empty.txt",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();
    assert_eq!(seen, expected);

    let counts = result.counts;
    assert_eq!(counts, aggregate(details));
    assert_eq!(
        counts.total_files,
        counts.only_in_first + counts.only_in_second + counts.different_content + counts.same_content
    );
    assert_eq!(counts.total_differences, 3);
}

/// Results do not depend on the worker count
#[test]
fn test_worker_count_does_not_change_result() {
    use dircompare::{compare_directories, CompareOptions, NullSink};

    let files: Vec<(String, String)> = (0..40)
        .map(|i| (format!("d{}/f{}.txt", i % 4, i), format!("content {}", i)))
        .collect();
    let borrowed: Vec<(&str, &str)> = files.iter().map(|(p, c)| (p.as_str(), c.as_str())).collect();
    let first = tree(&borrowed);
    let mut changed = borrowed.clone();
    changed[7].1 = "changed";
    changed.truncate(35);
    let second = tree(&changed);

    let single = CompareOptions {
        workers: Some(1),
        ..Default::default()
    };
    let many = CompareOptions {
        workers: Some(8),
        ..Default::default()
    };

    let a = compare_directories(first.path(), second.path(), &single, &NullSink).unwrap();
    let b = compare_directories(first.path(), second.path(), &many, &NullSink).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.counts.only_in_first, 5);
    assert_eq!(a.counts.different_content, 1);
}
