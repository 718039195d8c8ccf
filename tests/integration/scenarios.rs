//! End-to-end comparison scenarios

use super::test_utils::{
    compare, paths_different, paths_only_in_first, paths_only_in_second, paths_same, tree,
};
use tempfile::TempDir;

/// A file only on the right is the single difference
#[test]
fn test_scenario_extra_file_in_second() {
    let first = tree(&[("a.txt", "hello")]);
    let second = tree(&[("a.txt", "hello"), ("b.txt", "x")]);

    let (result, sink) = compare(first.path(), second.path());

    assert_eq!(paths_only_in_second(&result), vec!["b.txt"]);
    assert_eq!(paths_same(&result), vec!["a.txt"]);
    assert!(result.details.only_in_first.is_empty());
    assert_eq!(result.counts.total_differences, 1);
    assert_eq!(result.counts.total_files, 2);
    assert!(sink.is_empty());
}

/// Same path, different bytes
#[test]
fn test_scenario_changed_content() {
    let first = tree(&[("a.txt", "hello")]);
    let second = tree(&[("a.txt", "world")]);

    let (result, _) = compare(first.path(), second.path());

    assert_eq!(paths_different(&result), vec!["a.txt"]);
    assert_eq!(result.counts.total_differences, 1);
    assert_eq!(result.counts.total_files, 1);

    let mismatch = &result.details.different_content[0];
    assert_eq!(mismatch.file1.size, 5);
    assert_eq!(mismatch.file2.size, 5);
    assert!(mismatch.file1.absolute_path.ends_with("a.txt"));
    assert_ne!(mismatch.file1.absolute_path, mismatch.file2.absolute_path);
}

/// Two empty roots
#[test]
fn test_scenario_empty_trees() {
    let first = TempDir::new().unwrap();
    let second = TempDir::new().unwrap();

    let (result, _) = compare(first.path(), second.path());

    assert_eq!(result.counts.total_files, 0);
    assert_eq!(result.counts.total_differences, 0);
    assert!(result.is_identical());
}

/// Nested paths are keyed with `/`
#[test]
fn test_scenario_nested_path_uses_neutral_separator() {
    let first = tree(&[("dir/a.txt", "x")]);
    let second = tree(&[("dir/a.txt", "x")]);

    let (result, _) = compare(first.path(), second.path());

    assert_eq!(paths_same(&result), vec!["dir/a.txt"]);
    assert_eq!(result.counts.total_differences, 0);
}

/// Empty directories are not files and never show up
#[test]
fn test_empty_directories_ignored() {
    let first = tree(&[("a.txt", "x")]);
    let second = tree(&[("a.txt", "x")]);
    std::fs::create_dir_all(second.path().join("only").join("dirs")).unwrap();

    let (result, _) = compare(first.path(), second.path());
    assert!(result.is_identical());
    assert_eq!(result.counts.total_files, 1);
}

/// A file on one side and a directory of the same name on the other
#[test]
fn test_file_versus_directory_with_same_name() {
    let first = tree(&[("entry", "file content")]);
    let second = tree(&[("entry/inner.txt", "nested")]);

    let (result, _) = compare(first.path(), second.path());

    assert_eq!(paths_only_in_first(&result), vec!["entry"]);
    assert_eq!(paths_only_in_second(&result), vec!["entry/inner.txt"]);
    assert_eq!(result.counts.total_differences, 2);
}

/// Ignore patterns apply to both sides
#[test]
fn test_ignore_patterns_skip_both_sides() {
    use dircompare::{compare_directories, CompareOptions, NullSink};

    let first = tree(&[("a.txt", "x"), (".git/HEAD", "ref: main")]);
    let second = tree(&[("a.txt", "x"), (".git/HEAD", "ref: other"), (".git/index", "i")]);

    let mut options = CompareOptions::default();
    options.walk.ignore_patterns = vec![".git".to_string()];

    let result = compare_directories(first.path(), second.path(), &options, &NullSink).unwrap();
    assert!(result.is_identical());
    assert_eq!(paths_same(&result), vec!["a.txt"]);
}
