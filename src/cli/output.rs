//! CLI output: exit codes and error mapping to a stable CLI surface.

use crate::error::CompareError;
use crate::types::ComparisonResult;

/// Folders are equivalent
pub const EXIT_IDENTICAL: i32 = 0;
/// At least one path differs
pub const EXIT_DIFFERENT: i32 = 1;
/// Usage, validation or configuration error
pub const EXIT_ERROR: i32 = 2;

/// Exit code for a finished comparison.
pub fn exit_code(result: &ComparisonResult) -> i32 {
    if result.is_identical() {
        EXIT_IDENTICAL
    } else {
        EXIT_DIFFERENT
    }
}

/// Map domain errors to a string for CLI output.
pub fn map_error(e: &CompareError) -> String {
    match e {
        CompareError::RootNotFound(path) => {
            format!("Error: folder '{}' does not exist", path.display())
        }
        CompareError::NotADirectory(path) => {
            format!("Error: '{}' is not a directory", path.display())
        }
        other => format!("Error: {}", other),
    }
}
