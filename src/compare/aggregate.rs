//! Summary counts over a difference set

use crate::types::{Counts, DifferenceSet};

/// Count each classification. Pure function of the four sequence lengths.
pub fn aggregate(diffs: &DifferenceSet) -> Counts {
    let only_in_first = diffs.only_in_first.len();
    let only_in_second = diffs.only_in_second.len();
    let different_content = diffs.different_content.len();
    let same_content = diffs.same_content.len();
    let total_differences = only_in_first + only_in_second + different_content;

    Counts {
        only_in_first,
        only_in_second,
        different_content,
        same_content,
        total_differences,
        total_files: total_differences + same_content,
    }
}
