//! Positional edits from diff segments.

use proofmark_diff::change_hunks;
use proofmark_types::{DiffSegment, PositionalEdit};

/// Turn diff segments into one positional edit per contiguous change.
///
/// Each edit is anchored at the hunk's start in the original string, so the
/// result can be replayed with [`apply_edits`](crate::apply_edits) to rebuild
/// the revised string. Accepts either granularity; unchanged segments are
/// ignored.
///
/// # Examples
///
/// ```
/// use proofmark_diff::exact_diff;
/// use proofmark_patch::{apply_edits, edits_from_segments};
///
/// let edits = edits_from_segments(&exact_diff("hello world", "hello there"));
/// assert_eq!(edits.len(), 1);
/// assert_eq!(edits[0].position, 6);
/// assert_eq!(apply_edits("hello world", &edits).unwrap(), "hello there");
/// ```
pub fn edits_from_segments(segments: &[DiffSegment]) -> Vec<PositionalEdit> {
    change_hunks(segments)
        .into_iter()
        .map(|hunk| PositionalEdit::new(hunk.source.start, hunk.deleted, hunk.added))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::apply::apply_edits;
    use proofmark_diff::{exact_diff_with, DiffAlgorithm, DiffOptions};

    #[test]
    fn fixture_diff_replays_to_preview() {
        let original = "这段话有一个搓误，这段话有一段逻辑上的错误，将要修改参数a，结束";
        let preview = "这段话有一个错误，此处逻辑不通，这段话有一段逻辑上的错误，将要修改参数b，完毕";
        let options = DiffOptions::default().with_algorithm(DiffAlgorithm::Myers);
        let edits = edits_from_segments(&exact_diff_with(original, preview, &options));

        assert_eq!(edits[0], PositionalEdit::new(6, "搓", "错"));
        assert_eq!(apply_edits(original, &edits).unwrap(), preview);
    }

    #[test]
    fn pure_insertion_and_deletion() {
        let options = DiffOptions::default();
        let edits = edits_from_segments(&exact_diff_with("hello", "hello world", &options));
        assert_eq!(edits, vec![PositionalEdit::insert(5, " world")]);

        let edits = edits_from_segments(&exact_diff_with("hello world", "hello", &options));
        assert_eq!(edits, vec![PositionalEdit::delete(5, " world")]);
    }

    #[test]
    fn no_segments_no_edits() {
        assert!(edits_from_segments(&[]).is_empty());
    }

    #[test]
    fn unchanged_segments_are_ignored() {
        let segments = exact_diff_with("cat", "cut", &DiffOptions::literal());
        assert_eq!(
            edits_from_segments(&segments),
            vec![PositionalEdit::new(1, "a", "u")]
        );
    }
}
