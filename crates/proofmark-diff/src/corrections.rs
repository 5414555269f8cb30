//! Correction records for the manual-correction view.
//!
//! Each contiguous run of changes becomes one record pairing the removed and
//! inserted text. Runs that only touch whitespace are dropped.

use proofmark_types::{CorrectionKind, CorrectionRecord};
use tracing::trace;

use crate::exact::{change_hunks, exact_diff_with};
use crate::location::LineIndex;
use crate::normalize::{is_blank, is_space};
use crate::options::DiffOptions;

/// Derive correction records between `original` and `revised`.
///
/// `options` selects the algorithm and whitespace handling. Granularity does
/// not matter: contiguous changes are always merged into one record.
pub fn corrections(original: &str, revised: &str, options: &DiffOptions) -> Vec<CorrectionRecord> {
    let options = options.clone().with_unchanged(false);
    let segments = exact_diff_with(original, revised, &options);
    let index = LineIndex::new(original);

    change_hunks(&segments)
        .into_iter()
        .filter(|hunk| {
            let blank = is_blank(&hunk.deleted) && is_blank(&hunk.added);
            if blank {
                trace!(offset = hunk.source.start, "skipping whitespace-only change");
            }
            !blank
        })
        .map(|hunk| CorrectionRecord {
            kind: CorrectionKind::classify(&hunk.deleted, &hunk.added),
            has_whitespace: hunk
                .deleted
                .chars()
                .chain(hunk.added.chars())
                .any(is_space),
            location: index.locate(hunk.source.start),
            source_range: hunk.source,
            target_range: hunk.target,
            original_text: hunk.deleted,
            corrected_text: hunk.added,
        })
        .collect()
}
