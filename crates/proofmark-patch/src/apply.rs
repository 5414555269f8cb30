//! Positional edit replay with offset-drift tracking.

use proofmark_types::PositionalEdit;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::{PatchError, PatchResult};

/// Configuration for [`apply_edits_with`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApplyOptions {
    /// Reject edits whose `old_text` is not found at their position in the
    /// original text.
    pub verify_old_text: bool,
}

impl ApplyOptions {
    /// Options with `old_text` verification turned on.
    pub fn verified() -> Self {
        Self {
            verify_old_text: true,
        }
    }
}

/// Apply `edits` to `original` and return the patched text.
///
/// Edits are replayed in list order. Each one lands at its original-string
/// position shifted by the drift accumulated so far, replaces as many chars
/// as its `old_text` holds, and adds `new_len - old_len` to the drift.
///
/// Edits are trusted to be sorted by position and non-overlapping in
/// original coordinates; nothing re-sorts them. Overlapping edits give an
/// unspecified but deterministic left-to-right result.
///
/// Positions are validated against the original text before any edit is
/// applied: a position past its end fails with
/// [`PatchError::InvalidEditPosition`] and is never clamped.
///
/// Not idempotent: applying the same list to its own output re-interprets
/// the positions against text they were not computed for.
///
/// # Examples
///
/// ```
/// use proofmark_patch::apply_edits;
/// use proofmark_types::PositionalEdit;
///
/// let out = apply_edits("cat", &[PositionalEdit::new(1, "a", "u")]).unwrap();
/// assert_eq!(out, "cut");
/// ```
pub fn apply_edits(original: &str, edits: &[PositionalEdit]) -> PatchResult<String> {
    apply_edits_with(original, edits, &ApplyOptions::default())
}

/// Apply `edits` to `original` with explicit options.
pub fn apply_edits_with(
    original: &str,
    edits: &[PositionalEdit],
    options: &ApplyOptions,
) -> PatchResult<String> {
    let source: Vec<char> = original.chars().collect();
    validate(&source, edits, options)?;

    let mut buffer = source;
    let mut drift: isize = 0;
    for (index, edit) in edits.iter().enumerate() {
        // Only reachable below zero or past the end with overlapping edits.
        let start = edit
            .position
            .checked_add_signed(drift)
            .unwrap_or(0)
            .min(buffer.len());
        let end = (start + edit.old_len()).min(buffer.len());
        buffer.splice(start..end, edit.new_text.chars());
        drift += edit.drift();
        trace!(index, position = edit.position, effective = start, drift, "applied edit");
    }

    debug!(edits = edits.len(), drift, "applied positional edits");
    Ok(buffer.into_iter().collect())
}

fn validate(source: &[char], edits: &[PositionalEdit], options: &ApplyOptions) -> PatchResult<()> {
    for (index, edit) in edits.iter().enumerate() {
        if edit.position > source.len() {
            return Err(PatchError::InvalidEditPosition {
                index,
                position: edit.position,
                len: source.len(),
            });
        }
        if options.verify_old_text {
            let end = edit.old_end().min(source.len());
            let found: String = source[edit.position..end].iter().collect();
            if found != edit.old_text {
                return Err(PatchError::OldTextMismatch {
                    index,
                    position: edit.position,
                    expected: edit.old_text.clone(),
                    found,
                });
            }
        }
    }
    Ok(())
}
