//! Error types for the patch crate.

/// Errors that reject an edit list. `index` is the edit's position in the
/// list; `position` its char offset in the original text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PatchError {
    /// The edit starts outside `[0, len]` of the original text.
    #[error("invalid edit position {position} in edit #{index}: original text has {len} chars")]
    InvalidEditPosition {
        index: usize,
        position: usize,
        len: usize,
    },

    /// The original text at the edit position is not the edit's `old_text`.
    #[error("edit #{index} expected {expected:?} at position {position}, found {found:?}")]
    OldTextMismatch {
        index: usize,
        position: usize,
        expected: String,
        found: String,
    },

    /// The edit starts inside the text replaced by the previous edit.
    #[error("edit #{index} at position {position} overlaps the previous edit ending at {previous_end}")]
    OverlappingEdit {
        index: usize,
        position: usize,
        previous_end: usize,
    },
}

/// Convenience alias for patch results.
pub type PatchResult<T> = Result<T, PatchError>;
