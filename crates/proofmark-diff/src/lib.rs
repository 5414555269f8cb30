//! Exact diff engine for Proofmark.
//!
//! Computes a character-level alignment between an original and a revised
//! string and classifies the differences as deletions and additions anchored
//! at precise char offsets in both strings. Also provides the whitespace
//! normalizer and the substring-based similarity heuristic used for
//! equality checks and fuzzy-match hinting.
//!
//! # Key Types
//!
//! - [`exact_diff`] / [`DiffOptions`] -- Ordered [`DiffSegment`] output
//! - [`coalesce`] / [`change_hunks`] -- Collapse single-char segments into hunks
//! - [`corrections`] -- Display-ready [`CorrectionRecord`]s
//! - [`highlight`] / [`HighlightStyle`] -- Marked-up corrected text
//! - [`similarity`] / [`common_substrings`] -- Overlap heuristic
//! - [`normalize`] -- Whitespace canonicalization
//!
//! [`DiffSegment`]: proofmark_types::DiffSegment
//! [`CorrectionRecord`]: proofmark_types::CorrectionRecord

pub mod corrections;
pub mod exact;
pub mod highlight;
pub mod location;
pub mod normalize;
pub mod options;
pub mod similarity;
pub mod substrings;

pub use corrections::corrections;
pub use exact::{change_hunks, coalesce, exact_diff, exact_diff_with, ChangeHunk};
pub use highlight::{highlight, HighlightStyle};
pub use location::LineIndex;
pub use normalize::{is_blank, is_space, normalize, whitespace_equivalent};
pub use options::{DiffAlgorithm, DiffOptions, Granularity};
pub use similarity::similarity;
pub use substrings::{common_substrings, CommonSubstring, MIN_COMMON_LEN};
