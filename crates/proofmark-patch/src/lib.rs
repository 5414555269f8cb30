//! Change applicator for Proofmark.
//!
//! Replays an ordered list of [`PositionalEdit`]s against the original text.
//! Every edit position refers to the original, unedited string; the
//! applicator tracks the cumulative offset drift caused by earlier edits of
//! different length.
//!
//! # Key Types
//!
//! - [`apply_edits`] / [`ApplyOptions`] -- Rebuild the corrected text
//! - [`edits_from_segments`] -- Turn diff segments into positional edits
//! - [`annotate`] -- Inline `**old[new]**` review markup
//! - [`PatchError`] -- Rejected edit lists
//!
//! [`PositionalEdit`]: proofmark_types::PositionalEdit

pub mod annotate;
pub mod apply;
pub mod derive;
pub mod error;

pub use annotate::annotate;
pub use apply::{apply_edits, apply_edits_with, ApplyOptions};
pub use derive::edits_from_segments;
pub use error::{PatchError, PatchResult};
