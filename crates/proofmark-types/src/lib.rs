//! Foundation types for Proofmark.
//!
//! Plain value types exchanged between the diff engine, the change
//! applicator, and the collaborators that persist or render them. Every
//! offset in this crate counts `char`s (Unicode scalar values), not bytes.
//!
//! # Key Types
//!
//! - [`TextRange`] — Half-open `[start, end)` char range
//! - [`DiffSegment`] / [`SegmentKind`] — One unit of diff engine output
//! - [`PositionalEdit`] — Patch instruction anchored in the original text
//! - [`CorrectionRecord`] / [`CorrectionKind`] — Display-ready correction
//! - [`LineColumn`] — 0-based line and column of an offset

pub mod correction;
pub mod edit;
pub mod range;
pub mod segment;

pub use correction::{CorrectionKind, CorrectionRecord, LineColumn};
pub use edit::PositionalEdit;
pub use range::TextRange;
pub use segment::{DiffSegment, SegmentKind};
