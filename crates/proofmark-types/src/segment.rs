use std::fmt;

use serde::{Deserialize, Serialize};

use crate::range::TextRange;

/// Classification of a diff segment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmentKind {
    /// Text present in both strings.
    Unchanged,
    /// Text present only in the original string.
    Deletion,
    /// Text present only in the revised string.
    Addition,
}

impl SegmentKind {
    /// Returns `true` for deletions and additions.
    pub fn is_change(&self) -> bool {
        !matches!(self, SegmentKind::Unchanged)
    }
}

impl fmt::Display for SegmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SegmentKind::Unchanged => "unchanged",
            SegmentKind::Deletion => "deletion",
            SegmentKind::Addition => "addition",
        };
        f.write_str(name)
    }
}

/// One unit of output from the exact diff engine.
///
/// `source` indexes the original string and `target` the revised one. A
/// deletion has an empty `target` (the point where the text disappeared), an
/// addition has an empty `source` (the insertion point). Segments are
/// immutable values computed fresh per diff call.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiffSegment {
    /// Segment classification.
    pub kind: SegmentKind,
    /// The deleted, added, or shared text.
    pub text: String,
    /// Range in the original string.
    #[serde(rename = "sourceRange")]
    pub source: TextRange,
    /// Range in the revised string.
    #[serde(rename = "targetRange")]
    pub target: TextRange,
}

impl DiffSegment {
    /// An unchanged run spanning `source` and `target`.
    pub fn unchanged(text: impl Into<String>, source: TextRange, target: TextRange) -> Self {
        Self {
            kind: SegmentKind::Unchanged,
            text: text.into(),
            source,
            target,
        }
    }

    /// A deletion of `source` from the original, collapsing to the point
    /// `at` in the revised string.
    pub fn deletion(text: impl Into<String>, source: TextRange, at: usize) -> Self {
        Self {
            kind: SegmentKind::Deletion,
            text: text.into(),
            source,
            target: TextRange::point(at),
        }
    }

    /// An addition of `target` into the revised string, inserted at the
    /// point `at` in the original.
    pub fn addition(text: impl Into<String>, at: usize, target: TextRange) -> Self {
        Self {
            kind: SegmentKind::Addition,
            text: text.into(),
            source: TextRange::point(at),
            target,
        }
    }

    /// Returns `true` if this segment is a deletion or addition.
    pub fn is_change(&self) -> bool {
        self.kind.is_change()
    }

    /// Number of chars in the segment text.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}
