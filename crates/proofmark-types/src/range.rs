use std::fmt;
use std::ops::Range;

use serde::{Deserialize, Serialize};

/// A half-open `[start, end)` range of char offsets.
///
/// An empty range (`start == end`) marks an insertion point.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(try_from = "RawRange")]
pub struct TextRange {
    /// First char offset covered by the range.
    pub start: usize,
    /// One past the last char offset covered by the range.
    pub end: usize,
}

impl TextRange {
    /// Create a range covering `[start, end)`.
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "range start {start} is past end {end}");
        Self { start, end }
    }

    /// An empty range at `offset`.
    pub const fn point(offset: usize) -> Self {
        Self {
            start: offset,
            end: offset,
        }
    }

    /// Number of chars covered.
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns `true` if the range covers no chars.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns `true` if `offset` falls inside the range.
    pub fn contains(&self, offset: usize) -> bool {
        self.start <= offset && offset < self.end
    }

    /// The equivalent `std` range.
    pub fn as_range(&self) -> Range<usize> {
        self.start..self.end
    }
}

#[derive(Deserialize)]
struct RawRange {
    start: usize,
    end: usize,
}

impl TryFrom<RawRange> for TextRange {
    type Error = String;

    fn try_from(raw: RawRange) -> Result<Self, Self::Error> {
        if raw.start > raw.end {
            return Err(format!("range start {} is past end {}", raw.start, raw.end));
        }
        Ok(Self {
            start: raw.start,
            end: raw.end,
        })
    }
}

impl fmt::Debug for TextRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

impl fmt::Display for TextRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

impl From<Range<usize>> for TextRange {
    fn from(range: Range<usize>) -> Self {
        Self::new(range.start, range.end)
    }
}
