use std::fmt;

use serde::{Deserialize, Serialize};

use crate::range::TextRange;

/// A 0-based line and column (in chars) inside a text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LineColumn {
    pub line: usize,
    pub column: usize,
}

impl LineColumn {
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for LineColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Rendered 1-based for humans.
        write!(f, "{}:{}", self.line + 1, self.column + 1)
    }
}

/// What a correction did to the original text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CorrectionKind {
    Insertion,
    Deletion,
    Replacement,
}

impl CorrectionKind {
    /// Classify a correction by which sides carry text.
    pub fn classify(original_text: &str, corrected_text: &str) -> Self {
        match (original_text.is_empty(), corrected_text.is_empty()) {
            (true, _) => CorrectionKind::Insertion,
            (false, true) => CorrectionKind::Deletion,
            (false, false) => CorrectionKind::Replacement,
        }
    }
}

impl fmt::Display for CorrectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CorrectionKind::Insertion => "insertion",
            CorrectionKind::Deletion => "deletion",
            CorrectionKind::Replacement => "replacement",
        };
        f.write_str(name)
    }
}

/// A display-ready correction derived from diff segments.
///
/// Pairs the original span with the corrected span and locates both: the
/// source range and line/column in the original text, the target range in
/// the corrected document (used for highlighting).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CorrectionRecord {
    pub kind: CorrectionKind,
    pub original_text: String,
    pub corrected_text: String,
    /// Whether either side contains a space or line break.
    pub has_whitespace: bool,
    /// Line and column of `source_range.start` in the original text.
    pub location: LineColumn,
    pub source_range: TextRange,
    pub target_range: TextRange,
}
