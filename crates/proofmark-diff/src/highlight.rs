//! Marked-up rendering of corrected text.

use proofmark_types::SegmentKind;
use serde::{Deserialize, Serialize};

use crate::exact::exact_diff_with;
use crate::options::{DiffAlgorithm, DiffOptions, Granularity};

/// Markers wrapped around every changed span of the corrected text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HighlightStyle {
    pub open: String,
    pub close: String,
}

impl Default for HighlightStyle {
    fn default() -> Self {
        Self {
            open: r#"<span style="text-decoration: underline wavy red;">"#.into(),
            close: "</span>".into(),
        }
    }
}

impl HighlightStyle {
    pub fn new(open: impl Into<String>, close: impl Into<String>) -> Self {
        Self {
            open: open.into(),
            close: close.into(),
        }
    }
}

/// Render `corrected` with each inserted or replaced span wrapped in the
/// style's markers.
///
/// Alignment is Myers at char level. A pure deletion leaves an empty marker
/// pair where the text was removed.
///
/// # Examples
///
/// ```
/// use proofmark_diff::{highlight, HighlightStyle};
///
/// let style = HighlightStyle::new("[", "]");
/// assert_eq!(highlight("发动机技树", "发动机技术", &style), "发动机技[术]");
/// ```
pub fn highlight(original: &str, corrected: &str, style: &HighlightStyle) -> String {
    let options = DiffOptions::literal()
        .with_algorithm(DiffAlgorithm::Myers)
        .with_granularity(Granularity::Coalesced);

    let segments = exact_diff_with(original, corrected, &options);
    let mut out = String::with_capacity(corrected.len());
    for (index, segment) in segments.iter().enumerate() {
        match segment.kind {
            SegmentKind::Unchanged => out.push_str(&segment.text),
            SegmentKind::Addition => {
                out.push_str(&style.open);
                out.push_str(&segment.text);
                out.push_str(&style.close);
            }
            SegmentKind::Deletion => {
                // A coalesced replacement is marked by its addition.
                let replaced = segments
                    .get(index + 1)
                    .is_some_and(|next| next.kind == SegmentKind::Addition);
                if !replaced {
                    out.push_str(&style.open);
                    out.push_str(&style.close);
                }
            }
        }
    }
    out
}
