//! Substring-overlap similarity heuristic.

use crate::substrings::common_substrings;

/// Score the textual overlap of `a` and `b` in `[0, 1]`.
///
/// Sums the lengths of every common substring (overlaps counted each time
/// they occur), divides by the longer length, and scales by a length penalty
/// `1 - |len(a) - len(b)| / max(len)`. The result is clamped to `[0, 1]`.
///
/// This is a hint for the UI, not a metric: it is not guaranteed symmetric
/// and must not be used to decide exact equality.
///
/// # Examples
///
/// ```
/// use proofmark_diff::similarity;
///
/// assert_eq!(similarity("你好世界", "你好世界"), 1.0);
/// assert_eq!(similarity("你好世界", "你好地球"), 0.5);
/// assert_eq!(similarity("hello", ""), 0.0);
/// ```
pub fn similarity(a: &str, b: &str) -> f64 {
    if a == b {
        return 1.0;
    }
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let a_len = a.chars().count();
    let b_len = b.chars().count();
    let max_len = a_len.max(b_len) as f64;

    let common_len: usize = common_substrings(a, b).iter().map(|s| s.length).sum();
    let ratio = common_len as f64 / max_len;
    let penalty = 1.0 - a_len.abs_diff(b_len) as f64 / max_len;

    (ratio * penalty).clamp(0.0, 1.0)
}
