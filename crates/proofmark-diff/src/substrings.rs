//! Exhaustive common-substring enumeration.
//!
//! Records every substring of `a` (at least [`MIN_COMMON_LEN`] chars) at
//! every offset where it occurs verbatim in `b`. Overlapping and redundant
//! entries are kept. Worst case is cubic in the input lengths, which is fine
//! for correction spans but not for whole documents.

/// Shortest substring considered "common". Single-char coincidences are not.
pub const MIN_COMMON_LEN: usize = 2;

/// A substring shared by both inputs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommonSubstring {
    pub text: String,
    /// Length in chars.
    pub length: usize,
    /// Char offset of the match in `a`.
    pub a_start: usize,
    /// Char offset of the match in `b`.
    pub b_start: usize,
}

/// Enumerate the common substrings of `a` and `b`, longest first.
///
/// Entries of equal length keep their discovery order (ascending `a_start`,
/// then ascending length, then ascending `b_start`).
pub fn common_substrings(a: &str, b: &str) -> Vec<CommonSubstring> {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let mut found = Vec::new();

    for start in 0..a.len() {
        for end in start + MIN_COMMON_LEN..=a.len() {
            let needle = &a[start..end];
            let mut matched = false;
            for (b_start, window) in b.windows(needle.len()).enumerate() {
                if window == needle {
                    matched = true;
                    found.push(CommonSubstring {
                        text: needle.iter().collect(),
                        length: needle.len(),
                        a_start: start,
                        b_start,
                    });
                }
            }
            // Any extension of an absent needle is absent too.
            if !matched {
                break;
            }
        }
    }

    // Stable: ties stay in discovery order.
    found.sort_by(|x, y| y.length.cmp(&x.length));
    found
}
