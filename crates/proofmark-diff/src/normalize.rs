//! Whitespace canonicalization.
//!
//! Only used to decide whether two strings differ meaningfully. Normalized
//! text is never handed back to a caller as content.

/// Canonicalize whitespace: fold every run of whitespace (CRLF, LF, tabs,
/// ideographic spaces, ...) into a single ASCII space and trim both ends.
///
/// # Examples
///
/// ```
/// use proofmark_diff::normalize;
///
/// assert_eq!(normalize("  hello \r\n\t world  "), "hello world");
/// assert_eq!(normalize(""), "");
/// ```
pub fn normalize(text: &str) -> String {
    words(text).collect::<Vec<_>>().join(" ")
}

/// Unicode whitespace plus U+FEFF, which byte-order marks pasted into
/// documents leave behind.
pub fn is_space(c: char) -> bool {
    c.is_whitespace() || c == '\u{FEFF}'
}

/// Returns `true` if `text` normalizes to the empty string.
pub fn is_blank(text: &str) -> bool {
    text.chars().all(is_space)
}

/// Returns `true` if `a` and `b` normalize to the same text.
///
/// Equivalent to `normalize(a) == normalize(b)` without allocating.
pub fn whitespace_equivalent(a: &str, b: &str) -> bool {
    words(a).eq(words(b))
}

fn words<'a>(text: &'a str) -> impl Iterator<Item = &'a str> + 'a {
    text.split(is_space).filter(|word| !word.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_runs_and_trims() {
        assert_eq!(normalize("  hello  world  "), "hello world");
        assert_eq!(normalize("hello\tworld"), "hello world");
        assert_eq!(normalize("hello    world"), "hello world");
    }

    #[test]
    fn crlf_becomes_single_space() {
        assert_eq!(normalize("hello\r\nworld"), "hello world");
        assert_eq!(normalize("line one\r\n\r\nline two"), "line one line two");
    }

    #[test]
    fn chinese_text() {
        assert_eq!(normalize("  你好  世界  "), "你好 世界");
        assert_eq!(normalize("你好\r\n世界"), "你好 世界");
        // U+3000 IDEOGRAPHIC SPACE
        assert_eq!(normalize("你好\u{3000}世界"), "你好 世界");
    }

    #[test]
    fn empty_and_blank() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize(" \n\t "), "");
        assert!(is_blank(""));
        assert!(is_blank("  \r\n"));
        assert!(!is_blank(" a "));
    }

    #[test]
    fn byte_order_mark_is_whitespace() {
        assert_eq!(normalize("\u{FEFF}a\u{FEFF}b"), "a b");
        assert!(is_blank("\u{FEFF} "));
        assert!(whitespace_equivalent("a\u{FEFF}b", "a b"));
    }

    #[test]
    fn idempotent() {
        let once = normalize(" a \n\n b\tc ");
        assert_eq!(normalize(&once), once);
    }

    #[test]
    fn equivalence_matches_normalize() {
        assert!(whitespace_equivalent("hello  world", "hello world"));
        assert!(whitespace_equivalent("line one\n\nline two", "line one\nline two"));
        assert!(whitespace_equivalent("", "   "));
        assert!(!whitespace_equivalent("helloworld", "hello world"));
        assert!(!whitespace_equivalent("cat", "cut"));
    }
}
