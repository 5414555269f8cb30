//! Inline review markup for an edit list.

use proofmark_types::PositionalEdit;

use crate::error::{PatchError, PatchResult};

/// Render `edits` inline over `original` as `**{old}[{new}]**`, leaving the
/// untouched text verbatim.
///
/// Edits must be sorted and must not start inside the text replaced by the
/// previous edit.
///
/// # Examples
///
/// ```
/// use proofmark_patch::annotate;
/// use proofmark_types::PositionalEdit;
///
/// let marked = annotate("cat", &[PositionalEdit::new(1, "a", "u")]).unwrap();
/// assert_eq!(marked, "c**a[u]**t");
/// ```
pub fn annotate(original: &str, edits: &[PositionalEdit]) -> PatchResult<String> {
    let source: Vec<char> = original.chars().collect();
    let mut out = String::with_capacity(original.len() + edits.len() * 8);
    let mut cursor = 0;

    for (index, edit) in edits.iter().enumerate() {
        if edit.position > source.len() {
            return Err(PatchError::InvalidEditPosition {
                index,
                position: edit.position,
                len: source.len(),
            });
        }
        if edit.position < cursor {
            return Err(PatchError::OverlappingEdit {
                index,
                position: edit.position,
                previous_end: cursor,
            });
        }

        out.extend(&source[cursor..edit.position]);
        out.push_str("**");
        out.push_str(&edit.old_text);
        out.push('[');
        out.push_str(&edit.new_text);
        out.push_str("]**");
        cursor = edit.old_end().min(source.len());
    }

    out.extend(&source[cursor..]);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixture_markup() {
        let original = "这段话有一个搓误，这段话有一段逻辑上的错误，将要修改参数a，结束";
        let edits = [
            PositionalEdit::new(6, "搓", "错"),
            PositionalEdit::insert(9, "此处逻辑不通，"),
            PositionalEdit::new(28, "a", "b"),
            PositionalEdit::new(30, "结束", "完毕"),
        ];
        assert_eq!(
            annotate(original, &edits).unwrap(),
            "这段话有一个**搓[错]**误，**[此处逻辑不通，]**这段话有一段逻辑上的错误，将要修改参数**a[b]**，**结束[完毕]**"
        );
    }

    #[test]
    fn no_edits_is_verbatim() {
        assert_eq!(annotate("unchanged", &[]).unwrap(), "unchanged");
    }

    #[test]
    fn deletion_and_append() {
        let edits = [PositionalEdit::delete(0, "the "), PositionalEdit::insert(7, "!")];
        assert_eq!(annotate("the end", &edits).unwrap(), "**the []**end**[!]**");
    }

    #[test]
    fn overlapping_edit_is_rejected() {
        let edits = [PositionalEdit::new(0, "abc", "X"), PositionalEdit::new(2, "c", "Y")];
        assert_eq!(
            annotate("abcd", &edits).unwrap_err(),
            PatchError::OverlappingEdit {
                index: 1,
                position: 2,
                previous_end: 3
            }
        );
    }

    #[test]
    fn position_past_end_is_rejected() {
        let err = annotate("ab", &[PositionalEdit::insert(3, "x")]).unwrap_err();
        assert!(matches!(err, PatchError::InvalidEditPosition { position: 3, len: 2, .. }));
    }
}
