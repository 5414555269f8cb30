use serde::{Deserialize, Serialize};

/// A patch instruction anchored to a char offset in the original text.
///
/// `position` always refers to the original, unedited string, never to text
/// produced by earlier edits in the same list. An empty `old_text` denotes a
/// pure insertion, an empty `new_text` a pure deletion.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionalEdit {
    /// Char offset in the original text where the edit begins.
    #[serde(alias = "pos")]
    pub position: usize,
    /// Text expected at `position`.
    #[serde(default)]
    pub old_text: String,
    /// Replacement text.
    #[serde(default)]
    pub new_text: String,
}

impl PositionalEdit {
    /// Replace `old_text` at `position` with `new_text`.
    pub fn new(position: usize, old_text: impl Into<String>, new_text: impl Into<String>) -> Self {
        Self {
            position,
            old_text: old_text.into(),
            new_text: new_text.into(),
        }
    }

    /// Insert `text` at `position`.
    pub fn insert(position: usize, text: impl Into<String>) -> Self {
        Self::new(position, String::new(), text)
    }

    /// Delete `text` found at `position`.
    pub fn delete(position: usize, text: impl Into<String>) -> Self {
        Self::new(position, text, String::new())
    }

    /// Number of chars this edit removes.
    pub fn old_len(&self) -> usize {
        self.old_text.chars().count()
    }

    /// Number of chars this edit inserts.
    pub fn new_len(&self) -> usize {
        self.new_text.chars().count()
    }

    /// Change in text length caused by this edit.
    pub fn drift(&self) -> isize {
        self.new_len() as isize - self.old_len() as isize
    }

    /// First char offset past the replaced text in original coordinates.
    pub fn old_end(&self) -> usize {
        self.position + self.old_len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drift_counts_chars() {
        let edit = PositionalEdit::insert(9, "此处逻辑不通，");
        assert_eq!(edit.old_len(), 0);
        assert_eq!(edit.new_len(), 7);
        assert_eq!(edit.drift(), 7);

        let edit = PositionalEdit::delete(3, "abc");
        assert_eq!(edit.drift(), -3);
        assert_eq!(edit.old_end(), 6);
    }

    #[test]
    fn decodes_short_field_name() {
        let edit: PositionalEdit =
            serde_json::from_str(r#"{"pos": 6, "oldText": "搓", "newText": "错"}"#).unwrap();
        assert_eq!(edit, PositionalEdit::new(6, "搓", "错"));
    }

    #[test]
    fn missing_texts_default_to_empty() {
        let edit: PositionalEdit = serde_json::from_str(r#"{"position": 4}"#).unwrap();
        assert!(edit.old_text.is_empty());
        assert!(edit.new_text.is_empty());
    }

    #[test]
    fn negative_position_is_rejected_on_decode() {
        let result = serde_json::from_str::<PositionalEdit>(
            r#"{"position": -1, "oldText": "", "newText": "x"}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn encodes_camel_case() {
        let json = serde_json::to_string(&PositionalEdit::new(1, "a", "u")).unwrap();
        assert_eq!(json, r#"{"position":1,"oldText":"a","newText":"u"}"#);
    }
}
