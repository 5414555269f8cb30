use proofmark_types::LineColumn;

/// Maps char offsets of a text to 0-based line/column pairs.
///
/// A `\n` belongs to the line it terminates; the next char starts a new line
/// at column 0. The offset one past the last char maps to the end position.
#[derive(Clone, Debug)]
pub struct LineIndex {
    /// Char offset at which each line starts. Always begins with 0.
    line_starts: Vec<usize>,
    len: usize,
}

impl LineIndex {
    pub fn new(text: &str) -> Self {
        let mut line_starts = vec![0];
        let mut len = 0;
        for (offset, ch) in text.chars().enumerate() {
            if ch == '\n' {
                line_starts.push(offset + 1);
            }
            len = offset + 1;
        }
        Self { line_starts, len }
    }

    /// Number of lines (a trailing `\n` opens an empty last line).
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Text length in chars.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Locate `offset`. Offsets past the end are clamped to the end.
    pub fn locate(&self, offset: usize) -> LineColumn {
        let offset = offset.min(self.len);
        let line = self.line_starts.partition_point(|&start| start <= offset) - 1;
        LineColumn::new(line, offset - self.line_starts[line])
    }
}
