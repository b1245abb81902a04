//! Text utilities for position conversion.
//!
//! Converts between character offsets and LSP positions with proper UTF-16 handling.

use tower_lsp::lsp_types::Position;

/// Pre-computed line index over a character buffer.
///
/// LSP positions use line/column where column is in UTF-16 code units, while
/// the resolver works on character offsets.
#[derive(Debug, Clone)]
pub struct LineIndex {
    /// Character offset where each line starts.
    line_starts: Vec<usize>,
    chars: Vec<char>,
}

impl LineIndex {
    pub fn new(source: &str) -> Self {
        let chars: Vec<char> = source.chars().collect();
        let mut line_starts = vec![0];

        for (i, c) in chars.iter().enumerate() {
            if *c == '\n' {
                line_starts.push(i + 1);
            }
        }

        Self { line_starts, chars }
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Convert a character offset to an LSP position.
    ///
    /// Offsets past the end clamp to the end of the document.
    pub fn offset_to_position(&self, offset: usize) -> Position {
        let offset = offset.min(self.chars.len());
        let line = match self.line_starts.binary_search(&offset) {
            Ok(line) => line,
            Err(line) => line.saturating_sub(1),
        };

        let line_start = self.line_starts[line];
        let col: u32 = self.chars[line_start..offset]
            .iter()
            .map(|c| c.len_utf16() as u32)
            .sum();

        Position::new(line as u32, col)
    }

    /// Convert an LSP position to a character offset.
    ///
    /// Returns None if the line is out of bounds. Columns past the end of the
    /// line clamp to the line end.
    pub fn position_to_offset(&self, position: Position) -> Option<usize> {
        let line = position.line as usize;
        let line_start = *self.line_starts.get(line)?;
        let line_end = self
            .line_starts
            .get(line + 1)
            .map(|&next| next - 1) // Exclude newline
            .unwrap_or(self.chars.len());

        let mut utf16_col = 0u32;
        for (i, c) in self.chars[line_start..line_end].iter().enumerate() {
            if utf16_col >= position.character {
                return Some(line_start + i);
            }
            utf16_col += c.len_utf16() as u32;
        }

        Some(line_end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_line() {
        let idx = LineIndex::new("project(demo)");
        assert_eq!(idx.offset_to_position(0), Position::new(0, 0));
        assert_eq!(idx.offset_to_position(7), Position::new(0, 7));
        assert_eq!(idx.offset_to_position(13), Position::new(0, 13));
    }

    #[test]
    fn multi_line() {
        let idx = LineIndex::new("# c\nset(A 1)\n");
        assert_eq!(idx.offset_to_position(3), Position::new(0, 3));
        assert_eq!(idx.offset_to_position(4), Position::new(1, 0));
        assert_eq!(idx.offset_to_position(8), Position::new(1, 4));
        assert_eq!(idx.offset_to_position(13), Position::new(2, 0));
    }

    #[test]
    fn position_to_offset_multi_line() {
        let idx = LineIndex::new("# c\nset(A 1)");
        assert_eq!(idx.position_to_offset(Position::new(0, 0)), Some(0));
        assert_eq!(idx.position_to_offset(Position::new(1, 0)), Some(4));
        assert_eq!(idx.position_to_offset(Position::new(1, 4)), Some(8));
        // Past end of line clamps
        assert_eq!(idx.position_to_offset(Position::new(0, 40)), Some(3));
    }

    #[test]
    fn utf16_handling() {
        // '😀' is one character but 2 UTF-16 code units
        let idx = LineIndex::new("a😀b");
        assert_eq!(idx.offset_to_position(1), Position::new(0, 1));
        assert_eq!(idx.offset_to_position(2), Position::new(0, 3));
        assert_eq!(idx.position_to_offset(Position::new(0, 3)), Some(2));
    }

    #[test]
    fn out_of_bounds() {
        let idx = LineIndex::new("hello");
        assert_eq!(idx.position_to_offset(Position::new(5, 0)), None);
        assert_eq!(idx.offset_to_position(99), Position::new(0, 5));
    }
}
