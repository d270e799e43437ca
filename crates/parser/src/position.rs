//! Offset and line/character conversion.
//! Line terminators (`\n` or `\r\n`) belong to the line they end,
//! so a line's length includes its terminator.

use super::{Position, Range};

/// Precomputed line start table for one source string.
#[derive(Debug, Clone)]
pub struct LineIndex {
    /// offset of the first byte of every line, always starts with 0
    line_offsets: Vec<usize>,
    len: usize,
}

impl LineIndex {
    pub fn new(source: &str) -> Self {
        let mut line_offsets = vec![0];
        line_offsets.extend(source.match_indices('\n').map(|(i, _)| i + 1));
        Self {
            line_offsets,
            len: source.len(),
        }
    }

    pub fn line_count(&self) -> usize {
        self.line_offsets.len()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Maps an offset, clamped to `[0, len]`, to its line and character.
    pub fn position_at(&self, offset: usize) -> Position {
        let offset = offset.min(self.len);
        // line_offsets[0] == 0 so at least one line start is <= offset
        let line = self.line_offsets.partition_point(|&o| o <= offset) - 1;
        Position {
            line,
            character: offset - self.line_offsets[line],
        }
    }

    /// Inverse of [`position_at`](Self::position_at).
    /// `character` is clamped to the line's length and an unknown line maps to 0.
    pub fn offset_at(&self, position: Position) -> usize {
        let line_start = match self.line_offsets.get(position.line) {
            Some(&o) => o,
            None => return 0,
        };
        let next_line_start = self
            .line_offsets
            .get(position.line + 1)
            .copied()
            .unwrap_or(self.len);
        (line_start + position.character).min(next_line_start)
    }

    /// Position reached after moving `n` bytes forward from `position`.
    pub fn advance(&self, position: Position, n: usize) -> Position {
        self.position_at(self.offset_at(position) + n)
    }

    pub fn range_of(&self, start: usize, end: usize) -> Range {
        Range {
            start: self.position_at(start),
            end: self.position_at(end),
        }
    }

    /// Source text covered by `range`, or the empty string for an inverted range.
    pub fn text_in<'a>(&self, source: &'a str, range: &Range) -> &'a str {
        let start = self.offset_at(range.start);
        let end = self.offset_at(range.end);
        source.get(start..end).unwrap_or("")
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_single_line() {
        let index = LineIndex::new("hello");
        assert_eq!(index.line_count(), 1);
        assert_eq!(index.position_at(0), Position::new(0, 0));
        assert_eq!(index.position_at(5), Position::new(0, 5));
        // clamped
        assert_eq!(index.position_at(100), Position::new(0, 5));
    }

    #[test]
    fn test_multi_line() {
        let src = "ab\ncd\r\nef";
        let index = LineIndex::new(src);
        assert_eq!(index.line_count(), 3);
        assert_eq!(index.position_at(2), Position::new(0, 2));
        assert_eq!(index.position_at(3), Position::new(1, 0));
        assert_eq!(index.position_at(5), Position::new(1, 2));
        assert_eq!(index.position_at(6), Position::new(1, 3));
        assert_eq!(index.position_at(7), Position::new(2, 0));
        assert_eq!(index.position_at(9), Position::new(2, 2));
    }

    #[test]
    fn test_offset_at_clamps() {
        let index = LineIndex::new("ab\ncd");
        assert_eq!(index.offset_at(Position::new(0, 1)), 1);
        // character overflowing the line stops at next line start
        assert_eq!(index.offset_at(Position::new(0, 42)), 3);
        assert_eq!(index.offset_at(Position::new(1, 42)), 5);
        assert_eq!(index.offset_at(Position::new(7, 1)), 0);
    }

    #[test]
    fn test_round_trip() {
        let src = "<div>\n  {{ a }}\r\n</div>\n";
        let index = LineIndex::new(src);
        for offset in 0..=src.len() {
            assert_eq!(index.offset_at(index.position_at(offset)), offset);
        }
    }

    #[test]
    fn test_text_in() {
        let src = "ab\ncd";
        let index = LineIndex::new(src);
        let range = index.range_of(1, 4);
        assert_eq!(index.text_in(src, &range), "b\nc");
        assert_eq!(index.advance(Position::new(0, 1), 3), Position::new(1, 1));
    }
}
