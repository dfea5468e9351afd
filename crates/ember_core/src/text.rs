//! Text span and line types for source location tracking.
//!
//! Offsets are measured in characters (Unicode scalar values), which is how
//! the scanner indexes the source. [`LineMap`] converts them back to byte
//! offsets for renderers that slice the source `&str`.

use std::fmt;
use std::ops::Range;

/// A position in source text, measured in characters from the start.
pub type TextPos = u32;

/// A span in source text, defined by a start position and a length.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct TextSpan {
    /// The character offset where this span starts.
    pub start: TextPos,
    /// The length of this span in characters.
    pub length: TextPos,
}

impl TextSpan {
    /// Create a new text span.
    #[inline]
    pub fn new(start: TextPos, length: TextPos) -> Self {
        Self { start, length }
    }

    /// The end position of this span (exclusive).
    #[inline]
    pub fn end(&self) -> TextPos {
        self.start + self.length
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }
}

impl fmt::Debug for TextSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end())
    }
}

impl fmt::Display for TextSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end())
    }
}

/// Line and column information derived from source text.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct LineAndColumn {
    /// 1-based line number, matching token line numbers.
    pub line: u32,
    /// 0-based column in characters.
    pub character: u32,
}

impl LineAndColumn {
    pub fn new(line: u32, character: u32) -> Self {
        Self { line, character }
    }
}

/// A map from character offsets to lines and byte offsets, built once from
/// the source text.
#[derive(Debug, Clone)]
pub struct LineMap {
    /// Character offsets of the start of each line.
    line_starts: Vec<TextPos>,
    /// Byte offset of every character, plus one trailing entry for the end.
    byte_offsets: Vec<usize>,
}

impl LineMap {
    /// Build a line map from source text.
    pub fn new(text: &str) -> Self {
        let mut line_starts = vec![0u32];
        let mut byte_offsets = Vec::with_capacity(text.len() + 1);
        for (i, (byte, ch)) in text.char_indices().enumerate() {
            byte_offsets.push(byte);
            if ch == '\n' {
                line_starts.push((i + 1) as TextPos);
            }
        }
        byte_offsets.push(text.len());
        Self {
            line_starts,
            byte_offsets,
        }
    }

    /// Get the 1-based line number for a character offset.
    pub fn line_of(&self, pos: TextPos) -> u32 {
        match self.line_starts.binary_search(&pos) {
            Ok(line) => line as u32 + 1,
            Err(line) => line as u32,
        }
    }

    /// Get the line and column for a character offset.
    pub fn line_and_column_of(&self, pos: TextPos) -> LineAndColumn {
        let line = self.line_of(pos);
        let line_start = self.line_starts[(line - 1) as usize];
        LineAndColumn {
            line,
            character: pos - line_start,
        }
    }

    /// Convert a character offset to a byte offset, clamping past the end.
    pub fn byte_offset(&self, pos: TextPos) -> usize {
        let index = (pos as usize).min(self.byte_offsets.len() - 1);
        self.byte_offsets[index]
    }

    /// Convert a character span to a byte range into the source text.
    pub fn byte_range(&self, span: TextSpan) -> Range<usize> {
        self.byte_offset(span.start)..self.byte_offset(span.end())
    }

    /// Get the total number of lines.
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_span() {
        let span = TextSpan::new(5, 10);
        assert_eq!(span.start, 5);
        assert_eq!(span.length, 10);
        assert_eq!(span.end(), 15);
        assert!(!span.is_empty());
        assert!(TextSpan::new(3, 0).is_empty());
        assert_eq!(format!("{:?}", span), "5..15");
    }

    #[test]
    fn test_line_map() {
        let text = "line1\nline2\nline3";
        let map = LineMap::new(text);
        assert_eq!(map.line_count(), 3);
        assert_eq!(map.line_of(0), 1);
        assert_eq!(map.line_of(5), 1); // newline char
        assert_eq!(map.line_of(6), 2); // start of line2
        assert_eq!(map.line_of(12), 3);

        let lc = map.line_and_column_of(8);
        assert_eq!(lc.line, 2);
        assert_eq!(lc.character, 2);
    }

    #[test]
    fn test_byte_offsets_for_multibyte_text() {
        let text = "\"é\" + 1";
        let map = LineMap::new(text);
        // '"' is one byte, 'é' is two.
        assert_eq!(map.byte_offset(1), 1);
        assert_eq!(map.byte_offset(2), 3);
        assert_eq!(map.byte_range(TextSpan::new(0, 3)), 0..4);
        assert_eq!(map.byte_offset(100), text.len());
    }
}
