//! Byte spans and human-readable source positions.

use std::fmt;

use crate::text::split_lines;

/// Half-open byte range into the recognised source buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Span {
    /// Offset of the first byte covered by the span.
    pub start: usize,
    /// Offset one past the last byte covered by the span.
    pub end: usize,
}

impl Span {
    /// Create a span covering `start..end`.
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Zero-width span at `offset`.
    #[must_use]
    pub const fn point(offset: usize) -> Self {
        Self::new(offset, offset)
    }

    /// Number of bytes covered.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Whether the span covers no bytes.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Borrow the covered text from `source`.
    ///
    /// Returns `None` when the span does not fall on character boundaries of
    /// `source`.
    #[must_use]
    pub fn slice<'a>(&self, source: &'a str) -> Option<&'a str> {
        source.get(self.start..self.end)
    }
}

/// A 1-based line and column (counted in characters).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    /// 1-based line number.
    pub line: usize,
    /// 1-based column, counted in characters from the start of the line.
    pub column: usize,
}

impl Position {
    /// Locate the byte `offset` within `source`.
    ///
    /// Offsets past the end of the buffer are clamped to the end. An offset
    /// at the end of a buffer that finishes with a line terminator refers to
    /// the first column of the (empty) following line.
    ///
    /// # Examples
    ///
    /// ```
    /// use gherkish::Position;
    ///
    /// let pos = Position::locate("Feature: x\n  Scenario:", 13);
    /// assert_eq!((pos.line, pos.column), (2, 3));
    /// ```
    #[must_use]
    pub fn locate(source: &str, offset: usize) -> Self {
        let offset = offset.min(source.len());
        let mut line = 1usize;
        let mut line_start = 0usize;
        for bounds in split_lines(source) {
            if offset < bounds.next || bounds.end == source.len() {
                return Self {
                    line,
                    column: column_of(source, bounds.start, offset.min(bounds.end)),
                };
            }
            line += 1;
            line_start = bounds.next;
        }
        Self {
            line,
            column: column_of(source, line_start, offset),
        }
    }
}

fn column_of(source: &str, line_start: usize, offset: usize) -> usize {
    source
        .get(line_start..offset)
        .map_or(0, |prefix| prefix.chars().count())
        + 1
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("abc", 0, 1, 1)]
    #[case("abc", 3, 1, 4)]
    #[case("abc\n", 4, 2, 1)]
    #[case("a\r\nbc", 4, 2, 2)]
    #[case("a\rb", 2, 2, 1)]
    #[case("é\nx", 2, 1, 2)]
    #[case("ab", 99, 1, 3)]
    #[case("", 0, 1, 1)]
    fn locates_offsets(
        #[case] source: &str,
        #[case] offset: usize,
        #[case] line: usize,
        #[case] column: usize,
    ) {
        assert_eq!(Position::locate(source, offset), Position { line, column });
    }

    #[test]
    fn span_slices_source() {
        let span = Span::new(9, 14);
        assert_eq!(span.slice("Feature: Hello"), Some("Hello"));
        assert_eq!(span.len(), 5);
        assert!(Span::point(3).is_empty());
    }

    #[test]
    fn position_displays_line_and_column() {
        let pos = Position { line: 3, column: 7 };
        assert_eq!(pos.to_string(), "line 3, column 7");
    }
}
