//! Table row splitting.
//!
//! Cells are the byte ranges between consecutive `|` delimiters, trimmed of
//! surrounding spaces and tabs. After the final delimiter only whitespace or
//! a line comment may follow.

use crate::error::ParseError;
use crate::span::Span;
use crate::text::{LineBounds, trim_ascii_whitespace};

use super::line::{LineCursor, RawComment};

/// A trimmed table cell and its location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct RawCell {
    pub(super) content: String,
    pub(super) span: Span,
}

/// A table row split into cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct RawRow {
    /// Offset of the opening `|`.
    pub(super) start: usize,
    pub(super) cells: Vec<RawCell>,
    pub(super) comment: Option<RawComment>,
}

fn next_pipe(bytes: &[u8], from: usize, end: usize) -> Option<usize> {
    (from..end).find(|&idx| bytes.get(idx) == Some(&b'|'))
}

/// Split a row line into cells.
///
/// The line must start, after optional whitespace, with `|`.
pub(super) fn split_row(source: &str, line: LineBounds) -> Result<RawRow, ParseError> {
    let bytes = source.as_bytes();
    let mut cursor = LineCursor::new(source, line);
    cursor.skip_inline_space();
    let start = cursor.pos();
    if !cursor.eat("|") {
        return Err(cursor.error(start, "expected `|` to open a table row"));
    }

    let mut cells = Vec::new();
    let mut cell_start = cursor.pos();
    while let Some(pipe) = next_pipe(bytes, cell_start, line.end) {
        let (trim_start, trim_end) = trim_ascii_whitespace(bytes, cell_start, pipe);
        let content = source.get(trim_start..trim_end).unwrap_or_default();
        cells.push(RawCell {
            content: content.to_string(),
            span: Span::new(trim_start, trim_end),
        });
        cell_start = pipe + 1;
    }

    let mut rest = LineCursor::within(source, cell_start, line.end);
    rest.skip_inline_space();
    if cells.is_empty() {
        return Err(rest.error(rest.pos(), "expected a table cell closed by `|`"));
    }
    if rest.peek().is_some_and(|b| b != b'#') {
        return Err(rest.error(rest.pos(), "expected `|` to close table cell"));
    }
    let comment = rest.line_end()?;
    Ok(RawRow {
        start,
        cells,
        comment,
    })
}
