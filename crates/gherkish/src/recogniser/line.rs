//! Intra-line scanning: free text, quoted strings, tags and line endings.

use crate::error::ParseError;
use crate::event::{Event, EventKind};
use crate::span::Span;
use crate::text::{LineBounds, is_inline_space};

/// A `#` comment found at the end of a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct RawComment {
    pub(super) text: String,
    pub(super) span: Span,
}

impl RawComment {
    pub(super) fn into_event(self, inline: bool) -> Event {
        Event::new(
            EventKind::Comment {
                text: self.text,
                inline,
            },
            self.span,
        )
    }
}

/// Byte cursor confined to a single line of the source.
///
/// Only ASCII bytes are significant to the grammar, so the cursor may step
/// through multi-byte characters one byte at a time without ever stopping
/// inside one.
pub(super) struct LineCursor<'src> {
    source: &'src str,
    pos: usize,
    end: usize,
}

impl<'src> LineCursor<'src> {
    pub(super) fn new(source: &'src str, line: LineBounds) -> Self {
        Self::within(source, line.start, line.end)
    }

    pub(super) fn within(source: &'src str, pos: usize, end: usize) -> Self {
        Self { source, pos, end }
    }

    pub(super) fn pos(&self) -> usize {
        self.pos
    }

    pub(super) fn peek(&self) -> Option<u8> {
        if self.pos < self.end {
            self.source.as_bytes().get(self.pos).copied()
        } else {
            None
        }
    }

    pub(super) fn at_end(&self) -> bool {
        self.pos >= self.end
    }

    /// Skip spaces and tabs, returning how many were skipped.
    pub(super) fn skip_inline_space(&mut self) -> usize {
        let mut skipped = 0usize;
        while self.peek().is_some_and(is_inline_space) {
            self.pos += 1;
            skipped += 1;
        }
        skipped
    }

    pub(super) fn eat(&mut self, literal: &str) -> bool {
        let matched = self
            .source
            .get(self.pos..self.end)
            .is_some_and(|rest| rest.starts_with(literal));
        if matched {
            self.pos += literal.len();
        }
        matched
    }

    pub(super) fn error(&self, offset: usize, message: impl Into<String>) -> ParseError {
        ParseError::at(self.source, offset, message)
    }

    /// Scan free text up to an unquoted `#` or the end of the line.
    ///
    /// Backslash escapes any following character and double-quoted strings
    /// may contain `#`. Returns the matched text with trailing whitespace
    /// removed, or `None` when nothing but whitespace was matched.
    pub(super) fn text(&mut self) -> Result<Option<&'src str>, ParseError> {
        let start = self.pos;
        // Trimming never reaches back into an escape or a quoted string.
        let mut floor = start;
        while let Some(b) = self.peek() {
            match b {
                b'#' => break,
                b'\\' => {
                    self.escape()?;
                    floor = self.pos;
                }
                b'"' => {
                    self.quoted()?;
                    floor = self.pos;
                }
                _ => self.pos += 1,
            }
        }
        let mut end = self.pos;
        let bytes = self.source.as_bytes();
        while end > floor && bytes.get(end - 1).is_some_and(|b| is_inline_space(*b)) {
            end -= 1;
        }
        if end == start {
            return Ok(None);
        }
        Ok(self.source.get(start..end))
    }

    fn escape(&mut self) -> Result<(), ParseError> {
        if self.pos + 1 >= self.end {
            return Err(self.error(self.pos, "dangling `\\` escape at end of line"));
        }
        self.pos += 2;
        Ok(())
    }

    fn quoted(&mut self) -> Result<(), ParseError> {
        self.pos += 1;
        loop {
            match self.peek() {
                None => return Err(self.error(self.end, "unterminated quoted string")),
                Some(b'"') => {
                    self.pos += 1;
                    return Ok(());
                }
                Some(b'\\') => self.escape()?,
                Some(_) => self.pos += 1,
            }
        }
    }

    /// Match `WS* LineComment?` up to the end of the line.
    pub(super) fn line_end(&mut self) -> Result<Option<RawComment>, ParseError> {
        self.skip_inline_space();
        match self.peek() {
            None => Ok(None),
            Some(b'#') => {
                let start = self.pos;
                let text = self
                    .source
                    .get(start + 1..self.end)
                    .unwrap_or_default()
                    .trim_end();
                self.pos = self.end;
                Ok(Some(RawComment {
                    text: text.to_string(),
                    span: Span::new(start, self.end),
                }))
            }
            Some(_) => Err(self.error(self.pos, "expected end of line")),
        }
    }

    /// Scan a line of `@tag` tokens into `tags`.
    ///
    /// Tag names run until whitespace, `#` or `"`; a `#` starts a trailing
    /// comment and never becomes part of a tag.
    pub(super) fn tags(&mut self, tags: &mut Vec<String>) -> Result<Option<RawComment>, ParseError> {
        loop {
            self.skip_inline_space();
            if self.peek() != Some(b'@') {
                break;
            }
            self.pos += 1;
            let start = self.pos;
            while let Some(b) = self.peek() {
                if matches!(b, b'#' | b'"') || is_inline_space(b) {
                    break;
                }
                self.pos += 1;
            }
            if self.pos == start {
                return Err(self.error(start, "expected a tag name after `@`"));
            }
            tags.push(self.source.get(start..self.pos).unwrap_or_default().to_string());
        }
        if self.peek().is_some_and(|b| b != b'#') {
            return Err(self.error(self.pos, "expected a tag or end of line"));
        }
        self.line_end()
    }
}
