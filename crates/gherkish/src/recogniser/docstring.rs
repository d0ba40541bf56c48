//! Doc string arguments fenced by `"""`.

use crate::error::ParseError;
use crate::event::{Event, EventKind};
use crate::span::Span;
use crate::text::strip_indent;

use super::line::LineCursor;
use super::{LineKind, Recogniser};

const FENCE: &str = "\"\"\"";

impl Recogniser<'_> {
    /// Recognise a doc string starting at the current opening fence.
    ///
    /// The indent is the number of spaces and tabs before the opening fence;
    /// each body line loses up to that many leading whitespace characters.
    pub(super) fn doc_string(&mut self) -> Result<(), ParseError> {
        let Some(open) = self.current() else {
            return Ok(());
        };
        let mut cursor = LineCursor::new(self.source, open);
        let indent = cursor.skip_inline_space();
        let fence_start = cursor.pos();
        cursor.eat(FENCE);
        cursor.skip_inline_space();
        if !cursor.at_end() {
            return Err(cursor.error(
                cursor.pos(),
                "expected end of line after opening `\"\"\"`",
            ));
        }
        self.begin(
            EventKind::DocString { indent },
            Span::new(fence_start, open.end),
        );
        self.consume(open);

        while let Some(line) = self.current() {
            if self.classify(line) == LineKind::DocStringFence {
                let mut cursor = LineCursor::new(self.source, line);
                cursor.skip_inline_space();
                cursor.eat(FENCE);
                let comment = cursor.line_end()?;
                self.inline_comment(comment);
                self.consume(line);
                self.end(EventKind::DocStringEnd);
                return Ok(());
            }
            let body = strip_indent(self.text_of(line), indent);
            self.events.push(Event::new(
                EventKind::DocStringLine {
                    line: body.to_string(),
                },
                Span::new(line.end - body.len(), line.end),
            ));
            self.consume(line);
        }
        Err(self.error(
            self.source.len(),
            "unterminated doc string; expected closing `\"\"\"`",
        ))
    }
}
