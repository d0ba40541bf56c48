//! Line-oriented recursive-descent recogniser for the Gherkin grammar.
//!
//! The recogniser classifies each physical line by its first non-blank
//! characters, then descends through Feature, block, step and step-argument
//! states. It produces the complete event sequence for a document or fails
//! on the first grammar violation.
//!
//! Blank lines and comment-only lines never change state. They are buffered
//! as trivia and flushed immediately before the next begin event, table row,
//! or `FeatureEnd`, so that end events always precede the trivia that
//! follows the structure they close.

mod docstring;
mod line;
mod table;

#[cfg(test)]
mod tests;

use crate::error::ParseError;
use crate::event::{Event, EventKind};
use crate::keyword::{BlockKeyword, StepKeyword};
use crate::span::Span;
use crate::text::{LineBounds, split_lines};

use line::{LineCursor, RawComment};
use table::split_row;

/// Recognise `source`, returning every event in source order.
///
/// # Errors
///
/// Returns a [`ParseError`] describing the first grammar violation.
pub(crate) fn recognise(source: &str) -> Result<Vec<Event>, ParseError> {
    let mut recogniser = Recogniser::new(source);
    recogniser.run()?;
    log::debug!(
        "recognised {} events from {} lines",
        recogniser.events.len(),
        recogniser.lines.len()
    );
    Ok(recogniser.events)
}

/// What a line is, judged by its first non-blank characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineKind {
    Blank,
    Comment,
    Tags,
    DocStringFence,
    TableRow,
    Block(BlockKeyword),
    Step(StepKeyword),
    Text,
}

/// The three block kinds that may contain steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BlockKind {
    Background,
    Scenario,
    Outline,
}

impl BlockKind {
    const fn keyword(self) -> BlockKeyword {
        match self {
            Self::Background => BlockKeyword::Background,
            Self::Scenario => BlockKeyword::Scenario,
            Self::Outline => BlockKeyword::Outline,
        }
    }

    fn begin(self, title: String, tags: Vec<String>) -> EventKind {
        match self {
            Self::Background => EventKind::Background { title, tags },
            Self::Scenario => EventKind::Scenario { title, tags },
            Self::Outline => EventKind::Outline { title, tags },
        }
    }

    const fn end(self) -> EventKind {
        match self {
            Self::Background => EventKind::BackgroundEnd,
            Self::Scenario => EventKind::ScenarioEnd,
            Self::Outline => EventKind::OutlineEnd,
        }
    }
}

struct Recogniser<'src> {
    source: &'src str,
    lines: Vec<LineBounds>,
    index: usize,
    events: Vec<Event>,
    trivia: Vec<Event>,
    tags: Vec<String>,
    tags_start: Option<usize>,
    /// End offset of the last structural line consumed.
    last_end: usize,
}

impl<'src> Recogniser<'src> {
    fn new(source: &'src str) -> Self {
        Self {
            source,
            lines: split_lines(source),
            index: 0,
            events: Vec::new(),
            trivia: Vec::new(),
            tags: Vec::new(),
            tags_start: None,
            last_end: 0,
        }
    }

    fn current(&self) -> Option<LineBounds> {
        self.lines.get(self.index).copied()
    }

    fn text_of(&self, line: LineBounds) -> &'src str {
        self.source.get(line.start..line.end).unwrap_or_default()
    }

    fn classify(&self, line: LineBounds) -> LineKind {
        let content = self.text_of(line).trim_start_matches([' ', '\t']);
        if content.is_empty() {
            LineKind::Blank
        } else if content.starts_with('#') {
            LineKind::Comment
        } else if content.starts_with('@') {
            LineKind::Tags
        } else if content.starts_with("\"\"\"") {
            LineKind::DocStringFence
        } else if content.starts_with('|') {
            LineKind::TableRow
        } else if let Some(keyword) = BlockKeyword::recognise(content) {
            LineKind::Block(keyword)
        } else if let Some(keyword) = StepKeyword::recognise(content) {
            LineKind::Step(keyword)
        } else {
            LineKind::Text
        }
    }

    fn current_kind(&self) -> Option<LineKind> {
        self.current().map(|line| self.classify(line))
    }

    fn error(&self, offset: usize, message: impl Into<String>) -> ParseError {
        ParseError::at(self.source, offset, message)
    }

    /// Error located at the first non-blank character of `line`.
    fn error_on(&self, line: LineBounds, message: impl Into<String>) -> ParseError {
        let mut cursor = LineCursor::new(self.source, line);
        cursor.skip_inline_space();
        self.error(cursor.pos(), message)
    }

    /// Step past a structural line.
    fn consume(&mut self, line: LineBounds) {
        self.index += 1;
        self.last_end = line.end;
    }

    /// Step past a trivia or tag line; end events do not move onto it.
    fn advance(&mut self) {
        self.index += 1;
    }

    fn flush_trivia(&mut self) {
        self.events.append(&mut self.trivia);
    }

    fn begin(&mut self, kind: EventKind, span: Span) {
        self.flush_trivia();
        self.events.push(Event::new(kind, span));
    }

    fn end(&mut self, kind: EventKind) {
        self.events.push(Event::new(kind, Span::point(self.last_end)));
    }

    fn inline_comment(&mut self, comment: Option<RawComment>) {
        if let Some(comment) = comment {
            self.events.push(comment.into_event(true));
        }
    }

    /// Take the pending tags and the offset where they started.
    fn take_tags(&mut self, fallback_start: usize) -> (Vec<String>, usize) {
        let start = self.tags_start.take().unwrap_or(fallback_start);
        (std::mem::take(&mut self.tags), start)
    }

    /// Buffer blank and comment-only lines as trivia.
    fn skip_trivia(&mut self) -> Result<(), ParseError> {
        while let Some(line) = self.current() {
            match self.classify(line) {
                LineKind::Blank => {
                    self.trivia
                        .push(Event::new(EventKind::BlankLine, Span::new(line.start, line.end)));
                }
                LineKind::Comment => {
                    let mut cursor = LineCursor::new(self.source, line);
                    if let Some(comment) = cursor.line_end()? {
                        self.trivia.push(comment.into_event(false));
                    }
                }
                _ => return Ok(()),
            }
            self.advance();
        }
        Ok(())
    }

    /// Accumulate tag lines, interleaved with trivia, into the tag buffer.
    fn tag_lines(&mut self) -> Result<(), ParseError> {
        loop {
            self.skip_trivia()?;
            let Some(line) = self.current() else {
                return Ok(());
            };
            if self.classify(line) != LineKind::Tags {
                return Ok(());
            }
            let mut cursor = LineCursor::new(self.source, line);
            cursor.skip_inline_space();
            if self.tags_start.is_none() {
                self.tags_start = Some(cursor.pos());
            }
            if let Some(comment) = cursor.tags(&mut self.tags)? {
                self.trivia.push(comment.into_event(false));
            }
            self.advance();
        }
    }

    fn run(&mut self) -> Result<(), ParseError> {
        self.tag_lines()?;
        let Some(line) = self.current() else {
            if !self.tags.is_empty() {
                return Err(self.error(self.source.len(), "expected `Feature:` after tags"));
            }
            self.flush_trivia();
            return Ok(());
        };
        if self.classify(line) != LineKind::Block(BlockKeyword::Feature) {
            return Err(self.error_on(line, "expected `Feature:`"));
        }
        self.feature(line)
    }

    fn feature(&mut self, line: LineBounds) -> Result<(), ParseError> {
        let mut cursor = LineCursor::new(self.source, line);
        cursor.skip_inline_space();
        let header_start = cursor.pos();
        cursor.eat(BlockKeyword::Feature.as_str());
        cursor.skip_inline_space();
        let title_start = cursor.pos();
        let title = cursor
            .text()?
            .ok_or_else(|| self.error(title_start, "expected a Feature title"))?;
        let comment = cursor.line_end()?;
        let (tags, start) = self.take_tags(header_start);
        self.consume(line);

        let (description, description_trivia) = self.description()?;
        self.begin(
            EventKind::Feature {
                title: title.to_string(),
                description,
                tags,
            },
            Span::new(start, line.end),
        );
        self.inline_comment(comment);
        self.trivia.extend(description_trivia);

        self.feature_body()?;
        self.flush_trivia();
        self.end(EventKind::FeatureEnd);
        Ok(())
    }

    /// Collect description lines following the Feature header.
    ///
    /// Returns the description and the trivia found around it. Blank lines
    /// between description lines belong to the description; comments, and
    /// blank lines before or after it, are returned as trivia.
    fn description(&mut self) -> Result<(String, Vec<Event>), ParseError> {
        let mut lines: Vec<&'src str> = Vec::new();
        let mut trivia = Vec::new();
        let mut pending = Vec::new();
        while let Some(line) = self.current() {
            match self.classify(line) {
                LineKind::Tags
                | LineKind::Block(
                    BlockKeyword::Background | BlockKeyword::Scenario | BlockKeyword::Outline,
                ) => break,
                LineKind::Blank => {
                    pending.push(Event::new(
                        EventKind::BlankLine,
                        Span::new(line.start, line.end),
                    ));
                    self.advance();
                }
                LineKind::Comment => {
                    let mut cursor = LineCursor::new(self.source, line);
                    if let Some(comment) = cursor.line_end()? {
                        pending.push(comment.into_event(false));
                    }
                    self.advance();
                }
                _ => {
                    let mut cursor = LineCursor::new(self.source, line);
                    cursor.skip_inline_space();
                    let text = cursor.text()?.unwrap_or_default();
                    let comment = cursor.line_end()?;
                    for event in pending.drain(..) {
                        if lines.is_empty() || event.kind != EventKind::BlankLine {
                            trivia.push(event);
                        } else {
                            lines.push("");
                        }
                    }
                    lines.push(text);
                    if let Some(comment) = comment {
                        trivia.push(comment.into_event(false));
                    }
                    self.consume(line);
                }
            }
        }
        trivia.append(&mut pending);
        Ok((lines.join("\n"), trivia))
    }

    fn feature_body(&mut self) -> Result<(), ParseError> {
        let mut seen_background = false;
        let mut seen_scenario = false;
        loop {
            self.tag_lines()?;
            let Some(line) = self.current() else {
                if !self.tags.is_empty() {
                    return Err(self.error(
                        self.source.len(),
                        "expected `Background:`, `Scenario:` or `Scenario Outline:` after tags",
                    ));
                }
                return Ok(());
            };
            match self.classify(line) {
                LineKind::Block(BlockKeyword::Background) => {
                    if seen_background {
                        return Err(
                            self.error_on(line, "only one `Background:` is allowed per Feature")
                        );
                    }
                    if seen_scenario {
                        return Err(self.error_on(
                            line,
                            "`Background:` must come before any `Scenario:` or `Scenario Outline:`",
                        ));
                    }
                    seen_background = true;
                    self.block(line, BlockKind::Background)?;
                }
                LineKind::Block(BlockKeyword::Scenario) => {
                    seen_scenario = true;
                    self.block(line, BlockKind::Scenario)?;
                }
                LineKind::Block(BlockKeyword::Outline) => {
                    seen_scenario = true;
                    self.block(line, BlockKind::Outline)?;
                }
                LineKind::Block(BlockKeyword::Feature) => {
                    return Err(self.error_on(line, "only one `Feature:` is allowed per document"));
                }
                LineKind::Step(_) => {
                    return Err(self.error_on(
                        line,
                        "steps must belong to a `Background:`, `Scenario:` or `Scenario Outline:`",
                    ));
                }
                _ => {
                    return Err(self.error_on(
                        line,
                        "expected `Background:`, `Scenario:` or `Scenario Outline:`",
                    ));
                }
            }
        }
    }

    fn block(&mut self, line: LineBounds, kind: BlockKind) -> Result<(), ParseError> {
        let mut cursor = LineCursor::new(self.source, line);
        cursor.skip_inline_space();
        let header_start = cursor.pos();
        cursor.eat(kind.keyword().as_str());
        cursor.skip_inline_space();
        let title = cursor.text()?.unwrap_or_default().to_string();
        let comment = cursor.line_end()?;
        let (tags, start) = self.take_tags(header_start);
        self.begin(kind.begin(title, tags), Span::new(start, line.end));
        self.inline_comment(comment);
        self.consume(line);

        self.steps(kind)?;
        if kind == BlockKind::Outline
            && self.current_kind() == Some(LineKind::Block(BlockKeyword::Examples))
        {
            self.examples()?;
            self.after_examples()?;
        }
        self.end(kind.end());
        Ok(())
    }

    /// Recognise steps until the next block, `Examples:` or end of input.
    fn steps(&mut self, kind: BlockKind) -> Result<(), ParseError> {
        loop {
            self.tag_lines()?;
            let Some(line) = self.current() else {
                return Ok(());
            };
            match self.classify(line) {
                LineKind::Step(keyword) => self.step(line, keyword)?,
                LineKind::Block(
                    BlockKeyword::Background | BlockKeyword::Scenario | BlockKeyword::Outline,
                ) => return Ok(()),
                LineKind::Block(BlockKeyword::Examples) => {
                    if kind != BlockKind::Outline {
                        return Err(
                            self.error_on(line, "`Examples:` is only allowed in a `Scenario Outline:`")
                        );
                    }
                    if let Some(tags_start) = self.tags_start {
                        return Err(self.error(tags_start, "`Examples:` cannot be tagged"));
                    }
                    return Ok(());
                }
                LineKind::Block(BlockKeyword::Feature) => {
                    return Err(self.error_on(line, "only one `Feature:` is allowed per document"));
                }
                LineKind::TableRow => {
                    return Err(self.error_on(line, "a table must follow a step or `Examples:`"));
                }
                LineKind::DocStringFence => {
                    return Err(self.error_on(line, "a doc string must follow a step"));
                }
                LineKind::Blank | LineKind::Comment | LineKind::Tags | LineKind::Text => {
                    return Err(self.error_on(line, "expected a step"));
                }
            }
        }
    }

    fn step(&mut self, line: LineBounds, keyword: StepKeyword) -> Result<(), ParseError> {
        let mut cursor = LineCursor::new(self.source, line);
        cursor.skip_inline_space();
        let header_start = cursor.pos();
        cursor.eat(keyword.as_str());
        cursor.skip_inline_space();
        let text_start = cursor.pos();
        let text = cursor
            .text()?
            .ok_or_else(|| self.error(text_start, "expected step text"))?;
        let comment = cursor.line_end()?;
        let (tags, start) = self.take_tags(header_start);
        self.begin(
            EventKind::Step {
                keyword,
                text: text.to_string(),
                tags,
            },
            Span::new(start, line.end),
        );
        self.inline_comment(comment);
        self.consume(line);

        self.skip_trivia()?;
        match self.current_kind() {
            Some(LineKind::DocStringFence) => self.doc_string()?,
            Some(LineKind::TableRow) => self.table()?,
            _ => {}
        }
        self.end(EventKind::StepEnd);
        Ok(())
    }

    fn examples(&mut self) -> Result<(), ParseError> {
        let Some(line) = self.current() else {
            return Ok(());
        };
        let mut cursor = LineCursor::new(self.source, line);
        cursor.skip_inline_space();
        let start = cursor.pos();
        cursor.eat(BlockKeyword::Examples.as_str());
        let comment = cursor.line_end()?;
        self.begin(EventKind::OutlineExamples, Span::new(start, line.end));
        self.inline_comment(comment);
        self.consume(line);

        self.skip_trivia()?;
        if self.current_kind() == Some(LineKind::TableRow) {
            self.table()?;
        }
        self.end(EventKind::OutlineExamplesEnd);
        Ok(())
    }

    /// Reject steps or a second `Examples:` after an outline's examples.
    fn after_examples(&mut self) -> Result<(), ParseError> {
        self.tag_lines()?;
        let Some(line) = self.current() else {
            return Ok(());
        };
        match self.classify(line) {
            LineKind::Step(_) => Err(self.error_on(line, "steps must come before `Examples:`")),
            LineKind::Block(BlockKeyword::Examples) => Err(self.error_on(
                line,
                "only one `Examples:` is allowed per `Scenario Outline:`",
            )),
            _ => Ok(()),
        }
    }

    /// Recognise one or more table rows of equal arity.
    fn table(&mut self) -> Result<(), ParseError> {
        let mut expected: Option<usize> = None;
        let mut first = true;
        while let Some(line) = self.current() {
            if self.classify(line) != LineKind::TableRow {
                break;
            }
            let row = split_row(self.source, line)?;
            let found = row.cells.len();
            match expected {
                None => expected = Some(found),
                Some(cells) if cells != found => {
                    return Err(self.error(
                        row.start,
                        format!("table row has {found} cells but expected {cells}"),
                    ));
                }
                Some(_) => {}
            }
            if first {
                self.begin(EventKind::Table, Span::new(row.start, line.end));
                first = false;
            }
            self.begin(EventKind::TableRow, Span::new(row.start, line.end));
            for cell in row.cells {
                self.events.push(Event::new(
                    EventKind::TableCell {
                        content: cell.content,
                    },
                    cell.span,
                ));
            }
            self.inline_comment(row.comment);
            self.consume(line);
            self.end(EventKind::TableRowEnd);
            self.skip_trivia()?;
        }
        if !first {
            self.end(EventKind::TableEnd);
        }
        Ok(())
    }
}
