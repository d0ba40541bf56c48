//! Error types surfaced by recognition, event processing and the façade.

use std::error::Error as StdError;

use thiserror::Error;

use crate::span::Position;

/// Longest excerpt, in characters, quoted by a [`ParseError`].
const EXCERPT_CHARS: usize = 40;

/// The input does not conform to the Gherkin grammar.
///
/// Recognition fails fast: the error describes the first grammar violation,
/// located at the furthest position the recogniser reached.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("line {line}, column {column}: {message} ({})", describe_excerpt(.excerpt))]
pub struct ParseError {
    /// Human-readable description naming the expected construct.
    pub message: String,
    /// Byte offset of the offending position.
    pub offset: usize,
    /// 1-based line of the offending position.
    pub line: usize,
    /// 1-based column (in characters) of the offending position.
    pub column: usize,
    /// Text from the offending position to the end of its line, truncated.
    pub excerpt: String,
}

impl ParseError {
    pub(crate) fn at(source: &str, offset: usize, message: impl Into<String>) -> Self {
        let offset = offset.min(source.len());
        let Position { line, column } = Position::locate(source, offset);
        Self {
            message: message.into(),
            offset,
            line,
            column,
            excerpt: excerpt_at(source, offset),
        }
    }

    /// The 1-based position of the error.
    #[must_use]
    pub fn position(&self) -> Position {
        Position {
            line: self.line,
            column: self.column,
        }
    }
}

fn excerpt_at(source: &str, offset: usize) -> String {
    let tail = source.get(offset..).unwrap_or_default();
    let line = tail.split(['\n', '\r']).next().unwrap_or_default();
    let mut excerpt: String = line.chars().take(EXCERPT_CHARS).collect();
    if line.chars().nth(EXCERPT_CHARS).is_some() {
        excerpt.push('…');
    }
    excerpt
}

fn describe_excerpt(excerpt: &str) -> String {
    if excerpt.is_empty() {
        "at end of line".to_string()
    } else {
        format!("near `{excerpt}`")
    }
}

/// Failure raised by an event processor.
///
/// Returning an error from a processor aborts dispatch; processors
/// registered after the failing one do not see the event.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ProcessError {
    /// The processor received an event that is invalid in its current state.
    #[error("unexpected {event} event: {context}")]
    UnexpectedEvent {
        /// Name of the offending event.
        event: &'static str,
        /// Description of the state the processor was in.
        context: &'static str,
    },
    /// A user-supplied processor failed.
    #[error("event processor failed: {source}")]
    Processor {
        /// Root cause reported by the processor.
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },
}

impl ProcessError {
    /// Wrap an arbitrary processor failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use gherkish::ProcessError;
    ///
    /// let err = ProcessError::custom("disk full");
    /// assert_eq!(err.to_string(), "event processor failed: disk full");
    /// ```
    pub fn custom<E>(err: E) -> Self
    where
        E: Into<Box<dyn StdError + Send + Sync>>,
    {
        Self::Processor { source: err.into() }
    }

    pub(crate) const fn unexpected(event: &'static str, context: &'static str) -> Self {
        Self::UnexpectedEvent { event, context }
    }
}

/// Errors returned by the [`Parser`](crate::Parser) façade.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The input failed to parse.
    #[error("parse error at {0}")]
    Parse(#[from] ParseError),
    /// An event processor aborted dispatch.
    #[error(transparent)]
    Process(#[from] ProcessError),
    /// `execute` was called without a successful `parse`.
    #[error("no parsed events to execute; call `parse` first")]
    NotParsed,
    /// The document parsed but contains no `Feature:`.
    #[error("document does not contain a Feature")]
    MissingFeature,
}
