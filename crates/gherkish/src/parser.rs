//! Parser façade tying the recogniser to the event bus.

use crate::bus::{EventBus, EventProcessor};
use crate::dom::{DomBuilder, Feature};
use crate::error::{Error, ParseError};
use crate::event::Event;
use crate::recogniser::recognise;

/// Parses a Gherkin document and drives registered event processors.
///
/// Parsing and dispatch are separate steps: [`Parser::parse`] recognises the
/// whole buffer and retains the events, then [`Parser::execute`] delivers
/// them to every registered processor. A failed parse delivers nothing.
///
/// # Examples
///
/// ```
/// use gherkish::{Event, Parser};
///
/// let mut seen: Vec<Event> = Vec::new();
/// let mut parser = Parser::new("Feature: Hello\n  Scenario: S\n    Given x\n");
/// parser.register(&mut seen);
/// parser.parse()?;
/// parser.execute()?;
/// drop(parser);
/// assert_eq!(seen.len(), 6);
/// # Ok::<(), gherkish::Error>(())
/// ```
#[derive(Debug)]
pub struct Parser<'src, 'p> {
    source: &'src str,
    bus: EventBus<'p>,
    events: Option<Vec<Event>>,
}

impl<'src, 'p> Parser<'src, 'p> {
    /// Create a parser over a complete document.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            bus: EventBus::new(),
            events: None,
        }
    }

    /// The document being parsed.
    #[must_use]
    pub const fn source(&self) -> &'src str {
        self.source
    }

    /// Append an event processor; processors see events in registration order.
    pub fn register(&mut self, processor: &'p mut dyn EventProcessor) {
        self.bus.register(processor);
    }

    /// Recognise the document.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] for the first grammar violation. Events from
    /// an earlier successful parse are discarded either way.
    pub fn parse(&mut self) -> Result<(), ParseError> {
        self.events = None;
        self.events = Some(recognise(self.source)?);
        Ok(())
    }

    /// Deliver the parsed events to every registered processor.
    ///
    /// May be called repeatedly; each call replays the full stream.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotParsed`] without a prior successful
    /// [`Parser::parse`], or [`Error::Process`] when a processor fails.
    pub fn execute(&mut self) -> Result<(), Error> {
        let events = self.events.as_ref().ok_or(Error::NotParsed)?;
        for event in events {
            self.bus.emit(event)?;
        }
        Ok(())
    }

    /// Events retained by the last successful parse.
    #[must_use]
    pub fn events(&self) -> Option<&[Event]> {
        self.events.as_deref()
    }

    /// Consume the parser, returning the retained events.
    #[must_use]
    pub fn into_events(self) -> Option<Vec<Event>> {
        self.events
    }
}

/// Parse a document straight into its [`Feature`].
///
/// # Examples
///
/// ```
/// let feature = gherkish::parse_feature("Feature: Hello World")?;
/// assert_eq!(feature.title(), "Hello World");
/// assert!(feature.scenarios().is_empty());
/// # Ok::<(), gherkish::Error>(())
/// ```
///
/// # Errors
///
/// Returns [`Error::Parse`] when the document is not valid Gherkin and
/// [`Error::MissingFeature`] when it contains no `Feature:`.
pub fn parse_feature(source: &str) -> Result<Feature, Error> {
    let mut builder = DomBuilder::new();
    {
        let mut parser = Parser::new(source);
        parser.register(&mut builder);
        parser.parse()?;
        parser.execute()?;
    }
    builder.into_feature().ok_or(Error::MissingFeature)
}

/// Recognise a document and return its events without dispatching them.
///
/// # Errors
///
/// Returns a [`ParseError`] for the first grammar violation.
pub fn parse_events(source: &str) -> Result<Vec<Event>, ParseError> {
    recognise(source)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProcessError;
    use crate::bus::processor_fn;

    #[test]
    fn execute_requires_parse() {
        let mut parser = Parser::new("Feature: x");
        assert!(matches!(parser.execute(), Err(Error::NotParsed)));
    }

    #[test]
    fn failed_parse_discards_previous_events() {
        let mut parser = Parser::new("Scenario: x");
        assert!(parser.parse().is_err());
        assert!(parser.events().is_none());
        assert!(matches!(parser.execute(), Err(Error::NotParsed)));
    }

    #[test]
    fn execute_replays_events() {
        let mut seen: Vec<Event> = Vec::new();
        {
            let mut parser = Parser::new("Feature: x");
            parser.register(&mut seen);
            assert!(parser.parse().is_ok());
            assert!(parser.execute().is_ok());
            assert!(parser.execute().is_ok());
        }
        assert_eq!(seen.len(), 4);
    }

    #[test]
    fn processor_errors_abort_execution() {
        let mut failing = processor_fn(|_| Err(ProcessError::custom("stop")));
        let mut parser = Parser::new("Feature: x");
        parser.register(&mut failing);
        assert!(parser.parse().is_ok());
        assert!(matches!(parser.execute(), Err(Error::Process(_))));
    }

    #[test]
    fn empty_document_has_no_feature() {
        assert!(matches!(parse_feature(""), Err(Error::MissingFeature)));
        assert!(matches!(parse_feature("\n# only\n"), Err(Error::MissingFeature)));
    }

    #[test]
    fn parse_errors_surface_through_parse_feature() {
        assert!(matches!(parse_feature("Feature:"), Err(Error::Parse(_))));
    }
}
