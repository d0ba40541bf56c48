//! Synchronous fan-out of recogniser events to registered processors.

use std::fmt;

use crate::error::ProcessError;
use crate::event::Event;

/// Consumer of the recogniser's event stream.
///
/// Processors receive every event exactly once, in source order, on the
/// calling thread. A processor must not re-enter the parser that feeds it.
pub trait EventProcessor {
    /// Handle a single event.
    ///
    /// # Errors
    ///
    /// Returning an error aborts dispatch of the remaining events.
    fn process(&mut self, event: &Event) -> Result<(), ProcessError>;
}

/// Recording processor: keeps a copy of every event it sees.
impl EventProcessor for Vec<Event> {
    fn process(&mut self, event: &Event) -> Result<(), ProcessError> {
        self.push(event.clone());
        Ok(())
    }
}

/// Adapter turning a closure into an [`EventProcessor`].
///
/// Build one with [`processor_fn`].
pub struct ProcessorFn<F>(F);

/// Wrap a closure as an [`EventProcessor`].
///
/// # Examples
///
/// ```
/// use gherkish::{Parser, processor_fn};
///
/// let mut count = 0;
/// let mut counter = processor_fn(|_event| {
///     count += 1;
///     Ok(())
/// });
/// let mut parser = Parser::new("Feature: x");
/// parser.register(&mut counter);
/// parser.parse()?;
/// parser.execute()?;
/// drop(parser);
/// drop(counter);
/// assert_eq!(count, 2);
/// # Ok::<(), gherkish::Error>(())
/// ```
pub fn processor_fn<F>(f: F) -> ProcessorFn<F>
where
    F: FnMut(&Event) -> Result<(), ProcessError>,
{
    ProcessorFn(f)
}

impl<F> EventProcessor for ProcessorFn<F>
where
    F: FnMut(&Event) -> Result<(), ProcessError>,
{
    fn process(&mut self, event: &Event) -> Result<(), ProcessError> {
        (self.0)(event)
    }
}

/// Ordered list of processors receiving the same events.
///
/// Dispatch order on each event matches registration order. There is no
/// buffering, filtering or back-pressure.
#[derive(Default)]
pub struct EventBus<'p> {
    processors: Vec<&'p mut dyn EventProcessor>,
}

impl<'p> EventBus<'p> {
    /// Create an empty bus.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a processor.
    pub fn register(&mut self, processor: &'p mut dyn EventProcessor) {
        self.processors.push(processor);
    }

    /// Deliver `event` to every processor in registration order.
    ///
    /// # Errors
    ///
    /// Stops at, and returns, the first processor error.
    pub fn emit(&mut self, event: &Event) -> Result<(), ProcessError> {
        log::trace!("dispatching {event}");
        for processor in &mut self.processors {
            processor.process(event)?;
        }
        Ok(())
    }

    /// Number of registered processors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.processors.len()
    }

    /// Whether no processors are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.processors.is_empty()
    }
}

impl fmt::Debug for EventBus<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventBus")
            .field("processors", &self.processors.len())
            .finish()
    }
}
