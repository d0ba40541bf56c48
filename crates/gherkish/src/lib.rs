//! Streaming recogniser and document object model for Gherkin feature files.
//!
//! Parsing happens in three layers that agree on where every block starts
//! and ends:
//!
//! - the recogniser turns a complete buffer into a sequence of [`Event`]s,
//!   each nested begin event closed by exactly one end event;
//! - the [`EventBus`] fans those events out, in order, to registered
//!   [`EventProcessor`]s;
//! - the [`DomBuilder`] is the stock processor that assembles a [`Feature`]
//!   tree.
//!
//! ```
//! use gherkish::{StepKeyword, parse_feature};
//!
//! let feature = parse_feature(
//!     "@wip\nFeature: Hi\n  Scenario: S\n    Given g\n     When w\n",
//! )?;
//! assert_eq!(feature.title(), "Hi");
//! let steps = feature.scenarios()[0].steps();
//! assert_eq!(steps[1].keyword(), StepKeyword::When);
//! # Ok::<(), gherkish::Error>(())
//! ```
//!
//! Enable the `serde` feature to serialise events and DOM nodes.

mod bus;
mod dom;
mod error;
mod event;
mod keyword;
mod parser;
mod recogniser;
mod span;
pub mod text;

pub use bus::{EventBus, EventProcessor, ProcessorFn, processor_fn};
pub use dom::{
    Block, Comment, DocString, DomBuilder, Examples, Feature, Outline, Scenario, Step,
    StepArgument, Table, TableRow, Tag,
};
pub use error::{Error, ParseError, ProcessError};
pub use event::{Event, EventKind, Nesting};
pub use keyword::{BlockKeyword, StepKeyword, StepKeywordParseError};
pub use parser::{Parser, parse_events, parse_feature};
pub use span::{Position, Span};
