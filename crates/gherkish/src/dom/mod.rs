//! Document object model assembled from the event stream.
//!
//! Nodes are plain owned values: each parent exclusively owns its children
//! and there are no back-references. The [`DomBuilder`] creates nodes on
//! begin events and finalises them on the matching end events. After that
//! the tree only changes through the explicit setters, which exist so that
//! printers and tests can synthesise documents.

mod block;
mod builder;
mod feature;
mod step;
mod tag;

pub use block::{Block, Examples, Outline, Scenario};
pub use builder::DomBuilder;
pub use feature::Feature;
pub use step::{DocString, Step, StepArgument, Table, TableRow};
pub use tag::{Comment, Tag};
