//! Canonical pretty-printer for Gherkin feature files.
//!
//! [`format_feature`] lays a parsed [`gherkish::Feature`] out with fixed
//! indentation, padded tables and aligned trailing comments. Printing is
//! idempotent: formatting already formatted output changes nothing.
//!
//! ```
//! use gherkish_fmt::{FormatOptions, format_source};
//!
//! let pretty = format_source(
//!     "Feature: F\nScenario: S\nGiven a\n|x|10|\n|long|2|",
//!     &FormatOptions::default(),
//! )?;
//! assert_eq!(
//!     pretty,
//!     "Feature: F\n\n  Scenario: S\n    Given a\n      | x    | 10 |\n      | long |  2 |\n",
//! );
//! # Ok::<(), gherkish::Error>(())
//! ```

pub mod buffer;
mod options;
mod printer;
pub mod style;
pub mod table;

pub use options::{DEFAULT_COMMENT_INDENT, FormatOptions};
pub use printer::{format_feature, format_source};
