//! Structural events emitted by the recogniser.
//!
//! Events mirror the block structure of a feature file. Every begin event
//! (`Feature`, `Background`, `Scenario`, `Outline`, `OutlineExamples`,
//! `Step`, `DocString`, `Table`, `TableRow`) is closed by exactly one matching
//! end event, and child events always fall between the two. `TableCell`,
//! `DocStringLine`, `BlankLine` and `Comment` are leaves.
//!
//! `BlankLine` and standalone `Comment` events form a side channel. They are
//! delivered in source order, immediately before the next begin event, table
//! row, or `FeatureEnd`.

use std::fmt;

use crate::keyword::StepKeyword;
use crate::span::Span;

/// A single recogniser event and the source span that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Event {
    /// What was recognised.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub kind: EventKind,
    /// Byte range of the recognised text; end events are zero-width.
    pub span: Span,
}

impl Event {
    /// Pair an event kind with its span.
    #[must_use]
    pub const fn new(kind: EventKind, span: Span) -> Self {
        Self { kind, span }
    }
}

/// Whether an event opens a structure, closes one, or stands alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nesting {
    /// Opens a structure that a later event closes.
    Begin,
    /// Closes the most recently opened structure.
    End,
    /// Neither opens nor closes a structure.
    Leaf,
}

/// Payload of an [`Event`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "event"))]
pub enum EventKind {
    /// Start of the Feature.
    Feature {
        /// Trimmed title text.
        title: String,
        /// Description lines joined by `\n`; outer blank lines removed.
        description: String,
        /// Tag names without the leading `@`.
        tags: Vec<String>,
    },
    /// End of the Feature.
    FeatureEnd,
    /// Start of the Background block.
    Background {
        /// Trimmed title text, possibly empty.
        title: String,
        /// Tag names without the leading `@`.
        tags: Vec<String>,
    },
    /// End of the Background block.
    BackgroundEnd,
    /// Start of a Scenario block.
    Scenario {
        /// Trimmed title text, possibly empty.
        title: String,
        /// Tag names without the leading `@`.
        tags: Vec<String>,
    },
    /// End of a Scenario block.
    ScenarioEnd,
    /// Start of a Scenario Outline block.
    Outline {
        /// Trimmed title text, possibly empty.
        title: String,
        /// Tag names without the leading `@`.
        tags: Vec<String>,
    },
    /// Start of the outline's Examples section.
    OutlineExamples,
    /// End of the outline's Examples section.
    OutlineExamplesEnd,
    /// End of a Scenario Outline block.
    OutlineEnd,
    /// Start of a step.
    Step {
        /// Keyword introducing the step.
        keyword: StepKeyword,
        /// Trimmed step text.
        text: String,
        /// Tag names without the leading `@`.
        tags: Vec<String>,
    },
    /// End of a step.
    StepEnd,
    /// Start of a doc string argument.
    DocString {
        /// Number of whitespace characters preceding the opening fence.
        indent: usize,
    },
    /// One body line of a doc string, with the fence indent stripped.
    DocStringLine {
        /// Line content without its terminator.
        line: String,
    },
    /// End of a doc string argument.
    DocStringEnd,
    /// Start of a table.
    Table,
    /// Start of a table row.
    TableRow,
    /// A single table cell.
    TableCell {
        /// Cell text trimmed of surrounding whitespace.
        content: String,
    },
    /// End of a table row.
    TableRowEnd,
    /// End of a table.
    TableEnd,
    /// A line containing only whitespace.
    BlankLine,
    /// A `#` comment.
    Comment {
        /// Comment text without the leading `#` and trailing whitespace.
        text: String,
        /// Whether the comment trails structural content on the same line.
        inline: bool,
    },
}

impl EventKind {
    /// Short name of the event kind.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Feature { .. } => "Feature",
            Self::FeatureEnd => "FeatureEnd",
            Self::Background { .. } => "Background",
            Self::BackgroundEnd => "BackgroundEnd",
            Self::Scenario { .. } => "Scenario",
            Self::ScenarioEnd => "ScenarioEnd",
            Self::Outline { .. } => "Outline",
            Self::OutlineExamples => "OutlineExamples",
            Self::OutlineExamplesEnd => "OutlineExamplesEnd",
            Self::OutlineEnd => "OutlineEnd",
            Self::Step { .. } => "Step",
            Self::StepEnd => "StepEnd",
            Self::DocString { .. } => "DocString",
            Self::DocStringLine { .. } => "DocStringLine",
            Self::DocStringEnd => "DocStringEnd",
            Self::Table => "Table",
            Self::TableRow => "TableRow",
            Self::TableCell { .. } => "TableCell",
            Self::TableRowEnd => "TableRowEnd",
            Self::TableEnd => "TableEnd",
            Self::BlankLine => "BlankLine",
            Self::Comment { .. } => "Comment",
        }
    }

    /// Classify the event as a begin, end, or leaf event.
    #[must_use]
    pub const fn nesting(&self) -> Nesting {
        match self {
            Self::Feature { .. }
            | Self::Background { .. }
            | Self::Scenario { .. }
            | Self::Outline { .. }
            | Self::OutlineExamples
            | Self::Step { .. }
            | Self::DocString { .. }
            | Self::Table
            | Self::TableRow => Nesting::Begin,
            Self::FeatureEnd
            | Self::BackgroundEnd
            | Self::ScenarioEnd
            | Self::OutlineExamplesEnd
            | Self::OutlineEnd
            | Self::StepEnd
            | Self::DocStringEnd
            | Self::TableRowEnd
            | Self::TableEnd => Nesting::End,
            Self::DocStringLine { .. }
            | Self::TableCell { .. }
            | Self::BlankLine
            | Self::Comment { .. } => Nesting::Leaf,
        }
    }

    /// Name of the end event closing this begin event.
    ///
    /// Returns `None` for end and leaf events.
    #[must_use]
    pub const fn closing_name(&self) -> Option<&'static str> {
        match self {
            Self::Feature { .. } => Some("FeatureEnd"),
            Self::Background { .. } => Some("BackgroundEnd"),
            Self::Scenario { .. } => Some("ScenarioEnd"),
            Self::Outline { .. } => Some("OutlineEnd"),
            Self::OutlineExamples => Some("OutlineExamplesEnd"),
            Self::Step { .. } => Some("StepEnd"),
            Self::DocString { .. } => Some("DocStringEnd"),
            Self::Table => Some("TableEnd"),
            Self::TableRow => Some("TableRowEnd"),
            _ => None,
        }
    }
}

fn write_tags(f: &mut fmt::Formatter<'_>, tags: &[String]) -> fmt::Result {
    for tag in tags {
        write!(f, " @{tag}")?;
    }
    Ok(())
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())?;
        match self {
            Self::Feature {
                title,
                description,
                tags,
            } => {
                write!(f, " {title:?}")?;
                write_tags(f, tags)?;
                if !description.is_empty() {
                    write!(f, " description={description:?}")?;
                }
                Ok(())
            }
            Self::Background { title, tags }
            | Self::Scenario { title, tags }
            | Self::Outline { title, tags } => {
                write!(f, " {title:?}")?;
                write_tags(f, tags)
            }
            Self::Step {
                keyword,
                text,
                tags,
            } => {
                write!(f, " {keyword} {text:?}")?;
                write_tags(f, tags)
            }
            Self::DocString { indent } => write!(f, " indent={indent}"),
            Self::DocStringLine { line } => write!(f, " {line:?}"),
            Self::TableCell { content } => write!(f, " {content:?}"),
            Self::Comment { text, inline } => {
                write!(f, " {text:?}")?;
                if *inline {
                    f.write_str(" inline")?;
                }
                Ok(())
            }
            _ => Ok(()),
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} @{}..{}", self.kind, self.span.start, self.span.end)
    }
}
