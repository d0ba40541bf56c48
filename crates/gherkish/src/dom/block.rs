//! Backgrounds, scenarios and scenario outlines.

use super::step::{Step, Table};
use super::tag::{Comment, Tag};

/// Content shared by every block: title, tags and steps.
///
/// A Background is a bare `Block`; scenarios wrap one in [`Scenario`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Block {
    title: String,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Vec::is_empty"))]
    tags: Vec<Tag>,
    steps: Vec<Step>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    comment: Option<Comment>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Vec::is_empty"))]
    leading_comments: Vec<Comment>,
}

impl Block {
    /// Create an empty block.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Replace the block's tags.
    #[must_use]
    pub fn with_tags<I, T>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Tag>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Append `step` and return the block.
    #[must_use]
    pub fn with_step(mut self, step: Step) -> Self {
        self.steps.push(step);
        self
    }

    /// Title text, possibly empty.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Replace the title.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Tags attached to the block.
    #[must_use]
    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    /// Append a tag.
    pub fn push_tag(&mut self, tag: impl Into<Tag>) {
        self.tags.push(tag.into());
    }

    /// Steps in source order.
    #[must_use]
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Mutable access to the steps.
    pub fn steps_mut(&mut self) -> &mut Vec<Step> {
        &mut self.steps
    }

    /// Append a step.
    pub fn push_step(&mut self, step: Step) {
        self.steps.push(step);
    }

    /// Comment trailing the block header.
    #[must_use]
    pub const fn comment(&self) -> Option<&Comment> {
        self.comment.as_ref()
    }

    /// Replace the header comment.
    pub fn set_comment(&mut self, comment: Option<Comment>) {
        self.comment = comment;
    }

    /// Comment lines immediately preceding the block.
    #[must_use]
    pub fn leading_comments(&self) -> &[Comment] {
        &self.leading_comments
    }

    /// Append a comment line preceding the block.
    pub fn push_leading_comment(&mut self, comment: impl Into<Comment>) {
        self.leading_comments.push(comment.into());
    }

    pub(crate) fn set_leading_comments(&mut self, comments: Vec<Comment>) {
        self.leading_comments = comments;
    }
}

/// A Scenario Outline: a block plus its optional Examples.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Outline {
    #[cfg_attr(feature = "serde", serde(flatten))]
    block: Block,
    examples: Option<Examples>,
}

impl Outline {
    /// Create an outline without steps or examples.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self::from_block(Block::new(title))
    }

    /// Wrap an existing block.
    #[must_use]
    pub const fn from_block(block: Block) -> Self {
        Self {
            block,
            examples: None,
        }
    }

    /// Attach examples and return the outline.
    #[must_use]
    pub fn with_examples(mut self, examples: Examples) -> Self {
        self.examples = Some(examples);
        self
    }

    /// Title, tags and steps of the outline.
    #[must_use]
    pub const fn block(&self) -> &Block {
        &self.block
    }

    /// Mutable access to the title, tags and steps.
    pub fn block_mut(&mut self) -> &mut Block {
        &mut self.block
    }

    /// The Examples section, if present.
    #[must_use]
    pub const fn examples(&self) -> Option<&Examples> {
        self.examples.as_ref()
    }

    /// Replace the Examples section.
    pub fn set_examples(&mut self, examples: Option<Examples>) {
        self.examples = examples;
    }
}

/// The Examples section of an outline.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Examples {
    table: Table,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    comment: Option<Comment>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Vec::is_empty"))]
    leading_comments: Vec<Comment>,
}

impl Examples {
    /// Create an Examples section holding `table`.
    #[must_use]
    pub fn new(table: Table) -> Self {
        Self {
            table,
            ..Self::default()
        }
    }

    /// The examples table; empty when the section had no rows.
    #[must_use]
    pub const fn table(&self) -> &Table {
        &self.table
    }

    /// Replace the table.
    pub fn set_table(&mut self, table: Table) {
        self.table = table;
    }

    /// Comment trailing the `Examples:` line.
    #[must_use]
    pub const fn comment(&self) -> Option<&Comment> {
        self.comment.as_ref()
    }

    /// Replace the header comment.
    pub fn set_comment(&mut self, comment: Option<Comment>) {
        self.comment = comment;
    }

    /// Comment lines immediately preceding `Examples:`.
    #[must_use]
    pub fn leading_comments(&self) -> &[Comment] {
        &self.leading_comments
    }

    /// Append a comment line preceding `Examples:`.
    pub fn push_leading_comment(&mut self, comment: impl Into<Comment>) {
        self.leading_comments.push(comment.into());
    }

    pub(crate) fn set_leading_comments(&mut self, comments: Vec<Comment>) {
        self.leading_comments = comments;
    }
}

/// A scenario: either a plain Scenario or a Scenario Outline.
///
/// The accessors below give a common view over both variants.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind"))]
pub enum Scenario {
    /// `Scenario:`
    Plain(Block),
    /// `Scenario Outline:`
    Outline(Outline),
}

impl Scenario {
    /// Title, tags and steps regardless of variant.
    #[must_use]
    pub const fn block(&self) -> &Block {
        match self {
            Self::Plain(block) => block,
            Self::Outline(outline) => outline.block(),
        }
    }

    /// Mutable title, tags and steps regardless of variant.
    pub fn block_mut(&mut self) -> &mut Block {
        match self {
            Self::Plain(block) => block,
            Self::Outline(outline) => outline.block_mut(),
        }
    }

    /// Title text, possibly empty.
    #[must_use]
    pub fn title(&self) -> &str {
        self.block().title()
    }

    /// Tags attached to the scenario.
    #[must_use]
    pub fn tags(&self) -> &[Tag] {
        self.block().tags()
    }

    /// Steps in source order.
    #[must_use]
    pub fn steps(&self) -> &[Step] {
        self.block().steps()
    }

    /// Whether this is a Scenario Outline.
    #[must_use]
    pub const fn is_outline(&self) -> bool {
        matches!(self, Self::Outline(_))
    }

    /// The outline, when this is a Scenario Outline.
    #[must_use]
    pub const fn as_outline(&self) -> Option<&Outline> {
        match self {
            Self::Outline(outline) => Some(outline),
            Self::Plain(_) => None,
        }
    }

    /// The outline's Examples section, if any.
    #[must_use]
    pub fn examples(&self) -> Option<&Examples> {
        self.as_outline().and_then(Outline::examples)
    }
}

impl From<Block> for Scenario {
    fn from(block: Block) -> Self {
        Self::Plain(block)
    }
}

impl From<Outline> for Scenario {
    fn from(outline: Outline) -> Self {
        Self::Outline(outline)
    }
}
