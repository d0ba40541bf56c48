//! The Feature root node.

use super::block::{Block, Scenario};
use super::tag::{Comment, Tag};

/// Root of the document object model.
///
/// A Feature owns at most one Background and any number of scenarios, in
/// source order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Feature {
    title: String,
    description: String,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Vec::is_empty"))]
    tags: Vec<Tag>,
    background: Option<Block>,
    scenarios: Vec<Scenario>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    comment: Option<Comment>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Vec::is_empty"))]
    leading_comments: Vec<Comment>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Vec::is_empty"))]
    trailing_comments: Vec<Comment>,
}

impl Feature {
    /// Create a Feature with a title and nothing else.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Replace the Feature's tags.
    #[must_use]
    pub fn with_tags<I, T>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Tag>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Append a scenario and return the Feature.
    #[must_use]
    pub fn with_scenario(mut self, scenario: impl Into<Scenario>) -> Self {
        self.scenarios.push(scenario.into());
        self
    }

    /// Trimmed title text.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Replace the title.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Description lines joined by `\n`; empty when there is none.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Description lines; yields nothing for an empty description.
    pub fn description_lines(&self) -> impl Iterator<Item = &str> {
        let text = self.description.as_str();
        text.split('\n').filter(move |_| !text.is_empty())
    }

    /// Replace the description.
    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    /// Tags attached to the Feature.
    #[must_use]
    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    /// Append a tag.
    pub fn push_tag(&mut self, tag: impl Into<Tag>) {
        self.tags.push(tag.into());
    }

    /// The Background block, if present.
    #[must_use]
    pub const fn background(&self) -> Option<&Block> {
        self.background.as_ref()
    }

    /// Replace the Background block.
    pub fn set_background(&mut self, background: Option<Block>) {
        self.background = background;
    }

    /// Scenarios and outlines in source order.
    #[must_use]
    pub fn scenarios(&self) -> &[Scenario] {
        &self.scenarios
    }

    /// Mutable access to the scenarios.
    pub fn scenarios_mut(&mut self) -> &mut Vec<Scenario> {
        &mut self.scenarios
    }

    /// Append a scenario.
    pub fn push_scenario(&mut self, scenario: impl Into<Scenario>) {
        self.scenarios.push(scenario.into());
    }

    /// Comment trailing the `Feature:` line.
    #[must_use]
    pub const fn comment(&self) -> Option<&Comment> {
        self.comment.as_ref()
    }

    /// Replace the header comment.
    pub fn set_comment(&mut self, comment: Option<Comment>) {
        self.comment = comment;
    }

    /// Comment lines preceding the Feature.
    #[must_use]
    pub fn leading_comments(&self) -> &[Comment] {
        &self.leading_comments
    }

    /// Append a comment line preceding the Feature.
    pub fn push_leading_comment(&mut self, comment: impl Into<Comment>) {
        self.leading_comments.push(comment.into());
    }

    pub(crate) fn set_leading_comments(&mut self, comments: Vec<Comment>) {
        self.leading_comments = comments;
    }

    /// Comment lines after the last block.
    #[must_use]
    pub fn trailing_comments(&self) -> &[Comment] {
        &self.trailing_comments
    }

    /// Append a comment line after the last block.
    pub fn push_trailing_comment(&mut self, comment: impl Into<Comment>) {
        self.trailing_comments.push(comment.into());
    }

    pub(crate) fn set_trailing_comments(&mut self, comments: Vec<Comment>) {
        self.trailing_comments = comments;
    }
}
