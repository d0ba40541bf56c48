//! Event processor assembling a [`Feature`] tree.

use crate::bus::EventProcessor;
use crate::error::ProcessError;
use crate::event::{Event, EventKind};

use super::block::{Block, Examples, Outline, Scenario};
use super::feature::Feature;
use super::step::{DocString, Step, StepArgument, Table, TableRow};
use super::tag::{Comment, Tag};

/// The block currently between its begin and end events.
#[derive(Debug)]
enum OpenBlock {
    Background(Block),
    Scenario(Block),
    Outline(Outline),
}

impl OpenBlock {
    fn block_mut(&mut self) -> &mut Block {
        match self {
            Self::Background(block) | Self::Scenario(block) => block,
            Self::Outline(outline) => outline.block_mut(),
        }
    }
}

/// Node that receives the next inline comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum CommentTarget {
    #[default]
    None,
    Feature,
    Block,
    Step,
    DocString,
    Row,
    Examples,
}

/// Builds a [`Feature`] from the event stream.
///
/// Register the builder with a [`Parser`](crate::Parser), execute it, then
/// call [`DomBuilder::into_feature`]. Malformed event sequences, such as a
/// step outside any block, are rejected with
/// [`ProcessError::UnexpectedEvent`].
///
/// Inline comments attach to the node on the same line. Standalone comments
/// are buffered and become the leading comments of the next Feature, block,
/// step, table row or Examples section; any left at the end of the Feature
/// become its trailing comments.
#[derive(Debug, Default)]
pub struct DomBuilder {
    feature: Option<Feature>,
    finished: bool,
    block: Option<OpenBlock>,
    step: Option<Step>,
    doc: Option<DocString>,
    closed_doc: Option<DocString>,
    table: Option<Table>,
    row: Option<TableRow>,
    closed_table: Option<Table>,
    examples: Option<Examples>,
    pending_comments: Vec<Comment>,
    target: CommentTarget,
}

fn tags_of(names: &[String]) -> Vec<Tag> {
    names.iter().map(|name| Tag::new(name.as_str())).collect()
}

impl DomBuilder {
    /// Create a builder awaiting a `Feature` event.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The completed Feature, once `FeatureEnd` has been processed.
    #[must_use]
    pub const fn feature(&self) -> Option<&Feature> {
        if self.finished {
            self.feature.as_ref()
        } else {
            None
        }
    }

    /// Consume the builder, returning the completed Feature.
    ///
    /// Returns `None` when no complete Feature was seen.
    #[must_use]
    pub fn into_feature(self) -> Option<Feature> {
        if self.finished { self.feature } else { None }
    }

    fn feature_mut(&mut self, event: &'static str) -> Result<&mut Feature, ProcessError> {
        match self.feature.as_mut() {
            Some(feature) if !self.finished => Ok(feature),
            _ => Err(ProcessError::unexpected(event, "no Feature is open")),
        }
    }

    fn take_pending(&mut self) -> Vec<Comment> {
        std::mem::take(&mut self.pending_comments)
    }

    fn clear_arguments(&mut self) {
        self.closed_doc = None;
        self.closed_table = None;
    }

    fn begin_feature(
        &mut self,
        title: &str,
        description: &str,
        tags: &[String],
    ) -> Result<(), ProcessError> {
        if self.feature.is_some() {
            return Err(ProcessError::unexpected(
                "Feature",
                "the document already has a Feature",
            ));
        }
        let mut feature = Feature::new(title).with_tags(tags_of(tags));
        feature.set_description(description);
        feature.set_leading_comments(self.take_pending());
        self.feature = Some(feature);
        self.target = CommentTarget::Feature;
        Ok(())
    }

    fn end_feature(&mut self) -> Result<(), ProcessError> {
        if self.block.is_some() {
            return Err(ProcessError::unexpected("FeatureEnd", "a block is still open"));
        }
        let trailing = self.take_pending();
        let feature = self.feature_mut("FeatureEnd")?;
        feature.set_trailing_comments(trailing);
        log::debug!(
            "built feature {:?} with {} scenarios",
            feature.title(),
            feature.scenarios().len()
        );
        self.finished = true;
        Ok(())
    }

    fn begin_block(&mut self, event: &'static str, open: OpenBlock) -> Result<(), ProcessError> {
        self.feature_mut(event)?;
        if self.block.is_some() {
            return Err(ProcessError::unexpected(event, "another block is still open"));
        }
        let mut open = open;
        open.block_mut().set_leading_comments(self.take_pending());
        self.block = Some(open);
        self.target = CommentTarget::Block;
        Ok(())
    }

    fn end_block(&mut self, event: &'static str) -> Result<(), ProcessError> {
        if self.step.is_some() {
            return Err(ProcessError::unexpected(event, "a step is still open"));
        }
        let open = self.block.take();
        let feature = self.feature_mut(event)?;
        match (event, open) {
            ("BackgroundEnd", Some(OpenBlock::Background(block))) => {
                feature.set_background(Some(block));
            }
            ("ScenarioEnd", Some(OpenBlock::Scenario(block))) => {
                feature.push_scenario(Scenario::Plain(block));
            }
            ("OutlineEnd", Some(OpenBlock::Outline(outline))) => {
                feature.push_scenario(Scenario::Outline(outline));
            }
            _ => {
                return Err(ProcessError::unexpected(
                    event,
                    "it does not close the open block",
                ));
            }
        }
        Ok(())
    }

    fn begin_step(&mut self, step: Step) -> Result<(), ProcessError> {
        if self.block.is_none() {
            return Err(ProcessError::unexpected("Step", "no block is open"));
        }
        if self.step.is_some() {
            return Err(ProcessError::unexpected("Step", "another step is still open"));
        }
        let mut step = step;
        step.set_leading_comments(self.take_pending());
        self.step = Some(step);
        self.target = CommentTarget::Step;
        Ok(())
    }

    fn end_step(&mut self) -> Result<(), ProcessError> {
        let mut step = self
            .step
            .take()
            .ok_or_else(|| ProcessError::unexpected("StepEnd", "no step is open"))?;
        if let Some(doc) = self.closed_doc.take() {
            step.set_argument(StepArgument::DocString(doc));
        } else if let Some(table) = self.closed_table.take() {
            step.set_argument(StepArgument::Table(table));
        }
        let block = self
            .block
            .as_mut()
            .ok_or_else(|| ProcessError::unexpected("StepEnd", "no block is open"))?;
        block.block_mut().push_step(step);
        Ok(())
    }

    fn begin_examples(&mut self) -> Result<(), ProcessError> {
        if !matches!(self.block, Some(OpenBlock::Outline(_))) || self.step.is_some() {
            return Err(ProcessError::unexpected(
                "OutlineExamples",
                "examples must follow the steps of a Scenario Outline",
            ));
        }
        let mut examples = Examples::default();
        examples.set_leading_comments(self.take_pending());
        self.examples = Some(examples);
        self.target = CommentTarget::Examples;
        Ok(())
    }

    fn end_examples(&mut self) -> Result<(), ProcessError> {
        let mut examples = self.examples.take().ok_or_else(|| {
            ProcessError::unexpected("OutlineExamplesEnd", "no Examples section is open")
        })?;
        examples.set_table(self.closed_table.take().unwrap_or_default());
        match self.block.as_mut() {
            Some(OpenBlock::Outline(outline)) => {
                outline.set_examples(Some(examples));
                Ok(())
            }
            _ => Err(ProcessError::unexpected(
                "OutlineExamplesEnd",
                "no Scenario Outline is open",
            )),
        }
    }

    fn begin_table(&mut self) -> Result<(), ProcessError> {
        if self.step.is_none() && self.examples.is_none() {
            return Err(ProcessError::unexpected(
                "Table",
                "a table must belong to a step or Examples",
            ));
        }
        self.table = Some(Table::new());
        Ok(())
    }

    fn comment(&mut self, text: &str, inline: bool) {
        let comment = Comment::new(text);
        let slot = if inline { self.target } else { CommentTarget::None };
        let unattached = match slot {
            CommentTarget::None => Some(comment),
            CommentTarget::Feature => attach(self.feature.as_mut(), comment, Feature::set_comment),
            CommentTarget::Block => attach(
                self.block.as_mut().map(OpenBlock::block_mut),
                comment,
                Block::set_comment,
            ),
            CommentTarget::Step => attach(self.step.as_mut(), comment, Step::set_comment),
            CommentTarget::DocString => attach(self.doc.as_mut(), comment, DocString::set_comment),
            CommentTarget::Row => attach(self.row.as_mut(), comment, TableRow::set_comment),
            CommentTarget::Examples => {
                attach(self.examples.as_mut(), comment, Examples::set_comment)
            }
        };
        if let Some(comment) = unattached {
            self.pending_comments.push(comment);
        }
    }
}

/// Store `comment` on `node`, handing it back when there is no node.
fn attach<N>(
    node: Option<&mut N>,
    comment: Comment,
    set: fn(&mut N, Option<Comment>),
) -> Option<Comment> {
    let Some(node) = node else {
        return Some(comment);
    };
    set(node, Some(comment));
    None
}

impl EventProcessor for DomBuilder {
    fn process(&mut self, event: &Event) -> Result<(), ProcessError> {
        if self.finished {
            return Err(ProcessError::unexpected(
                event.kind.name(),
                "the Feature is already complete",
            ));
        }
        match &event.kind {
            EventKind::Feature {
                title,
                description,
                tags,
            } => self.begin_feature(title, description, tags)?,
            EventKind::FeatureEnd => self.end_feature()?,
            EventKind::Background { title, tags } => self.begin_block(
                "Background",
                OpenBlock::Background(Block::new(title.as_str()).with_tags(tags_of(tags))),
            )?,
            EventKind::Scenario { title, tags } => self.begin_block(
                "Scenario",
                OpenBlock::Scenario(Block::new(title.as_str()).with_tags(tags_of(tags))),
            )?,
            EventKind::Outline { title, tags } => self.begin_block(
                "Outline",
                OpenBlock::Outline(Outline::from_block(
                    Block::new(title.as_str()).with_tags(tags_of(tags)),
                )),
            )?,
            EventKind::BackgroundEnd | EventKind::ScenarioEnd | EventKind::OutlineEnd => {
                self.end_block(event.kind.name())?;
            }
            EventKind::OutlineExamples => self.begin_examples()?,
            EventKind::OutlineExamplesEnd => self.end_examples()?,
            EventKind::Step {
                keyword,
                text,
                tags,
            } => self.begin_step(Step::new(*keyword, text.as_str()).with_tags(tags_of(tags)))?,
            EventKind::StepEnd => self.end_step()?,
            EventKind::DocString { indent } => {
                if self.step.is_none() {
                    return Err(ProcessError::unexpected("DocString", "no step is open"));
                }
                let mut doc = DocString::new(*indent);
                doc.set_leading_comments(self.take_pending());
                self.doc = Some(doc);
                self.target = CommentTarget::DocString;
            }
            EventKind::DocStringLine { line } => {
                let doc = self
                    .doc
                    .as_mut()
                    .ok_or_else(|| ProcessError::unexpected("DocStringLine", "no doc string is open"))?;
                doc.push_line(line.as_str());
            }
            EventKind::DocStringEnd => {
                let doc = self
                    .doc
                    .take()
                    .ok_or_else(|| ProcessError::unexpected("DocStringEnd", "no doc string is open"))?;
                self.closed_doc = Some(doc);
            }
            EventKind::Table => self.begin_table()?,
            EventKind::TableRow => {
                if self.table.is_none() {
                    return Err(ProcessError::unexpected("TableRow", "no table is open"));
                }
                let mut row = TableRow::default();
                row.set_leading_comments(self.take_pending());
                self.row = Some(row);
                self.target = CommentTarget::Row;
            }
            EventKind::TableCell { content } => {
                let row = self
                    .row
                    .as_mut()
                    .ok_or_else(|| ProcessError::unexpected("TableCell", "no table row is open"))?;
                row.push_cell(content.as_str());
            }
            EventKind::TableRowEnd => {
                let row = self
                    .row
                    .take()
                    .ok_or_else(|| ProcessError::unexpected("TableRowEnd", "no table row is open"))?;
                if let Some(table) = self.table.as_mut() {
                    table.push_row(row);
                }
            }
            EventKind::TableEnd => {
                let table = self
                    .table
                    .take()
                    .ok_or_else(|| ProcessError::unexpected("TableEnd", "no table is open"))?;
                self.closed_table = Some(table);
            }
            EventKind::BlankLine => {}
            EventKind::Comment { text, inline } => self.comment(text, *inline),
        }
        if matches!(
            event.kind,
            EventKind::FeatureEnd
                | EventKind::BackgroundEnd
                | EventKind::ScenarioEnd
                | EventKind::OutlineEnd
                | EventKind::StepEnd
                | EventKind::OutlineExamplesEnd
        ) {
            self.clear_arguments();
        }
        if event.kind.nesting() == crate::event::Nesting::End {
            self.target = CommentTarget::None;
        }
        Ok(())
    }
}
