//! Canonical layout of a [`Feature`] tree.

use gherkish::text::format_tags;
use gherkish::{
    Block, BlockKeyword, Comment, DocString, Examples, Feature, Scenario, Step, StepArgument,
    Table, Tag, parse_feature,
};

use crate::buffer::{Line, LineBuffer};
use crate::options::FormatOptions;
use crate::style::Role;
use crate::table::TableLayout;

const BLOCK_INDENT: usize = 2;
const STEP_INDENT: usize = 4;
const ARGUMENT_INDENT: usize = 6;
/// Width of the field step keywords are right-aligned in when centred.
const KEYWORD_FIELD: usize = 9;

/// Print `feature` in canonical layout.
///
/// # Examples
///
/// ```
/// use gherkish::parse_feature;
/// use gherkish_fmt::{FormatOptions, format_feature};
///
/// let feature = parse_feature("Feature: Hi\n Scenario: S\n Given g")?;
/// assert_eq!(
///     format_feature(&feature, &FormatOptions::default()),
///     "Feature: Hi\n\n  Scenario: S\n    Given g\n",
/// );
/// # Ok::<(), gherkish::Error>(())
/// ```
///
/// The output of a parsed feature always parses back to the same tree.
/// Hand-built trees may hold nodes the recogniser never produces: a step
/// with the reserved [`StepKeyword::Or`](gherkish::StepKeyword::Or) keyword
/// is printed as written, and the result is not a valid document.
///
/// ```
/// use gherkish::{Block, Feature, Step, StepKeyword, parse_feature};
/// use gherkish_fmt::{FormatOptions, format_feature};
///
/// let feature = Feature::new("F").with_scenario(
///     Block::new("S")
///         .with_step(Step::new(StepKeyword::Given, "a"))
///         .with_step(Step::new(StepKeyword::Or, "b")),
/// );
/// let printed = format_feature(&feature, &FormatOptions::default());
/// assert!(printed.ends_with("    Given a\n    Or b\n"));
/// assert!(parse_feature(&printed).is_err());
/// ```
#[must_use]
pub fn format_feature(feature: &Feature, options: &FormatOptions) -> String {
    let mut printer = Printer::new(options);
    printer.feature(feature);
    log::debug!("formatted feature `{}` into {} lines", feature.title(), printer.buffer.len());
    printer.buffer.render(options)
}

/// Parse `source` and print it in canonical layout.
///
/// # Errors
///
/// Returns the parse error when `source` is not a valid feature document.
pub fn format_source(source: &str, options: &FormatOptions) -> Result<String, gherkish::Error> {
    let feature = parse_feature(source)?;
    Ok(format_feature(&feature, options))
}

struct Printer<'o> {
    options: &'o FormatOptions,
    buffer: LineBuffer,
}

impl<'o> Printer<'o> {
    fn new(options: &'o FormatOptions) -> Self {
        Self {
            options,
            buffer: LineBuffer::new(),
        }
    }

    fn comment(&self, comment: Option<&Comment>) -> Option<String> {
        if self.options.skip_comments {
            return None;
        }
        comment.map(|comment| comment.text().to_string())
    }

    fn comments(&mut self, indent: usize, comments: &[Comment]) {
        if self.options.skip_comments {
            return;
        }
        for comment in comments {
            self.buffer
                .push(Line::new(indent).push(comment.to_string(), Role::Comment));
        }
    }

    fn tags(&mut self, indent: usize, tags: &[Tag]) {
        if tags.is_empty() {
            return;
        }
        let names = format_tags(tags.iter().map(Tag::name));
        self.buffer.push(Line::new(indent).push(names, Role::Tag));
    }

    fn header(&mut self, indent: usize, keyword: &str, title: &str, comment: Option<&Comment>) {
        let mut line = Line::new(indent).push(keyword, Role::Keyword);
        if !title.is_empty() {
            line = line.push(format!(" {title}"), Role::Plain);
        }
        let comment = self.comment(comment);
        self.buffer.push(line.with_comment(comment));
    }

    fn feature(&mut self, feature: &Feature) {
        self.comments(0, feature.leading_comments());
        self.tags(0, feature.tags());
        self.header(
            0,
            BlockKeyword::Feature.as_str(),
            feature.title(),
            feature.comment(),
        );
        for line in feature.description_lines() {
            self.buffer
                .push(Line::new(BLOCK_INDENT).push(line, Role::Plain));
        }
        if let Some(background) = feature.background() {
            self.block(BlockKeyword::Background, background);
        }
        for scenario in feature.scenarios() {
            self.scenario(scenario);
        }
        if !self.options.skip_comments && !feature.trailing_comments().is_empty() {
            self.buffer.blank();
            self.comments(0, feature.trailing_comments());
        }
    }

    fn scenario(&mut self, scenario: &Scenario) {
        match scenario {
            Scenario::Plain(block) => self.block(BlockKeyword::Scenario, block),
            Scenario::Outline(outline) => {
                self.block(BlockKeyword::Outline, outline.block());
                if let Some(examples) = outline.examples() {
                    self.examples(examples);
                }
            }
        }
    }

    fn block(&mut self, keyword: BlockKeyword, block: &Block) {
        self.buffer.blank();
        self.comments(BLOCK_INDENT, block.leading_comments());
        self.tags(BLOCK_INDENT, block.tags());
        self.header(BLOCK_INDENT, keyword.as_str(), block.title(), block.comment());
        for step in block.steps() {
            self.step(step);
        }
    }

    fn step(&mut self, step: &Step) {
        self.comments(STEP_INDENT, step.leading_comments());
        self.tags(STEP_INDENT, step.tags());
        let keyword = step.keyword().as_str();
        let indent = if self.options.center_steps {
            KEYWORD_FIELD.saturating_sub(keyword.len())
        } else {
            STEP_INDENT
        };
        let line = Line::new(indent)
            .push(keyword, Role::StepKeyword)
            .push(format!(" {}", step.text()), Role::Plain)
            .with_comment(self.comment(step.comment()));
        self.buffer.push(line);
        match step.argument() {
            StepArgument::None => {}
            StepArgument::DocString(doc) => self.doc_string(doc),
            StepArgument::Table(table) => self.table(table),
        }
    }

    fn doc_string(&mut self, doc: &DocString) {
        self.comments(ARGUMENT_INDENT, doc.leading_comments());
        self.buffer
            .push(Line::new(ARGUMENT_INDENT).push("\"\"\"", Role::Fence));
        for text in doc.lines() {
            let line = if text.is_empty() {
                Line::blank()
            } else {
                Line::new(ARGUMENT_INDENT).push(text.as_str(), Role::Plain)
            };
            self.buffer.push(line);
        }
        let closing = Line::new(ARGUMENT_INDENT)
            .push("\"\"\"", Role::Fence)
            .with_comment(self.comment(doc.comment()));
        self.buffer.push(closing);
    }

    fn table(&mut self, table: &Table) {
        let layout = TableLayout::measure(table);
        for row in table.rows() {
            self.comments(ARGUMENT_INDENT, row.leading_comments());
            let line = layout
                .row(ARGUMENT_INDENT, row.cells())
                .with_comment(self.comment(row.comment()));
            self.buffer.push(line);
        }
    }

    fn examples(&mut self, examples: &Examples) {
        self.buffer.blank();
        self.comments(STEP_INDENT, examples.leading_comments());
        self.header(
            STEP_INDENT,
            BlockKeyword::Examples.as_str(),
            "",
            examples.comment(),
        );
        self.table(examples.table());
    }
}
