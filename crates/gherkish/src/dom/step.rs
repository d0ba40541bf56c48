//! Steps and their optional doc string or table argument.

use crate::keyword::StepKeyword;

use super::tag::{Comment, Tag};

/// A single step inside a Background, Scenario or Scenario Outline.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Step {
    keyword: StepKeyword,
    text: String,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Vec::is_empty"))]
    tags: Vec<Tag>,
    argument: StepArgument,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    comment: Option<Comment>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Vec::is_empty"))]
    leading_comments: Vec<Comment>,
}

impl Step {
    /// Create a step without tags or argument.
    #[must_use]
    pub fn new(keyword: StepKeyword, text: impl Into<String>) -> Self {
        Self {
            keyword,
            text: text.into(),
            tags: Vec::new(),
            argument: StepArgument::None,
            comment: None,
            leading_comments: Vec::new(),
        }
    }

    /// Attach `argument`, replacing any previous one.
    #[must_use]
    pub fn with_argument(mut self, argument: StepArgument) -> Self {
        self.argument = argument;
        self
    }

    /// Replace the step's tags.
    #[must_use]
    pub fn with_tags<I, T>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Tag>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Keyword introducing the step.
    #[must_use]
    pub const fn keyword(&self) -> StepKeyword {
        self.keyword
    }

    /// Replace the keyword.
    pub fn set_keyword(&mut self, keyword: StepKeyword) {
        self.keyword = keyword;
    }

    /// Step text after the keyword.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the step text.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Tags attached to the step.
    #[must_use]
    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    /// Append a tag.
    pub fn push_tag(&mut self, tag: impl Into<Tag>) {
        self.tags.push(tag.into());
    }

    /// The step's argument.
    #[must_use]
    pub const fn argument(&self) -> &StepArgument {
        &self.argument
    }

    /// Replace the step's argument.
    pub fn set_argument(&mut self, argument: StepArgument) {
        self.argument = argument;
    }

    /// The doc string argument, if the step has one.
    #[must_use]
    pub const fn doc_string(&self) -> Option<&DocString> {
        match &self.argument {
            StepArgument::DocString(doc) => Some(doc),
            _ => None,
        }
    }

    /// The table argument, if the step has one.
    #[must_use]
    pub const fn table(&self) -> Option<&Table> {
        match &self.argument {
            StepArgument::Table(table) => Some(table),
            _ => None,
        }
    }

    /// Comment trailing the step line.
    #[must_use]
    pub const fn comment(&self) -> Option<&Comment> {
        self.comment.as_ref()
    }

    /// Replace the trailing comment.
    pub fn set_comment(&mut self, comment: Option<Comment>) {
        self.comment = comment;
    }

    /// Comment lines immediately preceding the step.
    #[must_use]
    pub fn leading_comments(&self) -> &[Comment] {
        &self.leading_comments
    }

    /// Append a comment line preceding the step.
    pub fn push_leading_comment(&mut self, comment: impl Into<Comment>) {
        self.leading_comments.push(comment.into());
    }

    pub(crate) fn set_leading_comments(&mut self, comments: Vec<Comment>) {
        self.leading_comments = comments;
    }
}

/// Argument bound to a step: a doc string, a table, or nothing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "type"))]
pub enum StepArgument {
    /// The step has no argument.
    #[default]
    None,
    /// A fenced multi-line string.
    DocString(DocString),
    /// A data table.
    Table(Table),
}

impl StepArgument {
    /// Whether the step has no argument.
    #[must_use]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

/// A doc string with its fence indent already stripped from every line.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DocString {
    indent: usize,
    lines: Vec<String>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    comment: Option<Comment>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Vec::is_empty"))]
    leading_comments: Vec<Comment>,
}

impl DocString {
    /// Create an empty doc string whose fence was indented by `indent`.
    #[must_use]
    pub const fn new(indent: usize) -> Self {
        Self {
            indent,
            lines: Vec::new(),
            comment: None,
            leading_comments: Vec::new(),
        }
    }

    /// Create a doc string from its body lines.
    #[must_use]
    pub fn from_lines<I, T>(indent: usize, lines: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            indent,
            lines: lines.into_iter().map(Into::into).collect(),
            comment: None,
            leading_comments: Vec::new(),
        }
    }

    /// Number of whitespace characters preceding the opening fence.
    #[must_use]
    pub const fn indent(&self) -> usize {
        self.indent
    }

    /// Replace the recorded indent.
    pub fn set_indent(&mut self, indent: usize) {
        self.indent = indent;
    }

    /// Body lines without terminators.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Append a body line.
    pub fn push_line(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    /// Comment trailing the closing fence.
    #[must_use]
    pub const fn comment(&self) -> Option<&Comment> {
        self.comment.as_ref()
    }

    /// Replace the closing-fence comment.
    pub fn set_comment(&mut self, comment: Option<Comment>) {
        self.comment = comment;
    }

    /// Comment lines between the step and the opening fence.
    #[must_use]
    pub fn leading_comments(&self) -> &[Comment] {
        &self.leading_comments
    }

    /// Append a comment line preceding the opening fence.
    pub fn push_leading_comment(&mut self, comment: impl Into<Comment>) {
        self.leading_comments.push(comment.into());
    }

    pub(crate) fn set_leading_comments(&mut self, comments: Vec<Comment>) {
        self.leading_comments = comments;
    }
}

/// A pipe-delimited table.
///
/// Rows produced by the parser always share one cell count.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Table {
    rows: Vec<TableRow>,
}

impl Table {
    /// Create a table without rows.
    #[must_use]
    pub const fn new() -> Self {
        Self { rows: Vec::new() }
    }

    /// Build a table from rows of cell values.
    ///
    /// # Examples
    ///
    /// ```
    /// use gherkish::Table;
    ///
    /// let table = Table::from_rows([["a", "b"], ["1", "2"]]);
    /// assert_eq!(table.values(), vec![vec!["a", "b"], vec!["1", "2"]]);
    /// assert_eq!(table.column_count(), 2);
    /// ```
    #[must_use]
    pub fn from_rows<R, C, T>(rows: R) -> Self
    where
        R: IntoIterator<Item = C>,
        C: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            rows: rows.into_iter().map(TableRow::new).collect(),
        }
    }

    /// The table's rows.
    #[must_use]
    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    /// Append a row.
    pub fn push_row(&mut self, row: TableRow) {
        self.rows.push(row);
    }

    /// Cell values, row by row.
    #[must_use]
    pub fn values(&self) -> Vec<Vec<&str>> {
        self.rows
            .iter()
            .map(|row| row.cells().iter().map(String::as_str).collect())
            .collect()
    }

    /// Number of cells in the widest row.
    #[must_use]
    pub fn column_count(&self) -> usize {
        self.rows
            .iter()
            .map(|row| row.cells().len())
            .max()
            .unwrap_or_default()
    }

    /// Whether the table has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// One table row.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TableRow {
    cells: Vec<String>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    comment: Option<Comment>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Vec::is_empty"))]
    leading_comments: Vec<Comment>,
}

impl TableRow {
    /// Create a row from its cell values.
    #[must_use]
    pub fn new<I, T>(cells: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            cells: cells.into_iter().map(Into::into).collect(),
            comment: None,
            leading_comments: Vec::new(),
        }
    }

    /// Trimmed cell values.
    #[must_use]
    pub fn cells(&self) -> &[String] {
        &self.cells
    }

    /// Append a cell.
    pub fn push_cell(&mut self, cell: impl Into<String>) {
        self.cells.push(cell.into());
    }

    /// Comment trailing the row.
    #[must_use]
    pub const fn comment(&self) -> Option<&Comment> {
        self.comment.as_ref()
    }

    /// Replace the trailing comment.
    pub fn set_comment(&mut self, comment: Option<Comment>) {
        self.comment = comment;
    }

    /// Comment lines immediately preceding the row.
    #[must_use]
    pub fn leading_comments(&self) -> &[Comment] {
        &self.leading_comments
    }

    /// Append a comment line preceding the row.
    pub fn push_leading_comment(&mut self, comment: impl Into<Comment>) {
        self.leading_comments.push(comment.into());
    }

    pub(crate) fn set_leading_comments(&mut self, comments: Vec<Comment>) {
        self.leading_comments = comments;
    }
}
