//! Line buffer that aligns trailing comments before rendering.
//!
//! The printer emits whole lines into a [`LineBuffer`]. Each line keeps its
//! indent, its styled segments and an optional trailing comment apart, so
//! the buffer can measure plain widths and place comments on a shared
//! column when the lines are finally rendered.

use crate::options::FormatOptions;
use crate::style::{Role, paint};

/// A run of text sharing one [`Role`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    text: String,
    role: Role,
}

impl Segment {
    /// Create a segment.
    #[must_use]
    pub fn new(text: impl Into<String>, role: Role) -> Self {
        Self {
            text: text.into(),
            role,
        }
    }

    /// The unstyled text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Width in characters.
    #[must_use]
    pub fn width(&self) -> usize {
        self.text.chars().count()
    }
}

/// One output line.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Line {
    indent: usize,
    segments: Vec<Segment>,
    comment: Option<String>,
}

impl Line {
    /// Start a line indented by `indent` spaces.
    #[must_use]
    pub fn new(indent: usize) -> Self {
        Self {
            indent,
            ..Self::default()
        }
    }

    /// An empty line.
    #[must_use]
    pub fn blank() -> Self {
        Self::default()
    }

    /// Append a segment.
    #[must_use]
    pub fn push(mut self, text: impl Into<String>, role: Role) -> Self {
        self.segments.push(Segment::new(text, role));
        self
    }

    /// Attach a trailing comment, given without its `#`.
    #[must_use]
    pub fn with_comment(mut self, comment: Option<String>) -> Self {
        self.comment = comment;
        self
    }

    /// Plain width of the indent and segments, in characters.
    #[must_use]
    pub fn width(&self) -> usize {
        self.indent + self.segments.iter().map(Segment::width).sum::<usize>()
    }

    /// Whether the line has neither content nor comment.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.comment.is_none() && self.segments.iter().all(|segment| segment.text.is_empty())
    }

    fn render(&self, column: usize, options: &FormatOptions, out: &mut String) {
        if self.is_blank() {
            return;
        }
        out.push_str(&" ".repeat(self.indent));
        for segment in &self.segments {
            out.push_str(&paint(&segment.text, segment.role, options.color));
        }
        if let Some(comment) = &self.comment {
            let gap = if options.align_comments {
                column.saturating_sub(self.width()).max(1)
            } else {
                1
            };
            out.push_str(&" ".repeat(gap));
            out.push_str(&paint(&format!("#{comment}"), Role::Comment, options.color));
        }
    }
}

/// Ordered output lines awaiting rendering.
#[derive(Debug, Clone, Default)]
pub struct LineBuffer {
    lines: Vec<Line>,
}

impl LineBuffer {
    /// Create an empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a line.
    pub fn push(&mut self, line: Line) {
        self.lines.push(line);
    }

    /// Append a blank line unless the buffer is empty or already ends in one.
    pub fn blank(&mut self) {
        if self.lines.last().is_some_and(|line| !line.is_blank()) {
            self.lines.push(Line::blank());
        }
    }

    /// Number of buffered lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether no lines are buffered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Render every line, each terminated by `\n`.
    ///
    /// Each maximal run of consecutive lines with trailing comments shares
    /// one comment column: the widest line in the run plus one, but never
    /// less than [`FormatOptions::comment_min_indent`].
    #[must_use]
    pub fn render(&self, options: &FormatOptions) -> String {
        let mut out = String::new();
        for run in self
            .lines
            .chunk_by(|a, b| a.comment.is_some() && b.comment.is_some())
        {
            let widest = run.iter().map(Line::width).max().unwrap_or_default();
            let column = options.comment_min_indent.max(widest + 1);
            for line in run {
                line.render(column, options, &mut out);
                out.push('\n');
            }
        }
        out
    }
}
