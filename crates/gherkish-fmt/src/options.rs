//! Pretty-printer configuration.

/// Default minimum column for aligned trailing comments.
pub const DEFAULT_COMMENT_INDENT: usize = 45;

/// Controls the canonical layout produced by the printer.
///
/// # Examples
///
/// ```
/// use gherkish_fmt::FormatOptions;
///
/// let options = FormatOptions::default().with_center_steps(true);
/// assert!(options.center_steps);
/// assert_eq!(options.comment_min_indent, 45);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatOptions {
    /// Right-align step keywords in a nine-character field.
    pub center_steps: bool,
    /// Emit ANSI colour and attribute sequences.
    pub color: bool,
    /// Align runs of trailing comments on a shared column.
    pub align_comments: bool,
    /// Minimum column for aligned trailing comments.
    pub comment_min_indent: usize,
    /// Drop every comment from the output.
    pub skip_comments: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            center_steps: false,
            color: false,
            align_comments: true,
            comment_min_indent: DEFAULT_COMMENT_INDENT,
            skip_comments: false,
        }
    }
}

impl FormatOptions {
    /// Set whether step keywords are right-aligned.
    #[must_use]
    pub const fn with_center_steps(mut self, center_steps: bool) -> Self {
        self.center_steps = center_steps;
        self
    }

    /// Set whether ANSI styling is emitted.
    #[must_use]
    pub const fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Set whether trailing comments are aligned.
    #[must_use]
    pub const fn with_align_comments(mut self, align_comments: bool) -> Self {
        self.align_comments = align_comments;
        self
    }

    /// Set the minimum column for aligned trailing comments.
    #[must_use]
    pub const fn with_comment_min_indent(mut self, comment_min_indent: usize) -> Self {
        self.comment_min_indent = comment_min_indent;
        self
    }

    /// Set whether comments are dropped.
    #[must_use]
    pub const fn with_skip_comments(mut self, skip_comments: bool) -> Self {
        self.skip_comments = skip_comments;
        self
    }
}
