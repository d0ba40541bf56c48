//! String helpers shared by the recogniser, the DOM and the printer.
//!
//! Gherkin only treats spaces and tabs as inline whitespace, so these helpers
//! deliberately avoid the Unicode-aware trimming offered by `str`.

/// Byte offsets of a single physical line in a source buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineBounds {
    /// Offset of the first byte of the line.
    pub start: usize,
    /// Offset one past the last content byte; the terminator is excluded.
    pub end: usize,
    /// Offset of the first byte of the following line.
    pub next: usize,
}

/// Split `source` into lines terminated by `\n`, `\r` or `\r\n`.
///
/// A terminator at the very end of the buffer does not introduce an extra
/// empty line, so `"a\n"` and `"a"` both yield a single line.
///
/// # Examples
///
/// ```
/// use gherkish::text::split_lines;
///
/// let lines = split_lines("one\r\ntwo\rthree");
/// assert_eq!(lines.len(), 3);
/// assert_eq!(lines[1].start, 5);
/// ```
#[must_use]
pub fn split_lines(source: &str) -> Vec<LineBounds> {
    let bytes = source.as_bytes();
    let mut lines = Vec::new();
    let mut start = 0usize;
    let mut pos = 0usize;
    while let Some(&b) = bytes.get(pos) {
        match b {
            b'\n' => {
                lines.push(LineBounds {
                    start,
                    end: pos,
                    next: pos + 1,
                });
                pos += 1;
                start = pos;
            }
            b'\r' => {
                let next = if bytes.get(pos + 1) == Some(&b'\n') {
                    pos + 2
                } else {
                    pos + 1
                };
                lines.push(LineBounds {
                    start,
                    end: pos,
                    next,
                });
                pos = next;
                start = next;
            }
            _ => pos += 1,
        }
    }
    if start < bytes.len() {
        lines.push(LineBounds {
            start,
            end: bytes.len(),
            next: bytes.len(),
        });
    }
    lines
}

/// Whether `b` is Gherkin inline whitespace (a space or a tab).
#[must_use]
pub fn is_inline_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t')
}

/// Narrow `start..end` so that it excludes surrounding spaces and tabs.
#[must_use]
pub fn trim_ascii_whitespace(bytes: &[u8], mut start: usize, mut end: usize) -> (usize, usize) {
    while start < end && bytes.get(start).is_some_and(|b| is_inline_space(*b)) {
        start = start.saturating_add(1);
    }
    while end > start
        && bytes
            .get(end.saturating_sub(1))
            .is_some_and(|b| is_inline_space(*b))
    {
        end = end.saturating_sub(1);
    }
    (start, end)
}

/// Trim spaces and tabs from both ends of `text`.
#[must_use]
pub fn trim_inline(text: &str) -> &str {
    text.trim_matches([' ', '\t'])
}

/// Remove at most `indent` leading spaces or tabs from `line`.
///
/// Stripping stops at the first character that is not inline whitespace, so
/// lines indented less than `indent` keep all of their content.
///
/// # Examples
///
/// ```
/// use gherkish::text::strip_indent;
///
/// assert_eq!(strip_indent("       2", 5), "  2");
/// assert_eq!(strip_indent("  x", 5), "x");
/// ```
#[must_use]
pub fn strip_indent(line: &str, indent: usize) -> &str {
    let mut cut = 0usize;
    for (seen, ch) in line.chars().enumerate() {
        if seen >= indent || !matches!(ch, ' ' | '\t') {
            break;
        }
        cut += ch.len_utf8();
    }
    line.get(cut..).unwrap_or(line)
}

/// Render tag names as a space separated `@tag` list.
///
/// # Examples
///
/// ```
/// use gherkish::text::format_tags;
///
/// assert_eq!(format_tags(["a", "b"]), "@a @b");
/// ```
#[must_use]
pub fn format_tags<I, T>(tags: I) -> String
where
    I: IntoIterator<Item = T>,
    T: AsRef<str>,
{
    tags.into_iter()
        .map(|tag| format!("@{}", tag.as_ref()))
        .collect::<Vec<_>>()
        .join(" ")
}
