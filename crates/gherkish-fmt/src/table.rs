//! Column layout for tables.

use std::sync::LazyLock;

use gherkish::Table;
use regex::Regex;

use crate::buffer::Line;
use crate::style::Role;

static NUMERIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[+-]?\d+([.,]\d+)?$").unwrap_or_else(|_| unreachable!()));

/// Whether a cell holds a plain number and should be right-aligned.
///
/// # Examples
///
/// ```
/// use gherkish_fmt::table::is_numeric;
///
/// assert!(is_numeric("-3,5"));
/// assert!(!is_numeric("3 apples"));
/// ```
#[must_use]
pub fn is_numeric(cell: &str) -> bool {
    NUMERIC.is_match(cell)
}

/// Widths of each column, in characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableLayout {
    widths: Vec<usize>,
}

impl TableLayout {
    /// Measure the widest cell in every column of `table`.
    #[must_use]
    pub fn measure(table: &Table) -> Self {
        let mut widths = vec![0usize; table.column_count()];
        for row in table.rows() {
            for (width, cell) in widths.iter_mut().zip(row.cells()) {
                *width = (*width).max(cell.chars().count());
            }
        }
        Self { widths }
    }

    /// Column widths in order.
    #[must_use]
    pub fn widths(&self) -> &[usize] {
        &self.widths
    }

    /// Render `cells` as a padded row line at `indent`.
    ///
    /// Numeric cells are right-aligned and all others left-aligned.
    #[must_use]
    pub fn row(&self, indent: usize, cells: &[String]) -> Line {
        let mut line = Line::new(indent).push("|", Role::Border);
        for (width, cell) in self.widths.iter().zip(cells) {
            let padded = if is_numeric(cell) {
                format!(" {cell:>width$} ")
            } else {
                format!(" {cell:<width$} ")
            };
            line = line.push(padded, Role::Plain).push("|", Role::Border);
        }
        line
    }
}
