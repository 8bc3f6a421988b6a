//! Bordered grid layout for wide terminals.
//!
//! A [`Grid`] resolves column widths from the header and cell contents, then
//! renders lines of the form `│ cell │ cell │`. It also reports where each
//! cell sits on the line so callers can map a click back to a column.
//!
//! ```rust
//! use rollbook_render::{BorderStyle, Grid, LineType};
//!
//! let rows = vec![vec!["John", "Doe"], vec!["Jane", "Smith"]];
//! let grid = Grid::fit(BorderStyle::Ascii, &["First", "Last"], &rows, 80);
//!
//! assert_eq!(grid.rule(LineType::Top), "+-------+-------+");
//! assert_eq!(grid.row(&["First", "Last"]), "| First | Last  |");
//! assert_eq!(grid.row(&rows[1]), "| Jane  | Smith |");
//! ```

use std::ops::Range;

use crate::border::{BorderStyle, LineType};
use crate::util::{display_width, fit};

/// Columns never shrink below this width unless their content is narrower.
const MIN_COLUMN_WIDTH: usize = 3;

/// Column widths resolved for a given terminal width.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    border: BorderStyle,
    widths: Vec<usize>,
}

impl Grid {
    /// Creates a grid with explicit column widths.
    pub fn new(border: BorderStyle, widths: Vec<usize>) -> Self {
        Grid { border, widths }
    }

    /// Resolves widths from the content so the grid fits in `total_width`.
    ///
    /// Each column starts at its widest cell (header included). While the
    /// grid is too wide, the widest column gives up one column at a time.
    /// If even minimum widths do not fit, the grid overflows.
    pub fn fit<H, S>(border: BorderStyle, header: &[H], rows: &[Vec<S>], total_width: usize) -> Self
    where
        H: AsRef<str>,
        S: AsRef<str>,
    {
        let mut widths: Vec<usize> = header.iter().map(|h| display_width(h.as_ref())).collect();
        for row in rows {
            for (i, cell) in row.iter().enumerate() {
                if let Some(w) = widths.get_mut(i) {
                    *w = (*w).max(display_width(cell.as_ref()));
                }
            }
        }

        let floors: Vec<usize> = widths.iter().map(|w| (*w).min(MIN_COLUMN_WIDTH)).collect();
        let available = total_width.saturating_sub(overhead(widths.len()));
        let mut used: usize = widths.iter().sum();
        while used > available {
            let widest = widths
                .iter()
                .enumerate()
                .filter(|(i, w)| **w > floors[*i])
                .max_by(|(ai, aw), (bi, bw)| aw.cmp(bw).then(bi.cmp(ai)))
                .map(|(i, _)| i);
            match widest {
                Some(i) => {
                    widths[i] -= 1;
                    used -= 1;
                }
                None => break,
            }
        }

        Grid { border, widths }
    }

    /// Resolved content widths, one per column.
    pub fn widths(&self) -> &[usize] {
        &self.widths
    }

    /// Full line width including borders and padding.
    pub fn total_width(&self) -> usize {
        self.widths.iter().sum::<usize>() + overhead(self.widths.len())
    }

    /// Screen columns covered by cell `index`, padding included.
    ///
    /// Used for hit-testing; a click on the padding counts as the cell.
    pub fn cell_span(&self, index: usize) -> Option<Range<usize>> {
        let width = *self.widths.get(index)?;
        let start = 1 + self.widths[..index].iter().map(|w| w + 3).sum::<usize>();
        Some(start..start + width + 2)
    }

    /// Index of the cell at screen column `x`, if any.
    pub fn cell_at(&self, x: usize) -> Option<usize> {
        (0..self.widths.len()).find(|i| self.cell_span(*i).is_some_and(|span| span.contains(&x)))
    }

    /// Renders one line of cells, fitting each to its column.
    ///
    /// Missing cells render blank; extra cells are ignored.
    pub fn row<S: AsRef<str>>(&self, cells: &[S]) -> String {
        let v = self.border.chars().vertical;
        let mut line = String::new();
        line.push(v);
        for (i, width) in self.widths.iter().enumerate() {
            let text = cells.get(i).map(|c| c.as_ref()).unwrap_or("");
            line.push(' ');
            line.push_str(&fit(text, *width));
            line.push(' ');
            line.push(v);
        }
        line
    }

    /// Renders a line spanning every column, e.g. an empty-state message.
    pub fn spanning_row(&self, text: &str) -> String {
        let v = self.border.chars().vertical;
        let inner = self.total_width().saturating_sub(4);
        format!("{} {} {}", v, fit(text, inner), v)
    }

    /// Renders a horizontal rule, or an empty string without borders.
    pub fn rule(&self, line_type: LineType) -> String {
        self.border.rule(line_type, &self.widths)
    }
}

/// Border and padding columns around `n` cells: `│ a │ b │` is 3n + 1.
fn overhead(n: usize) -> usize {
    if n == 0 {
        0
    } else {
        3 * n + 1
    }
}
