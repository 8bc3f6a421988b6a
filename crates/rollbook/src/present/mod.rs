//! Presenters: turning table state into terminal lines.
//!
//! A presenter draws a [`TableView`] into a [`Rendered`] frame: the lines to
//! print plus the screen [`Region`]s that map a click back to a [`Hit`].
//! Two presenters ship with the crate:
//!
//! - [`GridPresenter`]: bordered grid for wide viewports
//! - [`CardPresenter`]: one card per row for narrow viewports
//!
//! Both share the toolbar drawn above the rows.

mod card;
mod grid;
mod toolbar;

use std::fmt;
use std::ops::Range;

use rollbook_render::{Palette, RenderError};
use rollbook_seeker::Dir;

use crate::column::ColumnDef;
use crate::config::TableConfig;
use crate::filter::chooser_label;
use crate::selection::RowId;
use crate::state::TableState;

pub use card::CardPresenter;
pub use grid::GridPresenter;

/// What a click landed on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Hit {
    /// A sortable column header.
    Header(String),
    /// The header checkbox.
    SelectAll,
    /// A row's checkbox.
    Checkbox(RowId),
    /// A row, outside its checkbox.
    Row(RowId),
    /// The applied filter chip at this index.
    Chip(usize),
    /// The `Clear all` filters button.
    ClearFilters,
    /// The `Clear selection` button.
    ClearSelection,
}

/// A clickable span on one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    /// Line index within the frame.
    pub y: usize,
    /// Screen columns covered.
    pub x: Range<usize>,
    pub hit: Hit,
}

/// A rendered frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rendered {
    pub lines: Vec<String>,
    /// Clickable regions. Earlier regions win where they overlap.
    pub regions: Vec<Region>,
}

impl Rendered {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a line and returns its index.
    pub fn push_line(&mut self, line: impl Into<String>) -> usize {
        self.lines.push(line.into());
        self.lines.len() - 1
    }

    /// Appends a line unless it is empty, e.g. a rule without borders.
    pub fn push_nonempty(&mut self, line: String) {
        if !line.is_empty() {
            self.lines.push(line);
        }
    }

    pub fn add_region(&mut self, y: usize, x: Range<usize>, hit: Hit) {
        self.regions.push(Region { y, x, hit });
    }

    /// The hit at screen position (`x`, `y`), if any.
    pub fn hit_at(&self, x: usize, y: usize) -> Option<&Hit> {
        self.regions
            .iter()
            .find(|r| r.y == y && r.x.contains(&x))
            .map(|r| &r.hit)
    }
}

impl fmt::Display for Rendered {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

/// A read-only snapshot of a table, as presenters see it.
pub struct TableView<'a, T> {
    pub(crate) columns: &'a [ColumnDef<T>],
    pub(crate) data: &'a [T],
    pub(crate) state: &'a TableState,
    pub(crate) config: &'a TableConfig,
    pub(crate) visible: Vec<RowId>,
}

impl<'a, T> TableView<'a, T> {
    pub fn columns(&self) -> &'a [ColumnDef<T>] {
        self.columns
    }

    /// Columns that hold row data.
    pub fn data_columns(&self) -> impl Iterator<Item = &'a ColumnDef<T>> {
        self.columns.iter().filter(|c| c.is_filterable())
    }

    pub fn row(&self, id: RowId) -> &'a T {
        &self.data[id]
    }

    /// Rows that pass the filters, in display order.
    pub fn visible(&self) -> &[RowId] {
        &self.visible
    }

    pub fn total_rows(&self) -> usize {
        self.data.len()
    }

    pub fn state(&self) -> &'a TableState {
        self.state
    }

    pub fn config(&self) -> &'a TableConfig {
        self.config
    }

    pub fn selectable(&self) -> bool {
        self.config.enable_row_selection
    }

    pub fn palette(&self) -> Palette {
        Palette::new(self.config.styled)
    }

    /// Selected rows among the visible ones.
    pub fn selected_count(&self) -> usize {
        self.state.selection.count_in(&self.visible)
    }

    pub fn sort_dir(&self, column_id: &str) -> Option<Dir> {
        self.state.sort_dir(column_id)
    }

    pub fn chooser_label(&self) -> String {
        chooser_label(&self.state.filters, self.columns)
    }
}

/// Draws a table view into a frame `width` columns wide.
pub trait Presenter<T> {
    fn present(&self, view: &TableView<'_, T>, width: usize) -> Result<Rendered, RenderError>;
}
