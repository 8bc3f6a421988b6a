//! The table's owned state and the actions that change it.
//!
//! Everything a user can change lives in one [`TableState`]. It is only
//! mutated through [`Action`]s dispatched on a
//! [`DataTable`](crate::DataTable) (plus replacing the data), so every
//! transition goes through one place where selection listeners are notified.

use rollbook_seeker::Dir;

use crate::filter::{FilterState, PendingValue};
use crate::selection::{RowId, Selection};
use crate::sort::{self, SortState};

/// A user-driven state transition.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Choose the column for the next filter, clearing pending input.
    SelectColumn(String),
    /// Type into the filter input.
    SetPending(PendingValue),
    /// Commit the pending input as a filter.
    ApplyFilter,
    /// Remove the filter with this column id and encoded value.
    RemoveFilter { column_id: String, value: String },
    /// Remove every filter.
    ClearFilters,
    /// Replace the global search text.
    SetGlobalFilter(String),
    /// Advance the sort on a column header.
    ToggleSort(String),
    /// Flip one row's checkbox.
    ToggleSelect(RowId),
    /// Flip the header checkbox over the visible rows.
    ToggleSelectAllVisible,
    /// Deselect everything.
    ClearSelection,
}

/// Filters, search, sort and selection of one table.
#[derive(Debug, Clone, Default)]
pub struct TableState {
    pub(crate) filters: FilterState,
    pub(crate) global_filter: String,
    pub(crate) sort: Option<SortState>,
    pub(crate) selection: Selection,
}

impl TableState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn global_filter(&self) -> &str {
        &self.global_filter
    }

    pub fn sort(&self) -> Option<&SortState> {
        self.sort.as_ref()
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Sort direction shown on a column's header.
    pub fn sort_dir(&self, column_id: &str) -> Option<Dir> {
        sort::direction_of(self.sort.as_ref(), column_id)
    }

    pub(crate) fn toggle_sort(&mut self, column_id: &str) {
        self.sort = sort::toggle(self.sort.as_ref(), column_id);
        match &self.sort {
            Some(s) => log::debug!("sorting by {} {}", s.column_id, s.dir),
            None => log::debug!("sort cleared"),
        }
    }
}
