//! The data table.

use std::collections::HashSet;

use rollbook_seeker::ColumnType;

use crate::column::ColumnDef;
use crate::config::TableConfig;
use crate::error::TableError;
use crate::filter::{chooser_label, matches_global, AppliedFilter};
use crate::layout::{Layout, Viewport};
use crate::present::{CardPresenter, GridPresenter, Hit, Presenter, Region, Rendered, TableView};
use crate::selection::{CheckState, RowId};
use crate::sort::sort_rows;
use crate::state::{Action, TableState};

/// A row handed to the row-click listener.
#[derive(Debug)]
pub struct RowRef<'a, T> {
    pub id: RowId,
    pub item: &'a T,
}

type RowClickFn<T> = Box<dyn FnMut(RowRef<'_, T>)>;
type SelectionFn<T> = Box<dyn FnMut(&[&T])>;

/// A filterable, sortable, selectable table over rows of type `T`.
///
/// The table owns its rows, its column descriptors and all interactive
/// state. The visible rows are derived from that state on every call.
///
/// ```rust
/// use rollbook::{Action, ColumnDef, DataTable, PendingValue, TableConfig};
/// use rollbook_seeker::Value;
///
/// struct Person {
///     name: String,
/// }
///
/// let columns = vec![ColumnDef::new("name", "Name", |p: &Person| Value::String(&p.name))];
/// let data = vec![
///     Person { name: "John".into() },
///     Person { name: "Jane".into() },
/// ];
/// let mut table = DataTable::new(columns, data, TableConfig::default()).unwrap();
///
/// table.dispatch(Action::SelectColumn("name".into()));
/// table.dispatch(Action::SetPending(PendingValue::Text("jan".into())));
/// table.dispatch(Action::ApplyFilter);
///
/// let names: Vec<_> = table.visible_rows().iter().map(|p| p.name.as_str()).collect();
/// assert_eq!(names, vec!["Jane"]);
/// ```
pub struct DataTable<T> {
    columns: Vec<ColumnDef<T>>,
    data: Vec<T>,
    config: TableConfig,
    state: TableState,
    viewport: Viewport,
    regions: Vec<Region>,
    on_row_click: Option<RowClickFn<T>>,
    on_selection_change: Option<SelectionFn<T>>,
}

impl<T> DataTable<T> {
    /// Creates a table. Column ids must be unique.
    pub fn new(
        columns: Vec<ColumnDef<T>>,
        data: Vec<T>,
        config: TableConfig,
    ) -> Result<Self, TableError> {
        {
            let mut seen = HashSet::new();
            for column in &columns {
                if !seen.insert(column.id()) {
                    return Err(TableError::DuplicateColumn(column.id().to_string()));
                }
            }
        }
        log::debug!(
            "table with {} column(s), {} row(s)",
            columns.len(),
            data.len()
        );
        Ok(DataTable {
            columns,
            data,
            config,
            state: TableState::new(),
            viewport: Viewport::default(),
            regions: Vec::new(),
            on_row_click: None,
            on_selection_change: None,
        })
    }

    /// Sets the listener for clicks on a row outside its checkbox.
    pub fn on_row_click<F>(mut self, listener: F) -> Self
    where
        F: FnMut(RowRef<'_, T>) + 'static,
    {
        self.on_row_click = Some(Box::new(listener));
        self
    }

    /// Sets the listener for selection changes. It receives every selected
    /// row in data order, hidden rows included.
    pub fn on_row_selection_change<F>(mut self, listener: F) -> Self
    where
        F: FnMut(&[&T]) + 'static,
    {
        self.on_selection_change = Some(Box::new(listener));
        self
    }

    pub fn columns(&self) -> &[ColumnDef<T>] {
        &self.columns
    }

    pub fn data(&self) -> &[T] {
        &self.data
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    pub fn state(&self) -> &TableState {
        &self.state
    }

    pub fn column(&self, id: &str) -> Option<&ColumnDef<T>> {
        self.columns.iter().find(|c| c.id() == id)
    }

    /// Columns offered in the filter chooser.
    pub fn filterable_columns(&self) -> impl Iterator<Item = &ColumnDef<T>> {
        self.columns.iter().filter(|c| c.is_filterable())
    }

    /// Replaces the rows. Selection is cleared; filters, search and sort
    /// are kept and apply to the new rows.
    pub fn set_data(&mut self, data: Vec<T>) {
        log::debug!("replacing {} row(s) with {}", self.data.len(), data.len());
        self.data = data;
        if self.state.selection.clear() {
            self.notify_selection();
        }
    }

    pub fn set_global_filter(&mut self, text: impl Into<String>) {
        self.dispatch(Action::SetGlobalFilter(text.into()));
    }

    /// Applies an action. Returns `true` if the state changed.
    pub fn dispatch(&mut self, action: Action) -> bool {
        log::trace!("dispatch {:?}", action);
        match action {
            Action::SelectColumn(id) => {
                if !self.column(&id).is_some_and(|c| c.is_filterable()) {
                    log::debug!("ignoring filter column {:?}: not filterable", id);
                    return false;
                }
                self.state.filters.select_column(id);
                true
            }
            Action::SetPending(value) => {
                let before = self.state.filters.pending().cloned();
                self.state.filters.set_pending(value);
                self.state.filters.pending() != before.as_ref()
            }
            Action::ApplyFilter => {
                let Some((label, kind)) = self.active_column_info() else {
                    return false;
                };
                let valid = self.state.filters.pending_criterion(kind).is_some();
                let changed = self.state.filters.apply(&label, kind);
                valid || changed
            }
            Action::RemoveFilter { column_id, value } => {
                self.state.filters.remove(&column_id, &value)
            }
            Action::ClearFilters => self.state.filters.clear(),
            Action::SetGlobalFilter(text) => {
                if self.state.global_filter == text {
                    return false;
                }
                log::debug!("global filter {:?}", text);
                self.state.global_filter = text;
                true
            }
            Action::ToggleSort(id) => {
                if !self.column(&id).is_some_and(|c| c.is_sortable()) {
                    log::debug!("ignoring sort on {:?}: not sortable", id);
                    return false;
                }
                self.state.toggle_sort(&id);
                true
            }
            Action::ToggleSelect(row) => {
                if !self.config.enable_row_selection || row >= self.data.len() {
                    return false;
                }
                self.state.selection.toggle(row);
                self.notify_selection();
                true
            }
            Action::ToggleSelectAllVisible => {
                if !self.config.enable_row_selection {
                    return false;
                }
                let visible = self.visible_row_ids();
                let changed = self.state.selection.toggle_visible(&visible);
                if changed {
                    self.notify_selection();
                }
                changed
            }
            Action::ClearSelection => {
                if !self.config.enable_row_selection {
                    return false;
                }
                let changed = self.state.selection.clear();
                if changed {
                    self.notify_selection();
                }
                changed
            }
        }
    }

    fn active_column_info(&self) -> Option<(String, ColumnType)> {
        let column = self.column(self.state.filters.active_column()?)?;
        Some((column.label()?.to_string(), column.kind()))
    }

    /// Returns `true` if the pending input would apply as a filter.
    pub fn is_pending_valid(&self) -> bool {
        self.active_column_info()
            .is_some_and(|(_, kind)| self.state.filters.pending_criterion(kind).is_some())
    }

    /// Label of the filter column chooser.
    pub fn chooser_label(&self) -> String {
        chooser_label(&self.state.filters, &self.columns)
    }

    pub fn applied_filters(&self) -> &[AppliedFilter] {
        self.state.filters.applied()
    }

    fn passes(&self, row: &T) -> bool {
        let column_filters = self.state.filters.applied().iter().all(|filter| {
            match self.column(&filter.column_id) {
                Some(column) => filter.matches(column, row),
                None => true,
            }
        });
        column_filters && matches_global(&self.state.global_filter, &self.columns, row)
    }

    /// Ids of the rows that pass every filter, in display order.
    pub fn visible_row_ids(&self) -> Vec<RowId> {
        let mut ids: Vec<RowId> = (0..self.data.len())
            .filter(|&id| self.passes(&self.data[id]))
            .collect();
        if let Some(sort) = self.state.sort() {
            if let Some(column) = self.column(&sort.column_id) {
                sort_rows(&mut ids, &self.data, column, sort.dir);
            }
        }
        ids
    }

    /// Rows that pass every filter, in display order.
    pub fn visible_rows(&self) -> Vec<&T> {
        self.visible_row_ids()
            .into_iter()
            .map(|id| &self.data[id])
            .collect()
    }

    /// Every selected row in data order, hidden rows included.
    pub fn selected_rows(&self) -> Vec<&T> {
        self.state
            .selection
            .ids()
            .filter_map(|id| self.data.get(id))
            .collect()
    }

    /// Number of selected rows among the visible ones.
    pub fn selected_count(&self) -> usize {
        self.state.selection.count_in(&self.visible_row_ids())
    }

    /// State of the header checkbox.
    pub fn header_check_state(&self) -> CheckState {
        self.state.selection.header_state(&self.visible_row_ids())
    }

    fn notify_selection(&mut self) {
        let DataTable {
            data,
            state,
            on_selection_change,
            ..
        } = self;
        let rows: Vec<&T> = state.selection.ids().filter_map(|id| data.get(id)).collect();
        log::debug!("selection changed: {} row(s)", rows.len());
        if let Some(listener) = on_selection_change {
            listener(&rows);
        }
    }

    /// Fires the row-click listener for a row.
    pub fn click_row(&mut self, id: RowId) {
        let DataTable {
            data, on_row_click, ..
        } = self;
        if let (Some(item), Some(listener)) = (data.get(id), on_row_click) {
            listener(RowRef { id, item });
        }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Sets the space to render into. Changing the layout keeps all state.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// The layout the current viewport selects.
    pub fn layout(&self) -> Layout {
        self.config.layout_selector().select(self.viewport)
    }

    fn view(&self) -> TableView<'_, T> {
        TableView {
            columns: &self.columns,
            data: &self.data,
            state: &self.state,
            config: &self.config,
            visible: self.visible_row_ids(),
        }
    }

    /// Renders with the presenter for the current layout.
    pub fn render(&mut self) -> Result<Rendered, TableError> {
        self.render_as(self.layout())
    }

    /// Renders with the presenter for `layout`, whatever the viewport.
    ///
    /// The frame's regions are kept for [`DataTable::click_at`].
    pub fn render_as(&mut self, layout: Layout) -> Result<Rendered, TableError> {
        match layout {
            Layout::Desktop => self.render_with(&GridPresenter::default()),
            Layout::Mobile => self.render_with(&CardPresenter::default()),
        }
    }

    /// Renders with a caller-supplied presenter.
    pub fn render_with(&mut self, presenter: &dyn Presenter<T>) -> Result<Rendered, TableError> {
        let frame = presenter.present(&self.view(), self.viewport.width)?;
        self.regions = frame.regions.clone();
        Ok(frame)
    }

    /// Dispatches a click on the last rendered frame. Returns what was hit.
    pub fn click_at(&mut self, x: usize, y: usize) -> Option<Hit> {
        let hit = self
            .regions
            .iter()
            .find(|r| r.y == y && r.x.contains(&x))
            .map(|r| r.hit.clone())?;
        log::debug!("click at ({}, {}) -> {:?}", x, y, hit);
        match &hit {
            Hit::Header(id) => {
                self.dispatch(Action::ToggleSort(id.clone()));
            }
            Hit::SelectAll => {
                self.dispatch(Action::ToggleSelectAllVisible);
            }
            Hit::Checkbox(row) => {
                self.dispatch(Action::ToggleSelect(*row));
            }
            Hit::Row(row) => self.click_row(*row),
            Hit::Chip(i) => {
                if let Some(filter) = self.state.filters.applied().get(*i).cloned() {
                    self.dispatch(Action::RemoveFilter {
                        column_id: filter.column_id,
                        value: filter.value,
                    });
                }
            }
            Hit::ClearFilters => {
                self.dispatch(Action::ClearFilters);
            }
            Hit::ClearSelection => {
                self.dispatch(Action::ClearSelection);
            }
        }
        Some(hit)
    }
}
