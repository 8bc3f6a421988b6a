//! # Rollbook - filterable, sortable data tables for the terminal
//!
//! Rollbook is a headless table: it owns rows, column descriptors and the
//! interactive state (filters, global search, sort, selection) and derives
//! the visible rows from them. Presenters draw that state for the terminal
//! and map clicks back to actions.
//!
//! ## Core Concepts
//!
//! - [`ColumnDef`]: how to read, display, compare and label one column
//! - [`DataTable`]: rows + columns + [`TableState`], changed through [`Action`]s
//! - [`AppliedFilter`] / [`PendingValue`]: the two-step column filter flow
//! - [`Selection`] and [`CheckState`]: row checkboxes and the tri-state header
//! - [`LayoutSelector`]: grid above the breakpoint, cards below it
//! - [`Presenter`]: [`GridPresenter`] and [`CardPresenter`], returning
//!   [`Rendered`] frames with clickable [`Region`]s
//!
//! ## Quick Start
//!
//! ```rust
//! use rollbook::{Action, ColumnDef, DataTable, Layout, TableConfig, Viewport};
//! use rollbook_seeker::{Number, Value};
//!
//! struct Employee {
//!     first_name: String,
//!     daily_rate: f64,
//! }
//!
//! let columns = vec![
//!     ColumnDef::new("first_name", "First Name", |e: &Employee| Value::String(&e.first_name)),
//!     ColumnDef::new("daily_rate", "Daily Rate", |e: &Employee| {
//!         Value::Number(Number::F64(e.daily_rate))
//!     }),
//! ];
//! let data = vec![
//!     Employee { first_name: "John".into(), daily_rate: 250.0 },
//!     Employee { first_name: "Jane".into(), daily_rate: 300.0 },
//! ];
//!
//! let mut table = DataTable::new(columns, data, TableConfig::default()).unwrap();
//! table.dispatch(Action::ToggleSort("daily_rate".into()));
//! table.dispatch(Action::ToggleSort("daily_rate".into()));
//!
//! let names: Vec<_> = table.visible_rows().iter().map(|e| e.first_name.as_str()).collect();
//! assert_eq!(names, vec!["Jane", "John"]);
//!
//! table.set_viewport(Viewport::new(120));
//! assert_eq!(table.layout(), Layout::Desktop);
//! let frame = table.render().unwrap();
//! assert!(frame.lines.iter().any(|l| l.contains("Daily Rate ↓")));
//! ```

mod column;
pub mod columns;
mod config;
mod error;
mod filter;
mod layout;
mod present;
mod selection;
mod sort;
mod state;
mod table;

pub use column::{Accessor, CellRenderer, ColumnDef, Comparator, Header, HeaderRenderer, SELECT_COLUMN_ID};
pub use config::TableConfig;
pub use error::{ConfigError, TableError};
pub use filter::{chooser_label, matches_global, AppliedFilter, FilterState, PendingValue};
pub use layout::{Layout, LayoutSelector, Viewport, DEFAULT_BREAKPOINT};
pub use present::{CardPresenter, GridPresenter, Hit, Presenter, Region, Rendered, TableView};
pub use selection::{CheckState, RowId, Selection};
pub use sort::SortState;
pub use state::{Action, TableState};
pub use table::{DataTable, RowRef};
