//! Column descriptors.
//!
//! A [`ColumnDef`] tells the table how to read one column out of a row: the
//! raw value used by date/number filters and sorting, the display string
//! used by text filters, the global search and the presenters, and how the
//! header is drawn.
//!
//! ```rust
//! use rollbook::ColumnDef;
//! use rollbook_seeker::{ColumnType, Number, Value};
//!
//! struct Employee {
//!     first_name: String,
//!     daily_rate: f64,
//! }
//!
//! let name = ColumnDef::new("first_name", "First Name", |e: &Employee| {
//!     Value::String(&e.first_name)
//! });
//! let rate = ColumnDef::new("daily_rate", "Daily Rate", |e: &Employee| {
//!     Value::Number(Number::F64(e.daily_rate))
//! })
//! .with_cell(|e: &Employee| format!("{:.2}", e.daily_rate));
//!
//! assert_eq!(name.kind(), ColumnType::Text);
//! assert_eq!(rate.kind(), ColumnType::Number);
//! ```

use std::cmp::Ordering;
use std::fmt;

use rollbook_seeker::{classify, compare_values_in, ColumnType, Dir, Number, Value};

/// Id reserved for the selection checkbox column.
pub const SELECT_COLUMN_ID: &str = "select";

/// Reads the raw value of a column from a row.
pub type Accessor<T> = Box<dyn for<'a> Fn(&'a T) -> Value<'a>>;

/// Produces the display string of a column for a row.
pub type CellRenderer<T> = Box<dyn Fn(&T) -> String>;

/// Orders two rows by a column, ascending.
pub type Comparator<T> = Box<dyn Fn(&T, &T) -> Ordering>;

/// Draws a header from the column's current sort direction.
pub type HeaderRenderer = Box<dyn Fn(Option<Dir>) -> String>;

/// How a column header is drawn.
pub enum Header {
    /// A plain text label. Only labelled columns are filterable.
    Label(String),
    /// A computed header, e.g. an action column's icon.
    Custom(HeaderRenderer),
}

impl fmt::Debug for Header {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Header::Label(label) => f.debug_tuple("Label").field(label).finish(),
            Header::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// Describes one column of a table over rows of type `T`.
pub struct ColumnDef<T> {
    id: String,
    accessor_key: Option<String>,
    header: Header,
    kind: ColumnType,
    accessor: Accessor<T>,
    cell: Option<CellRenderer<T>>,
    sortable: bool,
    comparator: Option<Comparator<T>>,
    sort_as: Option<ColumnType>,
}

impl<T> ColumnDef<T> {
    /// Creates a sortable column with a text label.
    ///
    /// The column type is classified from `id`.
    pub fn new<F>(id: impl Into<String>, label: impl Into<String>, accessor: F) -> Self
    where
        F: for<'a> Fn(&'a T) -> Value<'a> + 'static,
    {
        let id = id.into();
        ColumnDef {
            kind: classify(&id),
            id,
            accessor_key: None,
            header: Header::Label(label.into()),
            accessor: Box::new(accessor),
            cell: None,
            sortable: true,
            comparator: None,
            sort_as: None,
        }
    }

    /// Names the field this column reads. The key takes precedence over the
    /// id for classification and filterability.
    pub fn with_accessor_key(mut self, key: impl Into<String>) -> Self {
        self.accessor_key = Some(key.into());
        self.kind = classify(self.resolved_id());
        self
    }

    /// Replaces the header with a computed one. The column stops being
    /// filterable and is left off cards, but the global search still reads it.
    pub fn with_header<F>(mut self, render: F) -> Self
    where
        F: Fn(Option<Dir>) -> String + 'static,
    {
        self.header = Header::Custom(Box::new(render));
        self
    }

    /// Sets the display renderer.
    pub fn with_cell<F>(mut self, render: F) -> Self
    where
        F: Fn(&T) -> String + 'static,
    {
        self.cell = Some(Box::new(render));
        self
    }

    /// Sets a comparator that replaces type-based ordering. A descending sort
    /// reverses it as a whole, missing values included.
    pub fn with_comparator<F>(mut self, compare: F) -> Self
    where
        F: Fn(&T, &T) -> Ordering + 'static,
    {
        self.comparator = Some(Box::new(compare));
        self
    }

    /// Sorts raw values as `kind` whatever the column was classified as.
    pub(crate) fn sort_as(mut self, kind: ColumnType) -> Self {
        self.sort_as = Some(kind);
        self
    }

    /// Enables or disables sorting on this column.
    pub fn sortable(mut self, sortable: bool) -> Self {
        self.sortable = sortable;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn accessor_key(&self) -> Option<&str> {
        self.accessor_key.as_deref()
    }

    /// The accessor key if set, else the id.
    pub fn resolved_id(&self) -> &str {
        self.accessor_key.as_deref().unwrap_or(&self.id)
    }

    pub fn kind(&self) -> ColumnType {
        self.kind
    }

    pub fn header(&self) -> &Header {
        &self.header
    }

    /// The text label, if the header is a plain label.
    pub fn label(&self) -> Option<&str> {
        match &self.header {
            Header::Label(label) => Some(label),
            Header::Custom(_) => None,
        }
    }

    pub fn is_sortable(&self) -> bool {
        self.sortable
    }

    /// Returns `true` for columns the global search looks at: every column
    /// with a non-empty id except the selection column.
    pub fn is_searchable(&self) -> bool {
        !self.resolved_id().is_empty() && self.id != SELECT_COLUMN_ID
    }

    /// Returns `true` for searchable columns with a plain label. These are
    /// the columns offered for filtering and shown on cards.
    pub fn is_filterable(&self) -> bool {
        !self.resolved_id().is_empty()
            && matches!(self.header, Header::Label(_))
            && self.id != SELECT_COLUMN_ID
    }

    /// Raw value for filtering and sorting.
    pub fn raw<'a>(&self, row: &'a T) -> Value<'a> {
        (self.accessor)(row)
    }

    /// Display string for the row.
    pub fn display(&self, row: &T) -> String {
        match &self.cell {
            Some(render) => render(row),
            None => raw_display(&self.raw(row)),
        }
    }

    /// Header text, with the sort direction passed to computed headers.
    pub fn header_text(&self, sort: Option<Dir>) -> String {
        match &self.header {
            Header::Label(label) => label.clone(),
            Header::Custom(render) => render(sort),
        }
    }

    /// Compares two rows ascending by this column.
    pub fn compare(&self, a: &T, b: &T) -> Ordering {
        self.compare_in(Dir::Asc, a, b)
    }

    /// Compares two rows in direction `dir`. Without a custom comparator,
    /// missing and unreadable values sort last either way.
    pub fn compare_in(&self, dir: Dir, a: &T, b: &T) -> Ordering {
        match &self.comparator {
            Some(compare) => dir.apply(compare(a, b)),
            None => compare_values_in(
                self.sort_as.unwrap_or(self.kind),
                dir,
                &self.raw(a),
                &self.raw(b),
            ),
        }
    }
}

impl<T> fmt::Debug for ColumnDef<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnDef")
            .field("id", &self.id)
            .field("accessor_key", &self.accessor_key)
            .field("header", &self.header)
            .field("kind", &self.kind)
            .field("sortable", &self.sortable)
            .field("custom_comparator", &self.comparator.is_some())
            .finish()
    }
}

/// Default display for a raw value when a column has no cell renderer.
pub(crate) fn raw_display(value: &Value<'_>) -> String {
    match value {
        Value::String(s) => (*s).to_string(),
        Value::Number(Number::I64(n)) => n.to_string(),
        Value::Number(Number::U64(n)) => n.to_string(),
        Value::Number(Number::F64(n)) => n.to_string(),
        Value::Timestamp(t) => t
            .calendar_day()
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_default(),
        Value::None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rollbook_seeker::Timestamp;

    struct Row {
        name: String,
        hired: Option<String>,
        rate: f64,
    }

    fn row(name: &str, hired: Option<&str>, rate: f64) -> Row {
        Row {
            name: name.to_string(),
            hired: hired.map(str::to_string),
            rate,
        }
    }

    fn hired_column() -> ColumnDef<Row> {
        ColumnDef::new("hired", "Hired", |r: &Row| match &r.hired {
            Some(s) => Value::String(s),
            None => Value::None,
        })
    }

    #[test]
    fn kind_follows_resolved_id() {
        let col = hired_column();
        assert_eq!(col.kind(), ColumnType::Text);
        let col = col.with_accessor_key("employment_date");
        assert_eq!(col.kind(), ColumnType::Date);
        assert_eq!(col.resolved_id(), "employment_date");
        assert_eq!(col.id(), "hired");
    }

    #[test]
    fn filterable_rules() {
        let labelled = ColumnDef::new("name", "Name", |r: &Row| Value::String(&r.name));
        assert!(labelled.is_filterable());

        let custom = ColumnDef::new("name", "Name", |r: &Row| Value::String(&r.name))
            .with_header(|_| "⋯".to_string());
        assert!(!custom.is_filterable());
        assert!(custom.is_searchable());
        assert_eq!(custom.label(), None);

        let select = ColumnDef::new(SELECT_COLUMN_ID, "Select", |_: &Row| Value::None);
        assert!(!select.is_filterable());
        assert!(!select.is_searchable());

        let unnamed = ColumnDef::new("", "Blank", |_: &Row| Value::None);
        assert!(!unnamed.is_filterable());
        assert!(!unnamed.is_searchable());
    }

    #[test]
    fn display_falls_back_to_raw() {
        let rate = ColumnDef::new("daily_rate", "Rate", |r: &Row| {
            Value::Number(Number::F64(r.rate))
        });
        assert_eq!(rate.display(&row("a", None, 250.5)), "250.5");
        assert_eq!(hired_column().display(&row("a", None, 0.0)), "");

        let rate = rate.with_cell(|r: &Row| format!("${:.2}", r.rate));
        assert_eq!(rate.display(&row("a", None, 250.5)), "$250.50");
    }

    #[test]
    fn custom_comparator_wins() {
        let col = ColumnDef::new("name", "Name", |r: &Row| Value::String(&r.name))
            .with_comparator(|a: &Row, b: &Row| a.name.len().cmp(&b.name.len()));
        let long = row("Alexandra", None, 0.0);
        let short = row("Zoe", None, 0.0);
        assert_eq!(col.compare(&short, &long), Ordering::Less);
    }

    #[test]
    fn header_text_for_custom_headers() {
        let col = ColumnDef::new("name", "Name", |r: &Row| Value::String(&r.name))
            .with_header(|dir| match dir {
                Some(d) => format!("Name ({})", d),
                None => "Name".to_string(),
            });
        assert_eq!(col.header_text(Some(Dir::Desc)), "Name (desc)");
        assert_eq!(col.header_text(None), "Name");
    }

    #[test]
    fn timestamp_display() {
        let v = Value::Timestamp(Timestamp::from_millis(1_673_740_800_000));
        assert_eq!(raw_display(&v), "2023-01-15");
    }
}
