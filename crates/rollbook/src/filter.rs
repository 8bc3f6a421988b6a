//! Column filters and the global search.
//!
//! Filtering is a two-step flow: pick a column and type a pending value,
//! then apply it. Applied filters are kept one per column; applying a new
//! value on a filtered column replaces the old one in place.
//!
//! # Predicates
//!
//! | Column type | Pending input | Row passes when |
//! |-------------|---------------|-----------------|
//! | text | non-blank string | display value contains it, any case |
//! | date | a calendar day | raw value falls on that day |
//! | number | at least one bound | raw value within the inclusive bounds |
//!
//! Rows whose raw value is missing or unreadable never pass a date or
//! number filter.

use chrono::NaiveDate;
use rollbook_seeker::{ColumnType, FilterCriterion, NumberRange};

use crate::column::ColumnDef;

/// Value typed into the filter input for the active column.
#[derive(Debug, Clone, PartialEq)]
pub enum PendingValue {
    Text(String),
    Date(NaiveDate),
    Range { min: Option<f64>, max: Option<f64> },
}

impl PendingValue {
    /// Converts the input to a criterion for a column of type `kind`.
    ///
    /// Returns `None` when the input does not fit the column type or carries
    /// nothing to filter on.
    fn to_criterion(&self, kind: ColumnType) -> Option<FilterCriterion> {
        match (kind, self) {
            (ColumnType::Text, PendingValue::Text(s)) => {
                let trimmed = s.trim();
                (!trimmed.is_empty()).then(|| FilterCriterion::Text(trimmed.to_string()))
            }
            (ColumnType::Date, PendingValue::Date(day)) => Some(FilterCriterion::Date(*day)),
            (ColumnType::Number, PendingValue::Range { min, max }) => {
                let range = NumberRange::new(*min, *max);
                range.is_bounded().then_some(FilterCriterion::Range(range))
            }
            _ => None,
        }
    }
}

/// A committed column filter.
///
/// Two filters are the same filter when they name the same column and carry
/// the same encoded value.
#[derive(Debug, Clone)]
pub struct AppliedFilter {
    /// Id of the filtered column.
    pub column_id: String,
    /// Encoded value: substring, `yyyy-MM-dd` or `<min>:<max>`.
    pub value: String,
    /// Column header, for the chip.
    pub label: String,
    /// Column type at the time the filter was applied.
    pub kind: ColumnType,
    criterion: Option<FilterCriterion>,
}

impl AppliedFilter {
    /// Creates a filter from a typed criterion.
    pub fn new(
        column_id: impl Into<String>,
        label: impl Into<String>,
        criterion: FilterCriterion,
    ) -> Self {
        AppliedFilter {
            column_id: column_id.into(),
            value: criterion.encode(),
            label: label.into(),
            kind: criterion.kind(),
            criterion: Some(criterion),
        }
    }

    /// Creates a filter from an encoded value, decoding it leniently.
    ///
    /// A date that cannot be decoded produces a filter that matches nothing.
    pub fn from_encoded(
        column_id: impl Into<String>,
        label: impl Into<String>,
        kind: ColumnType,
        value: impl Into<String>,
    ) -> Self {
        let value = value.into();
        AppliedFilter {
            criterion: FilterCriterion::decode_lenient(kind, &value),
            column_id: column_id.into(),
            value,
            label: label.into(),
            kind,
        }
    }

    pub fn criterion(&self) -> Option<&FilterCriterion> {
        self.criterion.as_ref()
    }

    /// Text shown on the filter chip.
    ///
    /// ```rust
    /// use rollbook::AppliedFilter;
    /// use rollbook_seeker::{FilterCriterion, NumberRange};
    ///
    /// let f = AppliedFilter::new(
    ///     "daily_rate",
    ///     "Daily Rate",
    ///     FilterCriterion::Range(NumberRange::new(Some(200.0), None)),
    /// );
    /// assert_eq!(f.chip_text(), "Daily Rate: ≥ 200");
    /// ```
    pub fn chip_text(&self) -> String {
        let shown = match &self.criterion {
            Some(criterion) => criterion.describe(),
            None => self.value.clone(),
        };
        format!("{}: {}", self.label, shown)
    }

    fn same_as(&self, column_id: &str, value: &str) -> bool {
        self.column_id == column_id && self.value == value
    }

    /// Tests a row against this filter.
    pub fn matches<T>(&self, column: &ColumnDef<T>, row: &T) -> bool {
        match &self.criterion {
            Some(criterion @ FilterCriterion::Text(_)) => {
                criterion.matches_display(&column.display(row))
            }
            Some(criterion) => criterion.matches_raw(&column.raw(row)),
            None => false,
        }
    }
}

impl PartialEq for AppliedFilter {
    fn eq(&self, other: &Self) -> bool {
        self.same_as(&other.column_id, &other.value)
    }
}

/// Filter chooser and applied filters.
#[derive(Debug, Clone, Default)]
pub struct FilterState {
    active_column: Option<String>,
    pending: Option<PendingValue>,
    applied: Vec<AppliedFilter>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Id of the column chosen for the next filter.
    pub fn active_column(&self) -> Option<&str> {
        self.active_column.as_deref()
    }

    pub fn pending(&self) -> Option<&PendingValue> {
        self.pending.as_ref()
    }

    /// Applied filters, in the order they were first applied.
    pub fn applied(&self) -> &[AppliedFilter] {
        &self.applied
    }

    /// Chooses the column for the next filter and clears any pending input.
    pub fn select_column(&mut self, column_id: impl Into<String>) {
        self.active_column = Some(column_id.into());
        self.pending = None;
    }

    /// Stores pending input. Ignored when no column is chosen.
    pub fn set_pending(&mut self, value: PendingValue) {
        if self.active_column.is_some() {
            self.pending = Some(value);
        }
    }

    /// Returns the criterion the pending input would apply, for a column of
    /// type `kind`.
    pub fn pending_criterion(&self, kind: ColumnType) -> Option<FilterCriterion> {
        self.active_column.as_ref()?;
        self.pending.as_ref()?.to_criterion(kind)
    }

    /// Commits the pending input as a filter on the active column.
    ///
    /// Returns `true` if the applied set changed. On valid input the chooser
    /// is reset whether or not the set changed; invalid input leaves
    /// everything as it was.
    pub fn apply(&mut self, label: &str, kind: ColumnType) -> bool {
        let (Some(column_id), Some(criterion)) =
            (self.active_column.clone(), self.pending_criterion(kind))
        else {
            return false;
        };

        let filter = AppliedFilter::new(column_id, label, criterion);
        self.active_column = None;
        self.pending = None;

        if self.applied.iter().any(|f| *f == filter) {
            log::debug!("filter {}={} already applied", filter.column_id, filter.value);
            return false;
        }
        match self.applied.iter_mut().find(|f| f.column_id == filter.column_id) {
            Some(existing) => {
                log::debug!(
                    "replacing filter {}={} with {}",
                    existing.column_id,
                    existing.value,
                    filter.value
                );
                *existing = filter;
            }
            None => {
                log::debug!("applying filter {}={}", filter.column_id, filter.value);
                self.applied.push(filter);
            }
        }
        true
    }

    /// Removes the filter with this column id and value. Returns `true` if
    /// one was removed.
    pub fn remove(&mut self, column_id: &str, value: &str) -> bool {
        let before = self.applied.len();
        self.applied.retain(|f| !f.same_as(column_id, value));
        let removed = self.applied.len() != before;
        if removed {
            log::debug!("removed filter {}={}", column_id, value);
        }
        removed
    }

    /// Removes every applied filter. Returns `true` if any were removed.
    pub fn clear(&mut self) -> bool {
        if self.applied.is_empty() {
            return false;
        }
        log::debug!("cleared {} filter(s)", self.applied.len());
        self.applied.clear();
        true
    }
}

/// Label of the column chooser: `"<header> (<type>)"` for the active column,
/// `"Select Column"` otherwise.
pub fn chooser_label<T>(state: &FilterState, columns: &[ColumnDef<T>]) -> String {
    state
        .active_column()
        .and_then(|id| columns.iter().find(|c| c.id() == id))
        .and_then(|c| c.label().map(|label| format!("{} ({})", label, c.kind())))
        .unwrap_or_else(|| "Select Column".to_string())
}

/// Tests a row against the global search: the needle must appear, in any
/// case, in the display value of at least one searchable column. The needle
/// is used as typed; a blank one matches every row.
pub fn matches_global<T>(needle: &str, columns: &[ColumnDef<T>], row: &T) -> bool {
    if needle.trim().is_empty() {
        return true;
    }
    let criterion = FilterCriterion::Text(needle.to_string());
    columns
        .iter()
        .filter(|c| c.is_searchable())
        .any(|c| criterion.matches_display(&c.display(row)))
}
