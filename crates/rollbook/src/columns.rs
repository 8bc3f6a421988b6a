//! Ready-made column descriptors for [`Seekable`] rows.
//!
//! Each helper reads a field by key and pairs it with a display formatter:
//!
//! ```rust
//! use rollbook::columns::{currency_column, date_column, text_column};
//! use rollbook_seeker::{Number, Seekable, Value};
//!
//! struct Employee {
//!     first_name: String,
//!     employment_date: String,
//!     daily_rate: f64,
//! }
//!
//! impl Seekable for Employee {
//!     fn seeker_field_value(&self, field: &str) -> Value<'_> {
//!         match field {
//!             "first_name" => Value::String(&self.first_name),
//!             "employment_date" => Value::String(&self.employment_date),
//!             "daily_rate" => Value::Number(Number::F64(self.daily_rate)),
//!             _ => Value::None,
//!         }
//!     }
//! }
//!
//! let e = Employee {
//!     first_name: "John".into(),
//!     employment_date: "2023-01-15".into(),
//!     daily_rate: 1250.0,
//! };
//! assert_eq!(text_column::<Employee>("first_name", "First Name").display(&e), "John");
//! assert_eq!(date_column::<Employee>("employment_date", "Hired").display(&e), "January 15, 2023");
//! assert_eq!(currency_column::<Employee>("daily_rate", "Daily Rate").display(&e), "₱1,250.00");
//! ```

use rollbook_render::format::{
    format_currency, format_date, format_number, format_percentage, DEFAULT_CURRENCY,
};
use rollbook_seeker::{ColumnType, Seekable, Value};

use crate::column::{raw_display, ColumnDef};

fn field<T: Seekable + 'static>(key: &str, label: &str) -> ColumnDef<T> {
    let name = key.to_string();
    ColumnDef::new(key, label, move |row: &T| row.seeker_field_value(&name))
}

fn number_or_zero(value: &Value<'_>) -> f64 {
    value.to_f64().unwrap_or(0.0)
}

/// A plain text column.
pub fn text_column<T: Seekable + 'static>(key: &str, label: &str) -> ColumnDef<T> {
    let field_key = key.to_string();
    field(key, label).with_cell(move |row: &T| raw_display(&row.seeker_field_value(&field_key)))
}

/// A date column shown as `January 15, 2023`, sorted by timestamp with
/// blank and unparseable dates last.
pub fn date_column<T: Seekable + 'static>(key: &str, label: &str) -> ColumnDef<T> {
    let cell_key = key.to_string();
    field(key, label)
        .with_cell(move |row: &T| {
            let value = row.seeker_field_value(&cell_key);
            match value.to_calendar_day() {
                Some(day) if value.as_str().is_none() => day.format("%B %-d, %Y").to_string(),
                _ => format_date(value.as_str()),
            }
        })
        .sort_as(ColumnType::Date)
}

fn numeric_column<T, F>(key: &str, label: &str, format: F) -> ColumnDef<T>
where
    T: Seekable + 'static,
    F: Fn(f64) -> String + 'static,
{
    let cell_key = key.to_string();
    let sort_key = key.to_string();
    field(key, label)
        .with_cell(move |row: &T| format(number_or_zero(&row.seeker_field_value(&cell_key))))
        .with_comparator(move |a: &T, b: &T| {
            number_or_zero(&a.seeker_field_value(&sort_key))
                .total_cmp(&number_or_zero(&b.seeker_field_value(&sort_key)))
        })
}

/// A currency column shown as `₱1,234.50`. Missing values show and sort
/// as zero.
pub fn currency_column<T: Seekable + 'static>(key: &str, label: &str) -> ColumnDef<T> {
    numeric_column(key, label, |n| format_currency(Some(n), DEFAULT_CURRENCY))
}

/// A number column with thousands separators and fixed decimals.
pub fn number_column<T: Seekable + 'static>(key: &str, label: &str, decimals: usize) -> ColumnDef<T> {
    numeric_column(key, label, move |n| format_number(Some(n), decimals))
}

/// A percentage column: `0.125` shows as `12.5%` with one decimal.
pub fn percentage_column<T: Seekable + 'static>(
    key: &str,
    label: &str,
    decimals: usize,
) -> ColumnDef<T> {
    numeric_column(key, label, move |n| format_percentage(Some(n), decimals))
}
