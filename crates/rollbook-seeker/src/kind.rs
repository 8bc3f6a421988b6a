//! Column type classification.
//!
//! A column's semantic type decides which filter input it gets and how its
//! values are compared. The type is inferred from the column identifier with a
//! fixed substring heuristic; there is no configuration surface.

use std::fmt;

/// Semantic type of a table column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColumnType {
    /// Free text, filtered by case-insensitive substring.
    #[default]
    Text,
    /// Calendar date, filtered by exact day.
    Date,
    /// Numeric value, filtered by inclusive range.
    Number,
}

const DATE_KEYWORDS: &[&str] = &["date", "Date"];
const NUMBER_KEYWORDS: &[&str] = &["rate", "amount", "price", "salary"];

/// Infers the column type from a column identifier.
///
/// Matching is case-sensitive and ordered: date keywords win over numeric
/// keywords, and anything else is text. An identifier that happens to contain
/// a keyword (`"update_count"` contains `"date"`) is misclassified; callers
/// pick their ids accordingly.
///
/// ```
/// use rollbook_seeker::{classify, ColumnType};
///
/// assert_eq!(classify("employment_date"), ColumnType::Date);
/// assert_eq!(classify("startDate"), ColumnType::Date);
/// assert_eq!(classify("daily_rate"), ColumnType::Number);
/// assert_eq!(classify("first_name"), ColumnType::Text);
/// ```
pub fn classify(column_id: &str) -> ColumnType {
    if DATE_KEYWORDS.iter().any(|k| column_id.contains(k)) {
        return ColumnType::Date;
    }
    if NUMBER_KEYWORDS.iter().any(|k| column_id.contains(k)) {
        return ColumnType::Number;
    }
    ColumnType::Text
}

impl ColumnType {
    /// Returns the display name of this type.
    pub fn as_str(self) -> &'static str {
        match self {
            ColumnType::Text => "text",
            ColumnType::Date => "date",
            ColumnType::Number => "number",
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
