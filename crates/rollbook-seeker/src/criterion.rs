//! Committed filter criteria.
//!
//! A [`FilterCriterion`] is the typed form of an applied column filter. Each
//! variant has a string encoding used for display, identity and transport:
//!
//! - text: the substring itself
//! - date: `yyyy-MM-dd`
//! - number: `<min>:<max>`, either side empty when unbounded

use std::fmt;

use chrono::NaiveDate;

use crate::error::{Result, SeekerError};
use crate::kind::ColumnType;
use crate::value::Value;

/// Inclusive numeric range with optional bounds.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NumberRange {
    /// Lower bound, inclusive.
    pub min: Option<f64>,
    /// Upper bound, inclusive.
    pub max: Option<f64>,
}

impl NumberRange {
    /// Creates a range from optional bounds. NaN bounds are dropped.
    pub fn new(min: Option<f64>, max: Option<f64>) -> Self {
        NumberRange {
            min: min.filter(|v| !v.is_nan()),
            max: max.filter(|v| !v.is_nan()),
        }
    }

    /// Returns `true` if at least one bound is set.
    pub fn is_bounded(&self) -> bool {
        self.min.is_some() || self.max.is_some()
    }

    /// Returns `true` if `value` lies within the bounds.
    pub fn contains(&self, value: f64) -> bool {
        if let Some(min) = self.min {
            if value < min {
                return false;
            }
        }
        if let Some(max) = self.max {
            if value > max {
                return false;
            }
        }
        true
    }

    /// Parses `<min>:<max>` leniently.
    ///
    /// A side that is empty or not a number is unbounded. A value without a
    /// colon is read as a lower bound.
    pub fn parse_lenient(s: &str) -> NumberRange {
        let (min, max) = s.split_once(':').unwrap_or((s, ""));
        NumberRange::new(parse_bound(min), parse_bound(max))
    }

    /// Encodes the range as `<min>:<max>`.
    pub fn encode(&self) -> String {
        format!(
            "{}:{}",
            self.min.map(format_bound).unwrap_or_default(),
            self.max.map(format_bound).unwrap_or_default()
        )
    }
}

fn parse_bound(s: &str) -> Option<f64> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    s.parse::<f64>().ok().filter(|v| !v.is_nan())
}

/// Formats a bound without a trailing `.0` for whole numbers.
fn format_bound(v: f64) -> String {
    format!("{}", v)
}

/// A committed, typed column filter.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterCriterion {
    /// Case-insensitive substring of the display value.
    Text(String),
    /// Exact calendar day of the raw value.
    Date(NaiveDate),
    /// Inclusive range over the raw numeric value.
    Range(NumberRange),
}

impl FilterCriterion {
    /// Returns the column type this criterion applies to.
    pub fn kind(&self) -> ColumnType {
        match self {
            FilterCriterion::Text(_) => ColumnType::Text,
            FilterCriterion::Date(_) => ColumnType::Date,
            FilterCriterion::Range(_) => ColumnType::Number,
        }
    }

    /// Encodes the criterion to its string form.
    pub fn encode(&self) -> String {
        match self {
            FilterCriterion::Text(s) => s.clone(),
            FilterCriterion::Date(d) => d.format("%Y-%m-%d").to_string(),
            FilterCriterion::Range(r) => r.encode(),
        }
    }

    /// Decodes an encoded value for a column of the given type.
    ///
    /// Strict counterpart of [`FilterCriterion::decode_lenient`], for values
    /// that arrive from outside the table.
    ///
    /// ```
    /// use rollbook_seeker::{ColumnType, FilterCriterion, SeekerError};
    ///
    /// assert!(FilterCriterion::decode(ColumnType::Number, "200:").is_ok());
    /// assert_eq!(
    ///     FilterCriterion::decode(ColumnType::Number, ":"),
    ///     Err(SeekerError::UnboundedRange(":".to_string()))
    /// );
    /// ```
    pub fn decode(kind: ColumnType, value: &str) -> Result<FilterCriterion> {
        match kind {
            ColumnType::Text => {
                let trimmed = value.trim();
                if trimmed.is_empty() {
                    return Err(SeekerError::EmptyValue { kind });
                }
                Ok(FilterCriterion::Text(trimmed.to_string()))
            }
            ColumnType::Date => NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
                .map(FilterCriterion::Date)
                .map_err(|_| SeekerError::InvalidDate(value.to_string())),
            ColumnType::Number => {
                let (min, max) = value
                    .split_once(':')
                    .ok_or_else(|| SeekerError::InvalidRange(value.to_string()))?;
                for side in [min, max] {
                    if !side.trim().is_empty() && parse_bound(side).is_none() {
                        return Err(SeekerError::InvalidRange(value.to_string()));
                    }
                }
                let range = NumberRange::new(parse_bound(min), parse_bound(max));
                if !range.is_bounded() {
                    return Err(SeekerError::UnboundedRange(value.to_string()));
                }
                Ok(FilterCriterion::Range(range))
            }
        }
    }

    /// Decodes an encoded value, never failing.
    ///
    /// Unparseable numeric bounds become unbounded. An unparseable date yields
    /// `None`, which a table treats as matching nothing.
    pub fn decode_lenient(kind: ColumnType, value: &str) -> Option<FilterCriterion> {
        match kind {
            ColumnType::Text => Some(FilterCriterion::Text(value.to_string())),
            ColumnType::Date => NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
                .ok()
                .map(FilterCriterion::Date),
            ColumnType::Number => Some(FilterCriterion::Range(NumberRange::parse_lenient(value))),
        }
    }

    /// Evaluates a date or number criterion against a raw field value.
    ///
    /// Missing, empty and unparseable values never match. Text criteria
    /// always return `false` here; use [`FilterCriterion::matches_display`].
    pub fn matches_raw(&self, raw: &Value<'_>) -> bool {
        match self {
            FilterCriterion::Date(day) => {
                if raw.is_blank() {
                    return false;
                }
                raw.to_calendar_day() == Some(*day)
            }
            FilterCriterion::Range(range) => {
                let Some(n) = raw.to_f64() else {
                    return false;
                };
                let hit = range.contains(n);
                log::trace!(
                    "range filter: {} against [{:?}, {:?}] -> {}",
                    n,
                    range.min,
                    range.max,
                    hit
                );
                hit
            }
            FilterCriterion::Text(_) => false,
        }
    }

    /// Evaluates a text criterion against a display value, case-insensitively.
    pub fn matches_display(&self, display: &str) -> bool {
        match self {
            FilterCriterion::Text(needle) => contains_ignore_case(display, needle),
            _ => false,
        }
    }

    /// Human-readable form used on filter chips.
    ///
    /// Dates read `Jan 15, 2023`; ranges read `200 - 300`, `≥ 200` or `≤ 300`.
    pub fn describe(&self) -> String {
        match self {
            FilterCriterion::Text(s) => s.clone(),
            FilterCriterion::Date(d) => d.format("%b %d, %Y").to_string(),
            FilterCriterion::Range(r) => match (r.min, r.max) {
                (Some(min), Some(max)) => {
                    format!("{} - {}", format_bound(min), format_bound(max))
                }
                (Some(min), None) => format!("≥ {}", format_bound(min)),
                (None, Some(max)) => format!("≤ {}", format_bound(max)),
                (None, None) => r.encode(),
            },
        }
    }
}

impl fmt::Display for FilterCriterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.describe())
    }
}

/// Case-insensitive substring test.
pub(crate) fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::{Number, Timestamp};

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn range_encoding() {
        assert_eq!(NumberRange::new(Some(200.0), Some(300.0)).encode(), "200:300");
        assert_eq!(NumberRange::new(Some(200.0), None).encode(), "200:");
        assert_eq!(NumberRange::new(None, Some(2.5)).encode(), ":2.5");
        assert_eq!(NumberRange::new(Some(0.0), None).encode(), "0:");
    }

    #[test]
    fn range_parse_lenient() {
        assert_eq!(
            NumberRange::parse_lenient("200:300"),
            NumberRange::new(Some(200.0), Some(300.0))
        );
        assert_eq!(
            NumberRange::parse_lenient(":300"),
            NumberRange::new(None, Some(300.0))
        );
        // Garbage on one side is unbounded, not zero.
        assert_eq!(
            NumberRange::parse_lenient("abc:300"),
            NumberRange::new(None, Some(300.0))
        );
        assert_eq!(
            NumberRange::parse_lenient("150"),
            NumberRange::new(Some(150.0), None)
        );
    }

    #[test]
    fn range_is_inclusive() {
        let range = FilterCriterion::Range(NumberRange::new(Some(200.0), Some(300.0)));
        assert!(range.matches_raw(&Value::Number(Number::I64(200))));
        assert!(range.matches_raw(&Value::Number(Number::I64(250))));
        assert!(range.matches_raw(&Value::Number(Number::I64(300))));
        assert!(!range.matches_raw(&Value::Number(Number::I64(325))));
        assert!(!range.matches_raw(&Value::Number(Number::I64(199))));
    }

    #[test]
    fn range_fails_closed() {
        let range = FilterCriterion::Range(NumberRange::new(None, Some(300.0)));
        assert!(!range.matches_raw(&Value::None));
        assert!(!range.matches_raw(&Value::String("n/a")));
        assert!(!range.matches_raw(&Value::Number(Number::F64(f64::NAN))));
    }

    #[test]
    fn date_ignores_time_of_day() {
        let date = FilterCriterion::Date(day(2023, 1, 15));
        assert!(date.matches_raw(&Value::String("2023-01-15T08:00:00Z")));
        assert!(date.matches_raw(&Value::String("2023-01-15")));
        assert!(!date.matches_raw(&Value::String("2023-01-16T00:00:00Z")));

        let ts = Timestamp::parse("2023-01-15T22:00:00Z").unwrap();
        assert!(date.matches_raw(&Value::Timestamp(ts)));
    }

    #[test]
    fn date_fails_closed() {
        let date = FilterCriterion::Date(day(2023, 1, 15));
        assert!(!date.matches_raw(&Value::None));
        assert!(!date.matches_raw(&Value::String("")));
        assert!(!date.matches_raw(&Value::String("garbage")));
    }

    #[test]
    fn text_matches_display_case_insensitive() {
        let text = FilterCriterion::Text("john".to_string());
        assert!(text.matches_display("John"));
        assert!(text.matches_display("Bob Johnson"));
        assert!(!text.matches_display("Jane"));
        assert!(!text.matches_raw(&Value::String("john")));
    }

    #[test]
    fn decode_strict() {
        assert_eq!(
            FilterCriterion::decode(ColumnType::Text, "  smith "),
            Ok(FilterCriterion::Text("smith".to_string()))
        );
        assert_eq!(
            FilterCriterion::decode(ColumnType::Text, "   "),
            Err(SeekerError::EmptyValue {
                kind: ColumnType::Text
            })
        );
        assert_eq!(
            FilterCriterion::decode(ColumnType::Date, "2023-01-15"),
            Ok(FilterCriterion::Date(day(2023, 1, 15)))
        );
        assert!(matches!(
            FilterCriterion::decode(ColumnType::Date, "Jan 15"),
            Err(SeekerError::InvalidDate(_))
        ));
        assert!(matches!(
            FilterCriterion::decode(ColumnType::Number, "200"),
            Err(SeekerError::InvalidRange(_))
        ));
        assert!(matches!(
            FilterCriterion::decode(ColumnType::Number, "x:300"),
            Err(SeekerError::InvalidRange(_))
        ));
    }

    #[test]
    fn encode_then_decode_date() {
        let date = FilterCriterion::Date(day(2023, 1, 15));
        assert_eq!(date.encode(), "2023-01-15");
        assert_eq!(
            FilterCriterion::decode_lenient(ColumnType::Date, &date.encode()),
            Some(date)
        );
    }

    #[test]
    fn describe_for_chips() {
        assert_eq!(FilterCriterion::Date(day(2023, 1, 15)).describe(), "Jan 15, 2023");
        assert_eq!(
            FilterCriterion::Range(NumberRange::new(Some(200.0), Some(300.0))).describe(),
            "200 - 300"
        );
        assert_eq!(
            FilterCriterion::Range(NumberRange::new(Some(200.0), None)).describe(),
            "≥ 200"
        );
        assert_eq!(
            FilterCriterion::Range(NumberRange::new(None, Some(300.0))).describe(),
            "≤ 300"
        );
        assert_eq!(FilterCriterion::Text("john".into()).describe(), "john");
    }

    #[test]
    fn kinds() {
        assert_eq!(FilterCriterion::Text(String::new()).kind(), ColumnType::Text);
        assert_eq!(
            FilterCriterion::Range(NumberRange::default()).kind(),
            ColumnType::Number
        );
    }
}
