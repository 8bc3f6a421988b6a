//! Runtime value types for field comparison.
//!
//! The [`Value`] enum represents the raw value of a field extracted from a row.
//! Date and number filters compare against this raw value; text filters use
//! the column's display string instead.

use std::cmp::Ordering;

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Raw field value, borrowed from the source row.
///
/// # Example
///
/// ```
/// use rollbook_seeker::{Value, Number};
///
/// struct Employee {
///     first_name: String,
///     daily_rate: f64,
/// }
///
/// fn accessor<'a>(e: &'a Employee, field: &str) -> Value<'a> {
///     match field {
///         "first_name" => Value::String(&e.first_name),
///         "daily_rate" => Value::Number(Number::F64(e.daily_rate)),
///         _ => Value::None,
///     }
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value<'a> {
    /// String value (borrowed).
    String(&'a str),
    /// Numeric value.
    Number(Number),
    /// Timestamp value (milliseconds since Unix epoch, UTC).
    Timestamp(Timestamp),
    /// Field not present, null, or unsupported.
    None,
}

impl<'a> Value<'a> {
    /// Returns `true` if this is a `None` value.
    pub fn is_none(&self) -> bool {
        matches!(self, Value::None)
    }

    /// Returns `true` if the value carries nothing to compare: `None` or an
    /// empty string.
    pub fn is_blank(&self) -> bool {
        match self {
            Value::None => true,
            Value::String(s) => s.is_empty(),
            _ => false,
        }
    }

    /// Extracts the string value, if present.
    pub fn as_str(&self) -> Option<&'a str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Interprets the value as a number.
    ///
    /// Strings are parsed leniently (surrounding whitespace is ignored).
    /// Returns `None` for missing, non-numeric and NaN values.
    pub fn to_f64(&self) -> Option<f64> {
        let n = match self {
            Value::Number(n) => n.to_f64(),
            Value::String(s) => s.trim().parse::<f64>().ok()?,
            _ => return None,
        };
        if n.is_nan() {
            None
        } else {
            Some(n)
        }
    }

    /// Interprets the value as a point in time.
    pub fn to_timestamp(&self) -> Option<Timestamp> {
        match self {
            Value::Timestamp(t) => Some(*t),
            Value::String(s) => Timestamp::parse(s),
            _ => None,
        }
    }

    /// Interprets the value as a calendar day, ignoring time of day.
    ///
    /// Strings keep the day as written (an offset in the string does not move
    /// the day); timestamps use the UTC day.
    pub fn to_calendar_day(&self) -> Option<NaiveDate> {
        match self {
            Value::Timestamp(t) => t.calendar_day(),
            Value::String(s) => parse_calendar_day(s),
            _ => None,
        }
    }
}

/// Numeric value supporting all common numeric types.
///
/// Numbers are stored in one of three variants to preserve precision.
/// Comparisons between different numeric types convert to `f64`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// Signed 64-bit integer.
    I64(i64),
    /// Unsigned 64-bit integer.
    U64(u64),
    /// 64-bit floating point.
    F64(f64),
}

impl Number {
    /// Converts the number to f64 for comparison.
    pub fn to_f64(self) -> f64 {
        match self {
            Number::I64(n) => n as f64,
            Number::U64(n) => n as f64,
            Number::F64(n) => n,
        }
    }

    /// Compares two numbers, handling mixed types.
    pub fn compare(self, other: Number) -> Option<Ordering> {
        match (self, other) {
            (Number::I64(a), Number::I64(b)) => Some(a.cmp(&b)),
            (Number::U64(a), Number::U64(b)) => Some(a.cmp(&b)),
            (Number::F64(a), Number::F64(b)) => a.partial_cmp(&b),
            _ => self.to_f64().partial_cmp(&other.to_f64()),
        }
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.compare(*other)
    }
}

impl From<i32> for Number {
    fn from(n: i32) -> Self {
        Number::I64(n as i64)
    }
}

impl From<i64> for Number {
    fn from(n: i64) -> Self {
        Number::I64(n)
    }
}

impl From<u32> for Number {
    fn from(n: u32) -> Self {
        Number::U64(n as u64)
    }
}

impl From<u64> for Number {
    fn from(n: u64) -> Self {
        Number::U64(n)
    }
}

impl From<f32> for Number {
    fn from(n: f32) -> Self {
        Number::F64(n as f64)
    }
}

impl From<f64> for Number {
    fn from(n: f64) -> Self {
        Number::F64(n)
    }
}

/// Timestamp value represented as milliseconds since Unix epoch (UTC).
///
/// ```
/// use rollbook_seeker::Timestamp;
///
/// let a = Timestamp::parse("2023-01-15").unwrap();
/// let b = Timestamp::parse("2023-01-15T08:00:00Z").unwrap();
/// assert!(a < b);
/// assert_eq!(a.calendar_day(), b.calendar_day());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(pub i64);

impl Timestamp {
    /// Creates a new timestamp from milliseconds since Unix epoch.
    pub fn from_millis(millis: i64) -> Self {
        Timestamp(millis)
    }

    /// Returns the timestamp as milliseconds since Unix epoch.
    pub fn as_millis(self) -> i64 {
        self.0
    }

    /// Parses the date/time shapes found in row data.
    ///
    /// Accepted: RFC 3339 with offset, naive `yyyy-MM-ddTHH:mm:ss[.fff]`,
    /// `yyyy-MM-dd HH:mm:ss` (both read as UTC), and a bare `yyyy-MM-dd`
    /// (UTC midnight).
    pub fn parse(s: &str) -> Option<Timestamp> {
        let s = s.trim();
        if s.is_empty() {
            return None;
        }
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Some(Timestamp(dt.timestamp_millis()));
        }
        if let Some(naive) = parse_naive_datetime(s) {
            return Some(Timestamp(naive.and_utc().timestamp_millis()));
        }
        let date = NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()?;
        let midnight = date.and_hms_opt(0, 0, 0)?;
        Some(Timestamp(midnight.and_utc().timestamp_millis()))
    }

    /// Returns the UTC calendar day of this timestamp.
    pub fn calendar_day(self) -> Option<NaiveDate> {
        DateTime::from_timestamp_millis(self.0).map(|dt| dt.date_naive())
    }
}

impl From<i64> for Timestamp {
    fn from(millis: i64) -> Self {
        Timestamp(millis)
    }
}

/// Parses the calendar day a date/time string was written for.
///
/// Time of day and any UTC offset are ignored: `"2023-01-15T23:30:00-05:00"`
/// is January 15th.
pub fn parse_calendar_day(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }
    if let Some(naive) = parse_naive_datetime(s) {
        return Some(naive.date());
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

fn parse_naive_datetime(s: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%.f"))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn blank_values() {
        assert!(Value::None.is_blank());
        assert!(Value::String("").is_blank());
        assert!(!Value::String(" ").is_blank());
        assert!(!Value::Number(Number::I64(0)).is_blank());
    }

    #[test]
    fn to_f64_parses_numbers_and_strings() {
        assert_eq!(Value::Number(Number::I64(250)).to_f64(), Some(250.0));
        assert_eq!(Value::String(" 12.5 ").to_f64(), Some(12.5));
        assert_eq!(Value::String("abc").to_f64(), None);
        assert_eq!(Value::Number(Number::F64(f64::NAN)).to_f64(), None);
        assert_eq!(Value::None.to_f64(), None);
    }

    #[test]
    fn number_comparisons_mixed_types() {
        assert_eq!(
            Number::I64(5).compare(Number::U64(10)),
            Some(Ordering::Less)
        );
        assert_eq!(
            Number::I64(5).compare(Number::F64(5.0)),
            Some(Ordering::Equal)
        );
        assert_eq!(Number::F64(f64::NAN).compare(Number::F64(1.0)), None);
    }

    #[test]
    fn timestamp_parse_shapes() {
        let midnight = Timestamp::parse("2023-01-15").unwrap();
        let eight = Timestamp::parse("2023-01-15T08:00:00Z").unwrap();
        assert_eq!(eight.as_millis() - midnight.as_millis(), 8 * 3_600_000);

        let naive = Timestamp::parse("2023-01-15T08:00:00").unwrap();
        assert_eq!(naive, eight);

        let spaced = Timestamp::parse("2023-01-15 08:00:00").unwrap();
        assert_eq!(spaced, eight);

        assert!(Timestamp::parse("").is_none());
        assert!(Timestamp::parse("not a date").is_none());
    }

    #[test]
    fn calendar_day_ignores_time() {
        assert_eq!(
            parse_calendar_day("2023-01-15T08:00:00Z"),
            Some(day(2023, 1, 15))
        );
        assert_eq!(
            parse_calendar_day("2023-01-15T23:30:00-05:00"),
            Some(day(2023, 1, 15))
        );
        assert_eq!(parse_calendar_day("2023-01-16"), Some(day(2023, 1, 16)));
        assert_eq!(parse_calendar_day("15/01/2023"), None);
    }

    #[test]
    fn value_calendar_day_from_timestamp() {
        let ts = Timestamp::parse("2023-01-15T08:00:00Z").unwrap();
        assert_eq!(
            Value::Timestamp(ts).to_calendar_day(),
            Some(day(2023, 1, 15))
        );
        assert_eq!(Value::None.to_calendar_day(), None);
    }
}
