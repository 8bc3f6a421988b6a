//! Sort direction and type-aware value comparison.

use std::cmp::Ordering;

use crate::kind::ColumnType;
use crate::value::Value;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Dir {
    /// Ascending order (smallest first).
    #[default]
    Asc,
    /// Descending order (largest first).
    Desc,
}

impl Dir {
    /// Applies this direction to an ordering.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Dir::Asc => ordering,
            Dir::Desc => ordering.reverse(),
        }
    }

    /// Advances a header's sort state one step: unsorted → asc → desc → unsorted.
    pub fn cycle(current: Option<Dir>) -> Option<Dir> {
        match current {
            None => Some(Dir::Asc),
            Some(Dir::Asc) => Some(Dir::Desc),
            Some(Dir::Desc) => None,
        }
    }

    /// Returns the display name of this direction.
    pub fn as_str(self) -> &'static str {
        match self {
            Dir::Asc => "asc",
            Dir::Desc => "desc",
        }
    }
}

impl std::fmt::Display for Dir {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Compares two raw values as the given column type, ascending.
///
/// - `Date`: parsed timestamps
/// - `Number`: numeric value
/// - `Text`: natural order ([`natural_cmp`]); numbers compare numerically
///
/// Values that cannot be read as the column's type sort after every readable
/// value, and compare equal to each other. The result is a total order, so it
/// is safe to hand to `sort_by`.
pub fn compare_values(kind: ColumnType, a: &Value<'_>, b: &Value<'_>) -> Ordering {
    compare_values_in(kind, Dir::Asc, a, b)
}

/// Compares two raw values as the given column type in direction `dir`.
///
/// Only readable values are reordered by `dir`; unreadable ones sort last
/// in both directions.
///
/// ```
/// use std::cmp::Ordering;
/// use rollbook_seeker::{compare_values_in, ColumnType, Dir, Value};
///
/// let day = Value::String("2023-01-15");
/// assert_eq!(compare_values_in(ColumnType::Date, Dir::Desc, &Value::None, &day), Ordering::Greater);
/// assert_eq!(compare_values_in(ColumnType::Date, Dir::Asc, &Value::None, &day), Ordering::Greater);
/// ```
pub fn compare_values_in(kind: ColumnType, dir: Dir, a: &Value<'_>, b: &Value<'_>) -> Ordering {
    match kind {
        ColumnType::Date => missing_last(dir, a.to_timestamp(), b.to_timestamp(), |x, y| x.cmp(&y)),
        ColumnType::Number => missing_last(dir, a.to_f64(), b.to_f64(), |x, y| x.total_cmp(&y)),
        ColumnType::Text => match (a, b) {
            (Value::Number(x), Value::Number(y)) => missing_last(
                dir,
                Some(x.to_f64()).filter(|v| !v.is_nan()),
                Some(y.to_f64()).filter(|v| !v.is_nan()),
                |x, y| x.total_cmp(&y),
            ),
            _ => missing_last(dir, text_of(a), text_of(b), |x, y| natural_cmp(&x, &y)),
        },
    }
}

fn missing_last<V>(
    dir: Dir,
    a: Option<V>,
    b: Option<V>,
    cmp: impl Fn(V, V) -> Ordering,
) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => dir.apply(cmp(a, b)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn text_of(v: &Value<'_>) -> Option<String> {
    match v {
        Value::String(s) => Some((*s).to_string()),
        Value::Number(n) => Some(n.to_f64().to_string()),
        Value::Timestamp(t) => Some(t.as_millis().to_string()),
        Value::None => None,
    }
}

/// Natural ("alphanumeric") string order.
///
/// Digit runs compare by numeric value, other runs compare case-insensitively,
/// and remaining ties fall back to plain byte order, so `"item2" < "item10"`
/// and `"apple" < "Banana"`.
///
/// ```
/// use std::cmp::Ordering;
/// use rollbook_seeker::natural_cmp;
///
/// assert_eq!(natural_cmp("item2", "item10"), Ordering::Less);
/// assert_eq!(natural_cmp("apple", "Banana"), Ordering::Less);
/// ```
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let mut left = chunks(a);
    let mut right = chunks(b);
    loop {
        match (left.next(), right.next()) {
            (None, None) => return a.cmp(b),
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) => {
                let ord = compare_chunks(x, y);
                if ord != Ordering::Equal {
                    return ord;
                }
            }
        }
    }
}

fn compare_chunks(x: &str, y: &str) -> Ordering {
    let x_digits = x.starts_with(|c: char| c.is_ascii_digit());
    let y_digits = y.starts_with(|c: char| c.is_ascii_digit());
    match (x_digits, y_digits) {
        (true, true) => {
            let xs = x.trim_start_matches('0');
            let ys = y.trim_start_matches('0');
            xs.len().cmp(&ys.len()).then_with(|| xs.cmp(ys))
        }
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => x.to_lowercase().cmp(&y.to_lowercase()),
    }
}

/// Splits a string into alternating digit and non-digit runs.
fn chunks(s: &str) -> impl Iterator<Item = &str> {
    let mut rest = s;
    std::iter::from_fn(move || {
        let first = rest.chars().next()?;
        let digits = first.is_ascii_digit();
        let end = rest
            .char_indices()
            .find(|(_, c)| c.is_ascii_digit() != digits)
            .map(|(i, _)| i)
            .unwrap_or(rest.len());
        let (chunk, tail) = rest.split_at(end);
        rest = tail;
        Some(chunk)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::{Number, Timestamp};

    #[test]
    fn dir_apply() {
        assert_eq!(Dir::Asc.apply(Ordering::Less), Ordering::Less);
        assert_eq!(Dir::Desc.apply(Ordering::Less), Ordering::Greater);
        assert_eq!(Dir::Desc.apply(Ordering::Equal), Ordering::Equal);
    }

    #[test]
    fn dir_cycle() {
        assert_eq!(Dir::cycle(None), Some(Dir::Asc));
        assert_eq!(Dir::cycle(Some(Dir::Asc)), Some(Dir::Desc));
        assert_eq!(Dir::cycle(Some(Dir::Desc)), None);
    }

    #[test]
    fn numbers_compare_numerically() {
        let a = Value::Number(Number::I64(300));
        let b = Value::Number(Number::F64(25.5));
        assert_eq!(compare_values(ColumnType::Number, &a, &b), Ordering::Greater);
        assert_eq!(
            compare_values(ColumnType::Number, &Value::String("9"), &Value::String("10")),
            Ordering::Less
        );
    }

    #[test]
    fn missing_sorts_last() {
        let none = Value::None;
        let num = Value::Number(Number::I64(1));
        assert_eq!(compare_values(ColumnType::Number, &none, &num), Ordering::Greater);
        assert_eq!(compare_values(ColumnType::Number, &num, &none), Ordering::Less);
        assert_eq!(compare_values(ColumnType::Number, &none, &none), Ordering::Equal);

        let nan = Value::Number(Number::F64(f64::NAN));
        assert_eq!(compare_values(ColumnType::Number, &nan, &num), Ordering::Greater);
    }

    #[test]
    fn missing_sorts_last_descending() {
        let none = Value::None;
        let low = Value::Number(Number::I64(1));
        let high = Value::Number(Number::I64(2));
        let desc = |a: &Value<'_>, b: &Value<'_>| compare_values_in(ColumnType::Number, Dir::Desc, a, b);
        assert_eq!(desc(&high, &low), Ordering::Less);
        assert_eq!(desc(&none, &low), Ordering::Greater);
        assert_eq!(desc(&low, &none), Ordering::Less);
        assert_eq!(desc(&none, &none), Ordering::Equal);

        let blank = Value::String("");
        let day = Value::String("2023-01-01");
        assert_eq!(
            compare_values_in(ColumnType::Date, Dir::Desc, &blank, &day),
            Ordering::Greater
        );
        assert_eq!(
            compare_values_in(ColumnType::Text, Dir::Desc, &none, &Value::String("a")),
            Ordering::Greater
        );
    }

    #[test]
    fn dates_compare_by_timestamp() {
        let a = Value::String("2023-01-15T08:00:00Z");
        let b = Value::String("2023-01-15");
        assert_eq!(compare_values(ColumnType::Date, &a, &b), Ordering::Greater);

        let ts = Value::Timestamp(Timestamp::parse("2022-12-31").unwrap());
        assert_eq!(compare_values(ColumnType::Date, &ts, &b), Ordering::Less);

        let bad = Value::String("soon");
        assert_eq!(compare_values(ColumnType::Date, &bad, &b), Ordering::Greater);
    }

    #[test]
    fn text_uses_natural_order() {
        assert_eq!(
            compare_values(ColumnType::Text, &Value::String("Emp 2"), &Value::String("Emp 10")),
            Ordering::Less
        );
    }

    #[test]
    fn natural_order_cases() {
        assert_eq!(natural_cmp("a", "b"), Ordering::Less);
        assert_eq!(natural_cmp("file9", "file10"), Ordering::Less);
        assert_eq!(natural_cmp("file010", "file10"), Ordering::Less);
        assert_eq!(natural_cmp("Doe", "doe"), Ordering::Less);
        assert_eq!(natural_cmp("doe", "Doe"), Ordering::Greater);
        assert_eq!(natural_cmp("abc", "abc"), Ordering::Equal);
        assert_eq!(natural_cmp("", "a"), Ordering::Less);
        assert_eq!(natural_cmp("1", "a"), Ordering::Less);
    }

    #[test]
    fn chunking() {
        let parts: Vec<&str> = chunks("ab12cd3").collect();
        assert_eq!(parts, vec!["ab", "12", "cd", "3"]);
        assert_eq!(chunks("").count(), 0);
    }
}
