//! Single-column sorting.

use rollbook_seeker::Dir;

use crate::column::ColumnDef;

/// The column the rows are sorted by, and in which direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortState {
    pub column_id: String,
    pub dir: Dir,
}

impl SortState {
    pub fn new(column_id: impl Into<String>, dir: Dir) -> Self {
        SortState {
            column_id: column_id.into(),
            dir,
        }
    }
}

/// Advances the sort for a header toggle on `column_id`.
///
/// The same column cycles asc → desc → unsorted; another column starts over
/// at asc and replaces the previous sort.
pub fn toggle(current: Option<&SortState>, column_id: &str) -> Option<SortState> {
    let dir = match current {
        Some(sort) if sort.column_id == column_id => Dir::cycle(Some(sort.dir)),
        _ => Dir::cycle(None),
    };
    dir.map(|dir| SortState::new(column_id, dir))
}

/// Direction shown on `column_id`'s header.
pub fn direction_of(current: Option<&SortState>, column_id: &str) -> Option<Dir> {
    current
        .filter(|sort| sort.column_id == column_id)
        .map(|sort| sort.dir)
}

/// Sorts row indices by a column. The sort is stable, so rows that compare
/// equal keep their data order in both directions. Missing values stay at
/// the end in both directions.
pub fn sort_rows<T>(ids: &mut [usize], data: &[T], column: &ColumnDef<T>, dir: Dir) {
    ids.sort_by(|&a, &b| column.compare_in(dir, &data[a], &data[b]));
}

#[cfg(test)]
mod tests {
    use super::*;
    use rollbook_seeker::{Number, Value};

    #[test]
    fn toggle_cycles_on_same_column() {
        let first = toggle(None, "daily_rate");
        assert_eq!(first, Some(SortState::new("daily_rate", Dir::Asc)));
        let second = toggle(first.as_ref(), "daily_rate");
        assert_eq!(second, Some(SortState::new("daily_rate", Dir::Desc)));
        assert_eq!(toggle(second.as_ref(), "daily_rate"), None);
    }

    #[test]
    fn new_column_starts_ascending() {
        let current = SortState::new("daily_rate", Dir::Desc);
        assert_eq!(
            toggle(Some(&current), "first_name"),
            Some(SortState::new("first_name", Dir::Asc))
        );
    }

    #[test]
    fn direction_only_for_sorted_column() {
        let current = SortState::new("daily_rate", Dir::Asc);
        assert_eq!(direction_of(Some(&current), "daily_rate"), Some(Dir::Asc));
        assert_eq!(direction_of(Some(&current), "first_name"), None);
        assert_eq!(direction_of(None, "daily_rate"), None);
    }

    #[test]
    fn stable_in_both_directions() {
        let rates = [300.0, 200.0, 300.0, 100.0];
        let column = ColumnDef::new("daily_rate", "Rate", |r: &f64| Value::Number(Number::F64(*r)));

        let mut ids: Vec<usize> = (0..rates.len()).collect();
        sort_rows(&mut ids, &rates, &column, Dir::Asc);
        assert_eq!(ids, vec![3, 1, 0, 2]);

        let mut ids: Vec<usize> = (0..rates.len()).collect();
        sort_rows(&mut ids, &rates, &column, Dir::Desc);
        assert_eq!(ids, vec![0, 2, 1, 3]);
    }

    #[test]
    fn missing_last_in_both_directions() {
        let rates = [None, Some(200.0), None, Some(300.0)];
        let column = ColumnDef::new("daily_rate", "Rate", |r: &Option<f64>| {
            r.map(|n| Value::Number(Number::F64(n))).unwrap_or(Value::None)
        });

        let mut ids: Vec<usize> = (0..rates.len()).collect();
        sort_rows(&mut ids, &rates, &column, Dir::Asc);
        assert_eq!(ids, vec![1, 3, 0, 2]);

        let mut ids: Vec<usize> = (0..rates.len()).collect();
        sort_rows(&mut ids, &rates, &column, Dir::Desc);
        assert_eq!(ids, vec![3, 1, 0, 2]);
    }
}
