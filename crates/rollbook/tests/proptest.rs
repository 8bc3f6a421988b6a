//! Property-based tests for table state transitions.

use proptest::prelude::*;
use rollbook::{Action, ColumnDef, DataTable, PendingValue, TableConfig};
use rollbook_seeker::{Number, Value};

#[derive(Debug, Clone)]
struct Row {
    name: String,
    daily_rate: Option<f64>,
}

fn columns() -> Vec<ColumnDef<Row>> {
    vec![
        ColumnDef::new("name", "Name", |r: &Row| Value::String(&r.name)),
        ColumnDef::new("daily_rate", "Daily Rate", |r: &Row| {
            r.daily_rate
                .map(|n| Value::Number(Number::F64(n)))
                .unwrap_or(Value::None)
        }),
    ]
}

fn row_strategy() -> impl Strategy<Value = Row> {
    ("[a-c]{0,4}", prop::option::of(0.0f64..500.0))
        .prop_map(|(name, daily_rate)| Row { name, daily_rate })
}

fn action_strategy() -> impl Strategy<Value = Action> {
    prop_oneof![
        prop::sample::select(vec!["name", "daily_rate", "missing"])
            .prop_map(|c| Action::SelectColumn(c.to_string())),
        "[a-c ]{0,3}".prop_map(PendingValue::Text).prop_map(Action::SetPending),
        (prop::option::of(0.0f64..500.0), prop::option::of(0.0f64..500.0))
            .prop_map(|(min, max)| Action::SetPending(PendingValue::Range { min, max })),
        Just(Action::ApplyFilter),
        Just(Action::ClearFilters),
        "[a-c]{0,2}".prop_map(Action::SetGlobalFilter),
        prop::sample::select(vec!["name", "daily_rate"])
            .prop_map(|c| Action::ToggleSort(c.to_string())),
        (0usize..12).prop_map(Action::ToggleSelect),
        Just(Action::ToggleSelectAllVisible),
        Just(Action::ClearSelection),
    ]
}

fn table(rows: Vec<Row>) -> DataTable<Row> {
    let config = TableConfig {
        enable_row_selection: true,
        ..TableConfig::default()
    };
    DataTable::new(columns(), rows, config).unwrap()
}

proptest! {
    /// No sequence of actions leaves two filters on one column.
    #[test]
    fn at_most_one_filter_per_column(
        rows in prop::collection::vec(row_strategy(), 0..10),
        actions in prop::collection::vec(action_strategy(), 0..40),
    ) {
        let mut t = table(rows);
        for action in actions {
            t.dispatch(action);
            let mut ids: Vec<&str> = t.applied_filters().iter().map(|f| f.column_id.as_str()).collect();
            let before = ids.len();
            ids.sort_unstable();
            ids.dedup();
            prop_assert_eq!(ids.len(), before);
        }
    }

    /// Visible rows are always a subset of the data, with no repeats, and
    /// the visible selection never exceeds them.
    #[test]
    fn visible_rows_are_a_subset(
        rows in prop::collection::vec(row_strategy(), 0..10),
        actions in prop::collection::vec(action_strategy(), 0..40),
    ) {
        let len = rows.len();
        let mut t = table(rows);
        for action in actions {
            t.dispatch(action);
        }
        let mut ids = t.visible_row_ids();
        prop_assert!(ids.len() <= len);
        prop_assert!(t.selected_count() <= ids.len());
        ids.sort_unstable();
        ids.dedup();
        prop_assert_eq!(ids.len(), t.visible_row_ids().len());
        prop_assert!(ids.iter().all(|&id| id < len));
    }

    /// Adding a filter never shows more rows.
    #[test]
    fn applying_a_filter_never_grows(
        rows in prop::collection::vec(row_strategy(), 0..10),
        needle in "[a-c]{1,2}",
        min in prop::option::of(0.0f64..500.0),
    ) {
        let mut t = table(rows);
        let all = t.visible_row_ids().len();

        t.dispatch(Action::SelectColumn("name".into()));
        t.dispatch(Action::SetPending(PendingValue::Text(needle)));
        t.dispatch(Action::ApplyFilter);
        let by_name = t.visible_row_ids().len();
        prop_assert!(by_name <= all);

        t.dispatch(Action::SelectColumn("daily_rate".into()));
        t.dispatch(Action::SetPending(PendingValue::Range { min, max: None }));
        t.dispatch(Action::ApplyFilter);
        prop_assert!(t.visible_row_ids().len() <= by_name);

        t.dispatch(Action::ClearFilters);
        prop_assert_eq!(t.visible_row_ids().len(), all);
    }

    /// Three toggles on one column restore the unsorted order.
    #[test]
    fn three_toggles_restore_order(
        rows in prop::collection::vec(row_strategy(), 0..10),
        column in prop::sample::select(vec!["name", "daily_rate"]),
    ) {
        let mut t = table(rows);
        let original = t.visible_row_ids();
        for _ in 0..3 {
            t.dispatch(Action::ToggleSort(column.to_string()));
        }
        prop_assert_eq!(t.visible_row_ids(), original);
    }

    /// Sorting permutes the visible rows without adding or dropping any.
    #[test]
    fn sorting_is_a_permutation(
        rows in prop::collection::vec(row_strategy(), 0..10),
        toggles in 1usize..3,
    ) {
        let mut t = table(rows);
        let mut original = t.visible_row_ids();
        for _ in 0..toggles {
            t.dispatch(Action::ToggleSort("daily_rate".into()));
        }
        let mut sorted = t.visible_row_ids();
        original.sort_unstable();
        sorted.sort_unstable();
        prop_assert_eq!(sorted, original);
    }
}
