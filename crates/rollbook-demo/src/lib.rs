//! A terminal front end for rollbook over employee records.
//!
//! [`run`] loads employees, replays the command-line filters, sort and
//! selection as table actions, and renders the result for the chosen
//! width.

pub mod cli;
pub mod employee;

use anyhow::{bail, Context, Result};
use rollbook::{Action, DataTable, Layout, PendingValue, TableConfig, Viewport};
use rollbook_seeker::{Dir, FilterCriterion};

pub use cli::{Cli, FilterArg, SortArg};
pub use employee::{employee_columns, load_employees, Employee};

const FALLBACK_WIDTH: usize = 80;

/// Width from the flag, else the terminal, else 80 columns.
pub fn resolve_width(flag: Option<usize>) -> usize {
    flag.or_else(|| terminal_size::terminal_size().map(|(w, _)| w.0 as usize))
        .unwrap_or(FALLBACK_WIDTH)
}

/// Log level for the number of `-v` flags.
pub fn log_level(verbose: u8) -> log::LevelFilter {
    match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    }
}

/// Builds the table described by `cli` and renders it.
pub fn run(cli: &Cli) -> Result<String> {
    let mut config = match &cli.config {
        Some(path) => TableConfig::load(path)?,
        None => TableConfig::default(),
    };
    if !cli.select.is_empty() {
        config.enable_row_selection = true;
    }

    let employees = load_employees(&cli.file)?;
    let mut table = DataTable::new(employee_columns(), employees, config)?
        .on_row_selection_change(|rows: &[&Employee]| {
            let uids: Vec<&str> = rows.iter().map(|e| e.uid.as_str()).collect();
            match serde_json::to_string(&uids) {
                Ok(json) => log::info!("selected {}", json),
                Err(err) => log::warn!("could not encode selection: {}", err),
            }
        });
    table.set_viewport(Viewport::new(resolve_width(cli.width)));

    if let Some(search) = &cli.search {
        table.set_global_filter(search.as_str());
    }
    for filter in &cli.filters {
        apply_filter(&mut table, filter)?;
    }
    if let Some(sort) = &cli.sort {
        apply_sort(&mut table, sort)?;
    }
    let total = table.data().len();
    for &index in &cli.select {
        if index >= total {
            bail!("cannot select row {}: only {} employee(s) loaded", index, total);
        }
        if !table.state().selection().is_selected(index) {
            table.dispatch(Action::ToggleSelect(index));
        }
    }

    let frame = if cli.mobile {
        table.render_as(Layout::Mobile)?
    } else if cli.desktop {
        table.render_as(Layout::Desktop)?
    } else {
        table.render()?
    };
    Ok(frame.to_string())
}

fn apply_filter(table: &mut DataTable<Employee>, filter: &FilterArg) -> Result<()> {
    let column = table
        .column(&filter.column)
        .filter(|c| c.is_filterable())
        .with_context(|| format!("Unknown filter column '{}'", filter.column))?;
    let criterion = FilterCriterion::decode(column.kind(), &filter.value)
        .with_context(|| format!("Invalid filter for '{}'", filter.column))?;
    let pending = match criterion {
        FilterCriterion::Text(text) => PendingValue::Text(text),
        FilterCriterion::Date(day) => PendingValue::Date(day),
        FilterCriterion::Range(range) => PendingValue::Range {
            min: range.min,
            max: range.max,
        },
    };
    table.dispatch(Action::SelectColumn(filter.column.clone()));
    table.dispatch(Action::SetPending(pending));
    table.dispatch(Action::ApplyFilter);
    Ok(())
}

fn apply_sort(table: &mut DataTable<Employee>, sort: &SortArg) -> Result<()> {
    if !table.column(&sort.column).is_some_and(|c| c.is_sortable()) {
        bail!("Cannot sort by '{}'", sort.column);
    }
    let toggles = match sort.dir {
        Dir::Asc => 1,
        Dir::Desc => 2,
    };
    for _ in 0..toggles {
        table.dispatch(Action::ToggleSort(sort.column.clone()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_flag_wins() {
        assert_eq!(resolve_width(Some(42)), 42);
    }

    #[test]
    fn verbosity_levels() {
        assert_eq!(log_level(0), log::LevelFilter::Warn);
        assert_eq!(log_level(1), log::LevelFilter::Info);
        assert_eq!(log_level(2), log::LevelFilter::Debug);
        assert_eq!(log_level(9), log::LevelFilter::Trace);
    }
}
