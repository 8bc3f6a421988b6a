//! Command-line arguments.

use std::path::PathBuf;

use clap::{ArgAction, Parser};
use rollbook_seeker::Dir;

/// Browse employee records as a filterable, sortable table.
#[derive(Debug, Parser)]
#[command(name = "rollbook", version, about)]
pub struct Cli {
    /// JSON file holding an array of employees
    pub file: PathBuf,

    /// Search every column for this text
    #[arg(short, long)]
    pub search: Option<String>,

    /// Filter a column: `first_name=jo`, `employment_date=2023-01-15`, `daily_rate=200:300`
    #[arg(short, long = "filter", value_name = "COL=VALUE", value_parser = parse_filter)]
    pub filters: Vec<FilterArg>,

    /// Sort by a column, ascending unless suffixed with `:desc`
    #[arg(long, value_name = "COL[:desc]", value_parser = parse_sort)]
    pub sort: Option<SortArg>,

    /// Select a row by its position in the file (enables selection)
    #[arg(long = "select", value_name = "IDX")]
    pub select: Vec<usize>,

    /// Render width in columns [default: terminal width, or 80]
    #[arg(short, long)]
    pub width: Option<usize>,

    /// Always use the card layout
    #[arg(long, conflicts_with = "desktop")]
    pub mobile: bool,

    /// Always use the grid layout
    #[arg(long)]
    pub desktop: bool,

    /// YAML table configuration
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// More logging on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// A `COL=VALUE` column filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterArg {
    pub column: String,
    pub value: String,
}

/// A `COL[:asc|:desc]` sort.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortArg {
    pub column: String,
    pub dir: Dir,
}

fn parse_filter(s: &str) -> Result<FilterArg, String> {
    let (column, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected COL=VALUE, got '{}'", s))?;
    if column.trim().is_empty() {
        return Err(format!("missing column name in '{}'", s));
    }
    Ok(FilterArg {
        column: column.trim().to_string(),
        value: value.to_string(),
    })
}

fn parse_sort(s: &str) -> Result<SortArg, String> {
    let (column, dir) = match s.rsplit_once(':') {
        Some((column, "desc")) => (column, Dir::Desc),
        Some((column, "asc")) => (column, Dir::Asc),
        Some((_, other)) => return Err(format!("unknown sort direction '{}'", other)),
        None => (s, Dir::Asc),
    };
    if column.is_empty() {
        return Err(format!("missing column name in '{}'", s));
    }
    Ok(SortArg {
        column: column.to_string(),
        dir,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_args() {
        assert_eq!(
            parse_filter("daily_rate=200:300"),
            Ok(FilterArg {
                column: "daily_rate".into(),
                value: "200:300".into()
            })
        );
        assert_eq!(parse_filter("first_name=a=b").unwrap().value, "a=b");
        assert!(parse_filter("first_name").is_err());
        assert!(parse_filter("=x").is_err());
    }

    #[test]
    fn sort_args() {
        assert_eq!(parse_sort("daily_rate").unwrap().dir, Dir::Asc);
        assert_eq!(parse_sort("daily_rate:desc").unwrap().dir, Dir::Desc);
        assert_eq!(parse_sort("daily_rate:asc").unwrap().column, "daily_rate");
        assert!(parse_sort("daily_rate:up").is_err());
        assert!(parse_sort(":desc").is_err());
    }

    #[test]
    fn parses_full_command_line() {
        let cli = Cli::try_parse_from([
            "rollbook",
            "staff.json",
            "--filter",
            "first_name=jo",
            "-f",
            "daily_rate=200:",
            "--sort",
            "daily_rate:desc",
            "--select",
            "0",
            "--select",
            "2",
            "-w",
            "60",
            "-vv",
        ])
        .unwrap();
        assert_eq!(cli.filters.len(), 2);
        assert_eq!(cli.select, vec![0, 2]);
        assert_eq!(cli.width, Some(60));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn layout_flags_conflict() {
        assert!(Cli::try_parse_from(["rollbook", "a.json", "--mobile", "--desktop"]).is_err());
    }
}
