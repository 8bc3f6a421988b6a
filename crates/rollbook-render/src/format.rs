//! Display formatters for cell values.
//!
//! These turn raw field values into the text a user reads in a cell. Missing
//! values get a readable placeholder instead of an error.

use rollbook_seeker::parse_calendar_day;

/// Default currency symbol (Philippine peso).
pub const DEFAULT_CURRENCY: &str = "₱";

/// Formats a number as currency with thousands separators and two decimals.
///
/// ```rust
/// use rollbook_render::format::format_currency;
///
/// assert_eq!(format_currency(Some(1234.5), "₱"), "₱1,234.50");
/// assert_eq!(format_currency(None, "₱"), "₱0.00");
/// ```
pub fn format_currency(value: Option<f64>, symbol: &str) -> String {
    format!("{}{}", symbol, format_number(value, 2))
}

/// Formats a number with thousands separators and a fixed number of decimals.
///
/// Missing and NaN values format as zero.
pub fn format_number(value: Option<f64>, decimals: usize) -> String {
    let value = value.filter(|v| !v.is_nan()).unwrap_or(0.0);
    let fixed = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (fixed.as_str(), None),
    };

    let mut out = String::new();
    if value < 0.0 && fixed.chars().any(|c| c.is_ascii_digit() && c != '0') {
        out.push('-');
    }
    out.push_str(&group_thousands(int_part, ','));
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out
}

/// Formats a fraction as a percentage: `0.125` → `12.5%`.
pub fn format_percentage(value: Option<f64>, decimals: usize) -> String {
    let scaled = value.filter(|v| !v.is_nan()).map(|v| v * 100.0);
    format!("{}%", format_number(scaled, decimals))
}

/// Formats a date string as a long date: `2023-01-15` → `January 15, 2023`.
///
/// Returns `N/A` for a missing or empty value and `Invalid Date` when the
/// value cannot be read as a date.
pub fn format_date(value: Option<&str>) -> String {
    match value.map(str::trim) {
        None | Some("") => "N/A".to_string(),
        Some(raw) => match parse_calendar_day(raw) {
            Some(day) => day.format("%B %-d, %Y").to_string(),
            None => "Invalid Date".to_string(),
        },
    }
}

fn group_thousands(int_part: &str, sep: char) -> String {
    let mut out = String::new();
    let len = int_part.len();
    for (i, ch) in int_part.chars().enumerate() {
        let pos_from_end = len - i;
        out.push(ch);
        if pos_from_end > 1 && pos_from_end % 3 == 1 {
            out.push(sep);
        }
    }
    out
}
