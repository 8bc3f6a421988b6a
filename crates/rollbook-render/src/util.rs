//! Utility functions for ANSI-aware text measurement, truncation, and padding.
//!
//! All functions in this module correctly handle ANSI escape codes: they are
//! preserved in output but don't count toward display width calculations.

use console::{measure_text_width, pad_str, Alignment};

/// Returns the display width of a string, ignoring ANSI escape codes.
///
/// ```rust
/// use rollbook_render::display_width;
///
/// assert_eq!(display_width("hello"), 5);
/// assert_eq!(display_width("\x1b[31mred\x1b[0m"), 3);
/// assert_eq!(display_width("日本"), 4);
/// ```
pub fn display_width(s: &str) -> usize {
    measure_text_width(s)
}

/// Truncates a string from the end to fit within a maximum display width.
///
/// ```rust
/// use rollbook_render::truncate_end;
///
/// assert_eq!(truncate_end("Hello World", 8, "…"), "Hello W…");
/// assert_eq!(truncate_end("Short", 10, "…"), "Short");
/// ```
pub fn truncate_end(s: &str, max_width: usize, ellipsis: &str) -> String {
    if measure_text_width(s) <= max_width {
        return s.to_string();
    }

    let ellipsis_width = measure_text_width(ellipsis);
    if max_width <= ellipsis_width {
        return truncate_to_display_width(ellipsis, max_width);
    }

    let mut result = truncate_to_display_width(s, max_width - ellipsis_width);
    // Close any style the cut may have left open.
    if result.contains('\x1b') {
        result.push_str("\x1b[0m");
    }
    result.push_str(ellipsis);
    result
}

/// Pads a string on the left (right-aligns) to reach the target width.
pub fn pad_left(s: &str, width: usize) -> String {
    pad_str(s, width, Alignment::Right, None).into_owned()
}

/// Pads a string on the right (left-aligns) to reach the target width.
///
/// ```rust
/// use rollbook_render::pad_right;
///
/// assert_eq!(pad_right("42", 5), "42   ");
/// assert_eq!(pad_right("hello", 3), "hello");
/// ```
pub fn pad_right(s: &str, width: usize) -> String {
    pad_str(s, width, Alignment::Left, None).into_owned()
}

/// Pads a string on both sides (centers) to reach the target width.
///
/// When the remaining space is odd, the extra space goes on the right.
pub fn pad_center(s: &str, width: usize) -> String {
    pad_str(s, width, Alignment::Center, None).into_owned()
}

/// Fits a string into exactly `width` columns: truncated with `…` when too
/// long, padded on the right when too short.
pub fn fit(s: &str, width: usize) -> String {
    pad_right(&truncate_end(s, width, "…"), width)
}

/// Places `left` and `right` at opposite ends of a `width`-column line.
///
/// The right side is truncated first when both do not fit; at least one space
/// separates them.
///
/// ```rust
/// use rollbook_render::justify;
///
/// assert_eq!(justify("Rate:", "₱250.00", 16), "Rate:    ₱250.00");
/// ```
pub fn justify(left: &str, right: &str, width: usize) -> String {
    let left = truncate_end(left, width, "…");
    let left_width = measure_text_width(&left);
    let room = width.saturating_sub(left_width + 1);
    if room == 0 {
        return pad_right(&left, width);
    }
    let right = truncate_end(right, room, "…");
    let gap = width - left_width - measure_text_width(&right);
    format!("{}{}{}", left, " ".repeat(gap), right)
}

/// Truncate string to fit display width, keeping characters from the start.
fn truncate_to_display_width(s: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }

    if measure_text_width(s) <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    let mut in_escape = false;

    for c in s.chars() {
        if c == '\x1b' {
            result.push(c);
            in_escape = true;
            continue;
        }

        if in_escape {
            result.push(c);
            // ANSI CSI sequences end with a letter (@ through ~)
            if c.is_ascii_alphabetic() || c == '~' {
                in_escape = false;
            }
            continue;
        }

        let char_width = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        if current_width + char_width > max_width {
            break;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}
