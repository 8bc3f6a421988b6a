//! Border styles for grids and cards.

use crate::util::fit;

/// Border style for table and card decoration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BorderStyle {
    /// No borders; cells are separated by spaces only.
    None,
    /// ASCII borders: +, -, |
    Ascii,
    /// Light Unicode box-drawing characters: ┌, ─, ┐, │, └, ┘, ├, ┼, ┤, ┬, ┴
    #[default]
    Light,
    /// Rounded corners with light lines: ╭, ─, ╮, │, ╰, ╯, ├, ┼, ┤, ┬, ┴
    Rounded,
}

/// Which horizontal rule to draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineType {
    /// Above the first line.
    Top,
    /// Between header and body.
    Middle,
    /// Below the last line.
    Bottom,
}

/// Box-drawing characters for a border style.
#[derive(Clone, Copy, Debug)]
pub struct BorderChars {
    pub horizontal: char,
    pub vertical: char,
    pub top_left: char,
    pub top_right: char,
    pub bottom_left: char,
    pub bottom_right: char,
    pub left_t: char,
    pub cross: char,
    pub right_t: char,
    pub top_t: char,
    pub bottom_t: char,
}

impl BorderStyle {
    /// Get the box-drawing characters for this border style.
    pub fn chars(&self) -> BorderChars {
        match self {
            BorderStyle::None => BorderChars::empty(),
            BorderStyle::Ascii => BorderChars {
                horizontal: '-',
                vertical: '|',
                top_left: '+',
                top_right: '+',
                bottom_left: '+',
                bottom_right: '+',
                left_t: '+',
                cross: '+',
                right_t: '+',
                top_t: '+',
                bottom_t: '+',
            },
            BorderStyle::Light => BorderChars {
                horizontal: '─',
                vertical: '│',
                top_left: '┌',
                top_right: '┐',
                bottom_left: '└',
                bottom_right: '┘',
                left_t: '├',
                cross: '┼',
                right_t: '┤',
                top_t: '┬',
                bottom_t: '┴',
            },
            BorderStyle::Rounded => BorderChars {
                horizontal: '─',
                vertical: '│',
                top_left: '╭',
                top_right: '╮',
                bottom_left: '╰',
                bottom_right: '╯',
                left_t: '├',
                cross: '┼',
                right_t: '┤',
                top_t: '┬',
                bottom_t: '┴',
            },
        }
    }

    /// Returns `true` unless this is [`BorderStyle::None`].
    pub fn is_visible(&self) -> bool {
        *self != BorderStyle::None
    }

    /// Draws a horizontal rule over segments of the given widths.
    ///
    /// Each segment is padded by one column on each side, matching the cell
    /// layout `│ cell │ cell │`. Returns an empty string for
    /// [`BorderStyle::None`].
    pub fn rule(&self, line_type: LineType, segments: &[usize]) -> String {
        if !self.is_visible() {
            return String::new();
        }
        let c = self.chars();
        let (left, joint, right) = match line_type {
            LineType::Top => (c.top_left, c.top_t, c.top_right),
            LineType::Middle => (c.left_t, c.cross, c.right_t),
            LineType::Bottom => (c.bottom_left, c.bottom_t, c.bottom_right),
        };

        let mut line = String::new();
        line.push(left);
        for (i, &width) in segments.iter().enumerate() {
            if i > 0 {
                line.push(joint);
            }
            line.extend(std::iter::repeat(c.horizontal).take(width + 2));
        }
        line.push(right);
        line
    }

    /// Wraps lines in a box `inner` columns wide, one column of padding on
    /// each side. Lines are fitted to the inner width.
    ///
    /// Without borders the lines are only fitted and indented by one column,
    /// so content keeps the same horizontal offset either way.
    pub fn frame<S: AsRef<str>>(&self, lines: &[S], inner: usize) -> Vec<String> {
        let v = self.chars().vertical;
        let mut out = Vec::with_capacity(lines.len() + 2);
        if self.is_visible() {
            out.push(self.rule(LineType::Top, &[inner]));
        }
        for line in lines {
            out.push(format!("{} {} {}", v, fit(line.as_ref(), inner), v));
        }
        if self.is_visible() {
            out.push(self.rule(LineType::Bottom, &[inner]));
        }
        out
    }
}

impl BorderChars {
    fn empty() -> Self {
        BorderChars {
            horizontal: ' ',
            vertical: ' ',
            top_left: ' ',
            top_right: ' ',
            bottom_left: ' ',
            bottom_right: ' ',
            left_t: ' ',
            cross: ' ',
            right_t: ' ',
            top_t: ' ',
            bottom_t: ' ',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn light_rules_place_joints() {
        let style = BorderStyle::Light;
        assert_eq!(style.rule(LineType::Top, &[1, 2]), "┌───┬────┐");
        assert_eq!(style.rule(LineType::Middle, &[1, 2]), "├───┼────┤");
        assert_eq!(style.rule(LineType::Bottom, &[1, 2]), "└───┴────┘");
    }

    #[test]
    fn ascii_rule() {
        assert_eq!(BorderStyle::Ascii.rule(LineType::Top, &[3]), "+-----+");
    }

    #[test]
    fn rounded_frame() {
        let lines = BorderStyle::Rounded.frame(&["John", "Doe"], 5);
        assert_eq!(lines, vec!["╭───────╮", "│ John  │", "│ Doe   │", "╰───────╯"]);
    }

    #[test]
    fn frame_without_border() {
        let lines = BorderStyle::None.frame(&["John"], 5);
        assert_eq!(lines, vec!["  John   "]);
    }

    #[test]
    fn none_draws_nothing() {
        assert_eq!(BorderStyle::None.rule(LineType::Top, &[3, 4]), "");
        assert!(!BorderStyle::None.is_visible());
    }
}
