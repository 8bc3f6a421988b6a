//! Terminal emphasis for titles, labels and markers.

use console::Style;

/// Applies bold/dim/accent emphasis, or nothing when styling is off.
///
/// Styling is decided by the caller (configuration or TTY detection), never
/// by the environment, so plain output stays byte-for-byte predictable.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Palette {
    styled: bool,
}

impl Palette {
    /// A palette that returns text unchanged.
    pub fn plain() -> Self {
        Palette { styled: false }
    }

    /// A palette that emits ANSI styles.
    pub fn styled() -> Self {
        Palette { styled: true }
    }

    /// Creates a palette from a flag.
    pub fn new(styled: bool) -> Self {
        Palette { styled }
    }

    /// Bold text, for card titles and headers.
    pub fn title(&self, text: &str) -> String {
        self.apply(Style::new().bold(), text)
    }

    /// Dimmed text, for labels and counters.
    pub fn muted(&self, text: &str) -> String {
        self.apply(Style::new().dim(), text)
    }

    /// Accent color, for selection markers and active filters.
    pub fn accent(&self, text: &str) -> String {
        self.apply(Style::new().cyan(), text)
    }

    fn apply(&self, style: Style, text: &str) -> String {
        if self.styled {
            style.force_styling(true).apply_to(text).to_string()
        } else {
            text.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::display_width;

    #[test]
    fn plain_is_identity() {
        let p = Palette::plain();
        assert_eq!(p.title("John"), "John");
        assert_eq!(p.muted("Rate:"), "Rate:");
    }

    #[test]
    fn styled_adds_escapes_without_width() {
        let p = Palette::styled();
        let title = p.title("John");
        assert_ne!(title, "John");
        assert_eq!(display_width(&title), 4);
    }
}
