//! MiniJinja templates used by the card presenter.
//!
//! Templates are compiled once into a shared environment. Two helpers are
//! registered for them:
//!
//! - `fit(width)` filter: truncate-or-pad to an exact width
//! - `justify(left, right, width)` function: push `right` to the line end

use minijinja::Environment;
use once_cell::sync::Lazy;
use serde::Serialize;

use crate::error::RenderError;
use crate::util;

/// Name of the built-in card template.
pub const CARD_TEMPLATE: &str = "card.txt";

const CARD_SOURCE: &str = "\
{% if selectable %}{{ checkbox }} {{ select_label }}
{% endif %}{{ title }}
{% for pair in pairs %}{{ justify(pair.label ~ \":\", pair.value, width) }}
{% endfor %}";

static ENV: Lazy<Environment<'static>> = Lazy::new(|| {
    let mut env = Environment::new();
    env.set_trim_blocks(true);
    register_filters(&mut env);
    // The source is a constant; a syntax error here is caught by the tests.
    if let Err(err) = env.add_template(CARD_TEMPLATE, CARD_SOURCE) {
        log::error!("invalid built-in template {}: {}", CARD_TEMPLATE, err);
    }
    env
});

/// Registers the text helpers on a MiniJinja environment.
pub fn register_filters(env: &mut Environment<'static>) {
    env.add_filter("fit", |value: String, width: usize| util::fit(&value, width));
    env.add_function("justify", |left: String, right: String, width: usize| {
        util::justify(&left, &right, width)
    });
}

/// One `Label: value` line of a card.
#[derive(Debug, Clone, Serialize)]
pub struct CardPair {
    pub label: String,
    pub value: String,
}

/// Everything the card template needs for one row.
#[derive(Debug, Clone, Serialize)]
pub struct CardContext {
    /// Whether to draw the selection line first.
    pub selectable: bool,
    /// Checkbox glyph, e.g. `[x]`.
    pub checkbox: String,
    /// `Selected` or `Select`.
    pub select_label: String,
    /// Prominent first value.
    pub title: String,
    /// Remaining label/value pairs.
    pub pairs: Vec<CardPair>,
    /// Inner width of the card.
    pub width: usize,
}

/// Renders a card body into lines. When `selectable` is set, the first line
/// is the selection line.
pub fn render_card(ctx: &CardContext) -> Result<Vec<String>, RenderError> {
    let template = ENV.get_template(CARD_TEMPLATE)?;
    let output = template.render(ctx)?;
    Ok(output.lines().map(str::to_string).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context(selectable: bool) -> CardContext {
        CardContext {
            selectable,
            checkbox: "[x]".to_string(),
            select_label: "Selected".to_string(),
            title: "John".to_string(),
            pairs: vec![
                CardPair {
                    label: "Last Name".to_string(),
                    value: "Doe".to_string(),
                },
                CardPair {
                    label: "Daily Rate".to_string(),
                    value: "₱250.00".to_string(),
                },
            ],
            width: 24,
        }
    }

    #[test]
    fn card_with_selection_line() {
        let lines = render_card(&context(true)).unwrap();
        assert_eq!(
            lines,
            vec![
                "[x] Selected",
                "John",
                "Last Name:           Doe",
                "Daily Rate:      ₱250.00",
            ]
        );
    }

    #[test]
    fn card_without_selection_line() {
        let lines = render_card(&context(false)).unwrap();
        assert_eq!(lines[0], "John");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn fit_filter_available_to_templates() {
        let mut env = Environment::new();
        register_filters(&mut env);
        let out = env
            .render_str("[{{ name | fit(6) }}]", minijinja::context! { name => "Jo" })
            .unwrap();
        assert_eq!(out, "[Jo    ]");
    }
}
