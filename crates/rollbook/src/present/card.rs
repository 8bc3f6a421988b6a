//! Card presenter for narrow viewports.

use rollbook_render::{display_width, render_card, BorderStyle, CardContext, CardPair, RenderError};

use super::toolbar::render_toolbar;
use super::{Hit, Presenter, Rendered, TableView};
use crate::selection::CheckState;

/// Cards never get narrower than this, even on tiny viewports.
const MIN_INNER_WIDTH: usize = 16;

/// Draws each row as a card: the first data column as a title, the others
/// as `Label: value` lines.
///
/// ```text
/// ╭──────────────────────────╮
/// │ [x] Selected             │
/// │ Jane                     │
/// │ Last Name:         Smith │
/// │ Daily Rate:      ₱300.00 │
/// ╰──────────────────────────╯
/// ```
#[derive(Debug, Clone, Copy)]
pub struct CardPresenter {
    border: BorderStyle,
}

impl CardPresenter {
    pub fn new(border: BorderStyle) -> Self {
        CardPresenter { border }
    }
}

impl Default for CardPresenter {
    fn default() -> Self {
        CardPresenter::new(BorderStyle::Rounded)
    }
}

impl<T> Presenter<T> for CardPresenter {
    fn present(&self, view: &TableView<'_, T>, width: usize) -> Result<Rendered, RenderError> {
        let palette = view.palette();
        let selectable = view.selectable();
        let inner = width.saturating_sub(4).max(MIN_INNER_WIDTH);
        let top = usize::from(self.border.is_visible());

        let mut out = Rendered::new();
        render_toolbar(view, width, &mut out);

        if view.visible().is_empty() {
            for line in self.border.frame(&[view.config().empty_message.as_str()], inner) {
                out.push_line(line);
            }
            return Ok(out);
        }

        for &id in view.visible() {
            let row = view.row(id);
            let mut cells = view
                .data_columns()
                .map(|c| (c.label().unwrap_or_default(), c.display(row)));
            let title = cells.next().map(|(_, value)| value).unwrap_or_default();
            let pairs = cells
                .map(|(label, value)| CardPair {
                    label: palette.muted(label),
                    value,
                })
                .collect();

            let state = view.state().selection().row_state(id);
            let ctx = CardContext {
                selectable,
                checkbox: state.glyph().to_string(),
                select_label: if state == CheckState::Checked {
                    "Selected"
                } else {
                    "Select"
                }
                .to_string(),
                title: palette.title(&title),
                pairs,
                width: inner,
            };

            let body = render_card(&ctx)?;
            let first = out.lines.len();
            for line in self.border.frame(&body, inner) {
                out.push_line(line);
            }
            let last = out.lines.len();

            if selectable {
                let marker = format!("{} {}", ctx.checkbox, ctx.select_label);
                out.add_region(first + top, 2..2 + display_width(&marker), Hit::Checkbox(id));
            }
            for y in first..last {
                out.add_region(y, 0..inner + 4, Hit::Row(id));
            }
        }

        Ok(out)
    }
}
