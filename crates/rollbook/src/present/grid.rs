//! Bordered grid presenter for wide viewports.

use rollbook_render::{BorderStyle, Grid, LineType, RenderError};
use rollbook_seeker::Dir;

use super::toolbar::render_toolbar;
use super::{Hit, Presenter, Rendered, TableView};

/// Draws one line per row under a header with sort indicators.
///
/// ```text
/// ┌─────┬──────────────┬──────────────┐
/// │ [-] │ First Name ↑ │ Daily Rate ↕ │
/// ├─────┼──────────────┼──────────────┤
/// │ [x] │ Jane         │ ₱300.00      │
/// │ [ ] │ John         │ ₱250.00      │
/// └─────┴──────────────┴──────────────┘
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct GridPresenter {
    border: BorderStyle,
}

impl GridPresenter {
    pub fn new(border: BorderStyle) -> Self {
        GridPresenter { border }
    }
}

/// Sort indicator for a sortable header.
pub(crate) fn sort_icon(dir: Option<Dir>) -> &'static str {
    match dir {
        None => "↕",
        Some(Dir::Asc) => "↑",
        Some(Dir::Desc) => "↓",
    }
}

impl<T> Presenter<T> for GridPresenter {
    fn present(&self, view: &TableView<'_, T>, width: usize) -> Result<Rendered, RenderError> {
        let palette = view.palette();
        let selectable = view.selectable();
        let selection = view.state().selection();

        let mut header = Vec::new();
        if selectable {
            header.push(selection.header_state(view.visible()).glyph().to_string());
        }
        for column in view.columns() {
            let dir = view.sort_dir(column.id());
            let mut text = column.header_text(dir);
            if column.is_sortable() {
                text.push(' ');
                text.push_str(sort_icon(dir));
            }
            header.push(palette.title(&text));
        }

        let rows: Vec<Vec<String>> = view
            .visible()
            .iter()
            .map(|&id| {
                let row = view.row(id);
                let mut cells = Vec::with_capacity(header.len());
                if selectable {
                    cells.push(selection.row_state(id).glyph().to_string());
                }
                cells.extend(view.columns().iter().map(|c| c.display(row)));
                cells
            })
            .collect();

        let grid = Grid::fit(self.border, &header, &rows, width);
        let offset = usize::from(selectable);

        let mut out = Rendered::new();
        render_toolbar(view, width, &mut out);

        out.push_nonempty(grid.rule(LineType::Top));
        let y = out.push_line(grid.row(&header));
        if selectable {
            if let Some(span) = grid.cell_span(0) {
                out.add_region(y, span, Hit::SelectAll);
            }
        }
        for (i, column) in view.columns().iter().enumerate() {
            if !column.is_sortable() {
                continue;
            }
            if let Some(span) = grid.cell_span(i + offset) {
                out.add_region(y, span, Hit::Header(column.id().to_string()));
            }
        }
        out.push_nonempty(grid.rule(LineType::Middle));

        if rows.is_empty() {
            out.push_line(grid.spanning_row(&view.config().empty_message));
        }
        for (&id, cells) in view.visible().iter().zip(&rows) {
            let y = out.push_line(grid.row(cells));
            if selectable {
                if let Some(span) = grid.cell_span(0) {
                    out.add_region(y, span, Hit::Checkbox(id));
                }
            }
            out.add_region(y, 0..grid.total_width(), Hit::Row(id));
        }
        out.push_nonempty(grid.rule(LineType::Bottom));

        Ok(out)
    }
}
