//! Search line, counters, filter chips and the selection bar.

use rollbook_render::{display_width, fit, justify};

use super::{Hit, Rendered, TableView};

const CLEAR_FILTERS: &str = "Clear all";
const CLEAR_SELECTION: &str = "Clear selection";

/// Draws the toolbar shared by every presenter.
pub(crate) fn render_toolbar<T>(view: &TableView<'_, T>, width: usize, out: &mut Rendered) {
    let palette = view.palette();

    let search = if view.state().global_filter().is_empty() {
        palette.muted(&view.config().search_placeholder)
    } else {
        view.state().global_filter().to_string()
    };
    out.push_line(fit(&format!("Search: {}", search), width));

    let selected = view.selected_count();
    let mut counter = String::new();
    if view.selectable() && selected > 0 {
        counter.push_str(&format!("{} selected  ", selected));
    }
    counter.push_str(&format!(
        "{} of {} row(s)",
        view.visible().len(),
        view.total_rows()
    ));
    let chooser = format!("Filter: {}", view.chooser_label());
    out.push_line(justify(&chooser, &palette.muted(&counter), width));

    render_chips(view, width, out);

    if view.selectable() && selected > 0 {
        let noun = if selected == 1 { "item" } else { "items" };
        let message = format!("{} {} selected  ", selected, noun);
        let start = display_width(&message);
        let y = out.push_line(fit(
            &format!("{}{}", message, palette.accent(CLEAR_SELECTION)),
            width,
        ));
        out.add_region(y, start..start + display_width(CLEAR_SELECTION), Hit::ClearSelection);
    }
}

/// Lays chips out left to right, wrapping onto new lines, followed by the
/// `Clear all` button.
fn render_chips<T>(view: &TableView<'_, T>, width: usize, out: &mut Rendered) {
    let applied = view.state().filters().applied();
    if applied.is_empty() {
        return;
    }

    let palette = view.palette();
    let mut items: Vec<(String, Hit)> = applied
        .iter()
        .enumerate()
        .map(|(i, f)| (format!("[{} ×]", f.chip_text()), Hit::Chip(i)))
        .collect();
    items.push((CLEAR_FILTERS.to_string(), Hit::ClearFilters));

    let mut line = String::new();
    let mut pending = Vec::new();
    let mut x = 0;
    for (text, hit) in items {
        let w = display_width(&text).min(width);
        if x > 0 && x + 1 + w > width {
            flush(out, &mut line, &mut pending, width);
            x = 0;
        }
        if x > 0 {
            line.push(' ');
            x += 1;
        }
        let shown = if hit == Hit::ClearFilters {
            palette.accent(&text)
        } else {
            text
        };
        line.push_str(&fit(&shown, w));
        pending.push((x..x + w, hit));
        x += w;
    }
    flush(out, &mut line, &mut pending, width);
}

fn flush(
    out: &mut Rendered,
    line: &mut String,
    pending: &mut Vec<(std::ops::Range<usize>, Hit)>,
    width: usize,
) {
    let y = out.push_line(fit(line.as_str(), width));
    for (span, hit) in pending.drain(..) {
        out.add_region(y, span, hit);
    }
    line.clear();
}
