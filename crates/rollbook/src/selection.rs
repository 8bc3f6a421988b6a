//! Row selection.
//!
//! Rows are identified by their index in the table's data. Selection is
//! independent of filtering: a selected row stays selected while hidden.

use std::collections::BTreeSet;

/// Index of a row in the table's data.
pub type RowId = usize;

/// State of a checkbox, including the header's partial state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckState {
    Unchecked,
    /// Some, but not all, visible rows are selected.
    Indeterminate,
    Checked,
}

impl CheckState {
    /// Checkbox glyph: `[ ]`, `[-]` or `[x]`.
    pub fn glyph(self) -> &'static str {
        match self {
            CheckState::Unchecked => "[ ]",
            CheckState::Indeterminate => "[-]",
            CheckState::Checked => "[x]",
        }
    }

    fn from_bool(checked: bool) -> Self {
        if checked {
            CheckState::Checked
        } else {
            CheckState::Unchecked
        }
    }
}

/// The set of selected rows.
///
/// Every mutator returns `true` when the set changed, so callers notify
/// listeners only on real changes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    selected: BTreeSet<RowId>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_selected(&self, row: RowId) -> bool {
        self.selected.contains(&row)
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Selected rows in data order.
    pub fn ids(&self) -> impl Iterator<Item = RowId> + '_ {
        self.selected.iter().copied()
    }

    /// Number of selected rows among `visible`.
    pub fn count_in(&self, visible: &[RowId]) -> usize {
        visible.iter().filter(|id| self.is_selected(**id)).count()
    }

    /// Checkbox state of a single row.
    pub fn row_state(&self, row: RowId) -> CheckState {
        CheckState::from_bool(self.is_selected(row))
    }

    /// Header checkbox state over the visible rows.
    pub fn header_state(&self, visible: &[RowId]) -> CheckState {
        let selected = self.count_in(visible);
        if selected == 0 {
            CheckState::Unchecked
        } else if selected == visible.len() {
            CheckState::Checked
        } else {
            CheckState::Indeterminate
        }
    }

    /// Flips one row.
    pub fn toggle(&mut self, row: RowId) -> bool {
        if !self.selected.remove(&row) {
            self.selected.insert(row);
        }
        true
    }

    /// Header toggle: deselects the visible rows if all are selected,
    /// otherwise selects them all. Hidden rows are left as they are.
    pub fn toggle_visible(&mut self, visible: &[RowId]) -> bool {
        if visible.is_empty() {
            return false;
        }
        if self.header_state(visible) == CheckState::Checked {
            for id in visible {
                self.selected.remove(id);
            }
        } else {
            self.selected.extend(visible.iter().copied());
        }
        true
    }

    /// Deselects everything.
    pub fn clear(&mut self) -> bool {
        if self.selected.is_empty() {
            return false;
        }
        self.selected.clear();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_row() {
        let mut sel = Selection::new();
        assert!(sel.toggle(2));
        assert!(sel.is_selected(2));
        assert_eq!(sel.row_state(2), CheckState::Checked);
        assert!(sel.toggle(2));
        assert!(sel.is_empty());
    }

    #[test]
    fn header_tri_state() {
        let mut sel = Selection::new();
        let visible = [0, 1, 2];
        assert_eq!(sel.header_state(&visible), CheckState::Unchecked);
        sel.toggle(1);
        assert_eq!(sel.header_state(&visible), CheckState::Indeterminate);
        sel.toggle(0);
        sel.toggle(2);
        assert_eq!(sel.header_state(&visible), CheckState::Checked);
        assert_eq!(sel.header_state(&[]), CheckState::Unchecked);
    }

    #[test]
    fn hidden_selection_does_not_count() {
        let mut sel = Selection::new();
        sel.toggle(5);
        assert_eq!(sel.count_in(&[0, 1]), 0);
        assert_eq!(sel.header_state(&[0, 1]), CheckState::Unchecked);
    }

    #[test]
    fn toggle_visible_leaves_hidden_rows() {
        let mut sel = Selection::new();
        sel.toggle(5);
        assert!(sel.toggle_visible(&[0, 1]));
        assert_eq!(sel.ids().collect::<Vec<_>>(), vec![0, 1, 5]);
        assert!(sel.toggle_visible(&[0, 1]));
        assert_eq!(sel.ids().collect::<Vec<_>>(), vec![5]);
    }

    #[test]
    fn partial_header_toggle_selects_all() {
        let mut sel = Selection::new();
        sel.toggle(0);
        sel.toggle_visible(&[0, 1, 2]);
        assert_eq!(sel.count_in(&[0, 1, 2]), 3);
    }

    #[test]
    fn noop_changes_report_false() {
        let mut sel = Selection::new();
        assert!(!sel.clear());
        assert!(!sel.toggle_visible(&[]));
    }

    #[test]
    fn glyphs() {
        assert_eq!(CheckState::Unchecked.glyph(), "[ ]");
        assert_eq!(CheckState::Indeterminate.glyph(), "[-]");
        assert_eq!(CheckState::Checked.glyph(), "[x]");
    }
}
