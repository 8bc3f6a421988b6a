//! Choosing between the grid and card layouts.

/// Default breakpoint, in terminal columns.
pub const DEFAULT_BREAKPOINT: usize = 100;

/// The space available to render into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    /// Width in terminal columns.
    pub width: usize,
}

impl Viewport {
    pub fn new(width: usize) -> Self {
        Viewport { width }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Viewport { width: 80 }
    }
}

/// Which presenter draws the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// Bordered grid with one line per row.
    Desktop,
    /// One card per row.
    Mobile,
}

/// Picks a [`Layout`] from the viewport width.
///
/// ```rust
/// use rollbook::{Layout, LayoutSelector, Viewport};
///
/// let selector = LayoutSelector::default();
/// assert_eq!(selector.select(Viewport::new(120)), Layout::Desktop);
/// assert_eq!(selector.select(Viewport::new(100)), Layout::Desktop);
/// assert_eq!(selector.select(Viewport::new(99)), Layout::Mobile);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutSelector {
    breakpoint: usize,
}

impl LayoutSelector {
    pub fn new(breakpoint: usize) -> Self {
        LayoutSelector { breakpoint }
    }

    pub fn breakpoint(&self) -> usize {
        self.breakpoint
    }

    /// Desktop at or above the breakpoint, mobile below it.
    pub fn select(&self, viewport: Viewport) -> Layout {
        if viewport.width >= self.breakpoint {
            Layout::Desktop
        } else {
            Layout::Mobile
        }
    }
}

impl Default for LayoutSelector {
    fn default() -> Self {
        LayoutSelector::new(DEFAULT_BREAKPOINT)
    }
}
