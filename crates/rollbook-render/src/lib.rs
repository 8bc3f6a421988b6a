//! Render - terminal text primitives for rollbook tables.
//!
//! Everything here works on plain strings and widths; nothing knows about
//! rows, columns or selection. The table crate composes these pieces into
//! its grid and card presenters.
//!
//! - [`util`]: ANSI-aware width, truncation and padding
//! - [`BorderStyle`] and [`Grid`]: bordered grids with hit-testable cell spans
//! - [`format`]: currency, number, percentage and date display formatters
//! - [`template`]: MiniJinja templates for card bodies
//! - [`Palette`]: optional bold/dim/accent emphasis
//!
//! ```rust
//! use rollbook_render::{fit, BorderStyle};
//!
//! assert_eq!(fit("Daily Rate", 6), "Daily…");
//! let card = BorderStyle::Ascii.frame(&["Jane"], 4);
//! assert_eq!(card, vec!["+------+", "| Jane |", "+------+"]);
//! ```

mod border;
mod error;
pub mod format;
mod grid;
mod style;
pub mod template;
pub mod util;

pub use border::{BorderChars, BorderStyle, LineType};
pub use error::RenderError;
pub use format::{format_currency, format_date, format_number, format_percentage, DEFAULT_CURRENCY};
pub use grid::Grid;
pub use style::Palette;
pub use template::{render_card, CardContext, CardPair};
pub use util::{display_width, fit, justify, pad_center, pad_left, pad_right, truncate_end};
