//! Seeker - typed values and filter criteria for rollbook tables.
//!
//! This crate knows nothing about tables, rendering or selection. It provides
//! the pieces a table needs to decide whether a row passes a column filter and
//! how two rows compare:
//!
//! - [`Value`]: the raw value of a field, borrowed from the row
//! - [`ColumnType`] and [`classify`]: the semantic type of a column, inferred
//!   from its identifier
//! - [`FilterCriterion`]: a typed, committed filter with its string encoding
//! - [`Dir`] and [`compare_values`]: sort direction and type-aware comparison
//!
//! # Quick Start
//!
//! ```rust
//! use rollbook_seeker::{classify, ColumnType, FilterCriterion, NumberRange, Value, Number};
//!
//! assert_eq!(classify("daily_rate"), ColumnType::Number);
//!
//! let range = FilterCriterion::Range(NumberRange::new(Some(200.0), Some(300.0)));
//! assert_eq!(range.encode(), "200:300");
//!
//! assert!(range.matches_raw(&Value::Number(Number::I64(250))));
//! assert!(range.matches_raw(&Value::Number(Number::I64(300))));
//! assert!(!range.matches_raw(&Value::Number(Number::I64(325))));
//! ```
//!
//! # Filter Semantics
//!
//! | Type | Encoding | Compared against | Missing value |
//! |------|----------|------------------|---------------|
//! | Text | raw substring | display value, case-insensitive | no match |
//! | Date | `yyyy-MM-dd` | raw value, calendar day only | no match |
//! | Number | `<min>:<max>` | raw value, inclusive bounds | no match |

mod criterion;
mod error;
mod kind;
mod ordering;
mod traits;
mod value;

pub use criterion::{FilterCriterion, NumberRange};
pub use error::{Result, SeekerError};
pub use kind::{classify, ColumnType};
pub use ordering::{compare_values, compare_values_in, natural_cmp, Dir};
pub use traits::Seekable;
pub use value::{parse_calendar_day, Number, Timestamp, Value};
