//! Error types for the seeker crate.

use thiserror::Error;

use crate::kind::ColumnType;

/// Errors that can occur when decoding filter values from their string form.
///
/// Filter evaluation itself never fails; these only surface when an encoded
/// value arrives from outside the table (command line, saved views).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SeekerError {
    /// The value is empty or blank where a non-empty value is required.
    #[error("empty {kind} filter value")]
    EmptyValue { kind: ColumnType },

    /// A date filter value is not a `yyyy-MM-dd` calendar date.
    #[error("invalid date '{0}', expected yyyy-MM-dd")]
    InvalidDate(String),

    /// A number range is not of the form `<min>:<max>`.
    #[error("invalid number range '{0}', expected <min>:<max>")]
    InvalidRange(String),

    /// A number range where both bounds are unset.
    #[error("number range '{0}' has no bounds")]
    UnboundedRange(String),
}

/// Result type for seeker operations.
pub type Result<T> = std::result::Result<T, SeekerError>;
