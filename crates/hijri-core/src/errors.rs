//! Error types for hijri-datetime.
//!
//! Every fallible operation in the workspace reports one of a small, closed
//! set of failure kinds.  Input problems (`OutOfRange`, `IncompleteDate`,
//! `UnsupportedMethod`, `Parse`) go straight back to the caller and are
//! never retried or coerced.  `DataConsistency` means the loaded
//! correspondence dataset broke one of its invariants; it aborts the
//! current operation only.
//!
//! The [`ensure!`] and [`fail!`] macros are the early-return shorthands used
//! throughout the crates.

use thiserror::Error;

/// The top-level error type used throughout hijri-datetime.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A date, year or ordinal lies outside the supported span of either
    /// calendar, or a component is not a valid value (month 13, day 31 of a
    /// 29-day month, ...).
    #[error("out of range: {0}")]
    OutOfRange(String),

    /// A full-date operation was invoked on a partial (year or year+month)
    /// date.
    #[error("incomplete date: {0}")]
    IncompleteDate(String),

    /// The calculation method has no data coverage for the query.
    #[error("unsupported method: {0}")]
    UnsupportedMethod(String),

    /// The correspondence dataset violates one of its invariants.
    #[error("data consistency violated: {0}")]
    DataConsistency(String),

    /// Exact equality was requested between dates whose ranges cannot be
    /// told apart or told equal without explicit range semantics.
    #[error("ambiguous comparison: {0}")]
    AmbiguousComparison(String),

    /// Malformed textual input (date strings, method codes).
    #[error("parse error: {0}")]
    Parse(String),
}

impl Error {
    /// `true` for errors caused by the caller's input rather than the data.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Error::OutOfRange(_)
                | Error::IncompleteDate(_)
                | Error::UnsupportedMethod(_)
                | Error::Parse(_)
        )
    }

    /// `true` when the loaded dataset should no longer be trusted.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Error::DataConsistency(_))
    }
}

/// Shorthand `Result` type used throughout hijri-datetime.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return early with `Err(Error::$kind(...))` unless `$cond` holds.
///
/// # Example
/// ```
/// use hijri_core::{ensure, errors::Error};
/// fn positive(x: i64) -> hijri_core::errors::Result<i64> {
///     ensure!(x > 0, OutOfRange, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1).is_ok());
/// assert_eq!(
///     positive(-1),
///     Err(Error::OutOfRange("x must be positive, got -1".into()))
/// );
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $kind:ident, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::$kind(format!($($msg)*)));
        }
    };
}

/// Return `Err(Error::$kind(...))` immediately.
///
/// # Example
/// ```
/// use hijri_core::{fail, errors::Error};
/// fn always_err() -> hijri_core::errors::Result<()> {
///     fail!(DataConsistency, "table for {} is empty", "UAQ");
/// }
/// assert!(always_err().unwrap_err().is_fatal());
/// ```
#[macro_export]
macro_rules! fail {
    ($kind:ident, $($msg:tt)*) => {
        return Err($crate::errors::Error::$kind(format!($($msg)*)))
    };
}
