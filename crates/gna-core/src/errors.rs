//! Error types for the gna crates.
//!
//! Every fallible operation returns [`Result`], whose error side is the
//! single `thiserror`-derived [`Error`] enum below. Precondition checks go
//! through the [`ensure!`](crate::ensure) and [`fail!`](crate::fail) macros.

use thiserror::Error;

/// The top-level error type used throughout the gna crates.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// General runtime error.
    #[error("{0}")]
    Runtime(String),

    /// Precondition violated.
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// A string could not be parsed into the requested value.
    #[error("cannot parse {input:?}: {reason}")]
    Parse {
        /// The offending input, verbatim.
        input: String,
        /// What was wrong with it.
        reason: String,
    },

    /// Date construction or arithmetic left the supported range.
    #[error("date error: {0}")]
    Date(String),

    /// A year-dependent computation was asked for a year it cannot serve.
    #[error("year {year} out of range [{min}, {max}]")]
    YearOutOfRange {
        /// The requested year.
        year: u16,
        /// First supported year.
        min: u16,
        /// Last supported year.
        max: u16,
    },

    /// Invalid argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl Error {
    /// Build an [`Error::Parse`] from any displayable input and reason.
    pub fn parse(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::Parse {
            input: input.into(),
            reason: reason.into(),
        }
    }
}

/// Shorthand `Result` type used throughout the gna crates.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use gna_core::{ensure, errors::Error};
/// fn day_in_month(day: u8) -> gna_core::errors::Result<u8> {
///     ensure!((1..=31).contains(&day), "day {day} out of range");
///     Ok(day)
/// }
/// assert!(day_in_month(17).is_ok());
/// assert!(day_in_month(0).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}

/// Return `Err(Error::Runtime(...))` immediately.
///
/// # Example
/// ```
/// use gna_core::{fail, errors::Error};
/// fn always_err() -> gna_core::errors::Result<()> {
///     fail!("something went wrong");
/// }
/// assert!(always_err().is_err());
/// ```
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::Runtime(format!($($msg)*)))
    };
}
