//! Miscellaneous utilities.

/// Strict string parsers for dates and month/day pairs.
pub mod data_parsers;

pub use data_parsers::{parse_iso_date, parse_month_day};
