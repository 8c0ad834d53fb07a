//! # gna
//!
//! Greek public holidays and attendance-window rules for the 251 ΓΝΑ
//! attendance tracker.
//!
//! This crate is a **façade** that re-exports the workspace crates and adds
//! the string-boundary functions the calendar front end calls with raw
//! `YYYY-MM-DD` input. Every one of them parses strictly and reports
//! malformed input as `gna::core::Error::Parse`.
//!
//! ## Quick start
//!
//! ```rust
//! let lookup = gna::is_greek_holiday("2024-05-01").unwrap();
//! assert!(lookup.is_holiday);
//! assert_eq!(lookup.name, Some("Πρωτομαγιά"));
//!
//! assert!(gna::is_date_in_allowed_period("2024-12-17").unwrap());
//! assert!(gna::is_date_in_allowed_period("not a date").is_err());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error definitions and parsers.
pub use gna_core as core;

/// Dates, holidays, calendars and the submission window.
pub use gna_time as time;

/// String-boundary lookups over ISO dates.
pub mod lookup;

pub use gna_time::{greek_holidays, orthodox_easter, Date, SubmissionWindow};
pub use lookup::{
    date_restriction_message, date_restriction_message_with, is_date_in_allowed_period,
    is_date_in_allowed_period_with, is_greek_holiday, is_non_working_day, is_weekend,
    HolidayLookup,
};
