//! Lookups keyed by ISO `YYYY-MM-DD` strings.
//!
//! Each function parses its input with [`Date::parse_iso`] first, so a
//! malformed string yields an error instead of a meaningless answer.

use gna_core::errors::Result;
use gna_time::{classify, holiday_on, Date, NonWorkingDay, SubmissionWindow};

/// Answer of [`is_greek_holiday`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HolidayLookup {
    /// Whether the date is a public holiday.
    pub is_holiday: bool,
    /// Greek name of the holiday, if it is one.
    pub name: Option<&'static str>,
}

/// Whether `date` is a Greek public holiday, and which.
pub fn is_greek_holiday(date: &str) -> Result<HolidayLookup> {
    let holiday = holiday_on(Date::parse_iso(date)?)?;
    Ok(HolidayLookup {
        is_holiday: holiday.is_some(),
        name: holiday.map(|h| h.name()),
    })
}

/// Whether `date` is a Saturday or a Sunday.
pub fn is_weekend(date: &str) -> Result<bool> {
    Ok(Date::parse_iso(date)?.weekday().is_weekend())
}

/// Holiday-over-weekend classification of `date`.
pub fn is_non_working_day(date: &str) -> Result<NonWorkingDay> {
    classify(Date::parse_iso(date)?)
}

/// Whether attendance may be declared for `date` under the default
/// 17/12 – 11/1 window.
pub fn is_date_in_allowed_period(date: &str) -> Result<bool> {
    is_date_in_allowed_period_with(date, &SubmissionWindow::default())
}

/// Whether attendance may be declared for `date` under `window`.
pub fn is_date_in_allowed_period_with(date: &str, window: &SubmissionWindow) -> Result<bool> {
    Ok(window.contains(Date::parse_iso(date)?))
}

/// Explanation for a refused `date` under the default window; empty when
/// the date is allowed.
pub fn date_restriction_message(date: &str) -> Result<String> {
    date_restriction_message_with(date, &SubmissionWindow::default())
}

/// Explanation for a refused `date` under `window`; empty when allowed.
pub fn date_restriction_message_with(date: &str, window: &SubmissionWindow) -> Result<String> {
    Ok(window.restriction_message(Date::parse_iso(date)?))
}
