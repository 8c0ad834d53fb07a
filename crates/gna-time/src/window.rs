//! The annual attendance submission window.
//!
//! Attendance may only be declared for days inside a recurring
//! `start..=end` span of month/days. By default that is 17 December to
//! 11 January, which wraps across the year end; a window whose start comes
//! before its end in the year is a plain inclusive range.

use tracing::trace;

use crate::date::Date;
use crate::month::{Month, MonthDay};

/// A recurring, year-independent span of days, both ends inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(deny_unknown_fields))]
pub struct SubmissionWindow {
    /// First day of the window.
    pub start: MonthDay,
    /// Last day of the window.
    pub end: MonthDay,
}

impl Default for SubmissionWindow {
    /// 17 December – 11 January.
    fn default() -> Self {
        SubmissionWindow {
            start: MonthDay::from_parts_unchecked(Month::December, 17),
            end: MonthDay::from_parts_unchecked(Month::January, 11),
        }
    }
}

impl SubmissionWindow {
    /// Build a window from its two ends.
    pub fn new(start: MonthDay, end: MonthDay) -> Self {
        SubmissionWindow { start, end }
    }

    /// Whether the window runs over the turn of the year.
    pub fn wraps_year_end(&self) -> bool {
        self.start > self.end
    }

    /// Return `true` if attendance may be declared for `date`.
    pub fn contains(&self, date: Date) -> bool {
        let md = date.month_day();
        let inside = if self.wraps_year_end() {
            md >= self.start || md <= self.end
        } else {
            self.start <= md && md <= self.end
        };
        trace!(%date, window = %self, inside, "submission window check");
        inside
    }

    /// Why `date` cannot be declared, or an empty string if it can.
    pub fn restriction_message(&self, date: Date) -> String {
        if self.contains(date) {
            return String::new();
        }
        format!(
            "Οι δηλώσεις παρουσιών επιτρέπονται μόνο για το διάστημα {} - {}",
            self.start.short(),
            self.end.short()
        )
    }
}

impl std::fmt::Display for SubmissionWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..={}", self.start, self.end)
    }
}
