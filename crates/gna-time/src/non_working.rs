//! Classification of a single day as working or not.
//!
//! A public holiday wins over a weekend: 1 January 2022 was a Saturday and
//! is reported as Πρωτοχρονιά, not as a weekend.

use gna_core::errors::Result;

use crate::date::Date;
use crate::holidays::{holiday_on, GreekHoliday};

/// Why a day is not a working day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NonWorkingReason {
    /// A Greek public holiday.
    Holiday(GreekHoliday),
    /// Saturday or Sunday, and no holiday.
    Weekend,
}

impl NonWorkingReason {
    /// Label shown on the calendar: the holiday's Greek name, or
    /// `Σαββατοκύριακο` for weekends.
    pub fn label(&self) -> &'static str {
        match self {
            NonWorkingReason::Holiday(h) => h.name(),
            NonWorkingReason::Weekend => "Σαββατοκύριακο",
        }
    }

    /// English label: the holiday's English name, or `weekend`.
    pub fn english_label(&self) -> &'static str {
        match self {
            NonWorkingReason::Holiday(h) => h.english_name(),
            NonWorkingReason::Weekend => "weekend",
        }
    }
}

impl std::fmt::Display for NonWorkingReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Result of [`classify`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NonWorkingDay {
    /// `true` for holidays and weekends.
    pub is_non_working_day: bool,
    /// Set exactly when `is_non_working_day` is.
    pub reason: Option<NonWorkingReason>,
}

impl NonWorkingDay {
    /// A plain working day.
    pub const WORKING: NonWorkingDay = NonWorkingDay {
        is_non_working_day: false,
        reason: None,
    };

    fn because(reason: NonWorkingReason) -> Self {
        NonWorkingDay {
            is_non_working_day: true,
            reason: Some(reason),
        }
    }
}

/// Classify `date` as holiday, weekend or working day.
pub fn classify(date: Date) -> Result<NonWorkingDay> {
    if let Some(holiday) = holiday_on(date)? {
        return Ok(NonWorkingDay::because(NonWorkingReason::Holiday(holiday)));
    }
    if date.weekday().is_weekend() {
        return Ok(NonWorkingDay::because(NonWorkingReason::Weekend));
    }
    Ok(NonWorkingDay::WORKING)
}
