//! # gna-time
//!
//! Date, weekday and month types, Orthodox Easter, the Greek public-holiday
//! set, working-day calendars and the attendance submission window.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Working-day `Calendar` trait.
pub mod calendar;

/// Concrete calendar implementations.
pub mod calendars;

/// `Date` type.
pub mod date;

/// Orthodox Easter Sunday.
pub mod easter;

/// Greek public holidays.
pub mod holidays;

/// `Month` and `MonthDay`.
pub mod month;

/// Holiday-over-weekend classification of a single day.
pub mod non_working;

/// `Weekday` — day of the week.
pub mod weekday;

/// The annual attendance submission window.
pub mod window;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use calendar::Calendar;
pub use calendars::greece::Greece;
pub use date::Date;
pub use easter::{orthodox_easter, ORTHODOX_EASTER_YEARS};
pub use holidays::{greek_holidays, holiday_on, GreekHoliday, HolidayKind, HolidayRecord};
pub use month::{Month, MonthDay};
pub use non_working::{classify, NonWorkingDay, NonWorkingReason};
pub use weekday::Weekday;
pub use window::SubmissionWindow;
