//! Orthodox Easter Sunday.
//!
//! The Eastern churches keep the Julian computus, so the feast is first
//! located on the Julian calendar (Meeus' Julian algorithm) and then shifted
//! onto the Gregorian calendar. The shift is 13 days throughout 1900–2099
//! and changes at each non-leap Gregorian century, so years outside that
//! range are refused rather than answered wrongly.

use std::ops::RangeInclusive;

use gna_core::errors::{Error, Result};

use crate::date::Date;

/// Years for which [`orthodox_easter`] is exact.
pub const ORTHODOX_EASTER_YEARS: RangeInclusive<u16> = 1900..=2099;

/// Julian → Gregorian offset, in days, valid for [`ORTHODOX_EASTER_YEARS`].
const JULIAN_OFFSET_DAYS: i32 = 13;

/// Return the Gregorian date of Orthodox Easter Sunday in `year`.
///
/// # Errors
/// [`Error::YearOutOfRange`] outside [`ORTHODOX_EASTER_YEARS`].
///
/// # Example
/// ```
/// use gna_time::{orthodox_easter, Date};
/// assert_eq!(orthodox_easter(2024).unwrap(), Date::from_ymd(2024, 5, 5).unwrap());
/// ```
pub fn orthodox_easter(year: u16) -> Result<Date> {
    if !ORTHODOX_EASTER_YEARS.contains(&year) {
        return Err(Error::YearOutOfRange {
            year,
            min: *ORTHODOX_EASTER_YEARS.start(),
            max: *ORTHODOX_EASTER_YEARS.end(),
        });
    }
    let (month, day) = julian_easter(year);
    // March 22 + 35 days at most, i.e. no later than April 25 (Julian):
    // always a real Gregorian day of the same year too.
    Date::from_ymd(year, month, day)?.add_days(JULIAN_OFFSET_DAYS)
}

/// Julian-calendar Easter Sunday as `(month, day)`.
fn julian_easter(year: u16) -> (u8, u8) {
    let y = u32::from(year);
    let a = y % 19;
    let b = y % 7;
    let c = y % 4;
    // Paschal full moon, counted in days after March 21.
    let d = (19 * a + 15) % 30;
    // Days from the full moon to the following Sunday.
    let e = (2 * c + 4 * b + 6 * d + 6) % 7;
    let f = (d + e) as u8;
    if f <= 9 {
        (3, f + 22)
    } else {
        (4, f - 9)
    }
}
