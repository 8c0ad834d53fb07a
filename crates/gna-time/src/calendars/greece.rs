//! Greece calendar.

use gna_core::errors::Result;

use crate::calendar::Calendar;
use crate::date::Date;
use crate::holidays::holiday_on;

/// Greece calendar.
///
/// Weekends and the following holidays are observed:
/// * New Year's Day (Jan 1)
/// * Epiphany (Jan 6)
/// * Clean Monday (Easter − 48)
/// * Independence Day (Mar 25)
/// * Good Friday, Easter Sunday, Easter Monday (Orthodox)
/// * Labour Day (May 1)
/// * Whit Monday (Easter + 50)
/// * Assumption (Aug 15)
/// * Ohi Day (Oct 28)
/// * Christmas Day (Dec 25)
/// * Synaxis of the Theotokos (Dec 26)
///
/// Holidays move with Orthodox Easter, so only 1900–2099 are served; any
/// query outside those years fails, weekends included.
#[derive(Debug, Clone, Copy, Default)]
pub struct Greece;

impl Calendar for Greece {
    fn name(&self) -> &str {
        "Greece"
    }

    fn is_business_day(&self, date: Date) -> Result<bool> {
        let holiday = holiday_on(date)?;
        Ok(holiday.is_none() && !self.is_weekend(date))
    }
}
