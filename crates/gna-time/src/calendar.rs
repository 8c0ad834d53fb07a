//! `Calendar` trait.
//!
//! A calendar knows which dates are working days and can count or list them
//! over a range. Holiday rules may be limited to a range of years, so every
//! query that consults them is fallible.

use gna_core::errors::Result;

use crate::date::Date;

/// A working-day calendar.
pub trait Calendar: std::fmt::Debug + Send + Sync {
    /// Human-readable name (e.g. `"Greece"`).
    fn name(&self) -> &str;

    /// Return `true` if `date` is a working day in this calendar.
    fn is_business_day(&self, date: Date) -> Result<bool>;

    /// Return `true` if `date` is a holiday or a weekend.
    fn is_holiday(&self, date: Date) -> Result<bool> {
        Ok(!self.is_business_day(date)?)
    }

    /// Return `true` if `date` is a weekend according to this calendar.
    fn is_weekend(&self, date: Date) -> bool {
        date.weekday().is_weekend()
    }

    /// Count the working days between `d1` (exclusive) and `d2`
    /// (inclusive).  Returns a negative number if `d2 < d1`.
    fn business_days_between(&self, d1: Date, d2: Date) -> Result<i32> {
        let sign = if d2 >= d1 { 1 } else { -1 };
        let (start, end) = if d2 >= d1 { (d1, d2) } else { (d2, d1) };
        let mut count = 0;
        for offset in 1..=(end - start) {
            if self.is_business_day(start.add_days(offset)?)? {
                count += 1;
            }
        }
        Ok(sign * count)
    }

    /// Non-working days in `[from, to]`, optionally leaving out days that
    /// are only weekends.
    fn holiday_list(&self, from: Date, to: Date, include_weekends: bool) -> Result<Vec<Date>> {
        let mut out = Vec::new();
        if to < from {
            return Ok(out);
        }
        for offset in 0..=(to - from) {
            let d = from.add_days(offset)?;
            if self.is_holiday(d)? && (include_weekends || !self.is_weekend(d)) {
                out.push(d);
            }
        }
        Ok(out)
    }
}
