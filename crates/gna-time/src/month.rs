//! `Month` — month-of-year enum, and `MonthDay`, a year-independent day.

use std::str::FromStr;

use gna_core::ensure;
use gna_core::errors::{Error, Result};
use gna_core::utilities::parse_month_day;

use crate::date::days_in_month;

/// Month of the year.
///
/// Variants are numbered 1–12 (January = 1, December = 12).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Month {
    /// January (1).
    January = 1,
    /// February (2).
    February = 2,
    /// March (3).
    March = 3,
    /// April (4).
    April = 4,
    /// May (5).
    May = 5,
    /// June (6).
    June = 6,
    /// July (7).
    July = 7,
    /// August (8).
    August = 8,
    /// September (9).
    September = 9,
    /// October (10).
    October = 10,
    /// November (11).
    November = 11,
    /// December (12).
    December = 12,
}

impl Month {
    /// All months, January first.
    pub const ALL: [Month; 12] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
        Month::July,
        Month::August,
        Month::September,
        Month::October,
        Month::November,
        Month::December,
    ];

    /// Construct from a number (1 = January … 12 = December).
    ///
    /// Returns `None` if the value is out of range.
    pub fn from_number(n: u8) -> Option<Self> {
        Self::ALL.get(usize::from(n).checked_sub(1)?).copied()
    }

    /// Return the 1-based month number.
    pub fn number(&self) -> u8 {
        *self as u8
    }

    /// Return the full name (`"January"`, `"February"`, …).
    pub fn long_name(&self) -> &'static str {
        match self {
            Month::January => "January",
            Month::February => "February",
            Month::March => "March",
            Month::April => "April",
            Month::May => "May",
            Month::June => "June",
            Month::July => "July",
            Month::August => "August",
            Month::September => "September",
            Month::October => "October",
            Month::November => "November",
            Month::December => "December",
        }
    }
}

impl std::fmt::Display for Month {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.long_name())
    }
}

/// A day of the year without the year: `(month, day)`.
///
/// Ordered by month, then day, so `01-11 < 12-17`. Any day that exists in
/// some year is valid, including 29 February.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthDay {
    month: Month,
    day: u8,
}

impl MonthDay {
    /// Build a month/day, rejecting days the month never has.
    pub fn new(month: Month, day: u8) -> Result<Self> {
        // 2000 is a leap year, so February admits the 29th.
        let max = days_in_month(2000, month.number());
        ensure!(
            (1..=max).contains(&day),
            "day {day} out of range [1, {max}] for {month}"
        );
        Ok(MonthDay { month, day })
    }

    pub(crate) fn from_parts_unchecked(month: Month, day: u8) -> Self {
        MonthDay { month, day }
    }

    /// The month.
    pub fn month(&self) -> Month {
        self.month
    }

    /// The day of the month.
    pub fn day(&self) -> u8 {
        self.day
    }

    /// Short `day/month` form without padding, e.g. `17/12`.
    pub fn short(&self) -> String {
        format!("{}/{}", self.day, self.month.number())
    }
}

impl FromStr for MonthDay {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let (m, d) = parse_month_day(s)?;
        let month = Month::from_number(m)
            .ok_or_else(|| Error::parse(s, format!("month {m} out of range [1, 12]")))?;
        MonthDay::new(month, d).map_err(|e| Error::parse(s, e.to_string()))
    }
}

impl std::fmt::Display for MonthDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}-{:02}", self.month.number(), self.day)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for MonthDay {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for MonthDay {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = <std::borrow::Cow<'de, str>>::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
