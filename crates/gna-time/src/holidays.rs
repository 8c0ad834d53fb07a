//! Greek public holidays.
//!
//! Eight holidays sit on fixed calendar days; five more move with Orthodox
//! Easter. [`greek_holidays`] builds the full set for one year, freshly on
//! every call, sorted by date.
//!
//! A movable holiday can land on a fixed one (Easter Sunday 2016 was
//! 1 May). Both records are kept; the fixed one sorts first, so
//! [`holiday_on`] reports it.

use gna_core::errors::Result;
use tracing::debug;

use crate::date::Date;
use crate::easter::orthodox_easter;

/// How a holiday's date is determined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum HolidayKind {
    /// Same month and day every year.
    Fixed,
    /// A fixed number of days from Orthodox Easter Sunday.
    Movable,
}

/// The thirteen Greek public holidays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum GreekHoliday {
    /// New Year's Day, 1 January.
    NewYear,
    /// Epiphany, 6 January.
    Epiphany,
    /// Independence Day, 25 March.
    IndependenceDay,
    /// Labour Day, 1 May.
    LabourDay,
    /// Dormition of the Theotokos, 15 August.
    Assumption,
    /// Ohi Day, 28 October.
    OhiDay,
    /// Christmas Day, 25 December.
    Christmas,
    /// Synaxis of the Theotokos, 26 December.
    BoxingDay,
    /// Clean Monday, Easter − 48.
    CleanMonday,
    /// Good Friday, Easter − 2.
    GoodFriday,
    /// Easter Sunday.
    EasterSunday,
    /// Easter Monday, Easter + 1.
    EasterMonday,
    /// Whit Monday (Holy Spirit Monday), Easter + 50.
    WhitMonday,
}

/// Where a holiday falls.
enum Rule {
    Fixed { month: u8, day: u8 },
    EasterOffset(i32),
}

impl GreekHoliday {
    /// Every holiday, fixed ones first.
    pub const ALL: [GreekHoliday; 13] = [
        GreekHoliday::NewYear,
        GreekHoliday::Epiphany,
        GreekHoliday::IndependenceDay,
        GreekHoliday::LabourDay,
        GreekHoliday::Assumption,
        GreekHoliday::OhiDay,
        GreekHoliday::Christmas,
        GreekHoliday::BoxingDay,
        GreekHoliday::CleanMonday,
        GreekHoliday::GoodFriday,
        GreekHoliday::EasterSunday,
        GreekHoliday::EasterMonday,
        GreekHoliday::WhitMonday,
    ];

    fn rule(&self) -> Rule {
        use GreekHoliday::*;
        match self {
            NewYear => Rule::Fixed { month: 1, day: 1 },
            Epiphany => Rule::Fixed { month: 1, day: 6 },
            IndependenceDay => Rule::Fixed { month: 3, day: 25 },
            LabourDay => Rule::Fixed { month: 5, day: 1 },
            Assumption => Rule::Fixed { month: 8, day: 15 },
            OhiDay => Rule::Fixed { month: 10, day: 28 },
            Christmas => Rule::Fixed { month: 12, day: 25 },
            BoxingDay => Rule::Fixed { month: 12, day: 26 },
            CleanMonday => Rule::EasterOffset(-48),
            GoodFriday => Rule::EasterOffset(-2),
            EasterSunday => Rule::EasterOffset(0),
            EasterMonday => Rule::EasterOffset(1),
            WhitMonday => Rule::EasterOffset(50),
        }
    }

    /// Fixed or movable.
    pub fn kind(&self) -> HolidayKind {
        match self.rule() {
            Rule::Fixed { .. } => HolidayKind::Fixed,
            Rule::EasterOffset(_) => HolidayKind::Movable,
        }
    }

    /// The date of this holiday in the year whose Easter Sunday is `easter`.
    pub fn date_in(&self, easter: Date) -> Result<Date> {
        match self.rule() {
            Rule::Fixed { month, day } => Date::from_ymd(easter.year(), month, day),
            Rule::EasterOffset(offset) => easter.add_days(offset),
        }
    }

    /// Official Greek name.
    pub fn name(&self) -> &'static str {
        use GreekHoliday::*;
        match self {
            NewYear => "Πρωτοχρονιά",
            Epiphany => "Θεοφάνεια",
            IndependenceDay => "25η Μαρτίου",
            LabourDay => "Πρωτομαγιά",
            Assumption => "Κοίμηση Θεοτόκου",
            OhiDay => "28η Οκτωβρίου",
            Christmas => "Χριστούγεννα",
            BoxingDay => "Σύναξη Θεοτόκου",
            CleanMonday => "Καθαρά Δευτέρα",
            GoodFriday => "Μεγάλη Παρασκευή",
            EasterSunday => "Κυριακή Πάσχα",
            EasterMonday => "Δευτέρα Πάσχα",
            WhitMonday => "Αγίου Πνεύματος",
        }
    }

    /// English name.
    pub fn english_name(&self) -> &'static str {
        use GreekHoliday::*;
        match self {
            NewYear => "New Year's Day",
            Epiphany => "Epiphany",
            IndependenceDay => "Independence Day",
            LabourDay => "Labour Day",
            Assumption => "Assumption",
            OhiDay => "Ohi Day",
            Christmas => "Christmas Day",
            BoxingDay => "Boxing Day",
            CleanMonday => "Clean Monday",
            GoodFriday => "Good Friday",
            EasterSunday => "Easter Sunday",
            EasterMonday => "Easter Monday",
            WhitMonday => "Whit Monday",
        }
    }
}

impl std::fmt::Display for GreekHoliday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A holiday on a concrete date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HolidayRecord {
    /// The day the holiday falls on.
    pub date: Date,
    /// Which holiday it is.
    pub holiday: GreekHoliday,
}

impl HolidayRecord {
    /// Official Greek name of the holiday.
    pub fn name(&self) -> &'static str {
        self.holiday.name()
    }
}

/// All Greek public holidays of `year`, sorted by date.
///
/// Always 13 records. Fails only where Orthodox Easter does, i.e. outside
/// [`ORTHODOX_EASTER_YEARS`](crate::easter::ORTHODOX_EASTER_YEARS).
pub fn greek_holidays(year: u16) -> Result<Vec<HolidayRecord>> {
    let easter = orthodox_easter(year)?;
    let mut records = GreekHoliday::ALL
        .iter()
        .map(|&holiday| {
            Ok(HolidayRecord {
                date: holiday.date_in(easter)?,
                holiday,
            })
        })
        .collect::<Result<Vec<_>>>()?;
    // Stable: on a shared date the fixed holiday stays ahead.
    records.sort_by_key(|r| r.date);
    debug!(year, %easter, count = records.len(), "built Greek holiday set");
    Ok(records)
}

/// The holiday falling on `date`, if any.
pub fn holiday_on(date: Date) -> Result<Option<GreekHoliday>> {
    Ok(greek_holidays(date.year())?
        .into_iter()
        .find(|r| r.date == date)
        .map(|r| r.holiday))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn holidays_2024() {
        let list = greek_holidays(2024).unwrap();
        assert_eq!(list.len(), 13);
        let find = |h: GreekHoliday| list.iter().find(|r| r.holiday == h).unwrap().date;
        assert_eq!(find(GreekHoliday::LabourDay), date(2024, 5, 1));
        assert_eq!(find(GreekHoliday::CleanMonday), date(2024, 3, 18));
        assert_eq!(find(GreekHoliday::GoodFriday), date(2024, 5, 3));
        assert_eq!(find(GreekHoliday::EasterSunday), date(2024, 5, 5));
        assert_eq!(find(GreekHoliday::EasterMonday), date(2024, 5, 6));
        assert_eq!(find(GreekHoliday::WhitMonday), date(2024, 6, 24));
    }

    #[test]
    fn sorted_by_date() {
        let list = greek_holidays(2024).unwrap();
        assert!(list.windows(2).all(|w| w[0].date <= w[1].date));
        assert_eq!(list.first().unwrap().holiday, GreekHoliday::NewYear);
        assert_eq!(list.last().unwrap().holiday, GreekHoliday::BoxingDay);
    }

    #[test]
    fn kinds() {
        let fixed = GreekHoliday::ALL
            .iter()
            .filter(|h| h.kind() == HolidayKind::Fixed)
            .count();
        assert_eq!(fixed, 8);
        assert_eq!(GreekHoliday::WhitMonday.kind(), HolidayKind::Movable);
    }

    #[test]
    fn coinciding_holidays_are_both_kept() {
        // Orthodox Easter 2016 fell on 1 May.
        let list = greek_holidays(2016).unwrap();
        assert_eq!(list.len(), 13);
        let on_may_day: Vec<_> = list
            .iter()
            .filter(|r| r.date == date(2016, 5, 1))
            .map(|r| r.holiday)
            .collect();
        assert_eq!(
            on_may_day,
            [GreekHoliday::LabourDay, GreekHoliday::EasterSunday]
        );
        assert_eq!(
            holiday_on(date(2016, 5, 1)).unwrap(),
            Some(GreekHoliday::LabourDay)
        );
    }

    #[test]
    fn lookup() {
        assert_eq!(
            holiday_on(date(2024, 10, 28)).unwrap(),
            Some(GreekHoliday::OhiDay)
        );
        assert_eq!(holiday_on(date(2024, 10, 29)).unwrap(), None);
        assert!(holiday_on(date(2150, 1, 1)).is_err());
    }

    #[test]
    fn names() {
        assert_eq!(GreekHoliday::CleanMonday.name(), "Καθαρά Δευτέρα");
        assert_eq!(GreekHoliday::LabourDay.english_name(), "Labour Day");
        assert_eq!(GreekHoliday::EasterSunday.to_string(), "Κυριακή Πάσχα");
    }
}
