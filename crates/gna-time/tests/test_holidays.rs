//! Holiday-set, lookup and classification tests against published Greek
//! holiday dates.

use gna_time::{
    classify, greek_holidays, holiday_on, orthodox_easter, Calendar, Date, GreekHoliday,
    Greece, HolidayKind, NonWorkingReason, Weekday,
};

fn date(y: u16, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

// ─── Orthodox Easter ─────────────────────────────────────────────────────────

#[test]
fn easter_regression_anchors() {
    assert_eq!(orthodox_easter(2023).unwrap(), date(2023, 4, 16));
    assert_eq!(orthodox_easter(2024).unwrap(), date(2024, 5, 5));
    assert_eq!(orthodox_easter(2025).unwrap(), date(2025, 4, 20));
}

#[test]
fn easter_is_deterministic() {
    for y in [1900, 1977, 2024, 2099] {
        assert_eq!(orthodox_easter(y), orthodox_easter(y));
    }
}

#[test]
fn easter_rejects_years_outside_the_julian_offset_range() {
    assert!(orthodox_easter(1899).is_err());
    assert!(orthodox_easter(2100).is_err());
    assert!(greek_holidays(2100).is_err());
}

// ─── Holiday set ─────────────────────────────────────────────────────────────

#[test]
fn holidays_2024_full_table() {
    let expected = [
        (date(2024, 1, 1), GreekHoliday::NewYear),
        (date(2024, 1, 6), GreekHoliday::Epiphany),
        (date(2024, 3, 18), GreekHoliday::CleanMonday),
        (date(2024, 3, 25), GreekHoliday::IndependenceDay),
        (date(2024, 5, 1), GreekHoliday::LabourDay),
        (date(2024, 5, 3), GreekHoliday::GoodFriday),
        (date(2024, 5, 5), GreekHoliday::EasterSunday),
        (date(2024, 5, 6), GreekHoliday::EasterMonday),
        (date(2024, 6, 24), GreekHoliday::WhitMonday),
        (date(2024, 8, 15), GreekHoliday::Assumption),
        (date(2024, 10, 28), GreekHoliday::OhiDay),
        (date(2024, 12, 25), GreekHoliday::Christmas),
        (date(2024, 12, 26), GreekHoliday::BoxingDay),
    ];
    let calculated: Vec<_> = greek_holidays(2024)
        .unwrap()
        .into_iter()
        .map(|r| (r.date, r.holiday))
        .collect();
    assert_eq!(calculated, expected);
}

#[test]
fn labour_day_record_carries_its_name() {
    let list = greek_holidays(2024).unwrap();
    let may_day = list.iter().find(|r| r.date == date(2024, 5, 1)).unwrap();
    assert_eq!(may_day.holiday, GreekHoliday::LabourDay);
    assert_eq!(may_day.name(), "Πρωτομαγιά");
    assert_eq!(may_day.holiday.english_name(), "Labour Day");
    assert_eq!(may_day.holiday.kind(), HolidayKind::Fixed);
}

#[test]
fn movable_holidays_keep_their_weekdays() {
    for y in [1950, 2000, 2016, 2024, 2025, 2050, 2099] {
        for r in greek_holidays(y).unwrap() {
            let expected = match r.holiday {
                GreekHoliday::CleanMonday
                | GreekHoliday::EasterMonday
                | GreekHoliday::WhitMonday => Weekday::Monday,
                GreekHoliday::GoodFriday => Weekday::Friday,
                GreekHoliday::EasterSunday => Weekday::Sunday,
                _ => continue,
            };
            assert_eq!(r.date.weekday(), expected, "{y}: {}", r.holiday.english_name());
        }
    }
}

#[test]
fn holidays_stay_inside_their_year() {
    for y in 1900..=2099 {
        let list = greek_holidays(y).unwrap();
        assert_eq!(list.len(), 13);
        assert!(list.iter().all(|r| r.date.year() == y), "{y}");
    }
}

// ─── Lookup and classification ───────────────────────────────────────────────

#[test]
fn lookup_hits_and_misses() {
    assert_eq!(
        holiday_on(date(2025, 4, 18)).unwrap(),
        Some(GreekHoliday::GoodFriday)
    );
    assert_eq!(holiday_on(date(2025, 4, 17)).unwrap(), None);
}

#[test]
fn fixed_holiday_on_a_saturday_reports_the_holiday() {
    // 2022-01-01 is a Saturday
    assert_eq!(date(2022, 1, 1).weekday(), Weekday::Saturday);
    let c = classify(date(2022, 1, 1)).unwrap();
    assert!(c.is_non_working_day);
    assert_eq!(c.reason, Some(NonWorkingReason::Holiday(GreekHoliday::NewYear)));
}

#[test]
fn easter_sunday_reports_the_holiday_not_the_weekend() {
    let c = classify(date(2025, 4, 20)).unwrap();
    assert_eq!(
        c.reason,
        Some(NonWorkingReason::Holiday(GreekHoliday::EasterSunday))
    );
}

#[test]
fn classification_matches_the_calendar() {
    let cal = Greece;
    let mut d = date(2024, 1, 1);
    while d <= date(2024, 12, 31) {
        let c = classify(d).unwrap();
        assert_eq!(c.is_non_working_day, cal.is_holiday(d).unwrap(), "{d}");
        assert_eq!(c.is_non_working_day, c.reason.is_some(), "{d}");
        d = d.add_days(1).unwrap();
    }
}

#[test]
fn working_days_in_the_2024_submission_window() {
    // 2024-12-17 ..= 2025-01-11: 26 days, 7 of them weekend days, and
    // Christmas, Synaxis, New Year and Epiphany all on weekdays.
    let cal = Greece;
    let start = date(2024, 12, 17);
    let end = date(2025, 1, 11);
    let before_start = start.add_days(-1).unwrap();
    assert_eq!(cal.business_days_between(before_start, end).unwrap(), 15);
}
