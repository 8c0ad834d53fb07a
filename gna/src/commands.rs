use std::io::Write;

use anyhow::{Context, Result};
use gna::time::{classify, Calendar, Greece, NonWorkingReason};
use gna::{greek_holidays, orthodox_easter, Date, SubmissionWindow};
use tracing::info;

use crate::cli::Command;
use crate::config::GnaConfig;

/// Run one subcommand, writing its report to `out`.
pub fn run(command: Command, config: &GnaConfig, out: &mut impl Write) -> Result<()> {
    match command {
        Command::Easter { year } => easter(year, out),
        Command::Holidays { year, english } => holidays(year, english, out),
        Command::Check { date } => {
            let date = match date {
                Some(d) => d,
                None => today()?,
            };
            check(date, &config.submission_window, out)
        }
        Command::WorkingDays { from, to } => working_days(from, to, out),
        Command::Window => window(&config.submission_window, out),
    }
}

fn today() -> Result<Date> {
    let now = chrono::Local::now().date_naive();
    Date::try_from(now).with_context(|| format!("today ({now}) is outside the supported range"))
}

fn easter(year: u16, out: &mut impl Write) -> Result<()> {
    let e = orthodox_easter(year)?;
    writeln!(out, "{e}")?;
    Ok(())
}

fn holidays(year: u16, english: bool, out: &mut impl Write) -> Result<()> {
    for r in greek_holidays(year)? {
        let name = if english {
            r.holiday.english_name()
        } else {
            r.name()
        };
        writeln!(out, "{}  {:<9}  {name}", r.date, r.date.weekday().to_string())?;
    }
    Ok(())
}

fn check(date: Date, window: &SubmissionWindow, out: &mut impl Write) -> Result<()> {
    let class = classify(date)?;
    writeln!(out, "date:        {date} ({})", date.weekday().greek_name())?;
    match class.reason {
        Some(NonWorkingReason::Holiday(h)) => {
            writeln!(out, "non-working: holiday, {} ({})", h.name(), h.english_name())?
        }
        Some(NonWorkingReason::Weekend) => writeln!(out, "non-working: weekend")?,
        None => writeln!(out, "non-working: no")?,
    }
    let allowed = window.contains(date);
    writeln!(out, "submission:  {}", if allowed { "allowed" } else { "refused" })?;
    if !allowed {
        writeln!(out, "             {}", window.restriction_message(date))?;
    }
    info!(%date, non_working = class.is_non_working_day, allowed, "checked date");
    Ok(())
}

fn working_days(from: Date, to: Date, out: &mut impl Write) -> Result<()> {
    anyhow::ensure!(from <= to, "empty range: {from} is after {to}");
    let cal = Greece;
    let count = cal.business_days_between(from, to)? + i32::from(cal.is_business_day(from)?);
    let off = cal.holiday_list(from, to, false)?;
    writeln!(out, "{count} working days in {from}..={to}")?;
    for d in off {
        writeln!(out, "  holiday {d}")?;
    }
    Ok(())
}

fn window(window: &SubmissionWindow, out: &mut impl Write) -> Result<()> {
    writeln!(
        out,
        "{} - {}{}",
        window.start.short(),
        window.end.short(),
        if window.wraps_year_end() {
            " (across the year end)"
        } else {
            ""
        }
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(command: Command, config: &GnaConfig) -> String {
        let mut buf = Vec::new();
        run(command, config, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    fn date(s: &str) -> Date {
        s.parse().unwrap()
    }

    #[test]
    fn easter_prints_iso_date() {
        let out = render(Command::Easter { year: 2024 }, &GnaConfig::default());
        assert_eq!(out, "2024-05-05\n");
    }

    #[test]
    fn easter_out_of_range_fails() {
        let mut buf = Vec::new();
        assert!(run(Command::Easter { year: 2100 }, &GnaConfig::default(), &mut buf).is_err());
    }

    #[test]
    fn holidays_lists_thirteen_lines() {
        let out = render(
            Command::Holidays {
                year: 2024,
                english: true,
            },
            &GnaConfig::default(),
        );
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines.len(), 13);
        assert_eq!(lines[0], "2024-01-01  Monday     New Year's Day");
        assert!(lines.iter().any(|l| l.starts_with("2024-06-24") && l.ends_with("Whit Monday")));
    }

    #[test]
    fn check_reports_holiday_and_window() {
        let out = render(
            Command::Check {
                date: Some(date("2025-01-06")),
            },
            &GnaConfig::default(),
        );
        assert!(out.contains("holiday, Θεοφάνεια (Epiphany)"));
        assert!(out.contains("submission:  allowed"));
    }

    #[test]
    fn check_reports_refusal_message() {
        let out = render(
            Command::Check {
                date: Some(date("2025-06-14")),
            },
            &GnaConfig::default(),
        );
        assert!(out.contains("non-working: weekend"));
        assert!(out.contains("submission:  refused"));
        assert!(out.contains("17/12 - 11/1"));
    }

    #[test]
    fn working_days_in_window() {
        let out = render(
            Command::WorkingDays {
                from: date("2024-12-17"),
                to: date("2025-01-11"),
            },
            &GnaConfig::default(),
        );
        assert!(out.starts_with("15 working days in 2024-12-17..=2025-01-11\n"));
        assert_eq!(out.matches("holiday").count(), 4);
    }

    #[test]
    fn working_days_from_first_supported_date() {
        let out = render(
            Command::WorkingDays {
                from: Date::MIN,
                to: date("1900-01-31"),
            },
            &GnaConfig::default(),
        );
        // 1900-01-01 is a Monday holiday; Epiphany falls on a Saturday.
        assert_eq!(
            out,
            "22 working days in 1900-01-01..=1900-01-31\n  holiday 1900-01-01\n"
        );
    }

    #[test]
    fn working_days_single_day() {
        let out = render(
            Command::WorkingDays {
                from: date("2024-05-07"),
                to: date("2024-05-07"),
            },
            &GnaConfig::default(),
        );
        assert_eq!(out, "1 working days in 2024-05-07..=2024-05-07\n");
    }

    #[test]
    fn window_uses_config() {
        let cfg = GnaConfig {
            submission_window: SubmissionWindow::new(
                "06-01".parse().unwrap(),
                "06-30".parse().unwrap(),
            ),
        };
        assert_eq!(render(Command::Window, &cfg), "1/6 - 30/6\n");
        assert_eq!(
            render(Command::Window, &GnaConfig::default()),
            "17/12 - 11/1 (across the year end)\n"
        );
    }
}
