//! Data parsing helpers.
//!
//! These check the *shape* of the input only. Whether `2024-02-30` names a
//! real day is decided by the date type that consumes the fields.

use crate::errors::{Error, Result};

/// Parse a date string in ISO 8601 calendar format (`YYYY-MM-DD`).
///
/// Surrounding whitespace is ignored; anything else that is not exactly four
/// digits, a dash, two digits, a dash and two digits is rejected.
///
/// Returns `(year, month, day)` on success.
pub fn parse_iso_date(s: &str) -> Result<(u16, u8, u8)> {
    let t = s.trim();
    let mut parts = t.split('-');
    let (Some(y), Some(m), Some(d), None) = (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(Error::parse(s, "expected YYYY-MM-DD"));
    };
    let year = digits::<u16>(s, y, 4, "year")?;
    let month = digits::<u8>(s, m, 2, "month")?;
    let day = digits::<u8>(s, d, 2, "day")?;
    Ok((year, month, day))
}

/// Parse a month/day pair written as `MM-DD` (e.g. `"12-17"`).
///
/// Returns `(month, day)` on success.
pub fn parse_month_day(s: &str) -> Result<(u8, u8)> {
    let t = s.trim();
    let Some((m, d)) = t.split_once('-') else {
        return Err(Error::parse(s, "expected MM-DD"));
    };
    let month = digits::<u8>(s, m, 2, "month")?;
    let day = digits::<u8>(s, d, 2, "day")?;
    Ok((month, day))
}

fn digits<T: std::str::FromStr>(input: &str, field: &str, width: usize, what: &str) -> Result<T> {
    if field.len() != width || !field.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::parse(
            input,
            format!("{what} must be {width} digits, got {field:?}"),
        ));
    }
    field
        .parse()
        .map_err(|_| Error::parse(input, format!("{what} {field:?} is not a number")))
}
