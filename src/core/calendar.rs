//! Local calendar dates to provider calendar dates.
//!
//! Providers expect Gregorian `YYYY-MM-DD` dates while callers send local
//! `YYYY/MM/DD` dates. The conversion adds a fixed era offset to the year and
//! lets Gregorian rollover absorb out-of-range months and days. It is an
//! approximation: results near month and year boundaries can differ by a day
//! from a true calendrical conversion.

use crate::core::error::SearchError;
use chrono::{Datelike, NaiveDate, TimeDelta};

/// Years added to a local calendar year to land in the provider calendar.
pub const ERA_OFFSET_YEARS: i64 = 621;

/// Converts a `YYYY/MM/DD` local date into the `YYYY-MM-DD` form providers expect.
///
/// Out-of-range months and days are not rejected, they roll over into the
/// neighbouring months and years (`1403/13/40` becomes `2025-02-09`).
pub fn to_provider_calendar(local_date: &str) -> Result<String, SearchError> {
    let invalid = || SearchError::InvalidDateFormat(local_date.to_string());

    let parts: Vec<&str> = local_date.split('/').map(str::trim).collect();
    let [year, month, day] = parts.as_slice() else {
        return Err(invalid());
    };

    let year = parse_component(year).ok_or_else(invalid)?;
    let month = parse_component(month).ok_or_else(invalid)?;
    let day = parse_component(day).ok_or_else(invalid)?;

    let year = year.checked_add(ERA_OFFSET_YEARS).ok_or_else(invalid)?;
    let date = rollover_date(year, month - 1, day).ok_or_else(invalid)?;
    if !(0..=9999).contains(&date.year()) {
        return Err(invalid());
    }

    Ok(date.format("%Y-%m-%d").to_string())
}

fn parse_component(component: &str) -> Option<i64> {
    if component.is_empty() || !component.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    component.parse().ok()
}

/// Builds a date from a zero-based month index and a day of month, rolling
/// any overflow into the following (or preceding) months and years.
fn rollover_date(year: i64, month_index: i64, day: i64) -> Option<NaiveDate> {
    let year = year.checked_add(month_index.div_euclid(12))?;
    let month = u32::try_from(month_index.rem_euclid(12) + 1).ok()?;
    let first_of_month = NaiveDate::from_ymd_opt(i32::try_from(year).ok()?, month, 1)?;
    first_of_month.checked_add_signed(TimeDelta::try_days(day - 1)?)
}
