// Rust guideline compliant 2026-02-06

//! Orthodox Pascha calculation.
//!
//! Pascha is computed on the Julian calendar with the Meeus/Jones/Butcher
//! Julian computus and then shifted onto the Gregorian calendar by the
//! Julian/Gregorian gap of that year.

use crate::{Error, Result};
use chrono::{Datelike, Duration, NaiveDate};
use std::ops::RangeInclusive;

/// Years for which [`compute_pascha`] is defined.
///
/// Starts at the first full year of the Gregorian calendar.
pub const SUPPORTED_YEARS: RangeInclusive<i32> = 1583..=4099;

/// Returns the number of days the Julian calendar lags the Gregorian one
/// during March and April of `year`.
///
/// The gap grows by one day in each century year not divisible by 400:
/// 10 days in 1583-1699, 13 days in 1900-2099, 14 days in 2100-2199.
pub fn julian_gregorian_gap(year: i32) -> i64 {
    let century = i64::from(year.div_euclid(100));
    century - century.div_euclid(4) - 2
}

/// Computes the Gregorian date of Orthodox Pascha for `year`.
///
/// # Arguments
///
/// * `year` - Civil year, within [`SUPPORTED_YEARS`]
///
/// # Returns
///
/// The Gregorian calendar date of Pascha. Always a Sunday.
///
/// # Errors
///
/// Returns `Error::UnsupportedYear` if `year` is outside [`SUPPORTED_YEARS`].
pub fn compute_pascha(year: i32) -> Result<NaiveDate> {
    if !SUPPORTED_YEARS.contains(&year) {
        return Err(Error::UnsupportedYear(year));
    }

    let a = year.rem_euclid(4);
    let b = year.rem_euclid(7);
    let c = year.rem_euclid(19);
    let d = (19 * c + 15).rem_euclid(30);
    let e = (2 * a + 4 * b - d + 34).rem_euclid(7);
    let month = (d + e + 114) / 31;
    let day = (d + e + 114) % 31 + 1;

    // Julian date, labelled with the same year/month/day on the Gregorian calendar
    let julian = NaiveDate::from_ymd_opt(year, month as u32, day as u32)
        .ok_or(Error::UnsupportedYear(year))?;

    Ok(julian + Duration::days(julian_gregorian_gap(year)))
}

/// Returns the signed number of days from Pascha of `date`'s year to `date`.
///
/// Negative before Pascha, zero on Pascha itself.
///
/// # Errors
///
/// Returns `Error::UnsupportedYear` if the year is outside [`SUPPORTED_YEARS`].
pub fn pascha_offset(date: NaiveDate) -> Result<i64> {
    let pascha = compute_pascha(date.year())?;
    Ok((date - pascha).num_days())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gap_boundaries() {
        assert_eq!(julian_gregorian_gap(1583), 10);
        assert_eq!(julian_gregorian_gap(1699), 10);
        assert_eq!(julian_gregorian_gap(1700), 11);
        assert_eq!(julian_gregorian_gap(1899), 12);
        assert_eq!(julian_gregorian_gap(1900), 13);
        assert_eq!(julian_gregorian_gap(2000), 13);
        assert_eq!(julian_gregorian_gap(2099), 13);
        assert_eq!(julian_gregorian_gap(2100), 14);
    }

    #[test]
    fn test_pascha_offset_on_pascha_is_zero() {
        let pascha = compute_pascha(2025).unwrap();
        assert_eq!(pascha_offset(pascha).unwrap(), 0);
        assert_eq!(pascha_offset(pascha - Duration::days(48)).unwrap(), -48);
    }
}
