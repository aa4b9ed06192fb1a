// Rust guideline compliant 2026-02-06

//! Point and range queries over a generated year.
//!
//! Every lookup generates the whole year and filters it. Callers that issue
//! many lookups for the same year should keep the year themselves.

use crate::engine::{CalendarEngine, Resolved};
use crate::models::{CalendarDay, Tradition};
use crate::{Error, Result};
use chrono::{Datelike, NaiveDate};

impl CalendarEngine {
    /// Returns the record of a single date.
    ///
    /// # Arguments
    ///
    /// * `date` - The date to look up
    /// * `tradition` - Tradition to compute for
    ///
    /// # Returns
    ///
    /// The matching record, with the caveat of the generated year.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Year generation fails (unsupported year, strict tradition policy)
    /// - The date is missing from the generated year
    pub fn get_day(&self, date: NaiveDate, tradition: Tradition) -> Result<Resolved<CalendarDay>> {
        let year = self.generate_year(date.year(), tradition)?;
        let caveat = year.caveat;
        let day = year
            .value
            .into_iter()
            .find(|day| day.date == date)
            .ok_or_else(|| Error::NotFound(CalendarDay::make_id(date, tradition)))?;

        Ok(Resolved { value: day, caveat })
    }

    /// Returns the records of one month, in date order.
    ///
    /// # Arguments
    ///
    /// * `year` - Civil year
    /// * `month_index` - Zero-based month index, 0 = January, 11 = December
    /// * `tradition` - Tradition to compute for
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `month_index` is not in 0-11
    /// - Year generation fails
    pub fn get_month(
        &self,
        year: i32,
        month_index: u32,
        tradition: Tradition,
    ) -> Result<Resolved<Vec<CalendarDay>>> {
        if month_index >= 12 {
            return Err(Error::InvalidMonth(month_index));
        }

        Ok(self.generate_year(year, tradition)?.map(|days| {
            days.into_iter()
                .filter(|day| day.date.month0() == month_index)
                .collect()
        }))
    }

    /// Returns the fast days of a year, in date order.
    ///
    /// # Errors
    ///
    /// Returns an error if year generation fails.
    pub fn fast_days(&self, year: i32, tradition: Tradition) -> Result<Resolved<Vec<CalendarDay>>> {
        Ok(self
            .generate_year(year, tradition)?
            .map(|days| days.into_iter().filter(|day| day.is_fast_day).collect()))
    }
}

/// Looks up a date with the default Romanian engine.
///
/// # Errors
///
/// See [`CalendarEngine::get_day`].
pub fn get_day(date: NaiveDate, tradition: Tradition) -> Result<Resolved<CalendarDay>> {
    CalendarEngine::default().get_day(date, tradition)
}

/// Looks up a month (zero-based, 0 = January) with the default Romanian engine.
///
/// # Errors
///
/// See [`CalendarEngine::get_month`].
pub fn get_month(
    year: i32,
    month_index: u32,
    tradition: Tradition,
) -> Result<Resolved<Vec<CalendarDay>>> {
    CalendarEngine::default().get_month(year, month_index, tradition)
}
