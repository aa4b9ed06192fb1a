// Rust guideline compliant 2026-02-06

//! Implementation of the `pasc pascha` command.
//!
//! Ranges of years are computed in parallel.

use crate::OutputFormatter;
use anyhow::{bail, Result};
use chrono::NaiveDate;
use pascalia_core::compute_pascha;
use rayon::prelude::*;

/// Computes Pascha for every year in `from..=to`, in year order.
///
/// # Errors
///
/// Returns an error if `to` is before `from` or any year is unsupported.
pub fn pascha_dates(from: i32, to: i32) -> Result<Vec<(i32, NaiveDate)>> {
    if to < from {
        bail!("Invalid year range {}..{}: end is before start", from, to);
    }

    let dates = (from..=to)
        .into_par_iter()
        .map(|year| compute_pascha(year).map(|date| (year, date)))
        .collect::<pascalia_core::Result<Vec<_>>>()?;
    Ok(dates)
}

/// Renders the Pascha table of a year or a range of years.
///
/// # Errors
///
/// See [`pascha_dates`].
pub fn render(from: i32, to: Option<i32>, formatter: &dyn OutputFormatter) -> Result<String> {
    let dates = pascha_dates(from, to.unwrap_or(from))?;
    Ok(formatter.format_pascha_table(&dates))
}

/// Shows the Pascha table.
///
/// # Errors
///
/// See [`pascha_dates`].
pub fn execute(from: i32, to: Option<i32>, formatter: &dyn OutputFormatter) -> Result<()> {
    println!("{}", render(from, to, formatter)?);
    Ok(())
}
