// Rust guideline compliant 2026-02-06

//! Implementation of the `pasc day` command.

use crate::OutputFormatter;
use anyhow::{Context, Result};
use chrono::NaiveDate;
use pascalia_core::{CalendarEngine, Resolved, Tradition};

/// Parses a `YYYY-MM-DD` date, or returns today's local date for `None`.
///
/// # Errors
///
/// Returns an error if `date` is not a valid calendar date.
pub fn parse_date(date: Option<&str>) -> Result<NaiveDate> {
    match date {
        Some(text) => NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d")
            .with_context(|| format!("Invalid date '{}', expected YYYY-MM-DD", text)),
        None => Ok(chrono::Local::now().date_naive()),
    }
}

/// Renders the record of one date.
///
/// # Arguments
///
/// * `engine` - The calendar engine
/// * `date` - The date to look up
/// * `tradition` - Tradition to compute for
/// * `formatter` - The output formatter to use
///
/// # Errors
///
/// Returns an error if the year is unsupported or the tradition is rejected.
pub fn render(
    engine: &CalendarEngine,
    date: NaiveDate,
    tradition: Tradition,
    formatter: &dyn OutputFormatter,
) -> Result<Resolved<String>> {
    let day = engine.get_day(date, tradition)?;
    Ok(day.map(|day| formatter.format_day(&day)))
}

/// Shows the record of one date, today by default.
///
/// # Errors
///
/// Returns an error if the date cannot be parsed or looked up.
pub fn execute(
    engine: &CalendarEngine,
    date: Option<String>,
    tradition: Tradition,
    formatter: &dyn OutputFormatter,
) -> Result<()> {
    let date = parse_date(date.as_deref())?;
    super::emit(render(engine, date, tradition, formatter)?, formatter);
    Ok(())
}
