// Rust guideline compliant 2026-02-06

//! Implementation of the `pasc month` command.

use crate::OutputFormatter;
use anyhow::{bail, Result};
use pascalia_core::{CalendarEngine, Resolved, Tradition};

/// Renders the records of one month.
///
/// The command line takes calendar month numbers (1 = January), while the
/// engine takes a zero-based month index.
///
/// # Errors
///
/// Returns an error if the month is not in 1-12, the year is unsupported
/// or the tradition is rejected.
pub fn render(
    engine: &CalendarEngine,
    year: i32,
    month: u32,
    tradition: Tradition,
    formatter: &dyn OutputFormatter,
) -> Result<Resolved<String>> {
    let Some(month_index) = month.checked_sub(1).filter(|index| *index < 12) else {
        bail!("Invalid month: {} (expected 1-12)", month);
    };
    let days = engine.get_month(year, month_index, tradition)?;
    Ok(days.map(|days| formatter.format_days(&days)))
}

/// Shows the records of one month.
///
/// # Errors
///
/// See [`render`].
pub fn execute(
    engine: &CalendarEngine,
    year: i32,
    month: u32,
    tradition: Tradition,
    formatter: &dyn OutputFormatter,
) -> Result<()> {
    super::emit(render(engine, year, month, tradition, formatter)?, formatter);
    Ok(())
}
