// Rust guideline compliant 2026-02-06

//! Implementation of the `pasc year` command.

use crate::OutputFormatter;
use anyhow::Result;
use pascalia_core::{CalendarEngine, Resolved, Tradition};

/// Renders a whole year, or only its fast days.
///
/// # Arguments
///
/// * `engine` - The calendar engine
/// * `year` - Civil year
/// * `fasts_only` - Keep only days with a fast
/// * `tradition` - Tradition to compute for
/// * `formatter` - The output formatter to use
///
/// # Errors
///
/// Returns an error if the year is unsupported or the tradition is rejected.
pub fn render(
    engine: &CalendarEngine,
    year: i32,
    fasts_only: bool,
    tradition: Tradition,
    formatter: &dyn OutputFormatter,
) -> Result<Resolved<String>> {
    let days = if fasts_only {
        engine.fast_days(year, tradition)?
    } else {
        engine.generate_year(year, tradition)?
    };
    Ok(days.map(|days| formatter.format_days(&days)))
}

/// Shows a whole year.
///
/// # Errors
///
/// See [`render`].
pub fn execute(
    engine: &CalendarEngine,
    year: i32,
    fasts_only: bool,
    tradition: Tradition,
    formatter: &dyn OutputFormatter,
) -> Result<()> {
    super::emit(render(engine, year, fasts_only, tradition, formatter)?, formatter);
    Ok(())
}
