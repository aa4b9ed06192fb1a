// Rust guideline compliant 2026-02-06

//! Command implementations for the Pascalia CLI.
//!
//! Each command has a `render` function that builds its output as a string
//! and an `execute` function that prints it.

pub mod day;
pub mod init;
pub mod month;
pub mod pascha;
pub mod year;

use crate::OutputFormatter;
use pascalia_core::Resolved;

/// Prints rendered output to stdout and its caveat, if any, to stderr.
pub(crate) fn emit(output: Resolved<String>, formatter: &dyn OutputFormatter) {
    println!("{}", output.value);
    if let Some(caveat) = &output.caveat {
        eprintln!("{}", formatter.format_caveat(caveat));
    }
}
