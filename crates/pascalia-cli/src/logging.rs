// Rust guideline compliant 2026-02-06

//! Diagnostic logging setup for the CLI.
//!
//! Logs go to stderr so they never mix with command output on stdout.

use anyhow::{bail, Result};
use tracing::Level;
use tracing_subscriber::fmt;

/// Parses a log level name (case-insensitive).
///
/// # Errors
///
/// Returns an error for anything other than error, warn, info, debug or trace.
pub fn parse_log_level(level: &str) -> Result<Level> {
    match level.to_lowercase().as_str() {
        "error" => Ok(Level::ERROR),
        "warn" => Ok(Level::WARN),
        "info" => Ok(Level::INFO),
        "debug" => Ok(Level::DEBUG),
        "trace" => Ok(Level::TRACE),
        other => bail!("Unknown log level '{}'", other),
    }
}

/// Installs the global tracing subscriber.
///
/// # Arguments
///
/// * `level` - Maximum level to emit
/// * `json` - Emit JSON lines instead of human-readable text
///
/// # Errors
///
/// Returns an error if `level` is not a known level name.
pub fn init_tracing(level: &str, json: bool) -> Result<()> {
    let level = parse_log_level(level)?;

    let builder = fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr);

    // A subscriber may already be installed when running inside tests
    if json {
        let _ = tracing::subscriber::set_global_default(builder.json().finish());
    } else {
        let _ = tracing::subscriber::set_global_default(builder.finish());
    }
    Ok(())
}
