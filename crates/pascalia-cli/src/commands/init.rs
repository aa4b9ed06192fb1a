// Rust guideline compliant 2026-02-06

//! Implementation of the `pasc init` command.
//!
//! Writes a default configuration file in the working directory.

use anyhow::{Context, Result};
use pascalia_core::Config;
use std::path::Path;

/// Writes a default configuration to `path` unless a file already exists.
///
/// # Returns
///
/// `true` if a file was written, `false` if one was already present.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_default_config(path: &Path) -> Result<bool> {
    if path.exists() {
        return Ok(false);
    }

    Config::default()
        .save(path)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(true)
}

/// Initializes a configuration file.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn execute(path: &Path) -> Result<()> {
    if write_default_config(path)? {
        println!("✓ Created {}", path.display());
    } else {
        println!("{} already exists, leaving it unchanged", path.display());
    }
    Ok(())
}
