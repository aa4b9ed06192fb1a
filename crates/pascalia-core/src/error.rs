// Rust guideline compliant 2026-02-06

//! Error types for the Pascalia core library.

use crate::models::Tradition;
use thiserror::Error;

/// Result type alias for Pascalia operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Pascalia operations.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Year outside the range the Paschalion supports.
    #[error("Unsupported year: {0} (supported range is 1583-4099)")]
    UnsupportedYear(i32),

    /// Tradition has no rule set and the strict policy is active.
    #[error("Unsupported tradition: {0} has no rule set of its own")]
    UnsupportedTradition(Tradition),

    /// Requested date is missing from the generated year.
    #[error("Calendar day not found: {0}")]
    NotFound(String),

    /// Calendar day record violates its invariants.
    #[error("Invalid calendar day: {0}")]
    InvalidDay(String),

    /// Zero-based month index outside 0-11.
    #[error("Invalid month index: {0} (expected 0-11, 0 = January)")]
    InvalidMonth(u32),

    /// Date string could not be parsed.
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// Tradition code could not be parsed.
    #[error("Invalid tradition: {0}")]
    InvalidTradition(String),

    /// Configuration file or override is invalid.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}
