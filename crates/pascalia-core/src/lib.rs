// Rust guideline compliant 2026-02-06

//! Pascalia Core Library
//!
//! This crate computes the Eastern Orthodox calendar status of any day:
//! - Pascha calculation (Julian computus, converted to the Gregorian calendar)
//! - Fixed-feast table for the Romanian Orthodox Church
//! - Rule pipeline (movable feasts, fasting seasons, weekly fasts, overrides)
//! - Year generation and day/month lookups
//! - Configuration and error types

pub mod config;
pub mod engine;
pub mod error;
pub mod feasts;
pub mod lookup;
pub mod models;
pub mod pascha;
pub mod rules;

pub use config::{Config, OutputFormat};
pub use engine::{generate_year, CalendarEngine, Caveat, Resolved, TraditionPolicy};
pub use error::{Error, Result};
pub use feasts::{FeastTable, FixedFeastDefinition, MonthDay};
pub use lookup::{get_day, get_month};
pub use models::{CalendarDay, FastType, ImportanceLevel, Tradition};
pub use pascha::{compute_pascha, julian_gregorian_gap, pascha_offset, SUPPORTED_YEARS};
pub use rules::{DayContext, DayState, RuleOptions, Stage};
