// Rust guideline compliant 2026-02-06

//! Core data models for Pascalia.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Liturgical tradition a calendar is requested for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Tradition {
    /// Romanian Orthodox Church.
    #[default]
    #[serde(rename = "RO")]
    Romanian,
    /// Russian Orthodox Church.
    #[serde(rename = "RU")]
    Russian,
    /// Church of Greece.
    #[serde(rename = "GR")]
    Greek,
    /// Serbian Orthodox Church.
    #[serde(rename = "SRB")]
    Serbian,
    /// Generic North American usage.
    #[serde(rename = "USA")]
    American,
}

impl Tradition {
    /// Every known tradition, in declaration order.
    pub const ALL: [Tradition; 5] = [
        Tradition::Romanian,
        Tradition::Russian,
        Tradition::Greek,
        Tradition::Serbian,
        Tradition::American,
    ];

    /// Returns the short code used in record IDs (`RO`, `RU`, ...).
    pub fn code(&self) -> &'static str {
        match self {
            Tradition::Romanian => "RO",
            Tradition::Russian => "RU",
            Tradition::Greek => "GR",
            Tradition::Serbian => "SRB",
            Tradition::American => "USA",
        }
    }

    /// Whether the engine carries a rule set specific to this tradition.
    pub fn has_rule_set(&self) -> bool {
        matches!(self, Tradition::Romanian)
    }
}

impl fmt::Display for Tradition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Tradition {
    type Err = crate::Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        Tradition::ALL
            .into_iter()
            .find(|t| t.code().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                crate::Error::InvalidTradition(format!(
                    "'{}' (expected one of RO, RU, GR, SRB, USA)",
                    s
                ))
            })
    }
}

/// Severity of the dietary discipline for a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FastType {
    /// No fast.
    NoFast,
    /// Total abstinence (black fast).
    StrictFast,
    /// Vegetarian food cooked without oil.
    FastWithoutOil,
    /// Oil and wine allowed.
    FastWithOil,
    /// Fish allowed.
    FastWithFish,
    /// Dairy allowed, meat excluded.
    Dairy,
}

impl FastType {
    /// Returns true for every variant except `NoFast`.
    pub fn is_fast(&self) -> bool {
        !matches!(self, FastType::NoFast)
    }

    /// Returns the wire name (`no_fast`, `strict_fast`, ...).
    pub fn as_str(&self) -> &'static str {
        match self {
            FastType::NoFast => "no_fast",
            FastType::StrictFast => "strict_fast",
            FastType::FastWithoutOil => "fast_without_oil",
            FastType::FastWithOil => "fast_with_oil",
            FastType::FastWithFish => "fast_with_fish",
            FastType::Dairy => "dairy",
        }
    }
}

impl fmt::Display for FastType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display priority of a day. Carries no numeric meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImportanceLevel {
    /// Great feast of the Church.
    HighFeast,
    /// Commemoration of a specific saint.
    Saint,
    /// Ordinary Sunday.
    Sunday,
    /// Weekday without a notable feast.
    Normal,
}

impl ImportanceLevel {
    /// Returns the wire name (`high_feast`, `saint`, ...).
    pub fn as_str(&self) -> &'static str {
        match self {
            ImportanceLevel::HighFeast => "high_feast",
            ImportanceLevel::Saint => "saint",
            ImportanceLevel::Sunday => "sunday",
            ImportanceLevel::Normal => "normal",
        }
    }
}

impl fmt::Display for ImportanceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Calendar status of one date for one tradition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarDay {
    /// Composite key (format: YYYY-MM-DD-TRADITION).
    pub id: String,
    /// Gregorian calendar date.
    pub date: NaiveDate,
    /// Tradition the record was requested for.
    pub tradition: Tradition,
    /// Resolved display name.
    pub feast_name: String,
    /// Whether any fast applies. Always equal to `fast_type.is_fast()`.
    pub is_fast_day: bool,
    /// Fasting discipline for the day.
    pub fast_type: FastType,
    /// Display priority.
    pub importance_level: ImportanceLevel,
    /// One-line description.
    pub description_short: String,
    /// Commemorated saints, in order.
    pub saints: Vec<String>,
    /// Scripture readings (Sundays only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub readings: Option<Vec<String>>,
}

impl CalendarDay {
    /// Builds the composite record key for a date and tradition.
    pub fn make_id(date: NaiveDate, tradition: Tradition) -> String {
        format!("{}-{}", date.format("%Y-%m-%d"), tradition)
    }

    /// Validates the record invariants.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The ID does not match the date and tradition
    /// - `is_fast_day` disagrees with `fast_type`
    pub fn validate(&self) -> crate::Result<()> {
        let expected = Self::make_id(self.date, self.tradition);
        if self.id != expected {
            return Err(crate::Error::InvalidDay(format!(
                "ID '{}' does not match '{}'",
                self.id, expected
            )));
        }

        if self.is_fast_day != self.fast_type.is_fast() {
            return Err(crate::Error::InvalidDay(format!(
                "{}: is_fast_day={} but fast_type={}",
                self.id, self.is_fast_day, self.fast_type
            )));
        }

        Ok(())
    }
}
