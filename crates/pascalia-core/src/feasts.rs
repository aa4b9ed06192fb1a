// Rust guideline compliant 2026-02-06

//! Fixed-feast tables.
//!
//! A fixed feast falls on the same civil month and day every year. Each
//! tradition has one immutable [`FeastTable`], built once and handed to the
//! engine.

use crate::models::{FastType, ImportanceLevel};
use crate::{Error, Result};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Civil month and day, independent of year (format: MM-DD).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MonthDay {
    /// Month, 1-12.
    pub month: u32,
    /// Day of month, 1-31.
    pub day: u32,
}

impl MonthDay {
    /// Creates a month-day pair.
    pub const fn new(month: u32, day: u32) -> Self {
        Self { month, day }
    }

    /// Extracts the month-day of a date.
    pub fn of(date: NaiveDate) -> Self {
        Self::new(date.month(), date.day())
    }

    /// Returns true if `self` lies in `start..=end` within one calendar year.
    pub fn within(&self, start: MonthDay, end: MonthDay) -> bool {
        start <= *self && *self <= end
    }
}

impl fmt::Display for MonthDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}-{:02}", self.month, self.day)
    }
}

impl FromStr for MonthDay {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::InvalidDate(format!("'{}' is not a MM-DD month-day", s));
        let (month, day) = s.split_once('-').ok_or_else(invalid)?;
        let month: u32 = month.parse().map_err(|_| invalid())?;
        let day: u32 = day.parse().map_err(|_| invalid())?;

        // 2024 is a leap year, so 02-29 is accepted
        NaiveDate::from_ymd_opt(2024, month, day).ok_or_else(invalid)?;
        Ok(Self::new(month, day))
    }
}

/// A commemoration on a fixed civil date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixedFeastDefinition {
    /// Display name.
    pub name: String,
    /// Display priority.
    pub importance: ImportanceLevel,
    /// Fast type imposed on the date regardless of every other rule.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub force_fast_type: Option<FastType>,
}

/// Immutable mapping from month-day to fixed feast.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeastTable {
    entries: BTreeMap<MonthDay, FixedFeastDefinition>,
}

/// Romanian fixed feasts: (month, day, name, forced fast type).
const ROMANIAN_FIXED_FEASTS: &[(u32, u32, &str, Option<FastType>)] = &[
    (1, 1, "Tăierea Împrejur; Sf. Vasile cel Mare", None),
    (1, 6, "Botezul Domnului (Boboteaza)", Some(FastType::NoFast)),
    (1, 7, "Soborul Sf. Ioan Botezătorul", None),
    (1, 30, "Sf. Trei Ierarhi", None),
    (2, 2, "Întâmpinarea Domnului", None),
    (3, 25, "Buna Vestire", Some(FastType::FastWithFish)),
    (4, 23, "Sf. M. Mc. Gheorghe", None),
    (5, 21, "Sf. Împărați Constantin și Elena", None),
    (6, 24, "Nașterea Sf. Ioan Botezătorul", None),
    (6, 29, "Sf. Ap. Petru și Pavel", None),
    (7, 20, "Sf. Prooroc Ilie Tesviteanul", None),
    (8, 6, "Schimbarea la Față", Some(FastType::FastWithFish)),
    (8, 15, "Adormirea Maicii Domnului", None),
    (8, 29, "Tăierea capului Sf. Ioan Botezătorul", Some(FastType::StrictFast)),
    (9, 8, "Nașterea Maicii Domnului", None),
    (9, 14, "Înălțarea Sfintei Cruci", Some(FastType::StrictFast)),
    (10, 14, "Sf. Cuv. Parascheva", None),
    (10, 26, "Sf. M. Mc. Dimitrie", None),
    (10, 27, "Sf. Cuv. Dimitrie cel Nou", None),
    (11, 8, "Sf. Arh. Mihail și Gavriil", None),
    (11, 21, "Intrarea în Biserică a Maicii Domnului", Some(FastType::FastWithFish)),
    (11, 30, "Sf. Ap. Andrei (Ocrotitorul României)", Some(FastType::FastWithFish)),
    (12, 6, "Sf. Ierarh Nicolae", Some(FastType::FastWithFish)),
    (12, 25, "Nașterea Domnului (Crăciunul)", Some(FastType::NoFast)),
    (12, 26, "Soborul Maicii Domnului", Some(FastType::NoFast)),
    (12, 27, "Sf. Arhidiacon Ștefan", Some(FastType::NoFast)),
];

impl FeastTable {
    /// Builds a table from month-day/definition pairs.
    ///
    /// Later entries replace earlier ones with the same month-day.
    pub fn new<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (MonthDay, FixedFeastDefinition)>,
    {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    /// Returns the fixed-feast table of the Romanian Orthodox Church.
    pub fn romanian() -> Self {
        Self::new(
            ROMANIAN_FIXED_FEASTS
                .iter()
                .map(|&(month, day, name, force_fast_type)| {
                    (
                        MonthDay::new(month, day),
                        FixedFeastDefinition {
                            name: name.to_string(),
                            importance: ImportanceLevel::HighFeast,
                            force_fast_type,
                        },
                    )
                }),
        )
    }

    /// Looks up the feast on a month-day.
    pub fn get(&self, month_day: MonthDay) -> Option<&FixedFeastDefinition> {
        self.entries.get(&month_day)
    }

    /// Iterates entries in calendar order.
    pub fn iter(&self) -> impl Iterator<Item = (&MonthDay, &FixedFeastDefinition)> {
        self.entries.iter()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
