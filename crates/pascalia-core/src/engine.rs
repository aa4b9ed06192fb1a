// Rust guideline compliant 2026-02-06

//! Calendar rule engine.
//!
//! The engine turns a year and a tradition into one [`CalendarDay`] per
//! civil date by running every date through the [`rules`](crate::rules)
//! pipeline. It owns its fixed-feast table and holds no other state, so a
//! single engine can be shared freely across threads.

use crate::feasts::FeastTable;
use crate::models::{CalendarDay, ImportanceLevel, Tradition};
use crate::pascha::compute_pascha;
use crate::rules::{self, DayContext, DayState, RuleOptions};
use crate::{Config, Error, Result};
use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Saints listed when nothing more specific is known.
const DEFAULT_SAINTS: &str = "Holy Martyrs and Confessors";
/// Readings attached to every Sunday.
const SUNDAY_READINGS: [&str; 2] = ["Epistle: Rom. 1", "Gospel: Matt. 1"];

/// What to do when a tradition has no rule set of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TraditionPolicy {
    /// Compute with the Romanian rules and attach a [`Caveat`].
    #[default]
    Fallback,
    /// Fail with `Error::UnsupportedTradition`.
    Strict,
}

impl FromStr for TraditionPolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fallback" => Ok(TraditionPolicy::Fallback),
            "strict" => Ok(TraditionPolicy::Strict),
            other => Err(Error::InvalidConfig(format!(
                "tradition policy must be fallback or strict, got '{}'",
                other
            ))),
        }
    }
}

/// Qualification attached to a result that was computed anyway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Caveat {
    /// The requested tradition was computed with another tradition's rules.
    TraditionFallback {
        /// Tradition the caller asked for.
        requested: Tradition,
        /// Tradition whose rules were applied.
        applied: Tradition,
    },
}

impl fmt::Display for Caveat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Caveat::TraditionFallback { requested, applied } => write!(
                f,
                "{} has no rule set of its own; computed with {} rules",
                requested, applied
            ),
        }
    }
}

/// A computed value plus an optional caveat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolved<T> {
    /// The computed value.
    pub value: T,
    /// Set when the value was computed with degraded fidelity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caveat: Option<Caveat>,
}

impl<T> Resolved<T> {
    /// Maps the value, keeping the caveat.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Resolved<U> {
        Resolved {
            value: f(self.value),
            caveat: self.caveat,
        }
    }

    /// Discards the caveat.
    pub fn into_value(self) -> T {
        self.value
    }
}

/// Calendar engine for one fixed-feast table and rule configuration.
#[derive(Debug, Clone)]
pub struct CalendarEngine {
    feasts: FeastTable,
    options: RuleOptions,
    policy: TraditionPolicy,
}

impl Default for CalendarEngine {
    fn default() -> Self {
        Self::new(FeastTable::romanian())
    }
}

impl CalendarEngine {
    /// Creates an engine over `feasts` with default options and the
    /// fallback policy.
    pub fn new(feasts: FeastTable) -> Self {
        Self {
            feasts,
            options: RuleOptions::default(),
            policy: TraditionPolicy::default(),
        }
    }

    /// Creates a Romanian engine configured from `config`.
    pub fn from_config(config: &Config) -> Self {
        Self::new(FeastTable::romanian())
            .with_options(RuleOptions {
                observe_cheesefare_week: config.observe_cheesefare_week,
            })
            .with_policy(config.tradition_policy)
    }

    /// Replaces the rule options.
    #[must_use]
    pub fn with_options(mut self, options: RuleOptions) -> Self {
        self.options = options;
        self
    }

    /// Replaces the tradition policy.
    #[must_use]
    pub fn with_policy(mut self, policy: TraditionPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// The fixed-feast table in use.
    pub fn feasts(&self) -> &FeastTable {
        &self.feasts
    }

    /// The rule options in use.
    pub fn options(&self) -> RuleOptions {
        self.options
    }

    /// The tradition policy in use.
    pub fn policy(&self) -> TraditionPolicy {
        self.policy
    }

    /// Decides whether `tradition` can be served and with which caveat.
    ///
    /// # Errors
    ///
    /// Returns `Error::UnsupportedTradition` under the strict policy when
    /// `tradition` has no rule set.
    pub fn check_tradition(&self, tradition: Tradition) -> Result<Option<Caveat>> {
        if tradition.has_rule_set() {
            return Ok(None);
        }

        match self.policy {
            TraditionPolicy::Strict => Err(Error::UnsupportedTradition(tradition)),
            TraditionPolicy::Fallback => {
                tracing::warn!(
                    requested = %tradition,
                    applied = %Tradition::Romanian,
                    "tradition has no rule set, falling back"
                );
                Ok(Some(Caveat::TraditionFallback {
                    requested: tradition,
                    applied: Tradition::Romanian,
                }))
            }
        }
    }

    /// Generates the calendar of a whole year.
    ///
    /// # Arguments
    ///
    /// * `year` - Civil year
    /// * `tradition` - Tradition the records are labelled with
    ///
    /// # Returns
    ///
    /// One record per date of the year, in date order, plus a caveat when
    /// the tradition was served by fallback.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The year is outside the supported Paschalion range
    /// - The tradition is unsupported and the policy is strict
    pub fn generate_year(
        &self,
        year: i32,
        tradition: Tradition,
    ) -> Result<Resolved<Vec<CalendarDay>>> {
        let caveat = self.check_tradition(tradition)?;
        let pascha = compute_pascha(year)?;
        let first = NaiveDate::from_ymd_opt(year, 1, 1).ok_or(Error::UnsupportedYear(year))?;

        tracing::debug!(year, %tradition, %pascha, "generating calendar year");

        let days = first
            .iter_days()
            .take_while(|date| date.year() == year)
            .map(|date| self.resolve_day(date, pascha, tradition))
            .collect();

        Ok(Resolved {
            value: days,
            caveat,
        })
    }

    fn resolve_day(&self, date: NaiveDate, pascha: NaiveDate, tradition: Tradition) -> CalendarDay {
        let ctx = DayContext::new(date, pascha);
        let state = rules::resolve(&ctx, &self.feasts, &self.options);
        finalize(&ctx, state, tradition)
    }
}

/// Turns a resolved state into the output record.
fn finalize(ctx: &DayContext, state: DayState, tradition: Tradition) -> CalendarDay {
    let fast_type = state.fast_type();
    let is_fast_day = fast_type.is_fast();

    let feast_name = state.feast_name.unwrap_or_else(|| {
        match (is_fast_day, ctx.weekday) {
            (true, Weekday::Fri) => "Friday Fast",
            (true, _) => "Fasting Day",
            (false, _) => "Feria",
        }
        .to_string()
    });

    let mut description_short = if state.importance == ImportanceLevel::HighFeast {
        "A major feast of the Church.".to_string()
    } else {
        "Daily commemoration of saints.".to_string()
    };
    if is_fast_day {
        description_short.push_str(" Fasting is prescribed.");
    }

    let saints = if state.saints.is_empty() {
        vec![DEFAULT_SAINTS.to_string()]
    } else {
        state.saints
    };

    let readings = (ctx.weekday == Weekday::Sun)
        .then(|| SUNDAY_READINGS.iter().map(|r| r.to_string()).collect());

    CalendarDay {
        id: CalendarDay::make_id(ctx.date, tradition),
        date: ctx.date,
        tradition,
        feast_name,
        is_fast_day,
        fast_type,
        importance_level: state.importance,
        description_short,
        saints,
        readings,
    }
}

/// Generates a year with the default Romanian engine and fallback policy.
///
/// # Errors
///
/// Returns `Error::UnsupportedYear` if the year is outside the supported range.
pub fn generate_year(year: i32, tradition: Tradition) -> Result<Resolved<Vec<CalendarDay>>> {
    CalendarEngine::default().generate_year(year, tradition)
}
