// Rust guideline compliant 2026-02-06

//! Day resolution pipeline.
//!
//! A day is resolved by folding a [`DayState`] through [`Stage::ORDER`].
//! Every stage is a pure function of the previous state and the immutable
//! [`DayContext`]; a later stage may overwrite what an earlier one decided:
//!
//! 1. Fixed feast lookup
//! 2. Sunday upgrade
//! 3. Pascha-relative movable feasts
//! 4. Seasonal fasts (Great Lent, Nativity, Dormition, Apostles),
//!    optional Cheesefare week, then the weekly Wednesday/Friday rule
//! 5. Forced fast type from the fixed-feast table

use crate::feasts::{FeastTable, MonthDay};
use crate::models::{FastType, ImportanceLevel};
use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::ops::{Range, RangeInclusive};

/// Clean Monday, first day of Great Lent.
pub const CLEAN_MONDAY: i64 = -48;
/// Palm Sunday.
pub const PALM_SUNDAY: i64 = -7;
/// Great Friday.
pub const GREAT_FRIDAY: i64 = -2;
/// Holy Saturday.
pub const HOLY_SATURDAY: i64 = -1;
/// Ascension, always a Thursday.
pub const ASCENSION: i64 = 39;
/// Pentecost.
pub const PENTECOST: i64 = 49;
/// Holy Trinity (Monday after Pentecost).
pub const TRINITY: i64 = 50;
/// Monday after All Saints Sunday.
pub const APOSTLES_FAST_START: i64 = 57;

/// Great Lent, Clean Monday through Great Friday. Holy Saturday keeps the
/// strict fast set by its movable feast.
pub const GREAT_LENT: Range<i64> = CLEAN_MONDAY..HOLY_SATURDAY;
/// Cheesefare week, Monday through Forgiveness Sunday.
pub const CHEESEFARE_WEEK: Range<i64> = -55..CLEAN_MONDAY;
/// Week after the Sunday of the Publican and the Pharisee.
pub const PUBLICAN_PHARISEE_WEEK: Range<i64> = -69..-62;
/// Bright Week, Monday through Saturday after Pascha.
pub const BRIGHT_WEEK: Range<i64> = 1..7;
/// Trinity week, Monday after Pentecost through Saturday before All Saints.
pub const TRINITY_WEEK: Range<i64> = TRINITY..APOSTLES_FAST_START;

const NATIVITY_FAST: (MonthDay, MonthDay) = (MonthDay::new(11, 15), MonthDay::new(12, 24));
const NATIVITY_FAST_LATE: MonthDay = MonthDay::new(12, 18);
const NATIVITY_FISH_FEASTS: [MonthDay; 3] = [
    MonthDay::new(11, 21),
    MonthDay::new(11, 30),
    MonthDay::new(12, 6),
];
const DORMITION_FAST: (MonthDay, MonthDay) = (MonthDay::new(8, 1), MonthDay::new(8, 14));
const TRANSFIGURATION: MonthDay = MonthDay::new(8, 6);
const APOSTLES_FEAST: MonthDay = MonthDay::new(6, 29);
const CHRISTMASTIDE: [(MonthDay, MonthDay); 2] = [
    (MonthDay::new(12, 25), MonthDay::new(12, 31)),
    (MonthDay::new(1, 1), MonthDay::new(1, 4)),
];

/// A feast whose date follows Pascha.
struct MovableFeast {
    offsets: RangeInclusive<i64>,
    name: &'static str,
    importance: Option<ImportanceLevel>,
    fast: Option<FastType>,
}

const MOVABLE_FEASTS: &[MovableFeast] = &[
    MovableFeast {
        offsets: CLEAN_MONDAY..=CLEAN_MONDAY,
        name: "Start of Great Lent (Clean Monday)",
        importance: Some(ImportanceLevel::HighFeast),
        fast: Some(FastType::StrictFast),
    },
    MovableFeast {
        offsets: PALM_SUNDAY..=PALM_SUNDAY,
        name: "Floriile (Palm Sunday)",
        importance: Some(ImportanceLevel::HighFeast),
        fast: Some(FastType::FastWithFish),
    },
    MovableFeast {
        offsets: GREAT_FRIDAY..=GREAT_FRIDAY,
        name: "Vinerea Mare (Great Friday)",
        importance: Some(ImportanceLevel::HighFeast),
        fast: Some(FastType::StrictFast),
    },
    MovableFeast {
        offsets: HOLY_SATURDAY..=HOLY_SATURDAY,
        name: "Sâmbăta Mare",
        importance: Some(ImportanceLevel::HighFeast),
        fast: Some(FastType::StrictFast),
    },
    MovableFeast {
        offsets: 0..=0,
        name: "ÎNVIEREA DOMNULUI (PAȘTI)",
        importance: Some(ImportanceLevel::HighFeast),
        fast: Some(FastType::NoFast),
    },
    MovableFeast {
        offsets: 1..=6,
        name: "Săptămâna Luminată",
        importance: None,
        fast: Some(FastType::NoFast),
    },
    MovableFeast {
        offsets: ASCENSION..=ASCENSION,
        name: "Înălțarea Domnului",
        importance: Some(ImportanceLevel::HighFeast),
        fast: None,
    },
    MovableFeast {
        offsets: PENTECOST..=PENTECOST,
        name: "Pogorârea Sf. Duh (Rusalii)",
        importance: Some(ImportanceLevel::HighFeast),
        fast: None,
    },
    MovableFeast {
        offsets: TRINITY..=TRINITY,
        name: "Sf. Treime",
        importance: Some(ImportanceLevel::HighFeast),
        fast: None,
    },
];

/// Optional rules a caller may switch on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RuleOptions {
    /// Mark Cheesefare week (Pascha -55 to -49) as `dairy`.
    #[serde(default)]
    pub observe_cheesefare_week: bool,
}

/// Immutable facts about the date being resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayContext {
    /// The date.
    pub date: NaiveDate,
    /// Day of the week.
    pub weekday: Weekday,
    /// Civil month and day.
    pub month_day: MonthDay,
    /// Signed days from Pascha of the same year.
    pub pascha_offset: i64,
}

impl DayContext {
    /// Builds the context of `date` given Pascha of the same year.
    pub fn new(date: NaiveDate, pascha: NaiveDate) -> Self {
        Self {
            date,
            weekday: date.weekday(),
            month_day: MonthDay::of(date),
            pascha_offset: (date - pascha).num_days(),
        }
    }

    /// Saturday or Sunday.
    pub fn is_weekend(&self) -> bool {
        matches!(self.weekday, Weekday::Sat | Weekday::Sun)
    }

    /// Whether the weekly Wednesday/Friday fast is lifted on this date.
    pub fn is_fast_free(&self) -> bool {
        CHRISTMASTIDE
            .iter()
            .any(|&(start, end)| self.month_day.within(start, end))
            || PUBLICAN_PHARISEE_WEEK.contains(&self.pascha_offset)
            || BRIGHT_WEEK.contains(&self.pascha_offset)
            || TRINITY_WEEK.contains(&self.pascha_offset)
    }
}

/// Intermediate resolution state of a day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayState {
    /// Feast name, if any stage set one.
    pub feast_name: Option<String>,
    /// Display priority.
    pub importance: ImportanceLevel,
    /// Fast ruling. `None` means no stage has ruled yet, which is distinct
    /// from an explicit `Some(FastType::NoFast)`.
    pub fast: Option<FastType>,
    /// Commemorated saints.
    pub saints: Vec<String>,
}

impl Default for DayState {
    fn default() -> Self {
        Self {
            feast_name: None,
            importance: ImportanceLevel::Normal,
            fast: None,
            saints: Vec::new(),
        }
    }
}

impl DayState {
    /// Final fast type, `NoFast` when no stage ruled.
    pub fn fast_type(&self) -> FastType {
        self.fast.unwrap_or(FastType::NoFast)
    }

    /// Whether the final fast type is a fast.
    pub fn is_fast_day(&self) -> bool {
        self.fast_type().is_fast()
    }

    fn with_fast(self, fast: FastType) -> Self {
        Self {
            fast: Some(fast),
            ..self
        }
    }
}

/// One step of the resolution pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Seed name and importance from the fixed-feast table.
    FixedFeast,
    /// Promote ordinary Sundays.
    SundayUpgrade,
    /// Apply Pascha-relative feasts.
    MovableFeast,
    /// Great Lent fasting.
    GreatLent,
    /// Nativity fast, Nov 15 - Dec 24.
    NativityFast,
    /// Dormition fast, Aug 1 - 14.
    DormitionFast,
    /// Apostles' fast, Pascha +57 until June 29.
    ApostlesFast,
    /// Cheesefare week, when enabled.
    CheesefareWeek,
    /// Wednesday and Friday fasts outside every season.
    WeeklyFast,
    /// Forced fast type from the fixed-feast table.
    FixedFeastOverride,
}

impl Stage {
    /// Stages in precedence order, lowest first.
    pub const ORDER: [Stage; 10] = [
        Stage::FixedFeast,
        Stage::SundayUpgrade,
        Stage::MovableFeast,
        Stage::GreatLent,
        Stage::NativityFast,
        Stage::DormitionFast,
        Stage::ApostlesFast,
        Stage::CheesefareWeek,
        Stage::WeeklyFast,
        Stage::FixedFeastOverride,
    ];

    /// Applies this stage to `state`.
    ///
    /// # Arguments
    ///
    /// * `state` - State produced by the previous stage
    /// * `ctx` - The date being resolved
    /// * `feasts` - Fixed-feast table of the tradition
    /// * `options` - Optional rules
    ///
    /// # Returns
    ///
    /// The new state.
    pub fn apply(
        self,
        state: DayState,
        ctx: &DayContext,
        feasts: &FeastTable,
        options: &RuleOptions,
    ) -> DayState {
        match self {
            Stage::FixedFeast => fixed_feast(state, ctx, feasts),
            Stage::SundayUpgrade => sunday_upgrade(state, ctx),
            Stage::MovableFeast => movable_feast(state, ctx),
            Stage::GreatLent => great_lent(state, ctx),
            Stage::NativityFast => nativity_fast(state, ctx),
            Stage::DormitionFast => dormition_fast(state, ctx),
            Stage::ApostlesFast => apostles_fast(state, ctx),
            Stage::CheesefareWeek if options.observe_cheesefare_week => {
                cheesefare_week(state, ctx)
            }
            Stage::CheesefareWeek => state,
            Stage::WeeklyFast => weekly_fast(state, ctx),
            Stage::FixedFeastOverride => fixed_feast_override(state, ctx, feasts),
        }
    }
}

/// Runs the full pipeline for one day.
pub fn resolve(ctx: &DayContext, feasts: &FeastTable, options: &RuleOptions) -> DayState {
    Stage::ORDER
        .iter()
        .fold(DayState::default(), |state, stage| {
            stage.apply(state, ctx, feasts, options)
        })
}

fn fixed_feast(state: DayState, ctx: &DayContext, feasts: &FeastTable) -> DayState {
    match feasts.get(ctx.month_day) {
        Some(feast) => DayState {
            feast_name: Some(feast.name.clone()),
            importance: feast.importance,
            ..state
        },
        None => {
            let mut saints = state.saints;
            saints.push(format!("Saint of {}", ctx.date.format("%Y-%m-%d")));
            DayState { saints, ..state }
        }
    }
}

fn sunday_upgrade(state: DayState, ctx: &DayContext) -> DayState {
    if ctx.weekday != Weekday::Sun || state.importance != ImportanceLevel::Normal {
        return state;
    }

    let feast_name = match state.feast_name {
        Some(name) => format!("{} (Sunday)", name),
        None => "Sunday Liturgy".to_string(),
    };
    DayState {
        feast_name: Some(feast_name),
        importance: ImportanceLevel::Sunday,
        ..state
    }
}

fn movable_feast(state: DayState, ctx: &DayContext) -> DayState {
    let Some(feast) = MOVABLE_FEASTS
        .iter()
        .find(|feast| feast.offsets.contains(&ctx.pascha_offset))
    else {
        return state;
    };

    DayState {
        feast_name: Some(feast.name.to_string()),
        importance: feast.importance.unwrap_or(state.importance),
        fast: feast.fast.or(state.fast),
        ..state
    }
}

fn great_lent(state: DayState, ctx: &DayContext) -> DayState {
    let offset = ctx.pascha_offset;
    if !GREAT_LENT.contains(&offset) || state.fast == Some(FastType::StrictFast) {
        return state;
    }

    let fast = if offset == PALM_SUNDAY {
        FastType::FastWithFish
    } else if ctx.is_weekend() {
        FastType::FastWithOil
    } else {
        FastType::FastWithoutOil
    };
    state.with_fast(fast)
}

fn nativity_fast(state: DayState, ctx: &DayContext) -> DayState {
    let (start, end) = NATIVITY_FAST;
    if !ctx.month_day.within(start, end) {
        return state;
    }

    let fast = if NATIVITY_FISH_FEASTS.contains(&ctx.month_day) {
        FastType::FastWithFish
    } else if ctx.is_weekend() {
        if ctx.month_day >= NATIVITY_FAST_LATE {
            FastType::FastWithOil
        } else {
            FastType::FastWithFish
        }
    } else {
        FastType::FastWithoutOil
    };
    state.with_fast(fast)
}

fn dormition_fast(state: DayState, ctx: &DayContext) -> DayState {
    let (start, end) = DORMITION_FAST;
    if !ctx.month_day.within(start, end) {
        return state;
    }

    let fast = if ctx.month_day == TRANSFIGURATION {
        FastType::FastWithFish
    } else if ctx.is_weekend() {
        FastType::FastWithOil
    } else {
        FastType::FastWithoutOil
    };
    state.with_fast(fast)
}

fn apostles_fast(state: DayState, ctx: &DayContext) -> DayState {
    // Empty when Pascha is late enough that the start reaches June 29
    if ctx.pascha_offset < APOSTLES_FAST_START || ctx.month_day >= APOSTLES_FEAST {
        return state;
    }

    let fast = if ctx.is_weekend() {
        FastType::FastWithFish
    } else {
        FastType::FastWithoutOil
    };
    state.with_fast(fast)
}

fn cheesefare_week(state: DayState, ctx: &DayContext) -> DayState {
    if !CHEESEFARE_WEEK.contains(&ctx.pascha_offset) {
        return state;
    }
    state.with_fast(FastType::Dairy)
}

fn weekly_fast(state: DayState, ctx: &DayContext) -> DayState {
    if state.fast.is_some() || !matches!(ctx.weekday, Weekday::Wed | Weekday::Fri) {
        return state;
    }

    if ctx.is_fast_free() {
        return state;
    }
    state.with_fast(FastType::FastWithoutOil)
}

fn fixed_feast_override(state: DayState, ctx: &DayContext, feasts: &FeastTable) -> DayState {
    match feasts.get(ctx.month_day).and_then(|feast| feast.force_fast_type) {
        Some(fast) => state.with_fast(fast),
        None => state,
    }
}
