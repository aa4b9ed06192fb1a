// Rust guideline compliant 2026-02-06

//! Stage-by-stage tests for the day resolution pipeline.

use chrono::NaiveDate;
use pascalia_core::rules::{self, GREAT_LENT, TRINITY_WEEK};
use pascalia_core::{
    compute_pascha, DayContext, DayState, FastType, FeastTable, ImportanceLevel, RuleOptions,
    Stage,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

fn ctx(y: i32, m: u32, d: u32) -> DayContext {
    let day = date(y, m, d);
    DayContext::new(day, compute_pascha(y).unwrap())
}

fn apply(stage: Stage, state: DayState, ctx: &DayContext) -> DayState {
    stage.apply(state, ctx, &FeastTable::romanian(), &RuleOptions::default())
}

fn resolve(y: i32, m: u32, d: u32) -> DayState {
    rules::resolve(&ctx(y, m, d), &FeastTable::romanian(), &RuleOptions::default())
}

#[test]
fn test_stage_order_is_fixed() {
    assert_eq!(Stage::ORDER.first(), Some(&Stage::FixedFeast));
    assert_eq!(Stage::ORDER.last(), Some(&Stage::FixedFeastOverride));

    let position = |stage| Stage::ORDER.iter().position(|s| *s == stage).unwrap();
    assert!(position(Stage::SundayUpgrade) < position(Stage::MovableFeast));
    assert!(position(Stage::GreatLent) < position(Stage::NativityFast));
    assert!(position(Stage::NativityFast) < position(Stage::DormitionFast));
    assert!(position(Stage::DormitionFast) < position(Stage::ApostlesFast));
    assert!(position(Stage::ApostlesFast) < position(Stage::WeeklyFast));
}

#[test]
fn test_fixed_feast_seeds_name_and_importance() {
    let state = apply(Stage::FixedFeast, DayState::default(), &ctx(2024, 9, 14));
    assert_eq!(state.feast_name.as_deref(), Some("Înălțarea Sfintei Cruci"));
    assert_eq!(state.importance, ImportanceLevel::HighFeast);
    assert!(state.saints.is_empty());
    // The forced fast type waits for the final override
    assert_eq!(state.fast, None);
}

#[test]
fn test_fixed_feast_miss_adds_placeholder_saint() {
    let state = apply(Stage::FixedFeast, DayState::default(), &ctx(2024, 3, 3));
    assert_eq!(state.feast_name, None);
    assert_eq!(state.saints, vec!["Saint of 2024-03-03".to_string()]);
}

#[test]
fn test_sunday_upgrade_without_name() {
    // 2025-10-05 is a Sunday with no fixed feast
    let state = apply(Stage::SundayUpgrade, DayState::default(), &ctx(2025, 10, 5));
    assert_eq!(state.importance, ImportanceLevel::Sunday);
    assert_eq!(state.feast_name.as_deref(), Some("Sunday Liturgy"));
}

#[test]
fn test_sunday_upgrade_appends_suffix_to_named_normal_day() {
    let named = DayState {
        feast_name: Some("Sf. Cuv. Paisie".to_string()),
        ..DayState::default()
    };
    let state = apply(Stage::SundayUpgrade, named, &ctx(2025, 10, 5));
    assert_eq!(state.feast_name.as_deref(), Some("Sf. Cuv. Paisie (Sunday)"));
}

#[test]
fn test_sunday_upgrade_leaves_feasts_and_weekdays_alone() {
    let feast = DayState {
        feast_name: Some("Feast".to_string()),
        importance: ImportanceLevel::HighFeast,
        ..DayState::default()
    };
    let state = apply(Stage::SundayUpgrade, feast.clone(), &ctx(2025, 10, 5));
    assert_eq!(state, feast);

    // 2025-10-06 is a Monday
    let state = apply(Stage::SundayUpgrade, DayState::default(), &ctx(2025, 10, 6));
    assert_eq!(state, DayState::default());
}

#[test]
fn test_movable_feasts_2025() {
    let cases = [
        ((3, 3), "Start of Great Lent (Clean Monday)", Some(FastType::StrictFast)),
        ((4, 13), "Floriile (Palm Sunday)", Some(FastType::FastWithFish)),
        ((4, 18), "Vinerea Mare (Great Friday)", Some(FastType::StrictFast)),
        ((4, 19), "Sâmbăta Mare", Some(FastType::StrictFast)),
        ((4, 20), "ÎNVIEREA DOMNULUI (PAȘTI)", Some(FastType::NoFast)),
        ((5, 29), "Înălțarea Domnului", None),
        ((6, 8), "Pogorârea Sf. Duh (Rusalii)", None),
        ((6, 9), "Sf. Treime", None),
    ];

    for ((m, d), name, fast) in cases {
        let state = apply(Stage::MovableFeast, DayState::default(), &ctx(2025, m, d));
        assert_eq!(state.feast_name.as_deref(), Some(name), "2025-{}-{}", m, d);
        assert_eq!(state.fast, fast, "2025-{}-{}", m, d);
        assert_eq!(state.importance, ImportanceLevel::HighFeast);
    }
}

#[test]
fn test_bright_week_keeps_importance_and_clears_fast() {
    let sunday_state = DayState {
        importance: ImportanceLevel::Sunday,
        ..DayState::default()
    };
    // 2025-04-25 is Bright Friday
    let state = apply(Stage::MovableFeast, sunday_state, &ctx(2025, 4, 25));
    assert_eq!(state.feast_name.as_deref(), Some("Săptămâna Luminată"));
    assert_eq!(state.importance, ImportanceLevel::Sunday);
    assert_eq!(state.fast, Some(FastType::NoFast));
}

#[test]
fn test_great_lent_defaults() {
    let lent_weekday = apply(Stage::GreatLent, DayState::default(), &ctx(2025, 3, 12));
    assert_eq!(lent_weekday.fast, Some(FastType::FastWithoutOil));

    let lent_saturday = apply(Stage::GreatLent, DayState::default(), &ctx(2025, 3, 15));
    assert_eq!(lent_saturday.fast, Some(FastType::FastWithOil));

    let lent_sunday = apply(Stage::GreatLent, DayState::default(), &ctx(2025, 3, 16));
    assert_eq!(lent_sunday.fast, Some(FastType::FastWithOil));

    let palm_sunday = apply(Stage::GreatLent, DayState::default(), &ctx(2025, 4, 13));
    assert_eq!(palm_sunday.fast, Some(FastType::FastWithFish));
}

#[test]
fn test_great_lent_keeps_strict_days() {
    let strict = DayState {
        fast: Some(FastType::StrictFast),
        ..DayState::default()
    };
    let clean_monday = apply(Stage::GreatLent, strict.clone(), &ctx(2025, 3, 3));
    assert_eq!(clean_monday.fast, Some(FastType::StrictFast));

    let great_friday = apply(Stage::GreatLent, strict, &ctx(2025, 4, 18));
    assert_eq!(great_friday.fast, Some(FastType::StrictFast));
}

#[test]
fn test_great_lent_range() {
    assert_eq!(GREAT_LENT.start, -48);
    assert_eq!(GREAT_LENT.end, -1);

    // Forgiveness Sunday (-49) and Holy Saturday (-1) are outside
    let before = apply(Stage::GreatLent, DayState::default(), &ctx(2025, 3, 2));
    assert_eq!(before.fast, None);
    let holy_saturday = apply(Stage::GreatLent, DayState::default(), &ctx(2025, 4, 19));
    assert_eq!(holy_saturday.fast, None);
}

#[test]
fn test_nativity_fast() {
    // 2024-11-20 Wednesday
    let weekday = apply(Stage::NativityFast, DayState::default(), &ctx(2024, 11, 20));
    assert_eq!(weekday.fast, Some(FastType::FastWithoutOil));

    // 2024-11-23 Saturday, before Dec 18
    let early_weekend = apply(Stage::NativityFast, DayState::default(), &ctx(2024, 11, 23));
    assert_eq!(early_weekend.fast, Some(FastType::FastWithFish));

    // 2024-12-21 Saturday, from Dec 18
    let late_weekend = apply(Stage::NativityFast, DayState::default(), &ctx(2024, 12, 21));
    assert_eq!(late_weekend.fast, Some(FastType::FastWithOil));

    // Named feasts inside the fast are fish days on any weekday
    for (m, d) in [(11, 21), (11, 30), (12, 6)] {
        let state = apply(Stage::NativityFast, DayState::default(), &ctx(2024, m, d));
        assert_eq!(state.fast, Some(FastType::FastWithFish), "2024-{}-{}", m, d);
    }

    let boundary_start = apply(Stage::NativityFast, DayState::default(), &ctx(2024, 11, 15));
    assert!(boundary_start.fast.is_some());
    let boundary_end = apply(Stage::NativityFast, DayState::default(), &ctx(2024, 12, 24));
    assert!(boundary_end.fast.is_some());
    let outside = apply(Stage::NativityFast, DayState::default(), &ctx(2024, 12, 25));
    assert_eq!(outside.fast, None);
}

#[test]
fn test_nativity_fast_weekend_switches_on_december_18() {
    // 2023-12-17 Sunday, last weekend day with fish
    let last_fish = apply(Stage::NativityFast, DayState::default(), &ctx(2023, 12, 17));
    assert_eq!(last_fish.fast, Some(FastType::FastWithFish));
    assert_eq!(resolve(2023, 12, 17).fast, Some(FastType::FastWithFish));

    // 2022-12-18 Sunday, first weekend day with oil only
    let first_oil = apply(Stage::NativityFast, DayState::default(), &ctx(2022, 12, 18));
    assert_eq!(first_oil.fast, Some(FastType::FastWithOil));
    assert_eq!(resolve(2022, 12, 18).fast, Some(FastType::FastWithOil));
}

#[test]
fn test_dormition_fast() {
    let weekday = apply(Stage::DormitionFast, DayState::default(), &ctx(2024, 8, 7));
    assert_eq!(weekday.fast, Some(FastType::FastWithoutOil));

    let weekend = apply(Stage::DormitionFast, DayState::default(), &ctx(2024, 8, 3));
    assert_eq!(weekend.fast, Some(FastType::FastWithOil));

    let transfiguration = apply(Stage::DormitionFast, DayState::default(), &ctx(2024, 8, 6));
    assert_eq!(transfiguration.fast, Some(FastType::FastWithFish));

    let after = apply(Stage::DormitionFast, DayState::default(), &ctx(2024, 8, 15));
    assert_eq!(after.fast, None);
}

#[test]
fn test_apostles_fast_2025() {
    // Pascha 2025-04-20, fast runs 2025-06-16 through 2025-06-28
    let start = apply(Stage::ApostlesFast, DayState::default(), &ctx(2025, 6, 16));
    assert_eq!(start.fast, Some(FastType::FastWithoutOil));

    let saturday = apply(Stage::ApostlesFast, DayState::default(), &ctx(2025, 6, 21));
    assert_eq!(saturday.fast, Some(FastType::FastWithFish));

    let last = apply(Stage::ApostlesFast, DayState::default(), &ctx(2025, 6, 28));
    assert_eq!(last.fast, Some(FastType::FastWithFish));

    let feast = apply(Stage::ApostlesFast, DayState::default(), &ctx(2025, 6, 29));
    assert_eq!(feast.fast, None);

    let before = apply(Stage::ApostlesFast, DayState::default(), &ctx(2025, 6, 15));
    assert_eq!(before.fast, None);
}

#[test]
fn test_apostles_fast_empty_when_pascha_is_late() {
    // Pascha 2024-05-05: the fast would start 2024-07-01, after June 29
    for d in 1..=30 {
        let state = apply(Stage::ApostlesFast, DayState::default(), &ctx(2024, 6, d));
        assert_eq!(state.fast, None, "2024-06-{}", d);
    }
    let july = apply(Stage::ApostlesFast, DayState::default(), &ctx(2024, 7, 3));
    assert_eq!(july.fast, None);
}

#[test]
fn test_cheesefare_week_is_opt_in() {
    let feasts = FeastTable::romanian();
    // 2025-02-26 Wednesday of Cheesefare week
    let day = ctx(2025, 2, 26);

    let off = Stage::CheesefareWeek.apply(DayState::default(), &day, &feasts, &RuleOptions::default());
    assert_eq!(off.fast, None);

    let on = Stage::CheesefareWeek.apply(
        DayState::default(),
        &day,
        &feasts,
        &RuleOptions {
            observe_cheesefare_week: true,
        },
    );
    assert_eq!(on.fast, Some(FastType::Dairy));
}

#[test]
fn test_weekly_fast_on_wednesday_and_friday() {
    // 2025-10-01 Wednesday, 2025-10-03 Friday, 2025-10-02 Thursday
    let wednesday = apply(Stage::WeeklyFast, DayState::default(), &ctx(2025, 10, 1));
    assert_eq!(wednesday.fast, Some(FastType::FastWithoutOil));
    let friday = apply(Stage::WeeklyFast, DayState::default(), &ctx(2025, 10, 3));
    assert_eq!(friday.fast, Some(FastType::FastWithoutOil));
    let thursday = apply(Stage::WeeklyFast, DayState::default(), &ctx(2025, 10, 2));
    assert_eq!(thursday.fast, None);
}

#[test]
fn test_weekly_fast_respects_existing_rulings() {
    let explicit_free = DayState {
        fast: Some(FastType::NoFast),
        ..DayState::default()
    };
    let state = apply(Stage::WeeklyFast, explicit_free, &ctx(2025, 10, 1));
    assert_eq!(state.fast, Some(FastType::NoFast));

    let oil = DayState {
        fast: Some(FastType::FastWithOil),
        ..DayState::default()
    };
    let state = apply(Stage::WeeklyFast, oil, &ctx(2025, 10, 1));
    assert_eq!(state.fast, Some(FastType::FastWithOil));
}

#[test]
fn test_weekly_fast_lifted_in_fast_free_windows() {
    let fast_free = [
        (2025, 1, 3),  // Christmastide, Friday
        (2024, 12, 27), // Christmastide, Friday
        (2025, 2, 12), // Publican and Pharisee week, Wednesday
        (2025, 2, 14), // Publican and Pharisee week, Friday
        (2025, 4, 23), // Bright Wednesday
        (2025, 6, 11), // Trinity week, Wednesday
        (2025, 6, 13), // Trinity week, Friday
    ];
    for (y, m, d) in fast_free {
        let day = ctx(y, m, d);
        assert!(day.is_fast_free(), "{}-{}-{}", y, m, d);
        let state = apply(Stage::WeeklyFast, DayState::default(), &day);
        assert_eq!(state.fast, None, "{}-{}-{}", y, m, d);
    }

    // The window ends on January 4
    let last = ctx(2024, 1, 4);
    assert!(last.is_fast_free());
    let after = ctx(2024, 1, 5);
    assert!(!after.is_fast_free());
    // 2024-01-05 Friday keeps the weekly fast
    let friday = apply(Stage::WeeklyFast, DayState::default(), &after);
    assert_eq!(friday.fast, Some(FastType::FastWithoutOil));
    assert_eq!(resolve(2024, 1, 5).fast, Some(FastType::FastWithoutOil));
    assert_eq!(TRINITY_WEEK, 50..57);
}

#[test]
fn test_fixed_feast_override_wins() {
    let lent = DayState {
        fast: Some(FastType::FastWithoutOil),
        ..DayState::default()
    };
    let annunciation = apply(Stage::FixedFeastOverride, lent, &ctx(2024, 3, 25));
    assert_eq!(annunciation.fast, Some(FastType::FastWithFish));

    let weekly = DayState {
        fast: Some(FastType::FastWithoutOil),
        ..DayState::default()
    };
    let christmas = apply(Stage::FixedFeastOverride, weekly, &ctx(2024, 12, 25));
    assert_eq!(christmas.fast, Some(FastType::NoFast));

    let untouched = apply(Stage::FixedFeastOverride, DayState::default(), &ctx(2024, 3, 3));
    assert_eq!(untouched.fast, None);
}

#[test]
fn test_full_pipeline_examples() {
    let clean_monday = resolve(2024, 3, 18);
    assert_eq!(clean_monday.fast_type(), FastType::StrictFast);
    assert_eq!(clean_monday.importance, ImportanceLevel::HighFeast);

    let annunciation = resolve(2024, 3, 25);
    assert_eq!(annunciation.fast_type(), FastType::FastWithFish);
    assert_eq!(annunciation.importance, ImportanceLevel::HighFeast);

    let nativity_advent_sunday = resolve(2024, 12, 1);
    assert_eq!(nativity_advent_sunday.importance, ImportanceLevel::Sunday);
    assert_eq!(nativity_advent_sunday.fast_type(), FastType::FastWithFish);

    let cross = resolve(2024, 9, 14);
    assert_eq!(cross.fast_type(), FastType::StrictFast);

    let epiphany = resolve(2025, 1, 6);
    assert_eq!(epiphany.fast_type(), FastType::NoFast);
    assert!(!epiphany.is_fast_day());
}
