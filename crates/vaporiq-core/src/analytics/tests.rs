//! Unit tests for analytics module

use super::*;
use chrono::NaiveDate;

use crate::error::CoreError;
use crate::models::{ForecastPoint, RankedFlavor, TrendRecord};
use crate::settings::{DropsSettings, ForecastSettings};
use crate::store::TrendStore;

fn d(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, day).unwrap()
}

/// Generate `days` of linearly growing mentions for each flavor
fn generate_store(flavors: &[&str], days: u32) -> TrendStore {
    let rows = flavors.iter().enumerate().flat_map(|(f, name)| {
        (1..=days).map(move |day| {
            TrendRecord::new(*name, d(day), (f as i64 + 1) * 10 + day as i64)
        })
    });
    TrendStore::load(rows).unwrap()
}

fn ranked(flavor: &str, mentions: u64) -> RankedFlavor {
    RankedFlavor {
        flavor: flavor.to_string(),
        mentions,
    }
}

// ============================================================================
// Projection Tests
// ============================================================================

#[test]
fn test_project_custard_kunafa_example() {
    let store = TrendStore::load(vec![
        TrendRecord::new("Custard Kunafa", d(1), 100),
        TrendRecord::new("Custard Kunafa", d(2), 110),
    ])
    .unwrap();

    let series = ForecastEngine::new(&store)
        .project("Custard Kunafa", 3, 2)
        .unwrap();

    assert_eq!(
        series.points(),
        [
            ForecastPoint::new(d(1), 100),
            ForecastPoint::new(d(2), 110),
            ForecastPoint::new(d(3), 112),
            ForecastPoint::new(d(4), 114),
            ForecastPoint::new(d(5), 116),
        ]
    );
    assert_eq!(series.history_len(), 2);
}

#[test]
fn test_project_keeps_history_unchanged() {
    let store = generate_store(&["Icy Mint", "Mango Breeze", "Berry Blast"], 10);
    let engine = ForecastEngine::new(&store);

    for flavor in store.flavors() {
        let history = &store.series(flavor).unwrap().points;
        let series = engine.project(flavor, 5, 3).unwrap();
        assert_eq!(series.history(), history.as_slice());
        assert_eq!(series.projection().len(), 5);
    }
}

#[test]
fn test_projection_tail_shape() {
    let store = generate_store(&["Icy Mint"], 4);
    let engine = ForecastEngine::new(&store);

    for horizon in [1, 2, 14, 60] {
        let series = engine.project("Icy Mint", horizon, 7).unwrap();
        let tail = series.projection();
        assert_eq!(
            tail.len(),
            horizon as usize,
            "Should project {} days",
            horizon
        );

        let last_date = series.last_historical_date().unwrap();
        assert_eq!(tail[0].date, last_date.succ_opt().unwrap());
        for pair in tail.windows(2) {
            assert_eq!(pair[1].date, pair[0].date.succ_opt().unwrap());
        }
    }
}

#[test]
fn test_projection_is_deterministic() {
    let store = generate_store(&["Berry Blast", "Icy Mint"], 7);
    let engine = ForecastEngine::new(&store);

    let a = engine.project("Berry Blast", 14, 1).unwrap();
    let b = engine.project("Berry Blast", 14, 1).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_zero_boost_is_flat() {
    let store = generate_store(&["Icy Mint"], 3);
    let series = ForecastEngine::new(&store)
        .project("Icy Mint", 4, 0)
        .unwrap();
    let last = series.history().last().unwrap().mentions;
    assert!(series.projection().iter().all(|p| p.mentions == last));
}

#[test]
fn test_project_unknown_flavor() {
    let store = generate_store(&["Icy Mint"], 3);
    let err = ForecastEngine::new(&store)
        .project("Ghost Grape", 3, 1)
        .unwrap_err();
    assert!(matches!(err, CoreError::NotFound { kind: "flavor", .. }));
}

#[test]
fn test_project_without_history() {
    let store = generate_store(&["Icy Mint"], 3).with_empty_series("Fresh Drop");
    let err = ForecastEngine::new(&store)
        .project("Fresh Drop", 3, 1)
        .unwrap_err();
    assert!(matches!(err, CoreError::InsufficientData { .. }));
}

#[test]
fn test_project_zero_horizon() {
    let store = generate_store(&["Icy Mint"], 3);
    let err = ForecastEngine::new(&store)
        .project("Icy Mint", 0, 1)
        .unwrap_err();
    assert!(matches!(err, CoreError::InvalidArgument { .. }));
}

#[test]
fn test_project_with_settings_uses_flavor_boost() {
    let store = TrendStore::load(vec![
        TrendRecord::new("Custard Kunafa", d(1), 100),
        TrendRecord::new("Icy Mint", d(1), 100),
    ])
    .unwrap();
    let engine = ForecastEngine::new(&store);
    let settings = ForecastSettings::default();

    let custard = engine.project_with("Custard Kunafa", &settings).unwrap();
    let mint = engine.project_with("Icy Mint", &settings).unwrap();

    assert_eq!(custard.projection().len(), 14);
    assert_eq!(custard.projection()[13].mentions, 128);
    assert_eq!(mint.projection()[13].mentions, 114);
}

// ============================================================================
// Leaderboard Tests
// ============================================================================

#[test]
fn test_top_n_tie_break_alphabetical() {
    let store = TrendStore::load(vec![
        TrendRecord::new("A", d(2), 50),
        TrendRecord::new("C", d(2), 80),
        TrendRecord::new("B", d(2), 80),
        TrendRecord::new("D", d(1), 500),
    ])
    .unwrap();

    let top = ForecastEngine::new(&store).top_n(2).unwrap();
    assert_eq!(top, vec![ranked("B", 80), ranked("C", 80)]);
}

#[test]
fn test_top_n_only_uses_latest_date() {
    let store = TrendStore::load(vec![
        TrendRecord::new("Old Favourite", d(1), 999),
        TrendRecord::new("Icy Mint", d(3), 10),
        TrendRecord::new("Mango Breeze", d(3), 20),
    ])
    .unwrap();

    let top = ForecastEngine::new(&store).top_n(5).unwrap();
    let expected = vec![ranked("Mango Breeze", 20), ranked("Icy Mint", 10)];
    assert_eq!(top, expected);
}

#[test]
fn test_top_n_sorted_and_bounded() {
    let store = generate_store(&["E", "D", "C", "B", "A"], 5);
    let engine = ForecastEngine::new(&store);

    for n in 1..=8 {
        let top = engine.top_n(n).unwrap();
        assert_eq!(top.len(), n.min(5));
        for pair in top.windows(2) {
            assert!(
                pair[0].mentions > pair[1].mentions
                    || (pair[0].mentions == pair[1].mentions && pair[0].flavor < pair[1].flavor)
            );
        }
    }
}

#[test]
fn test_top_n_empty_store() {
    let store = TrendStore::default();
    let err = ForecastEngine::new(&store).top_n(3).unwrap_err();
    assert!(matches!(err, CoreError::EmptyData { .. }));
}

#[test]
fn test_top_n_zero() {
    let store = generate_store(&["A"], 1);
    let err = ForecastEngine::new(&store).top_n(0).unwrap_err();
    assert!(matches!(err, CoreError::InvalidArgument { .. }));
}

// ============================================================================
// Drops & Summary Tests
// ============================================================================

#[test]
fn test_limited_drops() {
    let store = generate_store(&["A", "B", "C", "D", "E", "F", "G"], 3);
    let engine = ForecastEngine::new(&store);
    let drops = LimitedDrops::compute(&engine, &DropsSettings::default()).unwrap();

    assert_eq!(drops.date, d(3));
    assert_eq!(drops.leaderboard.len(), 5);
    assert_eq!(drops.leaderboard[0].flavor, "G");
    assert_eq!(drops.exclusive.as_deref(), Some("Custard Kunafa"));
}

#[test]
fn test_summarize_flavors() {
    let store = TrendStore::load(vec![
        TrendRecord::new("Rising", d(1), 100),
        TrendRecord::new("Rising", d(5), 150),
        TrendRecord::new("Falling", d(1), 100),
        TrendRecord::new("Falling", d(5), 50),
        TrendRecord::new("Flat", d(1), 100),
        TrendRecord::new("Flat", d(5), 105),
    ])
    .unwrap();

    let summaries = summarize_flavors(&store);
    assert_eq!(summaries.len(), 3);

    let by_name = |name: &str| summaries.iter().find(|s| s.flavor == name).unwrap();
    assert_eq!(by_name("Rising").direction, TrendDirection::Up(50.0));
    assert_eq!(by_name("Falling").direction, TrendDirection::Down(50.0));
    assert_eq!(by_name("Flat").direction, TrendDirection::Stable);
    assert_eq!(by_name("Falling").peak_mentions, 100);
    assert_eq!(by_name("Rising").days_observed, 2);
}
