//! Per-flavor trend summaries
//!
//! Compares each flavor's first and last observation to label the direction
//! of travel for the flavor picker.

use chrono::NaiveDate;
use serde::Serialize;

use crate::store::TrendStore;

/// Relative change below this is reported as stable
const STABLE_THRESHOLD_PCT: f64 = 10.0;

/// Trend direction with percentage change
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum TrendDirection {
    /// Increasing trend (percentage)
    Up(f64),
    /// Decreasing trend (percentage)
    Down(f64),
    /// Stable trend (<10% change)
    Stable,
}

impl TrendDirection {
    fn between(first: u64, last: u64) -> Self {
        if first == 0 {
            return if last == 0 {
                TrendDirection::Stable
            } else {
                TrendDirection::Up(100.0)
            };
        }

        let change_pct = (last as f64 - first as f64) / first as f64 * 100.0;
        if change_pct.abs() < STABLE_THRESHOLD_PCT {
            TrendDirection::Stable
        } else if change_pct > 0.0 {
            TrendDirection::Up(change_pct)
        } else {
            TrendDirection::Down(change_pct.abs())
        }
    }

    pub fn label(&self) -> String {
        match self {
            TrendDirection::Up(pct) => format!("↑ {:.0}%", pct),
            TrendDirection::Down(pct) => format!("↓ {:.0}%", pct),
            TrendDirection::Stable => "→ stable".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlavorSummary {
    pub flavor: String,
    pub days_observed: usize,
    pub first_date: NaiveDate,
    pub last_date: NaiveDate,
    pub latest_mentions: u64,
    pub peak_mentions: u64,
    pub direction: TrendDirection,
}

/// Summarize every flavor in the store, in flavor order
pub fn summarize_flavors(store: &TrendStore) -> Vec<FlavorSummary> {
    store
        .flavors()
        .filter_map(|flavor| store.series(flavor).ok())
        .filter_map(|series| {
            let first = series.points.first()?;
            let last = series.points.last()?;
            Some(FlavorSummary {
                flavor: series.flavor.clone(),
                days_observed: series.len(),
                first_date: first.date,
                last_date: last.date,
                latest_mentions: last.mentions,
                peak_mentions: series.points.iter().map(|p| p.mentions).max().unwrap_or(0),
                direction: TrendDirection::between(first.mentions, last.mentions),
            })
        })
        .collect()
}
