//! Flavor mention observations and the series built from them
//!
//! `flavor_trends.csv` holds one row per (flavor, date). Rows are grouped per
//! flavor into a [`TrendSeries`], which a forecast extends into an
//! [`ExtendedSeries`].

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Raw trend row as read from CSV
///
/// Mentions are signed here so that negative counts reach validation
/// instead of failing as an opaque parse error.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TrendRecord {
    pub flavor: String,
    pub date: NaiveDate,
    pub mentions: i64,
}

impl TrendRecord {
    pub fn new(flavor: impl Into<String>, date: NaiveDate, mentions: i64) -> Self {
        Self {
            flavor: flavor.into(),
            date,
            mentions,
        }
    }
}

/// One validated (flavor, date, mentions) data point
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Observation {
    pub flavor: String,
    pub date: NaiveDate,
    pub mentions: u64,
}

/// A (date, mentions) pair, either observed or projected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForecastPoint {
    pub date: NaiveDate,
    pub mentions: u64,
}

impl ForecastPoint {
    pub fn new(date: NaiveDate, mentions: u64) -> Self {
        Self { date, mentions }
    }
}

/// All observations of one flavor, dates strictly increasing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrendSeries {
    pub flavor: String,
    pub points: Vec<ForecastPoint>,
}

impl TrendSeries {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Final historical point, if any
    pub fn last(&self) -> Option<&ForecastPoint> {
        self.points.last()
    }

    pub fn mentions_on(&self, date: NaiveDate) -> Option<u64> {
        self.points
            .binary_search_by_key(&date, |p| p.date)
            .ok()
            .map(|idx| self.points[idx].mentions)
    }
}

/// Whether a point in an extended series was observed or generated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PointKind {
    Historical,
    Projected,
}

impl PointKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PointKind::Historical => "historical",
            PointKind::Projected => "projected",
        }
    }
}

/// History followed by its projection, in date order
///
/// Points after `history_len` are projections; they all fall after the last
/// historical date. `history_len` never exceeds `points.len()`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtendedSeries {
    flavor: String,
    points: Vec<ForecastPoint>,
    history_len: usize,
}

impl ExtendedSeries {
    /// `history_len` is clamped to the number of points
    pub fn new(
        flavor: impl Into<String>,
        points: Vec<ForecastPoint>,
        history_len: usize,
    ) -> Self {
        let history_len = history_len.min(points.len());
        Self {
            flavor: flavor.into(),
            points,
            history_len,
        }
    }

    pub fn flavor(&self) -> &str {
        &self.flavor
    }

    /// History followed by projection
    pub fn points(&self) -> &[ForecastPoint] {
        &self.points
    }

    pub fn history_len(&self) -> usize {
        self.history_len
    }

    pub fn history(&self) -> &[ForecastPoint] {
        self.points.split_at(self.history_len).0
    }

    pub fn projection(&self) -> &[ForecastPoint] {
        self.points.split_at(self.history_len).1
    }

    /// Date of the last observed point
    pub fn last_historical_date(&self) -> Option<NaiveDate> {
        self.history().last().map(|p| p.date)
    }

    /// Points paired with their kind, for charting and export
    pub fn iter_tagged(&self) -> impl Iterator<Item = (PointKind, &ForecastPoint)> {
        self.points.iter().enumerate().map(move |(i, p)| {
            let kind = if i < self.history_len {
                PointKind::Historical
            } else {
                PointKind::Projected
            };
            (kind, p)
        })
    }
}

/// One leaderboard row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedFlavor {
    pub flavor: String,
    pub mentions: u64,
}
