//! Trend store: immutable observations indexed by flavor
//!
//! Built once from raw records, never mutated afterwards. Series are kept in a
//! BTreeMap so flavor iteration order is stable across loads.

use crate::error::CoreError;
use crate::models::{ForecastPoint, Observation, TrendRecord, TrendSeries};
use chrono::NaiveDate;
use std::collections::BTreeMap;
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrendStore {
    series: BTreeMap<String, TrendSeries>,
    latest: Option<NaiveDate>,
    observation_count: usize,
}

impl TrendStore {
    /// Group records by flavor and sort each group by date
    ///
    /// # Errors
    /// `CoreError::Data` on an empty flavor name, negative mentions, or a
    /// (flavor, date) pair seen twice.
    pub fn load<I>(rows: I) -> Result<Self, CoreError>
    where
        I: IntoIterator<Item = TrendRecord>,
    {
        let mut series: BTreeMap<String, TrendSeries> = BTreeMap::new();
        let mut observation_count = 0usize;

        for row in rows {
            if row.flavor.is_empty() {
                return Err(CoreError::data(format!(
                    "empty flavor name on {}",
                    row.date
                )));
            }
            let mentions = u64::try_from(row.mentions).map_err(|_| {
                CoreError::data(format!(
                    "negative mentions ({}) for '{}' on {}",
                    row.mentions, row.flavor, row.date
                ))
            })?;

            series
                .entry(row.flavor.clone())
                .or_insert_with(|| TrendSeries {
                    flavor: row.flavor,
                    points: Vec::new(),
                })
                .points
                .push(ForecastPoint::new(row.date, mentions));
            observation_count += 1;
        }

        let mut latest: Option<NaiveDate> = None;
        for s in series.values_mut() {
            s.points.sort_by_key(|p| p.date);
            if let Some(pair) = s.points.windows(2).find(|w| w[0].date == w[1].date) {
                return Err(CoreError::data(format!(
                    "duplicate observation for '{}' on {}",
                    s.flavor, pair[0].date
                )));
            }
            if let Some(last) = s.points.last() {
                latest = latest.max(Some(last.date));
            }
        }

        debug!(
            flavors = series.len(),
            observations = observation_count,
            latest = ?latest,
            "Trend store loaded"
        );

        Ok(Self {
            series,
            latest,
            observation_count,
        })
    }

    /// Series for one flavor
    pub fn series(&self, flavor: &str) -> Result<&TrendSeries, CoreError> {
        self.series
            .get(flavor)
            .ok_or_else(|| CoreError::not_found("flavor", flavor))
    }

    /// Most recent date across every flavor
    pub fn latest_date(&self) -> Result<NaiveDate, CoreError> {
        self.latest.ok_or(CoreError::EmptyData {
            operation: "latest date",
        })
    }

    /// Every observation recorded on `date`, in flavor order
    pub fn all_at_date(&self, date: NaiveDate) -> Vec<Observation> {
        self.series
            .values()
            .filter_map(|s| {
                s.mentions_on(date).map(|mentions| Observation {
                    flavor: s.flavor.clone(),
                    date,
                    mentions,
                })
            })
            .collect()
    }

    /// Known flavor names, sorted
    pub fn flavors(&self) -> impl Iterator<Item = &str> {
        self.series.keys().map(String::as_str)
    }

    pub fn contains(&self, flavor: &str) -> bool {
        self.series.contains_key(flavor)
    }

    pub fn flavor_count(&self) -> usize {
        self.series.len()
    }

    pub fn observation_count(&self) -> usize {
        self.observation_count
    }

    pub fn is_empty(&self) -> bool {
        self.observation_count == 0
    }

    /// Register a flavor with no observations
    #[cfg(test)]
    pub(crate) fn with_empty_series(mut self, flavor: &str) -> Self {
        self.series.insert(
            flavor.to_string(),
            TrendSeries {
                flavor: flavor.to_string(),
                points: Vec::new(),
            },
        );
        self
    }
}
