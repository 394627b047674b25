//! Naive flavor forecasting and the daily leaderboard
//!
//! Projection is a straight line anchored at the last observed value:
//! day `i` after the last observation gets `last + i * boost` mentions.
//! No smoothing, no seasonality; identical inputs give identical output.

use chrono::Days;
use tracing::debug;

use crate::error::CoreError;
use crate::models::{ExtendedSeries, ForecastPoint, RankedFlavor};
use crate::settings::ForecastSettings;
use crate::store::TrendStore;

/// Read-only view over a [`TrendStore`] that produces projections and rankings
#[derive(Debug, Clone, Copy)]
pub struct ForecastEngine<'a> {
    store: &'a TrendStore,
}

impl<'a> ForecastEngine<'a> {
    pub fn new(store: &'a TrendStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &'a TrendStore {
        self.store
    }

    /// Append `horizon_days` projected points to the history of `flavor`
    ///
    /// # Errors
    /// - `NotFound` if the flavor is unknown
    /// - `InsufficientData` if it has no observations
    /// - `InvalidArgument` if `horizon_days` is 0 or the dates overflow
    pub fn project(
        &self,
        flavor: &str,
        horizon_days: u32,
        boost: u64,
    ) -> Result<ExtendedSeries, CoreError> {
        if horizon_days == 0 {
            return Err(CoreError::invalid_argument(
                "horizon must be at least 1 day",
            ));
        }

        let series = self.store.series(flavor)?;
        let last = *series.last().ok_or_else(|| CoreError::InsufficientData {
            flavor: flavor.to_string(),
        })?;

        let mut points = Vec::with_capacity(series.len() + horizon_days as usize);
        points.extend_from_slice(&series.points);

        for i in 1..=u64::from(horizon_days) {
            let date = last.date.checked_add_days(Days::new(i)).ok_or_else(|| {
                CoreError::invalid_argument(format!(
                    "projection overflows the calendar after {}",
                    last.date
                ))
            })?;
            let mentions = last.mentions.saturating_add(i.saturating_mul(boost));
            points.push(ForecastPoint::new(date, mentions));
        }

        debug!(flavor, horizon_days, boost, anchor = %last.date, "Projected flavor trend");

        let flavor = series.flavor.clone();
        Ok(ExtendedSeries::new(flavor, points, series.len()))
    }

    /// Project using the configured horizon and this flavor's boost
    pub fn project_with(
        &self,
        flavor: &str,
        settings: &ForecastSettings,
    ) -> Result<ExtendedSeries, CoreError> {
        self.project(flavor, settings.horizon_days, settings.boost_for(flavor))
    }

    /// Top `n` flavors on the most recent date in the store
    ///
    /// Sorted by mentions descending, ties by flavor name ascending.
    ///
    /// # Errors
    /// - `EmptyData` if the store has no observations
    /// - `InvalidArgument` if `n` is 0
    pub fn top_n(&self, n: usize) -> Result<Vec<RankedFlavor>, CoreError> {
        if n == 0 {
            return Err(CoreError::invalid_argument(
                "leaderboard size must be at least 1",
            ));
        }

        let date = self.store.latest_date()?;
        let mut rows: Vec<RankedFlavor> = self
            .store
            .all_at_date(date)
            .into_iter()
            .map(|o| RankedFlavor {
                flavor: o.flavor,
                mentions: o.mentions,
            })
            .collect();

        rows.sort_by(|a, b| {
            b.mentions
                .cmp(&a.mentions)
                .then_with(|| a.flavor.cmp(&b.flavor))
        });
        rows.truncate(n);

        Ok(rows)
    }
}
