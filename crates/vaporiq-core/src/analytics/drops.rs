//! Limited drops: today's leaderboard plus the exclusive flavor

use chrono::NaiveDate;
use serde::Serialize;

use super::forecasting::ForecastEngine;
use crate::error::CoreError;
use crate::models::RankedFlavor;
use crate::settings::DropsSettings;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LimitedDrops {
    /// Latest date in the dataset ("today")
    pub date: NaiveDate,
    pub leaderboard: Vec<RankedFlavor>,
    pub exclusive: Option<String>,
}

impl LimitedDrops {
    pub fn compute(
        engine: &ForecastEngine<'_>,
        settings: &DropsSettings,
    ) -> Result<Self, CoreError> {
        let date = engine.store().latest_date()?;
        let leaderboard = engine.top_n(settings.leaderboard_size)?;

        Ok(Self {
            date,
            leaderboard,
            exclusive: settings.exclusive_flavor.clone(),
        })
    }
}
