//! Analytics over the flavor trend data
//!
//! Naive forecasting, the daily leaderboard, limited drops, trend summaries,
//! and the taste clustering behind the quiz.

pub mod clustering;
pub mod drops;
pub mod forecasting;
pub mod trends;

#[cfg(test)]
mod tests;

pub use clustering::{ClusterAssigner, KMeans};
pub use drops::LimitedDrops;
pub use forecasting::ForecastEngine;
pub use trends::{summarize_flavors, FlavorSummary, TrendDirection};
