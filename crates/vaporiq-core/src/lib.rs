//! vaporiq-core - Core library for vaporiq
//!
//! Provides the flavor trend store, naive forecasting, leaderboards, and the
//! quiz, mood and compliance lookups behind the dashboard.

pub mod analytics;
pub mod compliance;
pub mod dataset;
pub mod error;
pub mod export;
pub mod models;
pub mod mood;
pub mod parsers;
pub mod quiz;
pub mod settings;
pub mod store;

pub use analytics::{ForecastEngine, LimitedDrops};
pub use compliance::{ComplianceBook, ComplianceVerdict};
pub use dataset::Dataset;
pub use error::{CoreError, LoadReport};
pub use export::{export_forecast_to_csv, export_forecast_to_json, export_leaderboard_to_csv};
pub use mood::{suggest_blend, BlendSuggestion, Mood};
pub use quiz::{QuizResult, TasteQuiz};
pub use settings::Settings;
pub use store::TrendStore;
