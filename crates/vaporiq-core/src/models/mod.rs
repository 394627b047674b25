//! Data models for vaporiq

pub mod compliance;
pub mod taste;
pub mod trend;

pub use compliance::ComplianceRule;
pub use taste::{TasteProfile, MAX_AFFINITY};
pub use trend::{
    ExtendedSeries, ForecastPoint, Observation, PointKind, RankedFlavor, TrendRecord, TrendSeries,
};
