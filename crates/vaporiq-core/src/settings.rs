//! Dashboard settings loaded from TOML
//!
//! Every field has a default, so an absent file or an empty table yields the
//! stock dashboard behaviour. Per-flavor growth and the featured/exclusive
//! flavors live here rather than in code.

use crate::error::CoreError;
use crate::mood::Mood;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::debug;

const HOUSE_FLAVOR: &str = "Custard Kunafa";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub forecast: ForecastSettings,
    pub drops: DropsSettings,
    pub quiz: QuizSettings,
    pub mood: MoodSettings,
}

/// Projection parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForecastSettings {
    /// Days projected past the last observation
    pub horizon_days: u32,
    /// Growth per projected day for flavors without an override
    pub default_boost: u64,
    /// Per-flavor growth overrides
    pub flavor_boost: BTreeMap<String, u64>,
    /// Flavor preselected when none is given
    pub featured_flavor: String,
}

impl Default for ForecastSettings {
    fn default() -> Self {
        Self {
            horizon_days: 14,
            default_boost: 1,
            flavor_boost: BTreeMap::from([(HOUSE_FLAVOR.to_string(), 2)]),
            featured_flavor: HOUSE_FLAVOR.to_string(),
        }
    }
}

impl ForecastSettings {
    /// Growth multiplier for `flavor`, falling back to `default_boost`
    pub fn boost_for(&self, flavor: &str) -> u64 {
        self.flavor_boost
            .get(flavor)
            .copied()
            .unwrap_or(self.default_boost)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DropsSettings {
    pub leaderboard_size: usize,
    pub exclusive_flavor: Option<String>,
}

impl Default for DropsSettings {
    fn default() -> Self {
        Self {
            leaderboard_size: 5,
            exclusive_flavor: Some(HOUSE_FLAVOR.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuizSettings {
    pub clusters: usize,
    pub max_iterations: usize,
    /// Used for any cluster without its own entry
    pub recommendations: Vec<String>,
    /// Keyed by cluster index
    pub cluster_recommendations: BTreeMap<String, Vec<String>>,
}

impl Default for QuizSettings {
    fn default() -> Self {
        Self {
            clusters: 3,
            max_iterations: 100,
            recommendations: vec![
                HOUSE_FLAVOR.to_string(),
                "Mango Breeze".to_string(),
                "Icy Mint".to_string(),
            ],
            cluster_recommendations: BTreeMap::new(),
        }
    }
}

impl QuizSettings {
    pub fn recommendations_for(&self, cluster: usize) -> &[String] {
        self.cluster_recommendations
            .get(&cluster.to_string())
            .unwrap_or(&self.recommendations)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MoodSettings {
    pub default_flavor: String,
    /// Keyed by mood name
    pub flavors: BTreeMap<String, String>,
}

impl Default for MoodSettings {
    fn default() -> Self {
        Self {
            default_flavor: "Berry Blast".to_string(),
            flavors: BTreeMap::from([("Stressed".to_string(), HOUSE_FLAVOR.to_string())]),
        }
    }
}

impl MoodSettings {
    /// Blend for `mood`, falling back to `default_flavor`
    pub fn flavor_for(&self, mood: Mood) -> &str {
        self.flavors
            .iter()
            .find(|(name, _)| name.parse::<Mood>().ok() == Some(mood))
            .map(|(_, flavor)| flavor.as_str())
            .unwrap_or(&self.default_flavor)
    }
}

impl Settings {
    /// Parse settings from TOML text and validate them
    pub fn from_toml(content: &str) -> Result<Self, CoreError> {
        let settings: Settings = toml::from_str(content).map_err(|e| CoreError::InvalidConfig {
            message: e.to_string(),
        })?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a TOML file
    pub fn load(path: &Path) -> Result<Self, CoreError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                CoreError::FileNotFound {
                    path: path.to_path_buf(),
                }
            } else {
                CoreError::FileRead {
                    path: path.to_path_buf(),
                    source: e,
                }
            }
        })?;
        let settings = Self::from_toml(&content)?;
        debug!(path = %path.display(), "Settings loaded");
        Ok(settings)
    }

    /// Like [`Settings::load`], but a missing file means defaults
    pub fn load_or_default(path: &Path) -> Result<Self, CoreError> {
        match Self::load(path) {
            Err(CoreError::FileNotFound { .. }) => {
                debug!(path = %path.display(), "No settings file, using defaults");
                Ok(Self::default())
            }
            other => other,
        }
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        let invalid = |message: &str| {
            Err(CoreError::InvalidConfig {
                message: message.to_string(),
            })
        };

        if self.forecast.horizon_days == 0 {
            return invalid("forecast.horizon_days must be at least 1");
        }
        if self.drops.leaderboard_size == 0 {
            return invalid("drops.leaderboard_size must be at least 1");
        }
        if self.quiz.clusters == 0 {
            return invalid("quiz.clusters must be at least 1");
        }
        if self.quiz.max_iterations == 0 {
            return invalid("quiz.max_iterations must be at least 1");
        }
        if let Some(key) = self
            .quiz
            .cluster_recommendations
            .keys()
            .find(|k| !is_cluster_index(k))
        {
            return invalid(&format!(
                "quiz.cluster_recommendations: '{key}' is not a cluster index"
            ));
        }
        if let Some(key) = self
            .mood
            .flavors
            .keys()
            .find(|k| k.parse::<Mood>().is_err())
        {
            return invalid(&format!("mood.flavors: unknown mood '{key}'"));
        }
        Ok(())
    }
}

/// Keys must be written the way `recommendations_for` looks them up,
/// so "01" or "+1" would never match
fn is_cluster_index(key: &str) -> bool {
    key.parse::<usize>().is_ok_and(|n| n.to_string() == key)
}
