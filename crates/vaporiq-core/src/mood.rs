//! MoodSync: pick a blend for the current mood

use crate::error::CoreError;
use crate::settings::MoodSettings;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mood {
    Energised,
    Neutral,
    Stressed,
    Tired,
}

impl Mood {
    pub const ALL: [Mood; 4] = [Mood::Energised, Mood::Neutral, Mood::Stressed, Mood::Tired];

    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Energised => "Energised",
            Mood::Neutral => "Neutral",
            Mood::Stressed => "Stressed",
            Mood::Tired => "Tired",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mood {
    type Err = CoreError;

    /// Case-insensitive; "energized" is accepted too
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "energised" | "energized" => Ok(Mood::Energised),
            "neutral" => Ok(Mood::Neutral),
            "stressed" => Ok(Mood::Stressed),
            "tired" => Ok(Mood::Tired),
            _ => Err(CoreError::not_found("mood", s)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlendSuggestion {
    pub mood: Mood,
    pub hour: u32,
    pub flavor: String,
}

/// Suggest a blend for `mood` at `hour` (0-23)
pub fn suggest_blend(
    mood: Mood,
    hour: u32,
    settings: &MoodSettings,
) -> Result<BlendSuggestion, CoreError> {
    if hour > 23 {
        return Err(CoreError::data(format!("hour {hour} is outside 0-23")));
    }

    Ok(BlendSuggestion {
        mood,
        hour,
        flavor: settings.flavor_for(mood).to_string(),
    })
}
