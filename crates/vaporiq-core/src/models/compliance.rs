//! Per-country age and nicotine limits from `compliance_rules.csv`

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplianceRule {
    #[serde(rename = "Country")]
    pub country: String,
    #[serde(rename = "MinAge")]
    pub min_age: u32,
    #[serde(rename = "MaxNicotine_mgml")]
    pub max_nicotine_mgml: f64,
}
