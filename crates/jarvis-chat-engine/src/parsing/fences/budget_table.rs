use serde::{Deserialize, Serialize};

use super::{PayloadError, parse_json_array};

/// One row of a budget reallocation table.
///
/// Every value arrives pre-formatted from the backend and is displayed as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetRow {
    #[serde(rename = "Platform")]
    pub platform: String,
    #[serde(rename = "Campaign/Tactic")]
    pub campaign_tactic: String,
    #[serde(rename = "Current Spend")]
    pub current_spend: String,
    #[serde(rename = "Recommended Spend")]
    pub recommended_spend: String,
    #[serde(rename = "Delta (%)")]
    pub delta: String,
    #[serde(rename = "Reasoning")]
    pub reasoning: String,
}

impl BudgetRow {
    /// Column names in display order, matching the JSON keys.
    pub const COLUMNS: [&'static str; 6] = [
        "Platform",
        "Campaign/Tactic",
        "Current Spend",
        "Recommended Spend",
        "Delta (%)",
        "Reasoning",
    ];

    /// Values in [`Self::COLUMNS`] order.
    pub fn values(&self) -> [&str; 6] {
        [
            &self.platform,
            &self.campaign_tactic,
            &self.current_spend,
            &self.recommended_spend,
            &self.delta,
            &self.reasoning,
        ]
    }
}

/// Parses a `budget_table` payload: a JSON array of [`BudgetRow`]s.
pub fn parse(payload: &str) -> Result<Vec<BudgetRow>, PayloadError> {
    parse_json_array(payload)
}
