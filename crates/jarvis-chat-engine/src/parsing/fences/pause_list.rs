use serde::{Deserialize, Serialize};

use super::{PayloadError, parse_json_array};

/// One ad the assistant recommends pausing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PauseItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ad_id: Option<String>,
    pub ad_name: String,
    pub campaign: String,
    pub adset: String,
    /// May be an explicit `null`.
    #[serde(default)]
    pub days_running: Option<u32>,
    pub spend_30d: f64,
    pub leads_30d: u64,
    /// May be an explicit `null` (no leads, so no cost per lead).
    #[serde(default)]
    pub cpl_30d: Option<f64>,
    pub reason: String,
}

/// Parses a `pause_list` payload: a JSON array of [`PauseItem`]s.
pub fn parse(payload: &str) -> Result<Vec<PauseItem>, PayloadError> {
    parse_json_array(payload)
}
