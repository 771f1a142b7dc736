//! Engine configuration.
//!
//! Every field has a default, so a partial JSON object (or an empty one) is a
//! valid config.

use serde::{Deserialize, Serialize};

use crate::mask::REDACTION_CHAR;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RaffleConfig {
    /// Character substituted for hidden characters by the masking filter.
    pub redaction_char: char,
    /// Delay between rolling preview frames.
    pub preview_interval_ms: u32,
    /// Total length of the rolling preview before the result is revealed.
    pub preview_duration_ms: u32,
    /// Largest `quantity` a single draw may request.
    pub max_pool_size: u64,
}

impl Default for RaffleConfig {
    fn default() -> Self {
        Self {
            redaction_char: REDACTION_CHAR,
            preview_interval_ms: 100,
            preview_duration_ms: 2000,
            max_pool_size: 1_000_000,
        }
    }
}

impl RaffleConfig {
    pub fn from_json(s: &str) -> serde_json::Result<Self> {
        serde_json::from_str(s)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
