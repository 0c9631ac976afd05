use serde::{Deserialize, Serialize};

use super::defaults;

/// Proposal report settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// ISO 4217 code the milestone amounts are denominated in.
    pub currency: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            currency: defaults::DEFAULT_CURRENCY.to_string(),
        }
    }
}
