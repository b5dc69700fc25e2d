use serde::{Deserialize, Serialize};

pub const DEFAULT_BANK_RATE: f64 = 6.5;

/// External parameters consumed by the field validators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnderwritingConfig {
    /// Market base rate in percent; rates under `bank_rate + 2` are flagged below market.
    pub bank_rate: f64,
}

impl Default for UnderwritingConfig {
    fn default() -> Self {
        Self {
            bank_rate: DEFAULT_BANK_RATE,
        }
    }
}
