use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Derived risk summary. Always recomputed from a complete answer store,
/// never mutated independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RiskResult {
    /// Integer risk score in [0, 100].
    pub score: u8,
    pub category: RiskCategory,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum RiskCategory {
    Low,
    Moderate,
    Critical,
}
