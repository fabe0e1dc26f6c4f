use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One generated recommendation. List order is display order — clinical
/// urgency items surface before lifestyle items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Recommendation {
    pub content: String,
    pub kind: RecommendationKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum RecommendationKind {
    Lifestyle,
    Clinical,
}
