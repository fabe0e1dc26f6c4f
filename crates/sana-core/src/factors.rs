//! Well-known question ids and choice values for the diabetes risk factors.
//!
//! The catalog definition and the risk scorer both key off these, so they
//! live here rather than in either crate.

pub const AGE: &str = "age";
pub const WEIGHT: &str = "weight";
pub const HEIGHT: &str = "height";
pub const FAMILY_HISTORY: &str = "family-history";
pub const ACTIVITY_LEVEL: &str = "activity-level";
pub const DIET_HABITS: &str = "diet-habits";
pub const SYMPTOMS: &str = "symptoms";
pub const SMOKING: &str = "smoking";
pub const CIGARETTES_PER_DAY: &str = "cigarettes-per-day";
pub const STRESS_LEVEL: &str = "stress-level";
pub const SLEEP_QUALITY: &str = "sleep-quality";

pub const YES: &str = "yes";
pub const NO: &str = "no";

pub mod activity {
    pub const SEDENTARY: &str = "sedentary";
    pub const LIGHT: &str = "light";
    pub const MODERATE: &str = "moderate";
    pub const ACTIVE: &str = "active";
}

pub mod diet {
    pub const POOR: &str = "poor";
    pub const FAIR: &str = "fair";
    pub const GOOD: &str = "good";
    pub const EXCELLENT: &str = "excellent";
}

pub mod smoking {
    pub const NEVER: &str = "never";
    pub const FORMER: &str = "former";
    pub const CURRENT: &str = "current";
}

pub mod sleep {
    pub const POOR: &str = "poor";
    pub const FAIR: &str = "fair";
    pub const GOOD: &str = "good";
}

/// The "none of the above" symptom option, excluded from symptom counting.
pub const SYMPTOM_NONE: &str = "none";
