use serde::{Deserialize, Serialize};
use ts_rs::TS;

use sana_core::factors;
use sana_core::models::answer::AnswerStore;
use sana_core::models::risk::{RiskCategory, RiskResult};

/// Point values and category thresholds for the weighted-sum risk score.
///
/// These are product policy, not engine logic: they get retuned, so every
/// value is a named, overridable field rather than an inlined number.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoringPolicy {
    pub age_45_plus: u32,
    pub age_35_to_44: u32,
    /// BMI >= 30.
    pub bmi_obese: u32,
    /// BMI in [25, 30).
    pub bmi_overweight: u32,
    pub family_history: u32,
    pub activity_sedentary: u32,
    pub activity_light: u32,
    pub diet_poor: u32,
    pub diet_fair: u32,
    /// Per selected symptom, excluding "none".
    pub per_symptom: u32,
    pub smoking_current: u32,
    pub smoking_former: u32,
    /// Stress >= 8 on the 1–10 scale.
    pub stress_high: u32,
    /// Stress 6–7.
    pub stress_elevated: u32,
    pub sleep_poor: u32,
    pub sleep_fair: u32,

    /// Scores below this are low risk.
    pub moderate_threshold: u32,
    /// Scores at or above this are critical.
    pub critical_threshold: u32,
    /// Stress level at or above which a stress-management recommendation
    /// fires.
    pub stress_advice_floor: f64,
}

impl Default for ScoringPolicy {
    fn default() -> Self {
        Self {
            age_45_plus: 20,
            age_35_to_44: 10,
            bmi_obese: 25,
            bmi_overweight: 15,
            family_history: 15,
            activity_sedentary: 15,
            activity_light: 10,
            diet_poor: 15,
            diet_fair: 10,
            per_symptom: 5,
            smoking_current: 10,
            smoking_former: 5,
            stress_high: 10,
            stress_elevated: 5,
            sleep_poor: 10,
            sleep_fair: 5,
            moderate_threshold: 30,
            critical_threshold: 70,
            stress_advice_floor: 7.0,
        }
    }
}

impl ScoringPolicy {
    pub fn categorize(&self, score: u32) -> RiskCategory {
        if score >= self.critical_threshold {
            RiskCategory::Critical
        } else if score >= self.moderate_threshold {
            RiskCategory::Moderate
        } else {
            RiskCategory::Low
        }
    }
}

/// Body mass index from the weight (kg) and height (cm) answers.
pub fn bmi(answers: &AnswerStore) -> Option<f64> {
    let weight = answers.number(factors::WEIGHT)?;
    let height_m = answers.number(factors::HEIGHT)? / 100.0;
    if height_m <= 0.0 {
        return None;
    }
    Some(weight / (height_m * height_m))
}

/// Compute the risk score and category for a completed answer store.
///
/// Total and deterministic: a missing or malformed factor contributes zero
/// points, it never fails. The accumulated sum is clamped to 100.
pub fn risk_score(answers: &AnswerStore, policy: &ScoringPolicy) -> RiskResult {
    let mut points: u32 = 0;

    if let Some(age) = answers.number(factors::AGE) {
        if age >= 45.0 {
            points += policy.age_45_plus;
        } else if age >= 35.0 {
            points += policy.age_35_to_44;
        }
    }

    if let Some(bmi) = bmi(answers) {
        if bmi >= 30.0 {
            points += policy.bmi_obese;
        } else if bmi >= 25.0 {
            points += policy.bmi_overweight;
        }
    }

    if answers.text(factors::FAMILY_HISTORY) == Some(factors::YES) {
        points += policy.family_history;
    }

    match answers.text(factors::ACTIVITY_LEVEL) {
        Some(factors::activity::SEDENTARY) => points += policy.activity_sedentary,
        Some(factors::activity::LIGHT) => points += policy.activity_light,
        _ => {}
    }

    match answers.text(factors::DIET_HABITS) {
        Some(factors::diet::POOR) => points += policy.diet_poor,
        Some(factors::diet::FAIR) => points += policy.diet_fair,
        _ => {}
    }

    if let Some(symptoms) = answers.multi(factors::SYMPTOMS) {
        let count = symptoms
            .iter()
            .filter(|s| s.as_str() != factors::SYMPTOM_NONE)
            .count() as u32;
        points += count * policy.per_symptom;
    }

    match answers.text(factors::SMOKING) {
        Some(factors::smoking::CURRENT) => points += policy.smoking_current,
        Some(factors::smoking::FORMER) => points += policy.smoking_former,
        _ => {}
    }

    if let Some(stress) = answers.number(factors::STRESS_LEVEL) {
        if stress >= 8.0 {
            points += policy.stress_high;
        } else if stress >= 6.0 {
            points += policy.stress_elevated;
        }
    }

    match answers.text(factors::SLEEP_QUALITY) {
        Some(factors::sleep::POOR) => points += policy.sleep_poor,
        Some(factors::sleep::FAIR) => points += policy.sleep_fair,
        _ => {}
    }

    let score = points.min(100) as u8;
    RiskResult {
        score,
        category: policy.categorize(points.min(100)),
    }
}
