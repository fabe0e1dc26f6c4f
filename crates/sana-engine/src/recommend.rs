use sana_core::factors;
use sana_core::models::answer::AnswerStore;
use sana_core::models::recommendation::{Recommendation, RecommendationKind};
use sana_core::models::risk::RiskCategory;

use crate::score::ScoringPolicy;

/// Generate recommendations for a completed assessment. Every matching rule
/// fires independently; clinical items come first, then lifestyle items in
/// rule order. The list may be empty.
pub fn recommend(
    answers: &AnswerStore,
    category: RiskCategory,
    policy: &ScoringPolicy,
) -> Vec<Recommendation> {
    let mut recommendations = Vec::new();

    match category {
        RiskCategory::Critical => recommendations.push(Recommendation {
            content: "Your answers indicate a high diabetes risk. Please book a consultation \
                      with your doctor within the next two weeks."
                .to_string(),
            kind: RecommendationKind::Clinical,
        }),
        RiskCategory::Moderate => recommendations.push(Recommendation {
            content: "Your risk is moderate. Schedule a routine blood glucose screening once \
                      a year with your doctor."
                .to_string(),
            kind: RecommendationKind::Clinical,
        }),
        RiskCategory::Low => {}
    }

    if answers.text(factors::ACTIVITY_LEVEL) == Some(factors::activity::SEDENTARY) {
        recommendations.push(Recommendation {
            content: "Start small with movement: a brisk 20–30 minute walk most days makes a \
                      measurable difference."
                .to_string(),
            kind: RecommendationKind::Lifestyle,
        });
    }

    if answers.text(factors::DIET_HABITS) == Some(factors::diet::POOR) {
        recommendations.push(Recommendation {
            content: "Shift your plate toward vegetables, whole grains, and lean protein, and \
                      cut back on sugary drinks and processed food."
                .to_string(),
            kind: RecommendationKind::Lifestyle,
        });
    }

    if answers
        .number(factors::STRESS_LEVEL)
        .is_some_and(|stress| stress >= policy.stress_advice_floor)
    {
        recommendations.push(Recommendation {
            content: "Your stress level is high. A daily wind-down practice such as breathing \
                      exercises, stretching, or a short walk can help."
                .to_string(),
            kind: RecommendationKind::Lifestyle,
        });
    }

    recommendations
}
