use std::collections::HashMap;

use sana_core::factors;
use sana_core::models::question::{Question, QuestionKind, QuestionOption};

use crate::catalog::QuestionCatalog;
use crate::Questionnaire;

/// Diabetes risk assessment: demographics, BMI inputs, history, lifestyle,
/// symptoms, and wellbeing. Current smokers get one follow-up question; all
/// paths end at sleep quality.
pub struct DiabetesRisk;

impl Questionnaire for DiabetesRisk {
    fn id(&self) -> &str {
        "diabetes-risk"
    }

    fn name(&self) -> &str {
        "Diabetes Risk Assessment"
    }

    fn description(&self) -> &str {
        "A short questionnaire estimating your risk of developing type 2 diabetes."
    }

    fn catalog(&self) -> &QuestionCatalog {
        static CATALOG: std::sync::LazyLock<QuestionCatalog> = std::sync::LazyLock::new(|| {
            let number = |id: &str, text: &str, min: f64, max: f64, unit: &str, next: &str| {
                Question {
                    id: id.to_string(),
                    text: text.to_string(),
                    description: None,
                    kind: QuestionKind::Number,
                    options: Vec::new(),
                    min: Some(min),
                    max: Some(max),
                    unit: Some(unit.to_string()),
                    next_question_id: Some(next.to_string()),
                    branches: HashMap::new(),
                }
            };

            let options = |id: &str, values: &[(&str, &str)]| -> Vec<QuestionOption> {
                values
                    .iter()
                    .map(|(value, text)| QuestionOption {
                        id: format!("{id}-{value}"),
                        text: text.to_string(),
                        value: value.to_string(),
                    })
                    .collect()
            };

            let choice = |id: &str, text: &str, values: &[(&str, &str)], next: Option<&str>| {
                Question {
                    id: id.to_string(),
                    text: text.to_string(),
                    description: None,
                    kind: QuestionKind::SingleChoice,
                    options: options(id, values),
                    min: None,
                    max: None,
                    unit: None,
                    next_question_id: next.map(str::to_string),
                    branches: HashMap::new(),
                }
            };

            let mut smoking = choice(
                factors::SMOKING,
                "Do you smoke?",
                &[
                    (factors::smoking::NEVER, "Never smoked"),
                    (factors::smoking::FORMER, "Used to, but quit"),
                    (factors::smoking::CURRENT, "Yes, currently"),
                ],
                Some(factors::STRESS_LEVEL),
            );
            smoking.branches.insert(
                factors::smoking::CURRENT.to_string(),
                factors::CIGARETTES_PER_DAY.to_string(),
            );

            let symptoms = Question {
                id: factors::SYMPTOMS.to_string(),
                text: "Have you noticed any of these symptoms recently?".to_string(),
                description: Some("Select all that apply.".to_string()),
                kind: QuestionKind::MultipleChoice,
                options: options(
                    factors::SYMPTOMS,
                    &[
                        ("frequent-thirst", "Unusual thirst"),
                        ("frequent-urination", "Frequent urination"),
                        ("fatigue", "Unexplained fatigue"),
                        ("blurred-vision", "Blurred vision"),
                        ("slow-healing", "Slow-healing cuts or bruises"),
                        (factors::SYMPTOM_NONE, "None of the above"),
                    ],
                ),
                min: None,
                max: None,
                unit: None,
                next_question_id: Some(factors::SMOKING.to_string()),
                branches: HashMap::new(),
            };

            let stress = Question {
                id: factors::STRESS_LEVEL.to_string(),
                text: "How would you rate your average stress level?".to_string(),
                description: Some("1 is very relaxed, 10 is constantly stressed.".to_string()),
                kind: QuestionKind::Slider,
                options: Vec::new(),
                min: Some(1.0),
                max: Some(10.0),
                unit: None,
                next_question_id: Some(factors::SLEEP_QUALITY.to_string()),
                branches: HashMap::new(),
            };

            let questions = vec![
                number(factors::AGE, "How old are you?", 18.0, 100.0, "years", factors::WEIGHT),
                number(factors::WEIGHT, "What is your weight?", 30.0, 250.0, "kg", factors::HEIGHT),
                number(factors::HEIGHT, "What is your height?", 100.0, 230.0, "cm", factors::FAMILY_HISTORY),
                choice(
                    factors::FAMILY_HISTORY,
                    "Has a parent or sibling been diagnosed with diabetes?",
                    &[
                        (factors::YES, "Yes"),
                        (factors::NO, "No"),
                        ("unknown", "I don't know"),
                    ],
                    Some(factors::ACTIVITY_LEVEL),
                ),
                choice(
                    factors::ACTIVITY_LEVEL,
                    "How physically active are you?",
                    &[
                        (factors::activity::SEDENTARY, "Mostly sitting, little exercise"),
                        (factors::activity::LIGHT, "Light activity a few times a week"),
                        (factors::activity::MODERATE, "Regular moderate exercise"),
                        (factors::activity::ACTIVE, "Very active most days"),
                    ],
                    Some(factors::DIET_HABITS),
                ),
                choice(
                    factors::DIET_HABITS,
                    "How would you describe your eating habits?",
                    &[
                        (factors::diet::POOR, "Mostly processed or fast food"),
                        (factors::diet::FAIR, "Mixed, could be better"),
                        (factors::diet::GOOD, "Mostly balanced meals"),
                        (factors::diet::EXCELLENT, "Balanced and portion-conscious"),
                    ],
                    Some(factors::SYMPTOMS),
                ),
                symptoms,
                smoking,
                number(
                    factors::CIGARETTES_PER_DAY,
                    "About how many cigarettes per day?",
                    1.0,
                    80.0,
                    "cigarettes",
                    factors::STRESS_LEVEL,
                ),
                stress,
                choice(
                    factors::SLEEP_QUALITY,
                    "How well do you usually sleep?",
                    &[
                        (factors::sleep::GOOD, "Well, most nights"),
                        (factors::sleep::FAIR, "It varies"),
                        (factors::sleep::POOR, "Poorly or too little"),
                    ],
                    None,
                ),
            ];

            QuestionCatalog::new(questions, factors::AGE)
                .expect("diabetes-risk catalog is internally consistent")
        });
        &CATALOG
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_loads_and_starts_at_age() {
        let catalog = DiabetesRisk.catalog();
        assert_eq!(catalog.start().id, factors::AGE);
        assert_eq!(catalog.len(), 11);
    }

    #[test]
    fn current_smokers_branch_to_follow_up() {
        let catalog = DiabetesRisk.catalog();
        let smoking = catalog.get(factors::SMOKING).unwrap();
        assert_eq!(
            smoking.branches.get(factors::smoking::CURRENT).map(String::as_str),
            Some(factors::CIGARETTES_PER_DAY)
        );
        assert!(catalog.get(factors::CIGARETTES_PER_DAY).is_some());
    }

    #[test]
    fn sleep_quality_is_terminal() {
        let catalog = DiabetesRisk.catalog();
        let sleep = catalog.get(factors::SLEEP_QUALITY).unwrap();
        assert!(sleep.next_question_id.is_none());
        assert!(sleep.branches.is_empty());
    }
}
