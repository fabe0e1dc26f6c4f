use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A single question in a questionnaire. Immutable once the catalog is
/// loaded; identified by `id`.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Question {
    pub id: String,
    pub text: String,
    pub description: Option<String>,
    pub kind: QuestionKind,
    /// Present (non-empty) for choice kinds, empty otherwise.
    #[serde(default)]
    pub options: Vec<QuestionOption>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub unit: Option<String>,
    /// Static successor; `None` means end of questionnaire unless a branch
    /// applies.
    pub next_question_id: Option<String>,
    /// Per-option successor overrides, keyed by option value.
    #[serde(default)]
    pub branches: HashMap<String, String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum QuestionKind {
    SingleChoice,
    MultipleChoice,
    Number,
    Slider,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct QuestionOption {
    pub id: String,
    pub text: String,
    pub value: String,
}

impl Question {
    /// Look up a declared option by its value.
    pub fn option_by_value(&self, value: &str) -> Option<&QuestionOption> {
        self.options.iter().find(|o| o.value == value)
    }

    pub fn is_choice(&self) -> bool {
        matches!(
            self.kind,
            QuestionKind::SingleChoice | QuestionKind::MultipleChoice
        )
    }
}
