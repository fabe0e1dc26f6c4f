use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

use sana_core::models::answer::AnswerValue;
use sana_core::models::question::{Question, QuestionKind};

/// Why an answer was rejected. Recoverable — the caller re-prompts the same
/// question and the answer store is left untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, Error)]
#[serde(tag = "reason", rename_all = "snake_case")]
#[ts(export)]
pub enum ValidationFailure {
    #[error("an answer is required")]
    Required,

    #[error("'{raw}' is not a number")]
    NotANumber { raw: String },

    #[error("{value} is outside the allowed range [{min}, {max}]")]
    OutOfRange { value: f64, min: f64, max: f64 },
}

/// Check a candidate answer against its question's rules. Returns the first
/// applicable failure; no side effects.
pub fn validate(question: &Question, value: &AnswerValue) -> Result<(), ValidationFailure> {
    match question.kind {
        QuestionKind::SingleChoice => match value {
            AnswerValue::Text(s) if !s.trim().is_empty() => Ok(()),
            _ => Err(ValidationFailure::Required),
        },
        QuestionKind::MultipleChoice => match value {
            AnswerValue::MultiText(selected) if !selected.is_empty() => Ok(()),
            _ => Err(ValidationFailure::Required),
        },
        QuestionKind::Number => validate_number(question, value),
        QuestionKind::Slider => validate_slider(question, value),
    }
}

fn validate_number(question: &Question, value: &AnswerValue) -> Result<(), ValidationFailure> {
    let parsed = match value {
        AnswerValue::Number(n) => *n,
        AnswerValue::Text(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return Err(ValidationFailure::Required);
            }
            trimmed
                .parse()
                .map_err(|_| ValidationFailure::NotANumber { raw: s.clone() })?
        }
        AnswerValue::MultiText(_) => return Err(ValidationFailure::Required),
    };

    check_bounds(question, parsed)
}

/// Sliders always carry a value (the caller defaults to `min`), so they are
/// never `Required`-invalid; only shape and range can fail.
fn validate_slider(question: &Question, value: &AnswerValue) -> Result<(), ValidationFailure> {
    let parsed = value.as_number().ok_or_else(|| ValidationFailure::NotANumber {
        raw: raw_text(value),
    })?;

    if parsed.fract() != 0.0 {
        let (min, max) = (
            question.min.unwrap_or(f64::NEG_INFINITY),
            question.max.unwrap_or(f64::INFINITY),
        );
        return Err(ValidationFailure::OutOfRange {
            value: parsed,
            min,
            max,
        });
    }

    check_bounds(question, parsed)
}

fn check_bounds(question: &Question, value: f64) -> Result<(), ValidationFailure> {
    // Range is only enforced when both bounds are declared.
    if let (Some(min), Some(max)) = (question.min, question.max)
        && (value < min || value > max)
    {
        return Err(ValidationFailure::OutOfRange { value, min, max });
    }
    Ok(())
}

fn raw_text(value: &AnswerValue) -> String {
    match value {
        AnswerValue::Text(s) => s.clone(),
        AnswerValue::Number(n) => n.to_string(),
        AnswerValue::MultiText(v) => v.join(", "),
    }
}
