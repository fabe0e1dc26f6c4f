use sana_catalog::QuestionCatalog;
use sana_core::models::answer::AnswerStore;
use sana_core::models::question::{Question, QuestionOption};

/// Resolve the question that follows `current_id`.
///
/// A per-option branch wins when one matches: the explicitly selected option
/// if the caller supplied one, otherwise the stored answer for the current
/// question. With no matching branch the static successor applies. `None`
/// means the questionnaire is complete. Pure function of its inputs.
pub fn next_question<'c>(
    catalog: &'c QuestionCatalog,
    current_id: &str,
    selected: Option<&QuestionOption>,
    answers: &AnswerStore,
) -> Option<&'c Question> {
    let current = catalog.get(current_id)?;

    let branch_value = selected
        .map(|o| o.value.as_str())
        .or_else(|| answers.text(current_id));

    if let Some(value) = branch_value
        && let Some(target) = current.branches.get(value)
    {
        return catalog.get(target);
    }

    current
        .next_question_id
        .as_deref()
        .and_then(|id| catalog.get(id))
}
