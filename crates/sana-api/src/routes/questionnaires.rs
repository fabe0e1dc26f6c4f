use axum::extract::Path;
use axum::Json;
use serde::Serialize;

use sana_catalog::{all_questionnaires, get_questionnaire};
use sana_core::models::question::Question;

use crate::error::ApiError;

#[derive(Serialize)]
pub struct QuestionnaireSummary {
    id: String,
    name: String,
    description: String,
}

#[derive(Serialize)]
pub struct QuestionnaireDetail {
    id: String,
    name: String,
    description: String,
    start_question_id: String,
    questions: Vec<Question>,
}

pub async fn list_questionnaires() -> Json<Vec<QuestionnaireSummary>> {
    let questionnaires: Vec<QuestionnaireSummary> = all_questionnaires()
        .iter()
        .map(|q| QuestionnaireSummary {
            id: q.id().to_string(),
            name: q.name().to_string(),
            description: q.description().to_string(),
        })
        .collect();
    Json(questionnaires)
}

pub async fn get_questionnaire_detail(
    Path(id): Path<String>,
) -> Result<Json<QuestionnaireDetail>, ApiError> {
    let questionnaire = get_questionnaire(&id)
        .ok_or_else(|| ApiError::NotFound(format!("questionnaire not found: {id}")))?;

    let catalog = questionnaire.catalog();
    Ok(Json(QuestionnaireDetail {
        id: questionnaire.id().to_string(),
        name: questionnaire.name().to_string(),
        description: questionnaire.description().to_string(),
        start_question_id: catalog.start_id().to_string(),
        questions: catalog.questions().to_vec(),
    }))
}
