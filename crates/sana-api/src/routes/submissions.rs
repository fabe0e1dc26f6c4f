use axum::extract::{Path, Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use sana_catalog::get_questionnaire;
use sana_core::models::answer::{AnswerEntry, AnswerStore, AnswerValue};
use sana_core::models::question::QuestionKind;
use sana_core::models::risk::RiskCategory;
use sana_core::models::submission::{RecommendationRecord, RiskPrediction, Submission, SubmissionStatus};
use sana_engine::Session;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct CreateSubmission {
    pub patient_ref: String,
    pub questionnaire_id: String,
    pub answers: Vec<AnswerEntry>,
}

#[derive(Serialize)]
pub struct SubmissionOutcome {
    pub submission_id: Uuid,
    pub score: u8,
    pub category: RiskCategory,
    pub recommendations: Vec<RecommendationRecord>,
}

/// Replay the submitted answers through an assessment session and persist
/// the completed result. Unanswered sliders fall back to their minimum; any
/// other unanswered question on the taken path is a 400.
pub async fn create_submission(
    State(state): State<AppState>,
    Json(req): Json<CreateSubmission>,
) -> Result<Json<SubmissionOutcome>, ApiError> {
    let questionnaire = get_questionnaire(&req.questionnaire_id).ok_or_else(|| {
        ApiError::NotFound(format!("questionnaire not found: {}", req.questionnaire_id))
    })?;
    let catalog = questionnaire.catalog();

    let provided: AnswerStore = req
        .answers
        .into_iter()
        .map(|e| (e.question_id, e.value))
        .collect();

    let mut session = Session::start(questionnaire.id(), catalog);
    while let Some(question) = session.current_question() {
        let value = match provided.get(&question.id) {
            Some(value) => value.clone(),
            None if question.kind == QuestionKind::Slider => {
                AnswerValue::Number(question.min.unwrap_or(0.0))
            }
            None => {
                return Err(ApiError::BadRequest(format!(
                    "missing answer for question '{}'",
                    question.id
                )));
            }
        };
        session.submit_answer(value)?;
    }

    let completed = session.finish(req.patient_ref)?;
    let outcome = SubmissionOutcome {
        submission_id: completed.submission.id,
        score: completed.prediction.score,
        category: completed.prediction.category,
        recommendations: completed.recommendations.clone(),
    };

    state
        .store
        .put_assessment(
            completed.submission,
            completed.prediction,
            completed.recommendations,
        )
        .await?;

    Ok(Json(outcome))
}

#[derive(Deserialize)]
pub struct ListParams {
    pub patient_ref: Option<String>,
}

pub async fn list_submissions(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Json<Vec<Submission>> {
    Json(state.store.list_submissions(params.patient_ref.as_deref()).await)
}

pub async fn get_submission(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Submission>, ApiError> {
    Ok(Json(state.store.get_submission(id).await?))
}

pub async fn get_prediction(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<RiskPrediction>, ApiError> {
    Ok(Json(state.store.get_prediction(id).await?))
}

pub async fn get_recommendations(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<RecommendationRecord>>, ApiError> {
    Ok(Json(state.store.get_recommendations(id).await?))
}

#[derive(Deserialize)]
pub struct UpdateStatus {
    pub status: SubmissionStatus,
}

pub async fn update_status(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateStatus>,
) -> Result<Json<Submission>, ApiError> {
    Ok(Json(state.store.set_status(id, req.status).await?))
}
