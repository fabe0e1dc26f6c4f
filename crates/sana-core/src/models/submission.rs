use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::answer::AnswerStore;
use super::recommendation::RecommendationKind;
use super::risk::RiskCategory;

/// A completed assessment as handed to the persistence layer: the raw
/// answer store plus an opaque patient reference.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Submission {
    pub id: Uuid,
    /// Opaque reference to the patient record in the external identity
    /// system; never interpreted here.
    pub patient_ref: String,
    pub questionnaire_id: String,
    pub answers: AnswerStore,
    pub status: SubmissionStatus,
    pub created_at: jiff::Timestamp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum SubmissionStatus {
    Completed,
    /// A clinician has looked at the submission in the doctor portal.
    Reviewed,
}

/// The scored outcome for one submission.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RiskPrediction {
    pub id: Uuid,
    pub submission_id: Uuid,
    pub score: u8,
    pub category: RiskCategory,
    pub created_at: jiff::Timestamp,
}

/// One persisted recommendation row for a submission.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RecommendationRecord {
    pub id: Uuid,
    pub submission_id: Uuid,
    pub content: String,
    pub kind: RecommendationKind,
}
