use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use sana_core::models::submission::{
    RecommendationRecord, RiskPrediction, Submission, SubmissionStatus,
};

use crate::error::StoreError;

/// In-memory submission store. Cheap to clone; all clones share one map.
#[derive(Clone, Default)]
pub struct MemoryStore {
    inner: Arc<RwLock<Inner>>,
}

#[derive(Default)]
struct Inner {
    submissions: HashMap<Uuid, Submission>,
    predictions: HashMap<Uuid, RiskPrediction>,
    recommendations: HashMap<Uuid, Vec<RecommendationRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Persist the three records of one completed assessment as a unit.
    /// Rejects a duplicate submission id without touching existing rows.
    pub async fn put_assessment(
        &self,
        submission: Submission,
        prediction: RiskPrediction,
        recommendations: Vec<RecommendationRecord>,
    ) -> Result<(), StoreError> {
        let mut inner = self.inner.write().await;
        if inner.submissions.contains_key(&submission.id) {
            return Err(StoreError::Conflict(submission.id));
        }

        tracing::info!(
            submission_id = %submission.id,
            score = prediction.score,
            recommendations = recommendations.len(),
            "storing completed assessment"
        );

        let id = submission.id;
        inner.submissions.insert(id, submission);
        inner.predictions.insert(id, prediction);
        inner.recommendations.insert(id, recommendations);
        Ok(())
    }

    pub async fn get_submission(&self, id: Uuid) -> Result<Submission, StoreError> {
        let inner = self.inner.read().await;
        inner
            .submissions
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    /// All submissions, optionally filtered by patient, newest first.
    pub async fn list_submissions(&self, patient_ref: Option<&str>) -> Vec<Submission> {
        let inner = self.inner.read().await;
        let mut submissions: Vec<Submission> = inner
            .submissions
            .values()
            .filter(|s| patient_ref.is_none_or(|p| s.patient_ref == p))
            .cloned()
            .collect();
        submissions.sort_by_key(|s| std::cmp::Reverse(s.created_at));
        submissions
    }

    pub async fn get_prediction(&self, submission_id: Uuid) -> Result<RiskPrediction, StoreError> {
        let inner = self.inner.read().await;
        inner
            .predictions
            .get(&submission_id)
            .cloned()
            .ok_or(StoreError::NotFound(submission_id))
    }

    pub async fn get_recommendations(
        &self,
        submission_id: Uuid,
    ) -> Result<Vec<RecommendationRecord>, StoreError> {
        let inner = self.inner.read().await;
        inner
            .recommendations
            .get(&submission_id)
            .cloned()
            .ok_or(StoreError::NotFound(submission_id))
    }

    /// Update a submission's status (doctor review flow).
    pub async fn set_status(
        &self,
        submission_id: Uuid,
        status: SubmissionStatus,
    ) -> Result<Submission, StoreError> {
        let mut inner = self.inner.write().await;
        let submission = inner
            .submissions
            .get_mut(&submission_id)
            .ok_or(StoreError::NotFound(submission_id))?;
        submission.status = status;
        Ok(submission.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sana_core::models::answer::AnswerStore;
    use sana_core::models::risk::RiskCategory;

    fn sample(patient_ref: &str) -> (Submission, RiskPrediction) {
        let submission = Submission {
            id: Uuid::new_v4(),
            patient_ref: patient_ref.to_string(),
            questionnaire_id: "diabetes-risk".to_string(),
            answers: AnswerStore::new(),
            status: SubmissionStatus::Completed,
            created_at: jiff::Timestamp::now(),
        };
        let prediction = RiskPrediction {
            id: Uuid::new_v4(),
            submission_id: submission.id,
            score: 42,
            category: RiskCategory::Moderate,
            created_at: submission.created_at,
        };
        (submission, prediction)
    }

    #[tokio::test]
    async fn stores_and_fetches_the_three_records() {
        let store = MemoryStore::new();
        let (submission, prediction) = sample("p1");
        let id = submission.id;

        store
            .put_assessment(submission, prediction, Vec::new())
            .await
            .unwrap();

        assert_eq!(store.get_submission(id).await.unwrap().id, id);
        assert_eq!(store.get_prediction(id).await.unwrap().score, 42);
        assert!(store.get_recommendations(id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn duplicate_submission_is_a_conflict() {
        let store = MemoryStore::new();
        let (submission, prediction) = sample("p1");

        store
            .put_assessment(submission.clone(), prediction.clone(), Vec::new())
            .await
            .unwrap();
        let err = store
            .put_assessment(submission, prediction, Vec::new())
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Conflict(_)));
    }

    #[tokio::test]
    async fn list_filters_by_patient() {
        let store = MemoryStore::new();
        for patient in ["p1", "p1", "p2"] {
            let (submission, prediction) = sample(patient);
            store
                .put_assessment(submission, prediction, Vec::new())
                .await
                .unwrap();
        }

        assert_eq!(store.list_submissions(Some("p1")).await.len(), 2);
        assert_eq!(store.list_submissions(None).await.len(), 3);
        assert!(store.list_submissions(Some("p3")).await.is_empty());
    }

    #[tokio::test]
    async fn review_updates_status() {
        let store = MemoryStore::new();
        let (submission, prediction) = sample("p1");
        let id = submission.id;
        store
            .put_assessment(submission, prediction, Vec::new())
            .await
            .unwrap();

        let updated = store.set_status(id, SubmissionStatus::Reviewed).await.unwrap();
        assert_eq!(updated.status, SubmissionStatus::Reviewed);

        let missing = store
            .set_status(Uuid::new_v4(), SubmissionStatus::Reviewed)
            .await;
        assert!(matches!(missing, Err(StoreError::NotFound(_))));
    }
}
