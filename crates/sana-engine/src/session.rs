use uuid::Uuid;

use sana_catalog::QuestionCatalog;
use sana_core::models::answer::{AnswerStore, AnswerValue};
use sana_core::models::question::{Question, QuestionKind};
use sana_core::models::risk::RiskResult;
use sana_core::models::submission::{
    RecommendationRecord, RiskPrediction, Submission, SubmissionStatus,
};

use crate::error::EngineError;
use crate::navigate::next_question;
use crate::progress::progress;
use crate::recommend::recommend;
use crate::score::{risk_score, ScoringPolicy};
use crate::validate::validate;

/// One in-flight assessment. Owns the answer store exclusively; dropping an
/// unfinished session discards the answers without persisting anything.
pub struct Session<'c> {
    catalog: &'c QuestionCatalog,
    questionnaire_id: String,
    policy: ScoringPolicy,
    state: SessionState,
    answers: AnswerStore,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    InProgress { current: String },
    Completed,
}

/// Outcome of one accepted answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStep {
    /// Moved on to the next question.
    Advanced,
    /// The questionnaire is finished; call [`Session::finish`].
    Completed,
}

/// The three persistence payloads produced by one completed session,
/// ready to hand to the store as a unit.
#[derive(Debug, Clone)]
pub struct CompletedAssessment {
    pub submission: Submission,
    pub prediction: RiskPrediction,
    pub recommendations: Vec<RecommendationRecord>,
}

impl<'c> Session<'c> {
    pub fn start(questionnaire_id: impl Into<String>, catalog: &'c QuestionCatalog) -> Self {
        Self {
            catalog,
            questionnaire_id: questionnaire_id.into(),
            policy: ScoringPolicy::default(),
            state: SessionState::InProgress {
                current: catalog.start_id().to_string(),
            },
            answers: AnswerStore::new(),
        }
    }

    pub fn with_policy(mut self, policy: ScoringPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn is_completed(&self) -> bool {
        self.state == SessionState::Completed
    }

    pub fn answers(&self) -> &AnswerStore {
        &self.answers
    }

    pub fn current_question(&self) -> Option<&'c Question> {
        match &self.state {
            SessionState::InProgress { current } => self.catalog.get(current),
            SessionState::Completed => None,
        }
    }

    /// Completion estimate for display; exactly 100 once completed.
    pub fn progress(&self) -> u8 {
        match &self.state {
            SessionState::InProgress { current } => progress(self.catalog, current),
            SessionState::Completed => 100,
        }
    }

    /// Validate and accept an answer for the current question, then advance.
    /// On a validation failure the store and position are unchanged and the
    /// caller re-prompts.
    pub fn submit_answer(&mut self, value: AnswerValue) -> Result<SessionStep, EngineError> {
        let Some(question) = self.current_question() else {
            return Err(EngineError::AlreadyCompleted);
        };

        validate(question, &value).map_err(|failure| EngineError::InvalidAnswer {
            question_id: question.id.clone(),
            failure,
        })?;

        let selected = match question.kind {
            QuestionKind::SingleChoice => {
                value.as_text().and_then(|v| question.option_by_value(v))
            }
            _ => None,
        };

        self.answers.insert(question.id.clone(), value);

        match next_question(self.catalog, &question.id, selected, &self.answers) {
            Some(next) => {
                self.state = SessionState::InProgress {
                    current: next.id.clone(),
                };
                Ok(SessionStep::Advanced)
            }
            None => {
                self.state = SessionState::Completed;
                Ok(SessionStep::Completed)
            }
        }
    }

    /// Score the completed session and build the persistence records.
    /// Consumes the session, so scoring and recommendation generation run
    /// exactly once per assessment.
    pub fn finish(self, patient_ref: impl Into<String>) -> Result<CompletedAssessment, EngineError> {
        match self.state {
            SessionState::InProgress { current } => Err(EngineError::NotCompleted(current)),
            SessionState::Completed => {
                let RiskResult { score, category } = risk_score(&self.answers, &self.policy);
                let recommendations = recommend(&self.answers, category, &self.policy);

                let now = jiff::Timestamp::now();
                let submission = Submission {
                    id: Uuid::new_v4(),
                    patient_ref: patient_ref.into(),
                    questionnaire_id: self.questionnaire_id,
                    answers: self.answers,
                    status: SubmissionStatus::Completed,
                    created_at: now,
                };
                let prediction = RiskPrediction {
                    id: Uuid::new_v4(),
                    submission_id: submission.id,
                    score,
                    category,
                    created_at: now,
                };
                let recommendations = recommendations
                    .into_iter()
                    .map(|r| RecommendationRecord {
                        id: Uuid::new_v4(),
                        submission_id: submission.id,
                        content: r.content,
                        kind: r.kind,
                    })
                    .collect();

                Ok(CompletedAssessment {
                    submission,
                    prediction,
                    recommendations,
                })
            }
        }
    }
}
