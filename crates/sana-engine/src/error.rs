use thiserror::Error;

use crate::validate::ValidationFailure;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("answer rejected for question '{question_id}': {failure}")]
    InvalidAnswer {
        question_id: String,
        failure: ValidationFailure,
    },

    #[error("the session is already completed")]
    AlreadyCompleted,

    #[error("cannot finish: session is still at question '{0}'")]
    NotCompleted(String),
}
