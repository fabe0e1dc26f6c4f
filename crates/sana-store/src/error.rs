use thiserror::Error;
use uuid::Uuid;

/// Persistence failures. Never retried here — callers surface the error and
/// keep the computed results in memory so submission can be retried without
/// re-answering.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("submission not found: {0}")]
    NotFound(Uuid),

    #[error("submission already exists: {0}")]
    Conflict(Uuid),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
