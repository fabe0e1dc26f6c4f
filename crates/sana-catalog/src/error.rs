use thiserror::Error;

/// Integrity failures detected when a catalog is loaded. Fatal for the
/// catalog — a session is never started against an unverified catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("duplicate question id: {0}")]
    DuplicateQuestion(String),

    #[error("start question '{0}' is not in the catalog")]
    UnknownStart(String),

    #[error("question '{from}' points to missing successor '{to}'")]
    DanglingNext { from: String, to: String },

    #[error("question '{from}' branch on '{value}' points to missing question '{to}'")]
    DanglingBranch {
        from: String,
        value: String,
        to: String,
    },

    #[error("question '{from}' branches on '{value}', which is not a declared option")]
    UnknownBranchValue { from: String, value: String },

    #[error("choice question '{0}' has no options")]
    MissingOptions(String),

    #[error("slider question '{0}' needs both min and max")]
    MissingBounds(String),

    #[error("question '{id}' has min {min} greater than max {max}")]
    InvertedBounds { id: String, min: f64, max: f64 },
}
