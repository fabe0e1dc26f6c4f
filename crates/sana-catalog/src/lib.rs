//! sana-catalog
//!
//! Questionnaire definitions. Pure data — each questionnaire is a static,
//! integrity-checked catalog of questions with branching rules; nothing here
//! does I/O.

pub mod catalog;
pub mod error;
pub mod questionnaires;

pub use catalog::QuestionCatalog;

/// Trait implemented by each shipped questionnaire.
pub trait Questionnaire: Send + Sync {
    /// Unique identifier (e.g., "diabetes-risk").
    fn id(&self) -> &str;

    /// Human-readable name.
    fn name(&self) -> &str;

    /// Short description shown before the assessment starts.
    fn description(&self) -> &str;

    /// The verified question catalog.
    fn catalog(&self) -> &QuestionCatalog;
}

/// Return all registered questionnaires.
pub fn all_questionnaires() -> Vec<Box<dyn Questionnaire>> {
    vec![Box::new(questionnaires::diabetes::DiabetesRisk)]
}

/// Look up a questionnaire by ID.
pub fn get_questionnaire(id: &str) -> Option<Box<dyn Questionnaire>> {
    all_questionnaires().into_iter().find(|q| q.id() == id)
}
