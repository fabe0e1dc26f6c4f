//! sana-engine
//!
//! The assessment core: answer validation, next-question resolution,
//! progress estimation, risk scoring, and recommendation generation, driven
//! by a session state machine. Everything here is synchronous and pure over
//! its inputs; persistence happens elsewhere.

pub mod error;
pub mod navigate;
pub mod progress;
pub mod recommend;
pub mod score;
pub mod session;
pub mod validate;

pub use error::EngineError;
pub use score::ScoringPolicy;
pub use session::{CompletedAssessment, Session, SessionState, SessionStep};
pub use validate::ValidationFailure;
