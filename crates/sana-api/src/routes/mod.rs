pub mod health;
pub mod questionnaires;
pub mod submissions;
