pub mod answer;
pub mod question;
pub mod recommendation;
pub mod risk;
pub mod submission;
