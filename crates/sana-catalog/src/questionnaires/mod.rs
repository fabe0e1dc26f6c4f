pub mod diabetes;
