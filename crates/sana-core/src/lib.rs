//! sana-core
//!
//! Pure domain types and factor constants. No I/O, no async — this is the
//! shared vocabulary of the Sana system.

pub mod error;
pub mod factors;
pub mod models;
