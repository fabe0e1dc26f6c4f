//! sana-store
//!
//! Persistence handoff for completed assessments. The production backend is
//! the hosted table-store the portal runs on; this crate defines the record
//! contract and ships an in-memory implementation used by the service and by
//! tests.

pub mod error;
pub mod memory;

pub use error::StoreError;
pub use memory::MemoryStore;
