//! Shared document store and deferred document production
//!
//! The store is an explicit handle with a `refresh()` the caller invokes at
//! its own cadence. Deferred production (the CRN after a settlement offer)
//! runs on a scheduler that owns its clock.

pub mod backend;
pub mod documents;
pub mod driver;
pub mod litigation;
pub mod scheduler;

// Re-export commonly used items
pub use backend::{DocumentBackend, MemoryBackend};
pub use documents::DocumentStore;
pub use driver::drive_until;
pub use litigation::{SettlementOffer, crn_document, submit_settlement_offer};
pub use scheduler::{DeferredScheduler, JobHandle};
