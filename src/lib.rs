//! A Rust library deriving dashboard views from personal-injury case records:
//! financial rollups, milestone timelines, task lifecycle, and deferred
//! document production.

pub mod algorithm;
pub mod collections;
pub mod config;
pub mod error;
pub mod models;
pub mod store;
pub mod utils;

// Re-export the most common types for easier use
// Core types
pub use config::EngineConfig;
pub use error::{Error, Result};
pub use models::{Case, Document, DocumentType, InsurancePolicy, MedicalProvider, Money, Task};

// Derived views
pub use algorithm::CaseSummary;
pub use algorithm::aggregation::{CaseFinancials, ChartSeries, StaffFilter};
pub use algorithm::tasks::{TaskBoard, WorkspaceTab};
pub use algorithm::timeline::{Milestone, MilestoneStatus, SolUrgency};
pub use collections::{CaseRoster, GenericCollection, ModelCollection};

// Document store and scheduling
pub use store::{DeferredScheduler, DocumentStore, JobHandle, SettlementOffer};
