//! Domain models for personal-injury case records
//!
//! A [`Case`] is the root entity: it owns every defendant, policy, vehicle,
//! provider, request, task, log entry and document recorded for a client.
//! Nothing is shared between cases, so the models are plain owned values.

pub mod case;
pub mod document;
pub mod insurance;
pub mod medical;
pub mod staff;
pub mod task;
pub mod traits;

// Re-export commonly used types
pub use case::{Case, CaseLogEntry, Defendant, MedicalRequest, MedicalRequestStatus, Vehicle};
pub use document::{Document, DocumentType};
pub use insurance::{InsurancePolicy, PolicyType};
pub use medical::{BillingInfo, MedicalProvider, Visit, VisitStatus};
pub use staff::{BreakdownEntry, BreakdownKind, StaffAggregate};
pub use task::{Task, TaskStatus};
pub use traits::EntityModel;

/// Monetary amount in dollars
pub type Money = rust_decimal::Decimal;
