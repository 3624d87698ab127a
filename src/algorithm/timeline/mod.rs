//! Timeline deriver
//!
//! Produces the fixed five-milestone progress rail for a case from its date
//! of loss and statute-of-limitations date, plus SOL urgency helpers.

pub mod config;
pub mod milestones;
pub mod urgency;

// Re-export commonly used items
pub use config::TimelineConfig;
pub use milestones::{
    Milestone, MilestoneKind, MilestoneStatus, classify, derive_case_timeline,
    derive_header_timeline, derive_timeline, derive_timeline_with,
};
pub use urgency::{SolUrgency, days_until_sol, sol_urgency};
