//! Aggregation engine
//!
//! Monetary and categorical rollups over a case's nested records. Nothing
//! here mutates its input or fails on malformed data: unusable amounts count
//! as zero and empty collections produce zero totals.

pub mod medical;
pub mod phase;
pub mod staff;
pub mod totals;

// Re-export commonly used items
pub use medical::{
    MedicalBillingTotals, VisitStatusSummary, cpt_code_frequency, medical_billing_totals,
    visit_status_breakdown,
};
pub use phase::{
    ChartSeries, PhaseMetric, PhasePoint, PhaseRow, StaffFilter, aggregate_by_phase_and_staff,
    phase_rows_from_cases,
};
pub use staff::{
    BreakdownIssue, combine_roster, is_balanced, recompute_percentages, staff_view,
    validate_roster,
};
pub use totals::{
    CaseFinancials, FormattedFinancials, estimated_fee, expected_settlement_total,
    limits_by_policy_type, net_client_payment, total_outstanding_medical, total_policy_limit,
};
