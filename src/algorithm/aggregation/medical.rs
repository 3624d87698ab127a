//! Medical billing rollups

use itertools::Itertools;
use serde::Serialize;

use crate::models::{Case, Money, VisitStatus};

/// Billing totals across every provider on a case
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MedicalBillingTotals {
    pub total_billed: Money,
    pub total_paid: Money,
    pub adjustments: Money,
    pub outstanding: Money,
    pub provider_count: usize,
    pub visit_count: usize,
}

/// Sum every provider's billing summary
#[must_use]
pub fn medical_billing_totals(case: &Case) -> MedicalBillingTotals {
    case.medical_providers
        .iter()
        .fold(MedicalBillingTotals::default(), |mut acc, provider| {
            let billing = &provider.billing_info;
            acc.total_billed += billing.total_billed;
            acc.total_paid += billing.total_paid;
            acc.adjustments += billing.adjustments;
            acc.outstanding += billing.outstanding_balance;
            acc.provider_count += 1;
            acc.visit_count += provider.visits.len();
            acc
        })
}

/// Visit count and billed amount for one status
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VisitStatusSummary {
    pub status: VisitStatus,
    pub count: usize,
    pub billed: Money,
}

/// Visits grouped by payment status, always in pending/paid/denied order
#[must_use]
pub fn visit_status_breakdown(case: &Case) -> Vec<VisitStatusSummary> {
    let visits = case.medical_providers.iter().flat_map(|p| p.visits.iter());
    let mut summaries: Vec<VisitStatusSummary> = VisitStatus::ALL
        .iter()
        .map(|&status| VisitStatusSummary {
            status,
            count: 0,
            billed: Money::ZERO,
        })
        .collect();

    for visit in visits {
        if let Some(summary) = summaries.iter_mut().find(|s| s.status == visit.status) {
            summary.count += 1;
            summary.billed += visit.billed_amount;
        }
    }

    summaries
}

/// How often each CPT code was billed, most frequent first
#[must_use]
pub fn cpt_code_frequency(case: &Case) -> Vec<(String, usize)> {
    case.medical_providers
        .iter()
        .flat_map(|p| p.visits.iter())
        .flat_map(|v| v.cpt_codes.iter())
        .map(|code| code.trim())
        .filter(|code| !code.is_empty())
        .counts()
        .into_iter()
        .map(|(code, count)| (code.to_string(), count))
        .sorted_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)))
        .collect()
}
