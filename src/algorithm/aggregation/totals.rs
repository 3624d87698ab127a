//! Recovery, fee and net-payment totals for a case
//!
//! Every figure is computed from the same parsed policy total so the fee and
//! the "recovery minus fee" displays can never disagree.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::{Case, InsurancePolicy, Money, PolicyType};
use crate::utils::currency::{format_compact_currency, format_currency};

/// Sum of policy limits across all of a case's insurance policies.
///
/// Limits that fail to parse contribute nothing.
#[must_use]
pub fn total_policy_limit(case: &Case) -> Money {
    case.insurance_policies
        .iter()
        .map(InsurancePolicy::limit_amount)
        .sum()
}

/// Contingency fee on a recovery total
#[must_use]
pub fn estimated_fee(total: Money, rate: Decimal) -> Money {
    total * rate
}

/// Sum of outstanding balances across all medical providers
#[must_use]
pub fn total_outstanding_medical(case: &Case) -> Money {
    case.medical_providers
        .iter()
        .map(|p| p.billing_info.outstanding_balance)
        .sum()
}

/// What the client takes home: recovery after fee, minus medical balances.
///
/// The result is not clamped. A negative value means the client owes more
/// than the policies recover.
#[must_use]
pub fn net_client_payment(case: &Case, fee_rate: Decimal) -> Money {
    net_from_parts(total_policy_limit(case), fee_rate, total_outstanding_medical(case))
}

fn net_from_parts(total: Money, fee_rate: Decimal, outstanding: Money) -> Money {
    total * (Decimal::ONE - fee_rate) - outstanding
}

/// Sum of parsed expected settlements
#[must_use]
pub fn expected_settlement_total(case: &Case) -> Money {
    case.insurance_policies
        .iter()
        .map(InsurancePolicy::expected_settlement_amount)
        .sum()
}

/// Policy limits summed per coverage type
#[must_use]
pub fn limits_by_policy_type(case: &Case) -> BTreeMap<PolicyType, Money> {
    let mut totals = BTreeMap::new();
    for policy in &case.insurance_policies {
        *totals.entry(policy.policy_type).or_insert(Money::ZERO) += policy.limit_amount();
    }
    totals
}

/// All money figures for one case, derived from a single parsed total
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CaseFinancials {
    pub total_policy_limit: Money,
    pub fee_rate: Decimal,
    pub estimated_fee: Money,
    /// Recovery after the contingency fee
    pub recovery_after_fee: Money,
    pub total_outstanding_medical: Money,
    pub net_client_payment: Money,
    pub expected_settlement_total: Money,
}

impl CaseFinancials {
    /// Compute every figure for a case
    #[must_use]
    pub fn compute(case: &Case, fee_rate: Decimal) -> Self {
        let total = total_policy_limit(case);
        let fee = estimated_fee(total, fee_rate);
        let outstanding = total_outstanding_medical(case);

        Self {
            total_policy_limit: total,
            fee_rate,
            estimated_fee: fee,
            recovery_after_fee: total - fee,
            total_outstanding_medical: outstanding,
            net_client_payment: net_from_parts(total, fee_rate, outstanding),
            expected_settlement_total: expected_settlement_total(case),
        }
    }

    /// True when medical balances exceed the recovery after fees
    #[must_use]
    pub fn client_owes(&self) -> bool {
        self.net_client_payment < Money::ZERO
    }

    /// Detail-panel strings for each figure
    #[must_use]
    pub fn formatted(&self) -> FormattedFinancials {
        FormattedFinancials {
            total_policy_limit: format_currency(self.total_policy_limit),
            estimated_fee: format_currency(self.estimated_fee),
            total_outstanding_medical: format_currency(self.total_outstanding_medical),
            net_client_payment: format_currency(self.net_client_payment),
            total_policy_limit_compact: format_compact_currency(self.total_policy_limit),
        }
    }
}

/// Display strings for [`CaseFinancials`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormattedFinancials {
    pub total_policy_limit: String,
    pub estimated_fee: String,
    pub total_outstanding_medical: String,
    /// Leading `-` when the client owes money
    pub net_client_payment: String,
    pub total_policy_limit_compact: String,
}
