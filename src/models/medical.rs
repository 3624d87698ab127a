//! Medical provider and billing models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::models::Money;
use crate::models::traits::string_entity;
use crate::utils::date::deserialize_flexible_date;

/// Billing summary for one provider
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillingInfo {
    pub total_billed: Money,
    pub total_paid: Money,
    #[serde(default)]
    pub adjustments: Money,
    pub outstanding_balance: Money,
}

impl BillingInfo {
    /// Build a summary, deriving the outstanding balance
    #[must_use]
    pub fn new(total_billed: Money, total_paid: Money, adjustments: Money) -> Self {
        Self {
            total_billed,
            total_paid,
            adjustments,
            outstanding_balance: total_billed - total_paid - adjustments,
        }
    }

    /// Check `billed >= paid` and `outstanding = billed - paid - adjustments`
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        let expected = self.total_billed - self.total_paid - self.adjustments;
        self.total_billed >= self.total_paid
            && self.outstanding_balance >= Money::ZERO
            && self.outstanding_balance == expected
    }
}

/// Payment state of a single visit
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VisitStatus {
    Pending,
    Paid,
    Denied,
}

impl VisitStatus {
    /// All statuses in display order
    pub const ALL: [Self; 3] = [Self::Pending, Self::Paid, Self::Denied];
}

/// One treatment visit billed by a provider
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Visit {
    #[serde(deserialize_with = "deserialize_flexible_date")]
    pub date: NaiveDate,
    #[serde(default)]
    pub description: String,
    pub billed_amount: Money,
    pub status: VisitStatus,
    /// CPT billing codes for the visit
    #[serde(default)]
    pub cpt_codes: SmallVec<[String; 4]>,
}

/// A treating medical provider
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicalProvider {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub specialty: String,
    #[serde(default)]
    pub billing_info: BillingInfo,
    #[serde(default)]
    pub visits: Vec<Visit>,
}

impl MedicalProvider {
    /// Create a provider with a billing summary and no visits
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, billing_info: BillingInfo) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            specialty: String::new(),
            billing_info,
            visits: Vec::new(),
        }
    }

    /// Sum of billed amounts across visits
    #[must_use]
    pub fn visits_billed_total(&self) -> Money {
        self.visits.iter().map(|v| v.billed_amount).sum()
    }

    /// Most recent visit date
    #[must_use]
    pub fn last_visit(&self) -> Option<NaiveDate> {
        self.visits.iter().map(|v| v.date).max()
    }
}

string_entity! {
    MedicalProvider => "provider",
}
