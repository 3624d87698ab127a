//! Insurance policy model

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::Money;
use crate::models::traits::string_entity;
use crate::utils::currency::parse_currency;

/// Coverage type of an insurance policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PolicyType {
    /// Uninsured / underinsured motorist
    #[serde(rename = "UM")]
    Um,
    /// Bodily injury liability
    #[serde(rename = "BI")]
    Bi,
    /// Personal injury protection
    #[serde(rename = "PIP")]
    Pip,
}

impl PolicyType {
    /// Short label used on the dashboard
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Um => "UM",
            Self::Bi => "BI",
            Self::Pip => "PIP",
        }
    }
}

impl fmt::Display for PolicyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// An insurance policy that may pay toward the client's recovery
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsurancePolicy {
    pub id: String,
    pub policy_type: PolicyType,
    /// Insurance carrier name
    #[serde(default)]
    pub carrier: String,
    #[serde(default)]
    pub policy_number: Option<String>,
    #[serde(default)]
    pub claim_number: Option<String>,
    #[serde(default)]
    pub adjuster: Option<String>,
    /// Policy limit as entered, e.g. "$100,000"
    pub limit: String,
    /// Expected settlement as entered
    #[serde(default)]
    pub expected_settlement: String,
    /// Defendant the policy covers
    #[serde(default)]
    pub defendant_id: Option<String>,
    /// Vehicle the policy covers
    #[serde(default)]
    pub vehicle_id: Option<String>,
}

impl InsurancePolicy {
    /// Create a policy with only the fields the rollups need
    #[must_use]
    pub fn new(id: impl Into<String>, policy_type: PolicyType, limit: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            policy_type,
            carrier: String::new(),
            policy_number: None,
            claim_number: None,
            adjuster: None,
            limit: limit.into(),
            expected_settlement: String::new(),
            defendant_id: None,
            vehicle_id: None,
        }
    }

    /// Parsed policy limit, zero when the entry is unusable
    #[must_use]
    pub fn limit_amount(&self) -> Money {
        parse_currency(&self.limit)
    }

    /// Parsed expected settlement, zero when the entry is unusable
    #[must_use]
    pub fn expected_settlement_amount(&self) -> Money {
        parse_currency(&self.expected_settlement)
    }
}

string_entity! {
    InsurancePolicy => "policy",
}
