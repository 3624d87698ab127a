//! Shared test helpers

use chrono::{NaiveDate, NaiveDateTime};
use case_view::models::{BillingInfo, Case, InsurancePolicy, MedicalProvider, Money, PolicyType};

/// Build a date, panicking on invalid input
pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// A point in time on the given day
pub fn at(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
    date(y, m, d).and_hms_opt(h, 0, 0).unwrap()
}

/// Case with the given policy limits and provider outstanding balances
pub fn case_with(limits: &[(&str, PolicyType, &str)], outstanding: &[Money]) -> Case {
    let mut case = Case::new("case-t", "Test Client", date(2024, 3, 15), "2026-03-15");
    case.insurance_policies = limits
        .iter()
        .map(|(id, kind, limit)| InsurancePolicy::new(*id, *kind, *limit))
        .collect();
    case.medical_providers = outstanding
        .iter()
        .enumerate()
        .map(|(i, balance)| {
            MedicalProvider::new(
                format!("prov-{i}"),
                format!("Provider {i}"),
                BillingInfo::new(*balance, Money::ZERO, Money::ZERO),
            )
        })
        .collect();
    case
}
