//! Staff analytics aggregates
//!
//! Reference data for the analytics page: per-staff percentage breakdowns of
//! the caseload. Not owned by any case.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::traits::string_entity;

/// One slice of a breakdown chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BreakdownEntry {
    pub name: String,
    pub value: f64,
    pub percentage: f64,
    /// Presentation color, e.g. "#4f46e5"
    #[serde(default)]
    pub color: String,
}

impl BreakdownEntry {
    #[must_use]
    pub fn new(name: impl Into<String>, value: f64, percentage: f64, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value,
            percentage,
            color: color.into(),
        }
    }
}

/// Which breakdown of a [`StaffAggregate`] to read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BreakdownKind {
    CaseStatus,
    CaseType,
    TreatmentType,
}

impl BreakdownKind {
    pub const ALL: [Self; 3] = [Self::CaseStatus, Self::CaseType, Self::TreatmentType];
}

impl fmt::Display for BreakdownKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CaseStatus => f.write_str("case status"),
            Self::CaseType => f.write_str("case type"),
            Self::TreatmentType => f.write_str("treatment type"),
        }
    }
}

/// Caseload rollup for one staff member
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffAggregate {
    #[serde(rename = "staffId")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub case_status: Vec<BreakdownEntry>,
    #[serde(default)]
    pub case_type: Vec<BreakdownEntry>,
    #[serde(default)]
    pub treatment_type: Vec<BreakdownEntry>,
}

impl StaffAggregate {
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            case_status: Vec::new(),
            case_type: Vec::new(),
            treatment_type: Vec::new(),
        }
    }

    /// Entries of one breakdown
    #[must_use]
    pub fn breakdown(&self, kind: BreakdownKind) -> &[BreakdownEntry] {
        match kind {
            BreakdownKind::CaseStatus => &self.case_status,
            BreakdownKind::CaseType => &self.case_type,
            BreakdownKind::TreatmentType => &self.treatment_type,
        }
    }

    /// Mutable access to one breakdown
    pub fn breakdown_mut(&mut self, kind: BreakdownKind) -> &mut Vec<BreakdownEntry> {
        match kind {
            BreakdownKind::CaseStatus => &mut self.case_status,
            BreakdownKind::CaseType => &mut self.case_type,
            BreakdownKind::TreatmentType => &mut self.treatment_type,
        }
    }
}

string_entity! {
    StaffAggregate => "staff",
}
