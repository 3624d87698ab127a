//! Per-phase, per-staff chart series
//!
//! Each input row holds one phase with a value per staff member. The chart
//! either shows the total across staff or a single staff member's column.

use std::collections::BTreeMap;

use rust_decimal::prelude::ToPrimitive;
use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::models::Case;

/// One phase with a value per staff id
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PhaseRow {
    pub phase: String,
    pub values: BTreeMap<String, f64>,
}

impl PhaseRow {
    #[must_use]
    pub fn new(phase: impl Into<String>) -> Self {
        Self {
            phase: phase.into(),
            values: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn with_value(mut self, staff_id: impl Into<String>, value: f64) -> Self {
        self.values.insert(staff_id.into(), value);
        self
    }
}

/// Which staff the chart is scoped to
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum StaffFilter {
    #[default]
    All,
    Staff(String),
}

/// Value plotted for one phase
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ChartSeries {
    /// Sum over every staff column
    AllStaffTotal(f64),
    /// One staff member's column
    SingleStaffSeries(String, f64),
}

impl ChartSeries {
    #[must_use]
    pub fn value(&self) -> f64 {
        match self {
            Self::AllStaffTotal(value) | Self::SingleStaffSeries(_, value) => *value,
        }
    }

    /// Series key the renderer labels the value with
    #[must_use]
    pub fn series_key(&self) -> &str {
        match self {
            Self::AllStaffTotal(_) => "total",
            Self::SingleStaffSeries(staff_id, _) => staff_id,
        }
    }
}

/// Chart point for one phase; `series` is `None` when the selected staff
/// member has no value in that phase
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PhasePoint {
    pub phase: String,
    pub series: Option<ChartSeries>,
}

/// Project phase rows into chart points for the given staff filter.
///
/// The all-staff view sums every column per row. A single-staff view reads
/// only that staff member's column and leaves the point absent, not zero,
/// where the column is missing.
#[must_use]
pub fn aggregate_by_phase_and_staff(rows: &[PhaseRow], filter: &StaffFilter) -> Vec<PhasePoint> {
    rows.iter()
        .map(|row| {
            let series = match filter {
                StaffFilter::All => Some(ChartSeries::AllStaffTotal(
                    row.values.values().filter(|v| v.is_finite()).sum(),
                )),
                StaffFilter::Staff(staff_id) => row
                    .values
                    .get(staff_id)
                    .map(|&value| ChartSeries::SingleStaffSeries(staff_id.clone(), value)),
            };
            PhasePoint {
                phase: row.phase.clone(),
                series,
            }
        })
        .collect()
}

/// Measure used when building phase rows from cases
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseMetric {
    /// Number of cases
    CaseCount,
    /// Sum of policy limits
    PolicyLimit,
}

/// Staff id used for cases with no assignment
pub const UNASSIGNED_STAFF: &str = "unassigned";

/// Build phase rows from a caseload, one row per phase in first-seen order
#[must_use]
pub fn phase_rows_from_cases<'a>(
    cases: impl IntoIterator<Item = &'a Case>,
    metric: PhaseMetric,
) -> Vec<PhaseRow> {
    let mut rows: Vec<PhaseRow> = Vec::new();
    let mut index: FxHashMap<String, usize> = FxHashMap::default();

    for case in cases {
        let phase = if case.phase.trim().is_empty() {
            "Unspecified"
        } else {
            case.phase.trim()
        };
        let slot = *index.entry(phase.to_string()).or_insert_with(|| {
            rows.push(PhaseRow::new(phase));
            rows.len() - 1
        });

        let staff = case
            .assigned_staff
            .clone()
            .unwrap_or_else(|| UNASSIGNED_STAFF.to_string());
        let amount = match metric {
            PhaseMetric::CaseCount => 1.0,
            PhaseMetric::PolicyLimit => super::total_policy_limit(case).to_f64().unwrap_or(0.0),
        };
        *rows[slot].values.entry(staff).or_insert(0.0) += amount;
    }

    rows
}
