//! Milestone derivation for the case progress rail

use std::fmt;

use chrono::{Days, NaiveDate, NaiveDateTime};
use serde::Serialize;

use super::TimelineConfig;
use crate::models::Case;
use crate::utils::date::parse_sol_date;

/// Where "now" sits relative to a milestone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MilestoneStatus {
    Completed,
    Current,
    Upcoming,
}

/// The five milestones, in rail order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum MilestoneKind {
    DateOfLoss,
    MedicalRecords,
    PolicyLimits,
    DemandLetter,
    SolDate,
}

impl MilestoneKind {
    pub const ALL: [Self; 5] = [
        Self::DateOfLoss,
        Self::MedicalRecords,
        Self::PolicyLimits,
        Self::DemandLetter,
        Self::SolDate,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::DateOfLoss => "Date of Loss",
            Self::MedicalRecords => "Medical Records",
            Self::PolicyLimits => "Policy Limits",
            Self::DemandLetter => "Demand Letter",
            Self::SolDate => "SOL Date",
        }
    }
}

impl fmt::Display for MilestoneKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One point on the progress rail
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Milestone {
    pub kind: MilestoneKind,
    pub label: &'static str,
    /// `None` when the source date could not be parsed
    pub date: Option<NaiveDate>,
    pub status: MilestoneStatus,
}

impl Milestone {
    fn new(kind: MilestoneKind, date: Option<NaiveDate>, status: MilestoneStatus) -> Self {
        Self {
            kind,
            label: kind.label(),
            date,
            status,
        }
    }
}

/// Classify a milestone date against now, by calendar day
#[must_use]
pub fn classify(date: NaiveDate, now: NaiveDateTime) -> MilestoneStatus {
    let today = now.date();
    if today > date {
        MilestoneStatus::Completed
    } else if today == date {
        MilestoneStatus::Current
    } else {
        MilestoneStatus::Upcoming
    }
}

/// Derive the five-milestone rail with the default offsets (7/14/30 days).
///
/// The SOL string is parsed after discarding any timezone suffix. Statuses
/// are computed from `now` on every call.
#[must_use]
pub fn derive_timeline(date_of_loss: NaiveDate, sol_date: &str, now: NaiveDateTime) -> Vec<Milestone> {
    derive_timeline_with(&TimelineConfig::default(), date_of_loss, sol_date, now)
}

/// [`derive_timeline`] with explicit offsets
#[must_use]
pub fn derive_timeline_with(
    config: &TimelineConfig,
    date_of_loss: NaiveDate,
    sol_date: &str,
    now: NaiveDateTime,
) -> Vec<Milestone> {
    let offset = |days: u64| date_of_loss.checked_add_days(Days::new(days));
    let sol = parse_sol_date(sol_date);
    if sol.is_none() {
        log::debug!("Unparsable SOL date {sol_date:?}, milestone left undated");
    }

    MilestoneKind::ALL
        .into_iter()
        .map(|kind| {
            let date = match kind {
                MilestoneKind::DateOfLoss => Some(date_of_loss),
                MilestoneKind::MedicalRecords => offset(config.medical_records_offset_days),
                MilestoneKind::PolicyLimits => offset(config.policy_limits_offset_days),
                MilestoneKind::DemandLetter => offset(config.demand_letter_offset_days),
                MilestoneKind::SolDate => sol,
            };
            let status = date.map_or(MilestoneStatus::Upcoming, |d| classify(d, now));
            Milestone::new(kind, date, status)
        })
        .collect()
}

/// Timeline for a case record
#[must_use]
pub fn derive_case_timeline(case: &Case, config: &TimelineConfig, now: NaiveDateTime) -> Vec<Milestone> {
    derive_timeline_with(config, case.date_of_loss, &case.statute_of_limitation_date, now)
}

/// Compact three-milestone header rail.
///
/// Returns fixed demonstration dates and statuses rather than deriving them
/// from a case; callers wanting real dates should slice [`derive_timeline`].
#[must_use]
pub fn derive_header_timeline() -> Vec<Milestone> {
    vec![
        Milestone::new(
            MilestoneKind::MedicalRecords,
            NaiveDate::from_ymd_opt(2024, 3, 22),
            MilestoneStatus::Completed,
        ),
        Milestone::new(
            MilestoneKind::PolicyLimits,
            NaiveDate::from_ymd_opt(2024, 3, 29),
            MilestoneStatus::Current,
        ),
        Milestone::new(
            MilestoneKind::DemandLetter,
            NaiveDate::from_ymd_opt(2024, 4, 14),
            MilestoneStatus::Upcoming,
        ),
    ]
}
