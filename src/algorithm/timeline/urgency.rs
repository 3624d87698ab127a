//! Statute-of-limitations urgency

use chrono::NaiveDateTime;
use serde::Serialize;

use super::TimelineConfig;
use crate::utils::date::parse_sol_date;

/// How close a case is to its SOL deadline
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum SolUrgency {
    /// Deadline has passed
    Expired,
    Critical,
    Warning,
    Normal,
    /// SOL date missing or unparsable
    Unknown,
}

/// Calendar days from today until the SOL date; negative once passed
#[must_use]
pub fn days_until_sol(sol_date: &str, now: NaiveDateTime) -> Option<i64> {
    parse_sol_date(sol_date).map(|sol| (sol - now.date()).num_days())
}

/// Classify SOL urgency using the configured thresholds
#[must_use]
pub fn sol_urgency(sol_date: &str, now: NaiveDateTime, config: &TimelineConfig) -> SolUrgency {
    match days_until_sol(sol_date, now) {
        None => SolUrgency::Unknown,
        Some(days) if days < 0 => SolUrgency::Expired,
        Some(days) if days <= config.sol_critical_days => SolUrgency::Critical,
        Some(days) if days <= config.sol_warning_days => SolUrgency::Warning,
        Some(_) => SolUrgency::Normal,
    }
}
