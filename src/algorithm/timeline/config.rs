//! Timeline configuration
//!
//! Milestones after the date of loss are placed at fixed day offsets.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Day offsets from the date of loss for the intermediate milestones
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimelineConfig {
    /// Days until medical records are expected
    pub medical_records_offset_days: u64,
    /// Days until the policy limits request
    pub policy_limits_offset_days: u64,
    /// Days until the demand letter
    pub demand_letter_offset_days: u64,
    /// SOL within this many days is critical
    pub sol_critical_days: i64,
    /// SOL within this many days needs attention
    pub sol_warning_days: i64,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            medical_records_offset_days: 7,
            policy_limits_offset_days: 14,
            demand_letter_offset_days: 30,
            sol_critical_days: 30,
            sol_warning_days: 90,
        }
    }
}

impl fmt::Display for TimelineConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  Medical Records Offset: {} days", self.medical_records_offset_days)?;
        writeln!(f, "  Policy Limits Offset: {} days", self.policy_limits_offset_days)?;
        writeln!(f, "  Demand Letter Offset: {} days", self.demand_letter_offset_days)?;
        writeln!(
            f,
            "  SOL Thresholds: critical <= {} days, warning <= {} days",
            self.sol_critical_days, self.sol_warning_days
        )
    }
}
