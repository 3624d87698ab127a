//! Case summary ("Holy Grail" view)
//!
//! Combines every derived view for one case into a single structure.

use std::fmt;

use chrono::NaiveDateTime;
use rust_decimal_macros::dec;
use serde::Serialize;

use crate::algorithm::aggregation::{CaseFinancials, FormattedFinancials, MedicalBillingTotals, medical_billing_totals};
use crate::algorithm::tasks::{overdue_count, task_source_for, upcoming_tasks};
use crate::algorithm::timeline::{Milestone, SolUrgency, days_until_sol, derive_case_timeline, sol_urgency};
use crate::config::EngineConfig;
use crate::models::{Case, Task};

/// Everything the summary panel shows for one case
#[derive(Debug, Clone, Serialize)]
pub struct CaseSummary {
    pub case_id: String,
    pub name: String,
    pub progress: u8,
    pub financials: CaseFinancials,
    pub formatted: FormattedFinancials,
    pub medical: MedicalBillingTotals,
    pub timeline: Vec<Milestone>,
    pub days_until_sol: Option<i64>,
    pub sol_urgency: SolUrgency,
    pub upcoming_task_count: usize,
    pub overdue_task_count: usize,
    pub next_task: Option<Task>,
    pub document_count: usize,
}

impl CaseSummary {
    /// Build the summary for a case as of `now`.
    ///
    /// Task counts come from the case's task source, so a demo case reports
    /// the same tasks its task board shows.
    #[must_use]
    pub fn build(case: &Case, config: &EngineConfig, now: NaiveDateTime) -> Self {
        let financials = CaseFinancials::compute(case, config.fee_rate);
        let formatted = financials.formatted();
        let tasks = task_source_for(case, config).tasks(case, now);
        let upcoming = upcoming_tasks(&tasks, now);
        let next_task = upcoming.iter().find(|t| !t.is_completed()).cloned();

        Self {
            case_id: case.id.clone(),
            name: case.name.clone(),
            progress: case.progress.min(100),
            financials,
            formatted,
            medical: medical_billing_totals(case),
            timeline: derive_case_timeline(case, &config.timeline, now),
            days_until_sol: days_until_sol(&case.statute_of_limitation_date, now),
            sol_urgency: sol_urgency(&case.statute_of_limitation_date, now, &config.timeline),
            upcoming_task_count: upcoming.len(),
            overdue_task_count: overdue_count(&tasks, now),
            next_task,
            document_count: case.documents.len(),
        }
    }
}

impl fmt::Display for CaseSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Case Summary: {} ({})", self.name, self.case_id)?;
        writeln!(f, "  Progress: {}%", self.progress)?;
        writeln!(f, "  Total Policy Limits: {}", self.formatted.total_policy_limit)?;
        writeln!(
            f,
            "  Estimated Fee ({:.0}%): {}",
            self.financials.fee_rate * dec!(100),
            self.formatted.estimated_fee
        )?;
        writeln!(f, "  Outstanding Medical: {}", self.formatted.total_outstanding_medical)?;
        if self.financials.client_owes() {
            writeln!(f, "  Net to Client: {} (client owes)", self.formatted.net_client_payment)?;
        } else {
            writeln!(f, "  Net to Client: {}", self.formatted.net_client_payment)?;
        }

        writeln!(f, "\nTimeline:")?;
        for milestone in &self.timeline {
            let date = milestone
                .date
                .map_or_else(|| "unknown".to_string(), |d| d.format("%b %d, %Y").to_string());
            writeln!(f, "  {:<16} {:<13} {:?}", milestone.label, date, milestone.status)?;
        }
        match self.days_until_sol {
            Some(days) => writeln!(f, "  SOL in {days} days ({:?})", self.sol_urgency)?,
            None => writeln!(f, "  SOL date unknown")?,
        }

        writeln!(f, "\nTasks:")?;
        writeln!(f, "  Upcoming: {}", self.upcoming_task_count)?;
        writeln!(f, "  Overdue: {}", self.overdue_task_count)?;
        if let Some(task) = &self.next_task {
            writeln!(f, "  Next: {}", task.title)?;
        }
        write!(f, "  Documents: {}", self.document_count)
    }
}
