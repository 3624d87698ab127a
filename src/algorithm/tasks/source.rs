//! Where a case's tasks come from
//!
//! Real cases read their own task list. The configured demo case reads a
//! fixed roster instead; its dates are laid out relative to the day it is
//! loaded so the walkthrough always has something upcoming.

use std::fmt;

use chrono::{Days, NaiveDate, NaiveDateTime};

use crate::config::EngineConfig;
use crate::models::{Case, Task};

/// Provider of the raw task list for a case
pub trait TaskSource: Send + Sync + fmt::Debug {
    /// Short name for logging
    fn name(&self) -> &'static str;

    /// Raw (unfiltered) tasks for the case as of `now`
    fn tasks(&self, case: &Case, now: NaiveDateTime) -> Vec<Task>;

    /// Whether completions should be written back to the case record.
    /// Sources that return `false` keep completion state only in memory.
    fn persists_completion(&self) -> bool;
}

/// Tasks as recorded on the case
#[derive(Debug, Clone, Copy, Default)]
pub struct RealTaskSource;

impl TaskSource for RealTaskSource {
    fn name(&self) -> &'static str {
        "case"
    }

    fn tasks(&self, case: &Case, _now: NaiveDateTime) -> Vec<Task> {
        case.tasks.clone()
    }

    fn persists_completion(&self) -> bool {
        true
    }
}

/// One entry of the demo roster
#[derive(Debug, Clone)]
pub struct DemoTaskTemplate {
    pub id: &'static str,
    pub title: &'static str,
    pub responsible: &'static str,
    /// Days from today; negative is in the past, `None` is undated
    pub offset_days: Option<i64>,
}

/// Fixed walkthrough roster
pub const DEMO_ROSTER: [DemoTaskTemplate; 6] = [
    DemoTaskTemplate {
        id: "demo-records",
        title: "Request medical records from treating providers",
        responsible: "Paralegal",
        offset_days: Some(1),
    },
    DemoTaskTemplate {
        id: "demo-lor",
        title: "Send letter of representation to BI carrier",
        responsible: "Attorney",
        offset_days: Some(3),
    },
    DemoTaskTemplate {
        id: "demo-limits",
        title: "Follow up on policy limits request",
        responsible: "Case Manager",
        offset_days: Some(7),
    },
    DemoTaskTemplate {
        id: "demo-demand",
        title: "Draft BI demand letter",
        responsible: "Attorney",
        offset_days: Some(14),
    },
    DemoTaskTemplate {
        id: "demo-checkin",
        title: "Client check-in call",
        responsible: "Case Manager",
        offset_days: None,
    },
    DemoTaskTemplate {
        id: "demo-wages",
        title: "Collect wage-loss documentation",
        responsible: "Client",
        offset_days: Some(-2),
    },
];

/// Demo roster in place of the case's own tasks
#[derive(Debug, Clone)]
pub struct DemoTaskSource {
    roster: Vec<DemoTaskTemplate>,
}

impl DemoTaskSource {
    #[must_use]
    pub fn new(roster: Vec<DemoTaskTemplate>) -> Self {
        Self { roster }
    }
}

impl Default for DemoTaskSource {
    fn default() -> Self {
        Self::new(DEMO_ROSTER.to_vec())
    }
}

fn shift(today: NaiveDate, offset: i64) -> Option<NaiveDate> {
    let days = Days::new(offset.unsigned_abs());
    if offset >= 0 {
        today.checked_add_days(days)
    } else {
        today.checked_sub_days(days)
    }
}

impl TaskSource for DemoTaskSource {
    fn name(&self) -> &'static str {
        "demo"
    }

    fn tasks(&self, _case: &Case, now: NaiveDateTime) -> Vec<Task> {
        let today = now.date();
        self.roster
            .iter()
            .map(|template| {
                let mut task = Task::new(template.id, template.title)
                    .with_responsible(template.responsible);
                task.due_date = template.offset_days.and_then(|offset| shift(today, offset));
                task
            })
            .collect()
    }

    fn persists_completion(&self) -> bool {
        false
    }
}

/// Pick the task source for a case from configuration
#[must_use]
pub fn task_source_for(case: &Case, config: &EngineConfig) -> Box<dyn TaskSource> {
    if config.is_demo_case(&case.id) {
        log::debug!("Case {} uses the demo task roster", case.id);
        Box::new(DemoTaskSource::default())
    } else {
        Box::new(RealTaskSource)
    }
}
