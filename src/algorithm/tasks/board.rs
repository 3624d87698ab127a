//! Task panel state for the client workspace
//!
//! Holds the active case's upcoming view, the current-task pointer and the
//! active workspace tab. Demo-roster completions live only here and are
//! dropped when the user leaves the task tab or switches case.

use std::fmt;

use chrono::NaiveDateTime;

use super::filter::upcoming_tasks;
use super::selection::{mark_complete, reconcile_selection};
use super::source::{TaskSource, task_source_for};
use crate::config::EngineConfig;
use crate::models::{Case, Task, TaskStatus};

/// Tabs of the client-detail workspace
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum WorkspaceTab {
    #[default]
    Overview,
    Defendants,
    Insurance,
    Vehicles,
    Medical,
    Tasks,
    Documents,
    Litigation,
}

/// Upcoming-task view with a current-task pointer
pub struct TaskBoard {
    source: Box<dyn TaskSource>,
    case_id: String,
    active_tab: WorkspaceTab,
    /// Raw source tasks as loaded, used to discard ephemeral completions
    baseline: Vec<Task>,
    loaded_at: NaiveDateTime,
    upcoming: Vec<Task>,
    selected: Option<String>,
}

impl TaskBoard {
    /// Build a board for a case, choosing its task source from configuration
    #[must_use]
    pub fn for_case(case: &Case, config: &EngineConfig, now: NaiveDateTime) -> Self {
        Self::with_source(case, task_source_for(case, config), now)
    }

    /// Build a board with an explicit task source
    #[must_use]
    pub fn with_source(case: &Case, source: Box<dyn TaskSource>, now: NaiveDateTime) -> Self {
        let mut board = Self {
            source,
            case_id: case.id.clone(),
            active_tab: WorkspaceTab::default(),
            baseline: Vec::new(),
            loaded_at: now,
            upcoming: Vec::new(),
            selected: None,
        };
        board.load(case, now);
        board
    }

    /// Reload tasks from the source and reconcile the selection
    pub fn load(&mut self, case: &Case, now: NaiveDateTime) {
        self.case_id = case.id.clone();
        self.baseline = self.source.tasks(case, now);
        self.loaded_at = now;
        self.rebuild_view();
        log::debug!(
            "Loaded {} upcoming tasks for case {} from {} source",
            self.upcoming.len(),
            self.case_id,
            self.source.name()
        );
    }

    fn rebuild_view(&mut self) {
        self.upcoming = upcoming_tasks(&self.baseline, self.loaded_at);
        self.selected = reconcile_selection(self.selected.as_deref(), &self.upcoming);
    }

    #[must_use]
    pub fn case_id(&self) -> &str {
        &self.case_id
    }

    #[must_use]
    pub fn active_tab(&self) -> WorkspaceTab {
        self.active_tab
    }

    #[must_use]
    pub fn source_name(&self) -> &'static str {
        self.source.name()
    }

    /// The ordered upcoming view
    #[must_use]
    pub fn upcoming(&self) -> &[Task] {
        &self.upcoming
    }

    /// Currently selected task
    #[must_use]
    pub fn selected(&self) -> Option<&Task> {
        let id = self.selected.as_deref()?;
        self.upcoming.iter().find(|t| t.id == id)
    }

    #[must_use]
    pub fn selected_id(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Point at a task in the view. Returns `false` for unknown ids.
    pub fn select(&mut self, task_id: &str) -> bool {
        if self.upcoming.iter().any(|t| t.id == task_id) {
            self.selected = Some(task_id.to_string());
            true
        } else {
            false
        }
    }

    /// Complete the selected task and return the new selection
    pub fn complete_selected(&mut self) -> Option<&str> {
        let selected = self.selected.clone()?;
        let (updated, next) = mark_complete(&self.upcoming, &selected);

        if self.source.persists_completion() {
            for task in updated.iter().filter(|t| t.is_completed()) {
                if let Some(raw) = self.baseline.iter_mut().find(|t| t.id == task.id) {
                    raw.complete();
                }
            }
        }

        self.upcoming = updated;
        self.selected = next;
        self.selected.as_deref()
    }

    /// Switch workspace tab. Leaving the task tab discards demo completions.
    pub fn set_active_tab(&mut self, tab: WorkspaceTab) {
        let leaving_tasks = self.active_tab == WorkspaceTab::Tasks && tab != WorkspaceTab::Tasks;
        self.active_tab = tab;
        if leaving_tasks && !self.source.persists_completion() {
            log::debug!("Resetting demo task state for case {}", self.case_id);
            self.selected = None;
            self.rebuild_view();
        }
    }

    /// Switch to another case, re-selecting its task source
    pub fn set_active_case(&mut self, case: &Case, config: &EngineConfig, now: NaiveDateTime) {
        self.source = task_source_for(case, config);
        self.selected = None;
        self.load(case, now);
    }

    /// Write completions back to the case record.
    ///
    /// Does nothing for sources that keep completion state in memory only.
    /// Returns the number of tasks whose status changed.
    pub fn apply_to_case(&self, case: &mut Case) -> usize {
        if !self.source.persists_completion() || case.id != self.case_id {
            return 0;
        }
        let mut changed = 0;
        for task in case.tasks.iter_mut().filter(|t| t.status == TaskStatus::Pending) {
            if self.baseline.iter().any(|b| b.id == task.id && b.is_completed()) {
                task.complete();
                changed += 1;
            }
        }
        changed
    }
}

impl fmt::Debug for TaskBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TaskBoard")
            .field("source", &self.source.name())
            .field("case_id", &self.case_id)
            .field("active_tab", &self.active_tab)
            .field("upcoming", &self.upcoming.len())
            .field("selected", &self.selected)
            .finish()
    }
}
