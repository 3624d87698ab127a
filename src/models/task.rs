//! Task model and its lifecycle
//!
//! A task starts `Pending` and moves to `Completed` only through an explicit
//! completion. There is no way back to `Pending`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::traits::string_entity;
use crate::utils::date::deserialize_optional_date;

/// Lifecycle state of a task
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    #[default]
    Pending,
    Completed,
}

/// A to-do item on a case
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Blank or unreadable due dates load as `None`
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub status: TaskStatus,
    /// Party responsible for the task, e.g. "Attorney" or "Client"
    #[serde(default)]
    pub responsible: String,
}

impl Task {
    /// Create a pending task with no due date
    #[must_use]
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: None,
            due_date: None,
            status: TaskStatus::Pending,
            responsible: String::new(),
        }
    }

    #[must_use]
    pub fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }

    #[must_use]
    pub fn with_responsible(mut self, responsible: impl Into<String>) -> Self {
        self.responsible = responsible.into();
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.status == TaskStatus::Completed
    }

    /// Mark the task completed. Completing twice is a no-op.
    pub fn complete(&mut self) {
        self.status = TaskStatus::Completed;
    }
}

string_entity! {
    Task => "task",
}
