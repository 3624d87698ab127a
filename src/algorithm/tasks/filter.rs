//! Upcoming-task filtering and ordering

use std::cmp::Ordering;
use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveDateTime};

use crate::models::Task;

/// Whether a task belongs in the upcoming view on `today`.
///
/// Tasks with no due date, a due date of today or later, or that are already
/// completed are visible. Completed tasks are never hidden by date.
#[must_use]
pub fn is_upcoming(task: &Task, today: NaiveDate) -> bool {
    task.is_completed() || task.due_date.is_none_or(|due| due >= today)
}

/// Ordering for the upcoming view: due date ascending with undated tasks
/// last, then title case-insensitively
#[must_use]
pub fn compare_tasks(a: &Task, b: &Task) -> Ordering {
    let by_due = match (a.due_date, b.due_date) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    };
    by_due.then_with(|| a.title.to_lowercase().cmp(&b.title.to_lowercase()))
}

/// Filter and sort a task list into the upcoming view.
///
/// Date comparison uses the calendar day of `now`. Applying this to its own
/// output returns the same list.
#[must_use]
pub fn upcoming_tasks(tasks: &[Task], now: NaiveDateTime) -> Vec<Task> {
    let today = now.date();
    let mut upcoming: Vec<Task> = tasks
        .iter()
        .filter(|task| is_upcoming(task, today))
        .cloned()
        .collect();
    upcoming.sort_by(compare_tasks);
    upcoming
}

/// Pending tasks whose due date has passed
#[must_use]
pub fn overdue_count(tasks: &[Task], now: NaiveDateTime) -> usize {
    let today = now.date();
    tasks
        .iter()
        .filter(|t| !t.is_completed() && t.due_date.is_some_and(|due| due < today))
        .count()
}

/// Group tasks by responsible party, each group in upcoming-view order.
///
/// Tasks without a responsible party are grouped under "Unassigned".
#[must_use]
pub fn tasks_by_responsible(tasks: &[Task]) -> BTreeMap<String, Vec<Task>> {
    let mut groups: BTreeMap<String, Vec<Task>> = BTreeMap::new();
    for task in tasks {
        let owner = match task.responsible.trim() {
            "" => "Unassigned".to_string(),
            name => name.to_string(),
        };
        groups.entry(owner).or_default().push(task.clone());
    }
    for group in groups.values_mut() {
        group.sort_by(compare_tasks);
    }
    groups
}
