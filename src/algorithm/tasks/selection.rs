//! Current-task pointer over the upcoming view

use crate::models::Task;

/// First task of the upcoming view, if any
#[must_use]
pub fn select_initial_task(upcoming: &[Task]) -> Option<&Task> {
    upcoming.first()
}

/// Keep a selection only while it still exists in the upcoming view.
///
/// A missing or stale selection falls back to the first task, or to none
/// when the view is empty.
#[must_use]
pub fn reconcile_selection(selected: Option<&str>, upcoming: &[Task]) -> Option<String> {
    match selected {
        Some(id) if upcoming.iter().any(|t| t.id == id) => Some(id.to_string()),
        Some(id) => {
            log::debug!("Selected task {id} no longer in view, resetting selection");
            select_initial_task(upcoming).map(|t| t.id.clone())
        }
        None => select_initial_task(upcoming).map(|t| t.id.clone()),
    }
}

/// Complete the selected task and advance the pointer.
///
/// The next selection is the task after the completed one by position in
/// `upcoming`; no dates are re-evaluated. Completing the last task leaves the
/// pointer unset. Completing an already-completed task changes no status
/// but still yields the same next pointer. An id not present in the view
/// leaves the tasks untouched and resets the pointer like a stale selection.
#[must_use]
pub fn mark_complete(upcoming: &[Task], selected_id: &str) -> (Vec<Task>, Option<String>) {
    let mut updated = upcoming.to_vec();

    let Some(position) = updated.iter().position(|t| t.id == selected_id) else {
        let next = reconcile_selection(Some(selected_id), &updated);
        return (updated, next);
    };

    updated[position].complete();
    let next = updated.get(position + 1).map(|t| t.id.clone());
    (updated, next)
}
