#[cfg(test)]
mod tests {
    use case_view::algorithm::tasks::*;
    use case_view::models::{Case, Task, TaskStatus};
    use case_view::utils::fixtures::sample_case;
    use case_view::EngineConfig;

    use crate::utils::{at, date};

    fn pending(id: &str, due: Option<(i32, u32, u32)>) -> Task {
        let task = Task::new(id, format!("Task {id}"));
        match due {
            Some((y, m, d)) => task.with_due_date(date(y, m, d)),
            None => task,
        }
    }

    fn completed(id: &str, due: Option<(i32, u32, u32)>) -> Task {
        let mut task = pending(id, due);
        task.complete();
        task
    }

    #[test]
    fn test_overdue_pending_hidden_future_kept() {
        let now = at(2024, 3, 15, 12);
        let tasks = vec![
            pending("yesterday", Some((2024, 3, 14))),
            pending("tomorrow", Some((2024, 3, 16))),
        ];
        let upcoming = upcoming_tasks(&tasks, now);
        assert_eq!(upcoming.len(), 1);
        assert_eq!(upcoming[0].id, "tomorrow");
        assert_eq!(overdue_count(&tasks, now), 1);
    }

    #[test]
    fn test_due_today_is_upcoming_all_day() {
        let tasks = vec![pending("today", Some((2024, 3, 15)))];
        assert_eq!(upcoming_tasks(&tasks, at(2024, 3, 15, 23)).len(), 1);
    }

    #[test]
    fn test_completed_tasks_always_shown() {
        let now = at(2024, 3, 15, 12);
        let tasks = vec![
            completed("old", Some((2023, 1, 1))),
            completed("undated", None),
            pending("later", Some((2024, 4, 1))),
        ];
        let upcoming = upcoming_tasks(&tasks, now);
        let ids: Vec<_> = upcoming.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["old", "later", "undated"]);
    }

    #[test]
    fn test_undated_tasks_sort_last() {
        let now = at(2024, 3, 15, 12);
        let tasks = vec![
            pending("b", None),
            pending("a", Some((2024, 5, 1))),
            pending("c", Some((2024, 3, 20))),
        ];
        let ids: Vec<_> = upcoming_tasks(&tasks, now)
            .into_iter()
            .map(|t| t.id)
            .collect();
        assert_eq!(ids, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_upcoming_is_idempotent() {
        let now = at(2024, 3, 15, 12);
        let case = sample_case(date(2024, 3, 15));
        let once = upcoming_tasks(&case.tasks, now);
        let twice = upcoming_tasks(&once, now);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_mark_complete_advances_by_position() {
        let upcoming = vec![
            pending("t1", Some((2024, 3, 16))),
            pending("t2", Some((2024, 3, 17))),
            pending("t3", Some((2024, 3, 18))),
        ];

        let (updated, next) = mark_complete(&upcoming, "t1");
        assert_eq!(updated[0].status, TaskStatus::Completed);
        assert_eq!(updated[1].status, TaskStatus::Pending);
        assert_eq!(next.as_deref(), Some("t2"));

        let (updated, next) = mark_complete(&updated, "t3");
        assert_eq!(updated[2].status, TaskStatus::Completed);
        assert_eq!(next, None);
    }

    #[test]
    fn test_mark_complete_on_completed_task_keeps_status() {
        let upcoming = vec![completed("t1", None), pending("t2", None)];
        let (updated, next) = mark_complete(&upcoming, "t1");
        assert_eq!(updated, upcoming);
        assert_eq!(next.as_deref(), Some("t2"));
    }

    #[test]
    fn test_mark_complete_unknown_id_resets_pointer() {
        let upcoming = vec![pending("t1", None), pending("t2", None)];
        let (updated, next) = mark_complete(&upcoming, "missing");
        assert_eq!(updated, upcoming);
        assert_eq!(next.as_deref(), Some("t1"));
    }

    #[test]
    fn test_selection_reconciles_against_view() {
        let upcoming = vec![pending("t1", None), pending("t2", None)];
        assert_eq!(select_initial_task(&upcoming).map(|t| t.id.as_str()), Some("t1"));
        assert_eq!(reconcile_selection(Some("t2"), &upcoming).as_deref(), Some("t2"));
        assert_eq!(reconcile_selection(Some("gone"), &upcoming).as_deref(), Some("t1"));
        assert_eq!(reconcile_selection(Some("t2"), &[]), None);
    }

    #[test]
    fn test_tasks_grouped_by_responsible() {
        let tasks = vec![
            pending("t1", None).with_responsible("Attorney"),
            pending("t2", Some((2024, 3, 20))).with_responsible("Attorney"),
            pending("t3", None),
        ];
        let groups = tasks_by_responsible(&tasks);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups["Attorney"][0].id, "t2");
        assert_eq!(groups["Unassigned"][0].id, "t3");
    }

    #[test]
    fn test_board_completion_persists_for_real_cases() {
        let today = date(2024, 3, 15);
        let now = at(2024, 3, 15, 9);
        let mut case = sample_case(today);
        let mut board = TaskBoard::for_case(&case, &EngineConfig::default(), now);
        assert_eq!(board.source_name(), "case");

        assert!(board.select("task-records"));
        let next = board.complete_selected().map(str::to_string);
        assert_eq!(next.as_deref(), Some("task-demand"));

        assert_eq!(board.apply_to_case(&mut case), 1);
        assert!(case.task("task-records").is_some_and(Task::is_completed));
    }

    fn demo_setup() -> (Case, EngineConfig) {
        let case = sample_case(date(2024, 3, 15));
        let config = EngineConfig {
            demo_case_id: Some(case.id.clone()),
            ..Default::default()
        };
        (case, config)
    }

    #[test]
    fn test_demo_roster_replaces_case_tasks() {
        let (case, config) = demo_setup();
        let board = TaskBoard::for_case(&case, &config, at(2024, 3, 15, 9));
        assert_eq!(board.source_name(), "demo");

        let ids: Vec<_> = board.upcoming().iter().map(|t| t.id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["demo-records", "demo-lor", "demo-limits", "demo-demand", "demo-checkin"]
        );
        assert_eq!(board.selected_id(), Some("demo-records"));
    }

    #[test]
    fn test_demo_completion_resets_on_tab_change() {
        let (mut case, config) = demo_setup();
        let now = at(2024, 3, 15, 9);
        let mut board = TaskBoard::for_case(&case, &config, now);
        board.set_active_tab(WorkspaceTab::Tasks);

        assert_eq!(board.complete_selected(), Some("demo-lor"));
        assert!(board.upcoming()[0].is_completed());

        board.set_active_tab(WorkspaceTab::Overview);
        assert!(board.upcoming().iter().all(|t| !t.is_completed()));
        assert_eq!(board.selected_id(), Some("demo-records"));
        assert_eq!(board.apply_to_case(&mut case), 0);
    }

    #[test]
    fn test_demo_completion_resets_on_case_change() {
        let (case, config) = demo_setup();
        let now = at(2024, 3, 15, 9);
        let mut board = TaskBoard::for_case(&case, &config, now);
        board.set_active_tab(WorkspaceTab::Tasks);
        board.complete_selected();

        let other = Case::new("case-other", "Other Client", date(2024, 1, 1), "2026-01-01");
        board.set_active_case(&other, &config, now);
        assert_eq!(board.source_name(), "case");
        assert!(board.upcoming().is_empty());
        assert_eq!(board.selected_id(), None);

        board.set_active_case(&case, &config, now);
        assert_eq!(board.source_name(), "demo");
        assert!(board.upcoming().iter().all(|t| !t.is_completed()));
    }

    #[test]
    fn test_switching_between_non_task_tabs_keeps_state() {
        let (case, config) = demo_setup();
        let mut board = TaskBoard::for_case(&case, &config, at(2024, 3, 15, 9));
        board.set_active_tab(WorkspaceTab::Tasks);
        board.complete_selected();
        board.set_active_tab(WorkspaceTab::Tasks);
        assert!(board.upcoming()[0].is_completed());
    }
}
