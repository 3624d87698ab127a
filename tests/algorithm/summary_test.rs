#[cfg(test)]
mod tests {
    use case_view::algorithm::tasks::{DemoTaskSource, TaskBoard, TaskSource, overdue_count};
    use case_view::algorithm::timeline::{MilestoneStatus, SolUrgency};
    use case_view::utils::fixtures::sample_case;
    use case_view::{CaseSummary, EngineConfig};
    use rust_decimal_macros::dec;

    use crate::utils::date;

    #[test]
    fn test_sample_case_summary() {
        let today = date(2025, 5, 1);
        let now = today.and_hms_opt(10, 0, 0).unwrap();
        let case = sample_case(today);

        let summary = CaseSummary::build(&case, &EngineConfig::default(), now);
        assert_eq!(summary.progress, 45);
        assert_eq!(summary.financials.net_client_payment, dec!(42750));
        assert_eq!(summary.timeline.len(), 5);
        assert_eq!(summary.timeline[0].status, MilestoneStatus::Completed);
        assert_eq!(summary.sol_urgency, SolUrgency::Normal);
        assert_eq!(summary.upcoming_task_count, 4);
        assert_eq!(summary.overdue_task_count, 1);
        assert_eq!(
            summary.next_task.as_ref().map(|t| t.id.as_str()),
            Some("task-records")
        );
        assert_eq!(summary.document_count, 1);
    }

    #[test]
    fn test_demo_case_summary_matches_task_board() {
        let today = date(2025, 5, 1);
        let now = today.and_hms_opt(10, 0, 0).unwrap();
        let case = sample_case(today);
        let config = EngineConfig {
            demo_case_id: Some(case.id.clone()),
            ..Default::default()
        };

        let summary = CaseSummary::build(&case, &config, now);
        let board = TaskBoard::for_case(&case, &config, now);
        assert_eq!(summary.upcoming_task_count, board.upcoming().len());
        assert_eq!(
            summary.next_task.as_ref().map(|t| t.id.as_str()),
            board.selected_id()
        );
        assert_eq!(
            summary.overdue_task_count,
            overdue_count(&DemoTaskSource::default().tasks(&case, now), now)
        );
        assert!(summary.next_task.is_some_and(|t| t.id.starts_with("demo-")));
    }

    #[test]
    fn test_summary_display_flags_client_owing() {
        let today = date(2025, 5, 1);
        let now = today.and_hms_opt(10, 0, 0).unwrap();
        let mut case = sample_case(today);
        case.insurance_policies.clear();

        let summary = CaseSummary::build(&case, &EngineConfig::default(), now);
        let rendered = summary.to_string();
        assert!(rendered.contains("Net to Client: -$7,500.00 (client owes)"));
        assert!(rendered.contains("Date of Loss"));
    }
}
