#[cfg(test)]
mod tests {
    use case_view::algorithm::timeline::*;
    use case_view::models::Case;

    use crate::utils::{at, date};

    #[test]
    fn test_five_milestones_in_fixed_order() {
        let timeline = derive_timeline(date(2024, 3, 15), "2026-03-15", at(2024, 3, 20, 10));
        let labels: Vec<_> = timeline.iter().map(|m| m.label).collect();
        assert_eq!(
            labels,
            vec![
                "Date of Loss",
                "Medical Records",
                "Policy Limits",
                "Demand Letter",
                "SOL Date"
            ]
        );
    }

    #[test]
    fn test_offsets_from_date_of_loss() {
        let timeline = derive_timeline(date(2024, 3, 15), "2026-03-15", at(2024, 3, 20, 10));
        assert_eq!(timeline[1].date, Some(date(2024, 3, 22)));
        assert_eq!(timeline[2].date, Some(date(2024, 3, 29)));
        assert_eq!(timeline[3].date, Some(date(2024, 4, 14)));
        assert_eq!(timeline[4].date, Some(date(2026, 3, 15)));
    }

    #[test]
    fn test_date_of_loss_status_by_day() {
        let dol = date(2024, 3, 15);

        let same_day = derive_timeline(dol, "2026-03-15", at(2024, 3, 15, 18));
        assert_eq!(same_day[0].status, MilestoneStatus::Current);

        let next_day = derive_timeline(dol, "2026-03-15", at(2024, 3, 16, 0));
        assert_eq!(next_day[0].status, MilestoneStatus::Completed);

        let day_before = derive_timeline(dol, "2026-03-15", at(2024, 3, 14, 23));
        assert_eq!(day_before[0].status, MilestoneStatus::Upcoming);
    }

    #[test]
    fn test_time_of_day_does_not_change_status() {
        let dol = date(2024, 3, 15);
        let morning = derive_timeline(dol, "2026-03-15", at(2024, 3, 22, 0));
        let evening = derive_timeline(dol, "2026-03-15", at(2024, 3, 22, 23));
        assert_eq!(morning, evening);
        assert_eq!(morning[1].status, MilestoneStatus::Current);
    }

    #[test]
    fn test_timezone_suffix_on_sol_is_ignored() {
        let timeline = derive_timeline(date(2024, 3, 15), "2026-03-15 EST", at(2024, 3, 20, 10));
        assert_eq!(timeline[4].date, Some(date(2026, 3, 15)));
        assert_eq!(timeline[4].status, MilestoneStatus::Upcoming);
    }

    #[test]
    fn test_unparsable_sol_is_undated_and_upcoming() {
        let timeline = derive_timeline(date(2024, 3, 15), "ask adjuster", at(2030, 1, 1, 10));
        assert_eq!(timeline.len(), 5);
        assert_eq!(timeline[4].date, None);
        assert_eq!(timeline[4].status, MilestoneStatus::Upcoming);
    }

    #[test]
    fn test_configured_offsets() {
        let config = TimelineConfig {
            medical_records_offset_days: 10,
            ..Default::default()
        };
        let case = Case::new("c1", "Jane Doe", date(2024, 3, 15), "2026-03-15");
        let timeline = derive_case_timeline(&case, &config, at(2024, 3, 20, 10));
        assert_eq!(timeline[1].date, Some(date(2024, 3, 25)));
    }

    #[test]
    fn test_header_timeline_is_fixed() {
        // Header rail shows constant dates regardless of case or clock
        let header = derive_header_timeline();
        assert_eq!(header.len(), 3);
        assert_eq!(header[0].kind, MilestoneKind::MedicalRecords);
        assert_eq!(header[0].status, MilestoneStatus::Completed);
        assert_eq!(header[1].date, Some(date(2024, 3, 29)));
        assert_eq!(header[1].status, MilestoneStatus::Current);
        assert_eq!(header[2].status, MilestoneStatus::Upcoming);
    }

    #[test]
    fn test_sol_urgency_thresholds() {
        let config = TimelineConfig::default();
        let now = at(2025, 1, 1, 9);
        assert_eq!(sol_urgency("2024-12-31", now, &config), SolUrgency::Expired);
        assert_eq!(sol_urgency("2025-01-20", now, &config), SolUrgency::Critical);
        assert_eq!(sol_urgency("2025-03-01", now, &config), SolUrgency::Warning);
        assert_eq!(sol_urgency("2026-01-01", now, &config), SolUrgency::Normal);
        assert_eq!(sol_urgency("", now, &config), SolUrgency::Unknown);
        assert_eq!(days_until_sol("2025-01-11 UTC", now), Some(10));
    }
}
