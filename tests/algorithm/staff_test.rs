#[cfg(test)]
mod tests {
    use case_view::algorithm::aggregation::*;
    use case_view::models::{BreakdownEntry, BreakdownKind, StaffAggregate};
    use case_view::utils::fixtures::sample_staff_roster;

    #[test]
    fn test_sample_roster_is_balanced() {
        let roster = sample_staff_roster();
        assert!(validate_roster(&roster).is_empty());
    }

    #[test]
    fn test_unbalanced_breakdown_is_reported() {
        let mut staff = StaffAggregate::new("s1", "Pat");
        staff.case_type = vec![
            BreakdownEntry::new("Auto Accident", 5.0, 70.0, "#111"),
            BreakdownEntry::new("Premises", 2.0, 20.0, "#222"),
        ];
        let issues = validate_roster(&[staff]);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].kind, BreakdownKind::CaseType);
        assert!((issues[0].percentage_sum - 90.0).abs() < 1e-9);
    }

    #[test]
    fn test_rounding_drift_within_tolerance() {
        let entries = vec![
            BreakdownEntry::new("a", 1.0, 33.3, "#1"),
            BreakdownEntry::new("b", 1.0, 33.3, "#2"),
            BreakdownEntry::new("c", 1.0, 33.3, "#3"),
        ];
        assert!(is_balanced(&entries));
    }

    #[test]
    fn test_recompute_sums_to_hundred() {
        let mut entries = vec![
            BreakdownEntry::new("a", 1.0, 0.0, "#1"),
            BreakdownEntry::new("b", 1.0, 0.0, "#2"),
            BreakdownEntry::new("c", 1.0, 0.0, "#3"),
        ];
        recompute_percentages(&mut entries);
        let sum: f64 = entries.iter().map(|e| e.percentage).sum();
        assert_eq!(sum, 100.0);
        assert_eq!(entries[0].percentage, 34.0);
    }

    #[test]
    fn test_all_staff_view_combines_roster() {
        let roster = sample_staff_roster();
        let all = staff_view(&roster, "all").unwrap();
        assert_eq!(all.id, "all");

        let treating = all
            .case_status
            .iter()
            .find(|e| e.name == "Treating")
            .unwrap();
        assert_eq!(treating.value, 9.0);
        assert_eq!(treating.percentage, 45.0);
        for kind in BreakdownKind::ALL {
            assert!(is_balanced(all.breakdown(kind)));
        }
    }

    #[test]
    fn test_single_staff_view() {
        let roster = sample_staff_roster();
        let chen = staff_view(&roster, "staff-chen").unwrap();
        assert_eq!(chen.name, "L. Chen");
        assert!(staff_view(&roster, "staff-nobody").is_none());
    }
}
