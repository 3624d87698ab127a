#[cfg(test)]
mod tests {
    use case_view::algorithm::aggregation::*;
    use case_view::models::{Money, PolicyType, Visit, VisitStatus};
    use case_view::utils::fixtures::sample_case;
    use rust_decimal_macros::dec;
    use smallvec::smallvec;

    use crate::utils::{case_with, date};

    #[test]
    fn test_holy_grail_figures() {
        let case = case_with(
            &[
                ("bi", PolicyType::Bi, "$50,000"),
                ("um", PolicyType::Um, "$25,000"),
            ],
            &[dec!(4500), dec!(3000)],
        );

        let financials = CaseFinancials::compute(&case, dec!(0.33));
        assert_eq!(financials.total_policy_limit, dec!(75000));
        assert_eq!(financials.estimated_fee, dec!(24750));
        assert_eq!(financials.recovery_after_fee, dec!(50250));
        assert_eq!(financials.total_outstanding_medical, dec!(7500));
        assert_eq!(financials.net_client_payment, dec!(42750));
        assert!(!financials.client_owes());

        let formatted = financials.formatted();
        assert_eq!(formatted.total_policy_limit, "$75,000.00");
        assert_eq!(formatted.estimated_fee, "$24,750.00");
        assert_eq!(formatted.net_client_payment, "$42,750.00");
        assert_eq!(formatted.total_policy_limit_compact, "$75.0K");
    }

    #[test]
    fn test_odd_totals_keep_exact_cents() {
        let case = case_with(
            &[
                ("bi", PolicyType::Bi, "$33,333.33"),
                ("pip", PolicyType::Pip, "$0.10"),
                ("um", PolicyType::Um, "$0.20"),
            ],
            &[dec!(0.1), dec!(0.2)],
        );

        let financials = CaseFinancials::compute(&case, dec!(0.33));
        assert_eq!(financials.total_policy_limit, dec!(33333.63));
        assert_eq!(financials.estimated_fee, dec!(11000.0979));
        assert_eq!(financials.total_outstanding_medical, dec!(0.3));
        assert_eq!(financials.net_client_payment, dec!(22333.2321));
        assert_eq!(financials.formatted().net_client_payment, "$22,333.23");
        assert_eq!(financials.formatted().estimated_fee, "$11,000.10");
    }

    #[test]
    fn test_fee_and_recovery_use_same_total() {
        let case = case_with(&[("bi", PolicyType::Bi, "$100,000")], &[]);
        let financials = CaseFinancials::compute(&case, dec!(0.33));
        assert_eq!(
            financials.estimated_fee + financials.recovery_after_fee,
            financials.total_policy_limit
        );
    }

    #[test]
    fn test_no_policies_means_client_owes_outstanding() {
        let case = case_with(&[], &[dec!(1200)]);
        assert_eq!(total_policy_limit(&case), Money::ZERO);
        assert_eq!(net_client_payment(&case, dec!(0.33)), dec!(-1200));

        let financials = CaseFinancials::compute(&case, dec!(0.33));
        assert!(financials.client_owes());
        assert_eq!(financials.formatted().net_client_payment, "-$1,200.00");
    }

    #[test]
    fn test_unparsable_limits_count_as_zero() {
        let case = case_with(
            &[
                ("bi", PolicyType::Bi, "TBD"),
                ("um", PolicyType::Um, "$10,000"),
                ("pip", PolicyType::Pip, ""),
            ],
            &[],
        );
        assert_eq!(total_policy_limit(&case), dec!(10000));
    }

    #[test]
    fn test_limits_grouped_by_policy_type() {
        let case = case_with(
            &[
                ("bi-1", PolicyType::Bi, "$50,000"),
                ("bi-2", PolicyType::Bi, "$25,000"),
                ("pip", PolicyType::Pip, "$10,000"),
            ],
            &[],
        );
        let by_type = limits_by_policy_type(&case);
        assert_eq!(by_type[&PolicyType::Bi], dec!(75000));
        assert_eq!(by_type[&PolicyType::Pip], dec!(10000));
        assert!(!by_type.contains_key(&PolicyType::Um));
    }

    #[test]
    fn test_sample_case_medical_rollups() {
        let case = sample_case(date(2025, 5, 1));

        let totals = medical_billing_totals(&case);
        assert_eq!(totals.total_billed, dec!(10000));
        assert_eq!(totals.outstanding, dec!(7500));
        assert_eq!(totals.provider_count, 2);
        assert_eq!(totals.visit_count, 3);

        let statuses: Vec<_> = visit_status_breakdown(&case)
            .into_iter()
            .map(|s| (s.status, s.count))
            .collect();
        assert_eq!(
            statuses,
            vec![
                (VisitStatus::Pending, 1),
                (VisitStatus::Paid, 1),
                (VisitStatus::Denied, 1)
            ]
        );

        assert_eq!(expected_settlement_total(&case), dec!(45000));
    }

    #[test]
    fn test_cpt_frequency_orders_by_count_then_code() {
        let mut case = sample_case(date(2025, 5, 1));
        case.medical_providers[0].visits.push(Visit {
            date: date(2025, 3, 1),
            description: "Re-check".to_string(),
            billed_amount: dec!(150),
            status: VisitStatus::Pending,
            cpt_codes: smallvec!["99214".to_string(), " ".to_string()],
        });

        let frequency = cpt_code_frequency(&case);
        assert_eq!(frequency[0], ("99214".to_string(), 2));
        assert_eq!(frequency[1], ("72040".to_string(), 1));
        assert_eq!(frequency.len(), 5);
    }

    #[test]
    fn test_phase_chart_all_staff_sums_columns() {
        let rows = vec![
            PhaseRow::new("Intake").with_value("s1", 3.0).with_value("s2", 2.0),
            PhaseRow::new("Treatment").with_value("s1", 4.0),
        ];

        let points = aggregate_by_phase_and_staff(&rows, &StaffFilter::All);
        assert_eq!(points.len(), 2);
        assert_eq!(points[0].phase, "Intake");
        assert_eq!(points[0].series, Some(ChartSeries::AllStaffTotal(5.0)));
        assert_eq!(points[1].series.as_ref().map(ChartSeries::value), Some(4.0));
    }

    #[test]
    fn test_phase_chart_single_staff_leaves_missing_absent() {
        let rows = vec![
            PhaseRow::new("Intake").with_value("s1", 3.0).with_value("s2", 2.0),
            PhaseRow::new("Treatment").with_value("s1", 4.0),
        ];

        let points = aggregate_by_phase_and_staff(&rows, &StaffFilter::Staff("s2".to_string()));
        assert_eq!(
            points[0].series,
            Some(ChartSeries::SingleStaffSeries("s2".to_string(), 2.0))
        );
        assert_eq!(points[0].series.as_ref().map(ChartSeries::series_key), Some("s2"));
        assert_eq!(points[1].series, None);
    }

    #[test]
    fn test_phase_rows_from_cases_by_policy_limit() {
        let mut a = case_with(&[("bi", PolicyType::Bi, "$50,000")], &[]);
        a.phase = "Negotiation".to_string();
        a.assigned_staff = Some("s1".to_string());
        let mut b = case_with(&[("um", PolicyType::Um, "$20,000")], &[]);
        b.phase = "Negotiation".to_string();

        let rows = phase_rows_from_cases([&a, &b], PhaseMetric::PolicyLimit);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].values.get("s1"), Some(&50_000.0));
        assert_eq!(rows[0].values.get("unassigned"), Some(&20_000.0));
    }
}
