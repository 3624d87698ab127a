//! Sample records
//!
//! A fully populated case and staff roster, dated relative to a given day so
//! the derived views always have something current to show. Used by the
//! binary when no case file is given and by the tests.

use chrono::{Datelike, NaiveDate, NaiveDateTime, TimeDelta};
use rust_decimal_macros::dec;
use smallvec::smallvec;

use crate::models::{
    BillingInfo, BreakdownEntry, Case, CaseLogEntry, Defendant, Document, DocumentType,
    InsurancePolicy, MedicalProvider, MedicalRequest, MedicalRequestStatus, PolicyType,
    StaffAggregate, Task, TaskStatus, Vehicle, Visit, VisitStatus,
};

/// Id of the sample case
pub const SAMPLE_CASE_ID: &str = "case-1042";

fn offset(day: NaiveDate, days: i64) -> NaiveDate {
    day.checked_add_signed(TimeDelta::days(days)).unwrap_or(day)
}

fn at_nine(day: NaiveDate) -> NaiveDateTime {
    day.and_hms_opt(9, 0, 0).unwrap_or_default()
}

/// A populated auto-accident case as of `today`.
///
/// Policy limits total $75,000 and outstanding medical balances total
/// $7,500, so at the default fee rate the client nets $42,750.
#[must_use]
pub fn sample_case(today: NaiveDate) -> Case {
    let date_of_loss = offset(today, -120);
    let sol = date_of_loss
        .with_year(date_of_loss.year() + 2)
        .unwrap_or_else(|| offset(date_of_loss, 730));

    let mut case = Case::new(
        SAMPLE_CASE_ID,
        "Maria Alvarez",
        date_of_loss,
        format!("{} EST", sol.format("%Y-%m-%d")),
    )
    .with_progress(45);
    case.case_type = "Auto Accident".to_string();
    case.case_status = "Treating".to_string();
    case.phase = "Pre-Litigation".to_string();
    case.assigned_staff = Some("staff-ramos".to_string());

    case.defendants = vec![Defendant {
        id: "def-1".to_string(),
        name: "Derek Holt".to_string(),
        address: Some("418 Palm Ave, Tampa, FL".to_string()),
        phone: None,
    }];
    case.vehicles = vec![Vehicle {
        id: "veh-1".to_string(),
        year: Some(2019),
        make: "Toyota".to_string(),
        model: "Camry".to_string(),
        owner: None,
    }];

    let mut bi = InsurancePolicy::new("pol-bi", PolicyType::Bi, "$50,000");
    bi.carrier = "Coastal Mutual".to_string();
    bi.claim_number = Some("CM-88213".to_string());
    bi.expected_settlement = "$35,000".to_string();
    bi.defendant_id = Some("def-1".to_string());
    let mut um = InsurancePolicy::new("pol-um", PolicyType::Um, "$25,000");
    um.carrier = "Sunshine Auto".to_string();
    um.expected_settlement = "$10,000".to_string();
    um.vehicle_id = Some("veh-1".to_string());
    case.insurance_policies = vec![bi, um];

    let mut ortho = MedicalProvider::new(
        "prov-ortho",
        "Bayview Orthopedics",
        BillingInfo::new(dec!(6000), dec!(1000), dec!(500)),
    );
    ortho.specialty = "Orthopedics".to_string();
    ortho.visits = vec![
        Visit {
            date: offset(date_of_loss, 3),
            description: "Initial evaluation".to_string(),
            billed_amount: dec!(2500),
            status: VisitStatus::Paid,
            cpt_codes: smallvec!["99204".to_string(), "72040".to_string()],
        },
        Visit {
            date: offset(date_of_loss, 40),
            description: "Follow-up".to_string(),
            billed_amount: dec!(3500),
            status: VisitStatus::Pending,
            cpt_codes: smallvec!["99214".to_string()],
        },
    ];
    let mut chiro = MedicalProvider::new(
        "prov-chiro",
        "Gulf Coast Chiropractic",
        BillingInfo::new(dec!(4000), dec!(800), dec!(200)),
    );
    chiro.specialty = "Chiropractic".to_string();
    chiro.visits = vec![Visit {
        date: offset(date_of_loss, 10),
        description: "Adjustment".to_string(),
        billed_amount: dec!(4000),
        status: VisitStatus::Denied,
        cpt_codes: smallvec!["98941".to_string(), "97140".to_string()],
    }];
    case.medical_providers = vec![ortho, chiro];

    case.medical_requests = vec![
        MedicalRequest {
            id: "req-1".to_string(),
            provider_id: "prov-ortho".to_string(),
            request_type: "Records".to_string(),
            requested_on: Some(offset(today, -20)),
            received_on: Some(offset(today, -6)),
            status: MedicalRequestStatus::Received,
        },
        MedicalRequest {
            id: "req-2".to_string(),
            provider_id: "prov-chiro".to_string(),
            request_type: "Bills".to_string(),
            requested_on: Some(offset(today, -10)),
            received_on: None,
            status: MedicalRequestStatus::Requested,
        },
    ];

    let mut signed = Task::new("task-lor", "Send letter of representation")
        .with_due_date(offset(today, -30))
        .with_responsible("Paralegal");
    signed.status = TaskStatus::Completed;
    case.tasks = vec![
        signed,
        Task::new("task-records", "Follow up on chiropractic bills")
            .with_due_date(offset(today, 2))
            .with_responsible("Paralegal"),
        Task::new("task-demand", "Draft BI demand")
            .with_due_date(offset(today, 10))
            .with_responsible("Attorney"),
        Task::new("task-photos", "Collect vehicle photos")
            .with_due_date(offset(today, -3))
            .with_responsible("Client"),
        Task::new("task-call", "Schedule client check-in").with_responsible("Case Manager"),
    ];

    case.case_log = vec![CaseLogEntry {
        id: "log-1".to_string(),
        timestamp: at_nine(offset(today, -6)),
        author: "J. Ramos".to_string(),
        note: "Orthopedic records received.".to_string(),
    }];

    let mut records = Document::new(
        "doc-records",
        SAMPLE_CASE_ID,
        "Bayview Orthopedics records",
        DocumentType::MedicalRecords,
    );
    records.created_at = Some(at_nine(offset(today, -6)));
    case.documents = vec![records];

    case
}

/// Two staff members with balanced breakdowns
#[must_use]
pub fn sample_staff_roster() -> Vec<StaffAggregate> {
    let mut ramos = StaffAggregate::new("staff-ramos", "J. Ramos");
    ramos.case_status = vec![
        BreakdownEntry::new("Treating", 6.0, 60.0, "#4f81bd"),
        BreakdownEntry::new("Negotiation", 4.0, 40.0, "#c0504d"),
    ];
    ramos.case_type = vec![
        BreakdownEntry::new("Auto Accident", 8.0, 80.0, "#9bbb59"),
        BreakdownEntry::new("Slip and Fall", 2.0, 20.0, "#8064a2"),
    ];
    ramos.treatment_type = vec![
        BreakdownEntry::new("Chiropractic", 5.0, 50.0, "#4bacc6"),
        BreakdownEntry::new("Orthopedic", 5.0, 50.0, "#f79646"),
    ];

    let mut chen = StaffAggregate::new("staff-chen", "L. Chen");
    chen.case_status = vec![
        BreakdownEntry::new("Treating", 3.0, 30.0, "#4f81bd"),
        BreakdownEntry::new("Litigation", 7.0, 70.0, "#f79646"),
    ];
    chen.case_type = vec![BreakdownEntry::new("Auto Accident", 10.0, 100.0, "#9bbb59")];
    chen.treatment_type = vec![
        BreakdownEntry::new("Chiropractic", 2.0, 25.0, "#4bacc6"),
        BreakdownEntry::new("Physical Therapy", 6.0, 75.0, "#8064a2"),
    ];

    vec![ramos, chen]
}
