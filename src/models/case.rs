//! Case entity model
//!
//! The case ("client" on the dashboard) is the root of the record tree.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};

use crate::models::traits::string_entity;
use crate::models::{Document, InsurancePolicy, MedicalProvider, Task};
use crate::utils::date::{
    deserialize_flexible_date, deserialize_flexible_timestamp, deserialize_optional_date,
    parse_sol_date,
};

/// A client's legal matter and everything recorded for it
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Case {
    /// Case identifier
    pub id: String,
    /// Client name
    pub name: String,
    /// Date of the accident or injury
    #[serde(deserialize_with = "deserialize_flexible_date")]
    pub date_of_loss: NaiveDate,
    /// Statute-of-limitations date as entered, possibly with a timezone token
    pub statute_of_limitation_date: String,
    /// Case progress percentage (0-100)
    #[serde(default, deserialize_with = "deserialize_progress")]
    pub progress: u8,
    /// Case type, e.g. "Auto Accident"
    #[serde(default)]
    pub case_type: String,
    /// Case status, e.g. "Treating" or "Negotiation"
    #[serde(default)]
    pub case_status: String,
    /// Litigation phase used for phase/staff charts
    #[serde(default)]
    pub phase: String,
    /// Staff member the case is assigned to
    #[serde(default)]
    pub assigned_staff: Option<String>,
    #[serde(default)]
    pub defendants: Vec<Defendant>,
    #[serde(default)]
    pub insurance_policies: Vec<InsurancePolicy>,
    #[serde(default)]
    pub vehicles: Vec<Vehicle>,
    #[serde(default)]
    pub medical_providers: Vec<MedicalProvider>,
    #[serde(default)]
    pub medical_requests: Vec<MedicalRequest>,
    #[serde(default)]
    pub tasks: Vec<Task>,
    #[serde(default)]
    pub case_log: Vec<CaseLogEntry>,
    #[serde(default)]
    pub documents: Vec<Document>,
}

impl Case {
    /// Create a new case with empty collections
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        date_of_loss: NaiveDate,
        statute_of_limitation_date: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            date_of_loss,
            statute_of_limitation_date: statute_of_limitation_date.into(),
            progress: 0,
            case_type: String::new(),
            case_status: String::new(),
            phase: String::new(),
            assigned_staff: None,
            defendants: Vec::new(),
            insurance_policies: Vec::new(),
            vehicles: Vec::new(),
            medical_providers: Vec::new(),
            medical_requests: Vec::new(),
            tasks: Vec::new(),
            case_log: Vec::new(),
            documents: Vec::new(),
        }
    }

    /// Set the progress percentage, clamped to 100
    pub fn set_progress(&mut self, progress: u8) {
        self.progress = progress.min(100);
    }

    /// Builder-style variant of [`Case::set_progress`]
    #[must_use]
    pub fn with_progress(mut self, progress: u8) -> Self {
        self.set_progress(progress);
        self
    }

    /// Parsed statute-of-limitations date, if the stored value is usable
    #[must_use]
    pub fn sol_date(&self) -> Option<NaiveDate> {
        parse_sol_date(&self.statute_of_limitation_date)
    }

    /// Look up a task by id
    #[must_use]
    pub fn task(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Look up a defendant by id
    #[must_use]
    pub fn defendant(&self, id: &str) -> Option<&Defendant> {
        self.defendants.iter().find(|d| d.id == id)
    }

    /// Look up a vehicle by id
    #[must_use]
    pub fn vehicle(&self, id: &str) -> Option<&Vehicle> {
        self.vehicles.iter().find(|v| v.id == id)
    }

    /// Medical record requests that have not been received yet
    pub fn outstanding_requests(&self) -> impl Iterator<Item = &MedicalRequest> {
        self.medical_requests.iter().filter(|r| r.is_outstanding())
    }
}

fn deserialize_progress<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u8, D::Error> {
    let raw = f64::deserialize(deserializer)?;
    if raw.is_nan() {
        return Ok(0);
    }
    Ok(raw.clamp(0.0, 100.0).round() as u8)
}

/// An at-fault party named in the case
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Defendant {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

/// A vehicle involved in the loss
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    pub id: String,
    #[serde(default)]
    pub year: Option<u16>,
    pub make: String,
    pub model: String,
    /// Registered owner, if different from the driver
    #[serde(default)]
    pub owner: Option<String>,
}

impl Vehicle {
    /// Display description such as "2019 Toyota Camry"
    #[must_use]
    pub fn description(&self) -> String {
        match self.year {
            Some(year) => format!("{year} {} {}", self.make, self.model),
            None => format!("{} {}", self.make, self.model),
        }
    }
}

/// State of a records request sent to a provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MedicalRequestStatus {
    Requested,
    Received,
}

/// A request for records or bills sent to a medical provider
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicalRequest {
    pub id: String,
    pub provider_id: String,
    /// What was requested, e.g. "Records" or "Bills"
    pub request_type: String,
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub requested_on: Option<NaiveDate>,
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub received_on: Option<NaiveDate>,
    pub status: MedicalRequestStatus,
}

impl MedicalRequest {
    /// Whether the request is still waiting on the provider
    #[must_use]
    pub fn is_outstanding(&self) -> bool {
        self.status == MedicalRequestStatus::Requested
    }
}

/// A free-text entry in the case activity log
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseLogEntry {
    pub id: String,
    #[serde(deserialize_with = "deserialize_flexible_timestamp")]
    pub timestamp: NaiveDateTime,
    pub author: String,
    pub note: String,
}

string_entity! {
    Case => "case",
    Defendant => "defendant",
    Vehicle => "vehicle",
}
