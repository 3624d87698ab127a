//! Case document model

use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::models::traits::string_entity;
use crate::utils::date::deserialize_optional_timestamp;

/// Kind of document attached to a case
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DocumentType {
    #[serde(rename = "BI Demand")]
    BiDemand,
    #[serde(rename = "UM Demand")]
    UmDemand,
    #[serde(rename = "Medical Records")]
    MedicalRecords,
    /// Civil Remedy Notice
    #[serde(rename = "CRN")]
    Crn,
    #[serde(rename = "Other")]
    Other,
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::BiDemand => "BI Demand",
            Self::UmDemand => "UM Demand",
            Self::MedicalRecords => "Medical Records",
            Self::Crn => "CRN",
            Self::Other => "Other",
        };
        f.write_str(label)
    }
}

/// A document produced for or received on a case
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: String,
    /// Owning case; empty for documents created at intake without one
    #[serde(default)]
    pub case_id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub document_type: DocumentType,
    /// Pre-rendered content, if any
    #[serde(default)]
    pub content: Option<String>,
    /// Accepts RFC 3339 (`2024-03-15T10:00:00.000Z`) and naive forms
    #[serde(default, deserialize_with = "deserialize_optional_timestamp")]
    pub created_at: Option<NaiveDateTime>,
}

impl Document {
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        case_id: impl Into<String>,
        title: impl Into<String>,
        document_type: DocumentType,
    ) -> Self {
        Self {
            id: id.into(),
            case_id: case_id.into(),
            title: title.into(),
            document_type,
            content: None,
            created_at: None,
        }
    }
}

string_entity! {
    Document => "document",
}
