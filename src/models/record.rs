use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::dates::format_day;
use super::enums::StatusField;

/// Enterprise patient identifier. Repeats across rows of the status history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PatientId(pub i64);

impl From<i64> for PatientId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for PatientId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One row of the patient status history, with dates already coerced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusRecord {
    pub patient_id: PatientId,
    /// When this row became authoritative. `None` when missing or unparsable.
    pub effective_date: Option<NaiveDateTime>,
    pub status: Option<String>,
    pub recent_status: Option<String>,
    pub previous_store: Option<i64>,
    pub transition_date: Option<NaiveDateTime>,
}

impl StatusRecord {
    /// A record with only the patient id set.
    pub fn new(patient_id: impl Into<PatientId>) -> Self {
        Self {
            patient_id: patient_id.into(),
            effective_date: None,
            status: None,
            recent_status: None,
            previous_store: None,
            transition_date: None,
        }
    }

    pub fn with_effective_date(mut self, date: Option<NaiveDateTime>) -> Self {
        self.effective_date = date;
        self
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn with_recent_status(mut self, recent_status: impl Into<String>) -> Self {
        self.recent_status = Some(recent_status.into());
        self
    }

    pub fn with_previous_store(mut self, store: Option<i64>) -> Self {
        self.previous_store = store;
        self
    }

    pub fn with_transition_date(mut self, date: Option<NaiveDateTime>) -> Self {
        self.transition_date = date;
        self
    }

    /// Value of a categorical column.
    pub fn field(&self, field: StatusField) -> Option<&str> {
        match field {
            StatusField::Status => self.status.as_deref(),
            StatusField::RecentStatus => self.recent_status.as_deref(),
        }
    }
}

/// Serializable table row for the record listing. Dates leave as `YYYY-MM-DD`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordRow {
    pub patient_id: PatientId,
    pub effective_date: Option<String>,
    pub status: Option<String>,
    pub recent_status: Option<String>,
    pub previous_store: Option<i64>,
    pub transition_date: Option<String>,
}

impl From<&StatusRecord> for RecordRow {
    fn from(record: &StatusRecord) -> Self {
        Self {
            patient_id: record.patient_id,
            effective_date: record.effective_date.as_ref().map(format_day),
            status: record.status.clone(),
            recent_status: record.recent_status.clone(),
            previous_store: record.previous_store,
            transition_date: record.transition_date.as_ref().map(format_day),
        }
    }
}
