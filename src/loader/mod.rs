//! Record sources for the aggregation engine.
//!
//! A source hands back the full status history on every call; there is no
//! caching layer between the source file and the engine.

mod csv_source;

pub use csv_source::*;

use thiserror::Error;

use crate::models::StatusRecord;

// Column contract of the patient status table.
pub const COL_PATIENT_ID: &str = "entrp_ptnt_id";
pub const COL_EFFECTIVE_DATE: &str = "eff_dt";
pub const COL_STATUS: &str = "status";
pub const COL_RECENT_STATUS: &str = "recent_status";
pub const COL_PREVIOUS_STORE: &str = "prev_store_nbr";
pub const COL_TRANSITION_DATE: &str = "transition_dt";

pub const REQUIRED_COLUMNS: [&str; 6] = [
    COL_PATIENT_ID,
    COL_EFFECTIVE_DATE,
    COL_STATUS,
    COL_RECENT_STATUS,
    COL_PREVIOUS_STORE,
    COL_TRANSITION_DATE,
];

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Record source {source_name} unavailable: {reason}")]
    Unavailable { source_name: String, reason: String },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Required column missing: {0}")]
    MissingColumn(String),

    #[error("Invalid patient id at row {row}: {value:?}")]
    InvalidPatientId { row: usize, value: String },
}

/// Supplier of the raw status history.
pub trait RecordSource: Send + Sync {
    /// Human-readable location, used in logs and the health endpoint.
    fn describe(&self) -> String;

    fn load(&self) -> Result<Vec<StatusRecord>, LoadError>;
}

/// Fixed record set held in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    records: Vec<StatusRecord>,
}

impl InMemorySource {
    pub fn new(records: Vec<StatusRecord>) -> Self {
        Self { records }
    }
}

impl RecordSource for InMemorySource {
    fn describe(&self) -> String {
        format!("memory ({} rows)", self.records.len())
    }

    fn load(&self) -> Result<Vec<StatusRecord>, LoadError> {
        Ok(self.records.clone())
    }
}
