use thiserror::Error;

/// Structural failures of an aggregation call.
///
/// Per-record anomalies (bad dates, missing stores) never surface here; they
/// are coerced where the record is read.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("Required column missing: {0}")]
    MissingColumn(String),
}
