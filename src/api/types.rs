//! Shared types for the API layer.

use std::sync::Arc;

use crate::api::error::ApiError;
use crate::config::DashboardConfig;
use crate::loader::{CsvFileSource, RecordSource};
use crate::models::StatusRecord;

/// Shared context for all API routes.
///
/// Holds configuration and the record source only. Records are loaded per
/// request and never stored here.
#[derive(Clone)]
pub struct ApiContext {
    pub config: Arc<DashboardConfig>,
    pub source: Arc<dyn RecordSource>,
}

impl ApiContext {
    pub fn new(config: DashboardConfig, source: Arc<dyn RecordSource>) -> Self {
        Self {
            config: Arc::new(config),
            source,
        }
    }

    /// Context reading the CSV file named in the configuration.
    pub fn from_config(config: DashboardConfig) -> Self {
        let source = Arc::new(CsvFileSource::new(config.data_path.clone()));
        Self::new(config, source)
    }

    /// Loads the full record set off the async runtime.
    pub async fn load_records(&self) -> Result<Vec<StatusRecord>, ApiError> {
        let source = Arc::clone(&self.source);
        tokio::task::spawn_blocking(move || source.load())
            .await
            .map_err(|e| ApiError::Internal(format!("record load task failed: {e}")))?
            .map_err(ApiError::from)
    }
}
