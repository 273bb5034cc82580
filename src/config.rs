use std::net::SocketAddr;
use std::path::PathBuf;

use thiserror::Error;

/// Application-level constants
pub const APP_NAME: &str = "Pulseboard";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default number of stores shown in the store distribution.
pub const DEFAULT_TOP_STORES: usize = 10;

pub const ENV_DATA_PATH: &str = "PULSEBOARD_DATA_PATH";
pub const ENV_BIND_ADDR: &str = "PULSEBOARD_BIND_ADDR";
pub const ENV_TOP_STORES: &str = "PULSEBOARD_TOP_STORES";

const DEFAULT_DATA_PATH: &str = "data/processed/dim_patient_status.csv";
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5000";

/// Log filter used when `RUST_LOG` is unset.
pub fn default_log_filter() -> &'static str {
    "pulseboard_lib=info,pulseboard=info,tower_http=warn"
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {var}: {value:?} ({reason})")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

/// Runtime configuration for the dashboard backend.
///
/// Everything the request handlers need is carried here and handed to the
/// router explicitly; there are no process-wide paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    /// CSV export of the patient status table.
    pub data_path: PathBuf,
    pub bind_addr: SocketAddr,
    /// How many stores the store distribution keeps.
    pub top_stores: usize,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 5000)),
            top_stores: DEFAULT_TOP_STORES,
        }
    }
}

impl DashboardConfig {
    /// Reads the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    /// Unset or blank variables fall back to their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |var: &str| {
            lookup(var)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let data_path = get(ENV_DATA_PATH)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_PATH));

        let bind_raw = get(ENV_BIND_ADDR).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_raw
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::Invalid {
                var: ENV_BIND_ADDR,
                value: bind_raw.clone(),
                reason: e.to_string(),
            })?;

        let top_stores = match get(ENV_TOP_STORES) {
            Some(raw) => raw.parse::<usize>().map_err(|e| ConfigError::Invalid {
                var: ENV_TOP_STORES,
                value: raw.clone(),
                reason: e.to_string(),
            })?,
            None => DEFAULT_TOP_STORES,
        };

        Ok(Self {
            data_path,
            bind_addr,
            top_stores,
        })
    }
}
