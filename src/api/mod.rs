//! Dashboard HTTP API.
//!
//! Exposes the aggregation engine as JSON endpoints for the chart front end.
//! Routes are nested under `/api/`; every request reads the record source
//! fresh and computes its view from scratch.
//!
//! The router is composable: `dashboard_router()` returns a `Router`
//! that can be mounted on any axum server instance.

pub mod endpoints;
pub mod error;
pub mod middleware;
pub mod router;
pub mod server;
pub mod types;

pub use error::ApiError;
pub use router::dashboard_router;
pub use server::{start_dashboard_server, DashboardServer, DashboardSession};
pub use types::ApiContext;
