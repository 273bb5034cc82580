use axum::extract::State;
use axum::Json;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::engine::{build_dashboard, DashboardSnapshot};

/// `GET /api/dashboard`: every panel from a single load of the source.
pub async fn snapshot(
    State(ctx): State<ApiContext>,
) -> Result<Json<DashboardSnapshot>, ApiError> {
    let records = ctx.load_records().await?;
    Ok(Json(build_dashboard(&records, ctx.config.top_stores)))
}
