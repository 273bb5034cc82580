use axum::extract::State;
use axum::Json;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::engine::{compute_kpis, resolve_latest, KpiSummary};

/// `GET /api/kpis`: headline counts over each patient's latest record.
pub async fn summary(State(ctx): State<ApiContext>) -> Result<Json<KpiSummary>, ApiError> {
    let records = ctx.load_records().await?;
    Ok(Json(compute_kpis(&resolve_latest(&records))))
}
