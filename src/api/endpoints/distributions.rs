//! Distribution endpoints for the pie and bar charts.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::engine::{distribution, resolve_latest, store_distribution, Distribution};
use crate::models::StatusField;

async fn field_distribution(
    ctx: &ApiContext,
    field: StatusField,
) -> Result<Distribution, ApiError> {
    let records = ctx.load_records().await?;
    Ok(distribution(&resolve_latest(&records), field))
}

/// `GET /api/status-distribution`
pub async fn status(State(ctx): State<ApiContext>) -> Result<Json<Distribution>, ApiError> {
    field_distribution(&ctx, StatusField::Status).await.map(Json)
}

/// `GET /api/recent-status-distribution`
pub async fn recent_status(
    State(ctx): State<ApiContext>,
) -> Result<Json<Distribution>, ApiError> {
    field_distribution(&ctx, StatusField::RecentStatus)
        .await
        .map(Json)
}

/// `GET /api/distribution/:field`: `status` or `recent_status`.
/// Any other column name is a missing column.
pub async fn by_field(
    State(ctx): State<ApiContext>,
    Path(field): Path<String>,
) -> Result<Json<Distribution>, ApiError> {
    let field: StatusField = field.parse()?;
    field_distribution(&ctx, field).await.map(Json)
}

#[derive(Deserialize)]
pub struct StoreQuery {
    pub limit: Option<usize>,
}

/// `GET /api/store-distribution?limit=N`: top stores over every history row.
/// `limit` defaults to the configured top-N; a malformed query is a 400.
pub async fn stores(
    State(ctx): State<ApiContext>,
    query: Result<Query<StoreQuery>, QueryRejection>,
) -> Result<Json<Distribution>, ApiError> {
    let Query(query) = query.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let limit = query.limit.unwrap_or(ctx.config.top_stores);
    let records = ctx.load_records().await?;
    Ok(Json(store_distribution(&records, limit)))
}
