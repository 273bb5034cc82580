use axum::extract::State;
use axum::Json;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::models::RecordRow;

/// `GET /api/records`: the raw status table in source order.
pub async fn list(State(ctx): State<ApiContext>) -> Result<Json<Vec<RecordRow>>, ApiError> {
    let records = ctx.load_records().await?;
    Ok(Json(records.iter().map(RecordRow::from).collect()))
}
