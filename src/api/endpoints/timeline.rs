//! Transition timeline endpoint.

use axum::extract::State;
use axum::Json;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::engine::{timeline, Timeline};

/// `GET /api/transition-timeline`: monthly transition counts with per-month detail.
pub async fn transitions(State(ctx): State<ApiContext>) -> Result<Json<Timeline>, ApiError> {
    let records = ctx.load_records().await?;
    Ok(Json(timeline(&records)))
}
