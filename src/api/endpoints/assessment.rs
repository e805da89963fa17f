//! Vital-sign assessment endpoints.
//!
//! - `POST /api/assess`: single reading
//! - `POST /api/assess/batch`: array of readings, per-record outcomes

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde_json::Value;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::intelligence::{assess_batch, assess_value, BatchReport};
use crate::models::AssessmentResult;

/// `POST /api/assess`
pub async fn assess(
    State(ctx): State<ApiContext>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<AssessmentResult>, ApiError> {
    let Json(body) = body?;
    let result = assess_value(body, &ctx.reference)?;
    Ok(Json(result))
}

/// `POST /api/assess/batch`
pub async fn batch(
    State(ctx): State<ApiContext>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<BatchReport>, ApiError> {
    let Json(body) = body?;
    let report = assess_batch(body, ctx.max_batch_size, &ctx.reference)?;
    Ok(Json(report))
}
