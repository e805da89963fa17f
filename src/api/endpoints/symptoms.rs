use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde_json::Value;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::intelligence::symptoms::{analyze_symptoms_value, SymptomAnalysis};

/// `POST /api/analyze-symptoms`
pub async fn analyze(
    State(ctx): State<ApiContext>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<SymptomAnalysis>, ApiError> {
    let Json(body) = body?;
    let analysis = analyze_symptoms_value(body, &ctx.reference)?;
    Ok(Json(analysis))
}
