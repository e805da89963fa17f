//! Patient education endpoints.
//!
//! - `POST /api/generate-symptoms`: symptom profile for a disease
//! - `POST /api/medical-explanation`: long-form disease explanation

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde_json::Value;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::intelligence::education::{
    explain_value, generate_symptoms_value, GeneratedSymptoms, MedicalExplanation,
};

pub async fn generate_symptoms(
    State(ctx): State<ApiContext>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<GeneratedSymptoms>, ApiError> {
    let Json(body) = body?;
    Ok(Json(generate_symptoms_value(body, &ctx.reference)?))
}

pub async fn medical_explanation(
    State(ctx): State<ApiContext>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<MedicalExplanation>, ApiError> {
    let Json(body) = body?;
    Ok(Json(explain_value(body, &ctx.reference)?))
}
