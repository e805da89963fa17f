use axum::extract::rejection::JsonRejection;
use axum::Json;
use serde_json::Value;

use crate::api::error::ApiError;
use crate::intelligence::interactions::{check_interactions, InteractionReport, InteractionRequest};
use crate::intelligence::validation::decode;

/// `POST /api/interactions`: `{ "medications": [...] }`.
pub async fn check(
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<InteractionReport>, ApiError> {
    let Json(body) = body?;
    let request: InteractionRequest = decode(body)?;
    Ok(Json(check_interactions(&request.medications)))
}
