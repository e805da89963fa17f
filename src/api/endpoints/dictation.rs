use axum::extract::rejection::JsonRejection;
use axum::Json;
use serde_json::Value;

use crate::api::error::ApiError;
use crate::intelligence::dictation::{parse_dictation, DictatedVitals, DictationRequest};
use crate::intelligence::validation::decode;

/// `POST /api/dictation/parse`: `{ "transcript": "..." }` to partial vitals.
pub async fn parse(
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<DictatedVitals>, ApiError> {
    let Json(body) = body?;
    let request: DictationRequest = decode(body)?;
    Ok(Json(parse_dictation(&request.transcript)))
}
