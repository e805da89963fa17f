use axum::extract::rejection::JsonRejection;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::api::error::ApiError;
use crate::intelligence::status::{vital_status_report, VitalStatusReport};
use crate::intelligence::validation::{decode, validate_vitals};
use crate::models::{Gender, VitalSigns};

#[derive(Deserialize)]
pub struct VitalStatusRequest {
    #[serde(flatten)]
    pub vitals: VitalSigns,
    /// Omitted gender compares against the mean of both averages.
    pub gender: Option<Gender>,
}

#[derive(Serialize)]
pub struct VitalStatusResponse {
    pub vitals: Vec<VitalStatusReport>,
}

/// `POST /api/vitals/status`: per-vital status and population comparison.
pub async fn status(
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<VitalStatusResponse>, ApiError> {
    let Json(body) = body?;
    let request: VitalStatusRequest = decode(body)?;
    validate_vitals(&request.vitals)?;
    let gender = request.gender.unwrap_or(Gender::Other);
    Ok(Json(VitalStatusResponse {
        vitals: vital_status_report(&request.vitals, gender),
    }))
}
