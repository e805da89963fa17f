use axum::extract::rejection::JsonRejection;
use axum::Json;
use serde_json::Value;

use crate::api::error::ApiError;
use crate::calculators::RiskCalculator;

/// `POST /api/calculators/{name}`: one handler instantiated per calculator.
pub async fn calculate<C>(
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<C::Output>, ApiError>
where
    C: RiskCalculator + 'static,
    C::Output: Send + 'static,
{
    let Json(body) = body?;
    Ok(Json(C::from_value(body)?))
}
