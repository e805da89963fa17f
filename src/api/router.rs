//! HTTP router.
//!
//! Returns a composable `Router` with every route nested under `/api/`.
//! All handlers are stateless apart from the shared read-only `ApiContext`.
//!
//! Layers (outermost → innermost):
//! 1. CORS → 2. `Cache-Control: no-store`

use axum::http::header::{CACHE_CONTROL, CONTENT_TYPE};
use axum::http::{HeaderValue, Method};
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::api::endpoints;
use crate::api::endpoints::calculators::calculate;
use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::calculators::{Bmi, CardiovascularRisk, ChadsVasc, News2};

/// Build the API router over a pre-constructed context.
pub fn api_router(ctx: ApiContext) -> Router {
    let routes = Router::new()
        .route("/health", get(endpoints::health::check))
        .route("/assess", post(endpoints::assessment::assess))
        .route("/assess/batch", post(endpoints::assessment::batch))
        .route("/vitals/status", post(endpoints::vitals::status))
        .route("/analyze-symptoms", post(endpoints::symptoms::analyze))
        .route(
            "/generate-symptoms",
            post(endpoints::education::generate_symptoms),
        )
        .route(
            "/medical-explanation",
            post(endpoints::education::medical_explanation),
        )
        .route("/calculators/bmi", post(calculate::<Bmi>))
        .route(
            "/calculators/cardiovascular",
            post(calculate::<CardiovascularRisk>),
        )
        .route("/calculators/chads-vasc", post(calculate::<ChadsVasc>))
        .route("/calculators/news2", post(calculate::<News2>))
        .route("/dictation/parse", post(endpoints::dictation::parse))
        .route("/interactions", post(endpoints::interactions::check))
        .with_state(ctx);

    // Browser front-ends are served from a different origin.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE]);

    Router::new()
        .nest("/api", routes)
        .fallback(not_found)
        .layer(SetResponseHeaderLayer::overriding(
            CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
        .layer(cors)
}

async fn not_found() -> ApiError {
    ApiError::NotFound("No such route".into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn app() -> Router {
        api_router(ApiContext::for_tests())
    }

    fn post_json(uri: &str, body: &Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn send(request: Request<Body>) -> (StatusCode, Value) {
        let response = app().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn reading() -> Value {
        json!({
            "heartRate": 160, "spo2": 98, "systolicBP": 120, "diastolicBP": 80,
            "temperature": 36.8, "age": 45, "gender": "male",
            "symptoms": [], "medicalHistory": []
        })
    }

    #[tokio::test]
    async fn health_reports_service() {
        let request = Request::builder()
            .uri("/api/health")
            .body(Body::empty())
            .unwrap();
        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get("Cache-Control").unwrap(),
            "no-store"
        );
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "Vitalsense");
    }

    #[tokio::test]
    async fn assess_returns_result() {
        let (status, body) = send(post_json("/api/assess", &reading())).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["riskScore"], 30);
        assert_eq!(body["riskLevel"], "Critical");
        assert_eq!(body["emergencyAlert"], true);
    }

    #[tokio::test]
    async fn out_of_range_vital_is_400() {
        let mut input = reading();
        input["heartRate"] = json!(400);
        let (status, body) = send(post_json("/api/assess", &input)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_FAILED");
    }

    #[tokio::test]
    async fn invalid_json_is_400() {
        let request = Request::builder()
            .method("POST")
            .uri("/api/assess")
            .header("Content-Type", "application/json")
            .body(Body::from("{not json"))
            .unwrap();
        let (status, body) = send(request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "BAD_REQUEST");
    }

    #[tokio::test]
    async fn batch_reports_per_record() {
        let records = json!([reading(), { "heartRate": "fast" }]);
        let (status, body) = send(post_json("/api/assess/batch", &records)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total"], 2);
        assert_eq!(body["assessed"], 1);
        assert_eq!(body["entries"][1]["error"]["code"], "malformed");
    }

    #[tokio::test]
    async fn vitals_status_defaults_gender() {
        let input = json!({
            "heartRate": 72, "spo2": 98, "systolicBP": 118, "diastolicBP": 76,
            "temperature": 36.8
        });
        let (status, body) = send(post_json("/api/vitals/status", &input)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["vitals"].as_array().unwrap().len(), 5);
    }

    #[tokio::test]
    async fn empty_symptom_list_is_no_input() {
        let input = json!({
            "symptoms": [],
            "vitals": {
                "heartRate": 72,
                "spo2": 98,
                "systolicBP": 118,
                "diastolicBP": 76,
                "temperature": 36.8
            },
            "demographics": { "age": 40, "gender": "female" }
        });
        let (status, body) = send(post_json("/api/analyze-symptoms", &input)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "NO_INPUT");
    }

    #[tokio::test]
    async fn bmi_calculator_route() {
        let input = json!({ "heightCm": 175.0, "weightKg": 70.0 });
        let (status, body) = send(post_json("/api/calculators/bmi", &input)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["bmi"], 22.9);
        assert_eq!(body["category"], "Normal weight");
    }

    #[tokio::test]
    async fn calculator_rejects_bad_input() {
        let input = json!({ "heightCm": 0.0, "weightKg": 70.0 });
        let (status, body) = send(post_json("/api/calculators/bmi", &input)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "BAD_REQUEST");
    }

    #[tokio::test]
    async fn dictation_route_extracts_vitals() {
        let input = json!({ "transcript": "heart rate 88, blood pressure 130 over 85" });
        let (status, body) = send(post_json("/api/dictation/parse", &input)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["heartRate"], 88);
        assert_eq!(body["systolicBP"], 130);
        assert_eq!(body["diastolicBP"], 85);
    }

    #[tokio::test]
    async fn unknown_route_is_404() {
        let (status, body) = send(post_json("/api/nothing", &json!({}))).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }
}
