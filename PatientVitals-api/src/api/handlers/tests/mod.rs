
use std::sync::Arc;
use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

use patient_vitals_domain::health::HealthServiceTrait;
use patient_vitals_domain::testing::{
    create_mock_patient_service, create_mock_vital_service, MockHealthService, MockPatientService,
    MockVitalService,
};
use crate::api::routes::{create_router, AppState};

/// Router over mock services
pub(crate) fn mock_app(
    patients: MockPatientService,
    vitals: MockVitalService,
    health: MockHealthService,
) -> Router {
    let state = AppState {
        patient_service: create_mock_patient_service(patients),
        vital_service: create_mock_vital_service(vitals),
        environment: "test".to_string(),
    };
    let health_service: Arc<dyn HealthServiceTrait + Send + Sync> = Arc::new(health);

    create_router(state, health_service, 10)
}

/// Send one request and decode the JSON response body
pub(crate) async fn send(app: Router, method: Method, uri: &str, body: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    (status, json)
}
