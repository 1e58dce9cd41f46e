use std::sync::Arc;
use axum::{
    body::Bytes,
    extract::State,
    http::{Method, StatusCode, Uri},
    Json,
};
use serde_json::Value;
use tracing::{instrument, warn};

use patient_vitals_domain::services::VitalServiceTrait;
use crate::api::path::{decode_path, ingest_patient_id};
use crate::api::routes::AppState;
use crate::entities::vitals::CreatedVitalResponse;
use super::error::ApiError;

/// Service type for dependency injection
pub type SharedVitalService = Arc<dyn VitalServiceTrait + Send + Sync>;

/// Record a vital reading for a patient.
///
/// The patient id is the path segment before the last one. The JSON body is
/// stored as-is with `patientId` set from the path; each call creates a new
/// document.
#[utoipa::path(
    post,
    path = "/patients/{id}/vitals",
    params(
        ("id" = String, Path, description = "Patient identifier")
    ),
    request_body = crate::entities::vitals::VitalReadingRequest,
    responses(
        (status = 201, description = "Vital reading stored", body = CreatedVitalResponse),
        (status = 400, description = "Missing or empty body", body = crate::entities::common::PublicErrorResponse),
        (status = 405, description = "Method other than POST", body = crate::entities::common::PublicErrorResponse),
        (status = 500, description = "Malformed body, unusable path or store failure", body = crate::entities::common::PublicErrorResponse)
    ),
    tag = "vitals"
)]
#[instrument(skip(state, body), fields(body_len = body.len()))]
pub async fn add_vital(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    body: Bytes,
) -> Result<(StatusCode, Json<CreatedVitalResponse>), ApiError> {
    if method != Method::POST {
        return Err(ApiError::MethodNotAllowed);
    }

    let path = decode_path(uri.path());
    let patient_id = ingest_patient_id(&path).ok_or_else(|| {
        ApiError::Internal(format!("No patient id segment in path '{}'", path))
    })?;

    let body = parse_body(&body)?;
    let recorded = state.vital_service.record_vital(patient_id, body).await?;

    Ok((StatusCode::CREATED, Json(recorded.into())))
}

/// Parse a request body, treating blank input as no body
fn parse_body(body: &[u8]) -> Result<Option<Value>, ApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }

    serde_json::from_slice(body).map(Some).map_err(|e| {
        warn!("Rejecting malformed JSON body: {}", e);
        ApiError::Internal(format!("Malformed JSON body: {}", e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_bodies_are_absent() {
        assert!(parse_body(b"").unwrap().is_none());
        assert!(parse_body(b"  \n\t").unwrap().is_none());
    }

    #[test]
    fn test_body_is_parsed() {
        assert_eq!(parse_body(br#"{"hr": 72}"#).unwrap(), Some(serde_json::json!({"hr": 72})));
        assert_eq!(parse_body(b"null").unwrap(), Some(Value::Null));
    }

    #[test]
    fn test_malformed_body_is_internal() {
        assert!(matches!(parse_body(b"{not json"), Err(ApiError::Internal(_))));
    }
}
