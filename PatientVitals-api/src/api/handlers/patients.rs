use std::sync::Arc;
use axum::{
    extract::State,
    http::{Method, Uri},
    Json,
};
use serde_json::Value;
use tracing::{info, instrument};

use patient_vitals_domain::services::PatientServiceTrait;
use crate::api::path::{decode_path, lookup_patient_id};
use crate::api::routes::AppState;
use super::error::ApiError;

/// Service type for dependency injection
pub type SharedPatientService = Arc<dyn PatientServiceTrait + Send + Sync>;

/// Get a patient record by id.
///
/// The id is the last segment of the request path. Every HTTP method is
/// routed here so that non-GET requests get a JSON 405.
#[utoipa::path(
    get,
    path = "/patients/{id}",
    params(
        ("id" = String, Path, description = "Patient identifier")
    ),
    responses(
        (status = 200, description = "Patient record as stored", body = crate::entities::common::PatientDocument),
        (status = 404, description = "No patient with this id", body = crate::entities::common::PublicErrorResponse),
        (status = 405, description = "Method other than GET", body = crate::entities::common::PublicErrorResponse),
        (status = 500, description = "Store failure", body = crate::entities::common::PublicErrorResponse)
    ),
    tag = "patients"
)]
#[instrument(skip(state))]
pub async fn get_patient(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
) -> Result<Json<Value>, ApiError> {
    if method != Method::GET {
        return Err(ApiError::MethodNotAllowed);
    }

    let path = decode_path(uri.path());
    let patient_id = lookup_patient_id(&path);
    let patient = state.patient_service.get_patient(patient_id).await?;

    info!(patient_id, "Patient record returned");
    Ok(Json(Value::Object(patient.into_fields())))
}
