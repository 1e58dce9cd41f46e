use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::{error, info};

use patient_vitals_domain::services::{PatientServiceError, VitalServiceError};
use crate::entities::common::PublicErrorResponse;

/// Errors surfaced by the HTTP handlers
#[derive(Debug, Error)]
pub enum ApiError {
    /// Wrong HTTP method for the endpoint
    #[error("Method not allowed")]
    MethodNotAllowed,

    /// No patient under the requested id
    #[error("Patient not found")]
    PatientNotFound,

    /// No route matches the request path
    #[error("Not found")]
    RouteNotFound,

    /// Ingest request without a usable body
    #[error("Missing body")]
    MissingBody,

    /// Anything else; the detail is logged, never returned
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::PatientNotFound | ApiError::RouteNotFound => StatusCode::NOT_FOUND,
            ApiError::MissingBody => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn public_message(&self) -> &'static str {
        match self {
            ApiError::MethodNotAllowed => "Method not allowed",
            ApiError::PatientNotFound => "Patient not found",
            ApiError::RouteNotFound => "Not found",
            ApiError::MissingBody => "Missing body",
            ApiError::Internal(_) => "Internal server error",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::Internal(detail) => error!("Request failed: {}", detail),
            other => info!("Request rejected: {}", other),
        }

        (self.status_code(), Json(PublicErrorResponse::new(self.public_message()))).into_response()
    }
}

impl From<PatientServiceError> for ApiError {
    fn from(err: PatientServiceError) -> Self {
        match err {
            PatientServiceError::NotFound(_) => ApiError::PatientNotFound,
            PatientServiceError::RepositoryError(e) => ApiError::Internal(e.to_string()),
        }
    }
}

impl From<VitalServiceError> for ApiError {
    fn from(err: VitalServiceError) -> Self {
        match err {
            VitalServiceError::MissingBody => ApiError::MissingBody,
            other => ApiError::Internal(other.to_string()),
        }
    }
}
