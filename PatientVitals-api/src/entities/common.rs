use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Error body returned by every failing endpoint
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PublicErrorResponse {
    /// Error message
    #[schema(example = "Patient not found")]
    pub error: String,
}

impl PublicErrorResponse {
    /// Create an error body with the given message
    pub fn new(error: impl Into<String>) -> Self {
        Self { error: error.into() }
    }
}

/// Patient document fields, returned as stored
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({"name": "Alice"}))]
pub struct PatientDocument(#[schema(value_type = Object)] pub serde_json::Map<String, serde_json::Value>);
