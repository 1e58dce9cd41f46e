use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use patient_vitals_domain::entities::RecordedVital;

/// Arbitrary vital reading fields; `patientId` is set by the server
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({"hr": 72, "spo2": 98}))]
pub struct VitalReadingRequest(#[schema(value_type = Object)] pub serde_json::Map<String, serde_json::Value>);

/// Response for a stored vital reading
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreatedVitalResponse {
    /// Generated id of the new vitals document
    #[schema(example = "8YQ2m0c3T1kVb7LzR9aP")]
    pub id: String,
}

impl From<RecordedVital> for CreatedVitalResponse {
    fn from(recorded: RecordedVital) -> Self {
        Self { id: recorded.id }
    }
}
