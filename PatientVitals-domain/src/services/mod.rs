pub mod patient;
pub mod vitals;

// Domain services
// Lookup and ingestion logic over the shared document store.

// Re-export service traits and factory functions
pub use patient::{create_patient_service, PatientService, PatientServiceError, PatientServiceTrait};
pub use vitals::{create_vital_service, VitalService, VitalServiceError, VitalServiceTrait};

// Re-export mock service factory functions when the mock feature is enabled
#[cfg(feature = "mock")]
pub use crate::testing::{create_mock_patient_service, create_mock_vital_service};
