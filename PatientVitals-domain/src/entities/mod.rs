// Domain entities and value objects
pub mod patient;
pub mod vital;

// Re-export common types for easier imports
pub use patient::PatientRecord;
pub use vital::{body_is_empty, RecordedVital, VitalReading, PATIENT_ID_FIELD};
