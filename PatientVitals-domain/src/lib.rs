// Patient Vitals Domain
// This crate contains the business logic for the patient vitals API

// Services that implement business logic
pub mod services;

// Domain entities
pub mod entities;

// Health checks and system status
pub mod health;

// Re-export the storage layer for convenience
pub use patient_vitals_data::{database, models, repository};

// Testing utilities - only available with mock feature
#[cfg(feature = "mock")]
pub mod testing;
