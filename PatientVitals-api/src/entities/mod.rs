// Public entities for the patient vitals API
// This module contains data structures that are shared across the application boundary

// Common entities for error handling
pub mod common;

// Vital ingestion entities
pub mod vitals;
