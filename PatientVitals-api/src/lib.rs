// PatientVitals-api lib.rs
//
// This is the main library file for the patient vitals API.
// It re-exports the APIs from the various modules.

// Public modules
pub mod api;
pub mod config;
pub mod entities;
pub mod openapi;

pub use api::{create_app, AppState};
pub use config::ServerConfig;
