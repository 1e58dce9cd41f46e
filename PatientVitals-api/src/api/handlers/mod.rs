pub mod error;
pub mod health;
pub mod patients;
pub mod vitals;

// Tests module
#[cfg(test)]
mod tests;

// Re-export handlers for easier imports
pub use error::ApiError;
pub use health::health_check;
pub use patients::get_patient;
pub use vitals::add_vital;
