use std::sync::Arc;
use thiserror::Error;
use tracing::debug;
use async_trait::async_trait;

use crate::entities::PatientRecord;
use patient_vitals_data::models::collections;
use patient_vitals_data::repository::{RepositoryError, SharedDocumentStore};

/// Patient service errors
#[derive(Debug, Error)]
pub enum PatientServiceError {
    /// No record under the requested id
    #[error("Patient not found: {0}")]
    NotFound(String),

    /// Repository error
    #[error("Repository error: {0}")]
    RepositoryError(#[from] RepositoryError),
}

/// Trait for patient lookups
#[async_trait]
pub trait PatientServiceTrait {
    /// Fetch the record stored in `users` under `patient_id`
    async fn get_patient(&self, patient_id: &str) -> Result<PatientRecord, PatientServiceError>;
}

/// Patient service reading from the shared document store
#[derive(Clone)]
pub struct PatientService {
    store: SharedDocumentStore,
}

impl PatientService {
    /// Create a new patient service
    pub fn new(store: SharedDocumentStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl PatientServiceTrait for PatientService {
    async fn get_patient(&self, patient_id: &str) -> Result<PatientRecord, PatientServiceError> {
        debug!(patient_id, "Looking up patient");

        self.store
            .get(collections::USERS, patient_id)
            .await?
            .map(PatientRecord::from)
            .ok_or_else(|| PatientServiceError::NotFound(patient_id.to_string()))
    }
}

/// Create a patient service over the given store
pub fn create_patient_service(store: SharedDocumentStore) -> Arc<dyn PatientServiceTrait + Send + Sync> {
    Arc::new(PatientService::new(store))
}
