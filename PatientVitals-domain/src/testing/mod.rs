// Testing utilities and mock implementations for the domain layer
// This module is only available when the "mock" feature is enabled

// Re-export useful test doubles from the data layer
pub use patient_vitals_data::repository::mock::UnavailableDocumentStore;

use crate::entities::{body_is_empty, PatientRecord, RecordedVital};
use crate::services::patient::{PatientServiceError, PatientServiceTrait};
use crate::services::vitals::{VitalServiceError, VitalServiceTrait};
use crate::health::{SystemHealth, SystemStatus, ComponentStatus, HealthComponent, HealthServiceTrait, STORE_COMPONENT};
use patient_vitals_data::models::Fields;
use patient_vitals_data::repository::{generate_document_id, RepositoryError};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use async_trait::async_trait;

/// Mock implementation of the PatientServiceTrait for testing
#[derive(Default)]
pub struct MockPatientService {
    patients: RwLock<HashMap<String, Fields>>,
    should_fail_store: bool,
}

impl MockPatientService {
    /// Create a new mock patient service with no patients
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a pre-defined patient to the mock
    pub fn with_patient(self, id: &str, fields: Fields) -> Self {
        if let Ok(mut patients) = self.patients.write() {
            patients.insert(id.to_string(), fields);
        }
        self
    }

    /// Configure the mock to fail as if the store were down
    pub fn with_store_failure(mut self) -> Self {
        self.should_fail_store = true;
        self
    }
}

#[async_trait]
impl PatientServiceTrait for MockPatientService {
    async fn get_patient(&self, patient_id: &str) -> Result<PatientRecord, PatientServiceError> {
        if self.should_fail_store {
            return Err(RepositoryError::Unavailable(
                "mock is configured to fail".to_string(),
            ).into());
        }

        let patients = self.patients.read().map_err(RepositoryError::from)?;
        patients
            .get(patient_id)
            .map(|fields| PatientRecord {
                id: patient_id.to_string(),
                fields: fields.clone(),
            })
            .ok_or_else(|| PatientServiceError::NotFound(patient_id.to_string()))
    }
}

/// Mock implementation of the VitalServiceTrait that keeps every accepted
/// reading in memory
#[derive(Default)]
pub struct MockVitalService {
    recorded: RwLock<Vec<(String, Value)>>,
    should_fail_store: bool,
}

impl MockVitalService {
    /// Create a new mock vital service
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure the mock to fail as if the store were down
    pub fn with_store_failure(mut self) -> Self {
        self.should_fail_store = true;
        self
    }

    /// Readings accepted so far, as `(patient_id, body)` pairs
    pub fn recorded(&self) -> Vec<(String, Value)> {
        self.recorded
            .read()
            .map(|recorded| recorded.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl VitalServiceTrait for MockVitalService {
    async fn record_vital(
        &self,
        patient_id: &str,
        body: Option<Value>,
    ) -> Result<RecordedVital, VitalServiceError> {
        let body = match body {
            Some(body) if !body_is_empty(&body) => body,
            _ => return Err(VitalServiceError::MissingBody),
        };

        if !body.is_object() {
            return Err(VitalServiceError::InvalidBody("non-object"));
        }

        if patient_id.is_empty() {
            return Err(VitalServiceError::InvalidPatientId(patient_id.to_string()));
        }

        if self.should_fail_store {
            return Err(RepositoryError::Unavailable(
                "mock is configured to fail".to_string(),
            ).into());
        }

        let mut recorded = self.recorded.write().map_err(RepositoryError::from)?;
        recorded.push((patient_id.to_string(), body));

        Ok(RecordedVital { id: generate_document_id() })
    }
}

/// Mock implementation of health services for testing system health
#[derive(Debug)]
pub struct MockHealthService {
    /// Store component status
    store_status: ComponentStatus,
}

impl Default for MockHealthService {
    fn default() -> Self {
        Self::new()
    }
}

impl MockHealthService {
    /// Create a new mock health service with a healthy store
    pub fn new() -> Self {
        Self {
            store_status: ComponentStatus::Healthy,
        }
    }

    /// Configure the mock with an unhealthy store
    pub fn with_unhealthy_store(mut self) -> Self {
        self.store_status = ComponentStatus::Unhealthy;
        self
    }
}

#[async_trait]
impl HealthServiceTrait for MockHealthService {
    async fn get_system_health(&self) -> SystemHealth {
        let (status, details) = match self.store_status {
            ComponentStatus::Healthy => (SystemStatus::Healthy, None),
            ComponentStatus::Unhealthy => (SystemStatus::Unhealthy, Some("Store connection failed".to_string())),
        };

        SystemHealth {
            status,
            components: vec![(
                STORE_COMPONENT.to_string(),
                HealthComponent {
                    status: self.store_status.clone(),
                    details,
                },
            )].into_iter().collect(),
        }
    }
}

/// Factory function to create a mock patient service
pub fn create_mock_patient_service(mock: MockPatientService) -> Arc<dyn PatientServiceTrait + Send + Sync> {
    Arc::new(mock)
}

/// Factory function to create a mock vital service
pub fn create_mock_vital_service(mock: MockVitalService) -> Arc<dyn VitalServiceTrait + Send + Sync> {
    Arc::new(mock)
}
