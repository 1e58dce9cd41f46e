use std::sync::Arc;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, info};
use async_trait::async_trait;

use crate::entities::{body_is_empty, RecordedVital, VitalReading};
use patient_vitals_data::models::collections;
use patient_vitals_data::repository::{RepositoryError, SharedDocumentStore};

/// Vital service errors
#[derive(Debug, Error)]
pub enum VitalServiceError {
    /// No body, or a body that is empty once parsed
    #[error("Missing body")]
    MissingBody,

    /// Body is present but not a JSON object
    #[error("Invalid body: expected a JSON object, got {0}")]
    InvalidBody(&'static str),

    /// Patient id resolved from the request is unusable
    #[error("Invalid patient id: {0:?}")]
    InvalidPatientId(String),

    /// Repository error
    #[error("Repository error: {0}")]
    RepositoryError(#[from] RepositoryError),
}

/// Trait for vital ingestion
#[async_trait]
pub trait VitalServiceTrait {
    /// Store `body` as a new vital reading for `patient_id`.
    ///
    /// `None` stands for a request without a body. Every successful call
    /// creates a new document, even for identical input.
    async fn record_vital(
        &self,
        patient_id: &str,
        body: Option<Value>,
    ) -> Result<RecordedVital, VitalServiceError>;
}

/// Vital service writing to the shared document store
#[derive(Clone)]
pub struct VitalService {
    store: SharedDocumentStore,
}

impl VitalService {
    /// Create a new vital service
    pub fn new(store: SharedDocumentStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl VitalServiceTrait for VitalService {
    async fn record_vital(
        &self,
        patient_id: &str,
        body: Option<Value>,
    ) -> Result<RecordedVital, VitalServiceError> {
        let body = match body {
            Some(body) if !body_is_empty(&body) => body,
            _ => return Err(VitalServiceError::MissingBody),
        };

        let fields = match body {
            Value::Object(fields) => fields,
            other => return Err(VitalServiceError::InvalidBody(json_kind(&other))),
        };

        if patient_id.is_empty() {
            return Err(VitalServiceError::InvalidPatientId(patient_id.to_string()));
        }

        // No existence check against users: readings for unknown patients are accepted
        let reading = VitalReading::new(patient_id, fields);
        debug!(patient_id = reading.patient_id(), "Storing vital reading");

        let id = self
            .store
            .create(collections::VITALS, reading.into_document_fields())
            .await?;

        info!(patient_id, id = %id, "Vital reading stored");
        Ok(RecordedVital { id })
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Create a vital service over the given store
pub fn create_vital_service(store: SharedDocumentStore) -> Arc<dyn VitalServiceTrait + Send + Sync> {
    Arc::new(VitalService::new(store))
}

#[cfg(test)]
mod tests {
    use super::*;
    use patient_vitals_data::repository::mock::UnavailableDocumentStore;
    use patient_vitals_data::repository::{DocumentStore, InMemoryDocumentStore};
    use serde_json::json;

    fn service_with_store() -> (VitalService, InMemoryDocumentStore) {
        let store = InMemoryDocumentStore::new();
        (VitalService::new(Arc::new(store.clone())), store)
    }

    async fn stored(store: &InMemoryDocumentStore, id: &str) -> Value {
        let document = store.get("vitals", id).await.unwrap().expect("vital should be stored");
        Value::Object(document.fields)
    }

    #[tokio::test]
    async fn test_record_vital_stamps_patient_id() {
        let (service, store) = service_with_store();

        let recorded = service.record_vital("p1", Some(json!({"hr": 72}))).await.unwrap();

        assert_eq!(stored(&store, &recorded.id).await, json!({"hr": 72, "patientId": "p1"}));
    }

    #[tokio::test]
    async fn test_caller_patient_id_is_overwritten() {
        let (service, store) = service_with_store();

        let recorded = service
            .record_vital("p1", Some(json!({"hr": 72, "patientId": "p2"})))
            .await
            .unwrap();

        assert_eq!(stored(&store, &recorded.id).await["patientId"], "p1");
    }

    #[tokio::test]
    async fn test_identical_requests_create_distinct_documents() {
        let (service, store) = service_with_store();

        let first = service.record_vital("p1", Some(json!({"hr": 72}))).await.unwrap();
        let second = service.record_vital("p1", Some(json!({"hr": 72}))).await.unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(store.document_count("vitals").unwrap(), 2);
    }

    #[tokio::test]
    async fn test_unknown_patient_is_accepted() {
        let (service, store) = service_with_store();

        let recorded = service.record_vital("ghost", Some(json!({"spo2": 98}))).await.unwrap();

        assert_eq!(stored(&store, &recorded.id).await["patientId"], "ghost");
        assert_eq!(store.document_count("users").unwrap(), 0);
    }

    #[tokio::test]
    async fn test_missing_bodies() {
        let (service, store) = service_with_store();

        for body in [None, Some(json!(null)), Some(json!({})), Some(json!([])), Some(json!(""))] {
            let err = service.record_vital("p1", body).await.unwrap_err();
            assert!(matches!(err, VitalServiceError::MissingBody));
        }
        assert_eq!(store.document_count("vitals").unwrap(), 0);
    }

    #[tokio::test]
    async fn test_non_object_body_is_invalid() {
        let (service, _) = service_with_store();

        let err = service.record_vital("p1", Some(json!([1, 2]))).await.unwrap_err();
        assert!(matches!(err, VitalServiceError::InvalidBody("array")));
    }

    #[tokio::test]
    async fn test_empty_patient_id_is_rejected() {
        let (service, store) = service_with_store();

        let err = service.record_vital("", Some(json!({"hr": 72}))).await.unwrap_err();
        assert!(matches!(err, VitalServiceError::InvalidPatientId(_)));
        assert_eq!(store.document_count("vitals").unwrap(), 0);
    }

    #[tokio::test]
    async fn test_missing_body_wins_over_empty_patient_id() {
        let (service, _) = service_with_store();

        let err = service.record_vital("", None).await.unwrap_err();
        assert!(matches!(err, VitalServiceError::MissingBody));
    }

    #[tokio::test]
    async fn test_store_failure_propagates() {
        let service = VitalService::new(Arc::new(UnavailableDocumentStore::default()));

        let err = service.record_vital("p1", Some(json!({"hr": 72}))).await.unwrap_err();
        assert!(matches!(err, VitalServiceError::RepositoryError(_)));
    }
}
