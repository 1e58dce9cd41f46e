//! Store doubles for exercising fault paths in tests

use async_trait::async_trait;

use crate::models::{Document, Fields};
use super::errors::RepositoryError;
use super::store::DocumentStore;

/// A document store whose every operation fails as if the backend were down
#[derive(Debug, Clone)]
pub struct UnavailableDocumentStore {
    reason: String,
}

impl Default for UnavailableDocumentStore {
    fn default() -> Self {
        Self::new("connection refused")
    }
}

impl UnavailableDocumentStore {
    /// Create a store failing with the given reason
    pub fn new(reason: impl Into<String>) -> Self {
        Self { reason: reason.into() }
    }

    fn fail<T>(&self) -> Result<T, RepositoryError> {
        Err(RepositoryError::Unavailable(self.reason.clone()))
    }
}

#[async_trait]
impl DocumentStore for UnavailableDocumentStore {
    async fn get(&self, _collection: &str, _id: &str) -> Result<Option<Document>, RepositoryError> {
        self.fail()
    }

    async fn set(&self, _collection: &str, _id: &str, _fields: Fields) -> Result<(), RepositoryError> {
        self.fail()
    }

    async fn ping(&self) -> Result<(), RepositoryError> {
        self.fail()
    }
}
