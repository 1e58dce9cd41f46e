use std::sync::{Arc, Mutex};
use std::collections::HashMap;
use async_trait::async_trait;
use tracing::debug;

use crate::models::{Document, Fields};
use super::errors::RepositoryError;
use super::store::{validate_document_id, DocumentStore};

/// In-memory document store, one map per collection
#[derive(Debug, Clone, Default)]
pub struct InMemoryDocumentStore {
    collections: Arc<Mutex<HashMap<String, HashMap<String, Fields>>>>,
}

impl InMemoryDocumentStore {
    /// Create a new empty in-memory store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of documents held in a collection
    pub fn document_count(&self, collection: &str) -> Result<usize, RepositoryError> {
        let store = self.collections.lock()?;
        Ok(store.get(collection).map_or(0, HashMap::len))
    }
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn get(&self, collection: &str, id: &str) -> Result<Option<Document>, RepositoryError> {
        validate_document_id(id)?;

        let store = self.collections.lock()?;
        let document = store
            .get(collection)
            .and_then(|documents| documents.get(id))
            .map(|fields| Document::new(id, fields.clone()));

        debug!(collection, id, found = document.is_some(), "In-memory get");
        Ok(document)
    }

    async fn set(&self, collection: &str, id: &str, fields: Fields) -> Result<(), RepositoryError> {
        validate_document_id(id)?;

        let mut store = self.collections.lock()?;
        store
            .entry(collection.to_string())
            .or_default()
            .insert(id.to_string(), fields);

        debug!(collection, id, "In-memory set");
        Ok(())
    }

    async fn ping(&self) -> Result<(), RepositoryError> {
        let _store = self.collections.lock()?;
        Ok(())
    }
}
