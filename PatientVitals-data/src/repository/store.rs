use async_trait::async_trait;
use rand::distributions::Alphanumeric;
use rand::Rng;

use crate::models::{Document, Fields};
use super::errors::RepositoryError;

/// Length of store-generated document ids
pub const GENERATED_ID_LENGTH: usize = 20;

/// A document database addressed by collection name and document id.
///
/// Implementations are shared across concurrent requests and must guarantee
/// atomicity of each individual `get`/`set`.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Fetch a document, `None` when nothing is stored under `id`
    async fn get(&self, collection: &str, id: &str) -> Result<Option<Document>, RepositoryError>;

    /// Store `fields` under `id`, replacing any previous document
    async fn set(&self, collection: &str, id: &str, fields: Fields) -> Result<(), RepositoryError>;

    /// Store `fields` as a new document under a freshly generated id
    async fn create(&self, collection: &str, fields: Fields) -> Result<String, RepositoryError> {
        let id = generate_document_id();
        self.set(collection, &id, fields).await?;
        Ok(id)
    }

    /// Check that the backing store answers
    async fn ping(&self) -> Result<(), RepositoryError>;
}

/// Generate a random alphanumeric document id
pub fn generate_document_id() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(GENERATED_ID_LENGTH)
        .map(char::from)
        .collect()
}

/// Reject ids that cannot address a document
pub(crate) fn validate_document_id(id: &str) -> Result<(), RepositoryError> {
    if id.is_empty() || id.contains('/') {
        return Err(RepositoryError::InvalidDocumentId(id.to_string()));
    }
    Ok(())
}
