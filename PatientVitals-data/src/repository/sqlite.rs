use async_trait::async_trait;
use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension};
use tracing::debug;

use crate::database::SqlitePool;
use crate::models::{Document, Fields};
use super::errors::RepositoryError;
use super::store::{validate_document_id, DocumentStore};

/// Document store persisted in SQLite.
///
/// rusqlite is blocking, so every statement runs on the blocking thread pool
/// with its own pooled connection.
#[derive(Clone)]
pub struct SqliteDocumentStore {
    pool: SqlitePool,
}

impl SqliteDocumentStore {
    /// Wrap an initialized (migrated) connection pool
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    async fn with_connection<F, T>(&self, operation: F) -> Result<T, RepositoryError>
    where
        F: FnOnce(&Connection) -> Result<T, RepositoryError> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let conn = pool.get()?;
            operation(&conn)
        })
        .await
        .map_err(|e| RepositoryError::Task(e.to_string()))?
    }
}

#[async_trait]
impl DocumentStore for SqliteDocumentStore {
    async fn get(&self, collection: &str, id: &str) -> Result<Option<Document>, RepositoryError> {
        validate_document_id(id)?;
        debug!(collection, id, "Getting document from SQLite");

        let collection = collection.to_string();
        let id = id.to_string();

        self.with_connection(move |conn| {
            let data: Option<String> = conn
                .query_row(
                    "SELECT data FROM documents WHERE collection = ?1 AND id = ?2",
                    params![collection, id],
                    |row| row.get(0),
                )
                .optional()?;

            match data {
                Some(data) => {
                    let fields: Fields = serde_json::from_str(&data)?;
                    Ok(Some(Document::new(id, fields)))
                }
                None => Ok(None),
            }
        })
        .await
    }

    async fn set(&self, collection: &str, id: &str, fields: Fields) -> Result<(), RepositoryError> {
        validate_document_id(id)?;
        debug!(collection, id, "Storing document in SQLite");

        let collection = collection.to_string();
        let id = id.to_string();
        let data = serde_json::to_string(&fields)?;
        let created_at = Utc::now().to_rfc3339();

        self.with_connection(move |conn| {
            conn.execute(
                "INSERT INTO documents (collection, id, data, created_at)
                 VALUES (?1, ?2, ?3, ?4)
                 ON CONFLICT (collection, id) DO UPDATE SET data = excluded.data",
                params![collection, id, data, created_at],
            )?;
            Ok(())
        })
        .await
    }

    async fn ping(&self) -> Result<(), RepositoryError> {
        self.with_connection(|conn| {
            conn.query_row("SELECT 1", [], |row| row.get::<_, i64>(0))?;
            Ok(())
        })
        .await
    }
}
