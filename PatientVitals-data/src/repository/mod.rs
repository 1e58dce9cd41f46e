// Repository module structure
pub mod errors;
mod in_memory;
#[cfg(feature = "sqlite")]
mod sqlite;
mod store;

use std::sync::Arc;
use tracing::info;

use crate::database::{DatabaseConfig, DatabaseError, DatabaseType};

// Re-export commonly used types
pub use errors::RepositoryError;
pub use in_memory::InMemoryDocumentStore;
#[cfg(feature = "sqlite")]
pub use sqlite::SqliteDocumentStore;
pub use store::{generate_document_id, DocumentStore, GENERATED_ID_LENGTH};

// Store doubles for both testing and when mock feature is enabled
#[cfg(any(test, feature = "mock"))]
pub mod mock;

/// Shared handle to the process-wide document store
pub type SharedDocumentStore = Arc<dyn DocumentStore>;

/// Create the document store selected by the configuration
pub fn create_document_store(config: &DatabaseConfig) -> Result<SharedDocumentStore, DatabaseError> {
    match config.db_type {
        DatabaseType::Memory => {
            info!("Using in-memory document store");
            Ok(Arc::new(InMemoryDocumentStore::new()))
        }
        #[cfg(feature = "sqlite")]
        DatabaseType::Sqlite => {
            let pool = crate::database::create_sqlite_pool(config)?;
            info!("Using SQLite document store at {}", config.sqlite_path);
            Ok(Arc::new(SqliteDocumentStore::new(pool)))
        }
        #[cfg(not(feature = "sqlite"))]
        DatabaseType::Sqlite => Err(DatabaseError::UnsupportedDatabaseType(
            "sqlite (built without the sqlite feature)".to_string(),
        )),
    }
}
