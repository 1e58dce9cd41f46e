use rusqlite::Connection;
use tracing::info;

use crate::database::DatabaseError;

/// Run SQLite migrations. Safe to call on every startup.
pub fn run_migrations(conn: &Connection) -> Result<(), DatabaseError> {
    info!("Running SQLite migrations");

    create_documents_table(conn)?;

    info!("SQLite migrations completed successfully");
    Ok(())
}

/// Every collection shares one table; `data` holds the JSON object.
fn create_documents_table(conn: &Connection) -> Result<(), DatabaseError> {
    info!("Creating documents table if not exists");

    conn.execute(
        "CREATE TABLE IF NOT EXISTS documents (
            collection TEXT NOT NULL,
            id TEXT NOT NULL,
            data TEXT NOT NULL,
            created_at TEXT NOT NULL,
            PRIMARY KEY (collection, id)
        )",
        [],
    )
    .map_err(|e| DatabaseError::MigrationError(format!("Failed to create documents table: {}", e)))?;

    Ok(())
}
