//! Database connection module for the patient vitals store
//!
//! The document store can run against two backends:
//! - SQLite (default, persistent, pooled through r2d2)
//! - Memory (process-local, lost on restart)

use std::env;
use std::str::FromStr;
use tracing::info;

use super::DatabaseError;

/// Default location of the SQLite database file
pub const DEFAULT_SQLITE_PATH: &str = "data/patient_vitals.db";

/// Supported database types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatabaseType {
    /// SQLite database (file-based)
    Sqlite,
    /// Process-local in-memory document store
    Memory,
}

impl FromStr for DatabaseType {
    type Err = DatabaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sqlite" => Ok(DatabaseType::Sqlite),
            "memory" | "in-memory" | "in_memory" => Ok(DatabaseType::Memory),
            _ => Err(DatabaseError::UnsupportedDatabaseType(s.to_string())),
        }
    }
}

/// Database configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    /// Database type (sqlite, memory)
    pub db_type: DatabaseType,
    /// Path to SQLite database file
    pub sqlite_path: String,
    /// Maximum number of pooled connections
    pub pool_size: u32,
    /// Connection timeout in seconds
    pub timeout_seconds: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            db_type: DatabaseType::Sqlite,
            sqlite_path: DEFAULT_SQLITE_PATH.to_string(),
            pool_size: 10,
            timeout_seconds: 30,
        }
    }
}

impl DatabaseConfig {
    /// Create a new database configuration from environment variables
    pub fn from_env() -> Result<Self, DatabaseError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a configuration from an arbitrary variable source.
    ///
    /// Unset variables fall back to [`DatabaseConfig::default`]; set but
    /// unparseable values are rejected.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, DatabaseError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let db_type = match lookup("DB_TYPE") {
            Some(value) => value.parse::<DatabaseType>()?,
            None => defaults.db_type,
        };

        let sqlite_path = lookup("DB_SQLITE_PATH")
            .filter(|path| !path.trim().is_empty())
            .unwrap_or(defaults.sqlite_path);

        let pool_size = parse_var(&lookup, "DB_POOL_SIZE", defaults.pool_size)?;
        if pool_size == 0 {
            return Err(DatabaseError::ConfigError(
                "DB_POOL_SIZE must be at least 1".to_string(),
            ));
        }

        let timeout_seconds = parse_var(&lookup, "DB_TIMEOUT_SECONDS", defaults.timeout_seconds)?;

        let config = DatabaseConfig {
            db_type,
            sqlite_path,
            pool_size,
            timeout_seconds,
        };

        info!(
            "Database configuration: type={:?}, pool_size={}, timeout={}s",
            config.db_type, config.pool_size, config.timeout_seconds
        );

        Ok(config)
    }
}

fn parse_var<F, T>(lookup: &F, key: &str, default: T) -> Result<T, DatabaseError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|_| DatabaseError::ConfigError(format!("{} must be a number, got '{}'", key, raw))),
        None => Ok(default),
    }
}

/// SQLite connection pool shared by every request
#[cfg(feature = "sqlite")]
pub type SqlitePool = r2d2::Pool<r2d2_sqlite::SqliteConnectionManager>;

/// Create the SQLite connection pool and bring the schema up to date
#[cfg(feature = "sqlite")]
pub fn create_sqlite_pool(config: &DatabaseConfig) -> Result<SqlitePool, DatabaseError> {
    use rusqlite::OpenFlags;
    use std::path::Path;

    info!("Initializing SQLite database at: {}", config.sqlite_path);

    // Create parent directory if it doesn't exist
    if let Some(parent) = Path::new(&config.sqlite_path).parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            info!("Creating parent directory: {:?}", parent);
            std::fs::create_dir_all(parent)?;
        }
    }

    let manager = r2d2_sqlite::SqliteConnectionManager::file(&config.sqlite_path)
        .with_flags(OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_CREATE);

    let pool = r2d2::Pool::builder()
        .max_size(config.pool_size)
        .connection_timeout(std::time::Duration::from_secs(config.timeout_seconds))
        .build(manager)?;

    let conn = pool.get()?;
    super::migrations::run_sqlite_migrations(&conn)?;

    info!("SQLite connection pool created successfully");
    Ok(pool)
}
