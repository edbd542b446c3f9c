//! # Database Handle
//!
//! Storage handle and configuration for the SQLite file.
//!
//! ## Connection Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      One Connection Per Operation                       │
//! │                                                                         │
//! │  Startup                                                               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  DbConfig::new(path) ← path, busy timeout                              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Database::open(config) ← builds connect options, ensures schema       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  repository call                                                       │
//! │       ├── connect()          open the file                             │
//! │       ├── execute statement  autocommit                                │
//! │       └── close()            explicit on success, on drop otherwise    │
//! │                                                                         │
//! │  No pool: nothing stays open between two menu operations.              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode};
use sqlx::{ConnectOptions, Connection, SqliteConnection};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, info};

use crate::error::{DbError, DbResult};
use crate::repository::product::ProductRepository;
use crate::schema;

// =============================================================================
// Configuration
// =============================================================================

/// Database configuration.
///
/// ## Example
/// ```rust,ignore
/// let config = DbConfig::new("./inventory.db")
///     .busy_timeout(Duration::from_secs(2));
/// ```
#[derive(Debug, Clone)]
pub struct DbConfig {
    /// Path to the SQLite database file.
    pub database_path: PathBuf,

    /// How long a statement waits on a locked file before failing.
    /// Default: 5 seconds
    pub busy_timeout: Duration,

    /// Create the file when it doesn't exist.
    /// Default: true
    pub create_if_missing: bool,

    /// Create the `products` table on open.
    /// Default: true
    pub ensure_schema: bool,
}

impl DbConfig {
    /// Creates a new database configuration with the given path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        DbConfig {
            database_path: path.into(),
            busy_timeout: Duration::from_secs(5),
            create_if_missing: true,
            ensure_schema: true,
        }
    }

    /// Sets the busy timeout.
    pub fn busy_timeout(mut self, timeout: Duration) -> Self {
        self.busy_timeout = timeout;
        self
    }

    /// Sets whether a missing file is created.
    pub fn create_if_missing(mut self, create: bool) -> Self {
        self.create_if_missing = create;
        self
    }

    /// Sets whether the schema is ensured on open.
    pub fn ensure_schema(mut self, ensure: bool) -> Self {
        self.ensure_schema = ensure;
        self
    }
}

// =============================================================================
// Database
// =============================================================================

/// Storage handle.
///
/// Holds only connection options; every operation opens its own connection
/// through [`Database::connect`] and closes it before returning. Cloning is
/// cheap and shares nothing stateful.
#[derive(Debug, Clone)]
pub struct Database {
    path: PathBuf,
    options: SqliteConnectOptions,
}

impl Database {
    /// Prepares the storage handle and, unless disabled, ensures the schema.
    ///
    /// ## Returns
    /// * `Ok(Database)` - Ready-to-use handle
    /// * `Err(DbError::ConnectionFailed)` - File can't be opened or created
    pub async fn open(config: DbConfig) -> DbResult<Self> {
        info!(
            path = %config.database_path.display(),
            "Opening inventory database"
        );

        let options = SqliteConnectOptions::new()
            .filename(&config.database_path)
            .create_if_missing(config.create_if_missing)
            // Rollback journal: the database stays a single file
            .journal_mode(SqliteJournalMode::Delete)
            .busy_timeout(config.busy_timeout)
            // Statement logging is noise on an interactive screen
            .disable_statement_logging();

        let db = Database {
            path: config.database_path,
            options,
        };

        if config.ensure_schema {
            db.ensure_schema().await?;
        }

        Ok(db)
    }

    /// Opens a fresh connection for one operation.
    ///
    /// The caller owns it. Dropping the connection closes it, so an early
    /// return through `?` still releases the file.
    pub async fn connect(&self) -> DbResult<SqliteConnection> {
        debug!(path = %self.path.display(), "Opening connection");

        SqliteConnection::connect_with(&self.options)
            .await
            .map_err(|e| DbError::ConnectionFailed(e.to_string()))
    }

    /// Creates the `products` table if absent.
    pub async fn ensure_schema(&self) -> DbResult<()> {
        let mut conn = self.connect().await?;
        schema::ensure_schema(&mut conn).await?;
        conn.close().await?;
        Ok(())
    }

    /// Returns the product repository.
    pub fn products(&self) -> ProductRepository {
        ProductRepository::new(self.clone())
    }

    /// Checks if the database can execute queries.
    pub async fn health_check(&self) -> bool {
        let Ok(mut conn) = self.connect().await else {
            return false;
        };

        let ok = sqlx::query("SELECT 1").execute(&mut conn).await.is_ok();
        ok && conn.close().await.is_ok()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
