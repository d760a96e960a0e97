use crate::connection::row_sequence::ensure_sequence;
use crate::connection::schema_validation::validate_table_schema;
use crate::{DbError, Result, UserRepository};

use roster_core::{ConflictPolicy, Entity, ErrorLocation, User};

use std::panic::Location;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use log::{debug, info};
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use tokio::sync::RwLock;

const MAX_FILE_CONNECTIONS: u32 = 5;
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Long-lived handle on the user database.
///
/// Connections are released when the handle is dropped; [`Database::close`]
/// waits for them to shut down.
pub struct Database {
    pool: SqlitePool,
    lock: Arc<RwLock<()>>,
    policy: ConflictPolicy,
}

impl Database {
    /// Open (creating if missing) a database file and bootstrap its schema
    pub async fn open(path: impl Into<PathBuf>, policy: ConflictPolicy) -> Result<Self> {
        let db_path = path.into();

        if let Some(parent) = db_path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| DbError::Initialization {
                    message: format!("Failed to create database directory: {}", e),
                    location: ErrorLocation::from(Location::caller()),
                })?;
        }

        let options = SqliteConnectOptions::new()
            .filename(&db_path)
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(BUSY_TIMEOUT);

        let pool = SqlitePoolOptions::new()
            .max_connections(MAX_FILE_CONNECTIONS)
            .connect_with(options)
            .await?;

        info!("Opened database: {}", db_path.display());

        Self::bootstrap(pool, policy).await
    }

    /// Open a private in-memory database that lives as long as the handle
    pub async fn open_in_memory(policy: ConflictPolicy) -> Result<Self> {
        let options = SqliteConnectOptions::new()
            .filename(":memory:")
            .create_if_missing(true);

        // The database exists only inside its single connection, which must
        // never be reaped.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;

        info!("Opened in-memory database");

        Self::bootstrap(pool, policy).await
    }

    async fn bootstrap(pool: SqlitePool, policy: ConflictPolicy) -> Result<Self> {
        let schema = User::SCHEMA;
        schema.validate()?;

        let ddl = schema.create_table_sql();
        debug!("Ensuring table '{}':\n{}", schema.table, ddl);
        sqlx::query(&ddl).execute(&pool).await?;

        validate_table_schema(&pool, &schema).await?;
        ensure_sequence(&pool, &schema.quoted_table(), schema.table).await?;

        info!(
            "Database ready: table '{}', conflict policy '{}'",
            schema.table, policy
        );

        Ok(Self {
            pool,
            lock: Arc::new(RwLock::new(())),
            policy,
        })
    }

    /// Data access object for the `user` table
    pub fn users(&self) -> UserRepository {
        UserRepository::new(self.pool.clone(), Arc::clone(&self.lock), self.policy)
    }

    pub fn conflict_policy(&self) -> ConflictPolicy {
        self.policy
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    pub async fn close(self) {
        self.pool.close().await;
        info!("Database closed");
    }
}
