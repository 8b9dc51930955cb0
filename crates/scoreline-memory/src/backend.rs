//! Key-value backends for the persistence adapter.

use async_trait::async_trait;
use scoreline_core::{
    config::StorageConfig, error::ScorelineError, shellexpand, traits::KeyValueStore,
};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::collections::HashMap;
use std::str::FromStr;
use std::sync::{Arc, Mutex};
use tracing::info;

/// Build the backend named in `[storage]`.
pub async fn open_backend(config: &StorageConfig) -> Result<Arc<dyn KeyValueStore>, ScorelineError> {
    match config.backend.as_str() {
        "sqlite" => Ok(Arc::new(SqliteBackend::open(&config.db_path).await?)),
        "memory" => Ok(Arc::new(MemoryBackend::new())),
        other => Err(ScorelineError::Config(format!(
            "unsupported storage backend: {other}"
        ))),
    }
}

/// Process-local map. Nothing survives a restart.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>, ScorelineError> {
        self.entries
            .lock()
            .map_err(|_| ScorelineError::Storage("memory backend lock poisoned".to_string()))
    }
}

#[async_trait]
impl KeyValueStore for MemoryBackend {
    fn name(&self) -> &str {
        "memory"
    }

    async fn get(&self, key: &str) -> Result<Option<String>, ScorelineError> {
        Ok(self.lock()?.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), ScorelineError> {
        self.lock()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<bool, ScorelineError> {
        Ok(self.lock()?.remove(key).is_some())
    }

    async fn keys(&self) -> Result<Vec<String>, ScorelineError> {
        Ok(self.lock()?.keys().cloned().collect())
    }
}

/// Key-value table in a SQLite file.
#[derive(Clone)]
pub struct SqliteBackend {
    pool: SqlitePool,
}

impl SqliteBackend {
    /// Open (creating if needed) the database at `db_path`, running migrations on first use.
    pub async fn open(db_path: &str) -> Result<Self, ScorelineError> {
        let db_path = shellexpand(db_path);

        // Ensure parent directory exists.
        if let Some(parent) = std::path::Path::new(&db_path).parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| ScorelineError::Storage(format!("failed to create data dir: {e}")))?;
        }

        let opts = SqliteConnectOptions::from_str(&format!("sqlite:{db_path}"))
            .map_err(|e| ScorelineError::Storage(format!("invalid db path: {e}")))?
            .create_if_missing(true)
            .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal);

        let pool = SqlitePoolOptions::new()
            .max_connections(4)
            .connect_with(opts)
            .await
            .map_err(|e| ScorelineError::Storage(format!("failed to connect to sqlite: {e}")))?;

        Self::run_migrations(&pool).await?;

        info!("Translation store initialized at {db_path}");

        Ok(Self { pool })
    }

    /// A private in-memory database. One connection, kept alive for the pool's lifetime.
    pub async fn in_memory() -> Result<Self, ScorelineError> {
        let opts = SqliteConnectOptions::from_str("sqlite::memory:")
            .map_err(|e| ScorelineError::Storage(format!("invalid db path: {e}")))?
            .create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(opts)
            .await
            .map_err(|e| ScorelineError::Storage(format!("failed to connect to sqlite: {e}")))?;
        Self::run_migrations(&pool).await?;
        Ok(Self { pool })
    }

    /// Get a reference to the underlying connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Run SQL migrations, tracking which have already been applied.
    async fn run_migrations(pool: &SqlitePool) -> Result<(), ScorelineError> {
        sqlx::raw_sql(
            "CREATE TABLE IF NOT EXISTS _migrations (
                name TEXT PRIMARY KEY,
                applied_at TEXT NOT NULL DEFAULT (datetime('now'))
            );",
        )
        .execute(pool)
        .await
        .map_err(|e| ScorelineError::Storage(format!("failed to create migrations table: {e}")))?;

        let migrations: &[(&str, &str)] = &[(
            "001_kv",
            "CREATE TABLE IF NOT EXISTS kv (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL,
                updated_at TEXT NOT NULL DEFAULT (datetime('now'))
            );",
        )];

        for (name, sql) in migrations {
            let applied: Option<(String,)> =
                sqlx::query_as("SELECT name FROM _migrations WHERE name = ?")
                    .bind(name)
                    .fetch_optional(pool)
                    .await
                    .map_err(|e| {
                        ScorelineError::Storage(format!("failed to check migration {name}: {e}"))
                    })?;

            if applied.is_some() {
                continue;
            }

            sqlx::raw_sql(sql)
                .execute(pool)
                .await
                .map_err(|e| ScorelineError::Storage(format!("migration {name} failed: {e}")))?;

            sqlx::query("INSERT INTO _migrations (name) VALUES (?)")
                .bind(name)
                .execute(pool)
                .await
                .map_err(|e| {
                    ScorelineError::Storage(format!("failed to record migration {name}: {e}"))
                })?;
        }
        Ok(())
    }
}

const UPSERT_SQL: &str = "INSERT INTO kv (key, value) VALUES (?, ?) \
     ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = datetime('now')";

#[async_trait]
impl KeyValueStore for SqliteBackend {
    fn name(&self) -> &str {
        "sqlite"
    }

    async fn get(&self, key: &str) -> Result<Option<String>, ScorelineError> {
        let row: Option<(String,)> = sqlx::query_as("SELECT value FROM kv WHERE key = ?")
            .bind(key)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| ScorelineError::Storage(format!("query failed: {e}")))?;

        Ok(row.map(|(v,)| v))
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), ScorelineError> {
        sqlx::query(UPSERT_SQL)
            .bind(key)
            .bind(value)
            .execute(&self.pool)
            .await
            .map_err(|e| ScorelineError::Storage(format!("upsert failed: {e}")))?;
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<bool, ScorelineError> {
        let result = sqlx::query("DELETE FROM kv WHERE key = ?")
            .bind(key)
            .execute(&self.pool)
            .await
            .map_err(|e| ScorelineError::Storage(format!("delete failed: {e}")))?;

        Ok(result.rows_affected() > 0)
    }

    async fn keys(&self) -> Result<Vec<String>, ScorelineError> {
        let rows: Vec<(String,)> = sqlx::query_as("SELECT key FROM kv")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| ScorelineError::Storage(format!("query failed: {e}")))?;

        Ok(rows.into_iter().map(|(k,)| k).collect())
    }

    async fn set_many(&self, entries: &[(String, String)]) -> Result<(), ScorelineError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| ScorelineError::Storage(format!("begin failed: {e}")))?;

        for (key, value) in entries {
            sqlx::query(UPSERT_SQL)
                .bind(key)
                .bind(value)
                .execute(&mut *tx)
                .await
                .map_err(|e| ScorelineError::Storage(format!("upsert failed: {e}")))?;
        }

        tx.commit()
            .await
            .map_err(|e| ScorelineError::Storage(format!("commit failed: {e}")))?;
        Ok(())
    }
}
