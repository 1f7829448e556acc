//! User repository: SQLite persistence for registration records.
//!
//! Inserts, deletes and last-sync updates take a single async write guard so that concurrent
//! conversations cannot interleave a "check then write" sequence.

use crate::error::StorageError;
use crate::models::{SampleSize, UserRecord};
use crate::repository::UserStore;
use crate::sqlite_pool::SqlitePoolManager;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::Row;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{info, instrument};

#[derive(Clone)]
pub struct UserRepository {
    pool_manager: SqlitePoolManager,
    write_lock: Arc<Mutex<()>>,
}

impl UserRepository {
    pub async fn new(database_url: &str) -> Result<Self, StorageError> {
        let pool_manager = SqlitePoolManager::new(database_url).await?;
        let repo = Self {
            pool_manager,
            write_lock: Arc::new(Mutex::new(())),
        };
        repo.init().await?;
        Ok(repo)
    }

    async fn init(&self) -> Result<(), StorageError> {
        let pool = self.pool_manager.pool();

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS users (
                row_id INTEGER PRIMARY KEY AUTOINCREMENT,
                sync_timestamp TEXT NOT NULL,
                display_name TEXT NOT NULL,
                external_id TEXT NOT NULL UNIQUE,
                credential TEXT NOT NULL,
                label TEXT NOT NULL,
                sample_size INTEGER NOT NULL,
                last_sync TEXT
            )
            "#,
        )
        .execute(pool)
        .await?;

        info!("users table ready");
        Ok(())
    }

    fn from_row(row: &SqliteRow) -> Result<UserRecord, StorageError> {
        let external_id: String = row.try_get("external_id")?;
        let raw_size: i64 = row.try_get("sample_size")?;
        let sample_size = SampleSize::new(raw_size).ok_or_else(|| {
            StorageError::Database(format!(
                "sample_size {} out of range for user {}",
                raw_size, external_id
            ))
        })?;

        Ok(UserRecord {
            sync_timestamp: row.try_get("sync_timestamp")?,
            display_name: row.try_get("display_name")?,
            external_id,
            credential: row.try_get("credential")?,
            label: row.try_get("label")?,
            sample_size,
            last_sync: row.try_get("last_sync")?,
        })
    }

    async fn find(&self, external_id: &str) -> Result<Option<UserRecord>, StorageError> {
        let row = sqlx::query(
            r#"
            SELECT sync_timestamp, display_name, external_id, credential, label, sample_size, last_sync
            FROM users
            WHERE external_id = ?
            "#,
        )
        .bind(external_id)
        .fetch_optional(self.pool_manager.pool())
        .await?;

        row.as_ref().map(Self::from_row).transpose()
    }
}

#[async_trait]
impl UserStore for UserRepository {
    async fn get_all(&self) -> Result<Vec<UserRecord>, StorageError> {
        let rows = sqlx::query(
            r#"
            SELECT sync_timestamp, display_name, external_id, credential, label, sample_size, last_sync
            FROM users
            ORDER BY row_id
            "#,
        )
        .fetch_all(self.pool_manager.pool())
        .await?;

        rows.iter().map(Self::from_row).collect()
    }

    async fn get_by_id(&self, external_id: &str) -> Result<Option<UserRecord>, StorageError> {
        self.find(external_id).await
    }

    #[instrument(skip(self, record), fields(external_id = %record.external_id))]
    async fn save(&self, record: &UserRecord) -> Result<(), StorageError> {
        let _guard = self.write_lock.lock().await;

        if self.find(&record.external_id).await?.is_some() {
            return Err(StorageError::AlreadyExists(record.external_id.clone()));
        }

        sqlx::query(
            r#"
            INSERT INTO users (sync_timestamp, display_name, external_id, credential, label, sample_size, last_sync)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(record.sync_timestamp)
        .bind(&record.display_name)
        .bind(&record.external_id)
        .bind(&record.credential)
        .bind(&record.label)
        .bind(record.sample_size.get() as i64)
        .bind(record.last_sync)
        .execute(self.pool_manager.pool())
        .await?;

        info!(label = %record.label, sample_size = %record.sample_size, "Saved user");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete_by_id(&self, external_id: &str) -> Result<bool, StorageError> {
        let _guard = self.write_lock.lock().await;

        let result = sqlx::query("DELETE FROM users WHERE external_id = ?")
            .bind(external_id)
            .execute(self.pool_manager.pool())
            .await?;

        let deleted = result.rows_affected() > 0;
        info!(deleted, "Delete user");
        Ok(deleted)
    }

    #[instrument(skip(self))]
    async fn mark_synced(&self, external_id: &str, at: DateTime<Utc>) -> Result<(), StorageError> {
        let _guard = self.write_lock.lock().await;

        let result = sqlx::query("UPDATE users SET last_sync = ? WHERE external_id = ?")
            .bind(at)
            .bind(external_id)
            .execute(self.pool_manager.pool())
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound(external_id.to_string()));
        }
        Ok(())
    }
}
