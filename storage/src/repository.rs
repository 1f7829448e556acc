//! User store trait. [`crate::UserRepository`] is the SQLite implementation; tests may provide their own.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use super::error::StorageError;
use super::models::UserRecord;

/// Keyed access to registration records. `external_id` identifies at most one record.
///
/// Implementations must serialize `save`, `delete_by_id` and `mark_synced` against each other.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// All records in insertion order.
    async fn get_all(&self) -> Result<Vec<UserRecord>, StorageError>;
    /// The record for `external_id`, or None if the user is not registered.
    async fn get_by_id(&self, external_id: &str) -> Result<Option<UserRecord>, StorageError>;
    /// Inserts a new record. Fails with `AlreadyExists` if the external id is taken.
    async fn save(&self, record: &UserRecord) -> Result<(), StorageError>;
    /// Removes the record; returns true if one was deleted.
    async fn delete_by_id(&self, external_id: &str) -> Result<bool, StorageError>;
    /// Stamps the last successful delivery time. Fails with `NotFound` for unknown ids.
    async fn mark_synced(&self, external_id: &str, at: DateTime<Utc>) -> Result<(), StorageError>;
}
