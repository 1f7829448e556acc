//! SQLite connection pool wrapper for the storage module.
//!
//! [`SqlitePoolManager`] opens one pool per database URL; the database file is created if it does
//! not exist. `sqlite::memory:` (or `:memory:`) opens a single-connection in-memory database.

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;
use tracing::info;

/// Manages a single SQLite pool; creates the database file if missing.
#[derive(Clone)]
pub struct SqlitePoolManager {
    pool: SqlitePool,
}

impl SqlitePoolManager {
    /// Creates a pool for the given database URL (file path or in-memory).
    pub async fn new(database_url: &str) -> Result<Self, sqlx::Error> {
        info!(database_url = %database_url, "Initializing SQLite pool");

        let pool = if is_in_memory(database_url) {
            // Every connection to :memory: is a separate database, so pin the pool to one.
            SqlitePoolOptions::new()
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
                .connect_with(SqliteConnectOptions::from_str("sqlite::memory:")?)
                .await?
        } else {
            let path = database_url
                .strip_prefix("sqlite://")
                .or_else(|| database_url.strip_prefix("sqlite:"))
                .or_else(|| database_url.strip_prefix("file:"))
                .unwrap_or(database_url);
            let options = SqliteConnectOptions::new()
                .create_if_missing(true)
                .filename(path);
            SqlitePool::connect_with(options).await?
        };

        Ok(Self { pool })
    }

    /// Returns the underlying pool for running queries.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

fn is_in_memory(database_url: &str) -> bool {
    matches!(database_url, ":memory:" | "sqlite::memory:" | "sqlite://:memory:")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_in_memory() {
        assert!(is_in_memory("sqlite::memory:"));
        assert!(is_in_memory(":memory:"));
        assert!(!is_in_memory("./highlight_bot.db"));
        assert!(!is_in_memory("file:./memory.db"));
    }
}
