//! Registration record model.
//!
//! Maps to the `users` table, columns in this order:
//! sync_timestamp, display_name, external_id, credential, label, sample_size, last_sync.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of highlights a user wants per delivery; always within `1..=10`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SampleSize(u8);

impl SampleSize {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 10;

    /// Returns None when `n` is outside `1..=10`.
    pub fn new(n: i64) -> Option<Self> {
        if (i64::from(Self::MIN)..=i64::from(Self::MAX)).contains(&n) {
            Some(Self(n as u8))
        } else {
            None
        }
    }

    pub fn get(self) -> usize {
        usize::from(self.0)
    }
}

impl fmt::Display for SampleSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One registered user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    /// When the row was written.
    pub sync_timestamp: DateTime<Utc>,
    /// Informational (first name at registration time).
    pub display_name: String,
    /// Unique key: the chat participant id.
    pub external_id: String,
    /// Reading-list API token; opaque, never logged in clear.
    pub credential: String,
    /// Label highlights are filtered by; non-empty.
    pub label: String,
    pub sample_size: SampleSize,
    /// Absent until the first successful delivery.
    pub last_sync: Option<DateTime<Utc>>,
}

impl UserRecord {
    /// New record with the current time as `sync_timestamp` and no last sync.
    pub fn new(
        external_id: impl Into<String>,
        display_name: impl Into<String>,
        credential: impl Into<String>,
        label: impl Into<String>,
        sample_size: SampleSize,
    ) -> Self {
        Self {
            sync_timestamp: Utc::now(),
            display_name: display_name.into(),
            external_id: external_id.into(),
            credential: credential.into(),
            label: label.into(),
            sample_size,
            last_sync: None,
        }
    }

    /// True until the first delivery has been stamped.
    pub fn is_first_sync(&self) -> bool {
        self.last_sync.is_none()
    }

    /// Chat id to deliver to; None if the external id is not numeric.
    pub fn chat_id(&self) -> Option<i64> {
        self.external_id.parse().ok()
    }
}
