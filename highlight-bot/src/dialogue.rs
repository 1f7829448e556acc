//! Registration dialogue state, keyed by user id.
//!
//! A user is in at most one dialogue. Entries are removed when the dialogue completes, is
//! cancelled or fails validation, and idle entries expire after the configured TTL.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;
use tracing::{debug, info};

/// Where a user is in the registration dialogue, with the answers collected so far.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogueState {
    AwaitingCredential,
    AwaitingLabel { credential: String },
    AwaitingSampleSize { credential: String, label: String },
}

impl DialogueState {
    pub fn name(&self) -> &'static str {
        match self {
            DialogueState::AwaitingCredential => "awaiting_credential",
            DialogueState::AwaitingLabel { .. } => "awaiting_label",
            DialogueState::AwaitingSampleSize { .. } => "awaiting_sample_size",
        }
    }

    /// True when the next free-text answer is harmless to log (a label or a sample size).
    pub fn answer_is_loggable(&self) -> bool {
        !matches!(self, DialogueState::AwaitingCredential)
    }
}

#[derive(Debug)]
struct DialogueEntry {
    state: DialogueState,
    touched: Instant,
}

/// Shared table of active dialogues. Clones share the same table.
#[derive(Clone)]
pub struct DialogueStore {
    entries: Arc<RwLock<HashMap<i64, DialogueEntry>>>,
    ttl: Option<Duration>,
}

impl DialogueStore {
    /// `ttl` of None keeps idle dialogues until they finish.
    pub fn new(ttl: Option<Duration>) -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
            ttl,
        }
    }

    fn expired(&self, entry: &DialogueEntry) -> bool {
        self.ttl
            .map(|ttl| entry.touched.elapsed() >= ttl)
            .unwrap_or(false)
    }

    /// Starts (or restarts) a dialogue at the credential step.
    pub async fn begin(&self, user_id: i64) {
        self.set(user_id, DialogueState::AwaitingCredential).await;
    }

    /// Current state; an expired entry is dropped and reported as absent.
    pub async fn get(&self, user_id: i64) -> Option<DialogueState> {
        {
            let entries = self.entries.read().await;
            match entries.get(&user_id) {
                None => return None,
                Some(entry) if !self.expired(entry) => return Some(entry.state.clone()),
                Some(_) => {}
            }
        }
        let mut entries = self.entries.write().await;
        if entries.get(&user_id).is_some_and(|e| self.expired(e)) {
            entries.remove(&user_id);
            info!(user_id, "Dialogue expired");
        }
        None
    }

    /// Moves the user to `state` and refreshes the idle timer.
    pub async fn set(&self, user_id: i64, state: DialogueState) {
        debug!(user_id, state = state.name(), "Dialogue state");
        self.entries.write().await.insert(
            user_id,
            DialogueEntry {
                state,
                touched: Instant::now(),
            },
        );
    }

    /// Ends the user's dialogue. Returns true if one was active.
    pub async fn end(&self, user_id: i64) -> bool {
        self.entries.write().await.remove(&user_id).is_some()
    }

    /// True only while a live dialogue expects a label or a sample size from the user.
    pub async fn expects_loggable_answer(&self, user_id: i64) -> bool {
        self.get(user_id)
            .await
            .is_some_and(|state| state.answer_is_loggable())
    }

    /// Drops every expired entry; returns how many were removed.
    pub async fn purge_expired(&self) -> usize {
        if self.ttl.is_none() {
            return 0;
        }
        let mut entries = self.entries.write().await;
        let before = entries.len();
        entries.retain(|_, entry| !self.expired(entry));
        let purged = before - entries.len();
        if purged > 0 {
            info!(purged, "Purged expired dialogues");
        }
        purged
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

impl Default for DialogueStore {
    fn default() -> Self {
        Self::new(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_dialogue_walks_states_and_ends() {
        let store = DialogueStore::default();
        assert!(store.get(1).await.is_none());

        store.begin(1).await;
        assert_eq!(store.get(1).await, Some(DialogueState::AwaitingCredential));
        assert!(!store.expects_loggable_answer(1).await);

        store
            .set(
                1,
                DialogueState::AwaitingLabel {
                    credential: "tok".to_string(),
                },
            )
            .await;
        assert!(store.expects_loggable_answer(1).await);
        assert_eq!(
            store.get(1).await,
            Some(DialogueState::AwaitingLabel {
                credential: "tok".to_string()
            })
        );

        assert!(store.end(1).await);
        assert!(!store.end(1).await);
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_dialogues_are_per_user() {
        let store = DialogueStore::default();
        store.begin(1).await;
        store
            .set(
                2,
                DialogueState::AwaitingLabel {
                    credential: "x".to_string(),
                },
            )
            .await;

        assert!(!store.expects_loggable_answer(1).await);
        assert!(store.expects_loggable_answer(2).await);
        assert_eq!(store.len().await, 2);
    }

    #[tokio::test]
    async fn test_idle_dialogue_expires() {
        let store = DialogueStore::new(Some(Duration::from_millis(20)));
        store.begin(7).await;
        store.begin(8).await;

        tokio::time::sleep(Duration::from_millis(40)).await;

        assert!(store.get(7).await.is_none());
        assert_eq!(store.len().await, 1);
        assert_eq!(store.purge_expired().await, 1);
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_no_ttl_never_purges() {
        let store = DialogueStore::new(None);
        store.begin(1).await;
        assert_eq!(store.purge_expired().await, 0);
        assert!(store.get(1).await.is_some());
    }
}
