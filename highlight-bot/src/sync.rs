//! Periodic fan-out: delivers highlights to every registered user on a fixed interval.
//!
//! Users are served one after another. A failure for one user is logged and the pass moves on;
//! `last_sync` is stamped only after a successful delivery.

use chrono::Utc;
use hbot_core::Chat;
use highlights::HighlightSender;
use std::sync::Arc;
use std::time::Duration;
use storage::{UserRecord, UserStore};
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{error, info, instrument, warn};

use crate::handlers::storage_error;

/// Outcome counts of one pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncReport {
    pub users: usize,
    pub delivered: usize,
    pub empty: usize,
    pub failed: usize,
}

pub struct SyncScheduler {
    store: Arc<dyn UserStore>,
    sender: Arc<HighlightSender>,
}

impl SyncScheduler {
    pub fn new(store: Arc<dyn UserStore>, sender: Arc<HighlightSender>) -> Self {
        Self { store, sender }
    }

    /// One pass over all registered users.
    #[instrument(skip(self))]
    pub async fn run_once(&self) -> hbot_core::Result<SyncReport> {
        let users = self.store.get_all().await.map_err(storage_error)?;
        let mut report = SyncReport {
            users: users.len(),
            ..SyncReport::default()
        };
        info!(users = users.len(), "Sync pass started");

        for record in &users {
            match self.sync_user(record).await {
                Ok(true) => report.delivered += 1,
                Ok(false) => report.empty += 1,
                Err(e) => {
                    error!(error = %e, user_id = %record.external_id, "Sync failed for user");
                    report.failed += 1;
                }
            }
        }

        info!(
            delivered = report.delivered,
            empty = report.empty,
            failed = report.failed,
            "Sync pass finished"
        );
        Ok(report)
    }

    async fn sync_user(&self, record: &UserRecord) -> hbot_core::Result<bool> {
        let Some(chat_id) = record.chat_id() else {
            warn!(user_id = %record.external_id, "External id is not a chat id, skipping");
            return Err(hbot_core::HbotError::Validation(format!(
                "external id {:?} is not numeric",
                record.external_id
            )));
        };

        let delivered = self
            .sender
            .send_highlights(
                &Chat::private(chat_id),
                &record.credential,
                &record.label,
                record.sample_size.get(),
            )
            .await?;

        if delivered {
            self.store
                .mark_synced(&record.external_id, Utc::now())
                .await
                .map_err(storage_error)?;
        }
        Ok(delivered)
    }

    /// Runs a pass every `period`, first one after a full period. Never returns.
    pub async fn run(self, period: Duration) {
        info!(period_secs = period.as_secs(), "Periodic sync enabled");
        let mut ticker = interval_at(Instant::now() + period, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            ticker.tick().await;
            if let Err(e) = self.run_once().await {
                error!(error = %e, "Sync pass aborted");
            }
        }
    }
}
