//! Corpus sync orchestration.
//!
//! Triggers the external ingestion process and, when it reports a content
//! change, reloads the corpus store and re-runs embedding backfill before
//! returning. At most one sync runs at a time; a concurrent request is a
//! no-op, not an error and not a queue entry.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use tracing::info;

use crate::domain::errors::RetrievalResult;
use crate::domain::ports::ContentSource;
use crate::infrastructure::corpus::CorpusStore;
use crate::services::backfill::BackfillService;

/// Outcome of a sync request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
    /// The snapshot changed; corpus reloaded and backfill re-run.
    Updated,
    /// Ingestion ran but found nothing new.
    NoChanges,
    /// Another sync was already in flight; nothing was started.
    AlreadyRunning,
}

/// Single-flight sync orchestrator.
pub struct SyncService {
    source: Arc<dyn ContentSource>,
    store: Arc<CorpusStore>,
    backfill: Arc<BackfillService>,
    in_progress: AtomicBool,
    last_synced_at: Mutex<Option<DateTime<Utc>>>,
}

/// Clears the in-progress flag on every exit path, including failures.
struct InFlightGuard<'a>(&'a AtomicBool);

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

impl SyncService {
    pub fn new(
        source: Arc<dyn ContentSource>,
        store: Arc<CorpusStore>,
        backfill: Arc<BackfillService>,
    ) -> Self {
        Self {
            source,
            store,
            backfill,
            in_progress: AtomicBool::new(false),
            last_synced_at: Mutex::new(None),
        }
    }

    /// Run a sync, returning `true` iff the corpus changed.
    ///
    /// Matches the original boolean contract: a sync skipped because one is
    /// already running also reports `false`.
    pub async fn sync_articles(&self) -> RetrievalResult<bool> {
        Ok(matches!(self.sync().await?, SyncOutcome::Updated))
    }

    /// Run a sync with a structured outcome.
    pub async fn sync(&self) -> RetrievalResult<SyncOutcome> {
        if self
            .in_progress
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            info!("Sync already in progress, skipping");
            return Ok(SyncOutcome::AlreadyRunning);
        }
        let _guard = InFlightGuard(&self.in_progress);

        let report = self.source.run().await?;

        if !report.changed {
            info!("Ingestion reported no content changes");
            self.mark_synced();
            return Ok(SyncOutcome::NoChanges);
        }

        info!("Content changes detected, reloading corpus");
        self.store.reload().await?;
        self.backfill.run().await?;
        info!("Articles reloaded and embeddings updated");

        self.mark_synced();
        Ok(SyncOutcome::Updated)
    }

    /// Time of the last completed sync, if any.
    pub fn last_synced_at(&self) -> Option<DateTime<Utc>> {
        *self
            .last_synced_at
            .lock()
            .unwrap_or_else(|e| e.into_inner())
    }

    fn mark_synced(&self) {
        *self
            .last_synced_at
            .lock()
            .unwrap_or_else(|e| e.into_inner()) = Some(Utc::now());
    }
}
