//! Embedding backfill service.
//!
//! Ensures every article in the corpus store carries an embedding before
//! retrieval is served. Cached vectors are attached first; the remainder is
//! generated through the embedding provider under a fixed-interval,
//! concurrency-one batch policy that respects the provider's per-minute
//! request cap. Backfill runs at startup and after sync, never per query,
//! so throughput is deliberately traded for predictable rate behavior.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tracing::{error, info, warn};

use crate::domain::errors::RetrievalResult;
use crate::domain::models::{Article, BackfillConfig};
use crate::domain::ports::EmbeddingProvider;
use crate::infrastructure::cache::VectorCache;
use crate::infrastructure::corpus::CorpusStore;

/// Named, testable scheduling policy for backfill batches.
///
/// Concurrency is fixed at one: items are processed strictly sequentially
/// with `inter_request_delay` after every embedding call.
#[derive(Debug, Clone)]
pub struct BatchPolicy {
    pub batch_size: usize,
    pub inter_request_delay: Duration,
}

impl BatchPolicy {
    pub fn from_config(config: &BackfillConfig) -> Self {
        Self {
            batch_size: config.batch_size.max(1),
            inter_request_delay: Duration::from_millis(config.delay_ms),
        }
    }
}

impl Default for BatchPolicy {
    fn default() -> Self {
        Self::from_config(&BackfillConfig::default())
    }
}

/// Report from one backfill run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BackfillReport {
    /// Articles in the corpus snapshot.
    pub total: usize,
    /// Articles whose embedding came from the cache.
    pub from_cache: usize,
    /// Articles embedded in this run.
    pub embedded: usize,
    /// Articles left without an embedding after this run.
    pub failed: usize,
}

/// Generates and caches missing embeddings for the current corpus snapshot.
pub struct BackfillService {
    embedder: Arc<dyn EmbeddingProvider>,
    store: Arc<CorpusStore>,
    cache: Arc<Mutex<VectorCache>>,
    policy: BatchPolicy,
}

impl BackfillService {
    pub fn new(
        embedder: Arc<dyn EmbeddingProvider>,
        store: Arc<CorpusStore>,
        cache: Arc<Mutex<VectorCache>>,
        policy: BatchPolicy,
    ) -> Self {
        Self {
            embedder,
            store,
            cache,
            policy,
        }
    }

    /// Run backfill over the current corpus snapshot and swap the updated
    /// articles back into the store.
    ///
    /// Per-article embedding failures are logged and swallowed; the article
    /// is simply excluded from similarity ranking until a later run
    /// succeeds. There is no retry loop inside a single run.
    pub async fn run(&self) -> RetrievalResult<BackfillReport> {
        let snapshot = self.store.snapshot();
        let mut articles: Vec<Article> = snapshot.as_ref().clone();

        let mut report = BackfillReport {
            total: articles.len(),
            ..BackfillReport::default()
        };

        if articles.is_empty() {
            info!("Corpus is empty, nothing to backfill");
            return Ok(report);
        }

        // Attach cached vectors first; only the rest goes to the provider.
        let mut pending: Vec<usize> = Vec::new();
        {
            let cache = self.cache.lock().await;
            for (idx, article) in articles.iter_mut().enumerate() {
                match cache.get(&article.id) {
                    Some(vector) if !vector.is_empty() => {
                        article.embedding = Some(vector.clone());
                        report.from_cache += 1;
                    }
                    _ => pending.push(idx),
                }
            }
        }

        info!(
            total = report.total,
            cached = report.from_cache,
            pending = pending.len(),
            "Starting embedding backfill"
        );

        if pending.is_empty() {
            self.store.replace(articles);
            return Ok(report);
        }

        let batch_count = pending.len().div_ceil(self.policy.batch_size);
        for (batch_idx, batch) in pending.chunks(self.policy.batch_size).enumerate() {
            info!(
                batch = batch_idx + 1,
                of = batch_count,
                size = batch.len(),
                "Processing backfill batch"
            );

            for &idx in batch {
                let article_id = articles[idx].id.clone();
                info!(article_id = %article_id, title = %articles[idx].title, "Generating embedding");

                let outcome = self.embedder.embed(&articles[idx].body).await;
                match outcome {
                    Ok(vector) => {
                        articles[idx].embedding = Some(vector.clone());
                        report.embedded += 1;

                        let mut cache = self.cache.lock().await;
                        if let Err(err) = cache.set(&article_id, vector).await {
                            error!(
                                article_id = %article_id,
                                error = %err,
                                "Failed to persist embedding to cache"
                            );
                        }
                    }
                    Err(err) => {
                        warn!(
                            article_id = %article_id,
                            error = %err,
                            "Failed to generate embedding, article excluded from ranking"
                        );
                        report.failed += 1;
                    }
                }

                tokio::time::sleep(self.policy.inter_request_delay).await;
            }
        }

        let embedded_total = articles.iter().filter(|a| a.has_embedding()).count();
        info!(
            embedded = embedded_total,
            total = report.total,
            "Backfill complete"
        );

        self.store.replace(articles);
        Ok(report)
    }
}
