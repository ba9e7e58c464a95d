//! Explicitly-constructed application context.
//!
//! Holds the process-wide services (corpus store, vector cache, pipeline,
//! sync orchestrator) as one wired object instead of implicit globals.
//! Initialization order is fixed: vector cache load, corpus load, then
//! embedding backfill, so retrieval is never served before every cacheable
//! article has had its embedding attached.

use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::sync::Mutex;

use crate::domain::models::Config;
use crate::domain::ports::{ContentSource, EmbeddingProvider, RerankProvider};
use crate::infrastructure::cache::VectorCache;
use crate::infrastructure::cohere::CohereClient;
use crate::infrastructure::corpus::CorpusStore;
use crate::infrastructure::ingestion::ProcessContentSource;
use crate::services::{BackfillService, BatchPolicy, RetrievalService, SyncService};

/// Wired application services.
pub struct AppContext {
    pub config: Config,
    pub store: Arc<CorpusStore>,
    pub cache: Arc<Mutex<VectorCache>>,
    pub retrieval: Arc<RetrievalService>,
    pub backfill: Arc<BackfillService>,
    pub sync: Arc<SyncService>,
}

impl AppContext {
    /// Initialize against the real Cohere API and ingestion process.
    pub async fn initialize(config: Config) -> Result<Self> {
        let client = Arc::new(
            CohereClient::new(config.cohere.clone()).context("Failed to build Cohere client")?,
        );
        let source = Arc::new(ProcessContentSource::new(config.ingestion.clone()));

        Self::wire(config, client.clone(), client, source).await
    }

    /// Wire the context from explicit providers.
    ///
    /// Loads the cache, loads the corpus snapshot, then runs backfill once
    /// so every article that can carry an embedding does before the first
    /// query.
    pub async fn wire(
        config: Config,
        embedder: Arc<dyn EmbeddingProvider>,
        reranker: Arc<dyn RerankProvider>,
        source: Arc<dyn ContentSource>,
    ) -> Result<Self> {
        let cache = Arc::new(Mutex::new(
            VectorCache::load(&config.cache.path)
                .await
                .context("Failed to load vector cache")?,
        ));

        let store = Arc::new(CorpusStore::new(&config.corpus.path));
        store
            .reload()
            .await
            .context("Failed to load corpus snapshot")?;

        let backfill = Arc::new(BackfillService::new(
            embedder.clone(),
            store.clone(),
            cache.clone(),
            BatchPolicy::from_config(&config.backfill),
        ));
        backfill
            .run()
            .await
            .context("Initial embedding backfill failed")?;

        let retrieval = Arc::new(RetrievalService::new(
            embedder,
            reranker,
            store.clone(),
            config.retrieval.clone(),
        ));

        let sync = Arc::new(SyncService::new(source, store.clone(), backfill.clone()));

        Ok(Self {
            config,
            store,
            cache,
            retrieval,
            backfill,
            sync,
        })
    }
}
