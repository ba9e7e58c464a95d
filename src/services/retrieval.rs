//! Two-stage retrieval pipeline.
//!
//! Embeds the query, ranks the corpus by cosine similarity, widens the top
//! of the ranking into a rerank candidate pool, and lets the rerank provider
//! produce the final order. A rerank failure propagates rather than falling
//! back to embedding-only ranking: silently degraded results are worse than
//! a visible failure.

use std::cmp::Ordering;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::errors::{RetrievalError, RetrievalResult};
use crate::domain::models::{RetrievalConfig, ScoredArticle};
use crate::domain::ports::{EmbeddingProvider, RerankProvider};
use crate::domain::similarity::cosine_similarity;
use crate::infrastructure::corpus::CorpusStore;

/// Query-time retrieval over the corpus store.
pub struct RetrievalService {
    embedder: Arc<dyn EmbeddingProvider>,
    reranker: Arc<dyn RerankProvider>,
    store: Arc<CorpusStore>,
    config: RetrievalConfig,
}

impl RetrievalService {
    pub fn new(
        embedder: Arc<dyn EmbeddingProvider>,
        reranker: Arc<dyn RerankProvider>,
        store: Arc<CorpusStore>,
        config: RetrievalConfig,
    ) -> Self {
        Self {
            embedder,
            reranker,
            store,
            config,
        }
    }

    /// Find the articles most relevant to `query`, best first.
    ///
    /// A blank query is rejected with [`RetrievalError::InvalidQuery`]
    /// before anything else runs. Returns at most `limit` articles (the
    /// configured default when `None`). Articles without a usable embedding
    /// are excluded from ranking; if none remain, the result is empty and
    /// the rerank boundary is never called.
    pub async fn find_similar_articles(
        &self,
        query: &str,
        limit: Option<usize>,
    ) -> RetrievalResult<Vec<ScoredArticle>> {
        if query.trim().is_empty() {
            return Err(RetrievalError::InvalidQuery(
                "query must be a non-empty string".to_string(),
            ));
        }

        let limit = limit.unwrap_or(self.config.limit);
        let snapshot = self.store.snapshot();

        if snapshot.is_empty() {
            debug!("Corpus is empty, returning no results");
            return Ok(Vec::new());
        }

        let query_embedding = self.embedder.embed(query).await?;

        // Similarity stage, restricted to embedded articles. A dimension
        // mismatch against any cached vector is a hard error: it means the
        // cache holds vectors from a different model.
        let mut candidates: Vec<ScoredArticle> = Vec::new();
        for article in snapshot.iter() {
            let Some(embedding) = article.embedding.as_ref().filter(|v| !v.is_empty()) else {
                continue;
            };
            let score = cosine_similarity(&query_embedding, embedding)?;
            candidates.push(ScoredArticle::from_similarity(article.clone(), score));
        }

        if candidates.is_empty() {
            warn!("No articles with a valid embedding, returning no results");
            return Ok(Vec::new());
        }

        // Stable sort keeps corpus order on ties.
        candidates.sort_by(|a, b| {
            b.similarity
                .partial_cmp(&a.similarity)
                .unwrap_or(Ordering::Equal)
        });
        candidates.truncate(self.config.rerank_pool);

        debug!(
            pool = candidates.len(),
            top_similarity = %candidates[0].scores.embedding_similarity,
            "Reranking candidate pool"
        );

        let documents: Vec<String> = candidates
            .iter()
            .map(|c| c.article.body.clone())
            .collect();

        let top_n = limit.min(documents.len());
        let reranked = self.reranker.rerank(query, &documents, top_n).await?;

        let mut results = Vec::with_capacity(reranked.len());
        for entry in reranked {
            let Some(candidate) = candidates.get(entry.index) else {
                warn!(index = entry.index, "Rerank result index out of range, skipping");
                continue;
            };
            results.push(candidate.clone().with_relevance(entry.relevance_score));
        }
        results.truncate(limit);

        Ok(results)
    }
}
