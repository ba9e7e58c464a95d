//! Rerank provider port.
//!
//! Second-pass relevance scoring of a candidate document set against a
//! query. More accurate than embedding similarity, and paid for per call.

use async_trait::async_trait;

use crate::domain::errors::RetrievalResult;

/// One reranked document, referring back to the input by index.
#[derive(Debug, Clone, PartialEq)]
pub struct RerankResult {
    /// Index into the `documents` slice passed to [`RerankProvider::rerank`].
    pub index: usize,
    /// Relevance score in `[0, 1]`.
    pub relevance_score: f32,
}

/// Trait for relevance-reranking providers.
#[async_trait]
pub trait RerankProvider: Send + Sync {
    /// Provider name for diagnostics.
    fn name(&self) -> &'static str;

    /// Score `documents` against `query`, returning the best `top_n` in
    /// descending relevance order.
    async fn rerank(
        &self,
        query: &str,
        documents: &[String],
        top_n: usize,
    ) -> RetrievalResult<Vec<RerankResult>>;
}
