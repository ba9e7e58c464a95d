//! Embedding provider port.
//!
//! Converts text into a dense vector via an external model. Implementations
//! are pure request/response and hold no corpus state.

use async_trait::async_trait;

use crate::domain::errors::RetrievalResult;

/// Trait for text-embedding providers.
#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    /// Provider name for diagnostics (e.g. "cohere").
    fn name(&self) -> &'static str;

    /// Generate an embedding for a single text.
    async fn embed(&self, text: &str) -> RetrievalResult<Vec<f32>>;
}
