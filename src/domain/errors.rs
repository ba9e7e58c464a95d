//! Domain errors for the retrieval system.

use thiserror::Error;

/// Domain-level errors that can occur while serving retrieval requests.
#[derive(Debug, Error)]
pub enum RetrievalError {
    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    #[error("{service} call failed: {message}")]
    UpstreamService {
        service: &'static str,
        message: String,
        /// Whether a later attempt may succeed (timeouts, 429s, 5xx).
        transient: bool,
    },

    #[error("Embedding dimensions do not match: {expected} vs {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Ingestion process exited with status {status}")]
    IngestionFailure { status: i32 },

    #[error("Failed to load corpus snapshot: {0}")]
    CorpusLoad(String),

    #[error("Vector cache error: {0}")]
    Cache(String),
}

impl RetrievalError {
    /// Shorthand for an upstream failure that is worth retrying later.
    pub fn transient(service: &'static str, message: impl Into<String>) -> Self {
        Self::UpstreamService {
            service,
            message: message.into(),
            transient: true,
        }
    }

    /// Shorthand for an upstream failure that will not go away on its own.
    pub fn permanent(service: &'static str, message: impl Into<String>) -> Self {
        Self::UpstreamService {
            service,
            message: message.into(),
            transient: false,
        }
    }
}

pub type RetrievalResult<T> = Result<T, RetrievalError>;

impl From<serde_json::Error> for RetrievalError {
    fn from(err: serde_json::Error) -> Self {
        RetrievalError::Cache(err.to_string())
    }
}
