//! Content source port for corpus ingestion.
//!
//! The ingestion collaborator fetches articles from the upstream knowledge
//! base and rewrites the corpus snapshot on disk. It is the sole authority on
//! whether content changed; the orchestrator only consumes the report.

use async_trait::async_trait;

use crate::domain::errors::RetrievalResult;

/// Outcome of one ingestion run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngestionReport {
    /// True iff the snapshot on disk was rewritten with new content.
    pub changed: bool,
    /// Exit status of the ingestion run (0 on success).
    pub exit_status: i32,
}

/// Trait for pluggable content sources.
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Run the ingestion process to completion.
    ///
    /// A non-zero exit from the underlying process must surface as
    /// [`crate::domain::errors::RetrievalError::IngestionFailure`], never as
    /// a `changed: false` report.
    async fn run(&self) -> RetrievalResult<IngestionReport>;
}
