//! Ports (trait seams) between the domain and external collaborators.

pub mod content_source;
pub mod embedding;
pub mod rerank;

pub use content_source::{ContentSource, IngestionReport};
pub use embedding::EmbeddingProvider;
pub use rerank::{RerankProvider, RerankResult};
