//! Cohere API integration (embed + rerank).

pub mod client;
pub mod error;
pub mod types;

pub use client::CohereClient;
pub use error::CohereApiError;
