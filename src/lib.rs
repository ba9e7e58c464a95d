//! Oraculum - knowledge-base article retrieval
//!
//! Answers free-text questions by retrieving the most relevant articles from
//! a periodically-refreshed corpus: a durable per-article embedding cache, a
//! cosine-similarity ranking stage, second-pass relevance reranking, and a
//! single-flight sync orchestrator around the external ingestion process.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain`): models, ports, errors, and pure similarity logic
//! - **Service Layer** (`services`): retrieval pipeline, embedding backfill, sync orchestration
//! - **Infrastructure Layer** (`infrastructure`): Cohere client, vector cache, corpus store, ingestion process, config
//! - **Application Layer** (`application`): explicit context wiring
//! - **API** (`api`): inbound request/response contract for the UI collaborator
//! - **CLI Layer** (`cli`): command-line interface

pub mod api;
pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use application::AppContext;
pub use domain::models::{Article, Confidence, Config, ScoredArticle};
pub use domain::ports::{
    ContentSource, EmbeddingProvider, IngestionReport, RerankProvider, RerankResult,
};
pub use domain::{RetrievalError, RetrievalResult};
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use services::{BackfillReport, BackfillService, BatchPolicy, RetrievalService, SyncOutcome, SyncService};
