//! Domain models.

pub mod article;
pub mod config;

pub use article::{Article, Confidence, ScoreDetail, ScoredArticle};
pub use config::{
    BackfillConfig, CacheConfig, CohereConfig, Config, CorpusConfig, IngestionConfig,
    LoggingConfig, RetrievalConfig,
};
