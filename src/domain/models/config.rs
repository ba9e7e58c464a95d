use serde::{Deserialize, Serialize};

/// Main configuration structure for Oraculum.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Config {
    /// Corpus snapshot configuration
    #[serde(default)]
    pub corpus: CorpusConfig,

    /// Vector cache configuration
    #[serde(default)]
    pub cache: CacheConfig,

    /// Cohere API configuration
    #[serde(default)]
    pub cohere: CohereConfig,

    /// Retrieval pipeline configuration
    #[serde(default)]
    pub retrieval: RetrievalConfig,

    /// Embedding backfill configuration
    #[serde(default)]
    pub backfill: BackfillConfig,

    /// Ingestion process configuration
    #[serde(default)]
    pub ingestion: IngestionConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            corpus: CorpusConfig::default(),
            cache: CacheConfig::default(),
            cohere: CohereConfig::default(),
            retrieval: RetrievalConfig::default(),
            backfill: BackfillConfig::default(),
            ingestion: IngestionConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Corpus snapshot configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct CorpusConfig {
    /// Path to the article snapshot written by the ingestion collaborator
    #[serde(default = "default_corpus_path")]
    pub path: String,
}

fn default_corpus_path() -> String {
    "data/articles.json".to_string()
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            path: default_corpus_path(),
        }
    }
}

/// Vector cache configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct CacheConfig {
    /// Path to the durable embedding cache file
    #[serde(default = "default_cache_path")]
    pub path: String,
}

fn default_cache_path() -> String {
    "cache/articles_embeddings.json".to_string()
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            path: default_cache_path(),
        }
    }
}

/// Cohere API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct CohereConfig {
    /// API key; typically provided via `ORACULUM_COHERE__API_KEY`
    #[serde(default)]
    pub api_key: String,

    /// Base URL for the Cohere API
    #[serde(default = "default_cohere_base_url")]
    pub base_url: String,

    /// Embedding model identifier
    #[serde(default = "default_embed_model")]
    pub embed_model: String,

    /// Rerank model identifier
    #[serde(default = "default_rerank_model")]
    pub rerank_model: String,

    /// Request timeout in seconds for embed and rerank calls
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_cohere_base_url() -> String {
    "https://api.cohere.com".to_string()
}

fn default_embed_model() -> String {
    "embed-multilingual-v3.0".to_string()
}

fn default_rerank_model() -> String {
    "rerank-v3.5".to_string()
}

const fn default_timeout_secs() -> u64 {
    30
}

impl Default for CohereConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: default_cohere_base_url(),
            embed_model: default_embed_model(),
            rerank_model: default_rerank_model(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Retrieval pipeline configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct RetrievalConfig {
    /// Default number of articles returned per query
    #[serde(default = "default_limit")]
    pub limit: usize,

    /// Candidate pool size handed to the reranker
    #[serde(default = "default_rerank_pool")]
    pub rerank_pool: usize,
}

const fn default_limit() -> usize {
    5
}

const fn default_rerank_pool() -> usize {
    20
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            limit: default_limit(),
            rerank_pool: default_rerank_pool(),
        }
    }
}

/// Embedding backfill configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct BackfillConfig {
    /// Articles per batch
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,

    /// Delay after each embedding call, in milliseconds
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,
}

const fn default_batch_size() -> usize {
    10
}

const fn default_delay_ms() -> u64 {
    1100
}

impl Default for BackfillConfig {
    fn default() -> Self {
        Self {
            batch_size: default_batch_size(),
            delay_ms: default_delay_ms(),
        }
    }
}

/// Ingestion process configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct IngestionConfig {
    /// Command to invoke the external content fetcher
    #[serde(default = "default_ingestion_command")]
    pub command: String,

    /// Arguments passed to the command
    #[serde(default)]
    pub args: Vec<String>,
}

fn default_ingestion_command() -> String {
    "python3".to_string()
}

impl Default for IngestionConfig {
    fn default() -> Self {
        Self {
            command: default_ingestion_command(),
            args: vec!["zendesk-sync/get-articles.py".to_string()],
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}
