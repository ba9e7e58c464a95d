use anyhow::{Context, Result};
use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use thiserror::Error;

use crate::domain::models::Config;

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Corpus path cannot be empty")]
    EmptyCorpusPath,

    #[error("Cache path cannot be empty")]
    EmptyCachePath,

    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid retrieval limit: {0}. Must be at least 1")]
    InvalidLimit(usize),

    #[error("Invalid rerank pool: {pool}. Must be at least the retrieval limit ({limit})")]
    InvalidRerankPool { pool: usize, limit: usize },

    #[error("Invalid batch size: {0}. Must be at least 1")]
    InvalidBatchSize(usize),

    #[error("Invalid timeout: {0}. Must be positive")]
    InvalidTimeout(u64),

    #[error("Ingestion command cannot be empty")]
    EmptyIngestionCommand,
}

/// Configuration loader with hierarchical merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with hierarchical merging
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults (Serialized)
    /// 2. oraculum.yaml (project config)
    /// 3. Environment variables (`ORACULUM_*` prefix, highest priority)
    pub fn load() -> Result<Config> {
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file("oraculum.yaml"))
            .merge(Env::prefixed("ORACULUM_").split("__"))
            .extract()
            .context("Failed to extract configuration from figment")?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: impl AsRef<std::path::Path>) -> Result<Config> {
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(path.as_ref()))
            .merge(Env::prefixed("ORACULUM_").split("__"))
            .extract()
            .context(format!(
                "Failed to load config from {}",
                path.as_ref().display()
            ))?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate configuration after loading
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        if config.corpus.path.is_empty() {
            return Err(ConfigError::EmptyCorpusPath);
        }

        if config.cache.path.is_empty() {
            return Err(ConfigError::EmptyCachePath);
        }

        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&config.logging.level.as_str()) {
            return Err(ConfigError::InvalidLogLevel(config.logging.level.clone()));
        }

        if config.retrieval.limit == 0 {
            return Err(ConfigError::InvalidLimit(config.retrieval.limit));
        }

        if config.retrieval.rerank_pool < config.retrieval.limit {
            return Err(ConfigError::InvalidRerankPool {
                pool: config.retrieval.rerank_pool,
                limit: config.retrieval.limit,
            });
        }

        if config.backfill.batch_size == 0 {
            return Err(ConfigError::InvalidBatchSize(config.backfill.batch_size));
        }

        if config.cohere.timeout_secs == 0 {
            return Err(ConfigError::InvalidTimeout(config.cohere.timeout_secs));
        }

        if config.ingestion.command.is_empty() {
            return Err(ConfigError::EmptyIngestionCommand);
        }

        Ok(())
    }
}
