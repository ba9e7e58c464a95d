//! Durable per-article embedding cache.
//!
//! A flat JSON mapping `article_id -> vector`, read wholesale at load and
//! rewritten write-through on every `set` so a crash mid-backfill loses at
//! most the one in-flight embedding. The cache is a pure accelerator: losing
//! the file degrades to full regeneration and never loses article content.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tokio::io::AsyncWriteExt;
use tracing::{info, warn};

use crate::domain::errors::{RetrievalError, RetrievalResult};

/// File-backed mapping from article id to embedding vector.
pub struct VectorCache {
    path: PathBuf,
    entries: HashMap<String, Vec<f32>>,
}

impl VectorCache {
    /// Load the cache from disk.
    ///
    /// A missing or corrupt backing store is not an error: the cache is
    /// initialized empty and an empty durable store is created in its place.
    pub async fn load(path: impl AsRef<Path>) -> RetrievalResult<Self> {
        let path = path.as_ref().to_path_buf();

        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|err| RetrievalError::Cache(err.to_string()))?;
        }

        let entries = match tokio::fs::read(&path).await {
            Ok(bytes) => match serde_json::from_slice::<HashMap<String, Vec<f32>>>(&bytes) {
                Ok(entries) => {
                    info!(entries = entries.len(), path = %path.display(), "Loaded vector cache");
                    entries
                }
                Err(err) => {
                    warn!(
                        path = %path.display(),
                        error = %err,
                        "Vector cache is corrupt, reinitializing empty"
                    );
                    HashMap::new()
                }
            },
            Err(_) => {
                info!(path = %path.display(), "No vector cache found, creating empty store");
                HashMap::new()
            }
        };

        let cache = Self { path, entries };
        if cache.entries.is_empty() {
            cache.persist().await?;
        }
        Ok(cache)
    }

    /// Look up a cached embedding. A miss is a normal, expected state.
    pub fn get(&self, article_id: &str) -> Option<&Vec<f32>> {
        self.entries.get(article_id)
    }

    /// Insert or overwrite an entry, persisting to disk before returning.
    pub async fn set(&mut self, article_id: &str, vector: Vec<f32>) -> RetrievalResult<()> {
        self.entries.insert(article_id.to_string(), vector);
        self.persist().await
    }

    /// Number of cached entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    async fn persist(&self) -> RetrievalResult<()> {
        let data = serde_json::to_vec_pretty(&self.entries)?;

        let mut file = tokio::fs::File::create(&self.path)
            .await
            .map_err(|err| RetrievalError::Cache(err.to_string()))?;
        file.write_all(&data)
            .await
            .map_err(|err| RetrievalError::Cache(err.to_string()))?;
        file.sync_all()
            .await
            .map_err(|err| RetrievalError::Cache(err.to_string()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn missing_store_initializes_empty_and_creates_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("cache").join("embeddings.json");

        let cache = VectorCache::load(&path).await.unwrap();
        assert!(cache.is_empty());
        assert!(path.exists());
    }

    #[tokio::test]
    async fn get_miss_returns_none() {
        let dir = TempDir::new().unwrap();
        let cache = VectorCache::load(dir.path().join("c.json")).await.unwrap();
        assert!(cache.get("unknown").is_none());
    }

    #[tokio::test]
    async fn set_then_reload_round_trips() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("c.json");

        let mut cache = VectorCache::load(&path).await.unwrap();
        cache.set("article-1", vec![0.1, 0.2, 0.3]).await.unwrap();
        drop(cache);

        let reloaded = VectorCache::load(&path).await.unwrap();
        assert_eq!(reloaded.get("article-1"), Some(&vec![0.1, 0.2, 0.3]));
    }

    #[tokio::test]
    async fn corrupt_store_reinitializes_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("c.json");
        tokio::fs::write(&path, b"{not json").await.unwrap();

        let cache = VectorCache::load(&path).await.unwrap();
        assert!(cache.is_empty());
    }

    #[tokio::test]
    async fn set_overwrites_existing_entry() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("c.json");

        let mut cache = VectorCache::load(&path).await.unwrap();
        cache.set("a", vec![1.0]).await.unwrap();
        cache.set("a", vec![2.0]).await.unwrap();

        assert_eq!(cache.get("a"), Some(&vec![2.0]));
        assert_eq!(cache.len(), 1);
    }
}
