//! In-memory corpus of articles behind an atomically swappable snapshot.
//!
//! Readers clone an `Arc` to the current snapshot and never observe a
//! half-replaced corpus; a sync that reloads the snapshot swaps the whole
//! reference at once.

use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use chrono::{DateTime, Utc};
use tracing::info;

use crate::domain::errors::{RetrievalError, RetrievalResult};
use crate::domain::models::Article;

/// Wholesale-replaceable article store.
pub struct CorpusStore {
    path: PathBuf,
    snapshot: RwLock<Arc<Vec<Article>>>,
}

impl CorpusStore {
    /// Create a store bound to a snapshot file, initially empty.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            snapshot: RwLock::new(Arc::new(Vec::new())),
        }
    }

    /// Read the snapshot file and replace the in-memory corpus with it.
    pub async fn reload(&self) -> RetrievalResult<usize> {
        let bytes = tokio::fs::read(&self.path).await.map_err(|err| {
            RetrievalError::CorpusLoad(format!("{}: {}", self.path.display(), err))
        })?;

        let articles: Vec<Article> = serde_json::from_slice(&bytes).map_err(|err| {
            RetrievalError::CorpusLoad(format!("{}: {}", self.path.display(), err))
        })?;

        let count = articles.len();
        info!(articles = count, path = %self.path.display(), "Loaded corpus snapshot");
        self.replace(articles);
        Ok(count)
    }

    /// Atomically swap in a new set of articles.
    ///
    /// The previous snapshot stays alive for any query still holding it.
    pub fn replace(&self, articles: Vec<Article>) {
        let mut guard = self.snapshot.write().unwrap_or_else(|e| e.into_inner());
        *guard = Arc::new(articles);
    }

    /// A consistent view of the current corpus.
    pub fn snapshot(&self) -> Arc<Vec<Article>> {
        self.snapshot
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// Modification time of the snapshot file.
    ///
    /// The ingestion collaborator rewrites the snapshot on every sync, so
    /// the file mtime doubles as a durable last-sync marker. `None` when the
    /// snapshot does not exist yet.
    pub async fn last_modified(&self) -> Option<DateTime<Utc>> {
        let metadata = tokio::fs::metadata(&self.path).await.ok()?;
        let modified = metadata.modified().ok()?;
        Some(DateTime::<Utc>::from(modified))
    }

    /// Number of articles in the current snapshot.
    pub fn len(&self) -> usize {
        self.snapshot().len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshot().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn article(id: &str) -> Article {
        Article {
            id: id.to_string(),
            title: format!("title {id}"),
            body: format!("body {id}"),
            link: format!("https://kb.example.com/{id}"),
            embedding: None,
        }
    }

    #[tokio::test]
    async fn reload_reads_snapshot_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("articles.json");
        let articles = vec![article("1"), article("2")];
        tokio::fs::write(&path, serde_json::to_vec(&articles).unwrap())
            .await
            .unwrap();

        let store = CorpusStore::new(&path);
        let count = store.reload().await.unwrap();
        assert_eq!(count, 2);
        assert_eq!(store.snapshot()[0].id, "1");
    }

    #[tokio::test]
    async fn reload_missing_file_is_corpus_load_error() {
        let dir = TempDir::new().unwrap();
        let store = CorpusStore::new(dir.path().join("absent.json"));
        let err = store.reload().await.unwrap_err();
        assert!(matches!(err, RetrievalError::CorpusLoad(_)));
    }

    #[tokio::test]
    async fn last_modified_tracks_the_snapshot_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("articles.json");

        let store = CorpusStore::new(&path);
        assert!(store.last_modified().await.is_none());

        tokio::fs::write(&path, serde_json::to_vec(&vec![article("1")]).unwrap())
            .await
            .unwrap();

        let modified = store.last_modified().await.expect("snapshot exists");
        let age = Utc::now().signed_duration_since(modified);
        assert!(age.num_seconds().abs() < 60);
    }

    #[test]
    fn replace_swaps_wholesale_and_old_snapshot_survives() {
        let store = CorpusStore::new("unused.json");
        store.replace(vec![article("1")]);

        let old = store.snapshot();
        store.replace(vec![article("2"), article("3")]);

        // Reader holding the old snapshot still sees a consistent view.
        assert_eq!(old.len(), 1);
        assert_eq!(old[0].id, "1");
        assert_eq!(store.len(), 2);
    }
}
