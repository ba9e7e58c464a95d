//! Shared test doubles and fixtures.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use tokio::time::Instant;

use async_trait::async_trait;

use oraculum::domain::models::Article;
use oraculum::domain::ports::{
    ContentSource, EmbeddingProvider, IngestionReport, RerankProvider, RerankResult,
};
use oraculum::{RetrievalError, RetrievalResult};

pub fn article(id: &str, body: &str) -> Article {
    Article {
        id: id.to_string(),
        title: format!("Article {id}"),
        body: body.to_string(),
        link: format!("https://kb.example.com/{id}"),
        embedding: None,
    }
}

pub fn embedded_article(id: &str, body: &str, embedding: Vec<f32>) -> Article {
    Article {
        embedding: Some(embedding),
        ..article(id, body)
    }
}

/// Embedding provider returning programmed vectors with a call counter.
///
/// Each call also records a `tokio::time::Instant`, so paused-clock tests
/// can assert the spacing between consecutive calls.
#[derive(Default)]
pub struct MockEmbedder {
    default_vector: Option<Vec<f32>>,
    vectors: HashMap<String, Vec<f32>>,
    failing: HashSet<String>,
    calls: AtomicUsize,
    call_instants: Mutex<Vec<Instant>>,
}

impl MockEmbedder {
    pub fn returning(default_vector: Vec<f32>) -> Self {
        Self {
            default_vector: Some(default_vector),
            ..Self::default()
        }
    }

    pub fn with_vector(mut self, text: &str, vector: Vec<f32>) -> Self {
        self.vectors.insert(text.to_string(), vector);
        self
    }

    pub fn failing_for(mut self, text: &str) -> Self {
        self.failing.insert(text.to_string());
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn call_instants(&self) -> Vec<Instant> {
        self.call_instants.lock().unwrap().clone()
    }
}

#[async_trait]
impl EmbeddingProvider for MockEmbedder {
    fn name(&self) -> &'static str {
        "mock-embedder"
    }

    async fn embed(&self, text: &str) -> RetrievalResult<Vec<f32>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.call_instants.lock().unwrap().push(Instant::now());

        if self.failing.contains(text) {
            return Err(RetrievalError::transient("embedding", "programmed failure"));
        }

        if let Some(vector) = self.vectors.get(text) {
            return Ok(vector.clone());
        }

        self.default_vector
            .clone()
            .ok_or_else(|| RetrievalError::permanent("embedding", "no programmed vector"))
    }
}

/// Rerank provider returning a programmed result list.
#[derive(Default)]
pub struct MockReranker {
    results: Vec<RerankResult>,
    calls: AtomicUsize,
}

impl MockReranker {
    pub fn returning(results: Vec<RerankResult>) -> Self {
        Self {
            results,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RerankProvider for MockReranker {
    fn name(&self) -> &'static str {
        "mock-reranker"
    }

    async fn rerank(
        &self,
        _query: &str,
        _documents: &[String],
        top_n: usize,
    ) -> RetrievalResult<Vec<RerankResult>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.results.iter().take(top_n).cloned().collect())
    }
}

/// Rerank provider that always fails.
pub struct FailingReranker;

#[async_trait]
impl RerankProvider for FailingReranker {
    fn name(&self) -> &'static str {
        "failing-reranker"
    }

    async fn rerank(
        &self,
        _query: &str,
        _documents: &[String],
        _top_n: usize,
    ) -> RetrievalResult<Vec<RerankResult>> {
        Err(RetrievalError::transient("rerank", "programmed failure"))
    }
}

/// Content source with a programmable outcome, latency, and run counter.
pub struct MockContentSource {
    changed: bool,
    delay: Duration,
    fail_status: Option<i32>,
    runs: AtomicUsize,
}

impl MockContentSource {
    pub fn reporting(changed: bool) -> Self {
        Self {
            changed,
            delay: Duration::ZERO,
            fail_status: None,
            runs: AtomicUsize::new(0),
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn failing_with_status(status: i32) -> Self {
        Self {
            changed: false,
            delay: Duration::ZERO,
            fail_status: Some(status),
            runs: AtomicUsize::new(0),
        }
    }

    pub fn runs(&self) -> usize {
        self.runs.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ContentSource for MockContentSource {
    async fn run(&self) -> RetrievalResult<IngestionReport> {
        self.runs.fetch_add(1, Ordering::SeqCst);

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        if let Some(status) = self.fail_status {
            return Err(RetrievalError::IngestionFailure { status });
        }

        Ok(IngestionReport {
            changed: self.changed,
            exit_status: 0,
        })
    }
}
