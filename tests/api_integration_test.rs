//! End-to-end tests: context wiring, backfill on startup, and the inbound
//! request/response contract.

mod common;

use std::sync::Arc;

use common::{article, MockContentSource, MockEmbedder, MockReranker};
use oraculum::api::{self, SearchRequest};
use oraculum::domain::ports::RerankResult;
use oraculum::{AppContext, Config};
use tempfile::TempDir;

async fn wired_context(dir: &TempDir, embedder: Arc<MockEmbedder>) -> AppContext {
    let corpus_path = dir.path().join("articles.json");
    let articles = vec![
        article("1", "resetting a password"),
        article("2", "cancelling a subscription"),
    ];
    tokio::fs::write(&corpus_path, serde_json::to_vec(&articles).unwrap())
        .await
        .unwrap();

    let mut config = Config::default();
    config.corpus.path = corpus_path.display().to_string();
    config.cache.path = dir.path().join("cache.json").display().to_string();
    config.backfill.delay_ms = 1;

    let reranker = Arc::new(MockReranker::returning(vec![
        RerankResult {
            index: 0,
            relevance_score: 0.7,
        },
        RerankResult {
            index: 1,
            relevance_score: 0.5,
        },
    ]));
    let source = Arc::new(MockContentSource::reporting(false));

    AppContext::wire(config, embedder, reranker, source)
        .await
        .unwrap()
}

#[tokio::test]
async fn context_backfills_before_first_query() {
    let dir = TempDir::new().unwrap();
    let embedder = Arc::new(MockEmbedder::returning(vec![1.0, 0.0]));
    let ctx = wired_context(&dir, embedder.clone()).await;

    // Both articles were embedded during initialization.
    assert_eq!(embedder.calls(), 2);
    assert!(ctx
        .store
        .snapshot()
        .iter()
        .all(oraculum::Article::has_embedding));
    assert_eq!(ctx.cache.lock().await.len(), 2);
}

#[tokio::test]
async fn search_returns_success_envelope_with_scores() {
    let dir = TempDir::new().unwrap();
    let embedder = Arc::new(MockEmbedder::returning(vec![1.0, 0.0]));
    let ctx = wired_context(&dir, embedder).await;

    let response = api::search(
        &ctx,
        SearchRequest {
            query: "how do I reset my password?".to_string(),
        },
    )
    .await;

    assert!(response.success);
    assert_eq!(response.status, 200);
    let data = response.data.unwrap();
    assert_eq!(data.len(), 2);
    assert!(data[0].scores.relevance_score.is_some());
    assert!(data[0].scores.confidence.is_some());
}

#[tokio::test]
async fn blank_query_is_a_client_error() {
    let dir = TempDir::new().unwrap();
    let embedder = Arc::new(MockEmbedder::returning(vec![1.0, 0.0]));
    let ctx = wired_context(&dir, embedder).await;

    let response = api::search(
        &ctx,
        SearchRequest {
            query: "   ".to_string(),
        },
    )
    .await;

    assert!(!response.success);
    assert_eq!(response.status, 400);
    assert!(response.data.is_none());
    // The domain validation message reaches the client.
    assert!(response.error.unwrap().contains("non-empty"));
}

#[tokio::test]
async fn sync_with_no_changes_reports_no_updates_needed() {
    let dir = TempDir::new().unwrap();
    let embedder = Arc::new(MockEmbedder::returning(vec![1.0, 0.0]));
    let ctx = wired_context(&dir, embedder).await;

    let response = api::sync(&ctx).await;

    assert!(response.success);
    assert_eq!(response.message.as_deref(), Some("no updates needed"));
    assert!(response.synced_at.is_some(), "completed sync carries a timestamp");
}
