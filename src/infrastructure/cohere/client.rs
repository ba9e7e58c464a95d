//! HTTP client for the Cohere embed and rerank endpoints.

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client as ReqwestClient;
use tracing::{debug, warn};

use super::error::CohereApiError;
use super::types::{EmbedRequest, EmbedResponse, RerankRequest, RerankResponse};
use crate::domain::errors::{RetrievalError, RetrievalResult};
use crate::domain::models::CohereConfig;
use crate::domain::ports::{EmbeddingProvider, RerankProvider, RerankResult};

/// HTTP client for the Cohere API.
///
/// One client instance serves both the embed and rerank boundaries. Requests
/// share a pooled connection and are bounded by the configured timeout;
/// timeout expiry is classified as a transient upstream failure.
pub struct CohereClient {
    http_client: ReqwestClient,
    config: CohereConfig,
}

impl CohereClient {
    pub fn new(config: CohereConfig) -> Result<Self> {
        let http_client = ReqwestClient::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .pool_max_idle_per_host(10)
            .tcp_nodelay(true)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http_client,
            config,
        })
    }

    async fn send_embed(&self, request: &EmbedRequest) -> Result<EmbedResponse, CohereApiError> {
        let response = self
            .http_client
            .post(format!("{}/v1/embed", self.config.base_url))
            .bearer_auth(&self.config.api_key)
            .json(request)
            .send()
            .await
            .map_err(classify_send_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error response".to_string());
            return Err(CohereApiError::from_status(status, body));
        }

        let body = response.text().await.map_err(classify_send_error)?;
        serde_json::from_str(&body)
            .map_err(|err| CohereApiError::MalformedResponse(err.to_string()))
    }

    async fn send_rerank(
        &self,
        request: &RerankRequest,
    ) -> Result<RerankResponse, CohereApiError> {
        let response = self
            .http_client
            .post(format!("{}/v1/rerank", self.config.base_url))
            .bearer_auth(&self.config.api_key)
            .json(request)
            .send()
            .await
            .map_err(classify_send_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error response".to_string());
            return Err(CohereApiError::from_status(status, body));
        }

        let body = response.text().await.map_err(classify_send_error)?;
        serde_json::from_str(&body)
            .map_err(|err| CohereApiError::MalformedResponse(err.to_string()))
    }
}

/// Map a reqwest send failure, distinguishing timeouts from other I/O errors.
fn classify_send_error(err: reqwest::Error) -> CohereApiError {
    if err.is_timeout() {
        CohereApiError::Timeout
    } else {
        CohereApiError::NetworkError(err)
    }
}

fn into_retrieval_error(service: &'static str, err: CohereApiError) -> RetrievalError {
    if err.is_transient() {
        RetrievalError::transient(service, err.to_string())
    } else {
        RetrievalError::permanent(service, err.to_string())
    }
}

#[async_trait]
impl EmbeddingProvider for CohereClient {
    fn name(&self) -> &'static str {
        "cohere"
    }

    async fn embed(&self, text: &str) -> RetrievalResult<Vec<f32>> {
        let request = EmbedRequest {
            texts: vec![text.to_string()],
            model: self.config.embed_model.clone(),
            input_type: "search_query".to_string(),
        };

        debug!(model = %request.model, "Requesting embedding");

        let response = self
            .send_embed(&request)
            .await
            .map_err(|err| {
                warn!(error = %err, "Embedding request failed");
                into_retrieval_error("embedding", err)
            })?;

        response
            .embeddings
            .into_first_vector()
            .ok_or_else(|| {
                RetrievalError::permanent("embedding", "API returned no embedding vectors")
            })
    }
}

#[async_trait]
impl RerankProvider for CohereClient {
    fn name(&self) -> &'static str {
        "cohere"
    }

    async fn rerank(
        &self,
        query: &str,
        documents: &[String],
        top_n: usize,
    ) -> RetrievalResult<Vec<RerankResult>> {
        let request = RerankRequest {
            query: query.to_string(),
            documents: documents.to_vec(),
            top_n,
            model: self.config.rerank_model.clone(),
        };

        debug!(
            model = %request.model,
            documents = documents.len(),
            top_n,
            "Requesting rerank"
        );

        let response = self
            .send_rerank(&request)
            .await
            .map_err(|err| {
                warn!(error = %err, "Rerank request failed");
                into_retrieval_error("rerank", err)
            })?;

        Ok(response
            .results
            .into_iter()
            .map(|entry| RerankResult {
                index: entry.index,
                relevance_score: entry.relevance_score,
            })
            .collect())
    }
}
