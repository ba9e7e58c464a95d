//! Inbound request/response contract.
//!
//! Transport-agnostic payloads consumed by the UI collaborator. The web
//! layer itself (routing, CORS, inbound rate limiting) lives outside this
//! crate; these handlers only validate input, run the pipeline, and shape
//! the response envelope.

use serde::{Deserialize, Serialize};
use tracing::error;

use crate::application::AppContext;
use crate::domain::errors::RetrievalError;
use crate::domain::models::ScoredArticle;

/// Inbound search request.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchRequest {
    pub query: String,
}

/// Search response envelope.
#[derive(Debug, Clone, Serialize)]
pub struct SearchResponse {
    pub success: bool,
    /// HTTP-equivalent status for the transport layer to map.
    pub status: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<ScoredArticle>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SearchResponse {
    fn ok(data: Vec<ScoredArticle>) -> Self {
        Self {
            success: true,
            status: 200,
            data: Some(data),
            error: None,
        }
    }

    fn err(status: u16, message: impl Into<String>) -> Self {
        Self {
            success: false,
            status,
            data: None,
            error: Some(message.into()),
        }
    }
}

/// Sync response envelope.
#[derive(Debug, Clone, Serialize)]
pub struct SyncResponse {
    pub success: bool,
    pub status: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// RFC 3339 time of the last completed sync in this process.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub synced_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Handle a search request against the retrieval pipeline.
///
/// Input validation lives in the pipeline itself; this handler only maps
/// domain errors onto the response envelope. Client errors carry the domain
/// message, server errors are masked.
pub async fn search(ctx: &AppContext, request: SearchRequest) -> SearchResponse {
    match ctx
        .retrieval
        .find_similar_articles(&request.query, None)
        .await
    {
        Ok(articles) => SearchResponse::ok(articles),
        Err(err) => {
            let status = status_for(&err);
            if status == 400 {
                return SearchResponse::err(status, err.to_string());
            }
            error!(error = %err, "Search request failed");
            SearchResponse::err(status, "Internal error processing your request")
        }
    }
}

/// Handle a sync trigger request.
pub async fn sync(ctx: &AppContext) -> SyncResponse {
    match ctx.sync.sync_articles().await {
        Ok(changed) => SyncResponse {
            success: true,
            status: 200,
            message: Some(
                if changed {
                    "updated"
                } else {
                    "no updates needed"
                }
                .to_string(),
            ),
            synced_at: ctx.sync.last_synced_at().map(|t| t.to_rfc3339()),
            error: None,
        },
        Err(err) => {
            error!(error = %err, "Sync request failed");
            SyncResponse {
                success: false,
                status: 500,
                message: None,
                synced_at: None,
                error: Some(err.to_string()),
            }
        }
    }
}

fn status_for(err: &RetrievalError) -> u16 {
    match err {
        RetrievalError::InvalidQuery(_) => 400,
        RetrievalError::UpstreamService { .. } => 502,
        _ => 500,
    }
}
