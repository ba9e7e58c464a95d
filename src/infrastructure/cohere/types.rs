//! Request and response types for the Cohere embed and rerank endpoints.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Request body for `POST /v1/embed`.
#[derive(Debug, Clone, Serialize)]
pub struct EmbedRequest {
    pub texts: Vec<String>,
    pub model: String,
    pub input_type: String,
}

/// Response body for `POST /v1/embed`.
#[derive(Debug, Clone, Deserialize)]
pub struct EmbedResponse {
    pub embeddings: EmbeddingsPayload,
}

/// The `embeddings` field is either a flat list of vectors or, for typed
/// embedding responses, a single-key mapping (e.g. `{"float": [[...]]}`).
/// Anything else fails deserialization and surfaces as a malformed-response
/// error.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum EmbeddingsPayload {
    Flat(Vec<Vec<f32>>),
    Keyed(BTreeMap<String, Vec<Vec<f32>>>),
}

impl EmbeddingsPayload {
    /// The first embedding vector in the payload, if any.
    pub fn into_first_vector(self) -> Option<Vec<f32>> {
        match self {
            EmbeddingsPayload::Flat(mut vectors) => {
                if vectors.is_empty() {
                    None
                } else {
                    Some(vectors.remove(0))
                }
            }
            EmbeddingsPayload::Keyed(map) => map
                .into_values()
                .next()
                .and_then(|mut vectors| {
                    if vectors.is_empty() {
                        None
                    } else {
                        Some(vectors.remove(0))
                    }
                }),
        }
    }
}

/// Request body for `POST /v1/rerank`.
#[derive(Debug, Clone, Serialize)]
pub struct RerankRequest {
    pub query: String,
    pub documents: Vec<String>,
    pub top_n: usize,
    pub model: String,
}

/// Response body for `POST /v1/rerank`.
#[derive(Debug, Clone, Deserialize)]
pub struct RerankResponse {
    pub results: Vec<RerankEntry>,
}

/// One entry of a rerank response, referring back to the request documents
/// by index.
#[derive(Debug, Clone, Deserialize)]
pub struct RerankEntry {
    pub index: usize,
    pub relevance_score: f32,
}
