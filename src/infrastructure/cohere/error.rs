use thiserror::Error;

/// Errors that can occur when interacting with the Cohere API.
#[derive(Error, Debug)]
pub enum CohereApiError {
    /// Invalid request parameters or malformed request
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Authentication failed due to invalid or missing API key
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    /// Rate limit exceeded, retry after waiting
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// API server encountered an internal error
    #[error("API server error: {0}")]
    ServerError(String),

    /// The response body did not match any shape the API is known to return
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// Network error occurred during request
    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    /// Request timed out waiting for response
    #[error("Timeout waiting for response")]
    Timeout,

    /// Unknown error occurred
    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl CohereApiError {
    /// Returns true if a later attempt may succeed (429, 5xx, timeouts).
    pub fn is_transient(&self) -> bool {
        match self {
            CohereApiError::RateLimitExceeded
            | CohereApiError::ServerError(_)
            | CohereApiError::Timeout => true,
            CohereApiError::NetworkError(err) => err.is_timeout() || err.is_connect(),
            _ => false,
        }
    }

    /// Create an error from an HTTP status code and response body.
    pub fn from_status(status: reqwest::StatusCode, body: String) -> Self {
        match status.as_u16() {
            400 | 422 => CohereApiError::InvalidRequest(body),
            401 | 403 => CohereApiError::AuthenticationFailed(body),
            429 => CohereApiError::RateLimitExceeded,
            500..=599 => CohereApiError::ServerError(body),
            _ => CohereApiError::Unknown(format!("HTTP {status}: {body}")),
        }
    }
}
