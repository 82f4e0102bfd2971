use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::BackendConfig;

/// Stable user-facing message for network-class failures. Raw transport error
/// text never reaches the user.
pub const UNREACHABLE_MESSAGE: &str =
    "Unable to connect to the search service. Please check your connection and try again.";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BackendError {
    #[error("Failed to initialize the search client: {0}")]
    Init(String),

    #[error("{UNREACHABLE_MESSAGE}")]
    Unreachable,

    #[error("Failed to search: {code} {reason}")]
    Status { code: u16, reason: String },

    #[error("Received an invalid response from the search service.")]
    Malformed,
}

/// The single outbound seam of the pipeline: one search payload in, one JSON
/// value out. Implemented over HTTP in production and by in-process fakes in
/// controller tests.
#[async_trait]
pub trait SearchBackend: Send + Sync + 'static {
    async fn search(&self, payload: Value) -> Result<Value, BackendError>;
}

/// reqwest-backed implementation posting to `{base_url}/search`.
pub struct HttpBackend {
    client: reqwest::Client,
    search_url: String,
}

impl HttpBackend {
    pub fn new(config: &BackendConfig) -> Result<Self, BackendError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| {
                warn!(error = %e, "failed to build HTTP client");
                BackendError::Init(e.to_string())
            })?;

        Ok(Self {
            client,
            search_url: config.search_url(),
        })
    }
}

#[async_trait]
impl SearchBackend for HttpBackend {
    async fn search(&self, payload: Value) -> Result<Value, BackendError> {
        debug!(url = %self.search_url, "submitting search request");

        let response = self
            .client
            .post(&self.search_url)
            .header("Content-Type", "application/json")
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "search request failed at transport level");
                BackendError::Unreachable
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "search service returned an error status");
            return Err(BackendError::Status {
                code: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("").to_string(),
            });
        }

        let body = response.text().await.map_err(|e| {
            warn!(error = %e, "failed to read search response body");
            BackendError::Unreachable
        })?;

        serde_json::from_str(&body).map_err(|e| {
            warn!(error = %e, "search response was not valid JSON");
            BackendError::Malformed
        })
    }
}
