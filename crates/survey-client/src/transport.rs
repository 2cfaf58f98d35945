//! The HTTP transport seam
//!
//! The adapter only needs "POST this JSON, give me status + reason"; the
//! trait keeps reqwest at the edge so tests inject a stub.

use crate::error::TransportFailure;
use async_trait::async_trait;
use serde_json::Value;

/// What the adapter consumes from a response. The body is deliberately
/// not carried; the endpoint's response body is never consumed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WireResponse {
    /// HTTP status code
    pub status: u16,
    /// Reason phrase, possibly empty
    pub status_text: String,
}

impl WireResponse {
    /// Any 2xx counts as success
    #[inline]
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// A single JSON POST. No retries at this layer or above.
#[async_trait]
pub trait HttpPost: Send + Sync {
    /// Send `body` to `url`, classifying request failures as connect-level
    /// or send-level.
    async fn post_json(&self, url: &str, body: &Value) -> Result<WireResponse, TransportFailure>;
}

/// reqwest-backed transport.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Transport with a fresh client
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl HttpPost for ReqwestTransport {
    async fn post_json(&self, url: &str, body: &Value) -> Result<WireResponse, TransportFailure> {
        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|err| {
                if err.is_connect() {
                    TransportFailure::Connect(Box::new(err))
                } else {
                    TransportFailure::Send(Box::new(err))
                }
            })?;

        let status = response.status();
        Ok(WireResponse {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or_default().to_string(),
        })
    }
}
