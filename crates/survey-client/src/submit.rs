//! The submission adapter
//!
//! One POST, no retries, all-or-nothing. Validation happens before this
//! layer (see `survey-rules::ensure_valid`); clearing the movements draft
//! after success is the caller's job.

use crate::config::ClientConfig;
use crate::error::{HttpErrorKind, SubmitError};
use crate::payload::SubmissionPayload;
use crate::transport::{HttpPost, ReqwestTransport, WireResponse};
use survey_model::form::FormAnswers;
use tracing::{debug, info};

/// Submits validated answers to the movements endpoint.
#[derive(Debug)]
pub struct SubmissionClient<T: HttpPost = ReqwestTransport> {
    config: ClientConfig,
    transport: T,
}

impl SubmissionClient<ReqwestTransport> {
    /// Client over the real HTTP transport
    #[must_use]
    pub fn new(config: ClientConfig) -> Self {
        Self::with_transport(config, ReqwestTransport::new())
    }
}

impl<T: HttpPost> SubmissionClient<T> {
    /// Client over an injected transport (tests use a stub)
    #[must_use]
    pub fn with_transport(config: ClientConfig, transport: T) -> Self {
        Self { config, transport }
    }

    /// The resolved configuration
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Send the answers. Success is any 2xx; the raw response is returned
    /// and its body is not consumed.
    pub async fn submit(&self, answers: &FormAnswers) -> Result<WireResponse, SubmitError> {
        let payload = SubmissionPayload::from_answers(answers);
        let body = serde_json::to_value(&payload)?;
        let url = self.config.submit_url();

        debug!(%url, legs = payload.movements.len(), "submitting day movements form");
        let response = self.transport.post_json(&url, &body).await?;

        if !response.is_success() {
            return Err(SubmitError::Http {
                kind: HttpErrorKind::from_status(response.status),
                status: response.status,
                status_text: response.status_text.clone(),
            });
        }

        info!(status = response.status, "day movements form submitted");
        Ok(response)
    }
}
