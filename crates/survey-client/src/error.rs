//! Submission error taxonomy
//!
//! Two distinguishable failure kinds come out of the adapter:
//! - transport failure: the request never produced a response
//! - HTTP failure: a non-2xx response, carrying status and reason
//!
//! Both are thrown (returned) by the adapter and caught at the top-level
//! submit handler, which shows one user-facing message and leaves the form
//! editable for resubmission.

type Source = Box<dyn std::error::Error + Send + Sync>;

/// The request never reached a response.
#[derive(Debug, thiserror::Error)]
pub enum TransportFailure {
    /// Connection could not be established (refused, DNS, TLS)
    #[error("could not connect to the server")]
    Connect(#[source] Source),
    /// Connection worked but the request could not be completed
    #[error("network error while sending the request")]
    Send(#[source] Source),
}

/// Status-code classification for non-2xx responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpErrorKind {
    /// 400: the server rejected the form data
    BadRequest,
    /// 404: endpoint unavailable
    NotFound,
    /// 5xx: internal server error
    ServerError,
    /// Any other non-2xx status
    Other,
}

impl HttpErrorKind {
    /// Classify a non-2xx status code
    #[must_use]
    pub fn from_status(status: u16) -> Self {
        match status {
            400 => Self::BadRequest,
            404 => Self::NotFound,
            500.. => Self::ServerError,
            _ => Self::Other,
        }
    }
}

/// Failure of a single submission attempt.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    /// Transport-level failure
    #[error(transparent)]
    Network(#[from] TransportFailure),
    /// Non-2xx response
    #[error("server error: {status} {status_text}")]
    Http {
        /// HTTP status code
        status: u16,
        /// Reason phrase, possibly empty
        status_text: String,
        /// Status classification
        kind: HttpErrorKind,
    },
    /// The payload failed to serialize (should not happen for valid answers)
    #[error("failed to encode the submission payload")]
    Encode(#[from] serde_json::Error),
}

impl SubmitError {
    /// One user-facing message per failure, status-aware for HTTP errors.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Network(TransportFailure::Connect(_)) => {
                "Could not connect to the server. Check that it is running.".to_string()
            }
            Self::Network(TransportFailure::Send(_)) => {
                "Network error while contacting the server.".to_string()
            }
            Self::Http { kind: HttpErrorKind::BadRequest, .. } => {
                "The server rejected the form data.".to_string()
            }
            Self::Http { kind: HttpErrorKind::NotFound, .. } => {
                "The server or endpoint is unavailable.".to_string()
            }
            Self::Http { kind: HttpErrorKind::ServerError, .. } => {
                "Internal server error. Try again later.".to_string()
            }
            Self::Http { status, status_text, .. } => {
                format!("Server error: {status} {status_text}")
            }
            Self::Encode(_) => "The form data could not be encoded.".to_string(),
        }
    }

    /// The HTTP status, when this is an HTTP failure
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}
