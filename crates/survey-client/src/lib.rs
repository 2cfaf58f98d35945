//! Survey Client - network boundary of the day-movements survey
//!
//! - `ClientConfig` resolves the submission base URL once at startup
//! - `SubmissionPayload` maps validated answers to the wire shape,
//!   re-applying chaining defensively
//! - `SubmissionClient` issues the single POST over an injectable
//!   `HttpPost` transport and translates failures into typed errors
//! - `AddressLookup` debounces and cancels suggestion queries against the
//!   external provider's interface

#![warn(unreachable_pub)]

pub mod config;
pub mod error;
pub mod payload;
pub mod submit;
pub mod suggest;
pub mod transport;

pub use config::{ClientConfig, ConfigError, BASE_URL_ENV, DEV_BASE_URL, SUBMIT_PATH};
pub use error::{HttpErrorKind, SubmitError, TransportFailure};
pub use payload::{MovementPayload, SubmissionPayload};
pub use submit::SubmissionClient;
pub use suggest::{AddressLookup, QuerySlot, SuggestError, SuggestionProvider, MIN_QUERY_CHARS, SUGGESTION_DELAY};
pub use transport::{HttpPost, ReqwestTransport, WireResponse};
