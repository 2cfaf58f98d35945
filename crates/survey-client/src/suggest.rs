//! Debounced, cancellable address suggestion lookup
//!
//! The remote provider is an external collaborator, specified here only by
//! its interface. What is in scope is the query discipline: each keystroke
//! query is debounced, a new query invalidates any in-flight one, and a
//! stale response is discarded even if it arrives after a newer query has
//! started. Provider errors are logged and degrade to "no suggestions".

use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use survey_model::address::AddressSuggestion;
use tracing::error;

/// Debounce applied to keystroke-driven queries
pub const SUGGESTION_DELAY: Duration = Duration::from_millis(1000);
/// Queries shorter than this never reach the provider
pub const MIN_QUERY_CHARS: usize = 3;

/// Provider-side failure; never surfaced to the user as a hard error.
#[derive(Debug, thiserror::Error)]
#[error("suggestion provider failed")]
pub struct SuggestError(#[source] pub Box<dyn std::error::Error + Send + Sync>);

/// The external suggestion provider's interface.
#[async_trait]
pub trait SuggestionProvider: Send + Sync {
    /// Fetch suggestions for a trimmed query
    async fn suggest(&self, query: &str) -> Result<Vec<AddressSuggestion>, SuggestError>;
}

/// One monotonically increasing counter per input slot; a response is
/// accepted only if its ticket is still the latest.
#[derive(Debug, Default)]
pub struct QuerySlot {
    generation: AtomicU64,
}

impl QuerySlot {
    /// Fresh slot
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new query, invalidating every earlier ticket
    pub fn begin(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Whether a ticket is still the latest
    #[must_use]
    pub fn is_current(&self, ticket: u64) -> bool {
        self.generation.load(Ordering::SeqCst) == ticket
    }
}

/// Debounced lookup over one input slot.
pub struct AddressLookup<P> {
    provider: P,
    slot: QuerySlot,
    min_chars: usize,
    delay: Duration,
}

impl<P: SuggestionProvider> AddressLookup<P> {
    /// Lookup with the standard delay and minimum query length
    #[must_use]
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            slot: QuerySlot::new(),
            min_chars: MIN_QUERY_CHARS,
            delay: SUGGESTION_DELAY,
        }
    }

    /// Override the minimum query length
    #[must_use]
    pub fn with_min_chars(mut self, min_chars: usize) -> Self {
        self.min_chars = min_chars;
        self
    }

    /// Override the debounce delay (tests use a short one)
    #[must_use]
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Run one keystroke-driven query.
    ///
    /// Starting a lookup cancels any in-flight one for this slot; results
    /// belonging to a superseded query come back empty. Provider failures
    /// are logged and also come back empty.
    pub async fn lookup(&self, query: &str) -> Vec<AddressSuggestion> {
        let ticket = self.slot.begin();

        let trimmed = query.trim();
        if trimmed.chars().count() < self.min_chars {
            return Vec::new();
        }

        tokio::time::sleep(self.delay).await;
        if !self.slot.is_current(ticket) {
            return Vec::new();
        }

        match self.provider.suggest(trimmed).await {
            Ok(suggestions) if self.slot.is_current(ticket) => suggestions,
            Ok(_) => Vec::new(),
            Err(err) => {
                error!(%err, "address suggestion lookup failed");
                Vec::new()
            }
        }
    }
}
