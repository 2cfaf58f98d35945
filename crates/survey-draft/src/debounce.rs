//! Debounced auto-save
//!
//! Saving on every keystroke would hammer the slot, so edits are collapsed:
//! each trigger bumps a generation counter and schedules a deferred run;
//! the run fires only if its ticket is still current, so at most one
//! logical save lands per burst.

use crate::store::DraftStore;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use survey_model::form::FormAnswers;

/// Delay after the last observed change before a save fires
pub const AUTO_SAVE_DELAY: Duration = Duration::from_millis(800);

/// Trailing-edge debouncer over a generation counter.
#[derive(Debug, Clone, Default)]
pub struct Debouncer {
    generation: Arc<AtomicU64>,
}

impl Debouncer {
    /// Fresh debouncer
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `action` after `delay`, cancelling any pending trigger.
    ///
    /// Must be called from within a tokio runtime.
    pub fn trigger<F>(&self, delay: Duration, action: F)
    where
        F: FnOnce() + Send + 'static,
    {
        let generation = Arc::clone(&self.generation);
        let ticket = generation.fetch_add(1, Ordering::SeqCst) + 1;
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if generation.load(Ordering::SeqCst) == ticket {
                action();
            }
        });
    }

    /// Cancel whatever is pending without scheduling anything new
    pub fn cancel(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }
}

/// Debounced draft saving bound to a store.
#[derive(Clone)]
pub struct AutoSaver {
    store: Arc<DraftStore>,
    debouncer: Debouncer,
    delay: Duration,
}

impl AutoSaver {
    /// Auto-saver with the standard delay
    #[must_use]
    pub fn new(store: Arc<DraftStore>) -> Self {
        Self::with_delay(store, AUTO_SAVE_DELAY)
    }

    /// Auto-saver with a custom delay (tests use a short one)
    #[must_use]
    pub fn with_delay(store: Arc<DraftStore>, delay: Duration) -> Self {
        Self {
            store,
            debouncer: Debouncer::new(),
            delay,
        }
    }

    /// Observe the latest form state; only the last snapshot of a burst is
    /// actually written.
    pub fn observe(&self, answers: &FormAnswers) {
        let store = Arc::clone(&self.store);
        let snapshot = answers.clone();
        self.debouncer
            .trigger(self.delay, move || store.save(&snapshot));
    }

    /// Drop any pending save without writing it.
    ///
    /// Called when the observed state is about to be superseded wholesale,
    /// e.g. right before the store's movements are cleared after a
    /// successful submission.
    pub fn cancel(&self) {
        self.debouncer.cancel();
    }

    /// The wrapped store
    #[must_use]
    pub fn store(&self) -> &Arc<DraftStore> {
        &self.store
    }
}
