//! The draft store
//!
//! Thin layer over a [`DraftStorage`] slot: the live form state lives with
//! the caller; this store only holds the serialized snapshot, a last-saved
//! marker, and the restored-once flag.

use crate::storage::DraftStorage;
use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use serde_json::Value;
use std::sync::atomic::{AtomicBool, Ordering};
use survey_model::form::FormAnswers;
use tracing::warn;

/// Draft persistence over an injected storage slot.
pub struct DraftStore {
    storage: Box<dyn DraftStorage>,
    last_saved_at: Mutex<Option<DateTime<Utc>>>,
    restored: AtomicBool,
}

impl DraftStore {
    /// Build a store over any storage backend
    #[must_use]
    pub fn new(storage: Box<dyn DraftStorage>) -> Self {
        Self {
            storage,
            last_saved_at: Mutex::new(None),
            restored: AtomicBool::new(false),
        }
    }

    /// Persist a snapshot of the form answers.
    ///
    /// Failures are swallowed: a full or unavailable slot turns the save
    /// into a logged no-op and the form keeps working un-persisted.
    pub fn save(&self, answers: &FormAnswers) {
        let payload = match serde_json::to_string(answers) {
            Ok(payload) => payload,
            Err(err) => {
                warn!(%err, "draft snapshot failed to serialize");
                return;
            }
        };
        if let Err(err) = self.storage.write_slot(&payload) {
            warn!(%err, "draft save skipped");
            return;
        }
        *self.last_saved_at.lock() = Some(Utc::now());
    }

    /// Read the stored snapshot, once per session.
    ///
    /// The first call returns the snapshot (system defaults when the slot is
    /// empty or corrupt); every later call returns `None` so restore never
    /// re-runs mid-session.
    pub fn restore(&self) -> Option<FormAnswers> {
        if self.restored.swap(true, Ordering::SeqCst) {
            return None;
        }
        Some(self.read_snapshot())
    }

    fn read_snapshot(&self) -> FormAnswers {
        let raw = match self.storage.read_slot() {
            Ok(Some(raw)) => raw,
            Ok(None) => return FormAnswers::default(),
            Err(err) => {
                warn!(%err, "draft read failed, starting from defaults");
                return FormAnswers::default();
            }
        };
        serde_json::from_str(&raw).unwrap_or_else(|err| {
            warn!(%err, "draft snapshot is corrupt, starting from defaults");
            FormAnswers::default()
        })
    }

    /// Drop only the movements portion of the stored snapshot.
    ///
    /// Called once, right after a confirmed successful submission; general
    /// info stays so the respondent can file another day without retyping.
    pub fn clear_movements(&self) {
        let raw = match self.storage.read_slot() {
            Ok(Some(raw)) => raw,
            Ok(None) => return,
            Err(err) => {
                warn!(%err, "draft read failed, movements not cleared");
                return;
            }
        };
        let mut snapshot: Value = match serde_json::from_str(&raw) {
            Ok(snapshot) => snapshot,
            Err(err) => {
                warn!(%err, "draft snapshot is corrupt, movements not cleared");
                return;
            }
        };
        if let Value::Object(map) = &mut snapshot {
            map.remove("movements");
        }
        if let Err(err) = self.storage.write_slot(&snapshot.to_string()) {
            warn!(%err, "draft rewrite skipped");
        }
    }

    /// When the last successful save happened
    #[must_use]
    pub fn last_saved_at(&self) -> Option<DateTime<Utc>> {
        *self.last_saved_at.lock()
    }

    /// Whether restore has already run this session
    #[must_use]
    pub fn is_restored(&self) -> bool {
        self.restored.load(Ordering::SeqCst)
    }
}
