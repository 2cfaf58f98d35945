//! Durable single-slot storage backends

use parking_lot::Mutex;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Storage failure; callers above the store never see these.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Filesystem error
    #[error("storage io: {0}")]
    Io(#[from] io::Error),
}

/// A single named slot holding one string payload.
///
/// Injected into [`crate::DraftStore`] so tests run against an in-memory
/// fake instead of a process-wide singleton.
pub trait DraftStorage: Send + Sync {
    /// Read the slot; `Ok(None)` when nothing was ever written
    fn read_slot(&self) -> Result<Option<String>, StorageError>;
    /// Overwrite the slot
    fn write_slot(&self, payload: &str) -> Result<(), StorageError>;
}

/// File-backed slot: one JSON file on disk.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    /// Slot at an explicit file path
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Conventional `draft.json` slot inside a directory
    #[must_use]
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self::new(dir.as_ref().join("draft.json"))
    }

    /// Path of the backing file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DraftStorage for FileStorage {
    fn read_slot(&self) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(&self.path) {
            Ok(raw) => Ok(Some(raw)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn write_slot(&self, payload: &str) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        // Write to a sibling temp file, then rename into place
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, payload)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

/// In-memory slot for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    slot: Mutex<Option<String>>,
}

impl MemoryStorage {
    /// Empty slot
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl DraftStorage for MemoryStorage {
    fn read_slot(&self) -> Result<Option<String>, StorageError> {
        Ok(self.slot.lock().clone())
    }

    fn write_slot(&self, payload: &str) -> Result<(), StorageError> {
        *self.slot.lock() = Some(payload.to_string());
        Ok(())
    }
}
