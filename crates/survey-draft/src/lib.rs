//! Survey Draft - local draft persistence
//!
//! Holds a single JSON snapshot of in-progress answers:
//! - `DraftStorage` is the injectable slot (file-backed or in-memory)
//! - `DraftStore` saves, restores once, and selectively clears movements
//! - `AutoSaver` debounces saves so a burst of edits writes once
//!
//! Failure policy: storage trouble degrades to "draft not persisted" and is
//! never surfaced to the user; corrupt snapshots fall back to defaults.

#![warn(unreachable_pub)]

pub mod debounce;
pub mod storage;
pub mod store;

pub use debounce::{AutoSaver, Debouncer, AUTO_SAVE_DELAY};
pub use storage::{DraftStorage, FileStorage, MemoryStorage, StorageError};
pub use store::DraftStore;
