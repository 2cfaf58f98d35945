//! Survey Flow - movement chaining and cross-field side effects
//!
//! Pure transforms over the movement sequence:
//! - `chain` keeps every leg's departure equal to the previous arrival
//! - `build_next_leg` seeds a freshly appended leg from its predecessor
//! - the home-residence auto-fill state machine mirrors the home address
//!   into address slots paired with a home place code
//!
//! Nothing here touches I/O; all of it is safe to re-run on every keystroke.

#![warn(unreachable_pub)]

pub mod chain;
pub mod home_lock;

pub use chain::{build_next_leg, chain, is_chained};
pub use home_lock::{slot_state, sync_home_slot, SlotChange, SlotState};
