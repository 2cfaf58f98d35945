//! Survey Rules - validation for the day-movements survey
//!
//! Issues are data, never exceptions:
//! - `Issue` pairs a field path with an `IssueKind` code
//! - `validate_movement` checks one leg standalone
//! - `validate_form` aggregates general fields plus the whole sequence and
//!   is the single gate before submission
//! - readiness predicates back progressive UI disclosure
//!
//! Validation never mutates data and is safe to call on every keystroke.

#![warn(unreachable_pub)]

pub mod form;
pub mod issue;
pub mod limits;
pub mod movement;
pub mod ready;

pub use form::{ensure_valid, is_valid, validate_form, InvalidForm};
pub use issue::{Issue, IssueKind};
pub use movement::validate_movement;
pub use ready::{leg_is_ready, start_point_is_ready};
