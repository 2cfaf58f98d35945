//! Survey Model - data model for the day-movements travel survey
//!
//! The shared vocabulary of the workspace:
//! - Address suggestions and their backend simplification
//! - Closed enumeration catalog for answer codes
//! - Movement (trip leg) and whole-form answer types with defaults
//!
//! Everything here is plain data: serde-serializable, cheaply clonable,
//! with no I/O and no validation logic (see `survey-rules` for that).

#![warn(unreachable_pub)]

pub mod address;
pub mod catalog;
pub mod form;
pub mod movement;

pub use address::{simplify, has_house_number, same_point, AddressSuggestion, SimplifiedAddress};
pub use catalog::{CatalogOption, Gender, MovementType, Place, SocialStatus, TransportMode, UnknownCode};
pub use form::FormAnswers;
pub use movement::Movement;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
