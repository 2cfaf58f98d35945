//! Movement (trip leg) type and defaults
//!
//! One contiguous segment of the respondent's day, from one point to another.
//! Fields serialize camelCase to match the wire format; every field has a
//! default so partial draft snapshots deserialize cleanly.

use crate::address::AddressSuggestion;
use crate::catalog::{MovementType, Place, TransportMode};
use serde::{Deserialize, Serialize};

/// A single movement entry within the day.
///
/// Created with defaults when the user appends a leg; legs after the first
/// are seeded from the previous leg's arrival (see `survey-flow`). Never
/// persisted individually, only as part of the whole-form snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Movement {
    /// On foot or by transport
    pub movement_type: MovementType,
    /// Transport modes used; non-empty iff `movement_type` is `Transport`
    pub transport: Vec<TransportMode>,

    // Transport-specific counters
    /// People in the car, 1..=15
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_people_in_car: Option<u32>,
    /// Minutes walked to the first stop, 0..=180
    #[serde(skip_serializing_if = "Option::is_none")]
    pub walk_to_start_minutes: Option<u32>,
    /// Minutes waited at the first stop, 0..=180
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wait_at_start_minutes: Option<u32>,
    /// Number of transfers, 0..=15
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_of_transfers: Option<u32>,
    /// Minutes waited between transfers, 0..=180; always present, default 0
    pub wait_between_transfers_minutes: u32,

    // Departure
    /// Departure time as entered (HH:MM)
    pub departure_time: String,
    /// Departure place code
    pub departure_place: Option<Place>,
    /// Departure address; required-and-complete unless the place is home
    pub departure_address: Option<AddressSuggestion>,

    // Arrival
    /// Arrival time as entered (HH:MM)
    pub arrival_time: String,
    /// Arrival place code
    pub arrival_place: Option<Place>,
    /// Arrival address; same conditional rule as departure
    pub arrival_address: Option<AddressSuggestion>,

    // Transport arrival extras
    /// Minutes walked from the last stop, 0..=180
    #[serde(skip_serializing_if = "Option::is_none")]
    pub walk_from_finish_minutes: Option<u32>,
    /// Cost of the trip, 0..=25000
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trip_cost: Option<u32>,

    /// Free-text comment, max 2000 characters
    pub comment: String,
}

impl Movement {
    /// Whether this leg was travelled by transport
    #[inline]
    #[must_use]
    pub fn is_transport(&self) -> bool {
        self.movement_type == MovementType::Transport
    }
}
