//! Home-residence auto-fill state machine
//!
//! An address slot paired with a place code is either user-controlled
//! (`Free`) or mirrors the respondent's home address (`LockedToHome`).
//! The caller invokes [`sync_home_slot`] whenever the place code, the home
//! address, or the slot value changes; a `None` result means the slot
//! already holds the target value and no write may happen (this is the
//! value-level short-circuit that prevents update loops).

use survey_model::address::AddressSuggestion;
use survey_model::catalog::Place;

/// Who controls an address slot right now
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotState {
    /// User-controlled input
    Free,
    /// Mirrors the home address; input disabled
    LockedToHome,
}

/// The state is fully derived from the paired place code.
#[inline]
#[must_use]
pub fn slot_state(place: Option<Place>) -> SlotState {
    if place == Some(Place::HomeResidence) {
        SlotState::LockedToHome
    } else {
        SlotState::Free
    }
}

/// Write the caller must apply to the slot
#[derive(Debug, Clone, PartialEq)]
pub enum SlotChange {
    /// Overwrite the slot with this address (the home address)
    Set(AddressSuggestion),
    /// Clear the slot to unset
    Clear,
}

/// One transition step of the auto-fill machine.
///
/// - place is home and the slot's display value differs from the home
///   address → `Set(home)`
/// - place just left home while the slot still holds an address → `Clear`
/// - otherwise no write
#[must_use]
pub fn sync_home_slot(
    previous_place: Option<Place>,
    place: Option<Place>,
    home: Option<&AddressSuggestion>,
    slot: Option<&AddressSuggestion>,
) -> Option<SlotChange> {
    if place == Some(Place::HomeResidence) {
        if let Some(home) = home {
            let slot_value = slot.map_or("", |address| address.value.as_str());
            if slot_value != home.value {
                return Some(SlotChange::Set(home.clone()));
            }
        }
        return None;
    }

    if previous_place == Some(Place::HomeResidence) && slot.is_some() {
        return Some(SlotChange::Clear);
    }

    None
}
