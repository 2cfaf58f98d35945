//! Progressive-disclosure readiness predicates
//!
//! Looser than full validation: the UI uses these to decide when the next
//! part of a leg may be revealed, so numeric bounds are deliberately not
//! checked here.

use survey_model::address::has_house_number;
use survey_model::catalog::Place;
use survey_model::movement::Movement;

/// Whether the leg's departure point is filled in enough to build on.
#[must_use]
pub fn start_point_is_ready(movement: &Movement) -> bool {
    if movement.departure_time.is_empty() || movement.departure_place.is_none() {
        return false;
    }
    movement.departure_place == Some(Place::HomeResidence)
        || has_house_number(movement.departure_address.as_ref())
}

/// Whether the whole leg is filled in enough to append the next one.
#[must_use]
pub fn leg_is_ready(movement: &Movement) -> bool {
    if !start_point_is_ready(movement) {
        return false;
    }
    if movement.is_transport() && movement.transport.is_empty() {
        return false;
    }
    true
}
