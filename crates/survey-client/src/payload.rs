//! Wire payload for the movements endpoint
//!
//! The backend consumes simplified addresses, not raw provider suggestions,
//! and expects the movement sequence to be topologically consistent.
//! Chaining is re-applied here so the payload holds even if caller state
//! drifted.

use serde::Serialize;
use survey_flow::chain;
use survey_model::address::{simplify, SimplifiedAddress};
use survey_model::catalog::{Gender, MovementType, Place, SocialStatus, TransportMode};
use survey_model::form::FormAnswers;
use survey_model::movement::Movement;

/// One leg on the wire.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MovementPayload {
    /// On foot or by transport
    pub movement_type: MovementType,
    /// Transport modes used
    pub transport: Vec<TransportMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// People in the car
    pub number_people_in_car: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Minutes walked to the first stop
    pub walk_to_start_minutes: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Minutes waited at the first stop
    pub wait_at_start_minutes: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Number of transfers
    pub number_of_transfers: Option<u32>,
    /// Minutes waited between transfers
    pub wait_between_transfers_minutes: u32,
    /// Departure time
    pub departure_time: String,
    /// Departure place code
    pub departure_place: Option<Place>,
    /// Simplified departure address
    pub departure_address: Option<SimplifiedAddress>,
    /// Arrival time
    pub arrival_time: String,
    /// Arrival place code
    pub arrival_place: Option<Place>,
    /// Simplified arrival address
    pub arrival_address: Option<SimplifiedAddress>,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Minutes walked from the last stop
    pub walk_from_finish_minutes: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Cost of the trip
    pub trip_cost: Option<u32>,
    /// Free-text comment
    pub comment: String,
}

impl MovementPayload {
    fn from_movement(movement: &Movement) -> Self {
        Self {
            movement_type: movement.movement_type,
            transport: movement.transport.clone(),
            number_people_in_car: movement.number_people_in_car,
            walk_to_start_minutes: movement.walk_to_start_minutes,
            wait_at_start_minutes: movement.wait_at_start_minutes,
            number_of_transfers: movement.number_of_transfers,
            wait_between_transfers_minutes: movement.wait_between_transfers_minutes,
            departure_time: movement.departure_time.clone(),
            departure_place: movement.departure_place,
            departure_address: simplify(movement.departure_address.as_ref()),
            arrival_time: movement.arrival_time.clone(),
            arrival_place: movement.arrival_place,
            arrival_address: simplify(movement.arrival_address.as_ref()),
            walk_from_finish_minutes: movement.walk_from_finish_minutes,
            trip_cost: movement.trip_cost,
            comment: movement.comment.clone(),
        }
    }
}

/// The whole submission body.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionPayload {
    /// Date of birth
    pub birthday: String,
    /// Respondent gender
    pub gender: Option<Gender>,
    /// Respondent social status
    pub social_status: Option<SocialStatus>,
    /// Simplified home address
    pub home_address: Option<SimplifiedAddress>,
    /// Monthly transport spending, lower bound
    pub transport_cost_min: u32,
    /// Monthly transport spending, upper bound
    pub transport_cost_max: u32,
    /// Monthly income, lower bound
    pub income_min: u32,
    /// Monthly income, upper bound
    pub income_max: u32,
    /// Date the movements describe
    pub movements_date: String,
    /// Chained movement sequence
    pub movements: Vec<MovementPayload>,
}

impl SubmissionPayload {
    /// Map answers to the wire shape, re-chaining the sequence first.
    #[must_use]
    pub fn from_answers(answers: &FormAnswers) -> Self {
        let movements = chain(&answers.movements)
            .iter()
            .map(MovementPayload::from_movement)
            .collect();
        Self {
            birthday: answers.birthday.clone(),
            gender: answers.gender,
            social_status: answers.social_status,
            home_address: simplify(answers.home_address.as_ref()),
            transport_cost_min: answers.transport_cost_min,
            transport_cost_max: answers.transport_cost_max,
            income_min: answers.income_min,
            income_max: answers.income_max,
            movements_date: answers.movements_date.clone(),
            movements,
        }
    }
}
