//! Per-leg validation
//!
//! Implements the conditional requirements of a single movement:
//! - transport set required for transport legs
//! - addresses required-and-complete unless the paired place is home
//! - degenerate-leg rejection (departure equals arrival)
//! - per-field numeric bounds

use crate::issue::{Issue, IssueKind};
use crate::limits;
use survey_model::address::{has_house_number, same_point, AddressSuggestion};
use survey_model::catalog::Place;
use survey_model::movement::Movement;
use std::ops::RangeInclusive;

/// Validate one leg, attaching issue paths under `prefix`.
///
/// Pass an empty prefix to validate the leg standalone; the form validator
/// passes `movements.{i}`. Never panics, never mutates.
#[must_use]
pub fn validate_movement(movement: &Movement, prefix: &str) -> Vec<Issue> {
    let mut issues = Vec::new();
    let at = |field: &str| -> String {
        if prefix.is_empty() {
            field.to_string()
        } else {
            format!("{prefix}.{field}")
        }
    };

    if movement.departure_time.trim().is_empty() {
        issues.push(Issue::new(at("departureTime"), IssueKind::Required));
    }
    if movement.departure_place.is_none() {
        issues.push(Issue::new(at("departurePlace"), IssueKind::Required));
    }
    if movement.arrival_time.trim().is_empty() {
        issues.push(Issue::new(at("arrivalTime"), IssueKind::Required));
    }
    if movement.arrival_place.is_none() {
        issues.push(Issue::new(at("arrivalPlace"), IssueKind::Required));
    }

    if movement.is_transport() && movement.transport.is_empty() {
        issues.push(Issue::new(at("transport"), IssueKind::TransportEmpty));
    }

    check_conditional_address(
        &mut issues,
        movement.departure_place,
        movement.departure_address.as_ref(),
        at("departureAddress"),
    );
    check_conditional_address(
        &mut issues,
        movement.arrival_place,
        movement.arrival_address.as_ref(),
        at("arrivalAddress"),
    );

    if is_degenerate(movement) {
        issues.push(Issue::new(at("arrivalPlace"), IssueKind::DegenerateLeg));
    }

    check_bounded(&mut issues, movement.number_people_in_car, limits::PEOPLE_IN_CAR, at("numberPeopleInCar"));
    check_bounded(&mut issues, movement.walk_to_start_minutes, limits::WALK_MINUTES, at("walkToStartMinutes"));
    check_bounded(&mut issues, movement.wait_at_start_minutes, limits::WAIT_MINUTES, at("waitAtStartMinutes"));
    check_bounded(&mut issues, movement.number_of_transfers, limits::TRANSFERS, at("numberOfTransfers"));
    check_bounded(
        &mut issues,
        Some(movement.wait_between_transfers_minutes),
        limits::WAIT_MINUTES,
        at("waitBetweenTransfersMinutes"),
    );
    check_bounded(&mut issues, movement.walk_from_finish_minutes, limits::WALK_MINUTES, at("walkFromFinishMinutes"));
    check_bounded(&mut issues, movement.trip_cost, limits::TRIP_COST, at("tripCost"));

    if movement.comment.chars().count() > limits::COMMENT_CHARS {
        issues.push(Issue::new(
            at("comment"),
            IssueKind::TooLong {
                max: limits::COMMENT_CHARS,
            },
        ));
    }

    issues
}

/// Address is required and must carry a house number, except when the paired
/// place code designates the respondent's home.
fn check_conditional_address(
    issues: &mut Vec<Issue>,
    place: Option<Place>,
    address: Option<&AddressSuggestion>,
    path: String,
) {
    if place == Some(Place::HomeResidence) {
        return;
    }
    match address {
        None => issues.push(Issue::new(path, IssueKind::AddressMissing)),
        Some(_) if !has_house_number(address) => {
            issues.push(Issue::new(path, IssueKind::AddressNoHouse));
        }
        Some(_) => {}
    }
}

/// A zero-distance leg: home to home, or matching addresses.
fn is_degenerate(movement: &Movement) -> bool {
    let home_to_home = movement.departure_place == Some(Place::HomeResidence)
        && movement.arrival_place == Some(Place::HomeResidence);
    home_to_home
        || same_point(
            movement.departure_address.as_ref(),
            movement.arrival_address.as_ref(),
        )
}

fn check_bounded(
    issues: &mut Vec<Issue>,
    value: Option<u32>,
    bounds: RangeInclusive<u32>,
    path: String,
) {
    if let Some(value) = value {
        if !bounds.contains(&value) {
            issues.push(Issue::new(
                path,
                IssueKind::OutOfRange {
                    min: *bounds.start(),
                    max: *bounds.end(),
                },
            ));
        }
    }
}
