use serde_json::json;
use survey_model::address::AddressSuggestion;
use survey_model::catalog::{MovementType, Place, TransportMode};
use survey_model::movement::Movement;
use survey_rules::{validate_movement, IssueKind};

fn address(value: &str, lat: &str, lon: &str, house: &str) -> AddressSuggestion {
    AddressSuggestion::new(value)
        .with_attr("geo_lat", json!(lat))
        .with_attr("geo_lon", json!(lon))
        .with_attr("house", json!(house))
}

fn valid_leg() -> Movement {
    Movement {
        movement_type: MovementType::OnFoot,
        departure_time: "08:00".to_string(),
        departure_place: Some(Place::HomeResidence),
        departure_address: None,
        arrival_time: "08:30".to_string(),
        arrival_place: Some(Place::Workplace),
        arrival_address: Some(address("Marx St, 5", "52.3", "104.3", "5")),
        ..Movement::default()
    }
}

fn kinds_at<'a>(issues: &'a [survey_rules::Issue], path: &str) -> Vec<&'a IssueKind> {
    issues
        .iter()
        .filter(|issue| issue.path == path)
        .map(|issue| &issue.kind)
        .collect()
}

#[test]
fn valid_leg_produces_no_issues() {
    assert_eq!(validate_movement(&valid_leg(), ""), vec![]);
}

#[test]
fn required_fields_are_reported_per_path() {
    let issues = validate_movement(&Movement::default(), "");
    assert_eq!(kinds_at(&issues, "departureTime"), vec![&IssueKind::Required]);
    assert_eq!(kinds_at(&issues, "departurePlace"), vec![&IssueKind::Required]);
    assert_eq!(kinds_at(&issues, "arrivalTime"), vec![&IssueKind::Required]);
    assert_eq!(kinds_at(&issues, "arrivalPlace"), vec![&IssueKind::Required]);
}

#[test]
fn transport_leg_requires_a_mode() {
    let mut leg = valid_leg();
    leg.movement_type = MovementType::Transport;
    let issues = validate_movement(&leg, "");
    assert_eq!(kinds_at(&issues, "transport"), vec![&IssueKind::TransportEmpty]);

    leg.transport = vec![TransportMode::Bus];
    assert_eq!(validate_movement(&leg, ""), vec![]);
}

#[test]
fn non_home_arrival_distinguishes_missing_from_incomplete() {
    let mut leg = valid_leg();
    leg.arrival_address = None;
    let issues = validate_movement(&leg, "");
    assert_eq!(kinds_at(&issues, "arrivalAddress"), vec![&IssueKind::AddressMissing]);

    leg.arrival_address = Some(
        AddressSuggestion::new("Marx St")
            .with_attr("geo_lat", json!("52.3"))
            .with_attr("geo_lon", json!("104.3")),
    );
    let issues = validate_movement(&leg, "");
    assert_eq!(kinds_at(&issues, "arrivalAddress"), vec![&IssueKind::AddressNoHouse]);
}

#[test]
fn home_departure_skips_the_address_rule() {
    let leg = valid_leg();
    assert!(leg.departure_address.is_none());
    assert_eq!(validate_movement(&leg, ""), vec![]);
}

#[test]
fn home_to_home_is_degenerate() {
    let mut leg = valid_leg();
    leg.arrival_place = Some(Place::HomeResidence);
    leg.arrival_address = None;
    let issues = validate_movement(&leg, "");
    assert_eq!(kinds_at(&issues, "arrivalPlace"), vec![&IssueKind::DegenerateLeg]);
}

#[test]
fn matching_coordinates_are_degenerate() {
    let mut leg = valid_leg();
    leg.departure_place = Some(Place::StoreMarket);
    leg.departure_address = Some(address("Marx St, 5", "52.3", "104.3", "5"));
    let issues = validate_movement(&leg, "");
    assert_eq!(kinds_at(&issues, "arrivalPlace"), vec![&IssueKind::DegenerateLeg]);
}

#[test]
fn numeric_bounds_are_field_scoped() {
    let mut leg = valid_leg();
    leg.movement_type = MovementType::Transport;
    leg.transport = vec![TransportMode::PrivateCar];
    leg.number_people_in_car = Some(16);
    leg.trip_cost = Some(30_000);
    leg.wait_between_transfers_minutes = 181;

    let issues = validate_movement(&leg, "");
    assert_eq!(
        kinds_at(&issues, "numberPeopleInCar"),
        vec![&IssueKind::OutOfRange { min: 1, max: 15 }]
    );
    assert_eq!(
        kinds_at(&issues, "tripCost"),
        vec![&IssueKind::OutOfRange { min: 0, max: 25_000 }]
    );
    assert_eq!(
        kinds_at(&issues, "waitBetweenTransfersMinutes"),
        vec![&IssueKind::OutOfRange { min: 0, max: 180 }]
    );
}

#[test]
fn oversized_comment_is_rejected() {
    let mut leg = valid_leg();
    leg.comment = "x".repeat(2001);
    let issues = validate_movement(&leg, "");
    assert_eq!(kinds_at(&issues, "comment"), vec![&IssueKind::TooLong { max: 2000 }]);
}

#[test]
fn prefix_scopes_every_path() {
    let issues = validate_movement(&Movement::default(), "movements.3");
    assert!(issues.iter().all(|issue| issue.path.starts_with("movements.3.")));
}
