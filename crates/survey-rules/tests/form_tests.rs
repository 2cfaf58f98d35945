use serde_json::json;
use survey_model::address::AddressSuggestion;
use survey_model::catalog::{Gender, MovementType, Place, SocialStatus};
use survey_model::form::FormAnswers;
use survey_model::movement::Movement;
use survey_rules::{ensure_valid, is_valid, validate_form, IssueKind};

fn home_address() -> AddressSuggestion {
    AddressSuggestion::new("Lenin St, 1")
        .with_attr("geo_lat", json!("52.2978"))
        .with_attr("geo_lon", json!("104.2964"))
        .with_attr("house", json!("1"))
}

fn valid_answers() -> FormAnswers {
    FormAnswers {
        birthday: "1990-05-15".to_string(),
        gender: Some(Gender::Male),
        social_status: Some(SocialStatus::Working),
        home_address: Some(home_address()),
        transport_cost_min: 0,
        transport_cost_max: 3000,
        income_min: 0,
        income_max: 50_000,
        movements_date: "2026-01-15".to_string(),
        movements: vec![Movement {
            movement_type: MovementType::OnFoot,
            departure_time: "08:00".to_string(),
            departure_place: Some(Place::HomeResidence),
            arrival_time: "08:30".to_string(),
            arrival_place: Some(Place::Workplace),
            arrival_address: Some(
                AddressSuggestion::new("Marx St, 5")
                    .with_attr("geo_lat", json!("52.3"))
                    .with_attr("geo_lon", json!("104.3"))
                    .with_attr("house", json!("5")),
            ),
            ..Movement::default()
        }],
    }
}

#[test]
fn accepts_valid_answers() {
    assert_eq!(validate_form(&valid_answers()), vec![]);
    assert!(is_valid(&valid_answers()));
    assert!(ensure_valid(&valid_answers()).is_ok());
}

#[test]
fn rejects_empty_birthday() {
    let mut answers = valid_answers();
    answers.birthday = String::new();
    let issues = validate_form(&answers);
    assert!(issues.contains(&survey_rules::Issue::new("birthday", IssueKind::Required)));
}

#[test]
fn rejects_home_address_without_house_number() {
    let mut answers = valid_answers();
    answers.home_address = Some(
        AddressSuggestion::new("Lenin St")
            .with_attr("geo_lat", json!("52.0"))
            .with_attr("geo_lon", json!("104.0")),
    );
    let issues = validate_form(&answers);
    assert!(issues.contains(&survey_rules::Issue::new("homeAddress", IssueKind::AddressNoHouse)));
}

#[test]
fn rejects_missing_home_address() {
    let mut answers = valid_answers();
    answers.home_address = None;
    let issues = validate_form(&answers);
    assert!(issues.contains(&survey_rules::Issue::new("homeAddress", IssueKind::AddressMissing)));
}

#[test]
fn rejects_empty_movement_sequence() {
    let mut answers = valid_answers();
    answers.movements.clear();
    let issues = validate_form(&answers);
    assert!(issues.contains(&survey_rules::Issue::new("movements", IssueKind::NoMovements)));
}

#[test]
fn rejects_more_than_fifteen_movements() {
    let mut answers = valid_answers();
    let leg = answers.movements[0].clone();
    answers.movements = std::iter::repeat(leg).take(16).collect();
    let issues = validate_form(&answers);
    assert!(issues.contains(&survey_rules::Issue::new(
        "movements",
        IssueKind::TooManyMovements { max: 15 }
    )));
}

#[test]
fn rejects_transport_leg_without_modes() {
    let mut answers = valid_answers();
    answers.movements[0].movement_type = MovementType::Transport;
    let issues = validate_form(&answers);
    assert!(issues.contains(&survey_rules::Issue::new(
        "movements.0.transport",
        IssueKind::TransportEmpty
    )));
}

#[test]
fn rejects_non_home_arrival_with_missing_address() {
    let mut answers = valid_answers();
    answers.movements[0].arrival_address = None;
    let issues = validate_form(&answers);
    assert!(issues.contains(&survey_rules::Issue::new(
        "movements.0.arrivalAddress",
        IssueKind::AddressMissing
    )));
}

#[test]
fn rejects_out_of_range_income() {
    let mut answers = valid_answers();
    answers.income_max = 250_001;
    let issues = validate_form(&answers);
    assert!(issues.contains(&survey_rules::Issue::new(
        "incomeMax",
        IssueKind::OutOfRange { min: 0, max: 250_000 }
    )));
}

#[test]
fn min_max_ranges_carry_no_ordering_invariant() {
    let mut answers = valid_answers();
    answers.transport_cost_min = 5000;
    answers.transport_cost_max = 100;
    answers.income_min = 200_000;
    answers.income_max = 10_000;
    assert!(is_valid(&answers));
}

#[test]
fn invalid_form_error_carries_the_issues() {
    let mut answers = valid_answers();
    answers.birthday = String::new();
    answers.movements_date = String::new();
    let err = ensure_valid(&answers).unwrap_err();
    assert_eq!(err.issues.len(), 2);
    assert_eq!(err.to_string(), "form has 2 validation issue(s)");
}
