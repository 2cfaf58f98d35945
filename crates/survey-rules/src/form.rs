//! Whole-form validation
//!
//! The single gate before submission: general fields, bounded ranges, and
//! every leg of the movement sequence. Reports issues, never mutates.

use crate::issue::{Issue, IssueKind};
use crate::limits;
use crate::movement::validate_movement;
use survey_model::address::has_house_number;
use survey_model::form::{FormAnswers, MAX_MOVEMENTS};

/// Validate the full answer set.
///
/// Note: no ordering invariant is enforced between the paired min/max range
/// fields; the ranges are treated as independent answers.
#[must_use]
pub fn validate_form(answers: &FormAnswers) -> Vec<Issue> {
    let mut issues = Vec::new();

    if answers.birthday.trim().is_empty() {
        issues.push(Issue::new("birthday", IssueKind::Required));
    }
    if answers.gender.is_none() {
        issues.push(Issue::new("gender", IssueKind::Required));
    }
    if answers.social_status.is_none() {
        issues.push(Issue::new("socialStatus", IssueKind::Required));
    }

    match answers.home_address.as_ref() {
        None => issues.push(Issue::new("homeAddress", IssueKind::AddressMissing)),
        Some(_) if !has_house_number(answers.home_address.as_ref()) => {
            issues.push(Issue::new("homeAddress", IssueKind::AddressNoHouse));
        }
        Some(_) => {}
    }

    check_range(&mut issues, answers.transport_cost_min, limits::TRANSPORT_COST, "transportCostMin");
    check_range(&mut issues, answers.transport_cost_max, limits::TRANSPORT_COST, "transportCostMax");
    check_range(&mut issues, answers.income_min, limits::INCOME, "incomeMin");
    check_range(&mut issues, answers.income_max, limits::INCOME, "incomeMax");

    if answers.movements_date.trim().is_empty() {
        issues.push(Issue::new("movementsDate", IssueKind::Required));
    }

    if answers.movements.is_empty() {
        issues.push(Issue::new("movements", IssueKind::NoMovements));
    } else if answers.movements.len() > MAX_MOVEMENTS {
        issues.push(Issue::new(
            "movements",
            IssueKind::TooManyMovements { max: MAX_MOVEMENTS },
        ));
    }

    for (i, movement) in answers.movements.iter().enumerate() {
        issues.extend(validate_movement(movement, &format!("movements.{i}")));
    }

    issues
}

/// Shorthand for "no issues".
#[must_use]
pub fn is_valid(answers: &FormAnswers) -> bool {
    validate_form(answers).is_empty()
}

/// The gate in error form, for callers that propagate with `?`.
#[derive(Debug, Clone, thiserror::Error)]
#[error("form has {} validation issue(s)", issues.len())]
pub struct InvalidForm {
    /// Every issue found, in field order
    pub issues: Vec<Issue>,
}

/// Validate and wrap any issues in an [`InvalidForm`] error.
pub fn ensure_valid(answers: &FormAnswers) -> Result<(), InvalidForm> {
    let issues = validate_form(answers);
    if issues.is_empty() {
        Ok(())
    } else {
        Err(InvalidForm { issues })
    }
}

fn check_range(
    issues: &mut Vec<Issue>,
    value: u32,
    bounds: std::ops::RangeInclusive<u32>,
    path: &str,
) {
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
