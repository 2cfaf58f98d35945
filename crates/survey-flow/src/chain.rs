//! The chaining algorithm
//!
//! Invariant: for every index i > 0, leg i departs exactly where leg i-1
//! arrived (place code and address alike). Leg 0 is authored independently
//! and is never touched here.

use survey_model::address::{same_point, AddressSuggestion};
use survey_model::movement::Movement;

/// Re-derive downstream departures from upstream arrivals.
///
/// An empty sequence yields a single defaulted leg. Pure and idempotent:
/// `chain(&chain(m)) == chain(m)`.
#[must_use]
pub fn chain(movements: &[Movement]) -> Vec<Movement> {
    if movements.is_empty() {
        return vec![Movement::default()];
    }
    let mut chained = movements.to_vec();
    for i in 1..chained.len() {
        let arrival_place = chained[i - 1].arrival_place;
        let arrival_address = chained[i - 1].arrival_address.clone();
        chained[i].departure_place = arrival_place;
        chained[i].departure_address = arrival_address;
    }
    chained
}

/// A freshly defaulted leg departing where `previous` arrived.
///
/// Used when the user appends a leg, so the new leg satisfies the chaining
/// invariant before any edit.
#[must_use]
pub fn build_next_leg(previous: &Movement) -> Movement {
    Movement {
        departure_time: previous.arrival_time.clone(),
        departure_place: previous.arrival_place,
        departure_address: previous.arrival_address.clone(),
        ..Movement::default()
    }
}

/// Check the chaining invariant without rewriting anything.
#[must_use]
pub fn is_chained(movements: &[Movement]) -> bool {
    movements.windows(2).all(|pair| {
        pair[1].departure_place == pair[0].arrival_place
            && slots_equal(
                pair[1].departure_address.as_ref(),
                pair[0].arrival_address.as_ref(),
            )
    })
}

fn slots_equal(a: Option<&AddressSuggestion>, b: Option<&AddressSuggestion>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(_), Some(_)) => same_point(a, b),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use survey_model::catalog::Place;

    fn addr(value: &str) -> AddressSuggestion {
        AddressSuggestion::new(value)
            .with_attr("geo_lat", json!("52.3"))
            .with_attr("geo_lon", json!("104.3"))
            .with_attr("house", json!("5"))
    }

    #[test]
    fn empty_input_yields_one_default_leg() {
        assert_eq!(chain(&[]), vec![Movement::default()]);
    }

    #[test]
    fn arrival_propagates_into_next_departure() {
        let first = Movement {
            arrival_place: Some(Place::Workplace),
            arrival_address: Some(addr("Marx St, 5")),
            ..Movement::default()
        };
        let second = Movement {
            departure_place: Some(Place::School),
            departure_address: Some(addr("Wrong St, 9")),
            ..Movement::default()
        };

        let chained = chain(&[first.clone(), second]);
        assert_eq!(chained[0], first);
        assert_eq!(chained[1].departure_place, Some(Place::Workplace));
        assert_eq!(chained[1].departure_address, Some(addr("Marx St, 5")));
    }

    #[test]
    fn unset_arrival_clears_the_next_departure() {
        let first = Movement::default();
        let second = Movement {
            departure_place: Some(Place::School),
            departure_address: Some(addr("Wrong St, 9")),
            ..Movement::default()
        };
        let chained = chain(&[first, second]);
        assert_eq!(chained[1].departure_place, None);
        assert_eq!(chained[1].departure_address, None);
    }

    #[test]
    fn next_leg_is_seeded_from_the_previous_arrival() {
        let previous = Movement {
            arrival_time: "09:15".to_string(),
            arrival_place: Some(Place::StoreMarket),
            arrival_address: Some(addr("Market Sq, 2")),
            ..Movement::default()
        };
        let next = build_next_leg(&previous);
        assert_eq!(next.departure_time, "09:15");
        assert_eq!(next.departure_place, Some(Place::StoreMarket));
        assert_eq!(next.departure_address, Some(addr("Market Sq, 2")));
        assert_eq!(next.arrival_time, "");
        assert_eq!(next.arrival_place, None);
    }

    #[test]
    fn is_chained_matches_what_chain_produces() {
        let legs = vec![
            Movement {
                arrival_place: Some(Place::Workplace),
                arrival_address: Some(addr("Marx St, 5")),
                ..Movement::default()
            },
            Movement::default(),
        ];
        assert!(!is_chained(&legs));
        assert!(is_chained(&chain(&legs)));
    }
}
