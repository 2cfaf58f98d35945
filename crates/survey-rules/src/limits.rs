//! Documented bounds for every numeric and text field

use std::ops::RangeInclusive;

/// People in the car
pub const PEOPLE_IN_CAR: RangeInclusive<u32> = 1..=15;
/// Minutes walked to / from a stop
pub const WALK_MINUTES: RangeInclusive<u32> = 0..=180;
/// Minutes waited at a stop or between transfers
pub const WAIT_MINUTES: RangeInclusive<u32> = 0..=180;
/// Number of transfers within one leg
pub const TRANSFERS: RangeInclusive<u32> = 0..=15;
/// Cost of a single trip
pub const TRIP_COST: RangeInclusive<u32> = 0..=25_000;
/// Monthly transport spending bounds
pub const TRANSPORT_COST: RangeInclusive<u32> = 0..=20_000;
/// Monthly income bounds
pub const INCOME: RangeInclusive<u32> = 0..=250_000;
/// Free-text comment cap, in characters
pub const COMMENT_CHARS: usize = 2000;
