//! Whole-form answers and the draft snapshot shape
//!
//! All fields default so a partial draft snapshot deserializes against the
//! same defaults a fresh form starts with.

use crate::address::AddressSuggestion;
use crate::catalog::{Gender, SocialStatus};
use crate::movement::Movement;
use serde::{Deserialize, Serialize};

/// Maximum number of movements per form
pub const MAX_MOVEMENTS: usize = 15;

/// The full set of form-level answers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormAnswers {
    // General info
    /// Date of birth as entered (YYYY-MM-DD)
    pub birthday: String,
    /// Respondent gender
    pub gender: Option<Gender>,
    /// Respondent social status
    pub social_status: Option<SocialStatus>,
    /// Home address; required and must carry a house number
    pub home_address: Option<AddressSuggestion>,
    /// Monthly transport spending, lower bound (0..=20000)
    pub transport_cost_min: u32,
    /// Monthly transport spending, upper bound (0..=20000)
    pub transport_cost_max: u32,
    /// Monthly income, lower bound (0..=250000)
    pub income_min: u32,
    /// Monthly income, upper bound (0..=250000)
    pub income_max: u32,

    // Movements page
    /// Date the movements describe (YYYY-MM-DD)
    pub movements_date: String,
    /// Ordered movement sequence, 1..=15 legs once valid
    pub movements: Vec<Movement>,
}

impl Default for FormAnswers {
    fn default() -> Self {
        Self {
            birthday: String::new(),
            gender: None,
            social_status: None,
            home_address: None,
            transport_cost_min: 0,
            transport_cost_max: 3000,
            income_min: 0,
            income_max: 50_000,
            movements_date: String::new(),
            movements: vec![Movement::default()],
        }
    }
}
