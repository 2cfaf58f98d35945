//! Field-scoped validation issues

use serde::Serialize;
use std::fmt;

/// A single validation finding, attached to a field path.
///
/// Non-fatal: issues block submission but never abort anything. Paths use
/// the wire field names, with sequence legs addressed as `movements.{i}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Issue {
    /// Wire-format path of the offending field, e.g. `movements.2.arrivalPlace`
    pub path: String,
    /// What is wrong with it
    pub kind: IssueKind,
}

impl Issue {
    /// Create an issue at a field path
    #[must_use]
    pub fn new(path: impl Into<String>, kind: IssueKind) -> Self {
        Self {
            path: path.into(),
            kind,
        }
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.kind)
    }
}

/// Closed set of issue codes.
///
/// Display text is neutral; UI-facing localization maps from the serialized
/// `code` tag instead of these strings.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Serialize)]
#[serde(tag = "code", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IssueKind {
    /// A required field is empty or unset
    #[error("required field is empty")]
    Required,
    /// Transport legs need at least one transport mode
    #[error("select at least one transport mode")]
    TransportEmpty,
    /// A conditionally required address is absent
    #[error("address is required")]
    AddressMissing,
    /// The address is present but has no house number
    #[error("address must contain a house number")]
    AddressNoHouse,
    /// Departure and arrival resolve to the same point
    #[error("arrival point matches the departure point")]
    DegenerateLeg,
    /// A numeric field is outside its documented bounds
    #[error("value must be between {min} and {max}")]
    OutOfRange {
        /// Inclusive lower bound
        min: u32,
        /// Inclusive upper bound
        max: u32,
    },
    /// Free text exceeds its length cap
    #[error("text exceeds {max} characters")]
    TooLong {
        /// Maximum length in characters
        max: usize,
    },
    /// The movement sequence is empty
    #[error("add at least one movement")]
    NoMovements,
    /// The movement sequence exceeds its cap
    #[error("no more than {max} movements are allowed")]
    TooManyMovements {
        /// Maximum sequence length
        max: usize,
    },
}
