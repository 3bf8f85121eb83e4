//! Outcomes of executed [`LotAction`](super::LotAction)s.

use serde::{Deserialize, Serialize};

/// What the executor did with one action.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum LotActionResult {
    /// The vehicle was placed in `bay`.
    Parked { bay: usize },
    /// The vehicle in `bay` left.
    Unparked { bay: usize },
    Error(LotActionError),
}

impl LotActionResult {
    pub fn is_success(&self) -> bool {
        !matches!(self, LotActionResult::Error(_))
    }

    /// The bay touched by a successful action.
    pub fn bay(&self) -> Option<usize> {
        match self {
            LotActionResult::Parked { bay } | LotActionResult::Unparked { bay } => Some(*bay),
            LotActionResult::Error(_) => None,
        }
    }
}

/// Why an action had no effect on the lot.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum LotActionError {
    /// No free bay was eligible for the vehicle.
    NoBayAvailable,
    /// Nothing was parked in the bay being freed.
    BayNotOccupied { bay: usize },
}
