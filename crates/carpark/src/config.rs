//! Lot configuration record and its validation.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// LotConfig
// ---------------------------------------------------------------------------

/// Geometry of a lot: the three values the core consumes.
///
/// Exits and disabled bays keep their declared order; the disabled-bay
/// search breaks distance ties by that order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LotConfig {
    pub size: usize,
    #[serde(default)]
    pub pedestrian_exits: Vec<usize>,
    #[serde(default)]
    pub disabled_bays: Vec<usize>,
}

impl LotConfig {
    pub fn new(size: usize, pedestrian_exits: Vec<usize>, disabled_bays: Vec<usize>) -> Self {
        Self {
            size,
            pedestrian_exits,
            disabled_bays,
        }
    }

    /// Number of grid positions (`size * size`), or `None` when the square
    /// does not fit in a `usize`.
    pub fn bay_count(&self) -> Option<usize> {
        self.size.checked_mul(self.size)
    }

    /// Check the geometry: non-zero size, every index inside the grid, no
    /// index listed twice in the same list.
    ///
    /// A bay listed both as exit and disabled bay is accepted (it behaves as
    /// an exit); see [`LotConfig::overlapping_bays`].
    pub fn validate(&self) -> Result<(), LotConfigError> {
        if self.size == 0 {
            return Err(LotConfigError::ZeroSize);
        }
        let bay_count = self
            .bay_count()
            .ok_or(LotConfigError::TooLarge { size: self.size })?;

        let mut seen = BTreeSet::new();
        for &bay in &self.pedestrian_exits {
            if bay >= bay_count {
                return Err(LotConfigError::ExitOutOfRange { bay, bay_count });
            }
            if !seen.insert(bay) {
                return Err(LotConfigError::DuplicateExit(bay));
            }
        }

        seen.clear();
        for &bay in &self.disabled_bays {
            if bay >= bay_count {
                return Err(LotConfigError::DisabledBayOutOfRange { bay, bay_count });
            }
            if !seen.insert(bay) {
                return Err(LotConfigError::DuplicateDisabledBay(bay));
            }
        }

        Ok(())
    }

    /// Disabled bays that are also pedestrian exits, in declared order.
    pub fn overlapping_bays(&self) -> Vec<usize> {
        self.disabled_bays
            .iter()
            .copied()
            .filter(|bay| self.pedestrian_exits.contains(bay))
            .collect()
    }
}

// ---------------------------------------------------------------------------
// LotConfigError
// ---------------------------------------------------------------------------

/// Reasons a [`LotConfig`] is rejected by [`LotConfig::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LotConfigError {
    /// The lot has no bays at all.
    ZeroSize,
    /// `size * size` overflows the bay index type.
    TooLarge { size: usize },
    /// A pedestrian exit lies outside `0..bay_count`.
    ExitOutOfRange { bay: usize, bay_count: usize },
    /// A disabled bay lies outside `0..bay_count`.
    DisabledBayOutOfRange { bay: usize, bay_count: usize },
    DuplicateExit(usize),
    DuplicateDisabledBay(usize),
}

impl fmt::Display for LotConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LotConfigError::ZeroSize => write!(f, "Lot size must be at least 1"),
            LotConfigError::TooLarge { size } => {
                write!(f, "Lot size {size} is too large: {size}x{size} bays overflow")
            }
            LotConfigError::ExitOutOfRange { bay, bay_count } => write!(
                f,
                "Pedestrian exit {bay} is outside the lot (bays 0..{bay_count})"
            ),
            LotConfigError::DisabledBayOutOfRange { bay, bay_count } => write!(
                f,
                "Disabled bay {bay} is outside the lot (bays 0..{bay_count})"
            ),
            LotConfigError::DuplicateExit(bay) => {
                write!(f, "Pedestrian exit {bay} is listed more than once")
            }
            LotConfigError::DuplicateDisabledBay(bay) => {
                write!(f, "Disabled bay {bay} is listed more than once")
            }
        }
    }
}

impl std::error::Error for LotConfigError {}
