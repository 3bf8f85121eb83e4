//! The lot resource: fixed geometry, occupancy, and park/unpark.

use std::collections::BTreeMap;

use bevy::prelude::*;

use crate::config::LotConfig;

use super::constants::DISABLED_VEHICLE;

// =============================================================================
// Resource: lot geometry and occupancy
// =============================================================================

/// A square car park of `size * size` bays, indexed row-major from 0.
///
/// Geometry (size, pedestrian exits, disabled bays) is fixed at construction.
/// Occupancy maps a bay index to the character of the vehicle parked there;
/// a bay absent from the map is free.
#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub struct Lot {
    pub(super) size: usize,
    pub(super) pedestrian_exits: Vec<usize>,
    pub(super) disabled_bays: Vec<usize>,
    pub(super) parked: BTreeMap<usize, char>,
}

impl Lot {
    /// Build an empty lot. No validation is performed here, see
    /// [`LotConfig::validate`] for that.
    pub fn new(size: usize, pedestrian_exits: Vec<usize>, disabled_bays: Vec<usize>) -> Self {
        Self {
            size,
            pedestrian_exits,
            disabled_bays,
            parked: BTreeMap::new(),
        }
    }

    /// Build an empty lot from a configuration record.
    ///
    /// Bays listed both as exit and disabled bay are accepted and behave as
    /// exits; a warning names them.
    pub fn from_config(config: LotConfig) -> Self {
        let overlapping = config.overlapping_bays();
        if !overlapping.is_empty() {
            warn!(
                "Lot: bays {:?} are both pedestrian exits and disabled bays; treating them as exits",
                overlapping
            );
        }
        Self::new(config.size, config.pedestrian_exits, config.disabled_bays)
    }

    /// Side length of the square lot.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Total number of grid positions (`size * size`), exits included.
    ///
    /// Saturates at `usize::MAX` for an unvalidated size whose square
    /// overflows.
    pub fn bay_count(&self) -> usize {
        self.size.saturating_mul(self.size)
    }

    pub fn pedestrian_exits(&self) -> &[usize] {
        &self.pedestrian_exits
    }

    pub fn disabled_bays(&self) -> &[usize] {
        &self.disabled_bays
    }

    #[inline]
    pub fn is_pedestrian_exit(&self, bay: usize) -> bool {
        self.pedestrian_exits.contains(&bay)
    }

    #[inline]
    pub fn is_disabled_bay(&self, bay: usize) -> bool {
        self.disabled_bays.contains(&bay)
    }

    #[inline]
    pub fn is_occupied(&self, bay: usize) -> bool {
        self.parked.contains_key(&bay)
    }

    /// The vehicle parked in `bay`, if any.
    pub fn vehicle_at(&self, bay: usize) -> Option<char> {
        self.parked.get(&bay).copied()
    }

    /// Number of bays currently holding a vehicle.
    pub fn occupied_count(&self) -> usize {
        self.parked.len()
    }

    /// Occupied bays in ascending index order.
    pub fn parked(&self) -> impl Iterator<Item = (usize, char)> + '_ {
        self.parked.iter().map(|(&bay, &vehicle)| (bay, vehicle))
    }

    /// Bays still free for parking: `size² - exits - occupied`.
    ///
    /// Exits are counted as listed, so an unvalidated configuration with
    /// out-of-range exits still subtracts them. Saturates at zero.
    pub fn available_bays(&self) -> usize {
        self.bay_count()
            .saturating_sub(self.pedestrian_exits.len())
            .saturating_sub(self.parked.len())
    }

    // -------------------------------------------------------------------------
    // Park / unpark
    // -------------------------------------------------------------------------

    /// Park a vehicle of the given type in the free bay closest to a
    /// pedestrian exit, returning the chosen bay.
    ///
    /// A [`DISABLED_VEHICLE`] tries the disabled bays first and falls back to
    /// the general search when all of them are taken. Returns `None` and
    /// leaves the lot untouched when no bay is eligible.
    pub fn park(&mut self, vehicle: char) -> Option<usize> {
        let found = if vehicle == DISABLED_VEHICLE {
            self.nearest_free_disabled_bay()
                .or_else(|| self.nearest_free_bay())
        } else {
            self.nearest_free_bay()
        };
        let bay = found?;
        self.parked.insert(bay, vehicle);
        Some(bay)
    }

    /// Free `bay`. Returns true if a vehicle was parked there.
    pub fn unpark(&mut self, bay: usize) -> bool {
        self.parked.remove(&bay).is_some()
    }

    /// Write occupancy directly, bypassing bay selection.
    #[cfg(test)]
    pub(crate) fn insert_unchecked(&mut self, bay: usize, vehicle: char) {
        self.parked.insert(bay, vehicle);
    }
}

impl From<LotConfig> for Lot {
    fn from(config: LotConfig) -> Self {
        Self::from_config(config)
    }
}
