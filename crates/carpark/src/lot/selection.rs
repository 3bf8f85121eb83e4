//! Bay selection: the exit distance metric and the two searches built on it.
//!
//! Distance is measured along the flattened index line (`|exit - bay|`), not
//! on row/column coordinates. With no exits configured the distance of a bay
//! is its own index, so bays fill in ascending order.

use super::state::Lot;

/// Distance from `bay` to the nearest pedestrian exit along the index line.
///
/// Falls back to `bay` itself when `exits` is empty.
pub fn distance_to_nearest_exit(bay: usize, exits: &[usize]) -> usize {
    exits
        .iter()
        .map(|&exit| exit.abs_diff(bay))
        .min()
        .unwrap_or(bay)
}

impl Lot {
    /// Distance from `bay` to this lot's nearest pedestrian exit.
    pub fn exit_distance(&self, bay: usize) -> usize {
        distance_to_nearest_exit(bay, &self.pedestrian_exits)
    }

    /// Free disabled bay closest to an exit, scanning in declared order.
    /// On equal distance the earlier declared bay wins.
    ///
    /// Disabled bays that are also exits or that fall outside the grid are
    /// never candidates.
    pub fn nearest_free_disabled_bay(&self) -> Option<usize> {
        let bay_count = self.bay_count();
        self.disabled_bays
            .iter()
            .copied()
            .filter(|&bay| bay < bay_count)
            .filter(|&bay| !self.is_occupied(bay))
            .filter(|&bay| !self.is_pedestrian_exit(bay))
            .min_by_key(|&bay| self.exit_distance(bay))
    }

    /// Free non-exit bay closest to an exit, scanning ascending indices.
    /// On equal distance the lowest index wins.
    ///
    /// Disabled bays are eligible here.
    pub fn nearest_free_bay(&self) -> Option<usize> {
        (0..self.bay_count())
            .filter(|&bay| !self.is_occupied(bay))
            .filter(|&bay| !self.is_pedestrian_exit(bay))
            .min_by_key(|&bay| self.exit_distance(bay))
    }
}
