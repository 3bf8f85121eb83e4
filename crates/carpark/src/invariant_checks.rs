//! Runtime invariant guards for lot occupancy.
//!
//! Runs every fixed-update tick after the action executor and checks that
//! occupancy never holds a pedestrian exit, never exceeds the parkable bay
//! count, and never references a bay outside the grid. Violations are logged
//! and counted; the lot is not modified.

use bevy::prelude::*;

use crate::lot::Lot;

/// Number of occupancy invariant violations found by the last validation
/// pass. Used by integration tests.
#[derive(Resource, Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct LotInvariantViolations {
    /// Occupied bays that are pedestrian exits.
    pub occupied_exits: u32,
    /// Set when more bays are occupied than the lot can hold.
    pub over_capacity: u32,
    /// Occupied bays outside `0..size*size`.
    pub out_of_range: u32,
}

impl LotInvariantViolations {
    pub fn total(&self) -> u32 {
        self.occupied_exits + self.over_capacity + self.out_of_range
    }

    pub fn is_clean(&self) -> bool {
        self.total() == 0
    }
}

/// Count invariant violations in the lot's current occupancy.
pub fn check_lot_invariants(lot: &Lot) -> LotInvariantViolations {
    let mut violations = LotInvariantViolations::default();
    let bay_count = lot.bay_count();

    for (bay, _) in lot.parked() {
        if lot.is_pedestrian_exit(bay) {
            violations.occupied_exits += 1;
        }
        if bay >= bay_count {
            violations.out_of_range += 1;
        }
    }

    let parkable = bay_count.saturating_sub(lot.pedestrian_exits().len());
    if lot.occupied_count() > parkable {
        violations.over_capacity += 1;
    }

    violations
}

/// System: validate the lot and record the violation counts.
pub fn validate_lot(lot: Res<Lot>, mut violations: ResMut<LotInvariantViolations>) {
    let found = check_lot_invariants(&lot);

    if found.occupied_exits > 0 {
        warn!(
            "Invariant violation: {} pedestrian exit(s) hold a vehicle",
            found.occupied_exits
        );
    }
    if found.over_capacity > 0 {
        warn!(
            "Invariant violation: {} bays occupied but only {} are parkable",
            lot.occupied_count(),
            lot.bay_count()
                .saturating_sub(lot.pedestrian_exits().len())
        );
    }
    if found.out_of_range > 0 {
        warn!(
            "Invariant violation: {} occupied bay(s) outside 0..{}",
            found.out_of_range,
            lot.bay_count()
        );
    }

    *violations = found;
}
