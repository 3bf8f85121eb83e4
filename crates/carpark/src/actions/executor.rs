//! Action executor system: drains the [`LotActionQueue`] each fixed-update
//! tick and applies every queued [`LotAction`] to the [`Lot`], recording
//! results in the [`LotActionLog`].

use bevy::prelude::*;

use crate::lot::{is_reserved_char, Lot, DISABLED_VEHICLE};

use super::result_log::LotActionLog;
use super::{LotAction, LotActionError, LotActionQueue, LotActionResult};

// ---------------------------------------------------------------------------
// System
// ---------------------------------------------------------------------------

/// Drains all pending actions from the queue and executes them in order.
pub fn execute_queued_actions(
    mut queue: ResMut<LotActionQueue>,
    mut log: ResMut<LotActionLog>,
    mut lot: ResMut<Lot>,
) {
    for action in queue.drain() {
        let result = apply_action(action, &mut lot);
        debug!("Lot action {:?} -> {:?}", action, result);
        log.push(action, result);
    }
}

// ---------------------------------------------------------------------------
// Dispatcher
// ---------------------------------------------------------------------------

/// Apply a single action to the lot.
pub fn apply_action(action: LotAction, lot: &mut Lot) -> LotActionResult {
    match action {
        LotAction::Park { vehicle } => execute_park(vehicle, lot),
        LotAction::Unpark { bay } => execute_unpark(bay, lot),
    }
}

fn execute_park(vehicle: char, lot: &mut Lot) -> LotActionResult {
    if vehicle != DISABLED_VEHICLE && is_reserved_char(vehicle) {
        warn!(
            "Lot: vehicle type '{}' is a reserved map character and will render as a lot feature",
            vehicle
        );
    }
    match lot.park(vehicle) {
        Some(bay) => LotActionResult::Parked { bay },
        None => LotActionResult::Error(LotActionError::NoBayAvailable),
    }
}

fn execute_unpark(bay: usize, lot: &mut Lot) -> LotActionResult {
    if lot.unpark(bay) {
        LotActionResult::Unparked { bay }
    } else {
        LotActionResult::Error(LotActionError::BayNotOccupied { bay })
    }
}
