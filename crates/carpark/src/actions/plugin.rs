//! Plugin that wires up the lot actions subsystem: queue, executor, and log.

use bevy::prelude::*;

use super::executor::execute_queued_actions;
use super::result_log::LotActionLog;
use super::LotActionQueue;
use crate::LotSet;

/// Registers the action queue, result log, and executor system.
pub struct LotActionsPlugin;

impl Plugin for LotActionsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<LotActionQueue>();
        app.init_resource::<LotActionLog>();

        app.add_systems(
            FixedUpdate,
            execute_queued_actions.in_set(LotSet::Actions),
        );
    }
}
