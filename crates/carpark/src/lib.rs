//! Square car park lot with exit-nearest bay allocation.
//!
//! The [`Lot`] resource owns the geometry and occupancy. Inside a Bevy app,
//! mutations go through the [`actions`] queue so that park, unpark and
//! readers of the lot never interleave within a tick.

use bevy::prelude::*;

pub mod actions;
pub mod builder;
pub mod config;
pub mod invariant_checks;
pub mod lot;

#[cfg(test)]
pub mod test_harness;

pub use builder::LotBuilder;
pub use config::{LotConfig, LotConfigError};
pub use lot::Lot;

use invariant_checks::LotInvariantViolations;

// ---------------------------------------------------------------------------
// FixedUpdate phases
// ---------------------------------------------------------------------------

/// Ordered phases for lot systems in the `FixedUpdate` schedule.
///
/// Configured as a chain: `Actions` → `Validation`.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum LotSet {
    /// Drain the action queue and mutate the lot.
    Actions,
    /// Read-only checks on the post-action state.
    Validation,
}

// ---------------------------------------------------------------------------
// Plugin
// ---------------------------------------------------------------------------

/// Installs a [`Lot`] built from `config`, the action layer, and the
/// per-tick invariant checks.
pub struct CarparkPlugin {
    pub config: LotConfig,
}

impl CarparkPlugin {
    pub fn new(config: LotConfig) -> Self {
        Self { config }
    }
}

impl Plugin for CarparkPlugin {
    fn build(&self, app: &mut App) {
        info!(
            "Carpark: {0}x{0} lot, {1} pedestrian exit(s), {2} disabled bay(s)",
            self.config.size,
            self.config.pedestrian_exits.len(),
            self.config.disabled_bays.len()
        );

        app.insert_resource(Lot::from_config(self.config.clone()))
            .init_resource::<LotInvariantViolations>()
            .configure_sets(FixedUpdate, (LotSet::Actions, LotSet::Validation).chain())
            .add_systems(
                FixedUpdate,
                invariant_checks::validate_lot.in_set(LotSet::Validation),
            );

        app.add_plugins(actions::LotActionsPlugin);
    }
}
