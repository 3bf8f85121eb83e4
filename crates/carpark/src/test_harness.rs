//! # TestLot — headless integration test harness
//!
//! Wraps a `bevy::app::App` with `MinimalPlugins` + `CarparkPlugin` so the
//! action queue, executor and invariant checks run exactly as they would in
//! a full app, without a window or renderer.

use bevy::app::App;
use bevy::prelude::*;

use crate::actions::{LotAction, LotActionLog, LotActionQueue, LotActionResult};
use crate::config::LotConfig;
use crate::invariant_checks::LotInvariantViolations;
use crate::lot::Lot;
use crate::CarparkPlugin;

/// A headless Bevy App wrapping `CarparkPlugin` for integration testing.
///
/// Queue actions, call `tick()` to run the executor, then assert on the lot
/// and the action log.
pub struct TestLot {
    app: App,
}

impl TestLot {
    // -----------------------------------------------------------------------
    // Constructors
    // -----------------------------------------------------------------------

    pub fn new(config: LotConfig) -> Self {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.add_plugins(CarparkPlugin::new(config));
        Self { app }
    }

    /// A `size x size` lot with no exits and no disabled bays.
    pub fn square(size: usize) -> Self {
        Self::new(LotConfig::new(size, Vec::new(), Vec::new()))
    }

    // -----------------------------------------------------------------------
    // Actions
    // -----------------------------------------------------------------------

    /// Queue an action for the next tick.
    pub fn queue(&mut self, action: LotAction) -> &mut Self {
        self.app
            .world_mut()
            .resource_mut::<LotActionQueue>()
            .push(action);
        self
    }

    pub fn queue_park(&mut self, vehicle: char) -> &mut Self {
        self.queue(LotAction::Park { vehicle })
    }

    pub fn queue_unpark(&mut self, bay: usize) -> &mut Self {
        self.queue(LotAction::Unpark { bay })
    }

    /// Queue a single action, run one tick, and return its result.
    pub fn run(&mut self, action: LotAction) -> Option<LotActionResult> {
        self.queue(action);
        self.tick(1);
        self.log().last_result()
    }

    // -----------------------------------------------------------------------
    // Simulation
    // -----------------------------------------------------------------------

    /// Run N fixed-update ticks by directly executing the `FixedUpdate`
    /// schedule, bypassing Bevy's time system.
    pub fn tick(&mut self, n: u32) {
        for _ in 0..n {
            self.app.world_mut().run_schedule(FixedUpdate);
        }
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    pub fn world_mut(&mut self) -> &mut World {
        self.app.world_mut()
    }

    pub fn resource<T: Resource>(&self) -> &T {
        self.app.world().resource::<T>()
    }

    pub fn lot(&self) -> &Lot {
        self.resource::<Lot>()
    }

    pub fn log(&self) -> &LotActionLog {
        self.resource::<LotActionLog>()
    }

    pub fn violations(&self) -> LotInvariantViolations {
        *self.resource::<LotInvariantViolations>()
    }

    pub fn pending_actions(&self) -> usize {
        self.resource::<LotActionQueue>().len()
    }
}
