//! Serialized access to the [`Lot`](crate::lot::Lot).
//!
//! Callers push [`LotAction`]s into the [`LotActionQueue`]; the executor
//! drains the queue once per `FixedUpdate` tick while holding the only
//! mutable borrow of the lot, and records every outcome in the
//! [`LotActionLog`].

pub mod actions;
pub mod executor;
pub mod plugin;
pub mod queue;
pub mod result_log;
pub mod results;

pub use actions::*;
pub use executor::execute_queued_actions;
pub use plugin::LotActionsPlugin;
pub use queue::*;
pub use result_log::LotActionLog;
pub use results::*;
