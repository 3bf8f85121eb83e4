use bevy::prelude::*;

use super::LotAction;

/// Pending lot actions, executed in FIFO order.
#[derive(Resource, Debug, Clone, Default, PartialEq, Eq)]
pub struct LotActionQueue {
    pending: Vec<LotAction>,
}

impl LotActionQueue {
    pub fn push(&mut self, action: LotAction) {
        self.pending.push(action);
    }

    pub fn park(&mut self, vehicle: char) {
        self.push(LotAction::Park { vehicle });
    }

    pub fn unpark(&mut self, bay: usize) {
        self.push(LotAction::Unpark { bay });
    }

    pub fn drain(&mut self) -> Vec<LotAction> {
        self.pending.drain(..).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }
}
