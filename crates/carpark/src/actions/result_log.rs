//! Bounded history of executed lot actions.
//!
//! Keeps the most recent [`LOG_CAPACITY`] `(action, result)` pairs so tests
//! and callers can see what the executor did on past ticks without owning
//! the queue.

use std::collections::VecDeque;

use bevy::prelude::*;

use super::{LotAction, LotActionError, LotActionResult};

/// Number of entries retained before the oldest is dropped.
pub const LOG_CAPACITY: usize = 64;

#[derive(Resource, Debug, Clone)]
pub struct LotActionLog {
    entries: VecDeque<(LotAction, LotActionResult)>,
}

impl Default for LotActionLog {
    fn default() -> Self {
        Self {
            entries: VecDeque::with_capacity(LOG_CAPACITY),
        }
    }
}

impl LotActionLog {
    /// Append an entry, dropping the oldest one once the log is full.
    pub fn push(&mut self, action: LotAction, result: LotActionResult) {
        if self.entries.len() == LOG_CAPACITY {
            self.entries.pop_front();
        }
        self.entries.push_back((action, result));
    }

    /// Up to `n` most recent entries, oldest first.
    pub fn recent(&self, n: usize) -> impl Iterator<Item = &(LotAction, LotActionResult)> + '_ {
        self.entries.iter().skip(self.entries.len().saturating_sub(n))
    }

    pub fn last_result(&self) -> Option<LotActionResult> {
        self.entries.back().map(|&(_, result)| result)
    }

    /// Results for a given bay, oldest first.
    pub fn results_for_bay(&self, bay: usize) -> impl Iterator<Item = LotActionResult> + '_ {
        self.entries
            .iter()
            .map(|&(_, result)| result)
            .filter(move |result| match result {
                LotActionResult::Error(LotActionError::BayNotOccupied { bay: b }) => *b == bay,
                other => other.bay() == Some(bay),
            })
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
