//! Requests that can be queued against the lot.

use serde::{Deserialize, Serialize};

/// A single lot operation, applied by the executor in queue order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum LotAction {
    /// Park a vehicle of this type in the nearest eligible bay.
    Park { vehicle: char },
    /// Free the given bay.
    Unpark { bay: usize },
}
