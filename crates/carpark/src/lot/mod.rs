//! Square car park lot.
//!
//! Bays are laid out as a `size x size` grid indexed row-major. Some bays are
//! pedestrian exits (never parkable), some are reserved for disabled drivers
//! (preferred by `D` vehicles, usable by anyone).
//!
//! ## Allocation
//! A vehicle goes to the free bay with the smallest distance to a pedestrian
//! exit, measured along the flattened index (`|exit - bay|`). Ties go to the
//! first bay scanned. `D` vehicles scan the disabled bays first.
//!
//! ## Rendering
//! - `=` pedestrian exit
//! - `@` free disabled bay
//! - `U` free bay
//! - any other character: the vehicle parked there

pub mod constants;
pub mod render;
pub mod selection;
pub mod state;

#[cfg(test)]
mod tests_render;

pub use constants::*;
pub use selection::distance_to_nearest_exit;
pub use state::Lot;
