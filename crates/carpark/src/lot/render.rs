//! Text rendering of the lot.
//!
//! One line per row of bays. Even rows read left to right, odd rows right to
//! left, following the lane as it turns around at the end of each row:
//!
//! ```text
//! row 0:  0  1  2  ->
//! row 1:  5  4  3  <-
//! row 2:  6  7  8  ->
//! ```

use std::fmt;

use super::constants::{EXIT_CHAR, FREE_BAY_CHAR, FREE_DISABLED_BAY_CHAR};
use super::state::Lot;

impl Lot {
    /// Character for a single bay.
    ///
    /// Priority: exit > free disabled bay > parked vehicle > free bay.
    pub fn bay_char(&self, bay: usize) -> char {
        if self.is_pedestrian_exit(bay) {
            return EXIT_CHAR;
        }

        let vehicle = self.vehicle_at(bay);
        if self.is_disabled_bay(bay) && vehicle.is_none() {
            return FREE_DISABLED_BAY_CHAR;
        }

        vehicle.unwrap_or(FREE_BAY_CHAR)
    }

    /// Render row `row` in lane order (reversed on odd rows).
    pub fn render_row(&self, row: usize) -> String {
        let start = row.saturating_mul(self.size);
        let bays = start..start.saturating_add(self.size);
        if row % 2 == 0 {
            bays.map(|bay| self.bay_char(bay)).collect()
        } else {
            bays.rev().map(|bay| self.bay_char(bay)).collect()
        }
    }

    /// Render the whole lot, rows joined by `\n` without a trailing newline.
    pub fn render(&self) -> String {
        (0..self.size)
            .map(|row| self.render_row(row))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl fmt::Display for Lot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
