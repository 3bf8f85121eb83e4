//! Reserved characters used by the lot renderer and bay allocator.

// =============================================================================
// Vehicle markers
// =============================================================================

/// Vehicle type of a disabled driver. Parking a `'D'` vehicle searches the
/// disabled bays before falling back to the general search.
pub const DISABLED_VEHICLE: char = 'D';

// =============================================================================
// Render characters
// =============================================================================

/// A pedestrian exit. Never holds a vehicle.
pub const EXIT_CHAR: char = '=';

/// An empty disabled bay.
pub const FREE_DISABLED_BAY_CHAR: char = '@';

/// An empty ordinary bay.
pub const FREE_BAY_CHAR: char = 'U';

/// Returns true for characters that carry a fixed meaning in the rendered
/// lot (`U`, `D`, `@` and `=`).
///
/// A vehicle parked under any of these (other than `D` itself) renders
/// indistinguishably from a lot feature.
pub fn is_reserved_char(ch: char) -> bool {
    matches!(
        ch,
        EXIT_CHAR | FREE_DISABLED_BAY_CHAR | FREE_BAY_CHAR | DISABLED_VEHICLE
    )
}
