use crate::model::grid::{BrightnessGrid, VelocityGrid};

/// Convert pixel brightness to note velocity.
///
/// White background becomes silence; everything else is halved and clamped at zero.
/// Solid black foreground therefore also comes out as 0, and only intermediate grays
/// (antialiased glyph edges) produce audible notes.
pub fn to_velocities(grid: &BrightnessGrid) -> VelocityGrid {
    grid.map(brightness_to_velocity)
}

fn brightness_to_velocity(brightness: u8) -> i8 {
    let masked = if brightness == 255 { 0 } else { brightness };
    // 254 / 2 = 127 so this always fits.
    ((masked / 2) as i8).max(0)
}
