//! World to display coordinates
//!
//! The overlay shows positions relative to a session-owned origin, with +Y up
//! and in coarser units than world pixels.

use glam::Vec2;

/// `((p - origin).x, -(p - origin).y) / units`
pub fn display_position(world: Vec2, origin_offset: Vec2, units: f32) -> Vec2 {
    let adjusted = world - origin_offset;
    Vec2::new(adjusted.x, -adjusted.y) / units
}

/// Inverse of [`display_position`]
pub fn world_position(display: Vec2, origin_offset: Vec2, units: f32) -> Vec2 {
    let scaled = display * units;
    Vec2::new(scaled.x, -scaled.y) + origin_offset
}
