//! Boat - top-down obstacle course core
//!
//! Core modules:
//! - `procgen`: Deterministic obstacle field generation (seed hashing, noisy ring, gap filling)
//! - `sim`: Collision boxes, movement resolution and the world session
//! - `view`: Scale, camera, background tiles and overlay arithmetic for the host renderer
//! - `settings`: Data-driven world configuration

pub mod error;
pub mod procgen;
pub mod settings;
pub mod sim;
pub mod view;

pub use error::{GenError, Result};
pub use settings::{LayoutStyle, Settings};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    use glam::Vec2;

    /// Seed used when the player hasn't entered one
    pub const DEFAULT_SEED: i32 = 114514;
    /// Upper bound for the hashed obstacle count
    pub const DEFAULT_MAX_OBSTACLES: u32 = 50;

    /// Collision boxes are this many times the texture footprint
    pub const COLLISION_SIZE_MULTIPLIER: f32 = 2.0;

    /// Player start position (world pixels)
    pub const PLAYER_SPAWN: Vec2 = Vec2::new(100.0, 100.0);

    /// World position shown as (0, 0) in the overlay
    pub const ORIGIN_OFFSET: Vec2 = Vec2::new(164.0, 164.0);
    /// World pixels per overlay unit
    pub const DISPLAY_UNITS: f32 = 50.0;

    /// Window size the game was laid out for
    pub const BASE_VIEWPORT: Vec2 = Vec2::new(1280.0, 720.0);
    pub const BASE_VIEWPORT_HEIGHT: f32 = 720.0;
    /// Sprite scale at the base viewport height
    pub const BASE_TEXTURE_SCALE: f32 = 2.0;
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}
