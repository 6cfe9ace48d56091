//! Per-tick simulation
//!
//! Collision boxes, movement resolution and the world session. Single-threaded
//! and synchronous: the host calls `tick` once per frame.

pub mod collision;
pub mod movement;
pub mod state;
pub mod tick;

pub use collision::{CollisionBox, Rect};
pub use movement::{MoveOutcome, try_move};
pub use state::{Obstacle, Player, World};
pub use tick::{TickInput, movement_delta, tick};
