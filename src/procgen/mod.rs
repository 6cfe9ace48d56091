//! Deterministic obstacle generation
//!
//! Seed text → seed and count → key points on a noisy ring → filled closed loop.
//! Everything here is pure: same inputs, same positions.

pub mod field;
pub mod gap;
pub mod orthogonal;
pub mod ring;
pub mod seed;

pub use field::{FieldParams, ObstacleField, SeedSource, generate_field};
pub use gap::{fill_loop, max_cyclic_gap};
pub use orthogonal::fill_orthogonal;
pub use ring::generate_key_points;
pub use seed::{derive_count, derive_seed};
