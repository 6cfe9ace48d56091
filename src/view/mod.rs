//! Host-facing layout helpers
//!
//! Plain arithmetic the renderer needs each frame: sprite scale, camera
//! translation, visible background tiles, overlay coordinates and text.
//! Nothing here draws.

pub mod background;
pub mod camera;
pub mod coords;
pub mod overlay;
pub mod scale;

pub use background::TileField;
pub use camera::Camera;
pub use coords::display_position;
pub use overlay::debug_lines;
pub use scale::RenderScale;
