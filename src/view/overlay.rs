//! Debug overlay text

use glam::Vec2;

/// Screen position of the first overlay line
pub const OVERLAY_ORIGIN: Vec2 = Vec2::new(10.0, 10.0);
/// Vertical distance between overlay lines
pub const OVERLAY_LINE_HEIGHT: f32 = 20.0;

/// Overlay lines in draw order
pub fn debug_lines(tile_count: usize, display_pos: Vec2) -> [String; 2] {
    [
        format!("Background Tiles: {tile_count}"),
        format!("Player Position: {:.1}, {:.1}", display_pos.x, display_pos.y),
    ]
}

/// Screen position of overlay line `index`
pub fn line_position(index: usize) -> Vec2 {
    OVERLAY_ORIGIN + Vec2::new(0.0, index as f32 * OVERLAY_LINE_HEIGHT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines() {
        let [tiles, pos] = debug_lines(104, Vec2::new(1.26, -0.46));
        assert_eq!(tiles, "Background Tiles: 104");
        assert_eq!(pos, "Player Position: 1.3, -0.5");
    }

    #[test]
    fn test_line_positions() {
        assert_eq!(line_position(0), Vec2::new(10.0, 10.0));
        assert_eq!(line_position(1), Vec2::new(10.0, 30.0));
    }
}
