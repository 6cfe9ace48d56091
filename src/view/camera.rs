//! Camera that keeps the player centered

use glam::Vec2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// World point shown at the viewport center
    pub position: Vec2,
    pub viewport: Vec2,
}

impl Camera {
    pub fn new(viewport: Vec2) -> Self {
        Self {
            position: Vec2::ZERO,
            viewport,
        }
    }

    pub fn update_viewport(&mut self, viewport: Vec2) {
        self.viewport = viewport;
    }

    /// Center on the middle of a sprite at `target` with on-screen `size`
    pub fn follow(&mut self, target: Vec2, size: Vec2) {
        self.position = target + size / 2.0;
    }

    /// Translation applied to world coordinates before drawing
    pub fn translation(&self) -> Vec2 {
        -(self.position - self.viewport / 2.0)
    }

    pub fn world_to_screen(&self, world: Vec2) -> Vec2 {
        world + self.translation()
    }

    pub fn screen_to_world(&self, screen: Vec2) -> Vec2 {
        screen - self.translation()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_followed_sprite_is_centered() {
        let mut cam = Camera::new(Vec2::new(1280.0, 720.0));
        cam.follow(Vec2::new(100.0, 100.0), Vec2::new(16.0, 16.0));
        assert_eq!(cam.world_to_screen(Vec2::new(108.0, 108.0)), Vec2::new(640.0, 360.0));
        assert_eq!(cam.translation(), Vec2::new(532.0, 252.0));
    }

    #[test]
    fn test_screen_round_trip() {
        let mut cam = Camera::new(Vec2::new(800.0, 600.0));
        cam.follow(Vec2::new(-40.0, 75.0), Vec2::ZERO);
        let p = Vec2::new(13.0, -2.0);
        assert_eq!(cam.screen_to_world(cam.world_to_screen(p)), p);
    }
}
