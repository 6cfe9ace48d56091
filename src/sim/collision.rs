//! Axis-aligned collision boxes
//!
//! A box is anchored to its entity's position. Its size is the entity's
//! texture footprint times a fixed multiplier, and its origin is shifted by a
//! relative offset measured in half-sizes. Size is fixed at construction;
//! only the origin follows the entity.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::COLLISION_SIZE_MULTIPLIER;

/// Axis-aligned rectangle in world space (min corner + extent)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub min: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(min: Vec2, size: Vec2) -> Self {
        Self { min, size }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.min.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.min.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.min.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.min.y + self.size.y
    }

    pub fn center(&self) -> Vec2 {
        self.min + self.size / 2.0
    }

    /// Open-interval overlap: shared edges don't count
    #[inline]
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }
}

/// Collision box owned by a player or obstacle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollisionBox {
    rect: Rect,
    /// Offset from the anchor in half-sizes of the box
    relative: Vec2,
    multiplier: f32,
}

impl CollisionBox {
    /// Box with the default 2x size multiplier
    pub fn new(anchor: Vec2, base_size: Vec2, relative_x: f32, relative_y: f32) -> Self {
        Self::with_multiplier(anchor, base_size, relative_x, relative_y, COLLISION_SIZE_MULTIPLIER)
    }

    pub fn with_multiplier(
        anchor: Vec2,
        base_size: Vec2,
        relative_x: f32,
        relative_y: f32,
        multiplier: f32,
    ) -> Self {
        let size = base_size * multiplier;
        let relative = Vec2::new(relative_x, relative_y);
        Self {
            rect: Rect::new(origin(anchor, size, relative), size),
            relative,
            multiplier,
        }
    }

    /// Move the box to a new anchor
    ///
    /// `base_size` only feeds the offset; the box keeps the extent it was built
    /// with, so repeated calls with the same inputs land on the same origin.
    pub fn update_position(
        &mut self,
        anchor: Vec2,
        base_size: Vec2,
        relative_x: f32,
        relative_y: f32,
    ) {
        self.relative = Vec2::new(relative_x, relative_y);
        self.rect.min = origin(anchor, base_size * self.multiplier, self.relative);
    }

    /// Move the box to a new anchor keeping its current offset
    pub fn move_to(&mut self, anchor: Vec2) {
        self.rect.min = origin(anchor, self.rect.size, self.relative);
    }

    /// Copy of this box anchored elsewhere
    pub fn moved_to(&self, anchor: Vec2) -> Self {
        let mut moved = self.clone();
        moved.move_to(anchor);
        moved
    }

    #[inline]
    pub fn rect(&self) -> &Rect {
        &self.rect
    }

    pub fn size(&self) -> Vec2 {
        self.rect.size
    }

    pub fn intersects(&self, other: &CollisionBox) -> bool {
        self.rect.intersects(&other.rect)
    }
}

fn origin(anchor: Vec2, size: Vec2, relative: Vec2) -> Vec2 {
    anchor + relative * (size / 2.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_size_is_doubled() {
        let b = CollisionBox::new(Vec2::new(10.0, 20.0), Vec2::new(16.0, 8.0), 0.0, 0.0);
        assert_eq!(b.size(), Vec2::new(32.0, 16.0));
        assert_eq!(b.rect().min, Vec2::new(10.0, 20.0));
    }

    #[test]
    fn test_relative_offset_in_half_sizes() {
        // Offset -1 on both axes centers the box on its anchor
        let b = CollisionBox::new(Vec2::new(100.0, 100.0), Vec2::new(10.0, 10.0), -1.0, -1.0);
        assert_eq!(b.rect().min, Vec2::new(90.0, 90.0));
        assert_eq!(b.rect().center(), Vec2::new(100.0, 100.0));
    }

    #[test]
    fn test_update_position_is_idempotent() {
        let base = Vec2::new(12.0, 12.0);
        let mut b = CollisionBox::new(Vec2::ZERO, base, 0.5, -0.5);
        b.update_position(Vec2::new(40.0, 40.0), base, 0.5, -0.5);
        let first = *b.rect();
        b.update_position(Vec2::new(40.0, 40.0), base, 0.5, -0.5);
        assert_eq!(*b.rect(), first);
        assert_eq!(first.min, Vec2::new(46.0, 34.0));
        assert_eq!(first.size, Vec2::new(24.0, 24.0));
    }

    #[test]
    fn test_move_keeps_size() {
        let mut b = CollisionBox::with_multiplier(Vec2::ZERO, Vec2::splat(4.0), 0.0, 0.0, 3.0);
        b.move_to(Vec2::new(-50.0, 7.0));
        assert_eq!(b.size(), Vec2::splat(12.0));
        assert_eq!(b.rect().min, Vec2::new(-50.0, 7.0));
    }

    #[test]
    fn test_contained_box_intersects() {
        let obstacle = CollisionBox::new(Vec2::ZERO, Vec2::splat(50.0), 0.0, 0.0);
        let player = CollisionBox::new(Vec2::new(20.0, 20.0), Vec2::splat(5.0), 0.0, 0.0);
        assert!(player.intersects(&obstacle));
        assert!(obstacle.intersects(&player));
    }

    #[test]
    fn test_touching_edges_do_not_intersect() {
        let a = CollisionBox::new(Vec2::ZERO, Vec2::splat(10.0), 0.0, 0.0);
        let right = CollisionBox::new(Vec2::new(20.0, 0.0), Vec2::splat(10.0), 0.0, 0.0);
        let below = CollisionBox::new(Vec2::new(0.0, 20.0), Vec2::splat(10.0), 0.0, 0.0);
        let corner = CollisionBox::new(Vec2::new(20.0, 20.0), Vec2::splat(10.0), 0.0, 0.0);
        assert!(!a.intersects(&right));
        assert!(!a.intersects(&below));
        assert!(!a.intersects(&corner));

        let overlapping = CollisionBox::new(Vec2::new(19.9, 0.0), Vec2::splat(10.0), 0.0, 0.0);
        assert!(a.intersects(&overlapping));
    }

    proptest! {
        #[test]
        fn prop_intersection_is_symmetric(
            ax in -100.0f32..100.0, ay in -100.0f32..100.0,
            bx in -100.0f32..100.0, by in -100.0f32..100.0,
            aw in 0.5f32..40.0, ah in 0.5f32..40.0,
            bw in 0.5f32..40.0, bh in 0.5f32..40.0,
        ) {
            let a = CollisionBox::new(Vec2::new(ax, ay), Vec2::new(aw, ah), 0.0, 0.0);
            let b = CollisionBox::new(Vec2::new(bx, by), Vec2::new(bw, bh), 0.0, 0.0);
            prop_assert_eq!(a.intersects(&b), b.intersects(&a));
        }
    }
}
