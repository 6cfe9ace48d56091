//! Scrolling tiled background
//!
//! Tracks which background tiles cover the viewport around the player,
//! padded by one tile on every side so scrolling never shows an edge.

use std::collections::HashSet;

use glam::{IVec2, Vec2};

use super::scale::RenderScale;

#[derive(Debug, Clone)]
pub struct TileField {
    /// Unscaled background texture size
    texture_size: Vec2,
    tile_size: Vec2,
    visible: HashSet<IVec2>,
}

impl TileField {
    pub fn new(texture_size: Vec2, scale: RenderScale) -> Self {
        Self {
            texture_size,
            tile_size: texture_size * scale.factor(),
            visible: HashSet::new(),
        }
    }

    /// Recompute the visible tile set for the current viewport and player
    pub fn update(&mut self, viewport: Vec2, scale: RenderScale, player: Vec2) {
        self.tile_size = self.texture_size * scale.factor();
        if !(self.tile_size.x > 0.0 && self.tile_size.y > 0.0) {
            self.visible.clear();
            return;
        }

        let half_view = (viewport + self.tile_size * 2.0) / 2.0;
        let start = ((player - half_view) / self.tile_size).floor().as_ivec2();
        let end = ((player + half_view) / self.tile_size).floor().as_ivec2();

        self.visible.clear();
        for x in start.x..=end.x {
            for y in start.y..=end.y {
                self.visible.insert(IVec2::new(x, y));
            }
        }
    }

    pub fn tile_count(&self) -> usize {
        self.visible.len()
    }

    pub fn tile_size(&self) -> Vec2 {
        self.tile_size
    }

    pub fn contains(&self, tile: IVec2) -> bool {
        self.visible.contains(&tile)
    }

    /// World-space top-left corner of every visible tile, row-major
    pub fn tile_origins(&self) -> Vec<Vec2> {
        let mut tiles: Vec<IVec2> = self.visible.iter().copied().collect();
        tiles.sort_by_key(|t| (t.y, t.x));
        tiles
            .into_iter()
            .map(|t| t.as_vec2() * self.tile_size)
            .collect()
    }
}
