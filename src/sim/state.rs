//! World session and its entities
//!
//! The world owns the obstacle list for the current seed and the player.
//! Re-seeding builds a whole new list before swapping it in, so collision
//! checks never see a half-built field.

use std::collections::HashSet;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::CollisionBox;
use super::movement::{MoveOutcome, try_move};
use super::tick::TickInput;
use crate::error::Result;
use crate::procgen::{FieldParams, SeedSource, generate_field};
use crate::settings::Settings;

/// The player-controlled craft
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub position: Vec2,
    /// Texture footprint (unscaled)
    pub size: Vec2,
    /// World units per second
    pub speed: f32,
    pub collision: CollisionBox,
}

impl Player {
    pub fn new(position: Vec2, size: Vec2, settings: &Settings) -> Self {
        Self {
            position,
            size,
            speed: settings.player_speed_factor * size.x,
            collision: CollisionBox::with_multiplier(
                position,
                size,
                0.0,
                0.0,
                settings.collision_multiplier,
            ),
        }
    }

    /// Attempt a move against the given obstacles, committing it if clear
    pub fn step<'a>(
        &mut self,
        delta: Vec2,
        obstacles: impl IntoIterator<Item = &'a CollisionBox>,
    ) -> MoveOutcome {
        let outcome = try_move(self.position, delta, &mut self.collision, obstacles);
        self.position = outcome.position();
        outcome
    }

    /// Center of the scaled sprite, used by the overlay
    pub fn center(&self, scale: f32) -> Vec2 {
        self.position + self.size * scale / 2.0
    }
}

/// A placed rock; never moves
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obstacle {
    position: Vec2,
    collision: CollisionBox,
}

impl Obstacle {
    pub fn new(position: Vec2, size: Vec2, multiplier: f32) -> Self {
        Self {
            position,
            collision: CollisionBox::with_multiplier(position, size, 0.0, 0.0, multiplier),
        }
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn collision(&self) -> &CollisionBox {
        &self.collision
    }
}

/// One play session: settings, current field and the player
#[derive(Debug, Clone)]
pub struct World {
    pub settings: Settings,
    /// Seed of the current field
    pub seed: i32,
    /// Hashed key point count of the current field
    pub obstacle_count: u32,
    pub player: Player,
    obstacles: Vec<Obstacle>,
    obstacle_size: Vec2,
    area_size: Vec2,
}

impl World {
    /// Create a world and generate its first field
    pub fn new(
        settings: Settings,
        source: &SeedSource,
        player_size: Vec2,
        obstacle_size: Vec2,
        area_size: Vec2,
    ) -> Result<Self> {
        let player = Player::new(settings.player_spawn, player_size, &settings);
        let mut world = Self {
            settings,
            seed: 0,
            obstacle_count: 0,
            player,
            obstacles: Vec::new(),
            obstacle_size,
            area_size,
        };
        world.reseed(source)?;
        Ok(world)
    }

    /// Replace the obstacle field with one generated from `source`
    ///
    /// On error the current field is left untouched. A player caught inside
    /// the new field is sent back to the spawn point.
    pub fn reseed(&mut self, source: &SeedSource) -> Result<()> {
        let params =
            FieldParams::from_settings(&self.settings, source, self.obstacle_size, self.area_size)?;
        let field = generate_field(&params)?;

        // Orthogonal paths can revisit nodes; one rock per distinct position
        let multiplier = self.settings.collision_multiplier;
        let mut placed = HashSet::new();
        let obstacles: Vec<Obstacle> = field
            .positions
            .iter()
            .filter(|p| placed.insert((p.x.to_bits(), p.y.to_bits())))
            .map(|&p| Obstacle::new(p, self.obstacle_size, multiplier))
            .collect();

        if obstacles
            .iter()
            .any(|o| o.collision().intersects(&self.player.collision))
        {
            let spawn = self.settings.player_spawn;
            log::info!(
                "Player at {} overlaps the new field, moving to spawn {}",
                self.player.position,
                spawn
            );
            self.player.position = spawn;
            self.player.collision.move_to(spawn);
        }

        self.obstacles = obstacles;
        self.seed = field.seed;
        self.obstacle_count = field.key_point_count;

        log::info!(
            "World seeded: seed={}, count={}, obstacles={}",
            self.seed,
            self.obstacle_count,
            self.obstacles.len()
        );
        Ok(())
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn obstacle_boxes(&self) -> impl Iterator<Item = &CollisionBox> {
        self.obstacles.iter().map(Obstacle::collision)
    }

    /// Advance one frame of directional input
    pub fn tick(&mut self, input: &TickInput, dt: f32) -> Option<MoveOutcome> {
        super::tick::tick(self, input, dt)
    }

    /// Move the player by `delta` against the live obstacle set
    pub fn move_player(&mut self, delta: Vec2) -> MoveOutcome {
        let boxes = self.obstacles.iter().map(Obstacle::collision);
        self.player.step(delta, boxes)
    }

    /// Player center in overlay coordinates
    pub fn display_position(&self, scale: f32) -> Vec2 {
        crate::view::coords::display_position(
            self.player.center(scale),
            self.settings.origin_offset,
            self.settings.display_units,
        )
    }
}
