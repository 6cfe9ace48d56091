//! Per-frame simulation step
//!
//! Turns raw directional key state and elapsed time into a player move.

use glam::Vec2;

use super::movement::MoveOutcome;
use super::state::World;

/// Directional key state for a single tick (W/S/A/D or arrows)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl TickInput {
    pub fn is_idle(&self) -> bool {
        self.direction() == Vec2::ZERO
    }

    /// Unnormalized direction; opposite keys cancel. Screen space, +Y is down.
    pub fn direction(&self) -> Vec2 {
        let axis = |neg: bool, pos: bool| (pos as i8 - neg as i8) as f32;
        Vec2::new(axis(self.left, self.right), axis(self.up, self.down))
    }
}

/// Displacement requested by `input` this tick
///
/// Each held key contributes `speed * dt` on its axis, so diagonals are faster
/// than straight moves.
pub fn movement_delta(input: &TickInput, speed: f32, dt: f32) -> Vec2 {
    input.direction() * speed * dt
}

/// Advance the world by `dt` seconds
pub fn tick(world: &mut World, input: &TickInput, dt: f32) -> Option<MoveOutcome> {
    if input.is_idle() {
        return None;
    }
    let delta = movement_delta(input, world.player.speed, dt);
    Some(world.move_player(delta))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::procgen::SeedSource;
    use crate::settings::Settings;

    fn test_world() -> World {
        World::new(
            Settings::default(),
            &SeedSource::Fixed(114514),
            Vec2::splat(8.0),
            Vec2::splat(16.0),
            Vec2::new(1280.0, 720.0),
        )
        .unwrap()
    }

    #[test]
    fn test_direction_mapping() {
        let up = TickInput { up: true, ..Default::default() };
        assert_eq!(up.direction(), Vec2::new(0.0, -1.0));

        let down_left = TickInput { down: true, left: true, ..Default::default() };
        assert_eq!(down_left.direction(), Vec2::new(-1.0, 1.0));

        let cancel = TickInput { left: true, right: true, ..Default::default() };
        assert!(cancel.is_idle());
    }

    #[test]
    fn test_delta_scales_with_speed_and_dt() {
        let input = TickInput { right: true, up: true, ..Default::default() };
        let delta = movement_delta(&input, 16.0, 0.5);
        assert_eq!(delta, Vec2::new(8.0, -8.0));
    }

    #[test]
    fn test_idle_tick_does_nothing() {
        let mut world = test_world();
        let start = world.player.position;
        assert!(tick(&mut world, &TickInput::default(), 1.0 / 60.0).is_none());
        assert_eq!(world.player.position, start);
    }

    #[test]
    fn test_tick_moves_player() {
        let mut world = test_world();
        let start = world.player.position;
        let input = TickInput { down: true, ..Default::default() };

        let outcome = tick(&mut world, &input, 0.25).unwrap();
        assert!(!outcome.blocked());
        assert_eq!(world.player.position, start + Vec2::new(0.0, 4.0));
        assert_eq!(world.player.collision.rect().min, world.player.position);
    }

    #[test]
    fn test_determinism() {
        // Two worlds with the same seed and inputs end in the same place
        let mut a = test_world();
        let mut b = test_world();
        let inputs = [
            TickInput { right: true, ..Default::default() },
            TickInput { right: true, down: true, ..Default::default() },
            TickInput::default(),
            TickInput { up: true, ..Default::default() },
        ];
        for _ in 0..200 {
            for input in &inputs {
                tick(&mut a, input, 1.0 / 60.0);
                tick(&mut b, input, 1.0 / 60.0);
            }
        }
        assert_eq!(a.player.position, b.player.position);
    }
}
