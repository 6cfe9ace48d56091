//! Boat entry point
//!
//! Headless driver: builds a world from the seed text on the command line (or
//! the default seed), runs a short scripted input sequence at a fixed
//! timestep and logs what a renderer would draw.

use glam::Vec2;

use boat::consts::*;
use boat::procgen::SeedSource;
use boat::sim::{TickInput, World, tick};
use boat::view::{Camera, RenderScale, TileField, debug_lines};
use boat::{Result, Settings};

/// Fixed frame time for the scripted run (60 Hz)
const FRAME_DT: f32 = 1.0 / 60.0;

/// Texture footprints the desktop build ships with
const PLAYER_TEXTURE: Vec2 = Vec2::new(16.0, 16.0);
const OBSTACLE_TEXTURE: Vec2 = Vec2::new(16.0, 16.0);
const BACKGROUND_TEXTURE: Vec2 = Vec2::new(32.0, 32.0);

fn main() {
    env_logger::init();

    if let Err(err) = run() {
        log::error!("{err}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let source = match std::env::args().nth(1) {
        Some(text) => SeedSource::Text(text),
        None => SeedSource::Fixed(DEFAULT_SEED),
    };
    log::info!("Boat (headless) starting with {source:?}");

    let settings = match std::env::var("BOAT_SETTINGS") {
        Ok(path) => {
            let json = std::fs::read_to_string(&path).map_err(|e| boat::GenError::InvalidConfig {
                field: "BOAT_SETTINGS",
                reason: format!("{path}: {e}"),
            })?;
            Settings::from_json(&json)?
        }
        Err(_) => Settings::default(),
    };

    let viewport = BASE_VIEWPORT;
    let scale = RenderScale::from_settings(viewport.y, &settings);
    let mut world = World::new(settings, &source, PLAYER_TEXTURE, OBSTACLE_TEXTURE, viewport)?;
    let mut camera = Camera::new(viewport);
    let mut tiles = TileField::new(BACKGROUND_TEXTURE, scale);

    // One second per direction, then a diagonal run toward the ring
    let script = [
        TickInput { right: true, ..Default::default() },
        TickInput { down: true, ..Default::default() },
        TickInput { left: true, ..Default::default() },
        TickInput { up: true, ..Default::default() },
        TickInput { right: true, down: true, ..Default::default() },
    ];

    let mut blocked = 0u32;
    for input in &script {
        for _ in 0..60 {
            if tick(&mut world, input, FRAME_DT).is_some_and(|o| o.blocked()) {
                blocked += 1;
            }
        }
        camera.follow(world.player.position, world.player.size * scale.factor());
        tiles.update(viewport, scale, world.player.position);

        let [tile_line, pos_line] =
            debug_lines(tiles.tile_count(), world.display_position(scale.factor()));
        log::info!("{input:?}: {tile_line} | {pos_line}");
    }

    println!(
        "seed={} obstacles={} final={} blocked_ticks={} camera={}",
        world.seed,
        world.obstacles().len(),
        world.player.position,
        blocked,
        camera.translation()
    );
    Ok(())
}
