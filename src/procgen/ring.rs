//! Noisy circle of key points
//!
//! Point `i` sits at angle `i * TAU / count` on a circle whose radius is
//! perturbed by one uniform draw in `[-1, 1]` scaled by the irregularity.
//! Points are centered on the origin and are not grid-snapped.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::error::{GenError, Result};
use crate::polar_to_cartesian;

/// Deterministic RNG for a world seed
///
/// Same seed, same stream, on every platform this crate builds for.
pub fn seeded_rng(seed: i32) -> Pcg32 {
    Pcg32::seed_from_u64(seed as u32 as u64)
}

/// Generate `count` key points around the origin
pub fn generate_key_points(
    seed: i32,
    count: u32,
    radius: f32,
    irregularity: f32,
) -> Result<Vec<Vec2>> {
    if count == 0 {
        return Err(GenError::ZeroKeyPointCount);
    }
    if !(radius > 0.0) {
        return Err(GenError::NonPositiveRadius { radius });
    }
    if !(0.0..=1.0).contains(&irregularity) {
        return Err(GenError::IrregularityOutOfRange { irregularity });
    }

    let mut rng = seeded_rng(seed);
    let step = std::f32::consts::TAU / count as f32;

    let points = (0..count)
        .map(|i| {
            let angle = i as f32 * step;
            let noise = rng.random_range(-1.0f32..=1.0) * irregularity;
            polar_to_cartesian(radius * (1.0 + noise), angle)
        })
        .collect();

    Ok(points)
}
