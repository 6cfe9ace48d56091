//! Seed source to finished obstacle field

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::gap::fill_loop;
use super::orthogonal::fill_orthogonal;
use super::ring::generate_key_points;
use super::seed::{derive_count, derive_seed};
use crate::error::Result;
use crate::settings::{LayoutStyle, Settings};

/// Where a world seed comes from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SeedSource {
    /// A raw seed; the count is hashed from its decimal text
    Fixed(i32),
    /// User-entered seed text
    Text(String),
}

impl SeedSource {
    /// Resolve to `(seed, obstacle_count)`
    pub fn resolve(&self, max_count: u32) -> Result<(i32, u32)> {
        match self {
            SeedSource::Fixed(seed) => Ok((*seed, derive_count(&seed.to_string(), max_count)?)),
            SeedSource::Text(text) => Ok((derive_seed(text), derive_count(text, max_count)?)),
        }
    }
}

impl Default for SeedSource {
    fn default() -> Self {
        SeedSource::Fixed(crate::consts::DEFAULT_SEED)
    }
}

/// Inputs for one generation run
#[derive(Debug, Clone, PartialEq)]
pub struct FieldParams {
    pub seed: i32,
    /// Number of key points on the ring
    pub count: u32,
    /// Layout center in world space
    pub center: Vec2,
    pub radius: f32,
    pub irregularity: f32,
    /// Largest allowed spacing between consecutive obstacles
    pub max_gap: f32,
    pub style: LayoutStyle,
}

impl FieldParams {
    /// Derive generation parameters from host-supplied sizes
    ///
    /// The gap is the obstacle's smaller collision dimension, so neighbouring
    /// obstacle boxes always touch or overlap.
    pub fn from_settings(
        settings: &Settings,
        source: &SeedSource,
        obstacle_size: Vec2,
        area_size: Vec2,
    ) -> Result<Self> {
        settings.validate()?;
        let (seed, count) = source.resolve(settings.max_obstacle_count)?;
        Ok(Self {
            seed,
            count,
            center: settings.player_spawn,
            radius: area_size.min_element() * settings.ring_radius_fraction,
            irregularity: settings.irregularity,
            max_gap: obstacle_size.min_element() * settings.collision_multiplier,
            style: settings.layout_style,
        })
    }
}

/// Generated obstacle positions for one seed
///
/// Immutable once built; a new seed builds a new field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObstacleField {
    pub seed: i32,
    pub key_point_count: u32,
    pub positions: Vec<Vec2>,
}

impl ObstacleField {
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// Run the full pipeline: key points, translate to center, fill
pub fn generate_field(params: &FieldParams) -> Result<ObstacleField> {
    let keys: Vec<Vec2> =
        generate_key_points(params.seed, params.count, params.radius, params.irregularity)?
            .into_iter()
            .map(|p| p + params.center)
            .collect();

    let positions = match params.style {
        LayoutStyle::Ring => fill_loop(&keys, params.max_gap)?,
        LayoutStyle::Orthogonal => fill_orthogonal(&keys, params.max_gap)?,
    };

    log::info!(
        "Generated {} field: seed={}, key points={}, obstacles={}",
        params.style.as_str(),
        params.seed,
        params.count,
        positions.len()
    );

    Ok(ObstacleField {
        seed: params.seed,
        key_point_count: params.count,
        positions,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::procgen::gap::max_cyclic_gap;

    fn params(style: LayoutStyle) -> FieldParams {
        FieldParams::from_settings(
            &Settings::with_layout(style),
            &SeedSource::Fixed(114514),
            Vec2::new(16.0, 16.0),
            Vec2::new(1280.0, 720.0),
        )
        .unwrap()
    }

    #[test]
    fn test_fixed_seed_matches_text_count() {
        let (seed, count) = SeedSource::Fixed(114514).resolve(50).unwrap();
        assert_eq!(seed, 114514);
        assert_eq!(count, 37);

        let (seed, count) = SeedSource::Text("114514".into()).resolve(50).unwrap();
        assert_eq!(seed, 920_538_936);
        assert_eq!(count, 37);
    }

    #[test]
    fn test_params_from_sizes() {
        let p = params(LayoutStyle::Ring);
        assert_eq!(p.count, 37);
        assert!((p.radius - 720.0 * 0.45).abs() < 1e-3);
        assert_eq!(p.max_gap, 32.0);
        assert_eq!(p.center, Vec2::new(100.0, 100.0));
    }

    #[test]
    fn test_ring_field_is_closed_and_deterministic() {
        let p = params(LayoutStyle::Ring);
        let a = generate_field(&p).unwrap();
        let b = generate_field(&p).unwrap();
        assert_eq!(a, b);
        assert!(a.len() >= 37);
        assert!(max_cyclic_gap(&a.positions) <= p.max_gap + 1e-3);
    }

    #[test]
    fn test_orthogonal_field_is_closed() {
        let p = params(LayoutStyle::Orthogonal);
        let field = generate_field(&p).unwrap();
        assert!(!field.is_empty());
        assert!(max_cyclic_gap(&field.positions) <= p.max_gap + 1e-3);
    }

    #[test]
    fn test_zero_max_count_rejected() {
        let mut settings = Settings::default();
        settings.max_obstacle_count = 0;
        let result = FieldParams::from_settings(
            &settings,
            &SeedSource::default(),
            Vec2::splat(16.0),
            Vec2::splat(500.0),
        );
        assert!(result.is_err());
    }
}
