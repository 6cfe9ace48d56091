//! World settings
//!
//! Loaded from JSON by the host; every field falls back to its default.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{GenError, Result};

/// Shape of the generated obstacle layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LayoutStyle {
    /// Noisy circle with straight-line gap filling
    #[default]
    Ring,
    /// Grid-snapped key points joined by axis-aligned paths (maze-like)
    Orthogonal,
}

impl LayoutStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            LayoutStyle::Ring => "ring",
            LayoutStyle::Orthogonal => "orthogonal",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "ring" | "circle" => Some(LayoutStyle::Ring),
            "orthogonal" | "ortho" | "maze" => Some(LayoutStyle::Orthogonal),
            _ => None,
        }
    }
}

/// Tunable world parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Generation ===
    /// Upper bound for the hashed obstacle count
    pub max_obstacle_count: u32,
    /// Ring radius as a fraction of the arena's smaller side
    pub ring_radius_fraction: f32,
    /// Radial noise factor (0.0 - 1.0)
    pub irregularity: f32,
    /// Ring or orthogonal layout
    pub layout_style: LayoutStyle,

    // === Collision / movement ===
    /// Collision box size relative to the texture footprint
    pub collision_multiplier: f32,
    /// Player speed in texture widths per second
    pub player_speed_factor: f32,
    /// Where the player starts; also the layout center
    pub player_spawn: Vec2,

    // === Display ===
    /// World position shown as (0, 0) in the overlay
    pub origin_offset: Vec2,
    /// World units per displayed unit
    pub display_units: f32,
    /// Viewport height at which `base_scale` applies
    pub base_viewport_height: f32,
    /// Texture scale at the base viewport height
    pub base_scale: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            max_obstacle_count: DEFAULT_MAX_OBSTACLES,
            ring_radius_fraction: 0.45,
            irregularity: 0.25,
            layout_style: LayoutStyle::Ring,

            collision_multiplier: COLLISION_SIZE_MULTIPLIER,
            player_speed_factor: 2.0,
            player_spawn: PLAYER_SPAWN,

            origin_offset: ORIGIN_OFFSET,
            display_units: DISPLAY_UNITS,
            base_viewport_height: BASE_VIEWPORT_HEIGHT,
            base_scale: BASE_TEXTURE_SCALE,
        }
    }
}

impl Settings {
    /// Default settings with a different layout style
    pub fn with_layout(style: LayoutStyle) -> Self {
        let mut settings = Self::default();
        settings.layout_style = style;
        settings
    }

    /// Parse and validate settings JSON
    pub fn from_json(json: &str) -> Result<Self> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        log::info!(
            "Loaded settings: layout={}, max_obstacles={}",
            settings.layout_style.as_str(),
            settings.max_obstacle_count
        );
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject values that would make generation or display undefined
    pub fn validate(&self) -> Result<()> {
        if self.max_obstacle_count == 0 {
            return Err(invalid("max_obstacle_count", "must be at least 1"));
        }
        if !(0.0..=1.0).contains(&self.irregularity) {
            return Err(invalid("irregularity", "must be within [0, 1]"));
        }
        if !(self.ring_radius_fraction > 0.0) {
            return Err(invalid("ring_radius_fraction", "must be positive"));
        }
        if !(self.collision_multiplier > 0.0) {
            return Err(invalid("collision_multiplier", "must be positive"));
        }
        if !(self.display_units > 0.0) {
            return Err(invalid("display_units", "must be positive"));
        }
        if !(self.base_viewport_height > 0.0) {
            return Err(invalid("base_viewport_height", "must be positive"));
        }
        Ok(())
    }
}

fn invalid(field: &'static str, reason: &str) -> GenError {
    GenError::InvalidConfig {
        field,
        reason: reason.to_string(),
    }
}
