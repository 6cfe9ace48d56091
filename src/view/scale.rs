//! Texture scale derived from the viewport height

use serde::{Deserialize, Serialize};

use crate::settings::Settings;

/// Sprite scale factor, passed explicitly to anything that lays out sprites
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RenderScale(pub f32);

impl RenderScale {
    /// `height / base_height * base_scale`
    pub fn from_viewport_height(height: f32, base_height: f32, base_scale: f32) -> Self {
        Self(height / base_height * base_scale)
    }

    pub fn from_settings(height: f32, settings: &Settings) -> Self {
        Self::from_viewport_height(height, settings.base_viewport_height, settings.base_scale)
    }

    #[inline]
    pub fn factor(&self) -> f32 {
        self.0
    }
}

impl Default for RenderScale {
    fn default() -> Self {
        Self(crate::consts::BASE_TEXTURE_SCALE)
    }
}
