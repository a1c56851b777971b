//! Startup configuration, serializable to RON.

use serde::{Deserialize, Serialize};

use crate::brush::Brush;
use crate::cell::Material;
use crate::error::ConfigError;

/// Everything fixed at startup. Grid dimensions cannot change afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub width: usize,
    pub height: usize,
    /// Initial brush radius (default: 32)
    pub brush_radius: i32,
    /// Material painted by the brush (default: Sand)
    pub brush_material: Material,
    /// Seed for the diagonal tie-break generator
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            brush_radius: Brush::DEFAULT_RADIUS,
            brush_material: Material::Sand,
            seed: 0,
        }
    }
}

impl SimConfig {
    /// Parse and validate a RON document. Missing fields take their defaults.
    pub fn from_ron(src: &str) -> Result<Self, ConfigError> {
        let config: Self = ron::from_str(src)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::ZeroDimension {
                width: self.width,
                height: self.height,
            });
        }
        for dim in [self.width, self.height] {
            if i32::try_from(dim).is_err() {
                return Err(ConfigError::DimensionTooLarge(dim));
            }
        }
        if self.brush_radius < 1 {
            return Err(ConfigError::InvalidBrushRadius(self.brush_radius));
        }
        Ok(())
    }
}
