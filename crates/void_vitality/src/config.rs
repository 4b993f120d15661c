//! Vitality configuration

use crate::error::{Result, VitalityError};
use crate::respawn::{SpawnPoint, DEFAULT_SPAWN_POINT_NAME};
use crate::tint::Color;
use serde::{Deserialize, Serialize};

/// Tuning for a [`crate::VitalityController`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VitalityConfig {
    /// Maximum (and starting) health
    pub max_health: u32,

    /// Seconds between damage ticks while in a hazard
    pub hazard_damage_interval: f32,

    /// Colour shown when healthy and outside hazards
    pub base_color: Color,

    /// Colour faded towards while in a hazard
    pub hazard_color: Color,

    /// Fade speed (fraction of the remaining distance per second)
    pub color_blend_rate: f32,

    /// Scene object searched for when no other spawn point is known
    pub spawn_point_name: String,

    /// The entity's own spawn point
    pub spawn_point: Option<SpawnPoint>,
}

impl Default for VitalityConfig {
    fn default() -> Self {
        Self {
            max_health: 2,
            hazard_damage_interval: 1.0,
            base_color: Color::WHITE,
            hazard_color: Color::PURPLE,
            color_blend_rate: 2.0,
            spawn_point_name: DEFAULT_SPAWN_POINT_NAME.to_string(),
            spawn_point: None,
        }
    }
}

impl VitalityConfig {
    /// Parse from JSON and validate
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check that every value is in range
    pub fn validate(&self) -> Result<()> {
        if self.max_health == 0 {
            return Err(VitalityError::InvalidConfig(
                "max_health must be positive".to_string(),
            ));
        }
        if !(self.hazard_damage_interval.is_finite() && self.hazard_damage_interval > 0.0) {
            return Err(VitalityError::InvalidConfig(format!(
                "hazard_damage_interval must be positive, got {}",
                self.hazard_damage_interval
            )));
        }
        if !(self.color_blend_rate.is_finite() && self.color_blend_rate > 0.0) {
            return Err(VitalityError::InvalidConfig(format!(
                "color_blend_rate must be positive, got {}",
                self.color_blend_rate
            )));
        }
        Ok(())
    }

    pub fn with_max_health(mut self, max_health: u32) -> Self {
        self.max_health = max_health;
        self
    }

    pub fn with_hazard_interval(mut self, seconds: f32) -> Self {
        self.hazard_damage_interval = seconds;
        self
    }

    pub fn with_base_color(mut self, color: Color) -> Self {
        self.base_color = color;
        self
    }

    pub fn with_hazard_color(mut self, color: Color) -> Self {
        self.hazard_color = color;
        self
    }

    pub fn with_blend_rate(mut self, rate: f32) -> Self {
        self.color_blend_rate = rate;
        self
    }

    pub fn with_spawn_point(mut self, point: SpawnPoint) -> Self {
        self.spawn_point = Some(point);
        self
    }

    pub fn with_spawn_point_name(mut self, name: impl Into<String>) -> Self {
        self.spawn_point_name = name.into();
        self
    }
}
