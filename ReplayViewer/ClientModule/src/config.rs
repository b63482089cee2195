//! # Engine Configuration
//!
//! Tunables for coordinate scaling, introspection limits and presentation
//! hints. Every field has a default so a partial JSON file is enough.

use crate::actor::EntityKind;
use replay_shared::constants::{colors, limits};
use replay_shared::types::LinearColor;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Failure while loading or validating a configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Settings for one engine instance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReplayConfig {
    /// Multiplier applied to raw positions
    pub pos_scale: f32,

    /// Multiplier applied to raw rotations
    pub rot_scale: f32,

    /// Distinct property names kept per entity
    pub property_log_cap: usize,

    /// Display names stay strictly shorter than this
    pub display_name_cap: usize,

    /// Paint for team number 0
    pub team0_color: LinearColor,

    /// Paint for every other team number
    pub team1_color: LinearColor,

    /// Entity kinds whose visual has a paintable surface
    pub paintable_kinds: Vec<EntityKind>,

    /// Initial playback time in seconds
    pub start_time: f32,

    /// Smoothing time of the camera follow point
    pub follow_smooth_time: f32,
}

impl Default for ReplayConfig {
    fn default() -> Self {
        Self {
            pos_scale: limits::DEFAULT_POS_SCALE,
            rot_scale: limits::DEFAULT_ROT_SCALE,
            property_log_cap: limits::PROPERTY_LOG_CAP,
            display_name_cap: limits::DISPLAY_NAME_CAP,
            team0_color: colors::TEAM0,
            team1_color: colors::TEAM1,
            paintable_kinds: vec![EntityKind::PrimaryActor, EntityKind::Ball, EntityKind::Other],
            start_time: 0.0,
            follow_smooth_time: 0.25,
        }
    }
}

impl ReplayConfig {
    /// Parse and validate a JSON configuration
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON configuration file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.pos_scale.is_finite() || self.pos_scale <= 0.0 {
            return Err(ConfigError::Invalid(format!("pos_scale must be positive, got {}", self.pos_scale)));
        }
        if !self.rot_scale.is_finite() || self.rot_scale <= 0.0 {
            return Err(ConfigError::Invalid(format!("rot_scale must be positive, got {}", self.rot_scale)));
        }
        if self.property_log_cap == 0 {
            return Err(ConfigError::Invalid("property_log_cap must be at least 1".to_string()));
        }
        if self.display_name_cap == 0 {
            return Err(ConfigError::Invalid("display_name_cap must be at least 1".to_string()));
        }
        if !self.start_time.is_finite() {
            return Err(ConfigError::Invalid("start_time must be finite".to_string()));
        }
        if !self.follow_smooth_time.is_finite() || self.follow_smooth_time < 0.0 {
            return Err(ConfigError::Invalid("follow_smooth_time must not be negative".to_string()));
        }
        Ok(())
    }

    /// Paint color for a team number
    pub fn team_color(&self, team_number: u8) -> LinearColor {
        if team_number == 0 {
            self.team0_color
        } else {
            self.team1_color
        }
    }
}
