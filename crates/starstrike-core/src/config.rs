//! Simulation configuration and its TOML loader.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::types::Viewport;

/// Configuration for starting a new simulation.
///
/// Every field has a default, so a config file only needs the values it
/// wants to change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed and same input = same run.
    pub seed: u64,
    /// Ticks per second.
    pub tick_rate: u32,
    /// Initial window and camera.
    pub viewport: Viewport,
    pub player_step: f32,
    pub player_y: f32,
    pub projectile_speed: f32,
    pub enemy_count: usize,
    pub enemy_speed: f32,
    pub enemy_spawn_y: f32,
    pub enemy_spawn_x_min: f32,
    pub enemy_spawn_x_max: f32,
    pub enemy_respawn_delay_ms: u64,
    pub collision_half_extent: f32,
    /// Directory the texture paths are resolved against.
    pub asset_root: PathBuf,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            tick_rate: TICK_RATE,
            viewport: Viewport::default(),
            player_step: PLAYER_STEP,
            player_y: PLAYER_Y,
            projectile_speed: PROJECTILE_SPEED,
            enemy_count: ENEMY_COUNT,
            enemy_speed: ENEMY_SPEED,
            enemy_spawn_y: ENEMY_SPAWN_Y,
            enemy_spawn_x_min: ENEMY_SPAWN_X_MIN,
            enemy_spawn_x_max: ENEMY_SPAWN_X_MAX,
            enemy_respawn_delay_ms: ENEMY_RESPAWN_DELAY_MS,
            collision_half_extent: COLLISION_HALF_EXTENT,
            asset_root: PathBuf::from("."),
        }
    }
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// A value is out of its allowed range
    #[error("Invalid value for `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: String,
    },
}

impl SimConfig {
    /// Parse a TOML document and validate it.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: SimConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Reject values the simulation cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_rate == 0 {
            return Err(invalid("tick_rate", "must be at least 1"));
        }
        if self.enemy_count == 0 {
            return Err(invalid("enemy_count", "must be at least 1"));
        }

        let floats = [
            ("player_step", self.player_step),
            ("player_y", self.player_y),
            ("projectile_speed", self.projectile_speed),
            ("enemy_speed", self.enemy_speed),
            ("enemy_spawn_y", self.enemy_spawn_y),
            ("enemy_spawn_x_min", self.enemy_spawn_x_min),
            ("enemy_spawn_x_max", self.enemy_spawn_x_max),
            ("collision_half_extent", self.collision_half_extent),
            ("viewport.fov_deg", self.viewport.fov_deg),
            ("viewport.camera_distance", self.viewport.camera_distance),
        ];
        for (field, value) in floats {
            if !value.is_finite() {
                return Err(invalid(field, format!("{value} is not a finite number")));
            }
        }

        if self.projectile_speed <= 0.0 {
            return Err(invalid("projectile_speed", "must be positive"));
        }
        if self.enemy_speed < 0.0 {
            return Err(invalid("enemy_speed", "must not be negative"));
        }
        if self.enemy_spawn_x_min >= self.enemy_spawn_x_max {
            return Err(invalid(
                "enemy_spawn_x_min",
                format!(
                    "{} is not below enemy_spawn_x_max {}",
                    self.enemy_spawn_x_min, self.enemy_spawn_x_max
                ),
            ));
        }
        // The sampler needs the width itself to be representable.
        if !(self.enemy_spawn_x_max - self.enemy_spawn_x_min).is_finite() {
            return Err(invalid("enemy_spawn_x_max", "spawn range is too wide"));
        }
        if self.enemy_respawn_delay_ms > MAX_RESPAWN_DELAY_MS {
            return Err(invalid(
                "enemy_respawn_delay_ms",
                format!("must be at most {MAX_RESPAWN_DELAY_MS}"),
            ));
        }
        if self.collision_half_extent <= 0.0 {
            return Err(invalid("collision_half_extent", "must be positive"));
        }
        if self.viewport.height_px == 0 || self.viewport.width_px == 0 {
            return Err(invalid("viewport", "window size must be non-zero"));
        }
        if !(self.viewport.fov_deg > 0.0 && self.viewport.fov_deg < 180.0) {
            return Err(invalid("viewport.fov_deg", "must be within (0, 180)"));
        }
        if self.viewport.camera_distance <= 0.0 {
            return Err(invalid("viewport.camera_distance", "must be positive"));
        }
        Ok(())
    }

    /// Respawn delay converted to ticks at the configured rate.
    pub fn respawn_delay_ticks(&self) -> u64 {
        crate::types::SimTime::ticks_for_ms(self.enemy_respawn_delay_ms, self.tick_rate)
    }
}

fn invalid(field: &'static str, reason: impl Into<String>) -> ConfigError {
    ConfigError::Invalid {
        field,
        reason: reason.into(),
    }
}
