//! Game configuration.
//!
//! Every field has a default matching [`crate::constants`], and every
//! section is `#[serde(default)]`, so a JSON file only needs the values it
//! overrides.

use std::path::{Path, PathBuf};

use glam::Vec3;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::*;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Terrain asset and its placement in the world.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerrainConfig {
    /// Square grayscale PNG; the red channel is the height.
    pub heightmap: PathBuf,
    /// Raw height per red-channel step away from 127.
    pub height_per_pixel: f32,
    /// Tile-space to world-space scale (x, height, z).
    pub scale: Vec3,
}

impl Default for TerrainConfig {
    fn default() -> Self {
        Self {
            heightmap: PathBuf::from(HEIGHTMAP_PATH),
            height_per_pixel: HEIGHT_PER_PIXEL,
            scale: Vec3::from_array(TERRAIN_SCALE),
        }
    }
}

/// Player movement and weapon tuning. Speeds are per tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    pub move_speed: f32,
    pub run_multiplier: f32,
    pub sneak_multiplier: f32,
    pub jump_speed: f32,
    pub gravity: f32,
    /// Eye height above the feet.
    pub height: f32,
    /// Muzzle height as a fraction of `height`.
    pub muzzle_height_fraction: f32,
    pub yaw_degrees_per_pixel: f32,
    pub pitch_per_pixel: f32,
    /// Life lost by a laser beam per tick.
    pub beam_decay: f32,
    /// Height evaluations allowed per shot.
    pub max_ray_steps: usize,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            move_speed: MOVE_SPEED,
            run_multiplier: RUN_SPEED_MULTIPLIER,
            sneak_multiplier: SNEAK_SPEED_MULTIPLIER,
            jump_speed: JUMP_SPEED,
            gravity: GRAVITY,
            height: PLAYER_HEIGHT,
            muzzle_height_fraction: MUZZLE_HEIGHT_FRACTION,
            yaw_degrees_per_pixel: MOUSE_YAW_DEGREES_PER_PIXEL,
            pitch_per_pixel: MOUSE_PITCH_PER_PIXEL,
            beam_decay: LASER_BEAM_DECAY,
            max_ray_steps: MAX_RAY_STEPS,
        }
    }
}

/// Projection parameters handed to the renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub field_of_view_deg: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            field_of_view_deg: FIELD_OF_VIEW_DEG,
            near: NEAR_PLANE,
            far: FAR_PLANE,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub terrain: TerrainConfig,
    pub player: PlayerConfig,
    pub camera: CameraConfig,
}

impl GameConfig {
    /// Parse a (possibly partial) JSON configuration.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a (possibly partial) JSON configuration file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn to_json_pretty(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
