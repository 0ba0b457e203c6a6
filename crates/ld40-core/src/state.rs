//! Player and laser beam state, and the snapshot produced after each tick.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::types::SimTime;

/// The player's body in the world.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayerState {
    /// Position of the player's feet.
    pub position: Vec3,
    /// Where the player looks. Kept at unit length.
    pub view_dir: Vec3,
    /// Vertical velocity while airborne.
    pub vel_y: f32,
    pub in_air: bool,
}

impl Default for PlayerState {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            view_dir: Vec3::Z,
            vel_y: 0.0,
            in_air: false,
        }
    }
}

impl PlayerState {
    /// Eye position for a player of the given height.
    pub fn eye(&self, player_height: f32) -> Vec3 {
        self.position + Vec3::Y * player_height
    }

    /// View direction flattened onto the ground plane, or zero when looking
    /// straight up or down.
    pub fn walk_dir(&self) -> Vec3 {
        Vec3::new(self.view_dir.x, 0.0, self.view_dir.z).normalize_or_zero()
    }
}

/// A fading laser beam from the muzzle to the point it hit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LaserBeam {
    pub start: Vec3,
    pub end: Vec3,
    /// Remaining life in (0, 1]. Used as the beam's alpha.
    pub life: f32,
    /// Whether the beam ended on the terrain or ran out of range.
    pub hit_ground: bool,
}

impl LaserBeam {
    pub fn new(start: Vec3, end: Vec3, hit_ground: bool) -> Self {
        Self {
            start,
            end,
            life: 1.0,
            hit_ground,
        }
    }

    pub fn length(&self) -> f32 {
        self.start.distance(self.end)
    }
}

/// Visible world state after a tick.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorldSnapshot {
    pub time: SimTime,
    pub player: PlayerState,
    pub beams: Vec<LaserBeam>,
}
