//! The laser: fire a beam along the view direction and fade old beams.

use glam::Vec3;

use ld40_core::config::PlayerConfig;
use ld40_core::state::{LaserBeam, PlayerState};
use ld40_terrain::raycast::raycast_terrain_with_limit;
use ld40_terrain::HeightField;

/// Fire from just below eye height and return the beam to the impact point.
///
/// A shot that runs out of steps still produces a beam, ending at the
/// last marched point.
pub fn fire(player: &PlayerState, terrain: &HeightField, config: &PlayerConfig) -> LaserBeam {
    let muzzle = player.position + Vec3::Y * (config.height * config.muzzle_height_fraction);
    let hit = raycast_terrain_with_limit(terrain, muzzle, player.view_dir, config.max_ray_steps);
    let end = hit.point();
    tracing::debug!(
        hit = hit.is_hit(),
        x = end.x,
        y = end.y,
        z = end.z,
        "laser fired"
    );
    LaserBeam::new(muzzle, end, hit.is_hit())
}

/// Age every beam by `decay` and drop the ones that faded out.
pub fn fade(beams: &mut Vec<LaserBeam>, decay: f32) {
    for beam in beams.iter_mut() {
        beam.life -= decay;
    }
    beams.retain(|beam| beam.life > 0.0);
}
