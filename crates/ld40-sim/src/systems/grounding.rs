//! Keep the player on the terrain surface.

use ld40_core::state::PlayerState;
use ld40_terrain::HeightSource;

/// Land the player if they fell below the ground, and snap a grounded
/// player to the surface height.
pub fn run(player: &mut PlayerState, terrain: &impl HeightSource) {
    let ground = terrain.height_at(player.position.x, player.position.z);
    if player.in_air && player.position.y < ground {
        player.in_air = false;
        player.vel_y = 0.0;
    }
    if !player.in_air {
        player.position.y = ground;
    }
}
