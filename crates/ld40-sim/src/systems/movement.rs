//! Jumping, gravity and walking.

use glam::Vec3;

use ld40_core::commands::InputFrame;
use ld40_core::config::PlayerConfig;
use ld40_core::state::PlayerState;

/// Start a jump if requested and the player stands on the ground.
pub fn jump(player: &mut PlayerState, input: &InputFrame, config: &PlayerConfig) {
    if input.jump && !player.in_air {
        player.in_air = true;
        player.vel_y = config.jump_speed;
    }
}

/// Integrate vertical velocity while airborne.
pub fn fall(player: &mut PlayerState, config: &PlayerConfig) {
    if player.in_air {
        player.position.y += player.vel_y;
        player.vel_y += config.gravity;
    }
}

/// Walk along the ground plane relative to the view direction.
pub fn walk(player: &mut PlayerState, input: &InputFrame, config: &PlayerConfig) {
    let speed = if input.run {
        config.move_speed * config.run_multiplier
    } else if input.sneak {
        config.move_speed * config.sneak_multiplier
    } else {
        config.move_speed
    };

    let forward = player.walk_dir();
    // Left-handed, y up: forward x up points left.
    let left = forward.cross(Vec3::Y);

    let mut delta = Vec3::ZERO;
    if input.forward {
        delta += forward;
    }
    if input.backward {
        delta -= forward;
    }
    if input.left {
        delta += left;
    }
    if input.right {
        delta -= left;
    }
    player.position += delta * speed;
}
