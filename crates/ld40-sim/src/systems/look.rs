//! Mouse look: yaw around the world up axis, pitch by nudging the view's y.

use glam::Quat;

use ld40_core::commands::InputFrame;
use ld40_core::config::PlayerConfig;
use ld40_core::state::PlayerState;

pub fn run(player: &mut PlayerState, input: &InputFrame, config: &PlayerConfig) {
    if input.mouse_dx != 0 {
        let yaw = (input.mouse_dx as f32 * config.yaw_degrees_per_pixel).to_radians();
        let turned = Quat::from_rotation_y(yaw) * player.view_dir;
        player.view_dir = turned.try_normalize().unwrap_or(player.view_dir);
    }
    if input.mouse_dy != 0 {
        let mut pitched = player.view_dir;
        pitched.y -= input.mouse_dy as f32 * config.pitch_per_pixel;
        // Straight up then pitched exactly to the horizon leaves nothing to normalize.
        player.view_dir = pitched.try_normalize().unwrap_or(player.view_dir);
    }
}
