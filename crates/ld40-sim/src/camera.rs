//! Camera and beam transforms handed to the renderer.
//!
//! Left-handed, y up, matching the walking code: +z is the initial view
//! direction and forward x up points left.

use glam::{Mat4, Quat, Vec3};

use ld40_core::config::CameraConfig;
use ld40_core::state::{LaserBeam, PlayerState};

/// Width of the quad a laser beam is drawn with.
pub const BEAM_WIDTH: f32 = 0.005;

/// View matrix from the player's eyes.
pub fn view_matrix(player: &PlayerState, player_height: f32) -> Mat4 {
    Mat4::look_to_lh(player.eye(player_height), player.view_dir, Vec3::Y)
}

pub fn projection_matrix(config: &CameraConfig, aspect_ratio: f32) -> Mat4 {
    Mat4::perspective_lh(
        config.field_of_view_deg.to_radians(),
        aspect_ratio,
        config.near,
        config.far,
    )
}

/// Projection times view. Terrain vertices are already in world space,
/// so this is also the terrain's model-view-projection.
pub fn view_projection(
    player: &PlayerState,
    player_height: f32,
    config: &CameraConfig,
    aspect_ratio: f32,
) -> Mat4 {
    projection_matrix(config, aspect_ratio) * view_matrix(player, player_height)
}

/// Sky box transform: rotation only, the sky never gets closer.
pub fn sky_view_projection(player: &PlayerState, config: &CameraConfig, aspect_ratio: f32) -> Mat4 {
    projection_matrix(config, aspect_ratio) * Mat4::look_to_lh(Vec3::ZERO, player.view_dir, Vec3::Y)
}

/// Model matrix that stretches the unit quad `[0,1] x {0} x [0,1]` into
/// `beam`: its +z edge reaches from `start` to `end`.
pub fn beam_transform(beam: &LaserBeam) -> Mat4 {
    let along = beam.end - beam.start;
    let length = along.length();
    let dir = along.try_normalize().unwrap_or(Vec3::Z);
    Mat4::from_scale_rotation_translation(
        Vec3::new(BEAM_WIDTH, 1.0, length),
        Quat::from_rotation_arc(Vec3::Z, dir),
        beam.start,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_looks_down_positive_z() {
        let player = PlayerState::default();
        let view = view_matrix(&player, 0.4);
        // A point in front of the eye ends up on the +z axis in view space.
        let p = view.transform_point3(Vec3::new(0.0, 0.4, 5.0));
        assert!((p - Vec3::new(0.0, 0.0, 5.0)).length() < 1e-5);
        // Points to the player's left (-x) stay on the left.
        let left = view.transform_point3(Vec3::new(-1.0, 0.4, 5.0));
        assert!(left.x < 0.0);
    }

    #[test]
    fn test_projection_depth_range() {
        let config = CameraConfig::default();
        let proj = projection_matrix(&config, 16.0 / 9.0);
        let near = proj.project_point3(Vec3::new(0.0, 0.0, config.near));
        let far = proj.project_point3(Vec3::new(0.0, 0.0, config.far));
        assert!(near.z.abs() < 1e-4);
        assert!((far.z - 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_sky_ignores_position() {
        let config = CameraConfig::default();
        let a = PlayerState::default();
        let b = PlayerState {
            position: Vec3::new(10.0, 3.0, -4.0),
            ..a
        };
        assert_eq!(
            sky_view_projection(&a, &config, 1.5),
            sky_view_projection(&b, &config, 1.5)
        );
        assert_ne!(
            view_projection(&a, 0.4, &config, 1.5),
            view_projection(&b, 0.4, &config, 1.5)
        );
    }

    #[test]
    fn test_beam_transform_spans_beam() {
        let beam = LaserBeam::new(Vec3::new(1.0, 2.0, 3.0), Vec3::new(4.0, -2.0, 3.0), true);
        let m = beam_transform(&beam);
        let start = m.transform_point3(Vec3::ZERO);
        let end = m.transform_point3(Vec3::Z);
        assert!((start - beam.start).length() < 1e-5);
        assert!((end - beam.end).length() < 1e-4);
        // The quad's other edge is only BEAM_WIDTH away.
        let side = m.transform_point3(Vec3::X);
        assert!(((side - beam.start).length() - BEAM_WIDTH).abs() < 1e-5);
    }

    #[test]
    fn test_degenerate_beam_is_finite() {
        let beam = LaserBeam::new(Vec3::ONE, Vec3::ONE, true);
        let m = beam_transform(&beam);
        assert!(m.is_finite());
    }
}
