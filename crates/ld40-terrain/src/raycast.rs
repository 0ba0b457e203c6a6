//! Terrain hit test by fixed-step ray marching.
//!
//! The ray advances in constant steps and compares its height against the
//! terrain at each point. The first point at or below the ground is the
//! hit. There is no refinement between the last two samples.

use glam::Vec3;
use ld40_core::constants::MAX_RAY_STEPS;

use crate::field::HeightField;
use crate::query::HeightSource;

/// Outcome of a terrain raycast.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RayHit {
    /// The ray reached the ground. The point's height is clamped to the terrain.
    Ground(Vec3),
    /// The step budget ran out first. Carries the last computed point, unclamped.
    Miss(Vec3),
}

impl RayHit {
    /// The impact point, or the best-effort end point of a miss.
    pub fn point(&self) -> Vec3 {
        match *self {
            RayHit::Ground(p) | RayHit::Miss(p) => p,
        }
    }

    pub fn is_hit(&self) -> bool {
        matches!(self, RayHit::Ground(_))
    }
}

/// March from `origin` by `step` until the ground is reached.
///
/// Evaluates `source` at most `max_steps` times, starting at `origin`
/// itself, so an origin already below ground is its own hit.
pub fn march<S: HeightSource + ?Sized>(
    source: &S,
    origin: Vec3,
    step: Vec3,
    max_steps: usize,
) -> RayHit {
    let mut p = origin;
    for i in 0..max_steps {
        let ground = source.height_at(p.x, p.z);
        if p.y <= ground {
            p.y = ground;
            tracing::trace!(steps = i + 1, x = p.x, y = p.y, z = p.z, "ray hit terrain");
            return RayHit::Ground(p);
        }
        p += step;
    }
    tracing::trace!(max_steps, "ray missed terrain");
    RayHit::Miss(p)
}

/// Shoot a ray at the terrain with the default step budget.
///
/// `direction` is expected to be unit length; the step is
/// `direction * field.ray_step()`.
pub fn raycast_terrain(field: &HeightField, origin: Vec3, direction: Vec3) -> RayHit {
    raycast_terrain_with_limit(field, origin, direction, MAX_RAY_STEPS)
}

/// [`raycast_terrain`] with an explicit step budget.
pub fn raycast_terrain_with_limit(
    field: &HeightField,
    origin: Vec3,
    direction: Vec3,
    max_steps: usize,
) -> RayHit {
    march(field, origin, direction * field.ray_step(), max_steps)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    /// Flat ground at a fixed height that counts how often it is asked.
    struct CountingPlane {
        height: f32,
        calls: Cell<usize>,
    }

    impl CountingPlane {
        fn new(height: f32) -> Self {
            Self {
                height,
                calls: Cell::new(0),
            }
        }
    }

    impl HeightSource for CountingPlane {
        fn height_at(&self, _x: f32, _z: f32) -> f32 {
            self.calls.set(self.calls.get() + 1);
            self.height
        }
    }

    fn hill() -> HeightField {
        HeightField::from_fn(33, |row, col| {
            let dx = col as f32 - 16.0;
            let dz = row as f32 - 16.0;
            (1.0 - (dx * dx + dz * dz) / 256.0).max(0.0)
        })
        .unwrap()
        .with_scale(Vec3::new(0.25, 1.3, 0.25))
    }

    #[test]
    fn test_upward_ray_misses_within_budget() {
        let ground = CountingPlane::new(0.0);
        let hit = march(&ground, Vec3::new(0.0, 1.0, 0.0), Vec3::new(0.0, 0.1, 0.1), 1000);
        assert_eq!(ground.calls.get(), 1000);
        assert!(!hit.is_hit());
        // Last computed point, never clamped.
        assert!((hit.point() - Vec3::new(0.0, 101.0, 100.0)).length() < 5e-2);
    }

    #[test]
    fn test_origin_below_ground_is_hit_immediately() {
        let ground = CountingPlane::new(2.0);
        let hit = march(&ground, Vec3::new(1.0, 0.5, 1.0), Vec3::X, 1000);
        assert_eq!(ground.calls.get(), 1);
        assert_eq!(hit, RayHit::Ground(Vec3::new(1.0, 2.0, 1.0)));
    }

    #[test]
    fn test_descending_ray_stops_on_first_point_below() {
        let ground = CountingPlane::new(0.0);
        // Drops 0.3 per step from 1.0: 1.0, 0.7, 0.4, 0.1, -0.2 -> hit on the 5th sample.
        let hit = march(&ground, Vec3::new(0.0, 1.0, 0.0), Vec3::new(0.5, -0.3, 0.0), 1000);
        assert_eq!(ground.calls.get(), 5);
        let p = hit.point();
        assert!(hit.is_hit());
        assert_eq!(p.y, 0.0);
        assert!((p.x - 2.0).abs() < 1e-5);
    }

    #[test]
    fn test_zero_budget_is_a_miss_at_origin() {
        let ground = CountingPlane::new(10.0);
        let hit = march(&ground, Vec3::ZERO, Vec3::X, 0);
        assert_eq!(ground.calls.get(), 0);
        assert_eq!(hit, RayHit::Miss(Vec3::ZERO));
    }

    #[test]
    fn test_hit_point_lies_on_terrain() {
        let field = hill();
        let origin = Vec3::new(-3.5, 2.0, -3.0);
        let direction = (Vec3::new(0.0, 0.5, 0.0) - origin).normalize();
        let hit = raycast_terrain(&field, origin, direction);
        assert!(hit.is_hit());
        let p = hit.point();
        assert!((p.y - field.height_at(p.x, p.z)).abs() < 1e-5);
        assert!(p.y > 0.0, "should land on the hill, got {p:?}");
    }

    #[test]
    fn test_shot_into_the_sky_misses() {
        let field = hill();
        let hit = raycast_terrain(&field, Vec3::new(0.0, 2.0, 0.0), Vec3::new(0.0, 0.6, 0.8));
        assert!(!hit.is_hit());
        let expected = Vec3::new(0.0, 2.0, 0.0)
            + Vec3::new(0.0, 0.6, 0.8) * field.ray_step() * MAX_RAY_STEPS as f32;
        assert!((hit.point() - expected).length() < 5e-2);
    }

    #[test]
    fn test_ray_past_the_edge_lands_on_flat_ground() {
        let field = hill();
        // Aim away from the hill, shallow downward: lands beyond the grid at height 0.
        let origin = Vec3::new(4.5, 0.5, 0.0);
        let direction = Vec3::new(1.0, -0.1, 0.0).normalize();
        let hit = raycast_terrain(&field, origin, direction);
        assert!(hit.is_hit());
        assert_eq!(hit.point().y, 0.0);
        assert!(hit.point().x > 4.5);
    }

    #[test]
    fn test_limit_is_respected() {
        let field = hill();
        let origin = Vec3::new(-10.0, 5.0, 0.0);
        let direction = Vec3::new(1.0, -0.05, 0.0).normalize();
        // Ten steps of 0.125 cannot reach the ground from 5 units up.
        let hit = raycast_terrain_with_limit(&field, origin, direction, 10);
        assert!(!hit.is_hit());
        let full = raycast_terrain(&field, origin, direction);
        assert!(full.is_hit());
    }
}
