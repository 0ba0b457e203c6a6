//! Analytic terrain height at arbitrary world (x, z).
//!
//! Every tile is two triangles sharing the diagonal from its bottom-right
//! to its top-left corner, the same split the mesh uses, so the query
//! matches the rendered surface exactly:
//!
//! ```text
//!   z
//!   ^
//!   TL ---- TR
//!   | \      |
//!   |   \    |
//!   |     \  |
//!   BL ---- BR  --> x
//! ```

use glam::Vec3;

use crate::field::HeightField;
use crate::intersect::plane_line_intersection;

/// Anything that can answer "how high is the ground here?".
pub trait HeightSource {
    /// Ground height at world (x, z).
    fn height_at(&self, x: f32, z: f32) -> f32;
}

impl HeightField {
    /// World-space terrain height at world (x, z).
    ///
    /// Outside the grid the world is flat at height 0.
    pub fn height_at(&self, x: f32, z: f32) -> f32 {
        let tile = self.world_to_tile(x, z);
        let size = self.size() as f32;
        // Also rejects NaN.
        if !(0.0..size).contains(&tile.x) || !(0.0..size).contains(&tile.y) {
            return 0.0;
        }

        let (ix, iz) = (tile.x as usize, tile.y as usize);
        let (fx, fz) = (tile.x - ix as f32, tile.y - iz as f32);

        let bottom_left = self.corner(ix, iz);
        let top_left = self.corner(ix, iz + 1);
        let bottom_right = self.corner(ix + 1, iz);
        let top_right = self.corner(ix + 1, iz + 1);

        let on_left_triangle = 1.0 - fx > fz;
        let third = if on_left_triangle {
            Vec3::new(0.0, bottom_left, 0.0)
        } else {
            Vec3::new(1.0, top_right, 1.0)
        };
        let triangle = [
            Vec3::new(1.0, bottom_right, 0.0),
            Vec3::new(0.0, top_left, 1.0),
            third,
        ];
        let probe = [Vec3::new(fx, 0.0, fz), Vec3::new(fx, 1.0, fz)];

        plane_line_intersection(triangle, probe).y * self.scale().y
    }
}

impl HeightSource for HeightField {
    fn height_at(&self, x: f32, z: f32) -> f32 {
        HeightField::height_at(self, x, z)
    }
}
