//! Triangle-list render geometry for a HeightField.
//!
//! Each tile becomes two triangles (six vertices), split along the
//! bottom-right to top-left diagonal exactly like [`HeightField::height_at`].
//! There is no index buffer. Tiles on the outer ring get straight-up
//! normals; interior tiles get per-corner smoothed normals.

use glam::{Vec2, Vec3};

use crate::field::HeightField;

/// Vertices emitted per tile.
pub const VERTICES_PER_TILE: usize = 6;

/// One vertex of the terrain triangle list.
///
/// Laid out as eight contiguous `f32`s: position, normal, uv.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    /// World-space position.
    pub position: Vec3,
    /// Unit normal.
    pub normal: Vec3,
    pub uv: Vec2,
}

impl Vertex {
    /// Floats per vertex.
    pub const FLOATS: usize = 8;

    /// Bytes per vertex in the vertex buffer.
    pub const STRIDE: usize = Self::FLOATS * std::mem::size_of::<f32>();

    pub fn to_array(&self) -> [f32; Self::FLOATS] {
        [
            self.position.x,
            self.position.y,
            self.position.z,
            self.normal.x,
            self.normal.y,
            self.normal.z,
            self.uv.x,
            self.uv.y,
        ]
    }
}

/// Number of vertices [`height_field_vertices`] produces for `field`.
pub fn vertex_count(field: &HeightField) -> usize {
    field.size() * field.size() * VERTICES_PER_TILE
}

/// Build the terrain triangle list, tile by tile, z-major.
///
/// Per tile the order is bottom-left, bottom-right, top-left, then
/// top-left, bottom-right, top-right. Texture coordinates map every tile
/// onto the whole texture.
pub fn height_field_vertices(field: &HeightField) -> Vec<Vertex> {
    let size = field.size();
    let mut vertices = Vec::with_capacity(vertex_count(field));

    for z in 0..size {
        for x in 0..size {
            let boundary = x == 0 || z == 0 || x == size - 1 || z == size - 1;

            let corner = |dx: usize, dz: usize, uv: Vec2| {
                let (tx, tz) = (x + dx, z + dz);
                let tile_pos = Vec3::new(tx as f32, field.corner(tx, tz), tz as f32);
                let normal = if boundary {
                    Vec3::Y
                } else {
                    smoothed_normal(field, tx, tz)
                };
                Vertex {
                    position: field.tile_to_world(tile_pos),
                    normal,
                    uv,
                }
            };

            let bottom_left = corner(0, 0, Vec2::new(0.0, 1.0));
            let bottom_right = corner(1, 0, Vec2::new(1.0, 1.0));
            let top_left = corner(0, 1, Vec2::new(0.0, 0.0));
            let top_right = corner(1, 1, Vec2::new(1.0, 0.0));

            vertices.extend_from_slice(&[
                bottom_left,
                bottom_right,
                top_left,
                top_left,
                bottom_right,
                top_right,
            ]);
        }
    }

    vertices
}

/// Flatten vertices into the `(position, normal, uv)` float stream the
/// renderer uploads.
pub fn vertex_floats(vertices: &[Vertex]) -> Vec<f32> {
    vertices.iter().flat_map(|v| v.to_array()).collect()
}

/// The six triangles around a grid vertex, as (dx, dz) offsets from it.
/// Each is wound so that `(b - a) x (c - a)` points up.
const FAN: [[(isize, isize); 3]; 6] = [
    [(0, 0), (0, -1), (-1, 0)],
    [(0, -1), (0, 0), (1, -1)],
    [(1, 0), (1, -1), (0, 0)],
    [(-1, 0), (-1, 1), (0, 0)],
    [(0, 1), (0, 0), (-1, 1)],
    [(0, 0), (0, 1), (1, 0)],
];

/// Normal at tile-space grid vertex `(tx, tz)`, averaged from the faces of
/// the six triangles that meet there. Needs one ring of neighbors.
fn smoothed_normal(field: &HeightField, tx: usize, tz: usize) -> Vec3 {
    let scale = field.scale();
    let point = |(dx, dz): (isize, isize)| {
        let nx = tx.wrapping_add_signed(dx);
        let nz = tz.wrapping_add_signed(dz);
        Vec3::new(dx as f32, field.corner(nx, nz), dz as f32) * scale
    };

    FAN.iter()
        .map(|&[a, b, c]| {
            let (a, b, c) = (point(a), point(b), point(c));
            (b - a).cross(c - a)
        })
        .sum::<Vec3>()
        .normalize()
}
