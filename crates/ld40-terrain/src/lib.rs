//! Terrain system for LD40.
//!
//! Heightmap loading, analytic height queries, render mesh generation
//! and raycasting against the terrain surface. Everything here is
//! read-only once a [`HeightField`] is built.

pub use ld40_core as core;

pub mod error;
pub mod field;
pub mod intersect;
pub mod mesh;
pub mod query;
pub mod raycast;

// Re-export key types for convenience.
pub use error::TerrainError;
pub use field::HeightField;
pub use intersect::plane_line_intersection;
pub use mesh::{height_field_vertices, vertex_floats, Vertex};
pub use query::HeightSource;
pub use raycast::{raycast_terrain, RayHit};
