//! HeightField: a square grid of height samples placed in the world.
//!
//! Tile space has integer sample coordinates and unit tiles. World space
//! is reached by offsetting tile space so the grid is centered on the
//! origin, then scaling per axis.

use std::path::Path;

use glam::{Mat4, Vec2, Vec3};
use image::{DynamicImage, RgbaImage};
use ld40_core::constants::{HEIGHTMAP_ZERO_LEVEL, RAY_STEP_FRACTION};

use crate::error::TerrainError;

/// Immutable square height grid with its world transform.
#[derive(Debug, Clone, PartialEq)]
pub struct HeightField {
    /// Row-major samples in image order: row 0 is the far (+z) edge.
    heights: Vec<f32>,
    /// Samples per row and per column.
    side: usize,
    /// Applied after the offset.
    scale: Vec3,
}

impl HeightField {
    /// Build a field from `side * side` row-major samples with unit scale.
    pub fn from_heights(side: usize, heights: Vec<f32>) -> Result<Self, TerrainError> {
        if side < 2 {
            return Err(TerrainError::TooSmall { side });
        }
        let expected = side * side;
        if heights.len() != expected {
            return Err(TerrainError::SampleCount {
                expected,
                actual: heights.len(),
            });
        }
        Ok(Self {
            heights,
            side,
            scale: Vec3::ONE,
        })
    }

    /// Build a field by evaluating `f(row, col)` for every sample.
    pub fn from_fn(
        side: usize,
        mut f: impl FnMut(usize, usize) -> f32,
    ) -> Result<Self, TerrainError> {
        let mut heights = Vec::with_capacity(side * side);
        for row in 0..side {
            for col in 0..side {
                heights.push(f(row, col));
            }
        }
        Self::from_heights(side, heights)
    }

    /// Build a field from the red channel of a square image.
    ///
    /// Each byte `b` becomes the sample `(b - 127) * height_per_pixel`.
    pub fn from_rgba(image: &RgbaImage, height_per_pixel: f32) -> Result<Self, TerrainError> {
        let (width, height) = image.dimensions();
        if width != height {
            return Err(TerrainError::NonSquare { width, height });
        }
        let zero = HEIGHTMAP_ZERO_LEVEL as f32;
        let heights = image
            .pixels()
            .map(|p| (p.0[0] as f32 - zero) * height_per_pixel)
            .collect();
        Self::from_heights(width as usize, heights)
    }

    /// Like [`HeightField::from_rgba`] for any decoded image.
    pub fn from_image(image: &DynamicImage, height_per_pixel: f32) -> Result<Self, TerrainError> {
        if image.width() != image.height() {
            return Err(TerrainError::NonSquare {
                width: image.width(),
                height: image.height(),
            });
        }
        match image.as_rgba8() {
            Some(rgba) => Self::from_rgba(rgba, height_per_pixel),
            None => Self::from_rgba(&image.to_rgba8(), height_per_pixel),
        }
    }

    /// Decode an encoded image (PNG) from memory.
    pub fn from_png_bytes(bytes: &[u8], height_per_pixel: f32) -> Result<Self, TerrainError> {
        let image = image::load_from_memory(bytes)?;
        Self::from_image(&image, height_per_pixel)
    }

    /// Load a heightmap image from disk.
    pub fn load(path: &Path, height_per_pixel: f32) -> Result<Self, TerrainError> {
        let bytes = std::fs::read(path)?;
        let field = Self::from_png_bytes(&bytes, height_per_pixel)?;
        tracing::debug!(
            path = %path.display(),
            side = field.side,
            min = field.min_height(),
            max = field.max_height(),
            "loaded heightfield"
        );
        Ok(field)
    }

    /// Set the world scale. Done once, before the field is shared.
    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    pub fn scale(&self) -> Vec3 {
        self.scale
    }

    /// Samples per row and per column (N).
    pub fn side(&self) -> usize {
        self.side
    }

    /// Tiles per axis (N - 1).
    pub fn size(&self) -> usize {
        self.side - 1
    }

    /// Translation that centers the grid on the origin in tile space.
    pub fn offset(&self) -> Vec3 {
        let half = -(self.size() as f32) / 2.0;
        Vec3::new(half, 0.0, half)
    }

    /// Tile space to world space: offset first, then scale.
    pub fn model_transform(&self) -> Mat4 {
        Mat4::from_scale(self.scale) * Mat4::from_translation(self.offset())
    }

    pub fn tile_to_world(&self, p: Vec3) -> Vec3 {
        (p + self.offset()) * self.scale
    }

    /// World (x, z) to tile-space (x, z).
    pub fn world_to_tile(&self, x: f32, z: f32) -> Vec2 {
        let offset = self.offset();
        Vec2::new(x / self.scale.x - offset.x, z / self.scale.z - offset.z)
    }

    /// World-space (x, z) rectangle covered by the grid, as (min, max).
    pub fn footprint(&self) -> (Vec2, Vec2) {
        let min = self.tile_to_world(Vec3::ZERO);
        let size = self.size() as f32;
        let max = self.tile_to_world(Vec3::new(size, 0.0, size));
        (Vec2::new(min.x, min.z), Vec2::new(max.x, max.z))
    }

    /// Flat index of grid sample `(row, col)`, if it exists.
    pub fn index(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.side && col < self.side).then(|| row * self.side + col)
    }

    /// Raw (unscaled) sample at grid `(row, col)`.
    pub fn sample(&self, row: usize, col: usize) -> Option<f32> {
        self.index(row, col).map(|i| self.heights[i])
    }

    /// All raw samples, row-major.
    pub fn heights(&self) -> &[f32] {
        &self.heights
    }

    /// Raw sample at tile-space corner `(tx, tz)`, both in `0..=size`.
    ///
    /// Tile row 0 is the last image row.
    pub(crate) fn corner(&self, tx: usize, tz: usize) -> f32 {
        debug_assert!(tx <= self.size() && tz <= self.size());
        self.heights[(self.size() - tz) * self.side + tx]
    }

    pub fn min_height(&self) -> f32 {
        self.heights.iter().copied().fold(f32::INFINITY, f32::min)
    }

    pub fn max_height(&self) -> f32 {
        self.heights.iter().copied().fold(f32::NEG_INFINITY, f32::max)
    }

    /// Raycast step length: half the finer horizontal scale.
    pub fn ray_step(&self) -> f32 {
        RAY_STEP_FRACTION * self.scale.x.min(self.scale.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn encode_png(image: &RgbaImage) -> Vec<u8> {
        let mut bytes = Vec::new();
        image
            .write_to(&mut std::io::Cursor::new(&mut bytes), image::ImageFormat::Png)
            .unwrap();
        bytes
    }

    #[test]
    fn test_from_heights_validates_shape() {
        assert!(HeightField::from_heights(3, vec![0.0; 9]).is_ok());
        assert!(matches!(
            HeightField::from_heights(3, vec![0.0; 8]),
            Err(TerrainError::SampleCount {
                expected: 9,
                actual: 8
            })
        ));
        assert!(matches!(
            HeightField::from_heights(1, vec![0.0]),
            Err(TerrainError::TooSmall { side: 1 })
        ));
    }

    #[test]
    fn test_derived_size_and_offset() {
        let field = HeightField::from_heights(5, vec![0.0; 25]).unwrap();
        assert_eq!(field.side(), 5);
        assert_eq!(field.size(), 4);
        assert_eq!(field.offset(), Vec3::new(-2.0, 0.0, -2.0));
        assert_eq!(field.scale(), Vec3::ONE);
    }

    #[test]
    fn test_red_channel_mapping() {
        let mut image = RgbaImage::from_pixel(2, 2, Rgba([127, 0, 0, 255]));
        image.put_pixel(1, 0, Rgba([254, 9, 9, 255]));
        image.put_pixel(0, 1, Rgba([0, 200, 200, 255]));

        let field = HeightField::from_rgba(&image, 0.5).unwrap();
        assert_eq!(field.heights(), &[0.0, 63.5, -63.5, 0.0]);
    }

    #[test]
    fn test_uniform_gray_is_flat() {
        let image = RgbaImage::from_pixel(8, 8, Rgba([127, 127, 127, 255]));
        let field = HeightField::from_rgba(&image, 1.0 / 127.0).unwrap();
        assert!(field.heights().iter().all(|&h| h == 0.0));
    }

    #[test]
    fn test_non_square_image_rejected() {
        let image = RgbaImage::new(4, 3);
        let err = HeightField::from_rgba(&image, 1.0).unwrap_err();
        assert!(matches!(
            err,
            TerrainError::NonSquare {
                width: 4,
                height: 3
            }
        ));
        assert!(err.to_string().contains("non-square"));

        let dynamic = DynamicImage::ImageRgba8(RgbaImage::new(2, 5));
        assert!(matches!(
            HeightField::from_image(&dynamic, 1.0),
            Err(TerrainError::NonSquare { .. })
        ));
    }

    #[test]
    fn test_grayscale_image_uses_luma_as_red() {
        let gray = image::GrayImage::from_pixel(3, 3, image::Luma([137]));
        let field = HeightField::from_image(&DynamicImage::ImageLuma8(gray), 0.1).unwrap();
        assert!(field.heights().iter().all(|&h| (h - 1.0).abs() < 1e-5));
    }

    #[test]
    fn test_png_bytes_roundtrip() {
        let mut image = RgbaImage::from_pixel(3, 3, Rgba([127, 127, 127, 255]));
        image.put_pixel(1, 1, Rgba([255, 0, 0, 255]));
        let field = HeightField::from_png_bytes(&encode_png(&image), 1.0).unwrap();
        assert_eq!(field.sample(1, 1), Some(128.0));
        assert_eq!(field.sample(0, 0), Some(0.0));
    }

    #[test]
    fn test_garbage_bytes_are_an_image_error() {
        let result = HeightField::from_png_bytes(b"not a png", 1.0);
        assert!(matches!(result, Err(TerrainError::Image(_))));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = HeightField::load(Path::new("/no/such/heights.png"), 1.0);
        assert!(matches!(result, Err(TerrainError::Io(_))));
    }

    #[test]
    fn test_sample_bounds() {
        let field = HeightField::from_fn(3, |row, col| (row * 10 + col) as f32).unwrap();
        assert_eq!(field.sample(2, 1), Some(21.0));
        assert_eq!(field.index(2, 1), Some(7));
        assert_eq!(field.sample(3, 0), None);
        assert_eq!(field.sample(0, 3), None);
    }

    #[test]
    fn test_corner_flips_rows() {
        // Tile row 0 reads the last image row.
        let field = HeightField::from_fn(3, |row, col| (row * 10 + col) as f32).unwrap();
        assert_eq!(field.corner(0, 0), 20.0);
        assert_eq!(field.corner(2, 0), 22.0);
        assert_eq!(field.corner(0, 2), 0.0);
        assert_eq!(field.corner(1, 1), 11.0);
    }

    #[test]
    fn test_model_transform_matches_tile_to_world() {
        let field = HeightField::from_heights(5, vec![0.0; 25])
            .unwrap()
            .with_scale(Vec3::new(0.25, 1.3, 0.5));
        let p = Vec3::new(3.0, 0.7, 1.0);
        let via_matrix = field.model_transform().transform_point3(p);
        assert!((via_matrix - field.tile_to_world(p)).length() < 1e-6);
        assert!((via_matrix - Vec3::new(0.25, 0.91, -0.5)).length() < 1e-6);
    }

    #[test]
    fn test_world_to_tile_inverts_tile_to_world() {
        let field = HeightField::from_heights(9, vec![0.0; 81])
            .unwrap()
            .with_scale(Vec3::new(0.25, 1.3, 0.5));
        let world = field.tile_to_world(Vec3::new(6.5, 0.0, 1.25));
        let tile = field.world_to_tile(world.x, world.z);
        assert!((tile - Vec2::new(6.5, 1.25)).length() < 1e-5);
    }

    #[test]
    fn test_footprint_is_centered() {
        let field = HeightField::from_heights(5, vec![0.0; 25])
            .unwrap()
            .with_scale(Vec3::new(0.25, 1.0, 0.5));
        let (min, max) = field.footprint();
        assert_eq!(min, Vec2::new(-0.5, -1.0));
        assert_eq!(max, Vec2::new(0.5, 1.0));
    }

    #[test]
    fn test_height_range_and_ray_step() {
        let field = HeightField::from_fn(3, |row, col| row as f32 - col as f32)
            .unwrap()
            .with_scale(Vec3::new(0.25, 2.0, 0.5));
        assert_eq!(field.min_height(), -2.0);
        assert_eq!(field.max_height(), 2.0);
        assert_eq!(field.ray_step(), 0.125);
    }
}
