use thiserror::Error;

/// Failures while building a [`crate::HeightField`].
///
/// Queries never fail; only construction does.
#[derive(Debug, Error)]
pub enum TerrainError {
    #[error("cannot build non-square terrain from a {width}x{height} heightmap")]
    NonSquare { width: u32, height: u32 },

    #[error("terrain needs at least 2x2 samples, got {side}x{side}")]
    TooSmall { side: usize },

    #[error("expected {expected} height samples, got {actual}")]
    SampleCount { expected: usize, actual: usize },

    #[error("cannot decode heightmap: {0}")]
    Image(#[from] image::ImageError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
