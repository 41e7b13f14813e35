//! Error types for simulation construction, configuration and export.

/// Errors raised while building a simulation or moving its data in and out.
///
/// Per-frame synthesis never fails; everything here surfaces at a
/// construction or I/O boundary.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A grid dimension is zero or not a power of two.
    #[error("grid dimension {axis} must be a power of two, got {value}")]
    NotPowerOfTwo { axis: &'static str, value: usize },

    /// A physical extent is not a strictly positive finite number.
    #[error("physical extent {axis} must be positive and finite, got {value}")]
    NonPositiveExtent { axis: &'static str, value: f64 },

    /// A spectrum or dispersion parameter is negative or not finite.
    #[error("parameter {name} must be non-negative and finite, got {value}")]
    InvalidParameter { name: &'static str, value: f64 },

    /// The FFT engine was asked for a length it cannot transform.
    #[error("FFT length must be a power of two, got {0}")]
    FftLength(usize),

    /// A surface mesh has more vertices than `u32` indices can address.
    #[error("mesh for a {nx}x{ny} grid exceeds u32 vertex indices")]
    MeshTooLarge { nx: usize, ny: usize },

    /// Failed to read a parameter file from disk.
    #[error("failed to read config: {0}")]
    ConfigRead(#[source] std::io::Error),

    /// Failed to write a parameter file to disk.
    #[error("failed to write config: {0}")]
    ConfigWrite(#[source] std::io::Error),

    /// Failed to parse RON content.
    #[error("failed to parse config: {0}")]
    ConfigParse(#[source] ron::error::SpannedError),

    /// Failed to serialize parameters to RON.
    #[error("failed to serialize config: {0}")]
    ConfigSerialize(#[source] ron::Error),

    /// Failed to encode or write a height map image.
    #[error("failed to export height map: {0}")]
    Image(#[from] image::ImageError),

    /// Failed to prepare an output directory.
    #[error("failed to create output directory: {0}")]
    OutputDir(#[source] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
