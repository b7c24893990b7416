//! Core types for bitmap decoding.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error types for bitmap decoding operations.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// I/O error while opening or reading the file.
    #[error("I/O error: {0}")]
    Io(String),

    /// Fewer bytes than the fixed 54-byte header region.
    #[error("Header too short: need 54 bytes, got {len}")]
    HeaderTooShort { len: usize },

    /// The file does not start with `BM` (only checked when requested).
    #[error("Invalid bitmap signature: {0:?}")]
    InvalidSignature([u8; 2]),

    /// Width or height is zero.
    #[error("Image has zero width or height")]
    ZeroDimensions,

    /// Dimensions exceed the configured limits.
    #[error("Dimensions too large: {width}x{height}")]
    DimensionsTooLarge { width: u32, height: u32 },

    /// Pixel data length is not a whole number of 3-byte pixels.
    #[error("Pixel data length {len} is not a multiple of 3")]
    PixelDataNotAligned { len: usize },

    /// Pixel count does not match `width * height`.
    #[error("Pixel count mismatch: expected {expected}, got {actual}")]
    PixelCountMismatch { expected: usize, actual: usize },
}

impl From<std::io::Error> for DecodeError {
    fn from(err: std::io::Error) -> Self {
        DecodeError::Io(err.to_string())
    }
}

/// Options controlling how strictly a bitmap is validated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecodeOptions {
    /// Reject files that do not start with the `BM` signature.
    pub require_signature: bool,
    /// Size limits applied before the pixel buffer is allocated.
    pub limits: ImageLimits,
}

/// Upper bounds on decoded image size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageLimits {
    /// Maximum width or height in pixels.
    pub max_dimension: u32,
    /// Maximum `width * height`.
    pub max_pixels: u64,
}

impl Default for ImageLimits {
    fn default() -> Self {
        Self {
            max_dimension: 32_768,
            max_pixels: 268_435_456, // 16K x 16K
        }
    }
}

impl ImageLimits {
    /// Clamp to reasonable operating bounds.
    pub fn sanitized(&self) -> Self {
        Self {
            max_dimension: self.max_dimension.clamp(1, 1 << 20),
            max_pixels: self.max_pixels.clamp(1, u64::from(u32::MAX)),
        }
    }

    /// Check `width` x `height` against these limits.
    pub fn check(&self, width: u32, height: u32) -> Result<(), DecodeError> {
        let limits = self.sanitized();
        let pixels = u64::from(width) * u64::from(height);
        if width > limits.max_dimension
            || height > limits.max_dimension
            || pixels > limits.max_pixels
        {
            return Err(DecodeError::DimensionsTooLarge { width, height });
        }
        Ok(())
    }
}
