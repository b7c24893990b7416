//! Uncompressed 24-bit bitmap parsing.

use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use super::{DecodeError, DecodeOptions};
use crate::{Bgr8, Bitmap, Dimensions};

/// Size of the `BITMAPFILEHEADER` block.
pub const FILE_HEADER_SIZE: usize = 14;
/// Size of the `BITMAPINFOHEADER` block.
pub const INFO_HEADER_SIZE: usize = 40;
/// Offset of the first pixel byte.
pub const HEADER_SIZE: usize = FILE_HEADER_SIZE + INFO_HEADER_SIZE;

const SIGNATURE: [u8; 2] = *b"BM";

/// Width and height as stored in the info header (signed).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitmapHeader {
    pub width: i32,
    pub height: i32,
}

impl BitmapHeader {
    /// Absolute dimensions; the sign bits are dropped.
    pub fn dimensions(&self) -> Dimensions {
        Dimensions::new(self.width.unsigned_abs(), self.height.unsigned_abs())
    }

    /// A negative height marks rows stored top row first.
    pub fn is_top_down(&self) -> bool {
        self.height < 0
    }
}

/// Parse the fixed header region.
///
/// # Errors
///
/// Returns `DecodeError::HeaderTooShort` if `bytes` is shorter than
/// [`HEADER_SIZE`].
pub fn parse_header(bytes: &[u8]) -> Result<BitmapHeader, DecodeError> {
    if bytes.len() < HEADER_SIZE {
        return Err(DecodeError::HeaderTooShort { len: bytes.len() });
    }
    let info = &bytes[FILE_HEADER_SIZE..HEADER_SIZE];
    Ok(BitmapHeader {
        width: read_i32_le(info, 4),
        height: read_i32_le(info, 8),
    })
}

#[inline]
fn read_i32_le(data: &[u8], offset: usize) -> i32 {
    i32::from_le_bytes([
        data[offset],
        data[offset + 1],
        data[offset + 2],
        data[offset + 3],
    ])
}

/// Decode bitmap bytes with default options.
pub fn decode_bitmap(bytes: &[u8]) -> Result<Bitmap, DecodeError> {
    decode_bitmap_with(bytes, &DecodeOptions::default())
}

/// Decode bitmap bytes into a BGR pixel buffer.
///
/// # Errors
///
/// - `HeaderTooShort` if there are fewer than 54 bytes
/// - `InvalidSignature` if `options.require_signature` is set and the file
///   does not start with `BM`
/// - `ZeroDimensions` / `DimensionsTooLarge` for unusable sizes
/// - `PixelDataNotAligned` if the pixel bytes are not a multiple of 3
/// - `PixelCountMismatch` if the pixel count is not `width * height`
pub fn decode_bitmap_with(bytes: &[u8], options: &DecodeOptions) -> Result<Bitmap, DecodeError> {
    let header = parse_header(bytes)?;

    if options.require_signature && bytes[..2] != SIGNATURE {
        return Err(DecodeError::InvalidSignature([bytes[0], bytes[1]]));
    }

    let dimensions = header.dimensions();
    if dimensions.width == 0 || dimensions.height == 0 {
        return Err(DecodeError::ZeroDimensions);
    }
    if header.width < 0 || header.is_top_down() {
        warn!(
            width = header.width,
            height = header.height,
            "negative bitmap dimension, keeping rows in stored order"
        );
    }
    options.limits.check(dimensions.width, dimensions.height)?;

    let data = &bytes[HEADER_SIZE..];
    if data.len() % 3 != 0 {
        return Err(DecodeError::PixelDataNotAligned { len: data.len() });
    }
    let expected = dimensions.pixel_count();
    let actual = data.len() / 3;
    if actual != expected {
        return Err(DecodeError::PixelCountMismatch { expected, actual });
    }

    let pixels: Vec<Bgr8> = data
        .chunks_exact(3)
        .map(|c| Bgr8::new(c[0], c[1], c[2]))
        .collect();

    debug!(
        width = dimensions.width,
        height = dimensions.height,
        pixels = pixels.len(),
        "decoded bitmap"
    );
    Ok(Bitmap::new(dimensions, pixels))
}

/// Read and decode a bitmap file.
///
/// # Errors
///
/// Returns `DecodeError::Io` if the file cannot be read, otherwise the
/// errors of [`decode_bitmap_with`].
pub fn read_bitmap(path: impl AsRef<Path>, options: &DecodeOptions) -> Result<Bitmap, DecodeError> {
    let path = path.as_ref();
    debug!(path = %path.display(), "reading bitmap");
    let bytes = fs::read(path)?;
    decode_bitmap_with(&bytes, options)
}
