//! Bitmap decoding.
//!
//! Reads uncompressed 24-bit bitmaps: a 14-byte file header, a 40-byte info
//! header, then packed BGR triples with no row padding.
//!
//! # Limitations
//!
//! - Rows are kept in on-disk order. The sign of the height field, which
//!   marks a top-down bitmap, is discarded, so top-down files come out
//!   vertically mirrored relative to a full bitmap reader.
//! - Row stride is assumed to equal `width * 3`; files whose rows carry
//!   alignment padding fail the pixel count check.
//! - Compressed, paletted and 32-bit files are not supported.
//!
//! # Examples
//!
//! ```ignore
//! use hueshift_core::decode::{read_bitmap, DecodeOptions};
//!
//! let bitmap = read_bitmap("image.bmp", &DecodeOptions::default()).unwrap();
//! println!("Decoded {}x{} bitmap", bitmap.width(), bitmap.height());
//! ```

mod bmp;
mod types;

pub use bmp::{
    decode_bitmap, decode_bitmap_with, parse_header, read_bitmap, BitmapHeader,
    FILE_HEADER_SIZE, HEADER_SIZE, INFO_HEADER_SIZE,
};
pub use types::{DecodeError, DecodeOptions, ImageLimits};

#[cfg(test)]
pub(crate) use bmp::tests::bmp_bytes as bmp_test_bytes;
