//! Hueshift Core - Bitmap editing engine
//!
//! This crate decodes uncompressed 24-bit bitmaps into BGR pixel buffers and
//! applies a fixed set of edits to them: HSL recoloring, color inversion,
//! 90-degree rotation in both directions, and axis flips.
//!
//! The [`BitmapEngine`] owns the image state for a session and pushes every
//! freshly computed display buffer to its subscribers.

pub mod adjustments;
pub mod color;
pub mod config;
pub mod decode;
pub mod engine;
pub mod notify;
pub mod transform;

pub use color::{hsl_to_rgb, rgb_to_hsl};
pub use config::{ConfigError, EngineConfig, Geometry};
pub use decode::{decode_bitmap, read_bitmap, DecodeError, DecodeOptions, ImageLimits};
pub use engine::BitmapEngine;
pub use notify::{BusyHook, Operation, SubscriptionId};

use serde::{Deserialize, Serialize};

/// A single 24-bit pixel in on-disk channel order (blue, green, red).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Bgr8 {
    pub b: u8,
    pub g: u8,
    pub r: u8,
}

impl Bgr8 {
    pub const fn new(b: u8, g: u8, r: u8) -> Self {
        Self { b, g, r }
    }

    /// Build a pixel from red, green, blue values.
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self { b, g, r }
    }

    /// Every channel replaced by `255 - channel`.
    #[inline]
    pub const fn inverted(self) -> Self {
        Self {
            b: 255 - self.b,
            g: 255 - self.g,
            r: 255 - self.r,
        }
    }
}

/// Image dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Total number of pixels (`width * height`).
    pub const fn pixel_count(self) -> usize {
        self.width as usize * self.height as usize
    }

    /// The same dimensions with width and height exchanged.
    pub const fn swapped(self) -> Self {
        Self {
            width: self.height,
            height: self.width,
        }
    }
}

/// Recolor request: hue rotation plus saturation and lightness offsets.
///
/// Saturation and lightness are percentages relative to the pixel's own
/// value, so `saturation: 50` scales saturation by 1.5.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorAdjustment {
    /// Hue rotation in degrees (0 to 359)
    pub hue: i32,
    /// Saturation offset in percent (-100 to 100 from the dials, unbounded here)
    pub saturation: i32,
    /// Lightness offset in percent (-100 to 100 from the dials, unbounded here)
    pub lightness: i32,
}

impl ColorAdjustment {
    /// Create an adjustment, wrapping `hue` into `[0, 360)`.
    pub fn new(hue: i32, saturation: i32, lightness: i32) -> Self {
        Self {
            hue: hue.rem_euclid(360),
            saturation,
            lightness,
        }
    }
}

/// A pixel buffer together with its dimensions.
///
/// Pixels are row-major and rows are kept in on-disk order, so for a
/// conventional bottom-up bitmap the first row is the bottom of the picture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    pub dimensions: Dimensions,
    /// `dimensions.pixel_count()` pixels.
    pub pixels: Vec<Bgr8>,
}

impl Bitmap {
    /// Create a bitmap from trusted parts.
    pub fn new(dimensions: Dimensions, pixels: Vec<Bgr8>) -> Self {
        debug_assert_eq!(
            pixels.len(),
            dimensions.pixel_count(),
            "Pixel buffer size mismatch"
        );
        Self { dimensions, pixels }
    }

    /// Create a bitmap, checking that the buffer matches the dimensions.
    pub fn from_parts(width: u32, height: u32, pixels: Vec<Bgr8>) -> Result<Self, DecodeError> {
        let bitmap = Self {
            dimensions: Dimensions::new(width, height),
            pixels,
        };
        bitmap.validate()?;
        Ok(bitmap)
    }

    /// Check for non-zero dimensions and exactly `width * height` pixels.
    pub fn validate(&self) -> Result<(), DecodeError> {
        if self.dimensions.width == 0 || self.dimensions.height == 0 {
            return Err(DecodeError::ZeroDimensions);
        }
        let expected = self.dimensions.pixel_count();
        if self.pixels.len() != expected {
            return Err(DecodeError::PixelCountMismatch {
                expected,
                actual: self.pixels.len(),
            });
        }
        Ok(())
    }

    pub fn width(&self) -> u32 {
        self.dimensions.width
    }

    pub fn height(&self) -> u32 {
        self.dimensions.height
    }

    /// Pixel data as packed BGR bytes, 3 bytes per pixel.
    pub fn to_bgr_bytes(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|p| [p.b, p.g, p.r]).collect()
    }

    /// Pixel data as packed RGB bytes, 3 bytes per pixel.
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|p| [p.r, p.g, p.b]).collect()
    }

    /// Convert to an `image::RgbImage`.
    ///
    /// Buffer row 0 becomes image row 0, which is how the pixels are painted
    /// on screen. For bottom-up bitmaps this shows the picture mirrored
    /// vertically.
    pub fn to_rgb_image(&self) -> Option<image::RgbImage> {
        image::RgbImage::from_raw(self.width(), self.height(), self.to_rgb_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bgr_inverted_twice_is_identity() {
        let px = Bgr8::new(12, 200, 255);
        assert_eq!(px.inverted(), Bgr8::new(243, 55, 0));
        assert_eq!(px.inverted().inverted(), px);
    }

    #[test]
    fn test_from_rgb_channel_order() {
        let px = Bgr8::from_rgb(1, 2, 3);
        assert_eq!((px.b, px.g, px.r), (3, 2, 1));
    }

    #[test]
    fn test_dimensions_swapped() {
        let dims = Dimensions::new(4, 2);
        assert_eq!(dims.swapped(), Dimensions::new(2, 4));
        assert_eq!(dims.pixel_count(), 8);
    }

    #[test]
    fn test_color_adjustment_wraps_hue() {
        assert_eq!(ColorAdjustment::new(370, 0, 0).hue, 10);
        assert_eq!(ColorAdjustment::new(-90, 0, 0).hue, 270);
        assert_eq!(ColorAdjustment::new(360, 5, -5), ColorAdjustment::new(0, 5, -5));
    }

    #[test]
    fn test_bitmap_from_parts_checks_length() {
        let err = Bitmap::from_parts(2, 2, vec![Bgr8::default(); 3]).unwrap_err();
        assert!(matches!(
            err,
            DecodeError::PixelCountMismatch {
                expected: 4,
                actual: 3
            }
        ));

        let err = Bitmap::from_parts(0, 2, vec![]).unwrap_err();
        assert!(matches!(err, DecodeError::ZeroDimensions));

        assert!(Bitmap::from_parts(2, 2, vec![Bgr8::default(); 4]).is_ok());
    }

    #[test]
    fn test_validate_catches_edited_fields() {
        let mut bitmap = Bitmap::new(Dimensions::new(1, 1), vec![Bgr8::default()]);
        assert!(bitmap.validate().is_ok());

        bitmap.pixels.push(Bgr8::default());
        assert!(matches!(
            bitmap.validate(),
            Err(DecodeError::PixelCountMismatch {
                expected: 1,
                actual: 2
            })
        ));

        bitmap.dimensions = Dimensions::new(2, 0);
        assert!(matches!(bitmap.validate(), Err(DecodeError::ZeroDimensions)));
    }

    #[test]
    fn test_byte_conversions() {
        let bitmap = Bitmap::new(
            Dimensions::new(2, 1),
            vec![Bgr8::new(1, 2, 3), Bgr8::new(4, 5, 6)],
        );
        assert_eq!(bitmap.to_bgr_bytes(), vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(bitmap.to_rgb_bytes(), vec![3, 2, 1, 6, 5, 4]);
    }

    #[test]
    fn test_to_rgb_image_keeps_buffer_row_order() {
        let bitmap = Bitmap::new(
            Dimensions::new(1, 2),
            vec![Bgr8::from_rgb(10, 20, 30), Bgr8::from_rgb(40, 50, 60)],
        );
        let img = bitmap.to_rgb_image().unwrap();
        assert_eq!(img.dimensions(), (1, 2));
        assert_eq!(img.get_pixel(0, 0).0, [10, 20, 30]);
        assert_eq!(img.get_pixel(0, 1).0, [40, 50, 60]);
    }
}
