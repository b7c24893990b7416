//! WASM-compatible wrapper types for display frames.

use hueshift_core::Bitmap;
use wasm_bindgen::prelude::*;

/// A display frame for JavaScript.
///
/// Rows are in buffer order: row 0 is painted at the top.
///
/// # Memory Management
///
/// Each pixel accessor copies the frame into a new `Uint8Array`. Frames are
/// rebuilt for every change notification, so hold on to the one you are
/// painting rather than calling the editor again.
#[wasm_bindgen]
pub struct JsFrame {
    bitmap: Bitmap,
}

#[wasm_bindgen]
impl JsFrame {
    /// Get the frame width in pixels
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.bitmap.width()
    }

    /// Get the frame height in pixels
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.bitmap.height()
    }

    /// Get the number of pixels (width * height)
    #[wasm_bindgen(getter)]
    pub fn pixel_count(&self) -> usize {
        self.bitmap.pixels.len()
    }

    /// Pixel data in on-disk BGR order (3 bytes per pixel).
    pub fn bgr_pixels(&self) -> Vec<u8> {
        self.bitmap.to_bgr_bytes()
    }

    /// Pixel data as RGB (3 bytes per pixel).
    pub fn rgb_pixels(&self) -> Vec<u8> {
        self.bitmap.to_rgb_bytes()
    }

    /// Pixel data as opaque RGBA, ready for `ImageData`.
    pub fn rgba_pixels(&self) -> Vec<u8> {
        self.bitmap
            .pixels
            .iter()
            .flat_map(|p| [p.r, p.g, p.b, 255])
            .collect()
    }
}

impl JsFrame {
    pub(crate) fn from_bitmap(bitmap: &Bitmap) -> Self {
        Self {
            bitmap: bitmap.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hueshift_core::{Bgr8, Dimensions};

    fn frame() -> JsFrame {
        JsFrame::from_bitmap(&Bitmap::new(
            Dimensions::new(2, 1),
            vec![Bgr8::new(1, 2, 3), Bgr8::new(4, 5, 6)],
        ))
    }

    #[test]
    fn test_frame_dimensions() {
        let frame = frame();
        assert_eq!(frame.width(), 2);
        assert_eq!(frame.height(), 1);
        assert_eq!(frame.pixel_count(), 2);
    }

    #[test]
    fn test_frame_pixel_layouts() {
        let frame = frame();
        assert_eq!(frame.bgr_pixels(), vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(frame.rgb_pixels(), vec![3, 2, 1, 6, 5, 4]);
        assert_eq!(frame.rgba_pixels(), vec![3, 2, 1, 255, 6, 5, 4, 255]);
    }
}
