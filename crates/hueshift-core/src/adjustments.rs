//! HSL recoloring of pixel buffers.
//!
//! For each pixel:
//! 1. Convert to integer HSL
//! 2. Rotate hue by `adjustment.hue` (mod 360)
//! 3. Scale saturation by `1 + saturation/100`, capped at 100 (no floor)
//! 4. Scale lightness by `1 + lightness/100`, clamped to `[0, 100]`
//! 5. Convert back to RGB
//!
//! A zero adjustment is still run through the conversion, so it is not a
//! bit-exact identity for saturated colors.

use crate::color::{hsl_to_rgb, rgb_to_hsl};
use crate::{Bgr8, ColorAdjustment};

/// Recolor a whole buffer, returning a new one.
///
/// # Example
/// ```
/// use hueshift_core::{adjustments::apply_color_adjustment, Bgr8, ColorAdjustment};
///
/// let white = vec![Bgr8::new(255, 255, 255)];
/// let out = apply_color_adjustment(&white, &ColorAdjustment::new(180, 0, 0));
/// assert_eq!(out, white); // gray has no hue to rotate
/// ```
pub fn apply_color_adjustment(pixels: &[Bgr8], adjustment: &ColorAdjustment) -> Vec<Bgr8> {
    pixels
        .iter()
        .map(|&px| recolor_pixel(px, adjustment))
        .collect()
}

/// Recolor a single pixel.
#[inline]
pub fn recolor_pixel(px: Bgr8, adjustment: &ColorAdjustment) -> Bgr8 {
    let (h, s, l) = rgb_to_hsl(px.r, px.g, px.b);

    let h = (h + adjustment.hue).rem_euclid(360);
    let s = scale_saturation(s, adjustment.saturation);
    let l = scale_lightness(l, adjustment.lightness);

    let (r, g, b) = hsl_to_rgb(f64::from(h), s, l);
    Bgr8::from_rgb(r, g, b)
}

/// Saturation is capped at 100 but may go negative for offsets below -100.
#[inline]
fn scale_saturation(s: i32, offset: i32) -> f64 {
    let scaled = f64::from(s) * (1.0 + f64::from(offset) / 100.0);
    scaled.min(100.0)
}

#[inline]
fn scale_lightness(l: i32, offset: i32) -> f64 {
    let scaled = f64::from(l) * (1.0 + f64::from(offset) / 100.0);
    scaled.clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(px: Bgr8, hue: i32, saturation: i32, lightness: i32) -> Bgr8 {
        recolor_pixel(px, &ColorAdjustment::new(hue, saturation, lightness))
    }

    // ===== Identity Tests =====

    #[test]
    fn test_black_unchanged_by_zero_adjustment() {
        let black = Bgr8::new(0, 0, 0);
        assert_eq!(apply(black, 0, 0, 0), black);
    }

    #[test]
    fn test_primaries_unchanged_by_zero_adjustment() {
        for px in [
            Bgr8::from_rgb(255, 0, 0),
            Bgr8::from_rgb(0, 255, 0),
            Bgr8::from_rgb(0, 0, 255),
        ] {
            assert_eq!(apply(px, 0, 0, 0), px);
        }
    }

    #[test]
    fn test_white_invariant_under_hue() {
        let white = Bgr8::new(255, 255, 255);
        for hue in [0, 45, 90, 180, 270, 359] {
            assert_eq!(apply(white, hue, 0, 0), white, "hue {hue}");
        }
    }

    // ===== Hue Tests =====

    #[test]
    fn test_hue_rotates_red_to_green() {
        let red = Bgr8::from_rgb(255, 0, 0);
        assert_eq!(apply(red, 120, 0, 0), Bgr8::from_rgb(0, 255, 0));
        assert_eq!(apply(red, 240, 0, 0), Bgr8::from_rgb(0, 0, 255));
    }

    #[test]
    fn test_hue_wraps_modulo_360() {
        let px = Bgr8::from_rgb(200, 80, 30);
        assert_eq!(apply(px, 370, 10, -10), apply(px, 10, 10, -10));
        assert_eq!(apply(px, -30, 0, 0), apply(px, 330, 0, 0));
    }

    // ===== Saturation Tests =====

    #[test]
    fn test_full_desaturation_gives_gray() {
        let px = Bgr8::from_rgb(200, 80, 30);
        let out = apply(px, 0, -100, 0);
        assert_eq!(out.r, out.g);
        assert_eq!(out.g, out.b);
    }

    #[test]
    fn test_saturation_capped_at_100() {
        let red = Bgr8::from_rgb(255, 0, 0);
        // Already at 100% saturation, boosting changes nothing.
        assert_eq!(apply(red, 0, 100, 0), red);
    }

    #[test]
    fn test_saturation_has_no_floor() {
        assert_eq!(scale_saturation(50, -300), -100.0);
        assert_eq!(scale_saturation(80, 100), 100.0);
    }

    // ===== Lightness Tests =====

    #[test]
    fn test_lightness_clamped_both_ends() {
        assert_eq!(scale_lightness(60, 100), 100.0);
        assert_eq!(scale_lightness(60, -300), 0.0);
        assert_eq!(scale_lightness(40, 50), 60.0);
    }

    #[test]
    fn test_lightness_extremes() {
        let px = Bgr8::from_rgb(120, 60, 200);
        assert_eq!(apply(px, 0, 0, -100), Bgr8::new(0, 0, 0));
        // Doubling lightness of an l >= 50 color saturates to white.
        let light = Bgr8::from_rgb(200, 180, 220);
        assert_eq!(apply(light, 0, 0, 100), Bgr8::new(255, 255, 255));
    }

    // ===== Buffer Tests =====

    #[test]
    fn test_buffer_length_preserved() {
        let pixels = vec![Bgr8::from_rgb(10, 20, 30); 7];
        let out = apply_color_adjustment(&pixels, &ColorAdjustment::new(90, 20, 20));
        assert_eq!(out.len(), 7);
    }

    #[test]
    fn test_empty_buffer() {
        let out = apply_color_adjustment(&[], &ColorAdjustment::default());
        assert!(out.is_empty());
    }
}
