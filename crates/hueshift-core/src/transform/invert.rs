//! Color inversion.

use crate::Bgr8;

/// Replace every channel with `255 - channel`.
///
/// Inverting twice returns the original buffer exactly.
pub fn invert_pixels(pixels: &[Bgr8]) -> Vec<Bgr8> {
    pixels.iter().map(|px| px.inverted()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invert_black_and_white() {
        let out = invert_pixels(&[Bgr8::new(0, 0, 0), Bgr8::new(255, 255, 255)]);
        assert_eq!(out, vec![Bgr8::new(255, 255, 255), Bgr8::new(0, 0, 0)]);
    }

    #[test]
    fn test_invert_mixed_channels() {
        let out = invert_pixels(&[Bgr8::new(10, 128, 250)]);
        assert_eq!(out, vec![Bgr8::new(245, 127, 5)]);
    }
}
