//! RGB <-> HSL conversion.
//!
//! Hue is expressed in degrees `[0, 360)`, saturation and lightness in
//! percent `[0, 100]`. All rounding is round-half-to-even, so `x.5` goes to
//! the nearest even integer.
//!
//! ## Precision
//!
//! [`rgb_to_hsl`] rounds to whole degrees and whole percents, which is
//! coarser than the 8-bit channel grid. Converting back with [`hsl_to_rgb`]
//! can therefore land up to 5 levels away from the source channel for
//! strongly saturated colors. [`rgb_to_hsl_exact`] skips the rounding and
//! round-trips to the same channel values.

/// Convert 8-bit RGB to integer HSL `(hue, saturation, lightness)`.
///
/// Hue is in `[0, 360)`, saturation and lightness in `[0, 100]`.
/// Gray pixels (all channels equal) have hue and saturation 0.
///
/// # Example
/// ```
/// use hueshift_core::color::rgb_to_hsl;
///
/// assert_eq!(rgb_to_hsl(255, 0, 0), (0, 100, 50));
/// assert_eq!(rgb_to_hsl(0, 0, 0), (0, 0, 0));
/// ```
pub fn rgb_to_hsl(r: u8, g: u8, b: u8) -> (i32, i32, i32) {
    let (sextant, s, l) = hsl_components(r, g, b);

    let h = (sextant * 60.0).round_ties_even() as i32;
    // A sextant just below 6.0 rounds up to 360 degrees.
    let h = h.rem_euclid(360);

    let s = (s * 100.0).round_ties_even() as i32;
    let l = (l * 100.0).round_ties_even() as i32;
    (h, s, l)
}

/// Convert 8-bit RGB to unrounded HSL.
///
/// Same scale as [`rgb_to_hsl`] (degrees and percent) but without the
/// integer rounding step.
pub fn rgb_to_hsl_exact(r: u8, g: u8, b: u8) -> (f64, f64, f64) {
    let (sextant, s, l) = hsl_components(r, g, b);
    (sextant * 60.0, s * 100.0, l * 100.0)
}

/// Returns `(hue sextant in [0, 6), saturation in [0, 1], lightness in [0, 1])`.
#[inline]
fn hsl_components(r: u8, g: u8, b: u8) -> (f64, f64, f64) {
    let r = f64::from(r) / 255.0;
    let g = f64::from(g) / 255.0;
    let b = f64::from(b) / 255.0;

    let cmax = r.max(g).max(b);
    let cmin = r.min(g).min(b);
    let delta = cmax - cmin;

    let sextant = if delta == 0.0 {
        0.0
    } else if cmax == r {
        ((g - b) / delta).rem_euclid(6.0)
    } else if cmax == g {
        ((b - r) / delta) + 2.0
    } else {
        ((r - g) / delta) + 4.0
    };

    let l = (cmax + cmin) / 2.0;

    let s = if delta == 0.0 {
        0.0
    } else {
        delta / (1.0 - (2.0 * l - 1.0).abs())
    };

    (sextant, s, l)
}

/// Convert HSL to 8-bit RGB `(red, green, blue)`.
///
/// Inputs are floating point so that scaled saturation and lightness can be
/// passed through without an intermediate rounding step. Saturation outside
/// `[0, 100]` is not rejected; every output channel is clamped to `[0, 255]`.
///
/// # Example
/// ```
/// use hueshift_core::color::hsl_to_rgb;
///
/// assert_eq!(hsl_to_rgb(120.0, 100.0, 50.0), (0, 255, 0));
/// ```
pub fn hsl_to_rgb(h: f64, s: f64, l: f64) -> (u8, u8, u8) {
    let h = h / 360.0;
    let s = s / 100.0;
    let l = l / 100.0;

    let (r, g, b) = if s == 0.0 {
        (l, l, l)
    } else {
        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;
        (
            hue_to_rgb(p, q, h + 1.0 / 3.0),
            hue_to_rgb(p, q, h),
            hue_to_rgb(p, q, h - 1.0 / 3.0),
        )
    };

    (to_channel(r), to_channel(g), to_channel(b))
}

/// Map a channel offset `t` through the piecewise-linear hue ramp.
#[inline]
fn hue_to_rgb(p: f64, q: f64, t: f64) -> f64 {
    let mut t = t;
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        return p + (q - p) * 6.0 * t;
    }
    if t < 1.0 / 2.0 {
        return q;
    }
    if t < 2.0 / 3.0 {
        return p + (q - p) * (2.0 / 3.0 - t) * 6.0;
    }
    p
}

#[inline]
fn to_channel(v: f64) -> u8 {
    (v * 255.0).round_ties_even().clamp(0.0, 255.0) as u8
}


// ============================================================================
// Property-Based Tests
// ============================================================================
