//! Blue color-grade filter.
//!
//! Two modes are supported:
//!
//! - **Shift**: dampens red and boosts blue, green untouched.
//!   `r' = r * (1 - 0.25s)`, `b' = min(255, b + 90s)`
//! - **Tint**: linear blend of every channel toward the reference blue
//!   `(0, 90, 255)`. `c' = round(c * (1 - s) + ref * s)`
//!
//! where `s = clamp(strength, 0, 100) / 100`. Alpha is never modified.
//!
//! The transform is a pure per-pixel function; pixel order does not matter.

use serde::{Deserialize, Serialize};

use crate::decode::{Bitmap, CHANNELS};
use crate::fit::round_half_up;

/// Reference color the tint mode blends toward.
pub const TINT_REFERENCE: [u8; 3] = [0, 90, 255];

/// Fraction of red removed by shift mode at full strength.
const SHIFT_RED_DAMPING: f64 = 0.25;

/// Amount added to blue by shift mode at full strength.
const SHIFT_BLUE_BOOST: f64 = 90.0;

/// Blending policy of the blue filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlueMode {
    /// Channel bias: less red, more blue.
    #[default]
    Shift,
    /// Blend toward a fixed blue.
    Tint,
}

/// Parameters of a single filter application.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorTransformRequest {
    /// Filter strength, 0 to 100. Out-of-range values are clamped.
    pub strength: f64,
    pub mode: BlueMode,
}

impl ColorTransformRequest {
    pub fn new(strength: f64, mode: BlueMode) -> Self {
        Self { strength, mode }
    }

    /// Normalized strength in [0, 1]. NaN counts as zero.
    pub fn normalized_strength(&self) -> f64 {
        if self.strength.is_nan() {
            return 0.0;
        }
        self.strength.clamp(0.0, 100.0) / 100.0
    }
}

/// Apply the filter to a bitmap, consuming and returning it.
///
/// The pixel buffer is rewritten in place; dimensions are unchanged.
///
/// # Example
/// ```
/// use a4kit_core::decode::Bitmap;
/// use a4kit_core::filter::{apply_color_transform, BlueMode, ColorTransformRequest};
///
/// let red = Bitmap::filled(1, 1, [255, 0, 0, 255]);
/// let out = apply_color_transform(red, ColorTransformRequest::new(50.0, BlueMode::Shift));
/// assert_eq!(out.pixels, vec![223, 0, 45, 255]);
/// ```
pub fn apply_color_transform(mut bitmap: Bitmap, request: ColorTransformRequest) -> Bitmap {
    apply_color_transform_in_place(&mut bitmap.pixels, request);
    bitmap
}

/// Apply the filter to RGBA pixel data in place.
///
/// # Arguments
/// * `pixels` - RGBA pixel data (4 bytes per pixel, row-major order)
/// * `request` - Strength and mode
pub fn apply_color_transform_in_place(pixels: &mut [u8], request: ColorTransformRequest) {
    let s = request.normalized_strength();

    // Early exit: both modes are the identity at zero strength
    if s == 0.0 {
        return;
    }

    match request.mode {
        BlueMode::Shift => {
            let red_factor = 1.0 - SHIFT_RED_DAMPING * s;
            let blue_boost = SHIFT_BLUE_BOOST * s;
            for px in pixels.chunks_exact_mut(CHANNELS) {
                px[0] = to_clamped_u8((px[0] as f64 * red_factor).max(0.0));
                px[2] = to_clamped_u8((px[2] as f64 + blue_boost).min(255.0));
            }
        }
        BlueMode::Tint => {
            let keep = 1.0 - s;
            for px in pixels.chunks_exact_mut(CHANNELS) {
                for (c, reference) in px[..3].iter_mut().zip(TINT_REFERENCE) {
                    let blended = *c as f64 * keep + reference as f64 * s;
                    *c = to_clamped_u8(round_half_up(blended));
                }
            }
        }
    }
}

/// Store a float the way a clamped 8-bit canvas buffer does:
/// clamp to [0, 255], round half to even.
#[inline]
fn to_clamped_u8(value: f64) -> u8 {
    if value.is_nan() {
        return 0;
    }
    value.clamp(0.0, 255.0).round_ties_even() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(pixel: [u8; 4], strength: f64, mode: BlueMode) -> [u8; 4] {
        let mut px = pixel;
        apply_color_transform_in_place(&mut px, ColorTransformRequest::new(strength, mode));
        px
    }

    #[test]
    fn test_shift_half_strength_on_red() {
        // 255 * 0.875 = 223.125, 0 + 45 = 45
        assert_eq!(run([255, 0, 0, 255], 50.0, BlueMode::Shift), [223, 0, 45, 255]);
    }

    #[test]
    fn test_shift_full_strength() {
        // 200 * 0.75 = 150, 100 + 90 = 190
        assert_eq!(run([200, 50, 100, 7], 100.0, BlueMode::Shift), [150, 50, 190, 7]);
    }

    #[test]
    fn test_shift_blue_saturates() {
        assert_eq!(run([0, 0, 250, 255], 100.0, BlueMode::Shift), [0, 0, 255, 255]);
    }

    #[test]
    fn test_shift_rounds_half_to_even() {
        // 10 * (1 - 0.25 * 0.2) = 9.5 -> 10, 30 * 0.95 = 28.5 -> 28
        assert_eq!(run([10, 0, 0, 255], 20.0, BlueMode::Shift)[0], 10);
        assert_eq!(run([30, 0, 0, 255], 20.0, BlueMode::Shift)[0], 28);
    }

    #[test]
    fn test_tint_full_strength_is_reference() {
        assert_eq!(run([12, 200, 3, 99], 100.0, BlueMode::Tint), [0, 90, 255, 99]);
    }

    #[test]
    fn test_tint_half_strength() {
        // (255 + 0) / 2 = 127.5 -> 128, (0 + 90) / 2 = 45, (0 + 255) / 2 = 127.5 -> 128
        assert_eq!(run([255, 0, 0, 255], 50.0, BlueMode::Tint), [128, 45, 128, 255]);
    }

    #[test]
    fn test_zero_strength_is_identity() {
        let px = [17, 34, 51, 68];
        assert_eq!(run(px, 0.0, BlueMode::Shift), px);
        assert_eq!(run(px, 0.0, BlueMode::Tint), px);
    }

    #[test]
    fn test_strength_is_clamped() {
        let px = [100, 100, 100, 255];
        assert_eq!(run(px, -40.0, BlueMode::Tint), px);
        assert_eq!(run(px, 250.0, BlueMode::Tint), [0, 90, 255, 255]);
        assert_eq!(run(px, f64::NAN, BlueMode::Shift), px);
    }

    #[test]
    fn test_bitmap_consumed_and_returned() {
        let bitmap = Bitmap::filled(3, 2, [255, 0, 0, 200]);
        let out = apply_color_transform(bitmap, ColorTransformRequest::new(100.0, BlueMode::Tint));
        assert_eq!((out.width, out.height), (3, 2));
        assert!(out.pixels.chunks_exact(4).all(|p| p == [0, 90, 255, 200]));
    }

    #[test]
    fn test_trailing_partial_pixel_untouched() {
        let mut pixels = vec![255, 0, 0, 255, 9, 9];
        apply_color_transform_in_place(&mut pixels, ColorTransformRequest::new(100.0, BlueMode::Tint));
        assert_eq!(pixels, vec![0, 90, 255, 255, 9, 9]);
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================
