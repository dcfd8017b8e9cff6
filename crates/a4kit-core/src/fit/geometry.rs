//! Contain/cover fitting and DPI-driven page sizing.
//!
//! All rounding follows the browser's `Math.round`: halves round toward
//! positive infinity, so `-0.5` becomes `0` and `2.5` becomes `3`.

use serde::{Deserialize, Serialize};

/// A4 width in inches (210 mm).
pub const A4_WIDTH_IN: f64 = 8.27;
/// A4 height in inches (297 mm).
pub const A4_HEIGHT_IN: f64 = 11.69;

/// How a source rectangle is fitted into a target rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FitMode {
    /// Scale to fit entirely inside the target, letterboxing the rest.
    #[default]
    Contain,
    /// Scale to fill the target completely, overflowing on one axis.
    Cover,
}

/// Placement of a scaled source inside a target rectangle, in pixels.
///
/// Offsets are signed: in cover mode the drawn rectangle overflows the
/// target and the offset on the overflowing axis is negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FitResult {
    pub draw_width: u32,
    pub draw_height: u32,
    pub offset_x: i32,
    pub offset_y: i32,
}

/// Pixel dimensions of a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PageSize {
    pub width: u32,
    pub height: u32,
}

/// `Math.round` semantics.
#[inline]
pub(crate) fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Compute where a `source_w`x`source_h` image lands inside a
/// `target_w`x`target_h` canvas.
///
/// The scaled image is centered on both axes. A zero source dimension
/// yields an empty result rather than dividing by zero.
///
/// # Example
///
/// ```
/// use a4kit_core::fit::{compute_fit, FitMode};
///
/// let fit = compute_fit(800, 600, 1241, 1754, FitMode::Contain);
/// assert_eq!(fit.draw_width, 1241);
/// assert_eq!(fit.offset_x, 0);
/// ```
pub fn compute_fit(
    source_w: u32,
    source_h: u32,
    target_w: u32,
    target_h: u32,
    mode: FitMode,
) -> FitResult {
    if source_w == 0 || source_h == 0 {
        return FitResult::default();
    }

    let (sw, sh) = (source_w as f64, source_h as f64);
    let (tw, th) = (target_w as f64, target_h as f64);

    let scale_x = tw / sw;
    let scale_y = th / sh;
    let scale = match mode {
        FitMode::Cover => scale_x.max(scale_y),
        FitMode::Contain => scale_x.min(scale_y),
    };

    let draw_w = round_half_up(sw * scale);
    let draw_h = round_half_up(sh * scale);

    FitResult {
        draw_width: draw_w as u32,
        draw_height: draw_h as u32,
        offset_x: round_half_up((tw - draw_w) / 2.0) as i32,
        offset_y: round_half_up((th - draw_h) / 2.0) as i32,
    }
}

/// Pixel dimensions of an A4 page at the given DPI.
///
/// DPI is not clamped. Zero, negative or non-finite DPI gives a zero-sized
/// page, which the compositor then refuses to render.
pub fn compute_page_size_from_dpi(dpi: f64) -> PageSize {
    if !dpi.is_finite() || dpi <= 0.0 {
        return PageSize::default();
    }

    PageSize {
        width: round_half_up(A4_WIDTH_IN * dpi) as u32,
        height: round_half_up(A4_HEIGHT_IN * dpi) as u32,
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn dims() -> impl Strategy<Value = (u32, u32, u32, u32)> {
        (1u32..=5000, 1u32..=5000, 1u32..=5000, 1u32..=5000)
    }

    proptest! {
        /// Property: contain never exceeds the target and stays inside it.
        #[test]
        fn prop_contain_inscribed((sw, sh, tw, th) in dims()) {
            let fit = compute_fit(sw, sh, tw, th, FitMode::Contain);
            prop_assert!(fit.draw_width <= tw);
            prop_assert!(fit.draw_height <= th);
            prop_assert!(fit.offset_x >= 0);
            prop_assert!(fit.offset_y >= 0);
            prop_assert!(fit.offset_x as u32 + fit.draw_width <= tw);
            prop_assert!(fit.offset_y as u32 + fit.draw_height <= th);
        }

        /// Property: cover always fills the target, exactly on one axis.
        #[test]
        fn prop_cover_fills((sw, sh, tw, th) in dims()) {
            let fit = compute_fit(sw, sh, tw, th, FitMode::Cover);
            prop_assert!(fit.draw_width >= tw);
            prop_assert!(fit.draw_height >= th);
            prop_assert!(fit.draw_width == tw || fit.draw_height == th);
            prop_assert!(fit.offset_x <= 0);
            prop_assert!(fit.offset_y <= 0);
        }

        /// Property: the source aspect ratio survives within one pixel.
        #[test]
        fn prop_aspect_preserved(
            (sw, sh, tw, th) in dims(),
            cover in any::<bool>(),
        ) {
            let mode = if cover { FitMode::Cover } else { FitMode::Contain };
            let fit = compute_fit(sw, sh, tw, th, mode);
            let expected_h = fit.draw_width as f64 * sh as f64 / sw as f64;
            let expected_w = fit.draw_height as f64 * sw as f64 / sh as f64;
            prop_assert!(
                (fit.draw_height as f64 - expected_h).abs() <= 1.0
                    || (fit.draw_width as f64 - expected_w).abs() <= 1.0,
                "{}x{} drawn as {}x{}", sw, sh, fit.draw_width, fit.draw_height
            );
        }

        /// Property: page size grows with DPI.
        #[test]
        fn prop_page_size_monotonic(dpi in 1.0f64..1200.0) {
            let lo = compute_page_size_from_dpi(dpi);
            let hi = compute_page_size_from_dpi(dpi + 1.0);
            prop_assert!(hi.width >= lo.width);
            prop_assert!(hi.height > lo.height);
        }
    }
}
