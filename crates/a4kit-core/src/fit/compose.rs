//! Rasterizing a bitmap onto a fixed-size canvas.
//!
//! The canvas is filled with a solid background, the source is resampled to
//! the fitted size and alpha-composited at the fitted offset. Anything that
//! falls outside the canvas (cover mode) is clipped before resampling, so
//! memory use is bounded by the canvas, not by the overflow.

use image::imageops::{self, FilterType};
use image::{Rgba, RgbaImage};

use super::{compute_fit, FitMode, FitResult, PageSize, RenderError};
use crate::decode::Bitmap;

/// Largest canvas area accepted, in pixels (16384 x 16384, the common
/// browser canvas limit).
pub const MAX_CANVAS_PIXELS: u64 = 16_384 * 16_384;

/// Part of the fitted image that lands on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct VisibleRegion {
    /// Source crop origin and size, in source pixels.
    src_x: u32,
    src_y: u32,
    src_width: u32,
    src_height: u32,
    /// Canvas position and size of the clipped draw rectangle.
    dst_x: u32,
    dst_y: u32,
    dst_width: u32,
    dst_height: u32,
}

/// Clip one axis of the draw rectangle to `[0, target)` and map the visible
/// span back to source pixels. Returns `(src_start, src_len, dst_start, dst_len)`.
fn clip_axis(
    offset: i32,
    draw: u32,
    target: u32,
    source: u32,
) -> Option<(u32, u32, u32, u32)> {
    let start = i64::from(offset).max(0);
    let end = (i64::from(offset) + i64::from(draw)).min(i64::from(target));
    if end <= start {
        return None;
    }

    let scale = f64::from(draw) / f64::from(source);
    let visible_from = (start - i64::from(offset)) as f64;
    let visible_to = (end - i64::from(offset)) as f64;

    let src_start = ((visible_from / scale).floor() as u32).min(source - 1);
    let src_end = ((visible_to / scale).ceil() as u32).clamp(src_start + 1, source);

    Some((
        src_start,
        src_end - src_start,
        start as u32,
        (end - start) as u32,
    ))
}

fn visible_region(
    fit: &FitResult,
    source: (u32, u32),
    target: PageSize,
) -> Option<VisibleRegion> {
    let (src_x, src_width, dst_x, dst_width) =
        clip_axis(fit.offset_x, fit.draw_width, target.width, source.0)?;
    let (src_y, src_height, dst_y, dst_height) =
        clip_axis(fit.offset_y, fit.draw_height, target.height, source.1)?;
    Some(VisibleRegion {
        src_x,
        src_y,
        src_width,
        src_height,
        dst_x,
        dst_y,
        dst_width,
        dst_height,
    })
}

/// Render `source` into a `target`-sized canvas using the given fit mode.
///
/// # Arguments
///
/// * `source` - Decoded RGBA bitmap
/// * `target` - Output canvas size in pixels
/// * `mode` - Contain (letterbox) or cover (fill and clip)
/// * `background` - RGBA fill for the uncovered canvas area
///
/// # Errors
///
/// Returns `RenderError::EmptyTarget` when either target dimension is zero
/// and `RenderError::TargetTooLarge` when the canvas exceeds
/// [`MAX_CANVAS_PIXELS`].
///
/// # Example
///
/// ```
/// use a4kit_core::decode::Bitmap;
/// use a4kit_core::fit::{render_fit, FitMode, PageSize, WHITE};
///
/// let photo = Bitmap::filled(80, 60, [255, 0, 0, 255]);
/// let page = PageSize { width: 124, height: 175 };
/// let canvas = render_fit(&photo, page, FitMode::Contain, WHITE).unwrap();
/// assert_eq!((canvas.width, canvas.height), (124, 175));
/// ```
pub fn render_fit(
    source: &Bitmap,
    target: PageSize,
    mode: FitMode,
    background: [u8; 4],
) -> Result<Bitmap, RenderError> {
    if target.width == 0 || target.height == 0 {
        return Err(RenderError::EmptyTarget {
            width: target.width,
            height: target.height,
        });
    }

    let area = u64::from(target.width) * u64::from(target.height);
    if area > MAX_CANVAS_PIXELS {
        return Err(RenderError::TargetTooLarge {
            width: target.width,
            height: target.height,
            max: MAX_CANVAS_PIXELS,
        });
    }

    let mut canvas = RgbaImage::from_pixel(target.width, target.height, Rgba(background));

    let fit = compute_fit(source.width, source.height, target.width, target.height, mode);
    tracing::debug!(
        ?mode,
        source_width = source.width,
        source_height = source.height,
        target_width = target.width,
        target_height = target.height,
        draw_width = fit.draw_width,
        draw_height = fit.draw_height,
        offset_x = fit.offset_x,
        offset_y = fit.offset_y,
        "fitting bitmap onto canvas"
    );

    if fit.draw_width == 0 || fit.draw_height == 0 {
        return Ok(Bitmap::from_rgba_image(canvas));
    }

    let Some(region) = visible_region(&fit, (source.width, source.height), target) else {
        return Ok(Bitmap::from_rgba_image(canvas));
    };

    let src = source
        .to_rgba_image()
        .ok_or(RenderError::InvalidSource {
            expected: Bitmap::expected_len(source.width, source.height),
            actual: source.pixels.len(),
        })?;

    let cropped = if (region.src_width, region.src_height) == (source.width, source.height) {
        src
    } else {
        imageops::crop_imm(
            &src,
            region.src_x,
            region.src_y,
            region.src_width,
            region.src_height,
        )
        .to_image()
    };

    let scaled = if (region.dst_width, region.dst_height) == cropped.dimensions() {
        cropped
    } else {
        imageops::resize(
            &cropped,
            region.dst_width,
            region.dst_height,
            FilterType::Lanczos3,
        )
    };

    imageops::overlay(
        &mut canvas,
        &scaled,
        i64::from(region.dst_x),
        i64::from(region.dst_y),
    );

    Ok(Bitmap::from_rgba_image(canvas))
}
