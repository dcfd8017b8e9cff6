//! A4 fitting WASM bindings.
//!
//! # Example
//!
//! ```typescript
//! import { a4_pixels, compute_fit, render_a4_canvas } from '@a4kit/wasm';
//!
//! const { width, height } = a4_pixels(300);          // 2481 x 3507
//! const fit = compute_fit(4000, 3000, width, height, "cover");
//! const canvas = render_a4_canvas(image, { dpi: 150, mode: "contain", background: "#ffffff" });
//! ```

use crate::types::{options_or_default, to_js_error, JsBitmap};
use a4kit_core::fit::{self, FitMode};
use a4kit_core::session::A4Options;
use wasm_bindgen::prelude::*;

/// Compute where a `source_w`x`source_h` image lands on a target canvas.
///
/// # Arguments
///
/// * `mode` - `"contain"` or `"cover"`; omitted means contain
///
/// # Returns
///
/// `{ draw_width, draw_height, offset_x, offset_y }`. Offsets are negative
/// in cover mode when the image overflows.
#[wasm_bindgen]
pub fn compute_fit(
    source_w: u32,
    source_h: u32,
    target_w: u32,
    target_h: u32,
    mode: JsValue,
) -> Result<JsValue, JsValue> {
    let mode: FitMode = options_or_default(mode)?;
    let result = fit::compute_fit(source_w, source_h, target_w, target_h, mode);
    serde_wasm_bindgen::to_value(&result).map_err(to_js_error)
}

/// A4 canvas size in pixels for a DPI: `{ width, height }`.
///
/// A DPI of zero or less gives `{ width: 0, height: 0 }`.
#[wasm_bindgen]
pub fn a4_pixels(dpi: f64) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(&fit::compute_page_size_from_dpi(dpi)).map_err(to_js_error)
}

/// Render an image onto an A4 canvas.
///
/// `options` is `{ dpi, mode, background }`; missing fields default to
/// 300 DPI, contain and white. An unparseable background falls back to
/// white.
///
/// # Errors
///
/// Returns an error when the DPI yields an empty canvas or the image buffer
/// is inconsistent.
#[wasm_bindgen]
pub fn render_a4_canvas(image: &JsBitmap, options: JsValue) -> Result<JsBitmap, JsValue> {
    let options: A4Options = options_or_default(options)?;
    render(image, &options).map_err(to_js_error)
}

fn render(image: &JsBitmap, options: &A4Options) -> Result<JsBitmap, fit::RenderError> {
    fit::render_fit(
        image.as_bitmap(),
        options.page_size(),
        options.mode,
        options.background_rgba(),
    )
    .map(JsBitmap::from_bitmap)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_contain() {
        let image = JsBitmap::new(80, 60, vec![255u8; 80 * 60 * 4]);
        let options = A4Options {
            dpi: 20.0,
            ..A4Options::default()
        };

        let canvas = render(&image, &options).unwrap();
        assert_eq!((canvas.width(), canvas.height()), (165, 234));
    }

    #[test]
    fn test_render_zero_dpi() {
        let image = JsBitmap::new(4, 4, vec![0u8; 64]);
        let options = A4Options {
            dpi: 0.0,
            ..A4Options::default()
        };
        assert!(matches!(
            render(&image, &options),
            Err(fit::RenderError::EmptyTarget { .. })
        ));
    }
}
