//! Blue filter WASM bindings.
//!
//! # Example
//!
//! ```typescript
//! import { apply_blue_filter, apply_blue_filter_in_place } from '@a4kit/wasm';
//!
//! const blue = apply_blue_filter(image, 50, "shift");
//!
//! // Or straight on a canvas
//! const data = ctx.getImageData(0, 0, w, h);
//! apply_blue_filter_in_place(data.data, 70, "tint");
//! ctx.putImageData(data, 0, 0);
//! ```

use crate::types::{options_or_default, JsBitmap};
use a4kit_core::filter::{
    apply_color_transform, apply_color_transform_in_place, BlueMode, ColorTransformRequest,
};
use wasm_bindgen::prelude::*;

/// Apply the blue filter to a copy of `image`.
///
/// # Arguments
///
/// * `strength` - 0 to 100, clamped
/// * `mode` - `"shift"` or `"tint"`; omitted means shift
#[wasm_bindgen]
pub fn apply_blue_filter(
    image: &JsBitmap,
    strength: f64,
    mode: JsValue,
) -> Result<JsBitmap, JsValue> {
    let request = ColorTransformRequest::new(strength, options_or_default::<BlueMode>(mode)?);
    Ok(filter_copy(image, request))
}

/// Apply the blue filter directly to RGBA bytes, e.g. `ImageData.data`.
#[wasm_bindgen]
pub fn apply_blue_filter_in_place(
    pixels: &mut [u8],
    strength: f64,
    mode: JsValue,
) -> Result<(), JsValue> {
    let request = ColorTransformRequest::new(strength, options_or_default::<BlueMode>(mode)?);
    apply_color_transform_in_place(pixels, request);
    Ok(())
}

fn filter_copy(image: &JsBitmap, request: ColorTransformRequest) -> JsBitmap {
    JsBitmap::from_bitmap(apply_color_transform(image.as_bitmap().clone(), request))
}
