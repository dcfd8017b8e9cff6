//! Image decoding WASM bindings.
//!
//! # Example
//!
//! ```typescript
//! import { decode_image } from '@a4kit/wasm';
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const image = decode_image(bytes);
//! console.log(`Decoded ${image.width}x${image.height}`);
//! ```

use crate::types::{to_js_error, JsBitmap};
use a4kit_core::decode;
use wasm_bindgen::prelude::*;

/// Decode a JPEG, PNG, WebP, GIF or BMP file into an RGBA bitmap.
///
/// EXIF orientation is applied, so the result is upright the way an
/// `<img>` element would show it.
///
/// # Errors
///
/// Returns an error if the bytes are empty, in an unsupported format, or
/// corrupted.
#[wasm_bindgen]
pub fn decode_image(bytes: &[u8]) -> Result<JsBitmap, JsValue> {
    decode::decode_image(bytes)
        .map(JsBitmap::from_bitmap)
        .map_err(to_js_error)
}

/// Read the EXIF orientation tag (1-8, 1 when absent).
#[wasm_bindgen]
pub fn image_orientation(bytes: &[u8]) -> u8 {
    decode::get_orientation(bytes) as u8
}
