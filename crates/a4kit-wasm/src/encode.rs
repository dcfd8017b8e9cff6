//! Image encoding WASM bindings.
//!
//! # Example
//!
//! ```typescript
//! import { encode_png, encode_jpeg } from '@a4kit/wasm';
//!
//! const png = encode_png(canvasBitmap);
//! const jpeg = encode_jpeg(canvasBitmap, 0.92);
//! ```

use crate::types::{to_js_error, JsBitmap};
use a4kit_core::encode::{self, DEFAULT_JPEG_QUALITY};
use wasm_bindgen::prelude::*;

/// Encode a bitmap to PNG bytes (lossless, alpha kept).
///
/// # Errors
///
/// Returns an error if the bitmap is zero-sized or its buffer does not match
/// width * height * 4.
#[wasm_bindgen]
pub fn encode_png(image: &JsBitmap) -> Result<Vec<u8>, JsValue> {
    encode::encode_png(image.as_bitmap()).map_err(to_js_error)
}

/// Encode a bitmap to JPEG bytes.
///
/// # Arguments
///
/// * `image` - RGBA bitmap; transparent areas come out black
/// * `quality` - 0.0 to 1.0 like `canvas.toBlob`. Omitted or out of range
///   means 0.92.
///
/// # Example
///
/// ```typescript
/// const jpeg = encode_jpeg(image);       // 0.92
/// const small = encode_jpeg(image, 0.6);
/// ```
#[wasm_bindgen]
pub fn encode_jpeg(image: &JsBitmap, quality: Option<f64>) -> Result<Vec<u8>, JsValue> {
    encode::encode_jpeg(image.as_bitmap(), quality.unwrap_or(DEFAULT_JPEG_QUALITY))
        .map_err(to_js_error)
}


#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_encode_png_basic() {
        let img = JsBitmap::new(20, 20, vec![200u8; 20 * 20 * 4]);
        let png = encode_png(&img).unwrap();
        assert_eq!(&png[1..4], b"PNG");
    }

    #[wasm_bindgen_test]
    fn test_encode_jpeg_default_quality() {
        let img = JsBitmap::new(20, 20, vec![200u8; 20 * 20 * 4]);
        let jpeg = encode_jpeg(&img, None).unwrap();
        assert_eq!(&jpeg[0..2], &[0xFF, 0xD8]);
    }

    #[wasm_bindgen_test]
    fn test_encode_invalid_pixel_data() {
        let img = JsBitmap::new(100, 100, vec![0u8; 50]);
        assert!(encode_png(&img).is_err());
        assert!(encode_jpeg(&img, Some(0.8)).is_err());
    }

    #[wasm_bindgen_test]
    fn test_encode_zero_dimensions() {
        let img = JsBitmap::new(0, 10, vec![]);
        assert!(encode_png(&img).is_err());
    }
}
