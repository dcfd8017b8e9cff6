//! A4 PDF WASM bindings.

use crate::types::{options_or_default, to_js_error, JsBitmap};
use a4kit_core::pdf::{build_page, LopdfBackend, PdfError};
use a4kit_core::session::PdfOptions;
use wasm_bindgen::prelude::*;

/// Build a single-page A4 PDF with `image` centered inside the margins.
///
/// # Arguments
///
/// * `image` - Bitmap to place; embedded as JPEG (quality 0.92)
/// * `options` - `{ orientation: "portrait" | "landscape", margin_mm }`,
///   both optional
///
/// # Example
///
/// ```typescript
/// const pdf = build_a4_pdf(image, { orientation: "landscape", margin_mm: 10 });
/// const blob = new Blob([pdf], { type: "application/pdf" });
/// ```
#[wasm_bindgen]
pub fn build_a4_pdf(image: &JsBitmap, options: JsValue) -> Result<Vec<u8>, JsValue> {
    let options: PdfOptions = options_or_default(options)?;
    build(image, &options).map_err(to_js_error)
}

fn build(image: &JsBitmap, options: &PdfOptions) -> Result<Vec<u8>, PdfError> {
    build_page(image.as_bitmap(), &options.layout(), &LopdfBackend::new())
}


#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_build_a4_pdf_default_options() {
        let image = JsBitmap::new(8, 8, vec![255u8; 8 * 8 * 4]);
        let pdf = build_a4_pdf(&image, JsValue::UNDEFINED).unwrap();
        assert!(pdf.starts_with(b"%PDF-"));
    }

    #[wasm_bindgen_test]
    fn test_build_a4_pdf_bad_orientation() {
        let image = JsBitmap::new(8, 8, vec![255u8; 8 * 8 * 4]);
        let options = js_sys::Object::new();
        js_sys::Reflect::set(&options, &"orientation".into(), &"sideways".into()).unwrap();
        assert!(build_a4_pdf(&image, options.into()).is_err());
    }
}
