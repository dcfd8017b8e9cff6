//! WASM-compatible wrapper types.
//!
//! This module provides JavaScript-friendly types that wrap the core A4Kit
//! types, handling the conversion between Rust and JavaScript data
//! representations.

use a4kit_core::decode::Bitmap;
use a4kit_core::encode::ExportFile;
use serde::de::DeserializeOwned;
use wasm_bindgen::prelude::*;

/// An RGBA bitmap for JavaScript.
///
/// # Memory Management
///
/// The pixel data lives in WASM memory. `pixels()` copies it into a
/// `Uint8Array`, which can be wrapped in `ImageData` to paint a canvas.
///
/// `free()` releases the WASM memory early; wasm-bindgen's finalizer
/// handles it otherwise.
#[wasm_bindgen]
pub struct JsBitmap {
    inner: Bitmap,
}

#[wasm_bindgen]
impl JsBitmap {
    /// Wrap RGBA pixel data (4 bytes per pixel, row-major order).
    ///
    /// The length is not checked here; operations that need a consistent
    /// buffer report the mismatch as an error.
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> JsBitmap {
        JsBitmap {
            inner: Bitmap {
                width,
                height,
                pixels,
            },
        }
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Number of bytes in the pixel buffer (width * height * 4)
    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.inner.byte_size()
    }

    /// Returns RGBA pixel data as a Uint8Array copy.
    pub fn pixels(&self) -> Vec<u8> {
        self.inner.pixels.clone()
    }

    /// Explicitly free WASM memory.
    pub fn free(self) {}
}

impl JsBitmap {
    pub(crate) fn from_bitmap(bitmap: Bitmap) -> Self {
        Self { inner: bitmap }
    }

    pub(crate) fn as_bitmap(&self) -> &Bitmap {
        &self.inner
    }
}

/// A finished export for JavaScript to save.
///
/// # Example
///
/// ```typescript
/// const file = session.exportPdf({ orientation: "portrait", margin_mm: 10 });
/// if (file) {
///   const blob = new Blob(file.blob_parts(), { type: file.mime_type });
///   const a = document.createElement("a");
///   a.href = URL.createObjectURL(blob);
///   a.download = file.file_name;
///   a.click();
/// }
/// ```
#[wasm_bindgen]
pub struct JsExportFile {
    inner: ExportFile,
}

#[wasm_bindgen]
impl JsExportFile {
    /// Suggested download name, e.g. `holiday_A4.pdf`
    #[wasm_bindgen(getter)]
    pub fn file_name(&self) -> String {
        self.inner.file_name.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn mime_type(&self) -> String {
        self.inner.mime_type.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.inner.len()
    }

    /// Encoded file bytes as a Uint8Array copy.
    pub fn bytes(&self) -> Vec<u8> {
        self.inner.bytes.clone()
    }

    /// A one-element array ready for the `Blob` constructor.
    pub fn blob_parts(&self) -> js_sys::Array {
        let data = js_sys::Uint8Array::from(self.inner.bytes.as_slice());
        js_sys::Array::of1(&data)
    }
}

impl JsExportFile {
    pub(crate) fn from_export(file: ExportFile) -> Self {
        Self { inner: file }
    }
}

/// Error conversion used by every binding.
pub(crate) fn to_js_error<E: std::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Deserialize an options object, using the defaults for `undefined`/`null`.
///
/// Missing fields also take their defaults.
pub(crate) fn options_or_default<T>(value: JsValue) -> Result<T, JsValue>
where
    T: DeserializeOwned + Default,
{
    if value.is_undefined() || value.is_null() {
        return Ok(T::default());
    }
    serde_wasm_bindgen::from_value(value)
        .map_err(|e| JsValue::from_str(&format!("Invalid options: {}", e)))
}


#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use a4kit_core::session::PdfOptions;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_blob_parts() {
        let file = ExportFile::new("x.pdf", "application/pdf", vec![1, 2, 3]).unwrap();
        let parts = JsExportFile::from_export(file).blob_parts();
        assert_eq!(parts.length(), 1);

        let data = js_sys::Uint8Array::new(&parts.get(0));
        assert_eq!(data.to_vec(), vec![1, 2, 3]);
    }

    #[wasm_bindgen_test]
    fn test_options_default_on_undefined() {
        let options: PdfOptions = options_or_default(JsValue::UNDEFINED).unwrap();
        assert_eq!(options, PdfOptions::default());
    }

    #[wasm_bindgen_test]
    fn test_options_rejects_wrong_type() {
        let result: Result<PdfOptions, _> = options_or_default(JsValue::from_f64(3.0));
        assert!(result.is_err());
    }
}
