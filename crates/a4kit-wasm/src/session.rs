//! Session bindings: one `JsSession` per page.
//!
//! # Example
//!
//! ```typescript
//! import init, { JsSession } from '@a4kit/wasm';
//!
//! await init();
//! const session = new JsSession();
//!
//! input.addEventListener("change", async () => {
//!   const file = input.files[0];
//!   try {
//!     session.load(file.name, new Uint8Array(await file.arrayBuffer()));
//!   } catch (e) {
//!     console.error(e);
//!   }
//!   status.textContent = session.status;
//!   buttons.forEach(b => (b.disabled = !session.hasImage()));
//! });
//!
//! pdfButton.onclick = () => {
//!   const file = session.exportPdf({ orientation: "portrait", margin_mm: 10 });
//!   if (file) save(file);
//! };
//! ```

use crate::types::{options_or_default, to_js_error, JsBitmap, JsExportFile};
use a4kit_core::pdf::LopdfBackend;
use a4kit_core::session::{A4Options, BlueOptions, PdfOptions, Session};
use wasm_bindgen::prelude::*;

/// The loaded photo and tool state.
///
/// Every export returns `undefined` when no image is loaded.
#[wasm_bindgen]
#[derive(Default)]
pub struct JsSession {
    inner: Session,
    backend: LopdfBackend,
}

#[wasm_bindgen]
impl JsSession {
    #[wasm_bindgen(constructor)]
    pub fn new() -> JsSession {
        JsSession::default()
    }

    /// Decode and select a photo.
    ///
    /// # Errors
    ///
    /// Throws if the file cannot be decoded; the session is then empty and
    /// `status` says so.
    pub fn load(&mut self, file_name: &str, bytes: &[u8]) -> Result<(), JsValue> {
        self.inner
            .load(file_name, bytes)
            .map(|_| ())
            .map_err(to_js_error)
    }

    /// Whether the export buttons should be enabled.
    #[wasm_bindgen(js_name = hasImage)]
    pub fn has_image(&self) -> bool {
        self.inner.has_image()
    }

    /// Status line, e.g. `"Selected: photo.jpg (1.20 MB)"`.
    #[wasm_bindgen(getter)]
    pub fn status(&self) -> String {
        self.inner.status().to_string()
    }

    /// The loaded photo, for the preview.
    pub fn preview(&self) -> Option<JsBitmap> {
        self.inner
            .image()
            .map(|image| JsBitmap::from_bitmap(image.bitmap.clone()))
    }

    /// Export `<base>_A4.pdf`.
    #[wasm_bindgen(js_name = exportPdf)]
    pub fn export_pdf(&self, options: JsValue) -> Result<Option<JsExportFile>, JsValue> {
        let options: PdfOptions = options_or_default(options)?;
        self.inner
            .export_pdf(&options, &self.backend)
            .map(|file| file.map(JsExportFile::from_export))
            .map_err(to_js_error)
    }

    /// Render the A4 canvas for display.
    #[wasm_bindgen(js_name = renderA4)]
    pub fn render_a4(&self, options: JsValue) -> Result<Option<JsBitmap>, JsValue> {
        let options: A4Options = options_or_default(options)?;
        self.inner
            .render_a4(&options)
            .map(|canvas| canvas.map(JsBitmap::from_bitmap))
            .map_err(to_js_error)
    }

    /// Render and export `<base>_A4.png`.
    #[wasm_bindgen(js_name = exportA4Png)]
    pub fn export_a4_png(&self, options: JsValue) -> Result<Option<JsExportFile>, JsValue> {
        let options: A4Options = options_or_default(options)?;
        self.inner
            .export_a4_png(&options)
            .map(|file| file.map(JsExportFile::from_export))
            .map_err(to_js_error)
    }

    /// Apply the blue filter and return the result for display.
    #[wasm_bindgen(js_name = applyBlue)]
    pub fn apply_blue(&mut self, options: JsValue) -> Result<Option<JsBitmap>, JsValue> {
        let options: BlueOptions = options_or_default(options)?;
        Ok(self
            .inner
            .apply_blue(&options)
            .map(|bitmap| JsBitmap::from_bitmap(bitmap.clone())))
    }

    /// Export `<base>_blue.png`, applying the filter first if needed.
    #[wasm_bindgen(js_name = exportBlue)]
    pub fn export_blue(&mut self, options: JsValue) -> Result<Option<JsExportFile>, JsValue> {
        let options: BlueOptions = options_or_default(options)?;
        self.inner
            .export_blue(&options)
            .map(|file| file.map(JsExportFile::from_export))
            .map_err(to_js_error)
    }

    /// Drop the photo and all results.
    pub fn clear(&mut self) {
        self.inner.clear();
    }
}
