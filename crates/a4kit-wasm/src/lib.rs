//! A4Kit WASM - WebAssembly bindings for A4Kit
//!
//! This crate exposes the a4kit-core tools to the JavaScript page.
//!
//! # Module Structure
//!
//! - `session` - `JsSession`, the state behind the three tools
//! - `types` - `JsBitmap` and `JsExportFile` wrappers
//! - `decode` / `encode` - file decoding and PNG/JPEG encoding
//! - `fit` - A4 sizing, contain/cover geometry and rendering
//! - `filter` - the blue filter
//! - `pdf` - single-page A4 PDF export
//! - `filename` - export names and size formatting
//! - `logging` - `tracing` output to the browser console
//!
//! # Usage
//!
//! ```typescript
//! import init, { JsSession } from '@a4kit/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! const session = new JsSession();
//! session.load(file.name, new Uint8Array(await file.arrayBuffer()));
//! const pdf = session.exportPdf({ orientation: "portrait", margin_mm: 0 });
//! ```

use wasm_bindgen::prelude::*;

mod decode;
mod encode;
mod filename;
mod filter;
mod fit;
mod logging;
mod pdf;
mod session;
mod types;

// Re-export public types
pub use decode::{decode_image, image_orientation};
pub use encode::{encode_jpeg, encode_png};
pub use filename::{format_bytes, safe_base_name};
pub use filter::{apply_blue_filter, apply_blue_filter_in_place};
pub use fit::{a4_pixels, compute_fit, render_a4_canvas};
pub use pdf::build_a4_pdf;
pub use session::JsSession;
pub use types::{JsBitmap, JsExportFile};

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    if logging::init() {
        tracing::debug!(version = a4kit_core::VERSION, "a4kit wasm ready");
    }
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
