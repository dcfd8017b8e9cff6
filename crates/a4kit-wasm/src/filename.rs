//! File name and size helpers for the page.

use a4kit_core::filename;
use wasm_bindgen::prelude::*;

/// Safe base for export names: `"My Photo!!.JPG"` gives `"My_Photo"`.
#[wasm_bindgen]
pub fn safe_base_name(file_name: &str) -> String {
    filename::base_name(file_name)
}

/// Human-readable size, e.g. `"1.50 KB"`.
///
/// Takes a JS number; non-finite or negative input gives an empty string.
#[wasm_bindgen]
pub fn format_bytes(bytes: f64) -> String {
    if !bytes.is_finite() || bytes < 0.0 {
        return String::new();
    }
    filename::format_bytes(bytes as u64)
}
