//! A4Kit Core - photo to A4 toolkit
//!
//! This crate provides the image processing behind A4Kit's three tools:
//! exporting a photo as an A4 PDF, rasterizing it onto an A4 canvas with
//! contain/cover fitting, and a blue color-grade filter. It has no browser
//! dependencies; `a4kit-wasm` exposes it to JavaScript.

pub mod decode;
pub mod encode;
pub mod filename;
pub mod filter;
pub mod fit;
pub mod pdf;
pub mod session;

pub use decode::{decode_image, Bitmap, DecodeError};
pub use encode::{encode, encode_jpeg, encode_png, EncodeError, ExportFile, ExportFormat};
pub use filename::{base_name, format_bytes};
pub use filter::{apply_color_transform, BlueMode, ColorTransformRequest};
pub use fit::{compute_fit, compute_page_size_from_dpi, render_fit, FitMode, FitResult, PageSize};
pub use pdf::{build_page, compute_placement, DocumentBackend, LopdfBackend, PageLayout};
pub use session::{A4Options, BlueOptions, ExportError, PdfOptions, Session};

/// Crate version, shown in the page footer.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
