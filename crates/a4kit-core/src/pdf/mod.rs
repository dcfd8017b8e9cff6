//! A4 PDF export.
//!
//! This module provides functionality for:
//! - Describing an A4 page (orientation, margin) in millimeters
//! - Contain-fitting an image inside the usable area and centering it
//! - Writing a single-page PDF with the image embedded as a JPEG
//!
//! # Architecture
//!
//! Placement math is pure and lives in [`layout`]. Producing document bytes
//! goes through the [`DocumentBackend`] trait; [`LopdfBackend`] is the
//! default implementation.
//!
//! # Examples
//!
//! ```ignore
//! use a4kit_core::pdf::{build_page, LopdfBackend, PageLayout, PageOrientation};
//!
//! let layout = PageLayout::a4(PageOrientation::Portrait, 10.0);
//! let pdf = build_page(&bitmap, &layout, &LopdfBackend::new())?;
//! ```

mod backend;
mod layout;
mod page;

use thiserror::Error;

use crate::encode::EncodeError;

pub use backend::{DocumentBackend, EmbeddedImage, LopdfBackend, PT_PER_MM};
pub use layout::{
    compute_placement, PageLayout, PageOrientation, PagePlacement, A4_HEIGHT_MM, A4_WIDTH_MM,
    MIN_USABLE_MM,
};
pub use page::build_page;

/// Errors that can occur while producing a PDF.
#[derive(Debug, Error)]
pub enum PdfError {
    /// The page image could not be encoded.
    #[error(transparent)]
    Encode(#[from] EncodeError),

    /// Nothing to place on the page.
    #[error("Cannot build a PDF from an empty image")]
    EmptyImage,

    /// The document backend failed.
    #[error("PDF generation failed: {0}")]
    Document(String),
}
