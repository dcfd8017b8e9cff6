//! Single-page A4 document assembly.

use super::{compute_placement, DocumentBackend, EmbeddedImage, PageLayout, PdfError};
use crate::decode::Bitmap;
use crate::encode::{encode_jpeg, DEFAULT_JPEG_QUALITY};

/// Build a one-page document with `bitmap` fitted inside the layout's
/// usable area.
///
/// The bitmap is embedded as a JPEG at the default quality, so any alpha
/// is lost.
///
/// # Errors
///
/// * `PdfError::EmptyImage` for a zero-sized bitmap
/// * `PdfError::Encode` if the JPEG encoder fails
/// * whatever the backend reports
pub fn build_page(
    bitmap: &Bitmap,
    layout: &PageLayout,
    backend: &dyn DocumentBackend,
) -> Result<Vec<u8>, PdfError> {
    if bitmap.is_empty() {
        return Err(PdfError::EmptyImage);
    }

    let jpeg = encode_jpeg(bitmap, DEFAULT_JPEG_QUALITY)?;
    let placement = compute_placement(bitmap.width, bitmap.height, layout);

    tracing::debug!(
        orientation = ?layout.orientation,
        margin_mm = layout.effective_margin_mm(),
        x = placement.x,
        y = placement.y,
        width = placement.width,
        height = placement.height,
        "placing image on page"
    );

    let image = EmbeddedImage {
        jpeg,
        width_px: bitmap.width,
        height_px: bitmap.height,
    };
    backend.render(&placement, &image)
}
