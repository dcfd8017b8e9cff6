//! Lossless PNG encoding for the A4 raster and blue filter exports.

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};

use super::{validate, EncodeError};
use crate::decode::Bitmap;

/// Encode a bitmap to RGBA PNG bytes.
///
/// # Errors
///
/// Same validation as [`super::encode_jpeg`]: zero-sized or mismatched
/// buffers are rejected before the encoder runs.
pub fn encode_png(bitmap: &Bitmap) -> Result<Vec<u8>, EncodeError> {
    validate(bitmap)?;

    let mut buffer = Vec::new();
    PngEncoder::new(&mut buffer)
        .write_image(
            &bitmap.pixels,
            bitmap.width,
            bitmap.height,
            ExtendedColorType::Rgba8,
        )
        .map_err(|e| EncodeError::EncodingFailed(e.to_string()))?;

    if buffer.is_empty() {
        return Err(EncodeError::EmptyOutput);
    }

    tracing::debug!(
        width = bitmap.width,
        height = bitmap.height,
        bytes = buffer.len(),
        "encoded png"
    );
    Ok(buffer)
}
