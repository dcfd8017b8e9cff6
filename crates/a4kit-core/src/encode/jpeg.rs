//! JPEG encoding for PDF embedding.
//!
//! JPEG has no alpha channel. RGBA input is composited over black before
//! encoding, which is what a canvas does when exporting `image/jpeg`.

use image::codecs::jpeg::JpegEncoder;
use image::{ExtendedColorType, ImageEncoder};

use super::{validate, EncodeError};
use crate::decode::{Bitmap, CHANNELS};

/// Quality used when none (or an unusable one) is supplied.
pub const DEFAULT_JPEG_QUALITY: f64 = 0.92;

/// Map a canvas-style quality in [0, 1] onto the encoder's 1-100 scale.
///
/// Values outside [0, 1] or non-finite fall back to
/// [`DEFAULT_JPEG_QUALITY`].
pub fn quality_to_percent(quality: f64) -> u8 {
    let quality = if quality.is_finite() && (0.0..=1.0).contains(&quality) {
        quality
    } else {
        DEFAULT_JPEG_QUALITY
    };
    ((quality * 100.0).round() as u8).clamp(1, 100)
}

/// Encode a bitmap to JPEG bytes.
///
/// # Arguments
///
/// * `bitmap` - RGBA bitmap (alpha is flattened over black)
/// * `quality` - Canvas-style quality, 0.0 to 1.0 (0.92 is the usual default)
///
/// # Errors
///
/// * `EncodeError::InvalidDimensions` for a zero-sized bitmap
/// * `EncodeError::InvalidPixelData` if the buffer does not match the size
/// * `EncodeError::EncodingFailed` / `EncodeError::EmptyOutput` from the encoder
///
/// # Example
///
/// ```
/// use a4kit_core::decode::Bitmap;
/// use a4kit_core::encode::encode_jpeg;
///
/// let gray = Bitmap::filled(100, 100, [128, 128, 128, 255]);
/// let jpeg = encode_jpeg(&gray, 0.92).unwrap();
///
/// // Verify JPEG magic bytes
/// assert_eq!(&jpeg[0..2], &[0xFF, 0xD8]);
/// ```
pub fn encode_jpeg(bitmap: &Bitmap, quality: f64) -> Result<Vec<u8>, EncodeError> {
    validate(bitmap)?;

    let rgb = flatten_over_black(&bitmap.pixels);
    let mut buffer = Vec::new();

    JpegEncoder::new_with_quality(&mut buffer, quality_to_percent(quality))
        .write_image(&rgb, bitmap.width, bitmap.height, ExtendedColorType::Rgb8)
        .map_err(|e| EncodeError::EncodingFailed(e.to_string()))?;

    if buffer.is_empty() {
        return Err(EncodeError::EmptyOutput);
    }

    tracing::debug!(
        width = bitmap.width,
        height = bitmap.height,
        quality,
        bytes = buffer.len(),
        "encoded jpeg"
    );
    Ok(buffer)
}

/// Drop alpha by compositing over black: `c * a / 255`.
fn flatten_over_black(rgba: &[u8]) -> Vec<u8> {
    let mut rgb = Vec::with_capacity(rgba.len() / CHANNELS * 3);
    for px in rgba.chunks_exact(CHANNELS) {
        let alpha = px[3] as u32;
        if alpha == 255 {
            rgb.extend_from_slice(&px[..3]);
        } else {
            // Rounded integer division
            rgb.extend(px[..3].iter().map(|&c| ((c as u32 * alpha + 127) / 255) as u8));
        }
    }
    rgb
}


// ============================================================================
// Property-Based Tests
// ============================================================================
